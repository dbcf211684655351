//! HTML sanitization and the pre-trusted HTML type.

use std::fmt;

/// HTML that has passed through a [`Sanitizer`].
///
/// The only way to obtain one is [`Sanitizer::sanitize`], so anything holding a
/// `SanitizedHtml` can embed it verbatim without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips scripts, event handler attributes, disallowed tags and unsafe URL
/// schemes using the user-generated-content policy.
pub struct Sanitizer {
    policy: ammonia::Builder<'static>,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            policy: ammonia::Builder::default(),
        }
    }

    pub fn sanitize(&self, html: &str) -> SanitizedHtml {
        SanitizedHtml(self.policy.clean(html).to_string())
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sanitizer").finish_non_exhaustive()
    }
}
