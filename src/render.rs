//! Markdown to HTML rendering.

use crate::error::{Error, Result};

/// Renders Markdown with GitHub Flavored Markdown extensions.
///
/// Raw HTML in the source is passed through untouched. The output is never
/// safe to embed on its own; it must go through [`crate::Sanitizer`] first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    fn options() -> markdown::Options {
        markdown::Options {
            compile: markdown::CompileOptions {
                allow_dangerous_html: true,
                gfm_tagfilter: false,
                ..markdown::CompileOptions::gfm()
            },
            ..markdown::Options::gfm()
        }
    }

    /// Renders `input` to HTML.
    ///
    /// Input that is not valid UTF-8 is decoded lossily so that a stray byte
    /// does not stop the preview.
    pub fn render(&self, input: &[u8]) -> Result<String> {
        let source = String::from_utf8_lossy(input);
        markdown::to_html_with_options(&source, &Self::options())
            .map_err(|e| Error::Render(e.to_string()))
    }
}
