//! Markdown → HTML → sanitized HTML → templated document.

use std::path::Path;

use crate::error::Result;
use crate::render::Renderer;
use crate::sanitize::Sanitizer;
use crate::template::{DocumentContent, Template, DEFAULT_TITLE};

#[derive(Debug)]
pub struct Pipeline {
    renderer: Renderer,
    sanitizer: Sanitizer,
    default_template: Template,
    title: String,
}

impl Pipeline {
    /// Creates a pipeline that falls back to `default_template` when no
    /// override is given.
    pub fn new(default_template: Template) -> Self {
        Self {
            renderer: Renderer::new(),
            sanitizer: Sanitizer::new(),
            default_template,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Converts raw Markdown into a complete HTML document.
    ///
    /// `template_override`, when set, replaces the default template entirely.
    pub fn convert(
        &self,
        raw_markdown: &[u8],
        template_override: Option<&Path>,
    ) -> Result<Vec<u8>> {
        let html = self.renderer.render(raw_markdown)?;
        let body = self.sanitizer.sanitize(&html);
        tracing::debug!(
            rendered = html.len(),
            sanitized = body.as_str().len(),
            "rendered and sanitized markdown"
        );

        let custom;
        let template = match template_override {
            Some(path) => {
                custom = Template::load(path)?;
                &custom
            }
            None => &self.default_template,
        };

        let content = DocumentContent::new(self.title.clone(), body);
        let document = template.render(&content)?;
        tracing::debug!(
            template = template.name(),
            bytes = document.len(),
            "executed template"
        );
        Ok(document.into_bytes())
    }
}
