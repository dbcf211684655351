//! Document templates.
//!
//! A template sees exactly two variables: `title`, which is escaped here, and
//! `body`, which is sanitized HTML and is emitted verbatim. Autoescaping in the
//! engine is turned off so neither value is escaped a second time.

use std::fs;
use std::path::Path;

use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::sanitize::SanitizedHtml;

/// Title placed in every generated document.
pub const DEFAULT_TITLE: &str = "Markdown Preview Tool";

const BUILTIN_NAME: &str = "builtin";

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ title }}</title>
    <style>
        html, body {
            overflow-x: hidden;
        }
        @media (prefers-color-scheme: dark) {
            body {
                color: #fafafa;
                background-color: #000;
            }
            :link, :visited, :visited:active {
                color: #2f81f7;
            }
        }
        body {
            position: relative;
            box-sizing: border-box;
            -webkit-box-sizing: border-box;
            -moz-box-sizing: border-box;
        }
        pre {
            overflow-x: scroll;
        }
        img {
            max-width: 100%;
        }
    </style>
</head>
<body>
{{ body }}
</body>
</html>
"#;

/// The values substituted into a template.
#[derive(Debug, Clone)]
pub struct DocumentContent {
    pub title: String,
    pub body: SanitizedHtml,
}

impl DocumentContent {
    pub fn new(title: impl Into<String>, body: SanitizedHtml) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    fn to_context(&self) -> Context {
        let mut ctx = Context::new();
        ctx.insert("title", &html_escape::encode_safe(&self.title));
        ctx.insert("body", self.body.as_str());
        ctx
    }
}

/// A parsed document template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    tera: Tera,
}

impl Template {
    /// The built-in HTML5 document.
    pub fn builtin() -> Result<Self> {
        Self::from_source(BUILTIN_NAME, DEFAULT_TEMPLATE)
    }

    /// Parses `source` as a template. `name` is used in error messages.
    pub fn from_source(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_template(&name, source)
            .map_err(|source| Error::TemplateLoad {
                origin: name.clone(),
                source: Box::new(source),
            })?;
        Ok(Self { name, tera })
    }

    /// Reads and parses the template file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let source = fs::read_to_string(path).map_err(|source| Error::TemplateLoad {
            origin: origin.clone(),
            source: Box::new(source),
        })?;
        tracing::debug!(template = %origin, "loaded custom template");
        Self::from_source(origin, &source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, content: &DocumentContent) -> Result<String> {
        self.tera
            .render(&self.name, &content.to_context())
            .map_err(|source| Error::TemplateExec {
                name: self.name.clone(),
                source,
            })
    }
}
