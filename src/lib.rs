//! Convert a Markdown file into a sanitized HTML document and preview it.
//!
//! The stages run in a fixed order: [`Renderer`] → [`Sanitizer`] →
//! [`Template`], driven by [`Pipeline`]. The result is written by
//! [`Materializer`] and opened by [`Previewer`].

pub mod error;
pub mod materialize;
pub mod pipeline;
pub mod preview;
pub mod render;
pub mod sanitize;
pub mod template;

pub use error::{Error, Result};
pub use materialize::{Materializer, TempHtml, TEMP_PREFIX};
pub use pipeline::Pipeline;
pub use preview::{Launcher, Platform, Previewer, DEFAULT_SETTLE_DELAY};
pub use render::Renderer;
pub use sanitize::{SanitizedHtml, Sanitizer};
pub use template::{DocumentContent, Template, DEFAULT_TITLE};
