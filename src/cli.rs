//! Command-line flags.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "markdown_preview")]
#[command(version, about = "Render a Markdown file to HTML and preview it", long_about = None)]
pub struct Cli {
    /// Markdown file to preview
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Skip auto preview
    #[arg(short = 's')]
    pub skip_preview: bool,

    /// Custom HTML template (empty uses the built-in one)
    #[arg(short = 't', value_name = "PATH", env = "MDP_TEMPLATE")]
    pub template: Option<OsString>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The template override, if a non-empty one was given.
    pub fn template_path(&self) -> Option<&Path> {
        self.template
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(Path::new)
    }
}
