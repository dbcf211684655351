use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write temporary file")]
    Write(#[source] std::io::Error),
    #[error("failed to render markdown: {0}")]
    Render(String),
    #[error("failed to load template `{origin}`")]
    TemplateLoad {
        origin: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to execute template `{name}`")]
    TemplateExec {
        name: String,
        #[source]
        source: tera::Error,
    },
    #[error("OS not supported: {0}")]
    UnsupportedPlatform(String),
    #[error("launcher `{program}` not found")]
    LauncherNotFound {
        program: &'static str,
        #[source]
        source: which::Error,
    },
    #[error("failed to run launcher `{program}`")]
    Launch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("launcher `{program}` exited with {status}")]
    LauncherFailed {
        program: &'static str,
        status: ExitStatus,
    },
}
