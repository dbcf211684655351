//! Writes finished documents to uniquely named temporary files.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::error::{Error, Result};

/// Every generated file name starts with this prefix.
pub const TEMP_PREFIX: &str = "mdp";

const TEMP_SUFFIX: &str = ".html";

/// A written temporary HTML file.
///
/// The file is deleted when this value is dropped unless [`TempHtml::keep`]
/// was called.
#[derive(Debug)]
pub struct TempHtml {
    path: TempPath,
}

impl TempHtml {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stops the file from being deleted and returns its path.
    pub fn keep(self) -> Result<PathBuf> {
        self.path.keep().map_err(|e| Error::Write(e.error))
    }

    /// Deletes the file now, reporting any failure.
    pub fn close(self) -> Result<()> {
        self.path.close().map_err(Error::Write)
    }
}

#[derive(Debug, Clone)]
pub struct Materializer {
    dir: PathBuf,
}

impl Materializer {
    /// Writes into the platform temp directory.
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a fresh `mdp*.html` file, writes `content` into it and closes it.
    pub fn write_temp(&self, content: &[u8]) -> Result<TempHtml> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.dir)
            .map_err(Error::Write)?;
        file.write_all(content).map_err(Error::Write)?;
        file.flush().map_err(Error::Write)?;

        let path = file.into_temp_path();
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote temporary file");
        Ok(TempHtml { path })
    }
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}
