use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to create temporary file: {0}")]
    Create(std::io::Error),

    #[error("unable to write temporary file: {0}")]
    Write(std::io::Error),
}

/// Temporary file pre-filled with text, deleted when the value is dropped.
///
/// The path stays valid for the lifetime of the value.
pub struct TempTextFile {
    file: NamedTempFile,
}

impl TempTextFile {
    /// Creates an empty temporary file.
    pub fn new() -> Result<Self, Error> {
        let file = NamedTempFile::new().map_err(Error::Create)?;

        Ok(Self { file })
    }

    /// Creates a temporary file containing the given text, flushed before the
    /// path is handed out.
    pub fn with_content(data: &str) -> Result<Self, Error> {
        let mut file = NamedTempFile::new().map_err(Error::Create)?;
        file.write_all(data.as_bytes()).map_err(Error::Write)?;
        file.flush().map_err(Error::Write)?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
