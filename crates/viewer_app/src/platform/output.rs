use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_PAGE_FILE: &str = "./viewer.html";

#[derive(Debug, Error)]
pub enum PageWriteError {
    #[error("page path has no parent directory: {0}")]
    NoParent(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the rendered page by replacing the target file in one rename, so a
/// browser reloading it never sees a half-written page.
pub struct PageWriter {
    target: PathBuf,
}

impl PageWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write(&self, page: &str) -> Result<(), PageWriteError> {
        let dir = match self.target.parent() {
            Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
            Some(dir) => dir,
            None => return Err(PageWriteError::NoParent(self.target.clone())),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(page.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.target)
            .map_err(|e| PageWriteError::Io(e.error))?;
        Ok(())
    }
}
