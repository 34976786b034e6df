use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use stroom_env_common::env_file::{self, LineEditor};
use stroom_env_common::error::FileError;

/// [`LineEditor`] backed by the local filesystem.
///
/// Rewrites truncate the file in place. A crash mid-write can leave it partially written.
pub struct FsLineEditor;

fn read(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| FileError::from_io("read", path, e))
}

fn write(path: &Path, content: &str) -> Result<(), FileError> {
    // never create: the file has to come from the stack deployment
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FileError::from_io("open", path, e))?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| FileError::from_io("write", path, e))
}

impl LineEditor for FsLineEditor {
    fn remove_lines_with_prefix(&self, path: &Path, prefix: &str) -> Result<usize, FileError> {
        let content = read(path)?;
        let (kept, removed) = env_file::strip_lines_with_prefix(&content, prefix);
        write(path, &kept)?;
        Ok(removed)
    }

    fn prepend_line(&self, path: &Path, line: &str) -> Result<(), FileError> {
        let content = read(path)?;
        write(path, &env_file::prepend_line(&content, line))
    }
}
