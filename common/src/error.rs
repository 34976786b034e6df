use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

/// Failures while fetching the inventory or resolving the service FQDN from it.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to run inventory program '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("inventory program '{program}' failed ({status}): {stderr}")]
    Command {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("failed to read inventory file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("inventory is not a valid JSON document")]
    Parse(#[from] serde_json::Error),
    #[error("inventory has no group named '{0}'")]
    GroupNotFound(String),
    #[error("inventory group '{0}' contains no hosts")]
    NoHosts(String),
}

/// Failures while reading or rewriting the env file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("env file {} does not exist", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to {action} env file {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Classifies an I/O error, keeping a missing file apart from every other failure.
    pub fn from_io(action: &'static str, path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            _ => Self::Io {
                action,
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    File(#[from] FileError),
}
