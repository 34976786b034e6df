//! # Env File Update Service
//!
//! Implements the "refresh `HOST_IP`" use case.
//!
//! The service resolves the stack's env file, asks the inventory which host serves the
//! stack and leaves exactly one `export HOST_IP=<fqdn>` line at the top of the file.

use std::path::{Path, PathBuf};

use stroom_env_common::env_file::{ExportLine, LineEditor};
use stroom_env_common::error::{FileError, UpdateError};
use stroom_env_common::inventory::InventoryClient;
use tracing::{debug, info};

/// Location of the env file relative to the stack root.
const ENV_FILE_SEGMENTS: [&str; 3] = ["latest", "config", "stroom_core.env"];

/// Outcome of a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub path: PathBuf,
    pub line: ExportLine,
    /// Stale `HOST_IP` declarations dropped before the new one was written.
    pub removed: usize,
}

/// Application Service for the env file update.
///
/// Orchestrates the update by:
/// 1. fetching the inventory through the [`InventoryClient`] port.
/// 2. resolving the FQDN of the configured service group.
/// 3. removing and then prepending the export line through the [`LineEditor`] port.
pub struct EnvFileUpdater {
    inventory: Box<dyn InventoryClient>,
    editor: Box<dyn LineEditor>,
    service_group: String,
}

impl EnvFileUpdater {
    pub fn new(
        inventory: Box<dyn InventoryClient>,
        editor: Box<dyn LineEditor>,
        service_group: impl Into<String>,
    ) -> Self {
        Self {
            inventory,
            editor,
            service_group: service_group.into(),
        }
    }

    /// `<stack_path>/latest/config/stroom_core.env`. Existence is not checked.
    pub fn resolve_target_path(stack_path: &Path) -> PathBuf {
        ENV_FILE_SEGMENTS
            .iter()
            .fold(stack_path.to_path_buf(), |path, segment| path.join(segment))
    }

    pub fn remove_export_line(&self, path: &Path, prefix: &str) -> Result<usize, FileError> {
        self.editor.remove_lines_with_prefix(path, prefix)
    }

    pub fn prepend_line(&self, path: &Path, line: &str) -> Result<(), FileError> {
        self.editor.prepend_line(path, line)
    }

    /// Runs the whole update against the stack rooted at `stack_path`.
    ///
    /// The file is only touched once the FQDN is known, and the first failure stops the run.
    pub fn run(&self, stack_path: &Path) -> Result<UpdateReport, UpdateError> {
        let path = Self::resolve_target_path(stack_path);
        debug!(path = %path.display(), "target env file");

        let inventory = self.inventory.get_inventory()?;
        let fqdn = inventory.service_fqdn(&self.service_group)?;

        let line = ExportLine::host_ip(&fqdn);
        let removed = self.remove_export_line(&path, &line.prefix())?;
        debug!(removed, "removed stale {} declarations", line.name());

        self.prepend_line(&path, &line.to_string())?;
        info!(path = %path.display(), "{line}");

        Ok(UpdateReport {
            path,
            line,
            removed,
        })
    }
}
