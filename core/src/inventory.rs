use std::fs;
use std::path::PathBuf;
use std::process::Command;

use stroom_env_common::config::InventorySource;
use stroom_env_common::error::InventoryError;
use stroom_env_common::inventory::{Inventory, InventoryClient};
use tracing::debug;

/// Reads the Ansible inventory, either live from `ansible-inventory --list` or from a
/// rendered JSON file.
pub struct AnsibleInventory {
    source: InventorySource,
}

impl AnsibleInventory {
    pub fn new(source: InventorySource) -> Self {
        Self { source }
    }

    fn run_program(program: &str, inventory: Option<&PathBuf>) -> Result<String, InventoryError> {
        let mut cmd = Command::new(program);
        cmd.arg("--list");
        if let Some(inventory) = inventory {
            cmd.arg("-i").arg(inventory);
        }
        debug!(?cmd, "querying inventory");

        let output = cmd.output().map_err(|source| InventoryError::Spawn {
            program: program.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(InventoryError::Command {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl InventoryClient for AnsibleInventory {
    fn get_inventory(&self) -> Result<Inventory, InventoryError> {
        let raw = match &self.source {
            InventorySource::Command { program, inventory } => {
                Self::run_program(program, inventory.as_ref())?
            }
            InventorySource::File(path) => {
                debug!(path = %path.display(), "reading inventory file");
                fs::read_to_string(path).map_err(|source| InventoryError::Read {
                    path: path.clone(),
                    source,
                })?
            }
        };

        Inventory::from_json(&raw)
    }
}
