use std::path::PathBuf;

pub const INVENTORY_JSON_VAR: &str = "STROOM_INVENTORY_JSON";
pub const INVENTORY_PROGRAM_VAR: &str = "STROOM_INVENTORY_PROGRAM";
pub const INVENTORY_VAR: &str = "STROOM_INVENTORY";
pub const SERVICE_GROUP_VAR: &str = "STROOM_SERVICE_GROUP";

pub const DEFAULT_INVENTORY_PROGRAM: &str = "ansible-inventory";
pub const DEFAULT_SERVICE_GROUP: &str = "stroom_services";

/// Where the inventory document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    /// Run `program --list`, optionally with `-i inventory`, and parse its stdout.
    Command {
        program: String,
        inventory: Option<PathBuf>,
    },
    /// Read an inventory document that was rendered ahead of time.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inventory: InventorySource,
    /// Inventory group whose first host becomes the `HOST_IP` value.
    ///
    /// Child groups are searched when the group has no direct hosts.
    pub service_group: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory: InventorySource::Command {
                program: DEFAULT_INVENTORY_PROGRAM.to_string(),
                inventory: None,
            },
            service_group: DEFAULT_SERVICE_GROUP.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let inventory = match get(INVENTORY_JSON_VAR) {
            Some(path) => InventorySource::File(PathBuf::from(path)),
            None => InventorySource::Command {
                program: get(INVENTORY_PROGRAM_VAR)
                    .unwrap_or_else(|| DEFAULT_INVENTORY_PROGRAM.to_string()),
                inventory: get(INVENTORY_VAR).map(PathBuf::from),
            },
        };

        Self {
            inventory,
            service_group: get(SERVICE_GROUP_VAR)
                .unwrap_or_else(|| DEFAULT_SERVICE_GROUP.to_string()),
        }
    }
}
