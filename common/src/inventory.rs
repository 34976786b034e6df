//! # Inventory Model
//!
//! The inventory is the JSON document printed by `ansible-inventory --list`:
//!
//! ```json
//! {
//!   "_meta": { "hostvars": {} },
//!   "all": { "children": ["ungrouped", "stroom_services"] },
//!   "stroom_services": { "hosts": ["node1.cluster.local"] }
//! }
//! ```
//!
//! Only group membership is read. Host variables are ignored.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Deserialize;
use tracing::debug;

use crate::error::InventoryError;

const META_KEY: &str = "_meta";

/// The resolved name of a host. Treated as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostFqdn(String);

impl HostFqdn {
    pub fn new(fqdn: impl Into<String>) -> Self {
        Self(fqdn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostFqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Group {
    #[serde(default)]
    hosts: Vec<String>,
    #[serde(default)]
    children: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    groups: HashMap<String, Group>,
}

impl Inventory {
    pub fn from_json(raw: &str) -> Result<Self, InventoryError> {
        let mut groups: HashMap<String, Group> = serde_json::from_str(raw)?;
        groups.remove(META_KEY);
        Ok(Self { groups })
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Returns the FQDN of the host serving `group`.
    ///
    /// That is the group's first direct host or, failing that, the first host found
    /// walking its children depth-first in declaration order.
    pub fn service_fqdn(&self, group: &str) -> Result<HostFqdn, InventoryError> {
        let (name, _) = self
            .groups
            .get_key_value(group)
            .ok_or_else(|| InventoryError::GroupNotFound(group.to_string()))?;

        let mut visited: HashSet<&str> = HashSet::new();
        let host = self
            .first_host(name, &mut visited)
            .ok_or_else(|| InventoryError::NoHosts(group.to_string()))?;

        debug!(group, host, "resolved service host");
        Ok(HostFqdn::new(host))
    }

    fn first_host<'a>(&'a self, name: &'a str, visited: &mut HashSet<&'a str>) -> Option<&'a str> {
        // groups may list each other as children
        if !visited.insert(name) {
            return None;
        }

        let group = self.groups.get(name)?;
        if let Some(host) = group.hosts.first() {
            return Some(host.as_str());
        }

        group
            .children
            .iter()
            .find_map(|child| self.first_host(child, visited))
    }
}

/// Source of the host inventory.
pub trait InventoryClient {
    fn get_inventory(&self) -> Result<Inventory, InventoryError>;
}
