//! Shared building blocks for the `update_env_file` workspace.
//!
//! * [`env_file`]: the export line model, the pure text transforms and the [`env_file::LineEditor`] port.
//! * [`inventory`]: the inventory model, FQDN lookup and the [`inventory::InventoryClient`] port.
//! * [`config`]: runtime configuration taken from the environment.
//! * [`error`]: the error taxonomy shared by every layer.

pub mod config;
pub mod env_file;
pub mod error;
pub mod inventory;
