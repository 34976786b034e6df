//! Application service and driven adapters for `update_env_file`.
//!
//! * [`updater::EnvFileUpdater`]: the one use case, rewriting the `HOST_IP` line of a stack's env file.
//! * [`inventory::AnsibleInventory`]: fetches the inventory from `ansible-inventory` or a JSON file.
//! * [`editor::FsLineEditor`]: applies line edits to files on disk.

pub mod editor;
pub mod inventory;
pub mod updater;
