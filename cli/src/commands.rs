pub mod update;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "update_env_file", version)]
#[command(about = "Point HOST_IP in a stroom stack's env file at the host from the inventory.")]
pub struct CommandLine {
    /// Root directory of the deployed stack
    #[arg(value_name = "PATH_TO_STACK")]
    pub stack_path: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
