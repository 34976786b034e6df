mod commands;
mod terminal;

use commands::{CommandLine, update};
use stroom_env_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config::from_env();

    update::update(&commands.stack_path, &cfg)
}
