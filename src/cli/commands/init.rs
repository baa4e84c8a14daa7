use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rPcLogger…");

    let path = Config::init(cli.test)?;

    if cli.test {
        info(format!("Test mode: {} left untouched", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    Ok(())
}
