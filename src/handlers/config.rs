//! Handler for the `config` command.

use crate::cli::ConfigCommand;
use crate::config::{save_global_config, types::Config};
use crate::error::{ConfigError, Result};

pub fn handle_config(command: &ConfigCommand, config: &Config) -> Result<String> {
    match command {
        ConfigCommand::Show => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
        }
        ConfigCommand::Init { force } => {
            let path = save_global_config(&Config::default(), *force)?;
            Ok(format!("Wrote default configuration to {}", path.display()))
        }
    }
}
