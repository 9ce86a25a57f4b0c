use std::sync::Arc;

use crate::{
    config::Config,
    pulse::{Connector, PulseConnector},
};

use super::{CliError, CommandRegistry, types::CliContext};

/// High-level service for managing and executing CLI commands.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a CLI service that talks to the PulseAudio server.
    pub fn new(config: Config) -> Self {
        Self::with_connector(config, Arc::new(PulseConnector))
    }

    /// Creates a CLI service that opens streams through `connector`.
    pub fn with_connector(config: Config, connector: Arc<dyn Connector + Send + Sync>) -> Self {
        let context = Arc::new(CliContext { config, connector });
        let mut registry = CommandRegistry::new(context);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// The `help` category (or no category at all) renders usage text.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Returns other `CliError` variants if the command fails during execution.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match category {
            "help" | "--help" | "-h" | "" => Ok(self.registry.help_text()),
            _ => self.registry.execute(category, command_name, args),
        }
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }
}
