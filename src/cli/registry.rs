use std::{collections::HashMap, sync::Arc};

use super::{
    CliError, Command,
    commands::{format, stream, wav},
    formatting::{
        format_category, format_command, format_description, format_header, format_usage,
    },
    types::{CliContext, CommandMetadata},
};

/// Registry for CLI commands organized by category.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── wav
/// │   ├── play
/// │   └── record
/// ├── stream
/// │   ├── echo
/// │   └── latency
/// └── format
///     └── list
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CliContext>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self {
            categories: HashMap::new(),
            context,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is used as its key; an existing command
    /// with the same name is replaced.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command does not
    /// exist, `CliError::InvalidArguments` if the argument count is wrong.
    /// Other errors come from the command itself.
    pub fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args)
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Renders usage text for every registered command.
    pub fn help_text(&self) -> String {
        let mut out = format_header("Usage: pasimple <category> <command> [args...]");
        out.push('\n');

        for (category, commands) in self.list_commands() {
            out.push('\n');
            out.push_str(&format_category(&category));
            out.push('\n');

            for name in commands {
                let Some(command) = self.categories.get(&category).and_then(|c| c.get(&name))
                else {
                    continue;
                };
                let metadata = command.metadata();
                let args: Vec<String> = metadata
                    .args
                    .iter()
                    .map(|arg| {
                        let hint = arg.value_type.hint();
                        if arg.required {
                            format!("<{}:{hint}>", arg.name)
                        } else {
                            format!("[{}:{hint}]", arg.name)
                        }
                    })
                    .collect();

                out.push_str(&format!(
                    "  {} {}  {}\n",
                    format_command(&metadata.name),
                    args.join(" "),
                    format_description(&metadata.description)
                ));
                if let Some(example) = metadata.examples.first() {
                    out.push_str(&format!("      {}\n", format_usage(example)));
                }
            }
        }

        out
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let context = self.context.clone();
        wav::register_commands(self, context.clone());
        stream::register_commands(self, context);
        format::register_commands(self);
    }
}
