use std::{str::FromStr, sync::Arc};

use thiserror::Error;

use crate::{PaSimpleError, config::Config, pulse::Connector};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument validation fails, such as missing required
    /// arguments, too many arguments, or values that do not parse.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A stream, WAV or configuration operation failed.
    #[error(transparent)]
    Stream(#[from] PaSimpleError),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return either a success message or a CliError.
pub type CommandResult = Result<String, CliError>;

/// Shared state handed to every command.
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// Connector used to open streams
    pub connector: Arc<dyn Connector + Send + Sync>,
}

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "file", "seconds").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value.
    Number,

    /// A file system path.
    Path,
}

impl ArgType {
    /// Short placeholder shown in help text
    pub fn hint(&self) -> &'static str {
        match self {
            ArgType::String => "text",
            ArgType::Number => "number",
            ArgType::Path => "path",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Single source of truth for help generation and argument count
/// validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "play", "record").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "wav", "stream").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`Command::metadata`]; commands validate values themselves.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values or failed stream
    /// operations.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}

/// Parse an optional positional argument, falling back to `default`
///
/// # Errors
/// Returns `InvalidArguments` naming `name` if the value does not parse
pub fn parse_arg<T: FromStr>(
    args: &[String],
    index: usize,
    name: &str,
    default: T,
) -> Result<T, CliError> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| CliError::InvalidArguments(format!("invalid {name} '{raw}'"))),
        None => Ok(default),
    }
}
