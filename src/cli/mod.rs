//! Command-line interface.
//!
//! Commands are organized by category (`wav`, `stream`, `format`) and
//! registered in a [`CommandRegistry`], which also generates help text from
//! each command's metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{
    ArgType, CliContext, CliError, Command, CommandArg, CommandMetadata, CommandResult, parse_arg,
};
