//! Sample format commands.
mod list;

pub use list::ListCommand;

use crate::cli::CommandRegistry;

/// Registers the "format" category.
pub fn register_commands(registry: &mut CommandRegistry) {
    registry.register_command("format", Box::new(ListCommand));
}
