//! WAV file commands.
mod play;
mod record;

use std::sync::Arc;

pub use play::PlayCommand;
pub use record::RecordCommand;

use crate::cli::{CommandRegistry, types::CliContext};

/// Registers the "wav" category.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `context` - Shared configuration and connector
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "wav";

    registry.register_command(CATEGORY_NAME, Box::new(PlayCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(RecordCommand::new(context)));
}
