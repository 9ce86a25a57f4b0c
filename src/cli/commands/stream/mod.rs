//! Live stream commands.
mod echo;
mod latency;

use std::sync::Arc;

pub use echo::EchoCommand;
pub use latency::LatencyCommand;

use crate::cli::{CommandRegistry, types::CliContext};

/// Registers the "stream" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "stream";

    registry.register_command(CATEGORY_NAME, Box::new(EchoCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(LatencyCommand::new(context)));
}
