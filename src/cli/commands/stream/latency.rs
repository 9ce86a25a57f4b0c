use std::sync::Arc;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_field, format_latency, format_subheader},
        types::{ArgType, CliContext, CommandArg, CommandMetadata, parse_arg},
    },
    pulse::{Direction, PaSimple},
};

/// Command that opens a stream and reports its attributes and latency.
pub struct LatencyCommand {
    context: Arc<CliContext>,
}

impl LatencyCommand {
    /// Creates a new LatencyCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for LatencyCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let direction = parse_arg(args, 0, "direction", Direction::Playback)?;
        let layout = self.context.config.record;

        let mut stream = PaSimple::open_with(
            self.context.connector.as_ref(),
            direction,
            layout.format,
            layout.channels,
            layout.rate,
            &self.context.config.stream,
        )?;
        let latency = stream.latency()?;
        stream.close()?;

        Ok([
            format_subheader(&format!("{direction} stream")),
            format_field("Direction", stream.direction()),
            format_field("Format", stream.format().description()),
            format_field("Channels", stream.channels()),
            format_field("Rate", format!("{} Hz", stream.rate())),
            format_field("Latency", format_latency(latency)),
        ]
        .join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "latency".to_string(),
            description: "Open a stream and print its latency".to_string(),
            category: "stream".to_string(),
            args: vec![CommandArg {
                name: "direction".to_string(),
                description: "playback (default) or record".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "pasimple stream latency".to_string(),
                "pasimple stream latency record".to_string(),
            ],
        }
    }
}
