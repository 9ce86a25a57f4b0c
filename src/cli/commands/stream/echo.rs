use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{info, warn};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CliContext, CommandArg, CommandMetadata, parse_arg},
    },
    pulse::{BufferAttributes, Direction, PaSimple},
};

/// Command that plays back microphone input with a fixed delay until Ctrl+C.
///
/// A full delay worth of audio is recorded up front and queued, then audio is
/// moved from the record stream to the playback stream in small chunks. The
/// playback buffer holds twice the delay so the queued audio is never cut.
/// Use headphones to avoid feedback.
pub struct EchoCommand {
    context: Arc<CliContext>,
}

impl EchoCommand {
    /// Creates a new EchoCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }

    /// Run the echo loop until `running` is cleared.
    ///
    /// Returns the number of chunks moved after the initial delay.
    pub(crate) fn echo(
        &self,
        delay_ms: u32,
        chunk_ms: u32,
        running: &AtomicBool,
    ) -> Result<usize, CliError> {
        if delay_ms == 0 || chunk_ms == 0 || chunk_ms > delay_ms {
            return Err(CliError::InvalidArguments(
                "delay and chunk must be positive and chunk must not exceed delay".to_string(),
            ));
        }

        let layout = self.context.config.record;
        let base = &self.context.config.stream;
        let frame = layout.format.width() * layout.channels as usize;
        let bytes_for = |ms: u32| -> u32 {
            let frames = u64::from(layout.rate) * u64::from(ms) / 1000;
            u32::try_from(frames * frame as u64).unwrap_or(u32::MAX)
        };
        let delay = bytes_for(delay_ms);
        let chunk = bytes_for(chunk_ms);
        let max_length = delay.saturating_mul(2);

        let record_config = base.clone().stream_name("echo-record").buffer(BufferAttributes {
            max_length: Some(max_length),
            fragment_size: Some(chunk),
            ..Default::default()
        });
        let playback_config = base.clone().stream_name("echo-playback").buffer(BufferAttributes {
            max_length: Some(max_length),
            target_length: Some(max_length),
            prebuf: Some(delay),
            min_request: Some(chunk),
            fragment_size: None,
        });

        let connector = self.context.connector.as_ref();
        let mut record = PaSimple::open_with(
            connector,
            Direction::Record,
            layout.format,
            layout.channels,
            layout.rate,
            &record_config,
        )?;
        let mut playback = PaSimple::open_with(
            connector,
            Direction::Playback,
            layout.format,
            layout.channels,
            layout.rate,
            &playback_config,
        )?;

        let audio = record.read(delay as usize)?;
        playback.write(&audio)?;
        info!(delay_ms, chunk_ms, "Echoing");

        let mut chunks = 0;
        while running.load(Ordering::SeqCst) {
            let audio = record.read(chunk as usize)?;
            playback.write(&audio)?;
            chunks += 1;
        }

        playback.flush()?;
        playback.close()?;
        record.close()?;
        Ok(chunks)
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let delay_ms = parse_arg(args, 0, "delay_ms", 1000)?;
        let chunk_ms = parse_arg(args, 1, "chunk_ms", 200)?;

        let running = Arc::new(AtomicBool::new(true));
        let handler_flag = running.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            handler_flag.store(false, Ordering::SeqCst);
        }) {
            warn!("Failed to install Ctrl+C handler: {e}");
        }

        let chunks = self.echo(delay_ms, chunk_ms, &running)?;
        Ok(format!("Stopped after {chunks} chunks"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "echo".to_string(),
            description: "Play microphone input back with a delay (Ctrl+C stops)".to_string(),
            category: "stream".to_string(),
            args: vec![
                CommandArg {
                    name: "delay_ms".to_string(),
                    description: "Echo delay in milliseconds (default 1000)".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
                CommandArg {
                    name: "chunk_ms".to_string(),
                    description: "Transfer size in milliseconds (default 200)".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
            ],
            examples: vec![
                "pasimple stream echo".to_string(),
                "pasimple stream echo 500 100".to_string(),
            ],
        }
    }
}
