use std::{path::Path, sync::Arc};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CliContext, CommandArg, CommandMetadata, parse_arg},
    },
    wav::{self, RecordOptions},
};

/// Command that records a fixed number of seconds into a WAV file.
///
/// Format, channels and rate default to the `[record]` config section.
pub struct RecordCommand {
    context: Arc<CliContext>,
}

impl RecordCommand {
    /// Creates a new RecordCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for RecordCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let [file, seconds, ..] = args else {
            return Err(CliError::InvalidArguments(
                "Expected <file> <seconds> for 'record' command".to_string(),
            ));
        };
        let seconds: u32 = seconds
            .parse()
            .map_err(|_| CliError::InvalidArguments(format!("invalid seconds '{seconds}'")))?;

        let defaults = self.context.config.record;
        let options = RecordOptions {
            format: parse_arg(args, 2, "format", defaults.format)?,
            channels: parse_arg(args, 3, "channels", defaults.channels)?,
            rate: parse_arg(args, 4, "rate", defaults.rate)?,
        };

        wav::record_wav_with(
            self.context.connector.as_ref(),
            Path::new(file),
            seconds,
            &options,
            &self.context.config.stream,
        )?;

        Ok(format!(
            "Recorded {seconds}s of {} audio ({} ch, {} Hz) to {file}",
            options.format, options.channels, options.rate
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "record".to_string(),
            description: "Record audio into a new WAV file".to_string(),
            category: "wav".to_string(),
            args: vec![
                CommandArg {
                    name: "file".to_string(),
                    description: "Destination WAV file".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
                CommandArg {
                    name: "seconds".to_string(),
                    description: "Length of the recording".to_string(),
                    required: true,
                    value_type: ArgType::Number,
                },
                CommandArg {
                    name: "format".to_string(),
                    description: "u8, s16le, s24le or s32le".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "channels".to_string(),
                    description: "Number of channels".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
                CommandArg {
                    name: "rate".to_string(),
                    description: "Sample rate in Hz".to_string(),
                    required: false,
                    value_type: ArgType::Number,
                },
            ],
            examples: vec![
                "pasimple wav record take.wav 10".to_string(),
                "pasimple wav record take.wav 5 s16le 2 48000".to_string(),
            ],
        }
    }
}
