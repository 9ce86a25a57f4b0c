use std::{path::Path, sync::Arc};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CliContext, CommandArg, CommandMetadata},
    },
    wav,
};

/// Command that plays a WAV file and waits for it to finish.
///
/// # Example Usage
///
/// ```bash
/// pasimple wav play recording.wav
/// ```
pub struct PlayCommand {
    context: Arc<CliContext>,
}

impl PlayCommand {
    /// Creates a new PlayCommand.
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

impl Command for PlayCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let file = args.first().ok_or_else(|| {
            CliError::InvalidArguments("Expected <file> argument for 'play' command".to_string())
        })?;

        wav::play_wav_with(
            self.context.connector.as_ref(),
            Path::new(file),
            &self.context.config.stream,
        )?;

        Ok(format!("Played {file}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "play".to_string(),
            description: "Play a PCM WAV file".to_string(),
            category: "wav".to_string(),
            args: vec![CommandArg {
                name: "file".to_string(),
                description: "WAV file with 8, 16, 24 or 32-bit samples".to_string(),
                required: true,
                value_type: ArgType::Path,
            }],
            examples: vec!["pasimple wav play recording.wav".to_string()],
        }
    }
}
