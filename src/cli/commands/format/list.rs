use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_header},
        types::CommandMetadata,
    },
    pulse::SampleFormat,
};

/// Command listing every sample format with its tag and width.
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        let mut lines = vec![format_header(&format!(
            "{:>3}  {:<10} {:>5}  description",
            "tag", "name", "bytes"
        ))];

        for format in SampleFormat::ALL {
            let wav = if format.is_wav_compatible() { " [wav]" } else { "" };
            lines.push(format!(
                "{:>3}  {:<10} {:>5}  {}{}",
                format.tag(),
                format.name(),
                format.width(),
                format_description(format.description()),
                wav
            ));
        }

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List sample formats and their widths".to_string(),
            category: "format".to_string(),
            args: Vec::new(),
            examples: vec!["pasimple format list".to_string()],
        }
    }
}
