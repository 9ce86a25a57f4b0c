//! pasimple command-line tool.
//!
//! Usage: `pasimple <category> <command> [args...]`, or `pasimple help`.

use std::{env, error::Error, process};

use pasimple::{
    cli::{CliService, formatting::format_error},
    config::Config,
    tracing_config,
};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };
    tracing_config::init(config.general.log_level)?;
    debug!(?config, "Configuration loaded");

    let cli_service = CliService::new(config);

    let category = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(2).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(3..).unwrap_or(&[]);

    match cli_service.execute_command(category, command, command_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
