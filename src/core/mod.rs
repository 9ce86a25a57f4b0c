use std::{io, path::Path};

use thiserror::Error;

use crate::pulse::{Direction, ErrorCode};

/// Error types for pasimple.
///
/// Server failures carry the code reported by the audio server. Every other
/// variant is raised locally and never reaches the server.
#[derive(Error, Debug)]
pub enum PaSimpleError {
    /// The audio server could not be reached
    #[error("could not connect to the audio server: {code}")]
    Connection {
        /// Code reported while connecting
        code: ErrorCode,
    },

    /// Stream parameters were rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The server reported a failure
    #[error("{operation} failed: {code}")]
    Server {
        /// Operation that failed
        operation: &'static str,
        /// Code reported by the server
        code: ErrorCode,
    },

    /// Operation is not valid for the stream's direction
    #[error("cannot {operation} on a {direction} stream")]
    WrongDirection {
        /// Operation that was attempted
        operation: &'static str,
        /// Direction the stream was opened with
        direction: Direction,
    },

    /// Operation attempted on a closed stream
    #[error("cannot perform operation on closed stream")]
    ClosedHandle,

    /// No sample format exists for this width
    #[error("unsupported sample width: {0} bytes")]
    UnsupportedWidth(usize),

    /// Audio layout cannot be expressed as a PCM WAV file
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// WAV container could not be read or written
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for pasimple operations.
pub type Result<T> = std::result::Result<T, PaSimpleError>;

impl PaSimpleError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        PaSimpleError::TomlParse {
            location,
            details: error.to_string(),
        }
    }

    /// Server error code, if this error came from the server
    pub fn server_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Connection { code } | Self::Server { code, .. } => Some(*code),
            _ => None,
        }
    }
}
