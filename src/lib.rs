//! pasimple - Blocking record and playback streams for PulseAudio.
//!
//! A thin layer over the server's simple API: open one stream in one
//! direction, then move raw PCM bytes with blocking calls. Two helpers play
//! and record whole WAV files.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pasimple::{Direction, PaSimple, SampleFormat, StreamConfig};
//!
//! let mut stream = PaSimple::open(
//!     Direction::Record,
//!     SampleFormat::S16LE,
//!     2,
//!     44_100,
//!     &StreamConfig::default().app_name("example"),
//! )?;
//! let _second = stream.read(stream.bytes_per_second())?;
//! stream.close()?;
//! # Ok::<(), pasimple::PaSimpleError>(())
//! ```

/// Configuration file schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface.
pub mod cli;

/// Simple-API streams, formats and server error codes.
pub mod pulse;

/// Logging setup for the command-line tool.
pub mod tracing_config;

/// Whole-file WAV playback and recording.
pub mod wav;

/// Re-exported core types for convenience.
pub use core::{PaSimpleError, Result};
pub use pulse::{
    BufferAttributes, Connector, Direction, ErrorCode, PaSimple, PulseConnector, SampleFormat,
    SimpleConnection, StreamConfig, StreamParams, format_to_width, width_to_format,
};
pub use wav::{RecordOptions, play_wav, play_wav_with, record_wav, record_wav_with};
