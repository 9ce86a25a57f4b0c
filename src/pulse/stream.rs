use std::fmt;

use tracing::{debug, instrument, warn};

use super::{
    attr::StreamConfig,
    backend::{Connector, PulseConnector, SimpleConnection, StreamParams},
    error::ErrorCode,
    sample::{self, Direction, SampleFormat},
};
use crate::core::{PaSimpleError, Result};

/// Highest channel count the server accepts (`PA_CHANNELS_MAX`)
pub const CHANNELS_MAX: u8 = 32;

/// A blocking record or playback stream
///
/// Owns one server connection. The connection is released by [`PaSimple::close`]
/// or when the handle is dropped, whichever comes first. After `close` every
/// operation except the accessors fails with [`PaSimpleError::ClosedHandle`].
pub struct PaSimple {
    direction: Direction,
    format: SampleFormat,
    channels: u8,
    rate: u32,
    connection: Option<Box<dyn SimpleConnection>>,
}

impl PaSimple {
    /// Open a stream on the default PulseAudio connector
    ///
    /// # Errors
    /// Returns `InvalidArgument` for malformed parameters, `Connection` if the
    /// server cannot be reached and `Server` for any other server failure
    pub fn open(
        direction: Direction,
        format: SampleFormat,
        channels: u8,
        rate: u32,
        config: &StreamConfig,
    ) -> Result<Self> {
        Self::open_with(&PulseConnector, direction, format, channels, rate, config)
    }

    /// Open a stream through a specific connector
    ///
    /// # Errors
    /// Same as [`PaSimple::open`]
    #[instrument(skip(connector, config), fields(app = %config.app_name), err)]
    pub fn open_with(
        connector: &dyn Connector,
        direction: Direction,
        format: SampleFormat,
        channels: u8,
        rate: u32,
        config: &StreamConfig,
    ) -> Result<Self> {
        validate(channels, rate, config)?;

        let params = StreamParams {
            direction,
            format,
            channels,
            rate,
            config,
        };
        let connection = connector.connect(&params).map_err(open_error)?;
        debug!("Stream opened");

        Ok(Self {
            direction,
            format,
            channels,
            rate,
            connection: Some(connection),
        })
    }

    /// Direction given at construction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sample format given at construction
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Channel count given at construction
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Sample rate given at construction
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Size of one frame in bytes
    pub fn frame_size(&self) -> usize {
        sample::frame_size(self.format, self.channels)
    }

    /// Bytes transferred per second of audio
    pub fn bytes_per_second(&self) -> usize {
        sample::bytes_per_second(self.format, self.channels, self.rate)
    }

    /// Whether [`PaSimple::close`] has been called
    pub fn is_closed(&self) -> bool {
        self.connection.is_none()
    }

    /// Record exactly `len` bytes
    ///
    /// Blocks until the server has delivered all of them.
    ///
    /// # Errors
    /// `ClosedHandle`, `WrongDirection` on a playback stream, or `Server`
    pub fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let connection = self.checked("read", Some(Direction::Record))?;
        let mut buf = vec![0u8; len];
        if len > 0 {
            connection
                .read(&mut buf)
                .map_err(|code| server_error("read", code))?;
        }
        debug!(bytes = len, "Read recorded audio");
        Ok(buf)
    }

    /// Play back `data`
    ///
    /// Returns once the server has accepted every byte.
    ///
    /// # Errors
    /// `ClosedHandle`, `WrongDirection` on a record stream, or `Server`
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        let connection = self.checked("write", Some(Direction::Playback))?;
        if !data.is_empty() {
            connection
                .write(data)
                .map_err(|code| server_error("write", code))?;
        }
        debug!(bytes = data.len(), "Wrote playback audio");
        Ok(())
    }

    /// Block until everything written so far has been played
    ///
    /// # Errors
    /// `ClosedHandle`, `WrongDirection` on a record stream, or `Server`
    pub fn drain(&mut self) -> Result<()> {
        self.checked("drain", Some(Direction::Playback))?
            .drain()
            .map_err(|code| server_error("drain", code))?;
        debug!("Drained playback buffer");
        Ok(())
    }

    /// Discard data buffered in either direction
    ///
    /// # Errors
    /// `ClosedHandle` or `Server`
    pub fn flush(&mut self) -> Result<()> {
        self.checked("flush", None)?
            .flush()
            .map_err(|code| server_error("flush", code))?;
        debug!("Flushed stream buffer");
        Ok(())
    }

    /// Current buffering latency in microseconds
    ///
    /// # Errors
    /// `ClosedHandle` or `Server`
    pub fn latency(&mut self) -> Result<u64> {
        self.checked("latency", None)?
            .latency()
            .map_err(|code| server_error("latency", code))
    }

    /// Release the server connection
    ///
    /// # Errors
    /// `ClosedHandle` if the stream was already closed
    pub fn close(&mut self) -> Result<()> {
        match self.connection.take() {
            Some(connection) => {
                drop(connection);
                debug!(direction = %self.direction, "Stream closed");
                Ok(())
            }
            None => Err(PaSimpleError::ClosedHandle),
        }
    }

    fn checked(
        &mut self,
        operation: &'static str,
        required: Option<Direction>,
    ) -> Result<&mut Box<dyn SimpleConnection>> {
        let direction = self.direction;
        let connection = self
            .connection
            .as_mut()
            .ok_or(PaSimpleError::ClosedHandle)?;

        match required {
            Some(required) if required != direction => {
                Err(PaSimpleError::WrongDirection {
                    operation,
                    direction,
                })
            }
            _ => Ok(connection),
        }
    }
}

impl fmt::Debug for PaSimple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaSimple")
            .field("direction", &self.direction)
            .field("format", &self.format)
            .field("channels", &self.channels)
            .field("rate", &self.rate)
            .field("closed", &self.is_closed())
            .finish()
    }
}

fn validate(channels: u8, rate: u32, config: &StreamConfig) -> Result<()> {
    if channels == 0 || channels > CHANNELS_MAX {
        return Err(PaSimpleError::InvalidArgument(format!(
            "channel count must be between 1 and {CHANNELS_MAX}, got {channels}"
        )));
    }
    if rate == 0 {
        return Err(PaSimpleError::InvalidArgument(
            "sample rate must be positive".to_string(),
        ));
    }

    let names = [
        Some(config.app_name.as_str()),
        config.stream_name.as_deref(),
        config.server.as_deref(),
        config.device.as_deref(),
    ];
    if names.into_iter().flatten().any(|name| name.contains('\0')) {
        return Err(PaSimpleError::InvalidArgument(
            "stream identity strings must not contain NUL bytes".to_string(),
        ));
    }

    Ok(())
}

fn open_error(code: ErrorCode) -> PaSimpleError {
    warn!(%code, "Failed to create stream");
    if code.is_connection_failure() {
        PaSimpleError::Connection { code }
    } else if code == ErrorCode::Invalid {
        PaSimpleError::InvalidArgument(format!("server rejected stream parameters: {code}"))
    } else {
        PaSimpleError::Server {
            operation: "open",
            code,
        }
    }
}

fn server_error(operation: &'static str, code: ErrorCode) -> PaSimpleError {
    warn!(operation, %code, "Stream operation failed");
    PaSimpleError::Server { operation, code }
}
