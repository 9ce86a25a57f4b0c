use libpulse_binding::sample::Spec;
use libpulse_simple_binding::Simple;
use tracing::debug;

use super::{
    attr::StreamConfig,
    error::ErrorCode,
    sample::{Direction, SampleFormat},
};

/// Everything needed to open one simple-API stream
#[derive(Debug, Clone, Copy)]
pub struct StreamParams<'a> {
    /// Stream direction
    pub direction: Direction,
    /// Sample format
    pub format: SampleFormat,
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub rate: u32,
    /// Identity and buffering options
    pub config: &'a StreamConfig,
}

/// One open, blocking connection to the audio server
///
/// Each call blocks until the server has completed the request.
pub trait SimpleConnection {
    /// Fill `buf` completely with recorded data
    ///
    /// # Errors
    /// Returns the code the server reported
    fn read(&mut self, buf: &mut [u8]) -> Result<(), ErrorCode>;

    /// Submit all of `data` for playback
    ///
    /// # Errors
    /// Returns the code the server reported
    fn write(&mut self, data: &[u8]) -> Result<(), ErrorCode>;

    /// Wait until all submitted data has been played
    ///
    /// # Errors
    /// Returns the code the server reported
    fn drain(&mut self) -> Result<(), ErrorCode>;

    /// Discard buffered data
    ///
    /// # Errors
    /// Returns the code the server reported
    fn flush(&mut self) -> Result<(), ErrorCode>;

    /// Current latency in microseconds
    ///
    /// # Errors
    /// Returns the code the server reported
    fn latency(&mut self) -> Result<u64, ErrorCode>;
}

/// Opens connections to an audio server
pub trait Connector {
    /// Open a stream described by `params`
    ///
    /// # Errors
    /// Returns the server's error code if the stream cannot be created
    fn connect(&self, params: &StreamParams<'_>) -> Result<Box<dyn SimpleConnection>, ErrorCode>;
}

/// Connector backed by `libpulse-simple`
#[derive(Debug, Clone, Copy, Default)]
pub struct PulseConnector;

impl Connector for PulseConnector {
    fn connect(&self, params: &StreamParams<'_>) -> Result<Box<dyn SimpleConnection>, ErrorCode> {
        let spec = Spec {
            format: params.format.to_pulse(),
            rate: params.rate,
            channels: params.channels,
        };
        if !spec.is_valid() {
            return Err(ErrorCode::Invalid);
        }

        let config = params.config;
        let attr = config.buffer.to_pulse();
        debug!(
            server = ?config.server,
            device = ?config.device,
            ?attr,
            "Creating simple stream"
        );

        let simple = Simple::new(
            config.server.as_deref(),
            &config.app_name,
            params.direction.to_pulse(),
            config.device.as_deref(),
            config.effective_stream_name(),
            &spec,
            None,
            Some(&attr),
        )?;

        Ok(Box::new(PulseConnection { simple }))
    }
}

/// A stream created through `libpulse-simple`; freed on drop
struct PulseConnection {
    simple: Simple,
}

impl SimpleConnection for PulseConnection {
    fn read(&mut self, buf: &mut [u8]) -> Result<(), ErrorCode> {
        self.simple.read(buf).map_err(ErrorCode::from)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ErrorCode> {
        self.simple.write(data).map_err(ErrorCode::from)
    }

    fn drain(&mut self) -> Result<(), ErrorCode> {
        self.simple.drain().map_err(ErrorCode::from)
    }

    fn flush(&mut self) -> Result<(), ErrorCode> {
        self.simple.flush().map_err(ErrorCode::from)
    }

    fn latency(&mut self) -> Result<u64, ErrorCode> {
        self.simple
            .get_latency()
            .map(|latency| latency.0)
            .map_err(ErrorCode::from)
    }
}
