//! One-call WAV playback and recording.
//!
//! Only the four PCM layouts a WAV file maps onto are handled: unsigned 8-bit
//! and signed 16, 24 and 32-bit little-endian. The playback side picks its
//! format from the stored sample width alone and sends the data chunk as is,
//! so a 32-bit float file or 24-bit samples in 4-byte containers are sent as
//! signed 32-bit data.

mod pcm;

use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use hound::{WavSpec, WavWriter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    core::{PaSimpleError, Result},
    pulse::{
        Connector, Direction, PaSimple, PulseConnector, SampleFormat, StreamConfig,
        width_to_format,
    },
};

/// Stream layout used by [`record_wav`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordOptions {
    /// Sample format; must be WAV-compatible
    pub format: SampleFormat,
    /// Number of channels
    pub channels: u8,
    /// Sample rate in Hz
    pub rate: u32,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            format: SampleFormat::S24LE,
            channels: 1,
            rate: 41_000,
        }
    }
}

impl RecordOptions {
    /// Number of bytes in `seconds` of audio
    pub fn byte_len(&self, seconds: u32) -> Option<usize> {
        self.format
            .width()
            .checked_mul(self.channels as usize)?
            .checked_mul(self.rate as usize)?
            .checked_mul(seconds as usize)
    }
}

/// Play a WAV file on the default server and wait until it has been heard
///
/// # Errors
/// `Io` if the file cannot be read, `Wav` if it cannot be parsed,
/// `UnsupportedFormat` if its sample width has no matching format, or any
/// stream error
pub fn play_wav(path: impl AsRef<Path>) -> Result<()> {
    play_wav_with(&PulseConnector, path.as_ref(), &StreamConfig::default())
}

/// Play a WAV file through `connector`
///
/// # Errors
/// Same as [`play_wav`]
#[instrument(skip(connector, path, config), fields(path = %path.display()), err)]
pub fn play_wav_with(connector: &dyn Connector, path: &Path, config: &StreamConfig) -> Result<()> {
    let bytes = fs::read(path)?;
    let pcm::DataChunk { spec, width, data } = pcm::read_data(&bytes)?;

    let format = width_to_format(width).map_err(|_| {
        PaSimpleError::UnsupportedFormat(format!(
            "{width}-byte samples in {} have no matching stream format",
            path.display()
        ))
    })?;
    let channels = u8::try_from(spec.channels).map_err(|_| {
        PaSimpleError::UnsupportedFormat(format!("{} channels is too many", spec.channels))
    })?;
    debug!(%format, channels, rate = spec.sample_rate, bytes = data.len(), "Parsed WAV file");

    let mut stream = PaSimple::open_with(
        connector,
        Direction::Playback,
        format,
        channels,
        spec.sample_rate,
        config,
    )?;
    stream.write(data)?;
    stream.drain()?;
    stream.close()?;

    info!("Playback finished");
    Ok(())
}

/// Record `seconds` of audio from the default server into a new WAV file
///
/// Uses [`RecordOptions::default`]: mono, 41000 Hz, 24-bit.
///
/// # Errors
/// Any stream error, or `Io`/`Wav` if the file cannot be written
pub fn record_wav(path: impl AsRef<Path>, seconds: u32) -> Result<()> {
    record_wav_with(
        &PulseConnector,
        path.as_ref(),
        seconds,
        &RecordOptions::default(),
        &StreamConfig::default(),
    )
}

/// Record into a WAV file through `connector` with explicit options
///
/// Audio is captured first and the file is only created once recording has
/// succeeded.
///
/// # Errors
/// `UnsupportedFormat` if `options.format` is not WAV-compatible, plus
/// everything [`record_wav`] reports
#[instrument(skip(connector, path, config), fields(path = %path.display()), err)]
pub fn record_wav_with(
    connector: &dyn Connector,
    path: &Path,
    seconds: u32,
    options: &RecordOptions,
    config: &StreamConfig,
) -> Result<()> {
    if !options.format.is_wav_compatible() {
        return Err(pcm::unsupported(options.format));
    }
    let len = options.byte_len(seconds).ok_or_else(|| {
        PaSimpleError::InvalidArgument(format!("{seconds} seconds of audio is too long"))
    })?;

    let data = {
        let mut stream = PaSimple::open_with(
            connector,
            Direction::Record,
            options.format,
            options.channels,
            options.rate,
            config,
        )?;
        let data = stream.read(len)?;
        stream.close()?;
        data
    };
    debug!(bytes = data.len(), "Recording captured");

    let spec = WavSpec {
        channels: u16::from(options.channels),
        sample_rate: options.rate,
        bits_per_sample: (options.format.width() * 8) as u16,
        sample_format: hound::SampleFormat::Int,
    };
    let file = BufWriter::new(File::create(path)?);
    let mut writer = WavWriter::new(file, spec)?;
    pcm::write_frames(&mut writer, options.format, &data)?;
    writer.finalize()?;

    info!("Recording saved");
    Ok(())
}
