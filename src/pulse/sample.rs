use std::{fmt, str::FromStr};

use libpulse_binding::{sample::Format as PulseFormat, stream::Direction as PulseDirection};
use serde::{Deserialize, Serialize};

use crate::core::{PaSimpleError, Result};

/// Direction of a simple-API stream
///
/// The discriminants match the values the server uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Playback stream (audio output)
    Playback = 1,
    /// Record stream (audio input)
    Record = 2,
}

impl Direction {
    pub(crate) fn to_pulse(self) -> PulseDirection {
        match self {
            Self::Playback => PulseDirection::Playback,
            Self::Record => PulseDirection::Record,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playback => write!(f, "playback"),
            Self::Record => write!(f, "record"),
        }
    }
}

impl FromStr for Direction {
    type Err = PaSimpleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "playback" | "play" => Ok(Self::Playback),
            "record" | "rec" => Ok(Self::Record),
            other => Err(PaSimpleError::InvalidArgument(format!(
                "unknown stream direction '{other}'"
            ))),
        }
    }
}

/// Audio sample format
///
/// Discriminants are the server's numeric format tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleFormat {
    /// 8-bit unsigned PCM
    #[serde(rename = "u8")]
    U8 = 0,
    /// 8-bit a-Law
    #[serde(rename = "alaw")]
    ALaw = 1,
    /// 8-bit mu-Law
    #[serde(rename = "ulaw")]
    ULaw = 2,
    /// 16-bit signed little-endian
    #[serde(rename = "s16le")]
    S16LE = 3,
    /// 16-bit signed big-endian
    #[serde(rename = "s16be")]
    S16BE = 4,
    /// 32-bit float little-endian, range -1.0 to 1.0
    #[serde(rename = "float32le")]
    F32LE = 5,
    /// 32-bit float big-endian, range -1.0 to 1.0
    #[serde(rename = "float32be")]
    F32BE = 6,
    /// 32-bit signed little-endian
    #[serde(rename = "s32le")]
    S32LE = 7,
    /// 32-bit signed big-endian
    #[serde(rename = "s32be")]
    S32BE = 8,
    /// 24-bit signed packed little-endian
    #[serde(rename = "s24le")]
    S24LE = 9,
    /// 24-bit signed packed big-endian
    #[serde(rename = "s24be")]
    S24BE = 10,
    /// 24-bit signed in the LSBs of 32-bit words, little-endian
    #[serde(rename = "s24-32le")]
    S24_32LE = 11,
    /// 24-bit signed in the LSBs of 32-bit words, big-endian
    #[serde(rename = "s24-32be")]
    S24_32BE = 12,
}

impl SampleFormat {
    /// Every format the server accepts, ordered by numeric tag
    pub const ALL: [SampleFormat; 13] = [
        Self::U8,
        Self::ALaw,
        Self::ULaw,
        Self::S16LE,
        Self::S16BE,
        Self::F32LE,
        Self::F32BE,
        Self::S32LE,
        Self::S32BE,
        Self::S24LE,
        Self::S24BE,
        Self::S24_32LE,
        Self::S24_32BE,
    ];

    /// Numeric tag used by the server
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    /// Bytes per sample per channel
    pub fn width(&self) -> usize {
        format_to_width(*self)
    }

    /// Check if the format is little-endian
    ///
    /// Single-byte formats have no byte order and report false here and in
    /// [`SampleFormat::is_big_endian`].
    pub fn is_little_endian(&self) -> bool {
        matches!(
            self,
            Self::S16LE | Self::F32LE | Self::S32LE | Self::S24LE | Self::S24_32LE
        )
    }

    /// Check if the format is big-endian
    pub fn is_big_endian(&self) -> bool {
        matches!(
            self,
            Self::S16BE | Self::F32BE | Self::S32BE | Self::S24BE | Self::S24_32BE
        )
    }

    /// Check if the format is floating point
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32LE | Self::F32BE)
    }

    /// Config-file name of the format
    pub fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::ALaw => "alaw",
            Self::ULaw => "ulaw",
            Self::S16LE => "s16le",
            Self::S16BE => "s16be",
            Self::F32LE => "float32le",
            Self::F32BE => "float32be",
            Self::S32LE => "s32le",
            Self::S32BE => "s32be",
            Self::S24LE => "s24le",
            Self::S24BE => "s24be",
            Self::S24_32LE => "s24-32le",
            Self::S24_32BE => "s24-32be",
        }
    }

    /// Get a human-readable description of the format
    pub fn description(&self) -> &'static str {
        match self {
            Self::U8 => "8-bit unsigned PCM",
            Self::ALaw => "8-bit a-Law",
            Self::ULaw => "8-bit mu-Law",
            Self::S16LE => "16-bit signed PCM (little-endian)",
            Self::S16BE => "16-bit signed PCM (big-endian)",
            Self::F32LE => "32-bit float PCM (little-endian)",
            Self::F32BE => "32-bit float PCM (big-endian)",
            Self::S32LE => "32-bit signed PCM (little-endian)",
            Self::S32BE => "32-bit signed PCM (big-endian)",
            Self::S24LE => "24-bit signed packed PCM (little-endian)",
            Self::S24BE => "24-bit signed packed PCM (big-endian)",
            Self::S24_32LE => "24-bit signed PCM in 32-bit words (little-endian)",
            Self::S24_32BE => "24-bit signed PCM in 32-bit words (big-endian)",
        }
    }

    /// Whether this is one of the four formats a WAV file maps onto
    pub fn is_wav_compatible(&self) -> bool {
        matches!(self, Self::U8 | Self::S16LE | Self::S24LE | Self::S32LE)
    }

    pub(crate) fn to_pulse(self) -> PulseFormat {
        match self {
            Self::U8 => PulseFormat::U8,
            Self::ALaw => PulseFormat::ALaw,
            Self::ULaw => PulseFormat::ULaw,
            Self::S16LE => PulseFormat::S16le,
            Self::S16BE => PulseFormat::S16be,
            Self::F32LE => PulseFormat::F32le,
            Self::F32BE => PulseFormat::F32be,
            Self::S32LE => PulseFormat::S32le,
            Self::S32BE => PulseFormat::S32be,
            Self::S24LE => PulseFormat::S24le,
            Self::S24BE => PulseFormat::S24be,
            Self::S24_32LE => PulseFormat::S24_32le,
            Self::S24_32BE => PulseFormat::S24_32be,
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = PaSimpleError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| PaSimpleError::InvalidArgument(format!("unknown sample format '{s}'")))
    }
}

/// Returns the most common format for a sample width in bytes
///
/// # Errors
/// Returns `UnsupportedWidth` if the width is not 1, 2, 3 or 4
pub fn width_to_format(width: usize) -> Result<SampleFormat> {
    match width {
        1 => Ok(SampleFormat::U8),
        2 => Ok(SampleFormat::S16LE),
        3 => Ok(SampleFormat::S24LE),
        4 => Ok(SampleFormat::S32LE),
        other => Err(PaSimpleError::UnsupportedWidth(other)),
    }
}

/// Returns the sample width in bytes for a format
pub fn format_to_width(format: SampleFormat) -> usize {
    match format {
        SampleFormat::U8 | SampleFormat::ALaw | SampleFormat::ULaw => 1,
        SampleFormat::S16LE | SampleFormat::S16BE => 2,
        SampleFormat::S24LE | SampleFormat::S24BE => 3,
        SampleFormat::F32LE
        | SampleFormat::F32BE
        | SampleFormat::S32LE
        | SampleFormat::S32BE
        | SampleFormat::S24_32LE
        | SampleFormat::S24_32BE => 4,
    }
}

/// Size of one frame (one sample for every channel) in bytes
pub fn frame_size(format: SampleFormat, channels: u8) -> usize {
    format.width() * channels as usize
}

/// Calculate bytes per second for a stream layout
pub fn bytes_per_second(format: SampleFormat, channels: u8, rate: u32) -> usize {
    frame_size(format, channels) * rate as usize
}
