//! Conversion between WAV sample streams and the raw little-endian PCM bytes
//! the server expects.

use std::io::{Cursor, Seek, Write};

use hound::{WavReader, WavSpec, WavWriter};

use crate::{
    core::{PaSimpleError, Result},
    pulse::SampleFormat,
};

/// The sample layout and raw data chunk of a WAV file
pub(crate) struct DataChunk<'a> {
    pub spec: WavSpec,
    /// Bytes used to store one sample, which may exceed its significant bits
    pub width: usize,
    pub data: &'a [u8],
}

/// Parse the headers of an in-memory WAV file and borrow its data chunk
///
/// Sample bytes are not decoded. Data is cut to whole frames.
pub(crate) fn read_data(bytes: &[u8]) -> Result<DataChunk<'_>> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let samples = reader.len() as usize;
    let start = usize::try_from(reader.into_inner().position()).unwrap_or(usize::MAX);

    // the data chunk's declared length sits just before its first byte
    let declared = start
        .checked_sub(4)
        .and_then(|at| bytes.get(at..start))
        .and_then(|len| <[u8; 4]>::try_from(len).ok())
        .map_or(0, |len| u32::from_le_bytes(len) as usize);

    let width = if samples > 0 {
        declared / samples
    } else {
        usize::from(spec.bits_per_sample).div_ceil(8)
    };

    let end = start.saturating_add(declared).min(bytes.len());
    let data = bytes.get(start..end).unwrap_or_default();
    let frame = width * usize::from(spec.channels);
    let whole = if frame > 0 { data.len() - data.len() % frame } else { 0 };

    Ok(DataChunk {
        spec,
        width,
        data: &data[..whole],
    })
}

/// Write raw `data` in `format` as samples
///
/// A trailing partial sample is ignored.
pub(crate) fn write_frames<W: Write + Seek>(
    writer: &mut WavWriter<W>,
    format: SampleFormat,
    data: &[u8],
) -> Result<()> {
    let width = format.width();
    let chunks = data.chunks_exact(width);

    match format {
        SampleFormat::U8 => {
            for chunk in chunks {
                writer.write_sample((chunk[0] ^ 0x80) as i8)?;
            }
        }
        SampleFormat::S16LE => {
            for chunk in chunks {
                writer.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))?;
            }
        }
        SampleFormat::S24LE => {
            for chunk in chunks {
                let sign = if chunk[2] & 0x80 != 0 { 0xff } else { 0x00 };
                writer.write_sample(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], sign]))?;
            }
        }
        SampleFormat::S32LE => {
            for chunk in chunks {
                writer.write_sample(i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))?;
            }
        }
        other => return Err(unsupported(other)),
    }

    Ok(())
}

pub(crate) fn unsupported(format: SampleFormat) -> PaSimpleError {
    PaSimpleError::UnsupportedFormat(format!(
        "{} cannot be stored in a PCM WAV file",
        format.description()
    ))
}
