/// Stream identity and buffer metrics
pub mod attr;
/// Native connection seam
pub mod backend;
/// Server error codes
pub mod error;
/// Sample formats and stream directions
pub mod sample;
/// Blocking stream handle
pub mod stream;

#[cfg(test)]
mod tests;

pub use attr::{BufferAttributes, DEFAULT_APP_NAME, StreamConfig};
pub use backend::{Connector, PulseConnector, SimpleConnection, StreamParams};
pub use error::ErrorCode;
pub use sample::{
    Direction, SampleFormat, bytes_per_second, format_to_width, frame_size, width_to_format,
};
pub use stream::{CHANNELS_MAX, PaSimple};
