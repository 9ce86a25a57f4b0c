use libpulse_binding::def::BufferAttr;
use serde::{Deserialize, Serialize};

/// Application name used when none is configured
pub const DEFAULT_APP_NAME: &str = "pasimple";

/// Server-side buffer metrics, in bytes
///
/// Every field left as `None` lets the server pick its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferAttributes {
    /// Maximum length of the buffer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Playback only: target fill level of the buffer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_length: Option<u32>,
    /// Playback only: bytes buffered before playback starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prebuf: Option<u32>,
    /// Playback only: minimum request size when refilling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_request: Option<u32>,
    /// Record only: size of the fragments delivered to the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_size: Option<u32>,
}

impl BufferAttributes {
    /// Whether every field is left to the server
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Translate into the native struct, substituting `(uint32_t) -1` for unset fields
    pub(crate) fn to_pulse(self) -> BufferAttr {
        let or_default = |value: Option<u32>| value.unwrap_or(u32::MAX);
        BufferAttr {
            maxlength: or_default(self.max_length),
            tlength: or_default(self.target_length),
            prebuf: or_default(self.prebuf),
            minreq: or_default(self.min_request),
            fragsize: or_default(self.fragment_size),
        }
    }
}

/// Identity and buffering options for opening a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Name of the application as shown by the server
    pub app_name: String,
    /// Name of the stream; falls back to `app_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Server address; `None` connects to the default server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Sink or source name; `None` uses the default device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Buffer metrics
    pub buffer: BufferAttributes,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            stream_name: None,
            server: None,
            device: None,
            buffer: BufferAttributes::default(),
        }
    }
}

impl StreamConfig {
    /// Set the application name
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Set the stream name
    pub fn stream_name(mut self, name: impl Into<String>) -> Self {
        self.stream_name = Some(name.into());
        self
    }

    /// Connect to a specific server instead of the default one
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Attach to a specific sink or source
    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Replace the buffer metrics
    pub fn buffer(mut self, buffer: BufferAttributes) -> Self {
        self.buffer = buffer;
        self
    }

    /// Stream name that will be sent to the server
    pub fn effective_stream_name(&self) -> &str {
        self.stream_name.as_deref().unwrap_or(&self.app_name)
    }
}
