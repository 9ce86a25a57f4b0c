use std::fmt;

/// Error codes reported by the PulseAudio server.
///
/// Codes 0 through 26 are the documented server codes. Anything else,
/// including the `PA_ERR_MAX` sentinel (27), is preserved in [`ErrorCode::Unknown`]
/// so that newer servers can report codes this crate does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No error
    Ok,
    /// Access failure
    Access,
    /// Unknown command
    Command,
    /// Invalid argument
    Invalid,
    /// Entity exists
    Exist,
    /// No such entity
    NoEntity,
    /// Connection refused
    ConnectionRefused,
    /// Protocol error
    Protocol,
    /// Timeout
    Timeout,
    /// No authentication key
    AuthKey,
    /// Internal error
    Internal,
    /// Connection terminated
    ConnectionTerminated,
    /// Entity killed
    Killed,
    /// Invalid server
    InvalidServer,
    /// Module initialization failed
    ModInitFailed,
    /// Bad state
    BadState,
    /// No data
    NoData,
    /// Incompatible protocol version
    Version,
    /// Data too large
    TooLarge,
    /// Operation not supported
    NotSupported,
    /// The server itself reported an unknown error
    UnknownErrorCode,
    /// Extension does not exist
    NoExtension,
    /// Obsolete functionality
    Obsolete,
    /// Missing implementation
    NotImplemented,
    /// The caller forked without calling execve() and tried to reuse the context
    Forked,
    /// An IO error happened
    Io,
    /// Device or resource busy
    Busy,
    /// A code outside the documented range
    Unknown(i32),
}

const KNOWN: [ErrorCode; 27] = [
    ErrorCode::Ok,
    ErrorCode::Access,
    ErrorCode::Command,
    ErrorCode::Invalid,
    ErrorCode::Exist,
    ErrorCode::NoEntity,
    ErrorCode::ConnectionRefused,
    ErrorCode::Protocol,
    ErrorCode::Timeout,
    ErrorCode::AuthKey,
    ErrorCode::Internal,
    ErrorCode::ConnectionTerminated,
    ErrorCode::Killed,
    ErrorCode::InvalidServer,
    ErrorCode::ModInitFailed,
    ErrorCode::BadState,
    ErrorCode::NoData,
    ErrorCode::Version,
    ErrorCode::TooLarge,
    ErrorCode::NotSupported,
    ErrorCode::UnknownErrorCode,
    ErrorCode::NoExtension,
    ErrorCode::Obsolete,
    ErrorCode::NotImplemented,
    ErrorCode::Forked,
    ErrorCode::Io,
    ErrorCode::Busy,
];

impl ErrorCode {
    /// First code value that is not a valid error (`PA_ERR_MAX`)
    pub const MAX: i32 = 27;

    /// Map a raw server code to an error kind
    ///
    /// The native layer sometimes reports codes negated, so the sign is
    /// discarded before lookup.
    pub fn from_code(raw: i32) -> Self {
        let code = raw.unsigned_abs();
        KNOWN
            .get(code as usize)
            .copied()
            .unwrap_or(Self::Unknown(raw))
    }

    /// Numeric code as reported by the server
    pub fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Access => 1,
            Self::Command => 2,
            Self::Invalid => 3,
            Self::Exist => 4,
            Self::NoEntity => 5,
            Self::ConnectionRefused => 6,
            Self::Protocol => 7,
            Self::Timeout => 8,
            Self::AuthKey => 9,
            Self::Internal => 10,
            Self::ConnectionTerminated => 11,
            Self::Killed => 12,
            Self::InvalidServer => 13,
            Self::ModInitFailed => 14,
            Self::BadState => 15,
            Self::NoData => 16,
            Self::Version => 17,
            Self::TooLarge => 18,
            Self::NotSupported => 19,
            Self::UnknownErrorCode => 20,
            Self::NoExtension => 21,
            Self::Obsolete => 22,
            Self::NotImplemented => 23,
            Self::Forked => 24,
            Self::Io => 25,
            Self::Busy => 26,
            Self::Unknown(raw) => *raw,
        }
    }

    /// Whether this code means the server could not be reached
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Self::ConnectionRefused
                | Self::InvalidServer
                | Self::ConnectionTerminated
                | Self::Timeout
                | Self::AuthKey
                | Self::Version
        )
    }

    /// Human-readable description of the code
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Access => "Access denied",
            Self::Command => "Unknown command",
            Self::Invalid => "Invalid argument",
            Self::Exist => "Entity exists",
            Self::NoEntity => "No such entity",
            Self::ConnectionRefused => "Connection refused",
            Self::Protocol => "Protocol error",
            Self::Timeout => "Timeout",
            Self::AuthKey => "No authentication key",
            Self::Internal => "Internal error",
            Self::ConnectionTerminated => "Connection terminated",
            Self::Killed => "Entity killed",
            Self::InvalidServer => "Invalid server",
            Self::ModInitFailed => "Module initialization failed",
            Self::BadState => "Bad state",
            Self::NoData => "No data",
            Self::Version => "Incompatible protocol version",
            Self::TooLarge => "Too large",
            Self::NotSupported => "Not supported",
            Self::UnknownErrorCode => "Unknown error code",
            Self::NoExtension => "No such extension",
            Self::Obsolete => "Obsolete functionality",
            Self::NotImplemented => "Missing implementation",
            Self::Forked => "Client forked",
            Self::Io => "Input/Output error",
            Self::Busy => "Device or resource busy",
            Self::Unknown(_) => "Unrecognized error code",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.code())
    }
}

impl From<libpulse_binding::error::PAErr> for ErrorCode {
    fn from(err: libpulse_binding::error::PAErr) -> Self {
        Self::from_code(err.0)
    }
}
