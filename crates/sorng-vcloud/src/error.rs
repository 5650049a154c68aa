//! Error types for the vCloud Director crate.
//!
//! Every failure the core can produce is one variant of [`VcdError`]. Server
//! communicated failures carry the decoded [`ErrorDetail`]; a task that
//! finished with status `error` is *not* an error here, it is data.

use crate::types::{ErrorDetail, Task};

use std::time::Duration;

/// Which side of the codec failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    Encode,
    Decode,
}

impl std::fmt::Display for CodecDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Network-layer failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused / DNS / TLS handshake
    Connect,
    /// Request or read timed out
    Timeout,
    /// Connection closed before the body was fully read
    Body,
    /// Anything else reqwest reports
    Other,
}

/// Crate error type.
#[derive(Debug, thiserror::Error)]
pub enum VcdError {
    /// Malformed or non-absolute resource handle.
    #[error("invalid resource address `{input}`: {reason}")]
    Addressing { input: String, reason: String },

    /// The caller combined an operation with the wrong body / result kind.
    #[error("invalid use of `{operation}`: {reason}")]
    Usage { operation: String, reason: String },

    /// Payload could not be encoded or decoded under its declared media type.
    #[error("failed to {direction} `{media_type}` payload ({len} bytes): {reason}")]
    Codec {
        direction: CodecDirection,
        media_type: String,
        len: usize,
        reason: String,
    },

    /// The exchange never produced an HTTP response.
    #[error("transport failure ({kind:?}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// 4xx answered by the server.
    #[error("request rejected with HTTP {status}: {}", .detail.message)]
    ClientRequest { status: u16, detail: ErrorDetail },

    /// 5xx answered by the server.
    #[error("server failed with HTTP {status}: {}", .detail.message)]
    Server { status: u16, detail: ErrorDetail },

    /// Any other non-success status.
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// The task tracker gave up waiting; `task` is the last snapshot seen.
    #[error("task {} still {:?} after {waited:?}", .task.href, .task.status)]
    Timeout { task: Box<Task>, waited: Duration },

    /// An operation catalog entry is internally inconsistent.
    #[error("catalog entry `{operation}` is invalid: {reason}")]
    Catalog { operation: String, reason: String },
}

impl VcdError {
    pub fn addressing(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Addressing {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn usage(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Usage {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    pub fn codec(
        direction: CodecDirection,
        media_type: impl Into<String>,
        len: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::Codec {
            direction,
            media_type: media_type.into(),
            len,
            reason: reason.into(),
        }
    }

    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    pub fn catalog(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Catalog {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Only network-layer failures may be retried, and only for reads
    /// (see [`crate::retry::RetryPolicy`]).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// HTTP status for server-communicated failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ClientRequest { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded server error detail, when there is one.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::ClientRequest { detail, .. } | Self::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VcdError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::transport(TransportErrorKind::Timeout, format!("HTTP timeout: {e}"))
        } else if e.is_connect() {
            Self::transport(TransportErrorKind::Connect, format!("Connection failed: {e}"))
        } else if e.is_body() || e.is_decode() {
            Self::transport(TransportErrorKind::Body, format!("Body read failed: {e}"))
        } else {
            Self::transport(TransportErrorKind::Other, format!("HTTP error: {e}"))
        }
    }
}

/// Convenience alias.
pub type VcdResult<T> = Result<T, VcdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_failures_are_retryable() {
        assert!(VcdError::transport(TransportErrorKind::Timeout, "slow").is_retryable());
        assert!(!VcdError::usage("powerOff", "body not allowed").is_retryable());
        assert!(!VcdError::ClientRequest {
            status: 403,
            detail: ErrorDetail::new("forbidden"),
        }
        .is_retryable());
    }

    #[test]
    fn codec_error_display_names_length_and_type() {
        let err = VcdError::codec(
            CodecDirection::Decode,
            "application/vnd.vmware.vcloud.task+xml",
            17,
            "unexpected EOF",
        );
        let s = err.to_string();
        assert!(s.contains("decode"));
        assert!(s.contains("17 bytes"));
        assert!(s.contains("task+xml"));
    }

    #[test]
    fn client_request_display_uses_server_message() {
        let err = VcdError::ClientRequest {
            status: 403,
            detail: ErrorDetail::new("Access is forbidden"),
        };
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().contains("Access is forbidden"));
    }
}
