use std::time::Duration;

use thiserror::Error;

use crate::proto::common::ApiStatusCode;

/// Errors returned by every fallible operation in this crate.
///
/// Contract violations (a reply tagged with a different message type than the
/// caller asked for, or an item type the wrapper layer does not know) are not
/// represented here; they panic.
#[derive(Debug, Error)]
pub enum KiCadError {
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("KiCad IPC socket not available at `{socket_uri}`. Open KiCad and enable the API server first.")]
    SocketUnavailable { socket_uri: String },

    #[error("connection failed for `{socket_uri}`: {reason}")]
    Connection { socket_uri: String, reason: String },

    #[error("transport send failed: {reason}")]
    TransportSend { reason: String },

    #[error("transport receive failed: {reason}")]
    TransportReceive { reason: String },

    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("API status error `{}` ({raw_code}): {message}", .code.as_str_name())]
    ApiStatus {
        /// `AS_UNKNOWN` when the host sent a value this crate does not know.
        code: ApiStatusCode,
        /// The status value exactly as the host sent it.
        raw_code: i32,
        message: String,
    },

    #[error("item request status error `{code}`")]
    ItemStatus { code: String },

    #[error("API response missing payload for `{expected_type_url}`")]
    MissingPayload { expected_type_url: String },

    #[error("protobuf decode failed: {0}")]
    ProtobufDecode(String),

    #[error("runtime task join failed: {0}")]
    RuntimeJoin(String),

    #[error("mutex poisoned")]
    InternalPoisoned,

    #[error("no open PCB document found; open a board in KiCad first")]
    BoardNotOpen,

    #[error("multiple PCB documents are open; unable to choose one board context: {boards:?}")]
    AmbiguousBoardSelection { boards: Vec<String> },
}

impl KiCadError {
    /// True for failures of the socket itself, as opposed to a reply the host
    /// sent back.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::SocketUnavailable { .. }
                | Self::Connection { .. }
                | Self::TransportSend { .. }
                | Self::TransportReceive { .. }
                | Self::Timeout { .. }
        )
    }

    /// The host's status code, when the host rejected the request.
    pub fn status_code(&self) -> Option<ApiStatusCode> {
        match self {
            Self::ApiStatus { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The host's status value as received, including values newer than this
    /// crate's [`ApiStatusCode`].
    pub fn raw_status_code(&self) -> Option<i32> {
        match self {
            Self::ApiStatus { raw_code, .. } => Some(*raw_code),
            _ => None,
        }
    }
}

/// Failure of a single item inside a batch create or update.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("item rejected with `{code}`: {message}")]
pub struct ItemError {
    /// Host status name, e.g. `ISC_INVALID_DATA`.
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::KiCadError;
    use crate::proto::common::ApiStatusCode;

    #[test]
    fn timeout_is_a_transport_error() {
        let err = KiCadError::Timeout {
            timeout: Duration::from_millis(10),
        };
        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn api_status_exposes_code_and_renders_wire_name() {
        let err = KiCadError::ApiStatus {
            code: ApiStatusCode::AsBusy,
            raw_code: ApiStatusCode::AsBusy as i32,
            message: "editor busy".to_string(),
        };
        assert!(!err.is_transport());
        assert_eq!(err.status_code(), Some(ApiStatusCode::AsBusy));
        assert_eq!(err.raw_status_code(), Some(7));
        assert_eq!(err.to_string(), "API status error `AS_BUSY` (7): editor busy");
    }
}
