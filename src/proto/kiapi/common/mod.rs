//! `kiapi.common`: request/response envelope.

pub mod commands;
pub mod types;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiRequestHeader {
    /// Token identifying the KiCad instance the client talks to.
    #[prost(string, tag = "1")]
    pub kicad_token: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub client_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiRequest {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ApiRequestHeader>,
    #[prost(message, optional, tag = "2")]
    pub message: ::core::option::Option<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiResponseHeader {
    #[prost(string, tag = "1")]
    pub kicad_token: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiResponseStatus {
    #[prost(enumeration = "ApiStatusCode", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub error_message: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApiResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ApiResponseHeader>,
    #[prost(message, optional, tag = "2")]
    pub status: ::core::option::Option<ApiResponseStatus>,
    #[prost(message, optional, tag = "3")]
    pub message: ::core::option::Option<::prost_types::Any>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ApiStatusCode {
    AsUnknown = 0,
    /// Request succeeded.
    AsOk = 1,
    /// Request timed out on the host side.
    AsTimeout = 2,
    /// The request could not be parsed or was missing required fields.
    AsBadRequest = 3,
    /// The host is not ready to reply (e.g. a dialog is open).
    AsNotReady = 4,
    /// No handler is registered for the request's message type.
    AsUnhandled = 5,
    /// The request token does not match this host instance.
    AsTokenMismatch = 6,
    /// The host is busy processing another request.
    AsBusy = 7,
    /// The handler exists but does not implement the requested operation.
    AsUnimplemented = 8,
}

impl ApiStatusCode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::AsUnknown => "AS_UNKNOWN",
            Self::AsOk => "AS_OK",
            Self::AsTimeout => "AS_TIMEOUT",
            Self::AsBadRequest => "AS_BAD_REQUEST",
            Self::AsNotReady => "AS_NOT_READY",
            Self::AsUnhandled => "AS_UNHANDLED",
            Self::AsTokenMismatch => "AS_TOKEN_MISMATCH",
            Self::AsBusy => "AS_BUSY",
            Self::AsUnimplemented => "AS_UNIMPLEMENTED",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "AS_UNKNOWN" => Some(Self::AsUnknown),
            "AS_OK" => Some(Self::AsOk),
            "AS_TIMEOUT" => Some(Self::AsTimeout),
            "AS_BAD_REQUEST" => Some(Self::AsBadRequest),
            "AS_NOT_READY" => Some(Self::AsNotReady),
            "AS_UNHANDLED" => Some(Self::AsUnhandled),
            "AS_TOKEN_MISMATCH" => Some(Self::AsTokenMismatch),
            "AS_BUSY" => Some(Self::AsBusy),
            "AS_UNIMPLEMENTED" => Some(Self::AsUnimplemented),
            _ => None,
        }
    }
}
