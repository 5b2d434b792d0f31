//! Scripted in-process host for unit tests.

use std::fmt;
use std::sync::{Arc, Mutex};

use prost::Message;

use crate::client::{ClientBuilder, KiCadClient};
use crate::envelope;
use crate::error::KiCadError;
use crate::proto::common::{ApiRequest, ApiResponse, ApiResponseStatus, ApiStatusCode};
use crate::proto::ApiMessage;
use crate::transport::Transport;

type Handler = Box<dyn FnMut(&ApiRequest) -> ApiResponse + Send>;

/// Transport that answers each request with a closure and records what it
/// received.
pub(crate) struct MockHost {
    handler: Handler,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockHost {
    pub(crate) fn new(handler: impl FnMut(&ApiRequest) -> ApiResponse + Send + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared log of decoded requests, in arrival order.
    pub(crate) fn requests(&self) -> Arc<Mutex<Vec<ApiRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl fmt::Debug for MockHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockHost").finish_non_exhaustive()
    }
}

impl Transport for MockHost {
    fn roundtrip(&mut self, request: &[u8]) -> Result<Vec<u8>, KiCadError> {
        let request = ApiRequest::decode(request)
            .map_err(|err| KiCadError::TransportSend {
                reason: err.to_string(),
            })?;
        let response = (self.handler)(&request);
        self.requests
            .lock()
            .map_err(|_| KiCadError::InternalPoisoned)?
            .push(request);
        Ok(response.encode_to_vec())
    }
}

pub(crate) fn client(host: MockHost) -> KiCadClient {
    ClientBuilder::new()
        .token("mock-token")
        .client_name("mock-client")
        .transport(host)
        .build()
        .expect("mock client should build")
}

/// Decodes the command carried by `request`.
pub(crate) fn command<M: ApiMessage>(request: &ApiRequest) -> M {
    let payload = request.message.as_ref().expect("request should carry a command");
    envelope::unpack_any(payload).expect("command should decode")
}

/// Type name of the command carried by `request`.
pub(crate) fn command_name(request: &ApiRequest) -> &str {
    request
        .message
        .as_ref()
        .map_or("", |payload| envelope::type_name_of(&payload.type_url))
}

pub(crate) fn ok<M: ApiMessage>(message: &M) -> ApiResponse {
    ApiResponse {
        message: Some(envelope::pack_any(message)),
        ..ok_empty()
    }
}

pub(crate) fn ok_empty() -> ApiResponse {
    ApiResponse {
        header: None,
        status: Some(ApiResponseStatus {
            status: ApiStatusCode::AsOk as i32,
            error_message: String::new(),
        }),
        message: None,
    }
}

pub(crate) fn status(code: ApiStatusCode, message: &str) -> ApiResponse {
    ApiResponse {
        header: None,
        status: Some(ApiResponseStatus {
            status: code as i32,
            error_message: message.to_string(),
        }),
        message: None,
    }
}
