use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::envelope;
use crate::error::KiCadError;
use crate::log;
use crate::proto::common::ApiResponse;
use crate::proto::ApiMessage;
use crate::transport::{NngTransport, Transport};

const KICAD_API_SOCKET_ENV: &str = "KICAD_API_SOCKET";
const KICAD_API_TOKEN_ENV: &str = "KICAD_API_TOKEN";

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3_000);

/// Typed command dispatcher over one transport.
///
/// Cloning is cheap; clones share the transport and the session token. Calls
/// from several threads are serialized, since the underlying channel allows
/// only one request in flight.
#[derive(Clone, Debug)]
pub struct KiCadClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    transport: Mutex<Box<dyn Transport>>,
    token: Mutex<String>,
    client_name: String,
    timeout: Duration,
    socket_uri: String,
}

#[derive(Debug)]
pub struct ClientBuilder {
    timeout: Duration,
    socket_uri: Option<String>,
    token: Option<String>,
    client_name: Option<String>,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            socket_uri: None,
            token: None,
            client_name: None,
            transport: None,
        }
    }

    /// Send and receive timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Socket path or URI; a bare path gets an `ipc://` prefix. Overrides
    /// `KICAD_API_SOCKET`.
    pub fn socket_path(mut self, socket_path: impl Into<String>) -> Self {
        self.socket_uri = Some(socket_path.into());
        self
    }

    /// Instance token. Overrides `KICAD_API_TOKEN`. When neither is set the
    /// client adopts the token from the first reply.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Uses `transport` instead of an nng socket. Socket settings are ignored.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Builds the client without touching the socket. The first request dials.
    pub fn build(self) -> Result<KiCadClient, KiCadError> {
        self.finish(false)
    }

    /// Builds the client and dials immediately, so a missing host is reported
    /// here rather than on the first request.
    pub fn connect(self) -> Result<KiCadClient, KiCadError> {
        self.finish(true)
    }

    fn finish(self, dial_now: bool) -> Result<KiCadClient, KiCadError> {
        if self.timeout.is_zero() {
            return Err(KiCadError::Config {
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        let timeout = self.timeout;
        let (transport, socket_uri): (Box<dyn Transport>, String) = match self.transport {
            Some(transport) => (transport, "custom://".to_string()),
            None => {
                let socket_uri = resolve_socket_uri(self.socket_uri.as_deref());
                let mut transport = NngTransport::new(socket_uri.clone(), timeout);
                if dial_now {
                    if is_missing_ipc_socket(&socket_uri) {
                        return Err(KiCadError::SocketUnavailable { socket_uri });
                    }
                    transport.connect()?;
                }
                (Box::new(transport), socket_uri)
            }
        };

        let token = self
            .token
            .or_else(|| std::env::var(KICAD_API_TOKEN_ENV).ok())
            .unwrap_or_default();

        let client_name = self.client_name.unwrap_or_else(default_client_name);

        Ok(KiCadClient {
            inner: Arc::new(ClientInner {
                transport: Mutex::new(transport),
                token: Mutex::new(token),
                client_name,
                timeout,
                socket_uri,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KiCadClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Connects with defaults and environment overrides.
    pub fn connect() -> Result<Self, KiCadError> {
        ClientBuilder::new().connect()
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub fn socket_uri(&self) -> &str {
        &self.inner.socket_uri
    }

    pub fn client_name(&self) -> &str {
        &self.inner.client_name
    }

    /// The current session token; empty until one is configured or adopted.
    pub fn token(&self) -> Result<String, KiCadError> {
        Ok(self
            .inner
            .token
            .lock()
            .map_err(|_| KiCadError::InternalPoisoned)?
            .clone())
    }

    /// Sends `command` and decodes the reply as `R`.
    ///
    /// Only `AS_OK` counts as success; any other status is returned as
    /// [`KiCadError::ApiStatus`] without looking at the payload.
    ///
    /// # Panics
    ///
    /// Panics if the host replies with a message type other than `R`.
    pub fn send<C, R>(&self, command: &C) -> Result<R, KiCadError>
    where
        C: ApiMessage,
        R: ApiMessage,
    {
        let response = self.roundtrip_command(command)?;
        envelope::unpack_payload(&response)
    }

    /// Sends `command` for its side effect, ignoring any reply payload.
    pub fn execute<C: ApiMessage>(&self, command: &C) -> Result<(), KiCadError> {
        self.roundtrip_command(command).map(|_| ())
    }

    fn roundtrip_command<C: ApiMessage>(&self, command: &C) -> Result<ApiResponse, KiCadError> {
        let token = self.token()?;
        let request = envelope::encode_request(
            &token,
            &self.inner.client_name,
            envelope::pack_any(command),
        );

        let response_bytes = {
            let mut transport = self
                .inner
                .transport
                .lock()
                .map_err(|_| KiCadError::InternalPoisoned)?;
            transport.roundtrip(&request)?
        };

        let response = envelope::decode_response(&response_bytes)?;

        if let Some(err) = envelope::status_error(&response) {
            log::debug!("{} rejected: {err}", C::TYPE_NAME);
            return Err(err);
        }

        if token.is_empty() {
            if let Some(header) = response.header.as_ref() {
                if !header.kicad_token.is_empty() {
                    let mut guard = self
                        .inner
                        .token
                        .lock()
                        .map_err(|_| KiCadError::InternalPoisoned)?;
                    if guard.is_empty() {
                        *guard = header.kicad_token.clone();
                    }
                }
            }
        }

        Ok(response)
    }
}

fn resolve_socket_uri(explicit: Option<&str>) -> String {
    if let Some(socket) = explicit {
        return normalize_socket_uri(socket);
    }

    if let Ok(socket) = std::env::var(KICAD_API_SOCKET_ENV) {
        if !socket.is_empty() {
            return normalize_socket_uri(&socket);
        }
    }

    default_socket_uri()
}

#[cfg(target_os = "windows")]
fn default_socket_uri() -> String {
    r"ipc://\\.\pipe\kicad".to_string()
}

#[cfg(not(target_os = "windows"))]
fn default_socket_uri() -> String {
    if let Some(home) = std::env::var_os("HOME") {
        let flatpak = PathBuf::from(home)
            .join(".var")
            .join("app")
            .join("org.kicad.KiCad")
            .join("cache")
            .join("tmp")
            .join("kicad")
            .join("api.sock");
        if flatpak.exists() {
            return normalize_socket_uri(flatpak.to_string_lossy().as_ref());
        }
    }

    "ipc:///tmp/kicad/api.sock".to_string()
}

fn normalize_socket_uri(socket: &str) -> String {
    if socket.contains("://") {
        return socket.to_string();
    }

    format!("ipc://{socket}")
}

fn ipc_path_from_uri(socket_uri: &str) -> Option<PathBuf> {
    let raw_path = socket_uri.strip_prefix("ipc://")?;
    Some(PathBuf::from(raw_path))
}

// Named pipes are not visible through the filesystem on Windows.
#[cfg(target_os = "windows")]
fn is_missing_ipc_socket(_socket_uri: &str) -> bool {
    false
}

#[cfg(not(target_os = "windows"))]
fn is_missing_ipc_socket(socket_uri: &str) -> bool {
    if let Some(path) = ipc_path_from_uri(socket_uri) {
        return !path.exists();
    }

    false
}

fn default_client_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0);

    format!("kipy-{}-{millis}", std::process::id())
}
