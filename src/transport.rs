//! Request/reply byte transport.
//!
//! The host speaks nng's REQ/REP protocol: one request out, exactly one reply
//! back, never more than one request in flight.

use std::fmt;
use std::time::Duration;

use nng::options::{Options, RecvTimeout, SendTimeout};
use nng::{Error as NngError, Protocol, Socket};

use crate::error::KiCadError;
use crate::log;

/// A half-duplex request/reply channel.
///
/// Implementations are not re-entrant; [`crate::KiCadClient`] serializes
/// access with a mutex.
pub trait Transport: Send + fmt::Debug {
    /// Sends one encoded request and blocks until its reply arrives.
    fn roundtrip(&mut self, request: &[u8]) -> Result<Vec<u8>, KiCadError>;
}

enum ConnectionState {
    Disconnected,
    Connected(Socket),
}

impl fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => f.write_str("Disconnected"),
            Self::Connected(_) => f.write_str("Connected"),
        }
    }
}

/// nng `Req0` socket that dials lazily and re-dials after any failure.
#[derive(Debug)]
pub struct NngTransport {
    socket_uri: String,
    timeout: Duration,
    state: ConnectionState,
}

impl NngTransport {
    /// Creates a disconnected transport. Nothing is dialed until the first
    /// round trip or an explicit [`NngTransport::connect`].
    pub fn new(socket_uri: impl Into<String>, timeout: Duration) -> Self {
        Self {
            socket_uri: socket_uri.into(),
            timeout,
            state: ConnectionState::Disconnected,
        }
    }

    pub fn socket_uri(&self) -> &str {
        &self.socket_uri
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected(_))
    }

    /// Dials now instead of on first use.
    pub fn connect(&mut self) -> Result<(), KiCadError> {
        self.socket().map(|_| ())
    }

    /// Closes the socket; the next round trip dials again.
    pub fn disconnect(&mut self) {
        if self.is_connected() {
            log::debug!("closing socket {}", self.socket_uri);
        }
        self.state = ConnectionState::Disconnected;
    }

    fn socket(&mut self) -> Result<&Socket, KiCadError> {
        if let ConnectionState::Disconnected = self.state {
            log::debug!("dialing {}", self.socket_uri);
            let socket = configured_socket(&self.socket_uri, self.timeout)?;
            self.state = ConnectionState::Connected(socket);
        }

        match &self.state {
            ConnectionState::Connected(socket) => Ok(socket),
            ConnectionState::Disconnected => Err(KiCadError::Connection {
                socket_uri: self.socket_uri.clone(),
                reason: "socket was not established".to_string(),
            }),
        }
    }
}

impl Transport for NngTransport {
    fn roundtrip(&mut self, request: &[u8]) -> Result<Vec<u8>, KiCadError> {
        let timeout = self.timeout;
        let result = self
            .socket()
            .and_then(|socket| socket_roundtrip(socket, request, timeout));

        if let Err(err) = &result {
            log::debug!("round trip on {} failed: {err}; dropping socket", self.socket_uri);
            self.state = ConnectionState::Disconnected;
        }

        result
    }
}

fn configured_socket(socket_uri: &str, timeout: Duration) -> Result<Socket, KiCadError> {
    let connection_error = |err: NngError| KiCadError::Connection {
        socket_uri: socket_uri.to_string(),
        reason: err.to_string(),
    };

    let socket = Socket::new(Protocol::Req0).map_err(connection_error)?;
    socket
        .set_opt::<SendTimeout>(Some(timeout))
        .map_err(connection_error)?;
    socket
        .set_opt::<RecvTimeout>(Some(timeout))
        .map_err(connection_error)?;
    socket.dial(socket_uri).map_err(connection_error)?;

    Ok(socket)
}

fn socket_roundtrip(
    socket: &Socket,
    request: &[u8],
    timeout: Duration,
) -> Result<Vec<u8>, KiCadError> {
    socket
        .send(request)
        .map_err(|(_, err)| map_send_error(err, timeout))?;

    let reply = socket
        .recv()
        .map_err(|err| map_receive_error(err, timeout))?;

    Ok(reply.as_slice().to_vec())
}

fn map_send_error(error: NngError, timeout: Duration) -> KiCadError {
    if error == NngError::TimedOut {
        return KiCadError::Timeout { timeout };
    }

    KiCadError::TransportSend {
        reason: error.to_string(),
    }
}

fn map_receive_error(error: NngError, timeout: Duration) -> KiCadError {
    if error == NngError::TimedOut {
        return KiCadError::Timeout { timeout };
    }

    KiCadError::TransportReceive {
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nng::Error as NngError;

    use super::{map_receive_error, map_send_error, NngTransport, Transport};
    use crate::error::KiCadError;

    #[test]
    fn timeouts_map_to_timeout_error() {
        let timeout = Duration::from_millis(25);
        assert!(matches!(
            map_send_error(NngError::TimedOut, timeout),
            KiCadError::Timeout { timeout: t } if t == timeout
        ));
        assert!(matches!(
            map_receive_error(NngError::TimedOut, timeout),
            KiCadError::Timeout { .. }
        ));
    }

    #[test]
    fn other_faults_map_to_send_and_receive_errors() {
        let timeout = Duration::from_millis(25);
        assert!(matches!(
            map_send_error(NngError::Closed, timeout),
            KiCadError::TransportSend { .. }
        ));
        assert!(matches!(
            map_receive_error(NngError::ConnectionReset, timeout),
            KiCadError::TransportReceive { .. }
        ));
    }

    #[test]
    fn new_transport_starts_disconnected() {
        let transport = NngTransport::new("inproc://kipy-unused", Duration::from_millis(50));
        assert!(!transport.is_connected());
        assert_eq!(transport.socket_uri(), "inproc://kipy-unused");
    }

    #[test]
    fn failed_dial_leaves_transport_disconnected() {
        let mut transport =
            NngTransport::new("bogus-scheme://nowhere", Duration::from_millis(50));
        let result = transport.roundtrip(b"ping");
        assert!(matches!(result, Err(KiCadError::Connection { .. })));
        assert!(!transport.is_connected());
    }
}
