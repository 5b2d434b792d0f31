//! Packing of messages into `Any` and framing of the request/response
//! envelope.

use prost::Message;
use prost_types::Any;

use crate::error::KiCadError;
use crate::proto::common::{ApiRequest, ApiRequestHeader, ApiResponse, ApiStatusCode};
use crate::proto::ApiMessage;

const TYPE_URL_PREFIX: &str = "type.googleapis.com";

pub fn type_url(type_name: &str) -> String {
    format!("{TYPE_URL_PREFIX}/{type_name}")
}

/// The fully-qualified message name carried by a type URL (everything after
/// the last `/`).
pub fn type_name_of(type_url: &str) -> &str {
    type_url
        .rsplit_once('/')
        .map_or(type_url, |(_, name)| name)
}

/// True if `payload` is tagged as a `M`.
pub fn is<M: ApiMessage>(payload: &Any) -> bool {
    type_name_of(&payload.type_url) == M::TYPE_NAME
}

pub fn pack_any<M: ApiMessage>(message: &M) -> Any {
    Any {
        type_url: type_url(M::TYPE_NAME),
        value: message.encode_to_vec(),
    }
}

/// Decodes `payload` as a `M`.
///
/// # Panics
///
/// Panics if `payload` is tagged with any other message type. The caller
/// always knows which reply a command produces, so a mismatch means the
/// client and host disagree on the schema.
pub fn unpack_any<M: ApiMessage>(payload: &Any) -> Result<M, KiCadError> {
    let actual = type_name_of(&payload.type_url);
    assert!(
        actual == M::TYPE_NAME,
        "payload type mismatch: expected `{}`, got `{actual}`",
        M::TYPE_NAME
    );

    M::decode(payload.value.as_slice()).map_err(|err| KiCadError::ProtobufDecode(err.to_string()))
}

pub(crate) fn encode_request(token: &str, client_name: &str, command: Any) -> Vec<u8> {
    let request = ApiRequest {
        header: Some(ApiRequestHeader {
            kicad_token: token.to_string(),
            client_name: client_name.to_string(),
        }),
        message: Some(command),
    };

    request.encode_to_vec()
}

pub(crate) fn decode_response(bytes: &[u8]) -> Result<ApiResponse, KiCadError> {
    ApiResponse::decode(bytes).map_err(|err| KiCadError::ProtobufDecode(err.to_string()))
}

/// Maps every status other than `AS_OK` to an error. A reply without a status
/// counts as `AS_UNKNOWN`.
pub(crate) fn status_error(response: &ApiResponse) -> Option<KiCadError> {
    let (raw_code, message) = match response.status.as_ref() {
        Some(status) => (status.status, status.error_message.clone()),
        None => (
            ApiStatusCode::AsUnknown as i32,
            "response carried no status".to_string(),
        ),
    };
    let code = ApiStatusCode::try_from(raw_code).unwrap_or(ApiStatusCode::AsUnknown);

    if code == ApiStatusCode::AsOk {
        return None;
    }

    Some(KiCadError::ApiStatus {
        code,
        raw_code,
        message,
    })
}

pub(crate) fn unpack_payload<M: ApiMessage>(response: &ApiResponse) -> Result<M, KiCadError> {
    let payload = response
        .message
        .as_ref()
        .ok_or_else(|| KiCadError::MissingPayload {
            expected_type_url: type_url(M::TYPE_NAME),
        })?;

    unpack_any(payload)
}

#[cfg(test)]
mod tests {
    use prost_types::Any;

    use super::{pack_any, status_error, type_name_of, unpack_any, unpack_payload};
    use crate::error::KiCadError;
    use crate::proto::board::types as board_types;
    use crate::proto::common::commands as common_commands;
    use crate::proto::common::types as common_types;
    use crate::proto::common::{ApiResponse, ApiResponseStatus, ApiStatusCode};

    fn response_with_status(status: i32, message: &str) -> ApiResponse {
        ApiResponse {
            header: None,
            status: Some(ApiResponseStatus {
                status,
                error_message: message.to_string(),
            }),
            message: None,
        }
    }

    #[test]
    fn status_error_returns_none_for_ok() {
        let response = response_with_status(ApiStatusCode::AsOk as i32, "");
        assert!(status_error(&response).is_none());
    }

    #[test]
    fn status_error_returns_error_for_every_non_ok_code() {
        for code in 0..=8 {
            if code == ApiStatusCode::AsOk as i32 {
                continue;
            }
            let response = response_with_status(code, "nope");
            let err = status_error(&response).expect("non-ok status should map to an error");
            assert!(matches!(
                err,
                KiCadError::ApiStatus { code: c, .. } if c as i32 == code
            ));
        }
    }

    #[test]
    fn status_error_treats_missing_status_as_unknown() {
        let response = ApiResponse::default();
        let err = status_error(&response).expect("missing status should be an error");
        assert_eq!(err.status_code(), Some(ApiStatusCode::AsUnknown));
    }

    #[test]
    fn status_error_keeps_unrecognized_status_value() {
        let response = response_with_status(42, "new code");
        let err = status_error(&response).expect("unrecognized status should be an error");
        assert_eq!(err.status_code(), Some(ApiStatusCode::AsUnknown));
        assert_eq!(err.raw_status_code(), Some(42));
        assert!(err.to_string().contains("new code"));
    }

    #[test]
    fn status_error_keeps_host_message() {
        let response = response_with_status(ApiStatusCode::AsTokenMismatch as i32, "token mismatch");
        let err = status_error(&response).expect("token mismatch should be an error");
        let message = err.to_string();
        assert!(message.contains("AS_TOKEN_MISMATCH"));
        assert!(message.contains("token mismatch"));
    }

    #[test]
    fn pack_then_unpack_returns_equal_message() {
        let track = board_types::Track {
            id: Some(common_types::Kiid {
                value: "track-id".to_string(),
            }),
            start: Some(common_types::Vector2 { x_nm: 1, y_nm: 2 }),
            end: Some(common_types::Vector2 { x_nm: 3, y_nm: 4 }),
            width: Some(common_types::Distance { value_nm: 250_000 }),
            locked: common_types::LockedState::LsLocked as i32,
            layer: board_types::BoardLayer::BlBCu as i32,
            net: Some(board_types::Net {
                code: Some(board_types::NetCode { value: 3 }),
                name: "GND".to_string(),
            }),
        };

        let packed = pack_any(&track);
        assert_eq!(
            packed.type_url,
            "type.googleapis.com/kiapi.board.types.Track"
        );
        let unpacked: board_types::Track = unpack_any(&packed).expect("track should decode");
        assert_eq!(unpacked, track);
    }

    #[test]
    fn unpack_compares_only_the_type_name() {
        let packed = pack_any(&common_commands::GetVersion {});
        let relabeled = Any {
            type_url: "example.org/kiapi.common.commands.GetVersion".to_string(),
            value: packed.value,
        };
        assert_eq!(
            type_name_of(&relabeled.type_url),
            "kiapi.common.commands.GetVersion"
        );
        let _: common_commands::GetVersion =
            unpack_any(&relabeled).expect("prefix should not matter");
    }

    #[test]
    #[should_panic(expected = "payload type mismatch")]
    fn unpack_panics_on_type_mismatch() {
        let packed = pack_any(&board_types::Via::default());
        let _ = unpack_any::<board_types::Track>(&packed);
    }

    #[test]
    fn unpack_reports_corrupt_payload() {
        let payload = Any {
            type_url: super::type_url("kiapi.common.types.Kiid"),
            value: vec![0x0a, 0x05, b'a'],
        };
        let result = unpack_any::<common_types::Kiid>(&payload);
        assert!(matches!(result, Err(KiCadError::ProtobufDecode(_))));
    }

    #[test]
    fn unpack_payload_requires_a_message() {
        let response = response_with_status(ApiStatusCode::AsOk as i32, "");
        let result = unpack_payload::<common_commands::GetVersionResponse>(&response);
        assert!(matches!(result, Err(KiCadError::MissingPayload { .. })));
    }
}
