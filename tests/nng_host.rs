use std::thread::{self, JoinHandle};
use std::time::Duration;

use nng::options::{Options, RecvTimeout};
use nng::{Protocol, Socket};
use prost::Message;

use kipy::envelope;
use kipy::model::board::{BoardItem, BoardLayer, Track};
use kipy::proto::board::types as board_types;
use kipy::proto::common::commands as common_commands;
use kipy::proto::common::types as common_types;
use kipy::proto::common::{
    ApiRequest, ApiResponse, ApiResponseHeader, ApiResponseStatus, ApiStatusCode,
};
use kipy::{ClientBuilder, DocumentType, KiCad, KiCadError, Vector2};

const HOST_TOKEN: &str = "host-token";

/// Minimal stand-in for the editor: answers a handful of commands and keeps
/// created tracks in memory.
struct FakeEditor {
    tracks: Vec<board_types::Track>,
    next_id: u32,
}

impl FakeEditor {
    fn new() -> Self {
        Self {
            tracks: Vec::new(),
            next_id: 1,
        }
    }

    fn handle(&mut self, request: &ApiRequest) -> ApiResponse {
        let Some(payload) = request.message.as_ref() else {
            return status(ApiStatusCode::AsBadRequest, "missing message");
        };

        match envelope::type_name_of(&payload.type_url) {
            "kiapi.common.commands.Ping" => ok(None),
            "kiapi.common.commands.GetVersion" => ok(Some(envelope::pack_any(
                &common_commands::GetVersionResponse {
                    version: Some(common_types::KiCadVersion {
                        major: 9,
                        minor: 0,
                        patch: 1,
                        full_version: "9.0.1-test".to_string(),
                    }),
                },
            ))),
            "kiapi.common.commands.GetOpenDocuments" => ok(Some(envelope::pack_any(
                &common_commands::GetOpenDocumentsResponse {
                    documents: vec![common_types::DocumentSpecifier {
                        r#type: common_types::DocumentType::DoctypePcb as i32,
                        project: Some(common_types::ProjectSpecifier {
                            name: "demo".to_string(),
                            path: "/tmp/demo".to_string(),
                        }),
                        identifier: Some(
                            common_types::document_specifier::Identifier::BoardFilename(
                                "demo.kicad_pcb".to_string(),
                            ),
                        ),
                    }],
                },
            ))),
            "kiapi.common.commands.CreateItems" => {
                let command: common_commands::CreateItems =
                    envelope::unpack_any(payload).expect("create command");
                let created_items = command
                    .items
                    .iter()
                    .map(|item| {
                        let mut track: board_types::Track =
                            envelope::unpack_any(item).expect("only tracks are created");
                        track.id = Some(common_types::Kiid {
                            value: format!("track-{}", self.next_id),
                        });
                        self.next_id += 1;
                        self.tracks.push(track.clone());
                        common_commands::ItemCreationResult {
                            status: Some(common_commands::ItemStatus {
                                code: common_commands::ItemStatusCode::IscOk as i32,
                                error_message: String::new(),
                            }),
                            item: Some(envelope::pack_any(&track)),
                        }
                    })
                    .collect();
                ok(Some(envelope::pack_any(
                    &common_commands::CreateItemsResponse {
                        header: command.header,
                        status: common_types::ItemRequestStatus::IrsOk as i32,
                        created_items,
                    },
                )))
            }
            "kiapi.common.commands.GetItems" => ok(Some(envelope::pack_any(
                &common_commands::GetItemsResponse {
                    header: None,
                    status: common_types::ItemRequestStatus::IrsOk as i32,
                    items: self.tracks.iter().map(envelope::pack_any).collect(),
                },
            ))),
            _ => status(ApiStatusCode::AsUnhandled, "no handler available"),
        }
    }
}

fn ok(message: Option<prost_types::Any>) -> ApiResponse {
    ApiResponse {
        header: Some(ApiResponseHeader {
            kicad_token: HOST_TOKEN.to_string(),
        }),
        status: Some(ApiResponseStatus {
            status: ApiStatusCode::AsOk as i32,
            error_message: String::new(),
        }),
        message,
    }
}

fn status(code: ApiStatusCode, message: &str) -> ApiResponse {
    ApiResponse {
        header: Some(ApiResponseHeader {
            kicad_token: HOST_TOKEN.to_string(),
        }),
        status: Some(ApiResponseStatus {
            status: code as i32,
            error_message: message.to_string(),
        }),
        message: None,
    }
}

/// Serves `requests` round trips on `address`, then returns the requests seen.
fn spawn_host(address: &str, requests: usize) -> JoinHandle<Vec<ApiRequest>> {
    let socket = Socket::new(Protocol::Rep0).expect("rep socket");
    socket
        .set_opt::<RecvTimeout>(Some(Duration::from_secs(5)))
        .expect("recv timeout");
    socket.listen(address).expect("listen");

    thread::spawn(move || {
        let mut editor = FakeEditor::new();
        let mut seen = Vec::new();
        for _ in 0..requests {
            let bytes = socket.recv().expect("request");
            let request = ApiRequest::decode(bytes.as_slice()).expect("decode request");
            let response = editor.handle(&request);
            socket
                .send(response.encode_to_vec().as_slice())
                .map_err(|(_, err)| err)
                .expect("send reply");
            seen.push(request);
        }
        seen
    })
}

fn connect(address: &str) -> KiCad {
    let client = ClientBuilder::new()
        .socket_path(address)
        .client_name("nng-test")
        .token("")
        .timeout(Duration::from_secs(2))
        .connect()
        .expect("client should connect");
    KiCad::from_client(client)
}

#[test]
fn session_commands_round_trip_over_nng() {
    let address = "inproc://kipy-session";
    let host = spawn_host(address, 3);
    let kicad = connect(address);

    kicad.ping().expect("ping");
    let version = kicad.get_version().expect("version");
    assert_eq!(version.full_version, "9.0.1-test");
    let docs = kicad
        .get_open_documents(DocumentType::Pcb)
        .expect("open documents");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].board_filename.as_deref(), Some("demo.kicad_pcb"));

    let requests = host.join().expect("host thread");
    let headers: Vec<_> = requests
        .iter()
        .map(|request| request.header.clone().unwrap_or_default())
        .collect();
    assert!(headers.iter().all(|header| header.client_name == "nng-test"));
    assert_eq!(headers[0].kicad_token, "");
    assert_eq!(headers[1].kicad_token, HOST_TOKEN);
    assert_eq!(headers[2].kicad_token, HOST_TOKEN);
}

#[test]
fn created_tracks_come_back_with_identifiers() {
    let address = "inproc://kipy-create";
    let host = spawn_host(address, 3);
    let kicad = connect(address);

    let board = kicad.get_board().expect("board");
    assert_eq!(board.name(), "demo.kicad_pcb");

    let items: Vec<BoardItem> = (0..3_i32)
        .map(|index| {
            let mut track = Track::new();
            track.set_start(Vector2::from_xy_mm(f64::from(index), 0.0));
            track.set_end(Vector2::from_xy_mm(f64::from(index), 5.0));
            track.set_width(250_000);
            track.set_layer(BoardLayer::BlFCu);
            track.into()
        })
        .collect();
    let created = board.create_items(&items).expect("create");
    assert_eq!(created.len(), 3);
    for (index, result) in created.iter().enumerate() {
        let item = result.as_ref().expect("created item");
        assert_eq!(item.id(), Some(format!("track-{}", index + 1).as_str()));
    }

    let tracks = board.get_tracks().expect("tracks");
    let starts: Vec<Vector2> = tracks.iter().map(|track| track.start()).collect();
    assert_eq!(
        starts,
        vec![
            Vector2::from_xy(0, 0),
            Vector2::from_xy(1_000_000, 0),
            Vector2::from_xy(2_000_000, 0),
        ]
    );

    host.join().expect("host thread");
}

#[test]
fn unhandled_command_is_a_status_error() {
    let address = "inproc://kipy-unhandled";
    let host = spawn_host(address, 1);
    let kicad = connect(address);

    let err = kicad
        .refresh_editor(kipy::FrameType::FtPcbEditor)
        .expect_err("refresh should be rejected");
    assert_eq!(err.status_code(), Some(ApiStatusCode::AsUnhandled));
    assert!(!err.is_transport());

    host.join().expect("host thread");
}

#[test]
fn silent_host_times_out() {
    let address = "inproc://kipy-silent";
    let socket = Socket::new(Protocol::Rep0).expect("rep socket");
    socket.listen(address).expect("listen");

    let client = ClientBuilder::new()
        .socket_path(address)
        .timeout(Duration::from_millis(200))
        .connect()
        .expect("client should connect");

    let err = KiCad::from_client(client)
        .ping()
        .expect_err("ping should time out");
    assert!(matches!(err, KiCadError::Timeout { .. }));
    assert!(err.is_transport());
    drop(socket);
}

#[test]
fn client_redials_after_a_timeout() {
    let address = "inproc://kipy-redial";
    let socket = Socket::new(Protocol::Rep0).expect("rep socket");
    socket
        .set_opt::<RecvTimeout>(Some(Duration::from_secs(5)))
        .expect("recv timeout");
    socket.listen(address).expect("listen");

    let host = thread::spawn(move || {
        // The first request is dropped on the floor.
        let ignored = socket.recv().expect("first request");
        let bytes = socket.recv().expect("second request");
        let request = ApiRequest::decode(bytes.as_slice()).expect("decode request");
        socket
            .send(ok(None).encode_to_vec().as_slice())
            .map_err(|(_, err)| err)
            .expect("send reply");
        (ApiRequest::decode(ignored.as_slice()).expect("decode ignored"), request)
    });

    let client = ClientBuilder::new()
        .socket_path(address)
        .timeout(Duration::from_millis(300))
        .connect()
        .expect("client should connect");
    let kicad = KiCad::from_client(client);

    let err = kicad.ping().expect_err("first ping should time out");
    assert!(matches!(err, KiCadError::Timeout { .. }));
    kicad.ping().expect("second ping should go out on a fresh socket");

    let (ignored, answered) = host.join().expect("host thread");
    for request in [ignored, answered] {
        let payload = request.message.expect("request payload");
        assert_eq!(
            envelope::type_name_of(&payload.type_url),
            "kiapi.common.commands.Ping"
        );
    }
}

#[test]
fn missing_listener_fails_to_connect() {
    let err = ClientBuilder::new()
        .socket_path("inproc://kipy-nobody-home")
        .connect()
        .expect_err("dial should fail");
    assert!(matches!(err, KiCadError::Connection { .. }));
}
