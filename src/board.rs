use std::collections::BTreeMap;

use prost_types::Any;

use crate::client::KiCadClient;
use crate::error::{ItemError, KiCadError};
use crate::log;
use crate::model::board::{
    unwrap_item, BoardItem, BoardLayerClass, BoardLayerGraphicsDefaults, BoardStackup,
    FootprintInstance, Net, Pad, Track, Via, Zone,
};
use crate::model::common::{DocumentSpecifier, KiCadObjectType, TitleBlockInfo};
use crate::proto::board::commands as board_commands;
use crate::proto::common::commands as common_commands;
use crate::proto::common::types as common_types;
use crate::proto::ApiMessage;

/// Outcome of creating or updating one item: the host's copy of the item, or
/// the reason it was rejected.
pub type ItemResult = Result<BoardItem, ItemError>;

/// Outcome of deleting one item: its identifier, or the reason it was kept.
pub type DeletionResult = Result<String, ItemError>;

/// Host-side order of the entries in a graphics defaults reply.
const GRAPHICS_DEFAULT_CLASSES: [BoardLayerClass; 6] = [
    BoardLayerClass::BlcSilkscreen,
    BoardLayerClass::BlcCopper,
    BoardLayerClass::BlcEdges,
    BoardLayerClass::BlcCourtyard,
    BoardLayerClass::BlcFabrication,
    BoardLayerClass::BlcOther,
];

/// An open commit on the host. End it with [`Board::push_commit`] or
/// [`Board::drop_commit`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an open commit blocks other edits until it is pushed or dropped"]
pub struct Commit {
    id: String,
}

impl Commit {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A board document open in the PCB editor.
#[derive(Clone, Debug)]
pub struct Board {
    client: KiCadClient,
    document: DocumentSpecifier,
}

impl Board {
    pub fn new(client: KiCadClient, document: DocumentSpecifier) -> Self {
        Self { client, document }
    }

    /// The board's file name.
    pub fn name(&self) -> &str {
        self.document.board_filename.as_deref().unwrap_or_default()
    }

    pub fn document(&self) -> &DocumentSpecifier {
        &self.document
    }

    /// Adds `items` to the board.
    ///
    /// The reply holds one result per submitted item, in submission order.
    /// Fails as a whole only when the host rejects the request itself.
    pub fn create_items(&self, items: &[BoardItem]) -> Result<Vec<ItemResult>, KiCadError> {
        let command = common_commands::CreateItems {
            header: Some(self.item_header()),
            items: items.iter().map(BoardItem::pack).collect(),
            container: None,
        };
        let response: common_commands::CreateItemsResponse = self.client.send(&command)?;
        check_request_status(response.status)?;

        response
            .created_items
            .into_iter()
            .map(|result| item_result(result.status, result.item))
            .collect()
    }

    /// Items of the given types; every type when `types` is empty.
    pub fn get_items(&self, types: &[KiCadObjectType]) -> Result<Vec<BoardItem>, KiCadError> {
        let command = common_commands::GetItems {
            header: Some(self.item_header()),
            types: types.iter().map(|ty| *ty as i32).collect(),
        };
        let response: common_commands::GetItemsResponse = self.client.send(&command)?;
        check_request_status(response.status)?;

        response.items.iter().map(unwrap_item).collect()
    }

    pub fn get_tracks(&self) -> Result<Vec<Track>, KiCadError> {
        Ok(self
            .get_items(&[KiCadObjectType::KotPcbTrace])?
            .into_iter()
            .filter_map(|item| match item {
                BoardItem::Track(track) => Some(track),
                _ => None,
            })
            .collect())
    }

    pub fn get_vias(&self) -> Result<Vec<Via>, KiCadError> {
        Ok(self
            .get_items(&[KiCadObjectType::KotPcbVia])?
            .into_iter()
            .filter_map(|item| match item {
                BoardItem::Via(via) => Some(via),
                _ => None,
            })
            .collect())
    }

    pub fn get_footprints(&self) -> Result<Vec<FootprintInstance>, KiCadError> {
        Ok(self
            .get_items(&[KiCadObjectType::KotPcbFootprint])?
            .into_iter()
            .filter_map(|item| match item {
                BoardItem::Footprint(footprint) => Some(footprint),
                _ => None,
            })
            .collect())
    }

    pub fn get_pads(&self) -> Result<Vec<Pad>, KiCadError> {
        Ok(self
            .get_items(&[KiCadObjectType::KotPcbPad])?
            .into_iter()
            .filter_map(|item| match item {
                BoardItem::Pad(pad) => Some(pad),
                _ => None,
            })
            .collect())
    }

    pub fn get_zones(&self) -> Result<Vec<Zone>, KiCadError> {
        Ok(self
            .get_items(&[KiCadObjectType::KotPcbZone])?
            .into_iter()
            .filter_map(|item| match item {
                BoardItem::Zone(zone) => Some(zone),
                _ => None,
            })
            .collect())
    }

    /// Replaces existing items with `items`, matched by identifier.
    pub fn update_items(&self, items: &[BoardItem]) -> Result<Vec<ItemResult>, KiCadError> {
        let command = common_commands::UpdateItems {
            header: Some(self.item_header()),
            items: items.iter().map(BoardItem::pack).collect(),
        };
        let response: common_commands::UpdateItemsResponse = self.client.send(&command)?;
        check_request_status(response.status)?;

        response
            .updated_items
            .into_iter()
            .map(|result| item_result(result.status, result.item))
            .collect()
    }

    pub fn remove_items<I, S>(&self, ids: I) -> Result<Vec<DeletionResult>, KiCadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = common_commands::DeleteItems {
            header: Some(self.item_header()),
            item_ids: kiids(ids),
        };
        let response: common_commands::DeleteItemsResponse = self.client.send(&command)?;
        check_request_status(response.status)?;

        Ok(response
            .deleted_items
            .into_iter()
            .map(|result| {
                let status = common_commands::ItemDeletionStatus::try_from(result.status)
                    .unwrap_or(common_commands::ItemDeletionStatus::IdsUnknown);
                let id = result.id.map(|id| id.value).unwrap_or_default();
                if status == common_commands::ItemDeletionStatus::IdsOk {
                    Ok(id)
                } else {
                    Err(ItemError {
                        code: status.as_str_name().to_string(),
                        message: format!("item `{id}` was not deleted"),
                    })
                }
            })
            .collect())
    }

    pub fn get_selection(&self) -> Result<Vec<BoardItem>, KiCadError> {
        let command = common_commands::GetSelection {
            header: Some(self.item_header()),
            types: Vec::new(),
        };
        let response: common_commands::SelectionResponse = self.client.send(&command)?;

        response.items.iter().map(unwrap_item).collect()
    }

    /// Adds items to the selection and returns the resulting selection.
    pub fn add_to_selection<I, S>(&self, ids: I) -> Result<Vec<BoardItem>, KiCadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = common_commands::AddToSelection {
            header: Some(self.item_header()),
            items: kiids(ids),
        };
        let response: common_commands::SelectionResponse = self.client.send(&command)?;

        response.items.iter().map(unwrap_item).collect()
    }

    pub fn clear_selection(&self) -> Result<(), KiCadError> {
        self.client.execute(&common_commands::ClearSelection {
            header: Some(self.item_header()),
        })
    }

    /// Opens a commit so that the following edits become one undo step.
    pub fn begin_commit(&self) -> Result<Commit, KiCadError> {
        let response: common_commands::BeginCommitResponse =
            self.client.send(&common_commands::BeginCommit {})?;

        let id = response
            .id
            .map(|id| id.value)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| KiCadError::MissingPayload {
                expected_type_url: <common_types::Kiid as ApiMessage>::TYPE_NAME.to_string(),
            })?;

        log::debug!("opened commit {id}");
        Ok(Commit { id })
    }

    /// Applies the edits made since `commit` was opened.
    pub fn push_commit(&self, commit: Commit, message: &str) -> Result<(), KiCadError> {
        self.end_commit(commit, common_commands::CommitAction::CmaCommit, message)
    }

    /// Discards the edits made since `commit` was opened.
    pub fn drop_commit(&self, commit: Commit) -> Result<(), KiCadError> {
        self.end_commit(commit, common_commands::CommitAction::CmaDrop, "")
    }

    pub fn get_stackup(&self) -> Result<BoardStackup, KiCadError> {
        let command = board_commands::GetBoardStackup {
            board: Some(self.document.to_proto()),
        };
        let response: board_commands::BoardStackupResponse = self.client.send(&command)?;

        response
            .stackup
            .map(BoardStackup::from)
            .ok_or_else(|| KiCadError::MissingPayload {
                expected_type_url: "kiapi.board.BoardStackup".to_string(),
            })
    }

    /// Default text and line settings for each class of board layer.
    pub fn get_graphics_defaults(
        &self,
    ) -> Result<BTreeMap<BoardLayerClass, BoardLayerGraphicsDefaults>, KiCadError> {
        let command = board_commands::GetGraphicsDefaults {
            board: Some(self.document.to_proto()),
        };
        let response: board_commands::GraphicsDefaultsResponse = self.client.send(&command)?;

        let layers = response.defaults.unwrap_or_default().layers;
        if layers.len() < GRAPHICS_DEFAULT_CLASSES.len() {
            log::warning!(
                "graphics defaults reply has {} layer classes, expected {}",
                layers.len(),
                GRAPHICS_DEFAULT_CLASSES.len()
            );
            return Err(KiCadError::MissingPayload {
                expected_type_url: "kiapi.board.BoardLayerGraphicsDefaults".to_string(),
            });
        }

        Ok(GRAPHICS_DEFAULT_CLASSES
            .into_iter()
            .zip(layers.into_iter().map(BoardLayerGraphicsDefaults::from))
            .collect())
    }

    /// Nets on the board, optionally restricted to the named net classes.
    pub fn get_nets(&self, netclass_filter: &[&str]) -> Result<Vec<Net>, KiCadError> {
        let command = board_commands::GetNets {
            board: Some(self.document.to_proto()),
            netclass_filter: netclass_filter.iter().map(|name| name.to_string()).collect(),
        };
        let response: board_commands::NetsResponse = self.client.send(&command)?;

        Ok(response.nets.into_iter().map(Net::from).collect())
    }

    /// Starts an interactive move of the given items in the editor.
    pub fn interactive_move<I, S>(&self, ids: I) -> Result<(), KiCadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.client.execute(&board_commands::InteractiveMoveItems {
            board: Some(self.document.to_proto()),
            items: kiids(ids),
        })
    }

    /// Refills every zone on the board. The host answers `AS_BUSY` to other
    /// commands until the refill finishes.
    pub fn refill_zones(&self) -> Result<(), KiCadError> {
        self.client.execute(&board_commands::RefillZones {
            board: Some(self.document.to_proto()),
            zones: Vec::new(),
        })
    }

    pub fn get_title_block_info(&self) -> Result<TitleBlockInfo, KiCadError> {
        let command = common_commands::GetTitleBlockInfo {
            document: Some(self.document.to_proto()),
        };
        let response: common_types::TitleBlockInfo = self.client.send(&command)?;

        Ok(TitleBlockInfo::from(response))
    }

    fn end_commit(
        &self,
        commit: Commit,
        action: common_commands::CommitAction,
        message: &str,
    ) -> Result<(), KiCadError> {
        log::debug!("ending commit {} with {}", commit.id, action.as_str_name());
        self.client.execute(&common_commands::EndCommit {
            id: Some(common_types::Kiid { value: commit.id }),
            action: action as i32,
            message: message.to_string(),
        })
    }

    fn item_header(&self) -> common_types::ItemHeader {
        common_types::ItemHeader {
            document: Some(self.document.to_proto()),
            container: None,
            field_mask: None,
        }
    }
}

fn kiids<I, S>(ids: I) -> Vec<common_types::Kiid>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter()
        .map(|id| common_types::Kiid { value: id.into() })
        .collect()
}

fn check_request_status(status: i32) -> Result<(), KiCadError> {
    let status = common_types::ItemRequestStatus::try_from(status)
        .unwrap_or(common_types::ItemRequestStatus::IrsUnknown);

    if status != common_types::ItemRequestStatus::IrsOk {
        return Err(KiCadError::ItemStatus {
            code: status.as_str_name().to_string(),
        });
    }

    Ok(())
}

fn item_result(
    status: Option<common_commands::ItemStatus>,
    item: Option<Any>,
) -> Result<ItemResult, KiCadError> {
    let status = status.unwrap_or_default();
    let code = common_commands::ItemStatusCode::try_from(status.code)
        .unwrap_or(common_commands::ItemStatusCode::IscUnknown);

    if code != common_commands::ItemStatusCode::IscOk {
        return Ok(Err(ItemError {
            code: code.as_str_name().to_string(),
            message: status.error_message,
        }));
    }

    let item = item.ok_or_else(|| KiCadError::MissingPayload {
        expected_type_url: "board item".to_string(),
    })?;
    unwrap_item(&item).map(Ok)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Board, GRAPHICS_DEFAULT_CLASSES};
    use crate::error::KiCadError;
    use crate::geometry::Vector2;
    use crate::mock::{self, MockHost};
    use crate::model::board::{BoardItem, BoardLayer, BoardLayerClass, Pad, Track, Via};
    use crate::model::common::{DocumentSpecifier, DocumentType, KiCadObjectType, ProjectInfo};
    use crate::proto::board as board_proto;
    use crate::proto::board::commands as board_commands;
    use crate::proto::board::types as board_types;
    use crate::proto::common::commands as common_commands;
    use crate::proto::common::types as common_types;
    use crate::proto::common::ApiRequest;
    use crate::wrapper::Wrapper;

    fn document() -> DocumentSpecifier {
        DocumentSpecifier {
            document_type: DocumentType::Pcb,
            board_filename: Some("demo.kicad_pcb".to_string()),
            project: ProjectInfo {
                name: Some("demo".to_string()),
                path: Some(PathBuf::from("/tmp/demo")),
            },
        }
    }

    fn board(host: MockHost) -> Board {
        Board::new(mock::client(host), document())
    }

    fn kiid(value: &str) -> Option<common_types::Kiid> {
        Some(common_types::Kiid {
            value: value.to_string(),
        })
    }

    fn ok_status() -> Option<common_commands::ItemStatus> {
        Some(common_commands::ItemStatus {
            code: common_commands::ItemStatusCode::IscOk as i32,
            error_message: String::new(),
        })
    }

    /// Echoes created items back with fresh identifiers, like the host does.
    fn echo_created(request: &ApiRequest) -> crate::proto::common::ApiResponse {
        let command: common_commands::CreateItems = mock::command(request);
        let created_items = command
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let item = match crate::envelope::type_name_of(&item.type_url) {
                    "kiapi.board.types.Track" => {
                        let mut track: board_types::Track =
                            crate::envelope::unpack_any(&item).expect("track");
                        track.id = kiid(&format!("id-{index}"));
                        crate::envelope::pack_any(&track)
                    }
                    "kiapi.board.types.Via" => {
                        let mut via: board_types::Via =
                            crate::envelope::unpack_any(&item).expect("via");
                        via.id = kiid(&format!("id-{index}"));
                        crate::envelope::pack_any(&via)
                    }
                    other => panic!("unexpected item {other}"),
                };
                common_commands::ItemCreationResult {
                    status: ok_status(),
                    item: Some(item),
                }
            })
            .collect();

        mock::ok(&common_commands::CreateItemsResponse {
            header: command.header,
            status: common_types::ItemRequestStatus::IrsOk as i32,
            created_items,
        })
    }

    #[test]
    fn create_items_preserves_count_and_order() {
        let host = MockHost::new(echo_created);
        let requests = host.requests();
        let board = board(host);

        let mut first = Track::new();
        first.set_start(Vector2::from_xy(0, 0));
        first.set_end(Vector2::from_xy(1_000_000, 0));
        first.set_layer(BoardLayer::BlFCu);
        let mut via = Via::new();
        via.set_position(Vector2::from_xy(1_000_000, 0));
        let mut second = Track::new();
        second.set_layer(BoardLayer::BlBCu);

        let items: Vec<BoardItem> = vec![first.into(), via.into(), second.into()];
        let results = board.create_items(&items).expect("create should succeed");

        assert_eq!(results.len(), 3);
        let created: Vec<BoardItem> = results
            .into_iter()
            .map(|result| result.expect("item should be created"))
            .collect();
        assert!(matches!(&created[0], BoardItem::Track(t) if t.layer() == BoardLayer::BlFCu));
        assert!(matches!(&created[1], BoardItem::Via(_)));
        assert!(matches!(&created[2], BoardItem::Track(t) if t.layer() == BoardLayer::BlBCu));
        for (index, item) in created.iter().enumerate() {
            assert_eq!(item.id(), Some(format!("id-{index}").as_str()));
        }

        let requests = requests.lock().expect("requests");
        let command: common_commands::CreateItems = mock::command(&requests[0]);
        let header_document = command.header.and_then(|header| header.document);
        assert_eq!(header_document, Some(document().to_proto()));
    }

    #[test]
    fn create_items_reports_per_item_failures() {
        let host = MockHost::new(|request| {
            let command: common_commands::CreateItems = mock::command(request);
            mock::ok(&common_commands::CreateItemsResponse {
                header: None,
                status: common_types::ItemRequestStatus::IrsOk as i32,
                created_items: vec![
                    common_commands::ItemCreationResult {
                        status: ok_status(),
                        item: command.items.first().cloned(),
                    },
                    common_commands::ItemCreationResult {
                        status: Some(common_commands::ItemStatus {
                            code: common_commands::ItemStatusCode::IscInvalidData as i32,
                            error_message: "pad outside footprint".to_string(),
                        }),
                        item: None,
                    },
                ],
            })
        });
        let board = board(host);

        let items: Vec<BoardItem> = vec![Track::new().into(), Pad::new().into()];
        let results = board.create_items(&items).expect("request should succeed");

        assert!(results[0].is_ok());
        let err = results[1].as_ref().expect_err("second item should fail");
        assert_eq!(err.code, "ISC_INVALID_DATA");
        assert_eq!(err.message, "pad outside footprint");
    }

    #[test]
    fn create_items_fails_when_the_request_is_rejected() {
        let host = MockHost::new(|_| {
            mock::ok(&common_commands::CreateItemsResponse {
                header: None,
                status: common_types::ItemRequestStatus::IrsDocumentNotFound as i32,
                created_items: Vec::new(),
            })
        });
        let board = board(host);

        let err = board
            .create_items(&[Track::new().into()])
            .expect_err("request should fail");
        assert!(
            matches!(err, KiCadError::ItemStatus { ref code } if code == "IRS_DOCUMENT_NOT_FOUND")
        );
    }

    #[test]
    fn get_tracks_filters_by_type() {
        let host = MockHost::new(|request| {
            let command: common_commands::GetItems = mock::command(request);
            assert_eq!(command.types, vec![KiCadObjectType::KotPcbTrace as i32]);
            let track = board_types::Track {
                id: kiid("t1"),
                ..Default::default()
            };
            mock::ok(&common_commands::GetItemsResponse {
                header: None,
                status: common_types::ItemRequestStatus::IrsOk as i32,
                items: vec![crate::envelope::pack_any(&track)],
            })
        });
        let board = board(host);

        let tracks = board.get_tracks().expect("tracks");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id(), Some("t1"));
    }

    #[test]
    fn remove_items_reports_each_deletion() {
        let host = MockHost::new(|request| {
            let command: common_commands::DeleteItems = mock::command(request);
            let deleted_items = command
                .item_ids
                .into_iter()
                .map(|id| common_commands::ItemDeletionResult {
                    status: if id.value == "locked" {
                        common_commands::ItemDeletionStatus::IdsImmutable as i32
                    } else {
                        common_commands::ItemDeletionStatus::IdsOk as i32
                    },
                    id: Some(id),
                })
                .collect();
            mock::ok(&common_commands::DeleteItemsResponse {
                header: None,
                status: common_types::ItemRequestStatus::IrsOk as i32,
                deleted_items,
            })
        });
        let board = board(host);

        let results = board.remove_items(["a", "locked"]).expect("delete");
        assert_eq!(results[0], Ok("a".to_string()));
        assert_eq!(
            results[1].as_ref().map_err(|err| err.code.as_str()),
            Err("IDS_IMMUTABLE")
        );
    }

    #[test]
    fn commit_lifecycle_sends_matching_ids() {
        let host = MockHost::new(|request| match mock::command_name(request) {
            "kiapi.common.commands.BeginCommit" => {
                mock::ok(&common_commands::BeginCommitResponse { id: kiid("c-1") })
            }
            _ => mock::ok(&common_commands::EndCommitResponse {}),
        });
        let requests = host.requests();
        let board = board(host);

        let commit = board.begin_commit().expect("begin");
        assert_eq!(commit.id(), "c-1");
        board.push_commit(commit, "Add tracks").expect("push");
        let commit = board.begin_commit().expect("begin again");
        board.drop_commit(commit).expect("drop");

        let requests = requests.lock().expect("requests");
        let pushed: common_commands::EndCommit = mock::command(&requests[1]);
        assert_eq!(pushed.id, kiid("c-1"));
        assert_eq!(pushed.action, common_commands::CommitAction::CmaCommit as i32);
        assert_eq!(pushed.message, "Add tracks");
        let dropped: common_commands::EndCommit = mock::command(&requests[3]);
        assert_eq!(dropped.action, common_commands::CommitAction::CmaDrop as i32);
    }

    #[test]
    fn begin_commit_without_id_is_an_error() {
        let host = MockHost::new(|_| mock::ok(&common_commands::BeginCommitResponse { id: None }));
        let board = board(host);
        assert!(matches!(
            board.begin_commit(),
            Err(KiCadError::MissingPayload { .. })
        ));
    }

    fn graphics_defaults_reply(count: usize) -> MockHost {
        MockHost::new(move |_| {
            let layers = (0..count)
                .map(|index| board_proto::BoardLayerGraphicsDefaults {
                    line_thickness: Some(common_types::Distance {
                        value_nm: (index as i64 + 1) * 1_000,
                    }),
                    ..Default::default()
                })
                .collect();
            mock::ok(&board_commands::GraphicsDefaultsResponse {
                defaults: Some(board_proto::GraphicsDefaults { layers }),
            })
        })
    }

    #[test]
    fn graphics_defaults_are_keyed_by_position() {
        let board = board(graphics_defaults_reply(6));
        let defaults = board.get_graphics_defaults().expect("defaults");

        assert_eq!(defaults.len(), 6);
        for (index, class) in GRAPHICS_DEFAULT_CLASSES.iter().enumerate() {
            assert_eq!(defaults[class].line_thickness(), (index as i64 + 1) * 1_000);
        }
        assert_eq!(defaults[&BoardLayerClass::BlcSilkscreen].line_thickness(), 1_000);
        assert_eq!(defaults[&BoardLayerClass::BlcOther].line_thickness(), 6_000);
    }

    #[test]
    fn graphics_defaults_require_six_entries() {
        let board = board(graphics_defaults_reply(5));
        assert!(matches!(
            board.get_graphics_defaults(),
            Err(KiCadError::MissingPayload { .. })
        ));
    }

    #[test]
    fn get_stackup_wraps_the_reply() {
        let host = MockHost::new(|request| {
            let command: board_commands::GetBoardStackup = mock::command(request);
            assert!(command.board.is_some());
            mock::ok(&board_commands::BoardStackupResponse {
                stackup: Some(board_proto::BoardStackup {
                    finish_type_name: "ENIG".to_string(),
                    layers: vec![board_proto::BoardStackupLayer::default(); 3],
                    ..Default::default()
                }),
            })
        });
        let board = board(host);

        let stackup = board.get_stackup().expect("stackup");
        assert_eq!(stackup.finish_type_name(), "ENIG");
        assert_eq!(stackup.layer_count(), 3);
    }

    #[test]
    fn get_nets_passes_filter() {
        let host = MockHost::new(|request| {
            let command: board_commands::GetNets = mock::command(request);
            assert_eq!(command.netclass_filter, vec!["Power".to_string()]);
            mock::ok(&board_commands::NetsResponse {
                nets: vec![board_types::Net {
                    code: Some(board_types::NetCode { value: 3 }),
                    name: "VCC".to_string(),
                }],
            })
        });
        let board = board(host);

        let nets = board.get_nets(&["Power"]).expect("nets");
        assert_eq!(nets.len(), 1);
        assert_eq!(nets[0].to_string(), "3:VCC");
    }

    #[test]
    fn selection_commands_carry_the_board_header() {
        let host = MockHost::new(|request| match mock::command_name(request) {
            "kiapi.common.commands.ClearSelection" => mock::ok_empty(),
            _ => mock::ok(&common_commands::SelectionResponse {
                items: vec![crate::envelope::pack_any(&board_types::Via {
                    id: kiid("v1"),
                    ..Default::default()
                })],
            }),
        });
        let requests = host.requests();
        let board = board(host);

        let selection = board.add_to_selection(["v1"]).expect("add");
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].id(), Some("v1"));
        assert_eq!(board.get_selection().expect("get").len(), 1);
        board.clear_selection().expect("clear");

        let requests = requests.lock().expect("requests");
        let added: common_commands::AddToSelection = mock::command(&requests[0]);
        assert_eq!(added.items, vec![common_types::Kiid { value: "v1".to_string() }]);
        let cleared: common_commands::ClearSelection = mock::command(&requests[2]);
        assert!(cleared.header.and_then(|header| header.document).is_some());
    }

    #[test]
    fn title_block_is_read_for_the_board() {
        let host = MockHost::new(|_| {
            mock::ok(&common_types::TitleBlockInfo {
                title: "Main board".to_string(),
                ..Default::default()
            })
        });
        let board = board(host);

        let info = board.get_title_block_info().expect("title block");
        assert_eq!(info.title(), "Main board");
        assert_eq!(info.proto().revision, "");
    }
}
