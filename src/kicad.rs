use std::borrow::Borrow;

use crate::board::Board;
use crate::client::KiCadClient;
use crate::error::KiCadError;
use crate::geometry::Box2;
use crate::model::common::{
    DocumentSpecifier, DocumentType, FrameType, RunActionStatus, Text, VersionInfo,
};
use crate::project::Project;
use crate::proto::common::commands as common_commands;
use crate::proto::common::types as common_types;
use crate::wrapper::Wrapper;

/// Entry point for talking to a running KiCad instance.
#[derive(Clone, Debug)]
pub struct KiCad {
    client: KiCadClient,
}

impl KiCad {
    /// Connects with default settings, honoring `KICAD_API_SOCKET` and
    /// `KICAD_API_TOKEN`.
    pub fn connect() -> Result<Self, KiCadError> {
        KiCadClient::connect().map(Self::from_client)
    }

    pub fn from_client(client: KiCadClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &KiCadClient {
        &self.client
    }

    pub fn ping(&self) -> Result<(), KiCadError> {
        self.client.execute(&common_commands::Ping {})
    }

    pub fn get_version(&self) -> Result<VersionInfo, KiCadError> {
        let response: common_commands::GetVersionResponse =
            self.client.send(&common_commands::GetVersion {})?;

        response
            .version
            .map(VersionInfo::from)
            .ok_or_else(|| KiCadError::MissingPayload {
                expected_type_url: "kiapi.common.types.KiCadVersion".to_string(),
            })
    }

    /// Runs a host tool action by name. Action names are not a stable
    /// interface.
    pub fn run_action(&self, action: &str) -> Result<RunActionStatus, KiCadError> {
        let command = common_commands::RunAction {
            action: action.to_string(),
        };
        let response: common_commands::RunActionResponse = self.client.send(&command)?;

        Ok(RunActionStatus::try_from(response.status).unwrap_or(RunActionStatus::RasUnknown))
    }

    pub fn refresh_editor(&self, frame: FrameType) -> Result<(), KiCadError> {
        self.client.execute(&common_commands::RefreshEditor {
            frame: frame as i32,
        })
    }

    pub fn get_open_documents(
        &self,
        document_type: DocumentType,
    ) -> Result<Vec<DocumentSpecifier>, KiCadError> {
        let command = common_commands::GetOpenDocuments {
            r#type: document_type.to_proto(),
        };
        let response: common_commands::GetOpenDocumentsResponse = self.client.send(&command)?;

        Ok(response
            .documents
            .into_iter()
            .filter_map(DocumentSpecifier::from_proto)
            .collect())
    }

    /// The single board open in the PCB editor.
    pub fn get_board(&self) -> Result<Board, KiCadError> {
        let docs = self.get_open_documents(DocumentType::Pcb)?;
        let document = select_single_board_document(&docs)?;
        Ok(Board::new(self.client.clone(), document.clone()))
    }

    /// The project that owns `document`.
    pub fn get_project(&self, document: &DocumentSpecifier) -> Project {
        Project::new(self.client.clone(), document.clone())
    }

    /// Bounding box the host would give `text` when rendered.
    pub fn get_text_extents<P>(&self, text: &Text<P>) -> Result<Box2, KiCadError>
    where
        P: Borrow<common_types::Text>,
    {
        let command = common_commands::GetTextExtents {
            text: Some(text.proto().clone()),
        };
        let response: common_types::Box2 = self.client.send(&command)?;

        Ok(Box2::from(response))
    }
}

fn select_single_board_document(
    docs: &[DocumentSpecifier],
) -> Result<&DocumentSpecifier, KiCadError> {
    match docs {
        [] => Err(KiCadError::BoardNotOpen),
        [document] => Ok(document),
        _ => Err(KiCadError::AmbiguousBoardSelection {
            boards: docs
                .iter()
                .map(|doc| {
                    doc.board_filename
                        .clone()
                        .unwrap_or_else(|| "<unknown>".to_string())
                })
                .collect(),
        }),
    }
}
