//! Protobuf message catalog.
//!
//! The modules under [`kiapi`] mirror the host's schema packages. Each message
//! that can travel inside an `Any` implements [`ApiMessage`], which ties the
//! Rust type to its fully-qualified protobuf name.

pub mod kiapi;

pub use kiapi::{board, common};

/// A message that can be packed into an `Any` and sent to, or received from,
/// the host.
pub trait ApiMessage: prost::Message + Default + Clone + PartialEq {
    /// Fully-qualified protobuf name, e.g. `kiapi.common.commands.Ping`.
    const TYPE_NAME: &'static str;
}

macro_rules! api_messages {
    ($package:literal => $($path:ident)::+ { $($name:ident),+ $(,)? }) => {
        api_messages!(@impl $package, [$($path)::+] $(, $name)+);
    };
    (@impl $package:literal, [$($path:tt)*]) => {};
    (@impl $package:literal, [$($path:tt)*], $name:ident $(, $rest:ident)*) => {
        impl ApiMessage for $($path)*::$name {
            const TYPE_NAME: &'static str = concat!($package, ".", stringify!($name));
        }
        api_messages!(@impl $package, [$($path)*] $(, $rest)*);
    };
}

api_messages!("kiapi.common" => kiapi::common {
    ApiRequest,
    ApiResponse,
});

api_messages!("kiapi.common.types" => kiapi::common::types {
    Kiid,
    Vector2,
    Distance,
    Angle,
    Color,
    Box2,
    LibraryIdentifier,
    DocumentSpecifier,
    TextAttributes,
    Text,
    TextBox,
    StrokeAttributes,
    GraphicFillAttributes,
    GraphicAttributes,
    PolyLine,
    PolygonWithHoles,
    KiCadVersion,
    TitleBlockInfo,
    NetClass,
    TextVariables,
});

api_messages!("kiapi.common.commands" => kiapi::common::commands {
    Ping,
    GetVersion,
    GetVersionResponse,
    RunAction,
    RunActionResponse,
    RefreshEditor,
    GetOpenDocuments,
    GetOpenDocumentsResponse,
    BeginCommit,
    BeginCommitResponse,
    EndCommit,
    EndCommitResponse,
    CreateItems,
    CreateItemsResponse,
    UpdateItems,
    UpdateItemsResponse,
    DeleteItems,
    DeleteItemsResponse,
    GetItems,
    GetItemsResponse,
    GetSelection,
    SelectionResponse,
    AddToSelection,
    ClearSelection,
    GetTextExtents,
    GetTitleBlockInfo,
    GetNetClasses,
    NetClassesResponse,
    GetTextVariables,
    SetTextVariables,
});

api_messages!("kiapi.board.types" => kiapi::board::types {
    Net,
    Track,
    Arc,
    Via,
    BoardText,
    BoardTextBox,
    Field,
    Footprint,
    FootprintAttributes,
    FootprintInstance,
    Pad,
    BoardGraphicShape,
    Zone,
    Group,
});

api_messages!("kiapi.board" => kiapi::board {
    BoardStackup,
    BoardStackupLayer,
    BoardLayerGraphicsDefaults,
    GraphicsDefaults,
});

api_messages!("kiapi.board.commands" => kiapi::board::commands {
    GetBoardStackup,
    BoardStackupResponse,
    GetGraphicsDefaults,
    GraphicsDefaultsResponse,
    GetNets,
    NetsResponse,
    InteractiveMoveItems,
    RefillZones,
});

/// Item messages the host may return inside a heterogeneous `Vec<Any>`
/// (selections, `GetItems`, footprint contents).
pub const BOARD_ITEM_TYPE_NAMES: &[&str] = &[
    <kiapi::board::types::Track as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::Arc as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::Via as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::BoardText as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::BoardTextBox as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::Field as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::FootprintInstance as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::Pad as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::BoardGraphicShape as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::Zone as ApiMessage>::TYPE_NAME,
    <kiapi::board::types::Group as ApiMessage>::TYPE_NAME,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_fully_qualified() {
        assert_eq!(
            <common::commands::Ping as ApiMessage>::TYPE_NAME,
            "kiapi.common.commands.Ping"
        );
        assert_eq!(
            <board::types::Track as ApiMessage>::TYPE_NAME,
            "kiapi.board.types.Track"
        );
        assert_eq!(
            <board::BoardStackup as ApiMessage>::TYPE_NAME,
            "kiapi.board.BoardStackup"
        );
    }

    #[test]
    fn every_listed_message_gets_its_own_name() {
        assert_eq!(<common::ApiRequest as ApiMessage>::TYPE_NAME, "kiapi.common.ApiRequest");
        assert_eq!(
            <common::types::TextVariables as ApiMessage>::TYPE_NAME,
            "kiapi.common.types.TextVariables"
        );
        assert_eq!(
            <common::commands::SetTextVariables as ApiMessage>::TYPE_NAME,
            "kiapi.common.commands.SetTextVariables"
        );
        assert_eq!(
            <board::types::Group as ApiMessage>::TYPE_NAME,
            "kiapi.board.types.Group"
        );
        assert_eq!(
            <board::commands::RefillZones as ApiMessage>::TYPE_NAME,
            "kiapi.board.commands.RefillZones"
        );
    }

    #[test]
    fn commit_action_names_match_the_wire() {
        use common::commands::CommitAction;

        assert_eq!(CommitAction::CmaCommit.as_str_name(), "CMA_COMMIT");
        assert_eq!(CommitAction::CmaDrop.as_str_name(), "CMA_DROP");
        assert_eq!(CommitAction::CmaUnknown.as_str_name(), "CMA_UNKNOWN");
    }

    #[test]
    fn board_item_type_names_are_unique() {
        let mut names = BOARD_ITEM_TYPE_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BOARD_ITEM_TYPE_NAMES.len());
    }

    #[test]
    fn status_code_values_match_the_wire() {
        use common::ApiStatusCode;

        assert_eq!(ApiStatusCode::AsUnknown as i32, 0);
        assert_eq!(ApiStatusCode::AsOk as i32, 1);
        assert_eq!(ApiStatusCode::AsTokenMismatch as i32, 6);
        assert_eq!(ApiStatusCode::AsUnimplemented as i32, 8);
        assert_eq!(
            ApiStatusCode::try_from(7).expect("known status"),
            ApiStatusCode::AsBusy
        );
        assert_eq!(ApiStatusCode::AsBadRequest.as_str_name(), "AS_BAD_REQUEST");
    }
}
