//! `kiapi.common.commands`: editor-agnostic commands.

use super::types::{
    DocumentSpecifier, ItemHeader, KiCadVersion, Kiid, NetClass, Text, TextVariables,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Ping {}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetVersion {}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetVersionResponse {
    #[prost(message, optional, tag = "1")]
    pub version: ::core::option::Option<KiCadVersion>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RunAction {
    #[prost(string, tag = "1")]
    pub action: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RunActionResponse {
    #[prost(enumeration = "RunActionStatus", tag = "1")]
    pub status: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct RefreshEditor {
    #[prost(enumeration = "super::types::FrameType", tag = "1")]
    pub frame: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetOpenDocuments {
    #[prost(enumeration = "super::types::DocumentType", tag = "1")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetOpenDocumentsResponse {
    #[prost(message, repeated, tag = "1")]
    pub documents: ::prost::alloc::vec::Vec<DocumentSpecifier>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct BeginCommit {}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct BeginCommitResponse {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EndCommit {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(enumeration = "CommitAction", tag = "2")]
    pub action: i32,
    /// Undo history description when the commit is pushed.
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct EndCommitResponse {}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ItemStatus {
    #[prost(enumeration = "ItemStatusCode", tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub error_message: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateItems {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(message, repeated, tag = "2")]
    pub items: ::prost::alloc::vec::Vec<::prost_types::Any>,
    /// Optional parent for the new items.
    #[prost(message, optional, tag = "3")]
    pub container: ::core::option::Option<Kiid>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ItemCreationResult {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<ItemStatus>,
    /// The created item as stored by the host, including its assigned id.
    #[prost(message, optional, tag = "2")]
    pub item: ::core::option::Option<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateItemsResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(enumeration = "super::types::ItemRequestStatus", tag = "2")]
    pub status: i32,
    #[prost(message, repeated, tag = "3")]
    pub created_items: ::prost::alloc::vec::Vec<ItemCreationResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateItems {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(message, repeated, tag = "2")]
    pub items: ::prost::alloc::vec::Vec<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ItemUpdateResult {
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<ItemStatus>,
    #[prost(message, optional, tag = "2")]
    pub item: ::core::option::Option<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateItemsResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(enumeration = "super::types::ItemRequestStatus", tag = "2")]
    pub status: i32,
    #[prost(message, repeated, tag = "3")]
    pub updated_items: ::prost::alloc::vec::Vec<ItemUpdateResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteItems {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(message, repeated, tag = "2")]
    pub item_ids: ::prost::alloc::vec::Vec<Kiid>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ItemDeletionResult {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(enumeration = "ItemDeletionStatus", tag = "2")]
    pub status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteItemsResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(enumeration = "super::types::ItemRequestStatus", tag = "2")]
    pub status: i32,
    #[prost(message, repeated, tag = "3")]
    pub deleted_items: ::prost::alloc::vec::Vec<ItemDeletionResult>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetItems {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(enumeration = "super::types::KiCadObjectType", repeated, tag = "2")]
    pub types: ::prost::alloc::vec::Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetItemsResponse {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(enumeration = "super::types::ItemRequestStatus", tag = "2")]
    pub status: i32,
    #[prost(message, repeated, tag = "3")]
    pub items: ::prost::alloc::vec::Vec<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSelection {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(enumeration = "super::types::KiCadObjectType", repeated, tag = "2")]
    pub types: ::prost::alloc::vec::Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SelectionResponse {
    #[prost(message, repeated, tag = "1")]
    pub items: ::prost::alloc::vec::Vec<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddToSelection {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
    #[prost(message, repeated, tag = "2")]
    pub items: ::prost::alloc::vec::Vec<Kiid>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClearSelection {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<ItemHeader>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTextExtents {
    #[prost(message, optional, tag = "1")]
    pub text: ::core::option::Option<Text>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetTitleBlockInfo {
    #[prost(message, optional, tag = "1")]
    pub document: ::core::option::Option<DocumentSpecifier>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetNetClasses {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetClassesResponse {
    #[prost(message, repeated, tag = "1")]
    pub net_classes: ::prost::alloc::vec::Vec<NetClass>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GetTextVariables {
    #[prost(message, optional, tag = "1")]
    pub document: ::core::option::Option<DocumentSpecifier>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct SetTextVariables {
    #[prost(message, optional, tag = "1")]
    pub document: ::core::option::Option<DocumentSpecifier>,
    #[prost(message, optional, tag = "2")]
    pub variables: ::core::option::Option<TextVariables>,
    #[prost(enumeration = "super::types::MapMergeMode", tag = "3")]
    pub merge_mode: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RunActionStatus {
    RasUnknown = 0,
    RasOk = 1,
    RasInvalid = 2,
    RasFrameNotOpen = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CommitAction {
    CmaUnknown = 0,
    /// Apply the staged changes as one undo step.
    CmaCommit = 1,
    /// Discard the staged changes.
    CmaDrop = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ItemStatusCode {
    IscUnknown = 0,
    IscOk = 1,
    IscInvalidType = 2,
    IscInvalidData = 3,
    IscNonexistent = 4,
    IscImmutable = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ItemDeletionStatus {
    IdsUnknown = 0,
    IdsOk = 1,
    IdsNonexistent = 2,
    IdsImmutable = 3,
}

impl RunActionStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::RasUnknown => "RAS_UNKNOWN",
            Self::RasOk => "RAS_OK",
            Self::RasInvalid => "RAS_INVALID",
            Self::RasFrameNotOpen => "RAS_FRAME_NOT_OPEN",
        }
    }
}

impl CommitAction {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::CmaUnknown => "CMA_UNKNOWN",
            Self::CmaCommit => "CMA_COMMIT",
            Self::CmaDrop => "CMA_DROP",
        }
    }
}

impl ItemStatusCode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::IscUnknown => "ISC_UNKNOWN",
            Self::IscOk => "ISC_OK",
            Self::IscInvalidType => "ISC_INVALID_TYPE",
            Self::IscInvalidData => "ISC_INVALID_DATA",
            Self::IscNonexistent => "ISC_NONEXISTENT",
            Self::IscImmutable => "ISC_IMMUTABLE",
        }
    }
}

impl ItemDeletionStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::IdsUnknown => "IDS_UNKNOWN",
            Self::IdsOk => "IDS_OK",
            Self::IdsNonexistent => "IDS_NONEXISTENT",
            Self::IdsImmutable => "IDS_IMMUTABLE",
        }
    }
}
