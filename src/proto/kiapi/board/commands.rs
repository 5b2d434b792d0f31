//! `kiapi.board.commands`: requests only the PCB editor handles.

use super::super::common::types::{DocumentSpecifier, Kiid};
use super::types::Net;
use super::{BoardStackup, GraphicsDefaults};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBoardStackup {
    #[prost(message, optional, tag = "1")]
    pub board: ::core::option::Option<DocumentSpecifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardStackupResponse {
    #[prost(message, optional, tag = "1")]
    pub stackup: ::core::option::Option<BoardStackup>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetGraphicsDefaults {
    #[prost(message, optional, tag = "1")]
    pub board: ::core::option::Option<DocumentSpecifier>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphicsDefaultsResponse {
    #[prost(message, optional, tag = "1")]
    pub defaults: ::core::option::Option<GraphicsDefaults>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetNets {
    #[prost(message, optional, tag = "1")]
    pub board: ::core::option::Option<DocumentSpecifier>,
    /// Empty means every net class.
    #[prost(string, repeated, tag = "2")]
    pub netclass_filter: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetsResponse {
    #[prost(message, repeated, tag = "1")]
    pub nets: ::prost::alloc::vec::Vec<Net>,
}

/// Starts the editor's interactive move tool on the given items. The reply is
/// sent before the user finishes the move.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InteractiveMoveItems {
    #[prost(message, optional, tag = "1")]
    pub board: ::core::option::Option<DocumentSpecifier>,
    #[prost(message, repeated, tag = "2")]
    pub items: ::prost::alloc::vec::Vec<Kiid>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefillZones {
    #[prost(message, optional, tag = "1")]
    pub board: ::core::option::Option<DocumentSpecifier>,
    /// Empty refills every zone.
    #[prost(message, repeated, tag = "2")]
    pub zones: ::prost::alloc::vec::Vec<Kiid>,
}
