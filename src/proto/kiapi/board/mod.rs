//! `kiapi.board`: board-level settings (stackup, graphics defaults).

pub mod commands;
pub mod types;

use super::common::types::{Color, Distance, TextAttributes};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardStackupDielectricProperties {
    #[prost(double, tag = "1")]
    pub epsilon_r: f64,
    #[prost(double, tag = "2")]
    pub loss_tangent: f64,
    #[prost(string, tag = "3")]
    pub material_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub thickness: ::core::option::Option<Distance>,
}

/// A dielectric slot may be built from several sublayers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardStackupDielectricLayer {
    #[prost(message, repeated, tag = "1")]
    pub layer: ::prost::alloc::vec::Vec<BoardStackupDielectricProperties>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardStackupLayer {
    #[prost(message, optional, tag = "1")]
    pub thickness: ::core::option::Option<Distance>,
    #[prost(enumeration = "types::BoardLayer", tag = "2")]
    pub layer: i32,
    #[prost(bool, tag = "3")]
    pub enabled: bool,
    #[prost(enumeration = "BoardStackupLayerType", tag = "4")]
    pub r#type: i32,
    #[prost(message, optional, tag = "5")]
    pub dielectric: ::core::option::Option<BoardStackupDielectricLayer>,
    #[prost(message, optional, tag = "6")]
    pub color: ::core::option::Option<Color>,
    #[prost(string, tag = "7")]
    pub material_name: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub user_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardStackup {
    #[prost(string, tag = "1")]
    pub finish_type_name: ::prost::alloc::string::String,
    #[prost(bool, tag = "2")]
    pub impedance_controlled: bool,
    /// Top to bottom.
    #[prost(message, repeated, tag = "3")]
    pub layers: ::prost::alloc::vec::Vec<BoardStackupLayer>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardLayerGraphicsDefaults {
    #[prost(enumeration = "BoardLayerClass", tag = "1")]
    pub layer: i32,
    #[prost(message, optional, tag = "2")]
    pub text: ::core::option::Option<TextAttributes>,
    #[prost(message, optional, tag = "3")]
    pub line_thickness: ::core::option::Option<Distance>,
}

/// One entry per layer class, in `BoardLayerClass` order starting at
/// `BlcSilkscreen`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphicsDefaults {
    #[prost(message, repeated, tag = "1")]
    pub layers: ::prost::alloc::vec::Vec<BoardLayerGraphicsDefaults>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BoardStackupLayerType {
    BsltUnknown = 0,
    BsltCopper = 1,
    BsltSilkscreen = 2,
    BsltSolderpaste = 3,
    BsltSoldermask = 4,
    BsltDielectric = 5,
    BsltUndefined = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BoardLayerClass {
    BlcUnknown = 0,
    BlcSilkscreen = 1,
    BlcCopper = 2,
    BlcEdges = 3,
    BlcCourtyard = 4,
    BlcFabrication = 5,
    BlcOther = 6,
}

impl BoardStackupLayerType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::BsltUnknown => "BSLT_UNKNOWN",
            Self::BsltCopper => "BSLT_COPPER",
            Self::BsltSilkscreen => "BSLT_SILKSCREEN",
            Self::BsltSolderpaste => "BSLT_SOLDERPASTE",
            Self::BsltSoldermask => "BSLT_SOLDERMASK",
            Self::BsltDielectric => "BSLT_DIELECTRIC",
            Self::BsltUndefined => "BSLT_UNDEFINED",
        }
    }
}

impl BoardLayerClass {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::BlcUnknown => "BLC_UNKNOWN",
            Self::BlcSilkscreen => "BLC_SILKSCREEN",
            Self::BlcCopper => "BLC_COPPER",
            Self::BlcEdges => "BLC_EDGES",
            Self::BlcCourtyard => "BLC_COURTYARD",
            Self::BlcFabrication => "BLC_FABRICATION",
            Self::BlcOther => "BLC_OTHER",
        }
    }
}
