//! `kiapi.board.types`: items that live on a board.

use super::super::common::types::{
    Angle, Distance, GraphicAttributes, Kiid, LibraryIdentifier, PolygonWithHoles, Text, TextBox,
    Vector2,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct NetCode {
    #[prost(int32, tag = "1")]
    pub value: i32,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Net {
    #[prost(message, optional, tag = "1")]
    pub code: ::core::option::Option<NetCode>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Track {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(message, optional, tag = "2")]
    pub start: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub end: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "4")]
    pub width: ::core::option::Option<Distance>,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "5")]
    pub locked: i32,
    #[prost(enumeration = "BoardLayer", tag = "6")]
    pub layer: i32,
    #[prost(message, optional, tag = "7")]
    pub net: ::core::option::Option<Net>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Arc {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(message, optional, tag = "2")]
    pub start: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub mid: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "4")]
    pub end: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "5")]
    pub width: ::core::option::Option<Distance>,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "6")]
    pub locked: i32,
    #[prost(enumeration = "BoardLayer", tag = "7")]
    pub layer: i32,
    #[prost(message, optional, tag = "8")]
    pub net: ::core::option::Option<Net>,
}

/// Tag 3 (`pad_stack`) is not mirrored; the host keeps the via's padstack
/// unchanged when it is absent from an update.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Via {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(message, optional, tag = "2")]
    pub position: ::core::option::Option<Vector2>,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "4")]
    pub locked: i32,
    #[prost(message, optional, tag = "5")]
    pub net: ::core::option::Option<Net>,
    #[prost(enumeration = "ViaType", tag = "6")]
    pub r#type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardText {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(message, optional, tag = "2")]
    pub text: ::core::option::Option<Text>,
    #[prost(enumeration = "BoardLayer", tag = "3")]
    pub layer: i32,
    #[prost(bool, tag = "4")]
    pub knockout: bool,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "5")]
    pub locked: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardTextBox {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(message, optional, tag = "2")]
    pub textbox: ::core::option::Option<TextBox>,
    #[prost(enumeration = "BoardLayer", tag = "3")]
    pub layer: i32,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "4")]
    pub locked: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct FieldId {
    #[prost(int32, tag = "1")]
    pub id: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Field {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<FieldId>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub text: ::core::option::Option<BoardText>,
    #[prost(bool, tag = "4")]
    pub visible: bool,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct FootprintAttributes {
    #[prost(string, tag = "1")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub keywords: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub not_in_schematic: bool,
    #[prost(bool, tag = "4")]
    pub exclude_from_position_files: bool,
    #[prost(bool, tag = "5")]
    pub exclude_from_bill_of_materials: bool,
    #[prost(bool, tag = "6")]
    pub exempt_from_courtyard_requirement: bool,
    #[prost(bool, tag = "7")]
    pub do_not_populate: bool,
}

/// A footprint definition, as found in a library or embedded in an instance.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Footprint {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<LibraryIdentifier>,
    #[prost(message, optional, tag = "2")]
    pub anchor: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub attributes: ::core::option::Option<FootprintAttributes>,
    #[prost(message, optional, tag = "7")]
    pub reference_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "8")]
    pub value_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "9")]
    pub datasheet_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "10")]
    pub description_field: ::core::option::Option<Field>,
    /// Pads, graphics, text and zones owned by the footprint.
    #[prost(message, repeated, tag = "11")]
    pub items: ::prost::alloc::vec::Vec<::prost_types::Any>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FootprintInstance {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(message, optional, tag = "2")]
    pub position: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub orientation: ::core::option::Option<Angle>,
    #[prost(enumeration = "BoardLayer", tag = "4")]
    pub layer: i32,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "5")]
    pub locked: i32,
    #[prost(message, optional, tag = "6")]
    pub definition: ::core::option::Option<Footprint>,
    #[prost(message, optional, tag = "7")]
    pub reference_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "8")]
    pub value_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "9")]
    pub datasheet_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "10")]
    pub description_field: ::core::option::Option<Field>,
    #[prost(message, optional, tag = "11")]
    pub attributes: ::core::option::Option<FootprintAttributes>,
}

/// Tag 6 (`pad_stack`) is not mirrored.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Pad {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "2")]
    pub locked: i32,
    #[prost(string, tag = "3")]
    pub number: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub net: ::core::option::Option<Net>,
    #[prost(enumeration = "PadType", tag = "5")]
    pub r#type: i32,
    #[prost(message, optional, tag = "7")]
    pub position: ::core::option::Option<Vector2>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GraphicSegment {
    #[prost(message, optional, tag = "1")]
    pub start: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub end: ::core::option::Option<Vector2>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GraphicRectangle {
    #[prost(message, optional, tag = "1")]
    pub top_left: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub bottom_right: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub corner_radius: ::core::option::Option<Distance>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GraphicArc {
    #[prost(message, optional, tag = "1")]
    pub start: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub mid: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub end: ::core::option::Option<Vector2>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct GraphicCircle {
    #[prost(message, optional, tag = "1")]
    pub center: ::core::option::Option<Vector2>,
    /// Any point on the circle.
    #[prost(message, optional, tag = "2")]
    pub radius_point: ::core::option::Option<Vector2>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BoardGraphicShape {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "2")]
    pub locked: i32,
    #[prost(enumeration = "BoardLayer", tag = "3")]
    pub layer: i32,
    #[prost(message, optional, tag = "4")]
    pub net: ::core::option::Option<Net>,
    #[prost(message, optional, tag = "5")]
    pub attributes: ::core::option::Option<GraphicAttributes>,
    #[prost(oneof = "board_graphic_shape::Geometry", tags = "6, 7, 8, 9, 10")]
    pub geometry: ::core::option::Option<board_graphic_shape::Geometry>,
}

/// Nested message and enum types in `BoardGraphicShape`.
pub mod board_graphic_shape {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Geometry {
        #[prost(message, tag = "6")]
        Segment(super::GraphicSegment),
        #[prost(message, tag = "7")]
        Rectangle(super::GraphicRectangle),
        #[prost(message, tag = "8")]
        Arc(super::GraphicArc),
        #[prost(message, tag = "9")]
        Circle(super::GraphicCircle),
        #[prost(message, tag = "10")]
        Polygon(super::super::super::common::types::PolygonWithHoles),
    }
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Zone {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(enumeration = "ZoneType", tag = "2")]
    pub r#type: i32,
    #[prost(enumeration = "BoardLayer", repeated, tag = "3")]
    pub layers: ::prost::alloc::vec::Vec<i32>,
    #[prost(message, optional, tag = "4")]
    pub outline: ::core::option::Option<PolygonWithHoles>,
    #[prost(string, tag = "5")]
    pub name: ::prost::alloc::string::String,
    #[prost(uint32, tag = "6")]
    pub priority: u32,
    #[prost(enumeration = "super::super::common::types::LockedState", tag = "7")]
    pub locked: i32,
    /// Read-only; set by the host after a refill.
    #[prost(bool, tag = "8")]
    pub filled: bool,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Group {
    #[prost(message, optional, tag = "1")]
    pub id: ::core::option::Option<Kiid>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub items: ::prost::alloc::vec::Vec<Kiid>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ViaType {
    VtUnknown = 0,
    VtThrough = 1,
    VtBlindBuried = 2,
    VtMicro = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PadType {
    PtUnknown = 0,
    PtPth = 1,
    PtSmd = 2,
    PtEdgeConnector = 3,
    PtNpth = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ZoneType {
    ZtUnknown = 0,
    ZtCopper = 1,
    ZtGraphical = 2,
    ZtRuleArea = 3,
    ZtTeardrop = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BoardLayer {
    BlUnknown = 0,
    BlUndefined = 1,
    BlUnselected = 2,
    BlFCu = 3,
    BlIn1Cu = 4,
    BlIn2Cu = 5,
    BlIn3Cu = 6,
    BlIn4Cu = 7,
    BlIn5Cu = 8,
    BlIn6Cu = 9,
    BlIn7Cu = 10,
    BlIn8Cu = 11,
    BlIn9Cu = 12,
    BlIn10Cu = 13,
    BlIn11Cu = 14,
    BlIn12Cu = 15,
    BlIn13Cu = 16,
    BlIn14Cu = 17,
    BlIn15Cu = 18,
    BlIn16Cu = 19,
    BlIn17Cu = 20,
    BlIn18Cu = 21,
    BlIn19Cu = 22,
    BlIn20Cu = 23,
    BlIn21Cu = 24,
    BlIn22Cu = 25,
    BlIn23Cu = 26,
    BlIn24Cu = 27,
    BlIn25Cu = 28,
    BlIn26Cu = 29,
    BlIn27Cu = 30,
    BlIn28Cu = 31,
    BlIn29Cu = 32,
    BlIn30Cu = 33,
    BlBCu = 34,
    BlBAdhes = 35,
    BlFAdhes = 36,
    BlBPaste = 37,
    BlFPaste = 38,
    BlBSilkS = 39,
    BlFSilkS = 40,
    BlBMask = 41,
    BlFMask = 42,
    BlDwgsUser = 43,
    BlCmtsUser = 44,
    BlEco1User = 45,
    BlEco2User = 46,
    BlEdgeCuts = 47,
    BlMargin = 48,
    BlBCrtYd = 49,
    BlFCrtYd = 50,
    BlBFab = 51,
    BlFFab = 52,
    BlUser1 = 53,
    BlUser2 = 54,
    BlUser3 = 55,
    BlUser4 = 56,
    BlUser5 = 57,
    BlUser6 = 58,
    BlUser7 = 59,
    BlUser8 = 60,
    BlUser9 = 61,
}

impl BoardLayer {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::BlUnknown => "BL_UNKNOWN",
            Self::BlUndefined => "BL_UNDEFINED",
            Self::BlUnselected => "BL_UNSELECTED",
            Self::BlFCu => "BL_F_Cu",
            Self::BlIn1Cu => "BL_In1_Cu",
            Self::BlIn2Cu => "BL_In2_Cu",
            Self::BlIn3Cu => "BL_In3_Cu",
            Self::BlIn4Cu => "BL_In4_Cu",
            Self::BlIn5Cu => "BL_In5_Cu",
            Self::BlIn6Cu => "BL_In6_Cu",
            Self::BlIn7Cu => "BL_In7_Cu",
            Self::BlIn8Cu => "BL_In8_Cu",
            Self::BlIn9Cu => "BL_In9_Cu",
            Self::BlIn10Cu => "BL_In10_Cu",
            Self::BlIn11Cu => "BL_In11_Cu",
            Self::BlIn12Cu => "BL_In12_Cu",
            Self::BlIn13Cu => "BL_In13_Cu",
            Self::BlIn14Cu => "BL_In14_Cu",
            Self::BlIn15Cu => "BL_In15_Cu",
            Self::BlIn16Cu => "BL_In16_Cu",
            Self::BlIn17Cu => "BL_In17_Cu",
            Self::BlIn18Cu => "BL_In18_Cu",
            Self::BlIn19Cu => "BL_In19_Cu",
            Self::BlIn20Cu => "BL_In20_Cu",
            Self::BlIn21Cu => "BL_In21_Cu",
            Self::BlIn22Cu => "BL_In22_Cu",
            Self::BlIn23Cu => "BL_In23_Cu",
            Self::BlIn24Cu => "BL_In24_Cu",
            Self::BlIn25Cu => "BL_In25_Cu",
            Self::BlIn26Cu => "BL_In26_Cu",
            Self::BlIn27Cu => "BL_In27_Cu",
            Self::BlIn28Cu => "BL_In28_Cu",
            Self::BlIn29Cu => "BL_In29_Cu",
            Self::BlIn30Cu => "BL_In30_Cu",
            Self::BlBCu => "BL_B_Cu",
            Self::BlBAdhes => "BL_B_Adhes",
            Self::BlFAdhes => "BL_F_Adhes",
            Self::BlBPaste => "BL_B_Paste",
            Self::BlFPaste => "BL_F_Paste",
            Self::BlBSilkS => "BL_B_SilkS",
            Self::BlFSilkS => "BL_F_SilkS",
            Self::BlBMask => "BL_B_Mask",
            Self::BlFMask => "BL_F_Mask",
            Self::BlDwgsUser => "BL_Dwgs_User",
            Self::BlCmtsUser => "BL_Cmts_User",
            Self::BlEco1User => "BL_Eco1_User",
            Self::BlEco2User => "BL_Eco2_User",
            Self::BlEdgeCuts => "BL_Edge_Cuts",
            Self::BlMargin => "BL_Margin",
            Self::BlBCrtYd => "BL_B_CrtYd",
            Self::BlFCrtYd => "BL_F_CrtYd",
            Self::BlBFab => "BL_B_Fab",
            Self::BlFFab => "BL_F_Fab",
            Self::BlUser1 => "BL_User_1",
            Self::BlUser2 => "BL_User_2",
            Self::BlUser3 => "BL_User_3",
            Self::BlUser4 => "BL_User_4",
            Self::BlUser5 => "BL_User_5",
            Self::BlUser6 => "BL_User_6",
            Self::BlUser7 => "BL_User_7",
            Self::BlUser8 => "BL_User_8",
            Self::BlUser9 => "BL_User_9",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "BL_UNKNOWN" => Some(Self::BlUnknown),
            "BL_UNDEFINED" => Some(Self::BlUndefined),
            "BL_UNSELECTED" => Some(Self::BlUnselected),
            "BL_F_Cu" => Some(Self::BlFCu),
            "BL_In1_Cu" => Some(Self::BlIn1Cu),
            "BL_In2_Cu" => Some(Self::BlIn2Cu),
            "BL_In3_Cu" => Some(Self::BlIn3Cu),
            "BL_In4_Cu" => Some(Self::BlIn4Cu),
            "BL_In5_Cu" => Some(Self::BlIn5Cu),
            "BL_In6_Cu" => Some(Self::BlIn6Cu),
            "BL_In7_Cu" => Some(Self::BlIn7Cu),
            "BL_In8_Cu" => Some(Self::BlIn8Cu),
            "BL_In9_Cu" => Some(Self::BlIn9Cu),
            "BL_In10_Cu" => Some(Self::BlIn10Cu),
            "BL_In11_Cu" => Some(Self::BlIn11Cu),
            "BL_In12_Cu" => Some(Self::BlIn12Cu),
            "BL_In13_Cu" => Some(Self::BlIn13Cu),
            "BL_In14_Cu" => Some(Self::BlIn14Cu),
            "BL_In15_Cu" => Some(Self::BlIn15Cu),
            "BL_In16_Cu" => Some(Self::BlIn16Cu),
            "BL_In17_Cu" => Some(Self::BlIn17Cu),
            "BL_In18_Cu" => Some(Self::BlIn18Cu),
            "BL_In19_Cu" => Some(Self::BlIn19Cu),
            "BL_In20_Cu" => Some(Self::BlIn20Cu),
            "BL_In21_Cu" => Some(Self::BlIn21Cu),
            "BL_In22_Cu" => Some(Self::BlIn22Cu),
            "BL_In23_Cu" => Some(Self::BlIn23Cu),
            "BL_In24_Cu" => Some(Self::BlIn24Cu),
            "BL_In25_Cu" => Some(Self::BlIn25Cu),
            "BL_In26_Cu" => Some(Self::BlIn26Cu),
            "BL_In27_Cu" => Some(Self::BlIn27Cu),
            "BL_In28_Cu" => Some(Self::BlIn28Cu),
            "BL_In29_Cu" => Some(Self::BlIn29Cu),
            "BL_In30_Cu" => Some(Self::BlIn30Cu),
            "BL_B_Cu" => Some(Self::BlBCu),
            "BL_B_Adhes" => Some(Self::BlBAdhes),
            "BL_F_Adhes" => Some(Self::BlFAdhes),
            "BL_B_Paste" => Some(Self::BlBPaste),
            "BL_F_Paste" => Some(Self::BlFPaste),
            "BL_B_SilkS" => Some(Self::BlBSilkS),
            "BL_F_SilkS" => Some(Self::BlFSilkS),
            "BL_B_Mask" => Some(Self::BlBMask),
            "BL_F_Mask" => Some(Self::BlFMask),
            "BL_Dwgs_User" => Some(Self::BlDwgsUser),
            "BL_Cmts_User" => Some(Self::BlCmtsUser),
            "BL_Eco1_User" => Some(Self::BlEco1User),
            "BL_Eco2_User" => Some(Self::BlEco2User),
            "BL_Edge_Cuts" => Some(Self::BlEdgeCuts),
            "BL_Margin" => Some(Self::BlMargin),
            "BL_B_CrtYd" => Some(Self::BlBCrtYd),
            "BL_F_CrtYd" => Some(Self::BlFCrtYd),
            "BL_B_Fab" => Some(Self::BlBFab),
            "BL_F_Fab" => Some(Self::BlFFab),
            "BL_User_1" => Some(Self::BlUser1),
            "BL_User_2" => Some(Self::BlUser2),
            "BL_User_3" => Some(Self::BlUser3),
            "BL_User_4" => Some(Self::BlUser4),
            "BL_User_5" => Some(Self::BlUser5),
            "BL_User_6" => Some(Self::BlUser6),
            "BL_User_7" => Some(Self::BlUser7),
            "BL_User_8" => Some(Self::BlUser8),
            "BL_User_9" => Some(Self::BlUser9),
            _ => None,
        }
    }
}
