//! `kiapi.common.types`: value types shared by every editor.

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Kiid {
    #[prost(string, tag = "1")]
    pub value: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Vector2 {
    #[prost(int64, tag = "1")]
    pub x_nm: i64,
    #[prost(int64, tag = "2")]
    pub y_nm: i64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Distance {
    #[prost(int64, tag = "1")]
    pub value_nm: i64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Angle {
    #[prost(double, tag = "1")]
    pub value_degrees: f64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Color {
    #[prost(double, tag = "1")]
    pub r: f64,
    #[prost(double, tag = "2")]
    pub g: f64,
    #[prost(double, tag = "3")]
    pub b: f64,
    #[prost(double, tag = "4")]
    pub a: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Box2 {
    #[prost(message, optional, tag = "1")]
    pub position: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub size: ::core::option::Option<Vector2>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct LibraryIdentifier {
    #[prost(string, tag = "1")]
    pub library_nickname: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub entry_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ProjectSpecifier {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub path: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct DocumentSpecifier {
    #[prost(enumeration = "DocumentType", tag = "1")]
    pub r#type: i32,
    #[prost(message, optional, tag = "4")]
    pub project: ::core::option::Option<ProjectSpecifier>,
    #[prost(oneof = "document_specifier::Identifier", tags = "2, 3")]
    pub identifier: ::core::option::Option<document_specifier::Identifier>,
}

/// Nested message and enum types in `DocumentSpecifier`.
pub mod document_specifier {
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Identifier {
        #[prost(message, tag = "2")]
        LibId(super::LibraryIdentifier),
        #[prost(string, tag = "3")]
        BoardFilename(::prost::alloc::string::String),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ItemHeader {
    #[prost(message, optional, tag = "1")]
    pub document: ::core::option::Option<DocumentSpecifier>,
    /// Parent item (e.g. a footprint) for library editing; unset on boards.
    #[prost(message, optional, tag = "2")]
    pub container: ::core::option::Option<LibraryIdentifier>,
    #[prost(message, optional, tag = "3")]
    pub field_mask: ::core::option::Option<::prost_types::FieldMask>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextAttributes {
    #[prost(string, tag = "1")]
    pub font_name: ::prost::alloc::string::String,
    #[prost(enumeration = "HorizontalAlignment", tag = "2")]
    pub horizontal_alignment: i32,
    #[prost(enumeration = "VerticalAlignment", tag = "3")]
    pub vertical_alignment: i32,
    #[prost(message, optional, tag = "4")]
    pub angle: ::core::option::Option<Angle>,
    #[prost(double, tag = "5")]
    pub line_spacing: f64,
    #[prost(message, optional, tag = "6")]
    pub stroke_width: ::core::option::Option<Distance>,
    #[prost(bool, tag = "7")]
    pub italic: bool,
    #[prost(bool, tag = "8")]
    pub bold: bool,
    #[prost(bool, tag = "9")]
    pub underlined: bool,
    #[prost(bool, tag = "10")]
    pub visible: bool,
    #[prost(bool, tag = "11")]
    pub mirrored: bool,
    #[prost(bool, tag = "12")]
    pub multiline: bool,
    #[prost(bool, tag = "13")]
    pub keep_upright: bool,
    #[prost(message, optional, tag = "14")]
    pub size: ::core::option::Option<Vector2>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Text {
    #[prost(message, optional, tag = "1")]
    pub position: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub attributes: ::core::option::Option<TextAttributes>,
    #[prost(string, tag = "3")]
    pub text: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub hyperlink: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TextBox {
    #[prost(message, optional, tag = "1")]
    pub top_left: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub bottom_right: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub attributes: ::core::option::Option<TextAttributes>,
    #[prost(string, tag = "4")]
    pub text: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StrokeAttributes {
    #[prost(message, optional, tag = "1")]
    pub width: ::core::option::Option<Distance>,
    #[prost(enumeration = "StrokeLineStyle", tag = "2")]
    pub style: i32,
    #[prost(message, optional, tag = "3")]
    pub color: ::core::option::Option<Color>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphicFillAttributes {
    #[prost(enumeration = "GraphicFillType", tag = "1")]
    pub fill_type: i32,
    #[prost(message, optional, tag = "2")]
    pub color: ::core::option::Option<Color>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphicAttributes {
    #[prost(message, optional, tag = "1")]
    pub stroke: ::core::option::Option<StrokeAttributes>,
    #[prost(message, optional, tag = "2")]
    pub fill: ::core::option::Option<GraphicFillAttributes>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ArcStartMidEnd {
    #[prost(message, optional, tag = "1")]
    pub start: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "2")]
    pub mid: ::core::option::Option<Vector2>,
    #[prost(message, optional, tag = "3")]
    pub end: ::core::option::Option<Vector2>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PolyLineNode {
    #[prost(oneof = "poly_line_node::Geometry", tags = "1, 2")]
    pub geometry: ::core::option::Option<poly_line_node::Geometry>,
}

/// Nested message and enum types in `PolyLineNode`.
pub mod poly_line_node {
    #[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Oneof)]
    pub enum Geometry {
        #[prost(message, tag = "1")]
        Point(super::Vector2),
        #[prost(message, tag = "2")]
        Arc(super::ArcStartMidEnd),
    }
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PolyLine {
    #[prost(message, repeated, tag = "1")]
    pub nodes: ::prost::alloc::vec::Vec<PolyLineNode>,
    #[prost(bool, tag = "2")]
    pub closed: bool,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct PolygonWithHoles {
    #[prost(message, optional, tag = "1")]
    pub outline: ::core::option::Option<PolyLine>,
    #[prost(message, repeated, tag = "2")]
    pub holes: ::prost::alloc::vec::Vec<PolyLine>,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct KiCadVersion {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
    #[prost(uint32, tag = "3")]
    pub patch: u32,
    #[prost(string, tag = "4")]
    pub full_version: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct TitleBlockInfo {
    #[prost(string, tag = "1")]
    pub title: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub date: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub revision: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub company: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub comment1: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub comment2: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub comment3: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub comment4: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub comment5: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub comment6: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub comment7: ::prost::alloc::string::String,
    #[prost(string, tag = "12")]
    pub comment8: ::prost::alloc::string::String,
    #[prost(string, tag = "13")]
    pub comment9: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NetClass {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub priority: i32,
    #[prost(message, optional, tag = "3")]
    pub clearance: ::core::option::Option<Distance>,
    #[prost(message, optional, tag = "4")]
    pub track_width: ::core::option::Option<Distance>,
    #[prost(message, optional, tag = "5")]
    pub board_color: ::core::option::Option<Color>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TextVariables {
    #[prost(map = "string, string", tag = "1")]
    pub variables: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DocumentType {
    DoctypeUnknown = 0,
    DoctypeSchematic = 1,
    DoctypeSymbol = 2,
    DoctypePcb = 3,
    DoctypeFootprint = 4,
    DoctypeDrawingSheet = 5,
    DoctypeProject = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LockedState {
    LsUnknown = 0,
    LsUnlocked = 1,
    LsLocked = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum HorizontalAlignment {
    HaUnknown = 0,
    HaLeft = 1,
    HaCenter = 2,
    HaRight = 3,
    HaIndeterminate = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VerticalAlignment {
    VaUnknown = 0,
    VaTop = 1,
    VaCenter = 2,
    VaBottom = 3,
    VaIndeterminate = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StrokeLineStyle {
    SlsUnknown = 0,
    SlsDefault = 1,
    SlsSolid = 2,
    SlsDash = 3,
    SlsDot = 4,
    SlsDashdot = 5,
    SlsDashdotdot = 6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum GraphicFillType {
    GftUnknown = 0,
    GftUnfilled = 1,
    GftFilled = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FrameType {
    FtUnknown = 0,
    FtProjectManager = 1,
    FtSchematicEditor = 2,
    FtPcbEditor = 3,
    FtSpiceSimulator = 4,
    FtSymbolEditor = 5,
    FtFootprintEditor = 6,
    FtDrawingSheetEditor = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum KiCadObjectType {
    KotUnknown = 0,
    KotPcbFootprint = 1,
    KotPcbPad = 2,
    KotPcbShape = 3,
    KotPcbReferenceImage = 4,
    KotPcbField = 5,
    KotPcbGenerator = 6,
    KotPcbText = 7,
    KotPcbTextbox = 8,
    KotPcbTable = 9,
    KotPcbTablecell = 10,
    KotPcbTrace = 11,
    KotPcbVia = 12,
    KotPcbArc = 13,
    KotPcbMarker = 14,
    KotPcbDimension = 15,
    KotPcbZone = 16,
    KotPcbGroup = 17,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ItemRequestStatus {
    IrsUnknown = 0,
    IrsOk = 1,
    IrsDocumentNotFound = 2,
    IrsFieldMaskInvalid = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MapMergeMode {
    MmmUnknown = 0,
    /// Keep existing entries, overwrite keys present in the request.
    MmmMerge = 1,
    /// Replace the whole map with the request contents.
    MmmReplace = 2,
}

impl MapMergeMode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::MmmUnknown => "MMM_UNKNOWN",
            Self::MmmMerge => "MMM_MERGE",
            Self::MmmReplace => "MMM_REPLACE",
        }
    }
}

impl ItemRequestStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::IrsUnknown => "IRS_UNKNOWN",
            Self::IrsOk => "IRS_OK",
            Self::IrsDocumentNotFound => "IRS_DOCUMENT_NOT_FOUND",
            Self::IrsFieldMaskInvalid => "IRS_FIELD_MASK_INVALID",
        }
    }
}

impl KiCadObjectType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::KotUnknown => "KOT_UNKNOWN",
            Self::KotPcbFootprint => "KOT_PCB_FOOTPRINT",
            Self::KotPcbPad => "KOT_PCB_PAD",
            Self::KotPcbShape => "KOT_PCB_SHAPE",
            Self::KotPcbReferenceImage => "KOT_PCB_REFERENCE_IMAGE",
            Self::KotPcbField => "KOT_PCB_FIELD",
            Self::KotPcbGenerator => "KOT_PCB_GENERATOR",
            Self::KotPcbText => "KOT_PCB_TEXT",
            Self::KotPcbTextbox => "KOT_PCB_TEXTBOX",
            Self::KotPcbTable => "KOT_PCB_TABLE",
            Self::KotPcbTablecell => "KOT_PCB_TABLECELL",
            Self::KotPcbTrace => "KOT_PCB_TRACE",
            Self::KotPcbVia => "KOT_PCB_VIA",
            Self::KotPcbArc => "KOT_PCB_ARC",
            Self::KotPcbMarker => "KOT_PCB_MARKER",
            Self::KotPcbDimension => "KOT_PCB_DIMENSION",
            Self::KotPcbZone => "KOT_PCB_ZONE",
            Self::KotPcbGroup => "KOT_PCB_GROUP",
        }
    }
}
