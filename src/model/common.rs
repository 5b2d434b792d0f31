use std::borrow::{Borrow, BorrowMut};
use std::path::PathBuf;
use std::str::FromStr;

use crate::geometry::{Angle, Vector2};
use crate::proto::common::types as common_types;
use crate::wrapper::{wrapper, Wrapper, WrapperMut};

pub use crate::proto::common::commands::RunActionStatus;
pub use crate::proto::common::types::{
    FrameType, GraphicFillType, HorizontalAlignment, KiCadObjectType, MapMergeMode,
    StrokeLineStyle, VerticalAlignment,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub full_version: String,
}

impl From<common_types::KiCadVersion> for VersionInfo {
    fn from(version: common_types::KiCadVersion) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            full_version: version.full_version,
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{} ({})",
            self.major, self.minor, self.patch, self.full_version
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DocumentType {
    Schematic,
    Symbol,
    Pcb,
    Footprint,
    DrawingSheet,
    Project,
}

impl DocumentType {
    pub(crate) fn to_proto(self) -> i32 {
        match self {
            Self::Schematic => common_types::DocumentType::DoctypeSchematic as i32,
            Self::Symbol => common_types::DocumentType::DoctypeSymbol as i32,
            Self::Pcb => common_types::DocumentType::DoctypePcb as i32,
            Self::Footprint => common_types::DocumentType::DoctypeFootprint as i32,
            Self::DrawingSheet => common_types::DocumentType::DoctypeDrawingSheet as i32,
            Self::Project => common_types::DocumentType::DoctypeProject as i32,
        }
    }

    pub(crate) fn from_proto(value: i32) -> Option<Self> {
        let ty = common_types::DocumentType::try_from(value).ok()?;
        match ty {
            common_types::DocumentType::DoctypeSchematic => Some(Self::Schematic),
            common_types::DocumentType::DoctypeSymbol => Some(Self::Symbol),
            common_types::DocumentType::DoctypePcb => Some(Self::Pcb),
            common_types::DocumentType::DoctypeFootprint => Some(Self::Footprint),
            common_types::DocumentType::DoctypeDrawingSheet => Some(Self::DrawingSheet),
            common_types::DocumentType::DoctypeProject => Some(Self::Project),
            common_types::DocumentType::DoctypeUnknown => None,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Schematic => "schematic",
            Self::Symbol => "symbol",
            Self::Pcb => "pcb",
            Self::Footprint => "footprint",
            Self::DrawingSheet => "drawing-sheet",
            Self::Project => "project",
        };

        write!(f, "{value}")
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "schematic" => Ok(Self::Schematic),
            "symbol" => Ok(Self::Symbol),
            "pcb" => Ok(Self::Pcb),
            "footprint" => Ok(Self::Footprint),
            "drawing-sheet" => Ok(Self::DrawingSheet),
            "project" => Ok(Self::Project),
            _ => Err(format!(
                "unknown document type `{value}`; expected one of: schematic, symbol, pcb, footprint, drawing-sheet, project"
            )),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectInfo {
    pub name: Option<String>,
    pub path: Option<PathBuf>,
}

/// An open document on the host, as reported by `GetOpenDocuments`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentSpecifier {
    pub document_type: DocumentType,
    pub board_filename: Option<String>,
    pub project: ProjectInfo,
}

impl DocumentSpecifier {
    /// `None` for document types this client does not model.
    pub(crate) fn from_proto(source: common_types::DocumentSpecifier) -> Option<Self> {
        let document_type = DocumentType::from_proto(source.r#type)?;
        let board_filename = match source.identifier {
            Some(common_types::document_specifier::Identifier::BoardFilename(filename)) => {
                Some(filename)
            }
            _ => None,
        };

        let project = source.project.unwrap_or_default();

        Some(Self {
            document_type,
            board_filename,
            project: ProjectInfo {
                name: (!project.name.is_empty()).then_some(project.name),
                path: (!project.path.is_empty()).then(|| PathBuf::from(project.path)),
            },
        })
    }

    pub(crate) fn to_proto(&self) -> common_types::DocumentSpecifier {
        let identifier = self.board_filename.as_ref().map(|filename| {
            common_types::document_specifier::Identifier::BoardFilename(filename.clone())
        });

        let project = common_types::ProjectSpecifier {
            name: self.project.name.clone().unwrap_or_default(),
            path: self
                .project
                .path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
        };

        common_types::DocumentSpecifier {
            r#type: self.document_type.to_proto(),
            project: Some(project),
            identifier,
        }
    }
}

wrapper!(
    /// RGBA color, each channel in `0.0..=1.0`.
    Color => common_types::Color
);

impl Color {
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_proto(common_types::Color { r, g, b, a })
    }
}

impl<P: Borrow<common_types::Color>> Color<P> {
    pub fn r(&self) -> f64 {
        self.proto().r
    }

    pub fn g(&self) -> f64 {
        self.proto().g
    }

    pub fn b(&self) -> f64 {
        self.proto().b
    }

    pub fn a(&self) -> f64 {
        self.proto().a
    }
}

impl<P: BorrowMut<common_types::Color>> Color<P> {
    pub fn set_rgba(&mut self, r: f64, g: f64, b: f64, a: f64) {
        *self.proto_mut() = common_types::Color { r, g, b, a };
    }
}

wrapper!(TextAttributes => common_types::TextAttributes);

impl<P: Borrow<common_types::TextAttributes>> TextAttributes<P> {
    pub fn font_name(&self) -> &str {
        &self.proto().font_name
    }

    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.proto().horizontal_alignment()
    }

    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.proto().vertical_alignment()
    }

    pub fn angle(&self) -> Angle {
        self.proto().angle.map(Angle::from).unwrap_or_default()
    }

    pub fn line_spacing(&self) -> f64 {
        self.proto().line_spacing
    }

    pub fn stroke_width(&self) -> i64 {
        self.proto().stroke_width.map_or(0, |width| width.value_nm)
    }

    pub fn italic(&self) -> bool {
        self.proto().italic
    }

    pub fn bold(&self) -> bool {
        self.proto().bold
    }

    pub fn underlined(&self) -> bool {
        self.proto().underlined
    }

    pub fn visible(&self) -> bool {
        self.proto().visible
    }

    pub fn mirrored(&self) -> bool {
        self.proto().mirrored
    }

    pub fn multiline(&self) -> bool {
        self.proto().multiline
    }

    pub fn keep_upright(&self) -> bool {
        self.proto().keep_upright
    }

    /// Glyph width and height in nanometers.
    pub fn size(&self) -> Vector2 {
        self.proto().size.map(Vector2::from).unwrap_or_default()
    }
}

impl<P: BorrowMut<common_types::TextAttributes>> TextAttributes<P> {
    pub fn set_font_name(&mut self, font_name: impl Into<String>) {
        self.proto_mut().font_name = font_name.into();
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.proto_mut().set_horizontal_alignment(alignment);
    }

    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.proto_mut().set_vertical_alignment(alignment);
    }

    pub fn set_angle(&mut self, angle: Angle) {
        self.proto_mut().angle = Some(angle.to_proto());
    }

    pub fn set_line_spacing(&mut self, spacing: f64) {
        self.proto_mut().line_spacing = spacing;
    }

    pub fn set_stroke_width(&mut self, width_nm: i64) {
        self.proto_mut().stroke_width = Some(common_types::Distance { value_nm: width_nm });
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.proto_mut().italic = italic;
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.proto_mut().bold = bold;
    }

    pub fn set_underlined(&mut self, underlined: bool) {
        self.proto_mut().underlined = underlined;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.proto_mut().visible = visible;
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        self.proto_mut().mirrored = mirrored;
    }

    pub fn set_multiline(&mut self, multiline: bool) {
        self.proto_mut().multiline = multiline;
    }

    pub fn set_keep_upright(&mut self, keep_upright: bool) {
        self.proto_mut().keep_upright = keep_upright;
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.proto_mut().size = Some(size.to_proto());
    }
}

wrapper!(
    /// Free text: a string with position and attributes.
    Text => common_types::Text
);

impl<P: Borrow<common_types::Text>> Text<P> {
    pub fn position(&self) -> Vector2 {
        self.proto().position.map(Vector2::from).unwrap_or_default()
    }

    pub fn attributes(&self) -> Option<TextAttributes<&common_types::TextAttributes>> {
        self.proto().attributes.as_ref().map(TextAttributes::from_proto)
    }

    pub fn text(&self) -> &str {
        &self.proto().text
    }

    pub fn hyperlink(&self) -> &str {
        &self.proto().hyperlink
    }
}

impl<P: BorrowMut<common_types::Text>> Text<P> {
    pub fn set_position(&mut self, position: Vector2) {
        self.proto_mut().position = Some(position.to_proto());
    }

    /// Creates default attributes on first use.
    pub fn attributes_mut(&mut self) -> TextAttributes<&mut common_types::TextAttributes> {
        TextAttributes::from_proto(
            self.proto_mut()
                .attributes
                .get_or_insert_with(Default::default),
        )
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.proto_mut().text = text.into();
    }

    pub fn set_hyperlink(&mut self, hyperlink: impl Into<String>) {
        self.proto_mut().hyperlink = hyperlink.into();
    }
}

wrapper!(TextBox => common_types::TextBox);

impl<P: Borrow<common_types::TextBox>> TextBox<P> {
    pub fn top_left(&self) -> Vector2 {
        self.proto().top_left.map(Vector2::from).unwrap_or_default()
    }

    pub fn bottom_right(&self) -> Vector2 {
        self.proto().bottom_right.map(Vector2::from).unwrap_or_default()
    }

    pub fn size(&self) -> Vector2 {
        self.bottom_right() - self.top_left()
    }

    pub fn attributes(&self) -> Option<TextAttributes<&common_types::TextAttributes>> {
        self.proto().attributes.as_ref().map(TextAttributes::from_proto)
    }

    pub fn text(&self) -> &str {
        &self.proto().text
    }
}

impl<P: BorrowMut<common_types::TextBox>> TextBox<P> {
    pub fn set_top_left(&mut self, top_left: Vector2) {
        self.proto_mut().top_left = Some(top_left.to_proto());
    }

    pub fn set_bottom_right(&mut self, bottom_right: Vector2) {
        self.proto_mut().bottom_right = Some(bottom_right.to_proto());
    }

    pub fn attributes_mut(&mut self) -> TextAttributes<&mut common_types::TextAttributes> {
        TextAttributes::from_proto(
            self.proto_mut()
                .attributes
                .get_or_insert_with(Default::default),
        )
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.proto_mut().text = text.into();
    }
}

wrapper!(
    /// `library:entry` reference to a library item.
    LibraryIdentifier => common_types::LibraryIdentifier
);

impl<P: Borrow<common_types::LibraryIdentifier>> LibraryIdentifier<P> {
    pub fn library(&self) -> &str {
        &self.proto().library_nickname
    }

    pub fn name(&self) -> &str {
        &self.proto().entry_name
    }
}

impl<P: BorrowMut<common_types::LibraryIdentifier>> LibraryIdentifier<P> {
    pub fn set_library(&mut self, library: impl Into<String>) {
        self.proto_mut().library_nickname = library.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.proto_mut().entry_name = name.into();
    }
}

impl<P: Borrow<common_types::LibraryIdentifier>> std::fmt::Display for LibraryIdentifier<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.library(), self.name())
    }
}

impl FromStr for LibraryIdentifier {
    type Err = String;

    /// Parses `library:entry`. A string without a colon names an entry with
    /// no library.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (library, name) = value.split_once(':').unwrap_or(("", value));
        if name.is_empty() {
            return Err(format!("library identifier `{value}` has an empty entry name"));
        }

        Ok(Self::from_proto(common_types::LibraryIdentifier {
            library_nickname: library.to_string(),
            entry_name: name.to_string(),
        }))
    }
}

wrapper!(StrokeAttributes => common_types::StrokeAttributes);

impl<P: Borrow<common_types::StrokeAttributes>> StrokeAttributes<P> {
    pub fn width(&self) -> i64 {
        self.proto().width.map_or(0, |width| width.value_nm)
    }

    pub fn style(&self) -> StrokeLineStyle {
        self.proto().style()
    }

    pub fn color(&self) -> Option<Color<&common_types::Color>> {
        self.proto().color.as_ref().map(Color::from_proto)
    }
}

impl<P: BorrowMut<common_types::StrokeAttributes>> StrokeAttributes<P> {
    pub fn set_width(&mut self, width_nm: i64) {
        self.proto_mut().width = Some(common_types::Distance { value_nm: width_nm });
    }

    pub fn set_style(&mut self, style: StrokeLineStyle) {
        self.proto_mut().set_style(style);
    }

    pub fn color_mut(&mut self) -> Color<&mut common_types::Color> {
        Color::from_proto(self.proto_mut().color.get_or_insert_with(Default::default))
    }
}

wrapper!(GraphicFillAttributes => common_types::GraphicFillAttributes);

impl<P: Borrow<common_types::GraphicFillAttributes>> GraphicFillAttributes<P> {
    pub fn fill_type(&self) -> GraphicFillType {
        self.proto().fill_type()
    }

    pub fn filled(&self) -> bool {
        self.fill_type() == GraphicFillType::GftFilled
    }

    pub fn color(&self) -> Option<Color<&common_types::Color>> {
        self.proto().color.as_ref().map(Color::from_proto)
    }
}

impl<P: BorrowMut<common_types::GraphicFillAttributes>> GraphicFillAttributes<P> {
    pub fn set_fill_type(&mut self, fill_type: GraphicFillType) {
        self.proto_mut().set_fill_type(fill_type);
    }

    pub fn color_mut(&mut self) -> Color<&mut common_types::Color> {
        Color::from_proto(self.proto_mut().color.get_or_insert_with(Default::default))
    }
}

wrapper!(GraphicAttributes => common_types::GraphicAttributes);

impl<P: Borrow<common_types::GraphicAttributes>> GraphicAttributes<P> {
    pub fn stroke(&self) -> Option<StrokeAttributes<&common_types::StrokeAttributes>> {
        self.proto().stroke.as_ref().map(StrokeAttributes::from_proto)
    }

    pub fn fill(&self) -> Option<GraphicFillAttributes<&common_types::GraphicFillAttributes>> {
        self.proto().fill.as_ref().map(GraphicFillAttributes::from_proto)
    }
}

impl<P: BorrowMut<common_types::GraphicAttributes>> GraphicAttributes<P> {
    pub fn stroke_mut(&mut self) -> StrokeAttributes<&mut common_types::StrokeAttributes> {
        StrokeAttributes::from_proto(self.proto_mut().stroke.get_or_insert_with(Default::default))
    }

    pub fn fill_mut(&mut self) -> GraphicFillAttributes<&mut common_types::GraphicFillAttributes> {
        GraphicFillAttributes::from_proto(self.proto_mut().fill.get_or_insert_with(Default::default))
    }
}

/// One vertex of a [`PolyLine`]: a point, or an arc through three points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolyLineNode {
    Point(Vector2),
    Arc {
        start: Vector2,
        mid: Vector2,
        end: Vector2,
    },
}

impl PolyLineNode {
    fn from_proto(node: &common_types::PolyLineNode) -> Option<Self> {
        use common_types::poly_line_node::Geometry;

        match node.geometry? {
            Geometry::Point(point) => Some(Self::Point(point.into())),
            Geometry::Arc(arc) => Some(Self::Arc {
                start: arc.start.map(Vector2::from).unwrap_or_default(),
                mid: arc.mid.map(Vector2::from).unwrap_or_default(),
                end: arc.end.map(Vector2::from).unwrap_or_default(),
            }),
        }
    }

    fn to_proto(self) -> common_types::PolyLineNode {
        use common_types::poly_line_node::Geometry;

        let geometry = match self {
            Self::Point(point) => Geometry::Point(point.to_proto()),
            Self::Arc { start, mid, end } => Geometry::Arc(common_types::ArcStartMidEnd {
                start: Some(start.to_proto()),
                mid: Some(mid.to_proto()),
                end: Some(end.to_proto()),
            }),
        };

        common_types::PolyLineNode {
            geometry: Some(geometry),
        }
    }
}

wrapper!(PolyLine => common_types::PolyLine);

impl<P: Borrow<common_types::PolyLine>> PolyLine<P> {
    /// Vertices in order; nodes without geometry are skipped.
    pub fn nodes(&self) -> Vec<PolyLineNode> {
        self.proto()
            .nodes
            .iter()
            .filter_map(PolyLineNode::from_proto)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.proto().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proto().nodes.is_empty()
    }

    pub fn closed(&self) -> bool {
        self.proto().closed
    }
}

impl<P: BorrowMut<common_types::PolyLine>> PolyLine<P> {
    pub fn push(&mut self, node: PolyLineNode) {
        self.proto_mut().nodes.push(node.to_proto());
    }

    pub fn push_point(&mut self, point: Vector2) {
        self.push(PolyLineNode::Point(point));
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.proto_mut().closed = closed;
    }

    pub fn clear(&mut self) {
        self.proto_mut().nodes.clear();
    }
}

impl FromIterator<Vector2> for PolyLine {
    fn from_iter<I: IntoIterator<Item = Vector2>>(points: I) -> Self {
        let mut line = Self::new();
        for point in points {
            line.push_point(point);
        }
        line
    }
}

wrapper!(
    /// A closed outline with zero or more holes.
    PolygonWithHoles => common_types::PolygonWithHoles
);

impl<P: Borrow<common_types::PolygonWithHoles>> PolygonWithHoles<P> {
    pub fn outline(&self) -> Option<PolyLine<&common_types::PolyLine>> {
        self.proto().outline.as_ref().map(PolyLine::from_proto)
    }

    pub fn holes(&self) -> impl Iterator<Item = PolyLine<&common_types::PolyLine>> + '_ {
        self.proto().holes.iter().map(PolyLine::from_proto)
    }

    pub fn hole_count(&self) -> usize {
        self.proto().holes.len()
    }
}

impl<P: BorrowMut<common_types::PolygonWithHoles>> PolygonWithHoles<P> {
    pub fn outline_mut(&mut self) -> PolyLine<&mut common_types::PolyLine> {
        PolyLine::from_proto(self.proto_mut().outline.get_or_insert_with(Default::default))
    }

    pub fn add_hole(&mut self, hole: PolyLine) {
        self.proto_mut().holes.push(hole.into_proto());
    }

    pub fn clear_holes(&mut self) {
        self.proto_mut().holes.clear();
    }
}

wrapper!(TitleBlockInfo => common_types::TitleBlockInfo);

impl<P: Borrow<common_types::TitleBlockInfo>> TitleBlockInfo<P> {
    pub fn title(&self) -> &str {
        &self.proto().title
    }

    pub fn date(&self) -> &str {
        &self.proto().date
    }

    pub fn revision(&self) -> &str {
        &self.proto().revision
    }

    pub fn company(&self) -> &str {
        &self.proto().company
    }

    /// Comment line `index` (1 through 9).
    pub fn comment(&self, index: usize) -> Option<&str> {
        let proto = self.proto();
        let comment = match index {
            1 => &proto.comment1,
            2 => &proto.comment2,
            3 => &proto.comment3,
            4 => &proto.comment4,
            5 => &proto.comment5,
            6 => &proto.comment6,
            7 => &proto.comment7,
            8 => &proto.comment8,
            9 => &proto.comment9,
            _ => return None,
        };
        Some(comment.as_str())
    }

    /// All nine comment lines, including empty ones.
    pub fn comments(&self) -> Vec<&str> {
        (1..=9).filter_map(|index| self.comment(index)).collect()
    }
}

impl<P: BorrowMut<common_types::TitleBlockInfo>> TitleBlockInfo<P> {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.proto_mut().title = title.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.proto_mut().date = date.into();
    }

    pub fn set_revision(&mut self, revision: impl Into<String>) {
        self.proto_mut().revision = revision.into();
    }

    pub fn set_company(&mut self, company: impl Into<String>) {
        self.proto_mut().company = company.into();
    }

    /// Returns false if `index` is outside 1 through 9.
    pub fn set_comment(&mut self, index: usize, comment: impl Into<String>) -> bool {
        let proto = self.proto_mut();
        let slot = match index {
            1 => &mut proto.comment1,
            2 => &mut proto.comment2,
            3 => &mut proto.comment3,
            4 => &mut proto.comment4,
            5 => &mut proto.comment5,
            6 => &mut proto.comment6,
            7 => &mut proto.comment7,
            8 => &mut proto.comment8,
            9 => &mut proto.comment9,
            _ => return false,
        };
        *slot = comment.into();
        true
    }
}
