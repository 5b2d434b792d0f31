use std::borrow::{Borrow, BorrowMut};

use prost_types::Any;

use crate::envelope;
use crate::error::KiCadError;
use crate::geometry::{Angle, Vector2};
use crate::model::common::{
    Color, GraphicAttributes, LibraryIdentifier, PolygonWithHoles, Text, TextAttributes, TextBox,
};
use crate::proto::board as board_proto;
use crate::proto::board::types as board_types;
use crate::proto::common::types as common_types;
use crate::proto::ApiMessage;
use crate::wrapper::{wrapper, Wrapper, WrapperMut};

pub use crate::proto::board::types::{BoardLayer, PadType, ViaType, ZoneType};
pub use crate::proto::board::{BoardLayerClass, BoardStackupLayerType};

fn item_id(id: &Option<common_types::Kiid>) -> Option<&str> {
    id.as_ref()
        .map(|id| id.value.as_str())
        .filter(|value| !value.is_empty())
}

fn locked_state(locked: bool) -> common_types::LockedState {
    if locked {
        common_types::LockedState::LsLocked
    } else {
        common_types::LockedState::LsUnlocked
    }
}

fn distance(value_nm: i64) -> Option<common_types::Distance> {
    Some(common_types::Distance { value_nm })
}

fn point(value: Option<common_types::Vector2>) -> Vector2 {
    value.map(Vector2::from).unwrap_or_default()
}

wrapper!(Net => board_types::Net);

impl Net {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::from_proto(board_types::Net {
            code: None,
            name: name.into(),
        })
    }
}

impl<P: Borrow<board_types::Net>> Net<P> {
    /// Host-assigned net code; 0 is the unconnected net.
    pub fn code(&self) -> i32 {
        self.proto().code.map_or(0, |code| code.value)
    }

    pub fn name(&self) -> &str {
        &self.proto().name
    }
}

impl<P: BorrowMut<board_types::Net>> Net<P> {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.proto_mut().name = name.into();
    }
}

impl<P: Borrow<board_types::Net>> std::fmt::Display for Net<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.code(), self.name())
    }
}

wrapper!(
    /// A straight copper segment.
    Track => board_types::Track
);

impl<P: Borrow<board_types::Track>> Track<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn start(&self) -> Vector2 {
        point(self.proto().start)
    }

    pub fn end(&self) -> Vector2 {
        point(self.proto().end)
    }

    pub fn width(&self) -> i64 {
        self.proto().width.map_or(0, |width| width.value_nm)
    }

    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn net(&self) -> Option<Net<&board_types::Net>> {
        self.proto().net.as_ref().map(Net::from_proto)
    }

    /// Straight-line length in nanometers.
    pub fn length(&self) -> f64 {
        let delta = self.end() - self.start();
        (delta.x as f64).hypot(delta.y as f64)
    }
}

impl<P: BorrowMut<board_types::Track>> Track<P> {
    pub fn set_start(&mut self, start: Vector2) {
        self.proto_mut().start = Some(start.to_proto());
    }

    pub fn set_end(&mut self, end: Vector2) {
        self.proto_mut().end = Some(end.to_proto());
    }

    pub fn set_width(&mut self, width_nm: i64) {
        self.proto_mut().width = distance(width_nm);
    }

    pub fn set_layer(&mut self, layer: BoardLayer) {
        self.proto_mut().set_layer(layer);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }

    pub fn net_mut(&mut self) -> Net<&mut board_types::Net> {
        Net::from_proto(self.proto_mut().net.get_or_insert_with(Default::default))
    }
}

wrapper!(
    /// A copper arc through start, mid and end points.
    ArcTrack => board_types::Arc
);

impl<P: Borrow<board_types::Arc>> ArcTrack<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn start(&self) -> Vector2 {
        point(self.proto().start)
    }

    pub fn mid(&self) -> Vector2 {
        point(self.proto().mid)
    }

    pub fn end(&self) -> Vector2 {
        point(self.proto().end)
    }

    pub fn width(&self) -> i64 {
        self.proto().width.map_or(0, |width| width.value_nm)
    }

    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn net(&self) -> Option<Net<&board_types::Net>> {
        self.proto().net.as_ref().map(Net::from_proto)
    }
}

impl<P: BorrowMut<board_types::Arc>> ArcTrack<P> {
    pub fn set_start(&mut self, start: Vector2) {
        self.proto_mut().start = Some(start.to_proto());
    }

    pub fn set_mid(&mut self, mid: Vector2) {
        self.proto_mut().mid = Some(mid.to_proto());
    }

    pub fn set_end(&mut self, end: Vector2) {
        self.proto_mut().end = Some(end.to_proto());
    }

    pub fn set_width(&mut self, width_nm: i64) {
        self.proto_mut().width = distance(width_nm);
    }

    pub fn set_layer(&mut self, layer: BoardLayer) {
        self.proto_mut().set_layer(layer);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }

    pub fn net_mut(&mut self) -> Net<&mut board_types::Net> {
        Net::from_proto(self.proto_mut().net.get_or_insert_with(Default::default))
    }
}

wrapper!(Via => board_types::Via);

impl<P: Borrow<board_types::Via>> Via<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn position(&self) -> Vector2 {
        point(self.proto().position)
    }

    pub fn via_type(&self) -> ViaType {
        self.proto().r#type()
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn net(&self) -> Option<Net<&board_types::Net>> {
        self.proto().net.as_ref().map(Net::from_proto)
    }
}

impl<P: BorrowMut<board_types::Via>> Via<P> {
    pub fn set_position(&mut self, position: Vector2) {
        self.proto_mut().position = Some(position.to_proto());
    }

    pub fn set_via_type(&mut self, via_type: ViaType) {
        self.proto_mut().set_type(via_type);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }

    pub fn net_mut(&mut self) -> Net<&mut board_types::Net> {
        Net::from_proto(self.proto_mut().net.get_or_insert_with(Default::default))
    }
}

wrapper!(BoardText => board_types::BoardText);

impl<P: Borrow<board_types::BoardText>> BoardText<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn text(&self) -> Option<Text<&common_types::Text>> {
        self.proto().text.as_ref().map(Text::from_proto)
    }

    /// The text string, empty when unset.
    pub fn value(&self) -> &str {
        self.proto()
            .text
            .as_ref()
            .map_or("", |text| text.text.as_str())
    }

    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn knockout(&self) -> bool {
        self.proto().knockout
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }
}

impl<P: BorrowMut<board_types::BoardText>> BoardText<P> {
    pub fn text_mut(&mut self) -> Text<&mut common_types::Text> {
        Text::from_proto(self.proto_mut().text.get_or_insert_with(Default::default))
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text_mut().set_text(value);
    }

    pub fn set_layer(&mut self, layer: BoardLayer) {
        self.proto_mut().set_layer(layer);
    }

    pub fn set_knockout(&mut self, knockout: bool) {
        self.proto_mut().knockout = knockout;
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }
}

wrapper!(BoardTextBox => board_types::BoardTextBox);

impl<P: Borrow<board_types::BoardTextBox>> BoardTextBox<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn textbox(&self) -> Option<TextBox<&common_types::TextBox>> {
        self.proto().textbox.as_ref().map(TextBox::from_proto)
    }

    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }
}

impl<P: BorrowMut<board_types::BoardTextBox>> BoardTextBox<P> {
    pub fn textbox_mut(&mut self) -> TextBox<&mut common_types::TextBox> {
        TextBox::from_proto(self.proto_mut().textbox.get_or_insert_with(Default::default))
    }

    pub fn set_layer(&mut self, layer: BoardLayer) {
        self.proto_mut().set_layer(layer);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }
}

wrapper!(
    /// A named footprint field such as Reference or Value.
    Field => board_types::Field
);

impl<P: Borrow<board_types::Field>> Field<P> {
    /// Ordinal of the field within its footprint.
    pub fn field_id(&self) -> Option<i32> {
        self.proto().id.map(|id| id.id)
    }

    pub fn name(&self) -> &str {
        &self.proto().name
    }

    pub fn visible(&self) -> bool {
        self.proto().visible
    }

    pub fn text(&self) -> Option<BoardText<&board_types::BoardText>> {
        self.proto().text.as_ref().map(BoardText::from_proto)
    }

    pub fn value(&self) -> &str {
        self.proto()
            .text
            .as_ref()
            .and_then(|text| text.text.as_ref())
            .map_or("", |text| text.text.as_str())
    }
}

impl<P: BorrowMut<board_types::Field>> Field<P> {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.proto_mut().name = name.into();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.proto_mut().visible = visible;
    }

    pub fn text_mut(&mut self) -> BoardText<&mut board_types::BoardText> {
        BoardText::from_proto(self.proto_mut().text.get_or_insert_with(Default::default))
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text_mut().set_value(value);
    }
}

wrapper!(FootprintAttributes => board_types::FootprintAttributes);

impl<P: Borrow<board_types::FootprintAttributes>> FootprintAttributes<P> {
    pub fn description(&self) -> &str {
        &self.proto().description
    }

    pub fn keywords(&self) -> &str {
        &self.proto().keywords
    }

    pub fn not_in_schematic(&self) -> bool {
        self.proto().not_in_schematic
    }

    pub fn exclude_from_position_files(&self) -> bool {
        self.proto().exclude_from_position_files
    }

    pub fn exclude_from_bill_of_materials(&self) -> bool {
        self.proto().exclude_from_bill_of_materials
    }

    pub fn exempt_from_courtyard_requirement(&self) -> bool {
        self.proto().exempt_from_courtyard_requirement
    }

    pub fn do_not_populate(&self) -> bool {
        self.proto().do_not_populate
    }
}

impl<P: BorrowMut<board_types::FootprintAttributes>> FootprintAttributes<P> {
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.proto_mut().description = description.into();
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.proto_mut().keywords = keywords.into();
    }

    pub fn set_not_in_schematic(&mut self, value: bool) {
        self.proto_mut().not_in_schematic = value;
    }

    pub fn set_exclude_from_position_files(&mut self, value: bool) {
        self.proto_mut().exclude_from_position_files = value;
    }

    pub fn set_exclude_from_bill_of_materials(&mut self, value: bool) {
        self.proto_mut().exclude_from_bill_of_materials = value;
    }

    pub fn set_exempt_from_courtyard_requirement(&mut self, value: bool) {
        self.proto_mut().exempt_from_courtyard_requirement = value;
    }

    pub fn set_do_not_populate(&mut self, value: bool) {
        self.proto_mut().do_not_populate = value;
    }
}

wrapper!(
    /// A footprint definition: library id, fields and child items.
    Footprint => board_types::Footprint
);

impl<P: Borrow<board_types::Footprint>> Footprint<P> {
    pub fn id(&self) -> Option<LibraryIdentifier<&common_types::LibraryIdentifier>> {
        self.proto().id.as_ref().map(LibraryIdentifier::from_proto)
    }

    pub fn anchor(&self) -> Vector2 {
        point(self.proto().anchor)
    }

    pub fn attributes(&self) -> Option<FootprintAttributes<&board_types::FootprintAttributes>> {
        self.proto()
            .attributes
            .as_ref()
            .map(FootprintAttributes::from_proto)
    }

    pub fn reference_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().reference_field.as_ref().map(Field::from_proto)
    }

    pub fn value_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().value_field.as_ref().map(Field::from_proto)
    }

    pub fn datasheet_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().datasheet_field.as_ref().map(Field::from_proto)
    }

    pub fn description_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().description_field.as_ref().map(Field::from_proto)
    }

    pub fn item_count(&self) -> usize {
        self.proto().items.len()
    }

    /// Decodes every child item, in the order they were added.
    ///
    /// # Panics
    ///
    /// Panics if a child is not a registered board item type.
    pub fn items(&self) -> Result<Vec<BoardItem>, KiCadError> {
        self.proto().items.iter().map(unwrap_item).collect()
    }
}

impl<P: BorrowMut<board_types::Footprint>> Footprint<P> {
    pub fn id_mut(&mut self) -> LibraryIdentifier<&mut common_types::LibraryIdentifier> {
        LibraryIdentifier::from_proto(self.proto_mut().id.get_or_insert_with(Default::default))
    }

    pub fn set_anchor(&mut self, anchor: Vector2) {
        self.proto_mut().anchor = Some(anchor.to_proto());
    }

    pub fn attributes_mut(&mut self) -> FootprintAttributes<&mut board_types::FootprintAttributes> {
        FootprintAttributes::from_proto(
            self.proto_mut()
                .attributes
                .get_or_insert_with(Default::default),
        )
    }

    pub fn reference_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .reference_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn value_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .value_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn datasheet_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .datasheet_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn description_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .description_field
                .get_or_insert_with(Default::default),
        )
    }

    /// Appends `item` to the footprint's children.
    pub fn add_item(&mut self, item: impl Into<BoardItem>) {
        self.proto_mut().items.push(item.into().pack());
    }

    pub fn clear_items(&mut self) {
        self.proto_mut().items.clear();
    }
}

wrapper!(
    /// A footprint placed on a board.
    FootprintInstance => board_types::FootprintInstance
);

impl<P: Borrow<board_types::FootprintInstance>> FootprintInstance<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn position(&self) -> Vector2 {
        point(self.proto().position)
    }

    pub fn orientation(&self) -> Angle {
        self.proto().orientation.map(Angle::from).unwrap_or_default()
    }

    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn definition(&self) -> Option<Footprint<&board_types::Footprint>> {
        self.proto().definition.as_ref().map(Footprint::from_proto)
    }

    pub fn reference_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().reference_field.as_ref().map(Field::from_proto)
    }

    pub fn value_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().value_field.as_ref().map(Field::from_proto)
    }

    pub fn datasheet_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().datasheet_field.as_ref().map(Field::from_proto)
    }

    pub fn description_field(&self) -> Option<Field<&board_types::Field>> {
        self.proto().description_field.as_ref().map(Field::from_proto)
    }

    pub fn attributes(&self) -> Option<FootprintAttributes<&board_types::FootprintAttributes>> {
        self.proto()
            .attributes
            .as_ref()
            .map(FootprintAttributes::from_proto)
    }

    /// Reference designator, e.g. `R1`; empty when unset.
    pub fn reference(&self) -> &str {
        self.proto()
            .reference_field
            .as_ref()
            .and_then(|field| field.text.as_ref())
            .and_then(|board_text| board_text.text.as_ref())
            .map_or("", |text| text.text.as_str())
    }
}

impl<P: BorrowMut<board_types::FootprintInstance>> FootprintInstance<P> {
    pub fn set_position(&mut self, position: Vector2) {
        self.proto_mut().position = Some(position.to_proto());
    }

    pub fn set_orientation(&mut self, orientation: Angle) {
        self.proto_mut().orientation = Some(orientation.to_proto());
    }

    pub fn set_layer(&mut self, layer: BoardLayer) {
        self.proto_mut().set_layer(layer);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }

    pub fn definition_mut(&mut self) -> Footprint<&mut board_types::Footprint> {
        Footprint::from_proto(
            self.proto_mut()
                .definition
                .get_or_insert_with(Default::default),
        )
    }

    pub fn reference_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .reference_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn value_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .value_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn datasheet_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .datasheet_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn description_field_mut(&mut self) -> Field<&mut board_types::Field> {
        Field::from_proto(
            self.proto_mut()
                .description_field
                .get_or_insert_with(Default::default),
        )
    }

    pub fn attributes_mut(&mut self) -> FootprintAttributes<&mut board_types::FootprintAttributes> {
        FootprintAttributes::from_proto(
            self.proto_mut()
                .attributes
                .get_or_insert_with(Default::default),
        )
    }
}

wrapper!(Pad => board_types::Pad);

impl<P: Borrow<board_types::Pad>> Pad<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn number(&self) -> &str {
        &self.proto().number
    }

    pub fn pad_type(&self) -> PadType {
        self.proto().r#type()
    }

    pub fn position(&self) -> Vector2 {
        point(self.proto().position)
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn net(&self) -> Option<Net<&board_types::Net>> {
        self.proto().net.as_ref().map(Net::from_proto)
    }
}

impl<P: BorrowMut<board_types::Pad>> Pad<P> {
    pub fn set_number(&mut self, number: impl Into<String>) {
        self.proto_mut().number = number.into();
    }

    pub fn set_pad_type(&mut self, pad_type: PadType) {
        self.proto_mut().set_type(pad_type);
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.proto_mut().position = Some(position.to_proto());
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }

    pub fn net_mut(&mut self) -> Net<&mut board_types::Net> {
        Net::from_proto(self.proto_mut().net.get_or_insert_with(Default::default))
    }
}

/// Geometry of a [`BoardShape`], copied out of the message.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    Segment {
        start: Vector2,
        end: Vector2,
    },
    Rectangle {
        top_left: Vector2,
        bottom_right: Vector2,
        corner_radius: i64,
    },
    Arc {
        start: Vector2,
        mid: Vector2,
        end: Vector2,
    },
    Circle {
        center: Vector2,
        radius_point: Vector2,
    },
    Polygon(PolygonWithHoles),
}

impl ShapeGeometry {
    fn from_proto(geometry: &board_types::board_graphic_shape::Geometry) -> Self {
        use board_types::board_graphic_shape::Geometry;

        match geometry {
            Geometry::Segment(segment) => Self::Segment {
                start: point(segment.start),
                end: point(segment.end),
            },
            Geometry::Rectangle(rectangle) => Self::Rectangle {
                top_left: point(rectangle.top_left),
                bottom_right: point(rectangle.bottom_right),
                corner_radius: rectangle.corner_radius.map_or(0, |radius| radius.value_nm),
            },
            Geometry::Arc(arc) => Self::Arc {
                start: point(arc.start),
                mid: point(arc.mid),
                end: point(arc.end),
            },
            Geometry::Circle(circle) => Self::Circle {
                center: point(circle.center),
                radius_point: point(circle.radius_point),
            },
            Geometry::Polygon(polygon) => Self::Polygon(PolygonWithHoles::from_proto(polygon.clone())),
        }
    }

    fn into_proto(self) -> board_types::board_graphic_shape::Geometry {
        use board_types::board_graphic_shape::Geometry;

        match self {
            Self::Segment { start, end } => Geometry::Segment(board_types::GraphicSegment {
                start: Some(start.to_proto()),
                end: Some(end.to_proto()),
            }),
            Self::Rectangle {
                top_left,
                bottom_right,
                corner_radius,
            } => Geometry::Rectangle(board_types::GraphicRectangle {
                top_left: Some(top_left.to_proto()),
                bottom_right: Some(bottom_right.to_proto()),
                corner_radius: distance(corner_radius),
            }),
            Self::Arc { start, mid, end } => Geometry::Arc(board_types::GraphicArc {
                start: Some(start.to_proto()),
                mid: Some(mid.to_proto()),
                end: Some(end.to_proto()),
            }),
            Self::Circle {
                center,
                radius_point,
            } => Geometry::Circle(board_types::GraphicCircle {
                center: Some(center.to_proto()),
                radius_point: Some(radius_point.to_proto()),
            }),
            Self::Polygon(polygon) => Geometry::Polygon(polygon.into_proto()),
        }
    }
}

wrapper!(
    /// A graphic shape on a board layer.
    BoardShape => board_types::BoardGraphicShape
);

impl<P: Borrow<board_types::BoardGraphicShape>> BoardShape<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn net(&self) -> Option<Net<&board_types::Net>> {
        self.proto().net.as_ref().map(Net::from_proto)
    }

    pub fn attributes(&self) -> Option<GraphicAttributes<&common_types::GraphicAttributes>> {
        self.proto()
            .attributes
            .as_ref()
            .map(GraphicAttributes::from_proto)
    }

    pub fn geometry(&self) -> Option<ShapeGeometry> {
        self.proto().geometry.as_ref().map(ShapeGeometry::from_proto)
    }
}

impl<P: BorrowMut<board_types::BoardGraphicShape>> BoardShape<P> {
    pub fn set_layer(&mut self, layer: BoardLayer) {
        self.proto_mut().set_layer(layer);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }

    pub fn net_mut(&mut self) -> Net<&mut board_types::Net> {
        Net::from_proto(self.proto_mut().net.get_or_insert_with(Default::default))
    }

    pub fn attributes_mut(&mut self) -> GraphicAttributes<&mut common_types::GraphicAttributes> {
        GraphicAttributes::from_proto(
            self.proto_mut()
                .attributes
                .get_or_insert_with(Default::default),
        )
    }

    pub fn set_geometry(&mut self, geometry: ShapeGeometry) {
        self.proto_mut().geometry = Some(geometry.into_proto());
    }
}

wrapper!(Zone => board_types::Zone);

impl<P: Borrow<board_types::Zone>> Zone<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn zone_type(&self) -> ZoneType {
        self.proto().r#type()
    }

    /// Layers the zone lives on; unknown layer ids are skipped.
    pub fn layers(&self) -> Vec<BoardLayer> {
        self.proto().layers().collect()
    }

    pub fn outline(&self) -> Option<PolygonWithHoles<&common_types::PolygonWithHoles>> {
        self.proto().outline.as_ref().map(PolygonWithHoles::from_proto)
    }

    pub fn name(&self) -> &str {
        &self.proto().name
    }

    pub fn priority(&self) -> u32 {
        self.proto().priority
    }

    pub fn locked(&self) -> bool {
        self.proto().locked() == common_types::LockedState::LsLocked
    }

    pub fn filled(&self) -> bool {
        self.proto().filled
    }
}

impl<P: BorrowMut<board_types::Zone>> Zone<P> {
    pub fn set_zone_type(&mut self, zone_type: ZoneType) {
        self.proto_mut().set_type(zone_type);
    }

    pub fn set_layers(&mut self, layers: impl IntoIterator<Item = BoardLayer>) {
        let proto = self.proto_mut();
        proto.layers.clear();
        for layer in layers {
            proto.push_layers(layer);
        }
    }

    pub fn outline_mut(&mut self) -> PolygonWithHoles<&mut common_types::PolygonWithHoles> {
        PolygonWithHoles::from_proto(self.proto_mut().outline.get_or_insert_with(Default::default))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.proto_mut().name = name.into();
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.proto_mut().priority = priority;
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.proto_mut().set_locked(locked_state(locked));
    }
}

wrapper!(Group => board_types::Group);

impl<P: Borrow<board_types::Group>> Group<P> {
    pub fn id(&self) -> Option<&str> {
        item_id(&self.proto().id)
    }

    pub fn name(&self) -> &str {
        &self.proto().name
    }

    /// Identifiers of the grouped items.
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.proto().items.iter().map(|id| id.value.as_str())
    }
}

impl<P: BorrowMut<board_types::Group>> Group<P> {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.proto_mut().name = name.into();
    }

    pub fn add_item(&mut self, id: impl Into<String>) {
        self.proto_mut()
            .items
            .push(common_types::Kiid { value: id.into() });
    }
}

wrapper!(BoardStackupLayer => board_proto::BoardStackupLayer);

impl<P: Borrow<board_proto::BoardStackupLayer>> BoardStackupLayer<P> {
    pub fn thickness(&self) -> i64 {
        self.proto().thickness.map_or(0, |thickness| thickness.value_nm)
    }

    /// The board layer for copper and technical layers; `BlUndefined` for
    /// dielectrics.
    pub fn layer(&self) -> BoardLayer {
        self.proto().layer()
    }

    pub fn enabled(&self) -> bool {
        self.proto().enabled
    }

    pub fn layer_type(&self) -> BoardStackupLayerType {
        self.proto().r#type()
    }

    pub fn color(&self) -> Option<Color<&common_types::Color>> {
        self.proto().color.as_ref().map(Color::from_proto)
    }

    pub fn material_name(&self) -> &str {
        &self.proto().material_name
    }

    pub fn user_name(&self) -> &str {
        &self.proto().user_name
    }

    /// Sublayers of a dielectric slot; empty for other layer types.
    pub fn dielectric_sublayers(&self) -> &[board_proto::BoardStackupDielectricProperties] {
        self.proto()
            .dielectric
            .as_ref()
            .map(|dielectric| dielectric.layer.as_slice())
            .unwrap_or_default()
    }
}

impl<P: BorrowMut<board_proto::BoardStackupLayer>> BoardStackupLayer<P> {
    pub fn set_thickness(&mut self, thickness_nm: i64) {
        self.proto_mut().thickness = distance(thickness_nm);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.proto_mut().enabled = enabled;
    }

    pub fn set_material_name(&mut self, material_name: impl Into<String>) {
        self.proto_mut().material_name = material_name.into();
    }

    pub fn color_mut(&mut self) -> Color<&mut common_types::Color> {
        Color::from_proto(self.proto_mut().color.get_or_insert_with(Default::default))
    }
}

wrapper!(
    /// Physical layer stackup, top to bottom.
    BoardStackup => board_proto::BoardStackup
);

impl<P: Borrow<board_proto::BoardStackup>> BoardStackup<P> {
    pub fn finish_type_name(&self) -> &str {
        &self.proto().finish_type_name
    }

    pub fn impedance_controlled(&self) -> bool {
        self.proto().impedance_controlled
    }

    pub fn layers(
        &self,
    ) -> impl Iterator<Item = BoardStackupLayer<&board_proto::BoardStackupLayer>> + '_ {
        self.proto().layers.iter().map(BoardStackupLayer::from_proto)
    }

    pub fn layer_count(&self) -> usize {
        self.proto().layers.len()
    }

    /// Total thickness of enabled layers in nanometers.
    pub fn thickness(&self) -> i64 {
        self.layers()
            .filter(|layer| layer.enabled())
            .map(|layer| layer.thickness())
            .sum()
    }
}

wrapper!(BoardLayerGraphicsDefaults => board_proto::BoardLayerGraphicsDefaults);

impl<P: Borrow<board_proto::BoardLayerGraphicsDefaults>> BoardLayerGraphicsDefaults<P> {
    pub fn layer_class(&self) -> BoardLayerClass {
        self.proto().layer()
    }

    pub fn text_attributes(&self) -> Option<TextAttributes<&common_types::TextAttributes>> {
        self.proto().text.as_ref().map(TextAttributes::from_proto)
    }

    pub fn line_thickness(&self) -> i64 {
        self.proto()
            .line_thickness
            .map_or(0, |thickness| thickness.value_nm)
    }
}

type ItemFactory = fn(&Any) -> Result<BoardItem, KiCadError>;

fn unwrap_as<W>(payload: &Any) -> Result<BoardItem, KiCadError>
where
    W: Wrapper + From<<W as Wrapper>::Proto> + Into<BoardItem>,
{
    let proto = envelope::unpack_any::<W::Proto>(payload)?;
    Ok(W::from(proto).into())
}

macro_rules! board_items {
    ($($variant:ident($wrapper:ident)),+ $(,)?) => {
        /// Any item that can appear in a board's heterogeneous item lists.
        #[derive(Clone, Debug, PartialEq)]
        pub enum BoardItem {
            $($variant($wrapper),)+
        }

        $(
            impl From<$wrapper> for BoardItem {
                fn from(item: $wrapper) -> Self {
                    Self::$variant(item)
                }
            }
        )+

        impl BoardItem {
            pub fn pack(&self) -> Any {
                match self {
                    $(Self::$variant(item) => item.pack(),)+
                }
            }

            /// Protobuf name of the wrapped message.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <<$wrapper as Wrapper>::Proto as ApiMessage>::TYPE_NAME,)+
                }
            }
        }

        static ITEM_FACTORIES: &[(&str, ItemFactory)] = &[
            $((<<$wrapper as Wrapper>::Proto as ApiMessage>::TYPE_NAME, unwrap_as::<$wrapper>),)+
        ];
    };
}

board_items! {
    Track(Track),
    Arc(ArcTrack),
    Via(Via),
    Text(BoardText),
    TextBox(BoardTextBox),
    Field(Field),
    Footprint(FootprintInstance),
    Pad(Pad),
    Shape(BoardShape),
    Zone(Zone),
    Group(Group),
}

impl BoardItem {
    /// Host-assigned identifier; `None` before the host has seen the item.
    /// Fields are addressed through their footprint and never have one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Track(item) => item.id(),
            Self::Arc(item) => item.id(),
            Self::Via(item) => item.id(),
            Self::Text(item) => item.id(),
            Self::TextBox(item) => item.id(),
            Self::Field(_) => None,
            Self::Footprint(item) => item.id(),
            Self::Pad(item) => item.id(),
            Self::Shape(item) => item.id(),
            Self::Zone(item) => item.id(),
            Self::Group(item) => item.id(),
        }
    }
}

/// Decodes an item of unknown type by looking up its wire type name.
///
/// # Panics
///
/// Panics if the type is not a registered board item. The host only returns
/// types from its own schema, so an unknown type means this client is out of
/// date.
pub fn unwrap_item(payload: &Any) -> Result<BoardItem, KiCadError> {
    let type_name = envelope::type_name_of(&payload.type_url);
    let factory = ITEM_FACTORIES
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, factory)| *factory)
        .unwrap_or_else(|| panic!("unregistered board item type `{type_name}`"));

    factory(payload)
}
