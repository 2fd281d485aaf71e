//! Core types for the ReGui layout data model.
//!
//! This module contains the output-side structures:
//! - [`WidgetNode`] - One GUI element with its nested children
//! - [`PositionSpec`] - Placement and sizing of a widget
//! - [`ControllerNode`] - A behavior attached to a widget
//! - [`PropertyValue`] - A scalar property value (boolean or text)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered key/value property mapping. Insertion order is document order;
/// duplicate keys overwrite in place (last occurrence wins).
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// A scalar property value, decided at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
}

/// A single coordinate component. Pixel positions are integers, relative
/// positions are floats; the untagged representation keeps that distinction
/// in the emitted JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coord {
    Pixels(i64),
    Real(f64),
}

/// Placement and sizing of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSpec {
    pub use_pixels: bool,
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl PositionSpec {
    pub fn relative(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            use_pixels: false,
            x: Coord::Real(x),
            y: Coord::Real(y),
            width: Coord::Real(width),
            height: Coord::Real(height),
        }
    }

    pub fn pixels(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            use_pixels: true,
            x: Coord::Pixels(x),
            y: Coord::Pixels(y),
            width: Coord::Pixels(width),
            height: Coord::Pixels(height),
        }
    }
}

impl Default for PositionSpec {
    /// Unit square with integer components, used when neither position
    /// attribute is present on the source widget.
    fn default() -> Self {
        Self {
            use_pixels: false,
            x: Coord::Pixels(0),
            y: Coord::Pixels(0),
            width: Coord::Pixels(1),
            height: Coord::Pixels(1),
        }
    }
}

/// Identifying attributes of a widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceProperties {
    pub name: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    pub skin: String,
}

/// A behavior attached to a widget. Unlike widgets, a controller's
/// `properties` map is serialized even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerNode {
    #[serde(rename = "type")]
    pub controller_type: String,
    pub properties: PropertyMap,
}

/// One GUI element in the converted layout tree.
///
/// `instanceProperties` and `positionSize` are always present;
/// `properties`, `controllers`, and `children` are omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetNode {
    pub instance_properties: InstanceProperties,
    pub position_size: PositionSpec,
    pub is_template_contents: bool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: PropertyMap,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controllers: Vec<ControllerNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_widget() -> WidgetNode {
        WidgetNode {
            instance_properties: InstanceProperties {
                name: "Unnamed".to_string(),
                widget_type: "Unknown".to_string(),
                skin: "PanelEmpty".to_string(),
            },
            position_size: PositionSpec::default(),
            is_template_contents: false,
            properties: PropertyMap::new(),
            controllers: Vec::new(),
            children: Vec::new(),
        }
    }

    #[test]
    fn empty_collections_are_omitted_from_widgets() {
        let json = serde_json::to_string(&bare_widget()).expect("serialize widget");
        assert!(json.contains("\"instanceProperties\""));
        assert!(json.contains("\"positionSize\""));
        assert!(json.contains("\"isTemplateContents\":false"));
        assert!(!json.contains("\"properties\""));
        assert!(!json.contains("\"controllers\""));
        assert!(!json.contains("\"children\""));
    }

    #[test]
    fn controller_serializes_empty_properties() {
        let controller = ControllerNode {
            controller_type: "FadeAlpha".to_string(),
            properties: PropertyMap::new(),
        };
        let json = serde_json::to_string(&controller).expect("serialize controller");
        assert!(json.contains("\"type\":\"FadeAlpha\""));
        assert!(json.contains("\"properties\":{}"));
    }

    #[test]
    fn default_position_serializes_integer_unit_square() {
        let json = serde_json::to_string(&PositionSpec::default()).expect("serialize position");
        assert_eq!(
            json,
            "{\"usePixels\":false,\"x\":0,\"y\":0,\"width\":1,\"height\":1}"
        );
    }

    #[test]
    fn relative_position_serializes_floats() {
        let pos = PositionSpec::relative(0.0, 0.25, 1.0, 0.5);
        let json = serde_json::to_string(&pos).expect("serialize position");
        assert!(json.contains("\"usePixels\":false"));
        assert!(json.contains("\"x\":0.0"));
        assert!(json.contains("\"y\":0.25"));
        assert!(json.contains("\"height\":0.5"));
    }

    #[test]
    fn pixel_position_serializes_integers() {
        let pos = PositionSpec::pixels(10, 20, 100, 30);
        let json = serde_json::to_string(&pos).expect("serialize position");
        assert_eq!(
            json,
            "{\"usePixels\":true,\"x\":10,\"y\":20,\"width\":100,\"height\":30}"
        );
    }

    #[test]
    fn property_value_serializes_untagged() {
        let mut map = PropertyMap::new();
        map.insert("Visible".to_string(), PropertyValue::Bool(true));
        map.insert(
            "Caption".to_string(),
            PropertyValue::Text("Hello".to_string()),
        );
        let json = serde_json::to_string(&map).expect("serialize map");
        assert_eq!(json, "{\"Visible\":true,\"Caption\":\"Hello\"}");
    }

    #[test]
    fn property_map_preserves_insertion_order_on_overwrite() {
        let mut map = PropertyMap::new();
        map.insert("A".to_string(), PropertyValue::Text("1".to_string()));
        map.insert("B".to_string(), PropertyValue::Text("2".to_string()));
        map.insert("A".to_string(), PropertyValue::Text("3".to_string()));
        let json = serde_json::to_string(&map).expect("serialize map");
        assert_eq!(json, "{\"A\":\"3\",\"B\":\"2\"}");
    }

    #[test]
    fn widget_round_trips_through_json() {
        let mut widget = bare_widget();
        widget
            .properties
            .insert("Visible".to_string(), PropertyValue::Bool(true));
        widget.children.push(bare_widget());

        let json = serde_json::to_string(&widget).expect("serialize widget");
        let back: WidgetNode = serde_json::from_str(&json).expect("deserialize widget");
        assert_eq!(back, widget);
    }
}
