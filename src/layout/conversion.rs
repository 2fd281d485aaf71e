//! Mapping from the raw element tree into the ReGui data model.

use crate::error::{RelayoutError, Result};
use crate::types::{
    ControllerNode, InstanceProperties, PositionSpec, PropertyMap, PropertyValue, WidgetNode,
};

use super::escape::decode_escapes;
use super::markup::Element;

const TAG_WIDGET: &str = "Widget";
const TAG_CONTROLLER: &str = "Controller";
const TAG_PROPERTY: &str = "Property";

const DEFAULT_NAME: &str = "Unnamed";
const DEFAULT_TYPE: &str = "Unknown";
const DEFAULT_SKIN: &str = "PanelEmpty";

/// Coerce a string into a boolean property value when it spells `true` or
/// `false` (case-insensitive); anything else stays text. Total over all
/// inputs.
pub fn coerce_bool(value: &str) -> PropertyValue {
    if value.eq_ignore_ascii_case("true") {
        PropertyValue::Bool(true)
    } else if value.eq_ignore_ascii_case("false") {
        PropertyValue::Bool(false)
    } else {
        PropertyValue::Text(value.to_string())
    }
}

/// Parse a widget's position attributes.
///
/// `position_real` (relative floats) takes precedence over `position`
/// (pixel integers); with neither present the unit-square default
/// applies. An attribute that is present but empty counts as absent.
pub fn parse_position(element: &Element) -> Result<PositionSpec> {
    if let Some(raw) = present(element.attr("position_real")) {
        let [x, y, width, height] = split_four::<f64>(raw)
            .map_err(|detail| RelayoutError::position(widget_label(element), detail))?;
        return Ok(PositionSpec::relative(x, y, width, height));
    }
    if let Some(raw) = present(element.attr("position")) {
        let [x, y, width, height] = split_four::<i64>(raw)
            .map_err(|detail| RelayoutError::position(widget_label(element), detail))?;
        return Ok(PositionSpec::pixels(x, y, width, height));
    }
    Ok(PositionSpec::default())
}

/// Collect the direct `Property` children of an element into an ordered
/// map. Values are escape-decoded and boolean-coerced; children without a
/// `value` attribute are skipped, as are children without a `key`.
pub fn parse_properties(element: &Element) -> PropertyMap {
    let mut properties = PropertyMap::new();
    for child in &element.children {
        if child.name != TAG_PROPERTY {
            continue;
        }
        let (Some(key), Some(value)) = (child.attr("key"), child.attr("value")) else {
            continue;
        };
        let decoded = decode_escapes(value);
        properties.insert(key.to_string(), coerce_bool(&decoded));
    }
    properties
}

/// Recursively convert a `Widget` element. Returns `None` for any other
/// element kind.
pub fn parse_widget(element: &Element) -> Result<Option<WidgetNode>> {
    if element.name != TAG_WIDGET {
        return Ok(None);
    }

    let instance_properties = InstanceProperties {
        name: element.attr("name").unwrap_or(DEFAULT_NAME).to_string(),
        widget_type: element.attr("type").unwrap_or(DEFAULT_TYPE).to_string(),
        skin: element.attr("skin").unwrap_or(DEFAULT_SKIN).to_string(),
    };
    let position_size = parse_position(element)?;
    let properties = parse_properties(element);

    let mut controllers = Vec::new();
    let mut children = Vec::new();
    for child in &element.children {
        match child.name.as_str() {
            TAG_WIDGET => {
                if let Some(widget) = parse_widget(child)? {
                    children.push(widget);
                }
            }
            TAG_CONTROLLER => controllers.push(ControllerNode {
                controller_type: child.attr("type").unwrap_or(DEFAULT_TYPE).to_string(),
                properties: parse_properties(child),
            }),
            _ => {}
        }
    }

    Ok(Some(WidgetNode {
        instance_properties,
        position_size,
        is_template_contents: false,
        properties,
        controllers,
        children,
    }))
}

/// Convert the `Widget` elements found as direct children of the document
/// root, preserving document order.
pub fn convert_root(root: &Element) -> Result<Vec<WidgetNode>> {
    let mut data = Vec::new();
    for child in &root.children {
        if let Some(widget) = parse_widget(child)? {
            data.push(widget);
        }
    }
    Ok(data)
}

fn present(attr: Option<&str>) -> Option<&str> {
    attr.filter(|value| !value.is_empty())
}

fn widget_label(element: &Element) -> &str {
    element.attr("name").unwrap_or(DEFAULT_NAME)
}

fn split_four<T: std::str::FromStr + Copy>(raw: &str) -> std::result::Result<[T; 4], String> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(format!("expected 4 values, found {}", tokens.len()));
    }
    let mut parsed = Vec::with_capacity(4);
    for token in &tokens {
        let value = token
            .parse::<T>()
            .map_err(|_| format!("invalid numeric value '{token}'"))?;
        parsed.push(value);
    }
    Ok([parsed[0], parsed[1], parsed[2], parsed[3]])
}
