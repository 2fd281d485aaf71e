//! Layout markup parsing and conversion.
//!
//! This module provides:
//! - [`Element`] - Raw XML element tree
//! - [`convert_layout_str`] / [`convert_layout_file`] - Conversion drivers
//! - Conversion building blocks ([`coerce_bool`], [`parse_position`],
//!   [`parse_properties`], [`parse_widget`])

pub mod conversion;
pub mod escape;
pub mod markup;


pub use conversion::{coerce_bool, parse_position, parse_properties, parse_widget};
pub use escape::decode_escapes;
pub use markup::Element;

use crate::error::{RelayoutError, Result};
use crate::output::LayoutDocument;
use std::path::Path;

/// Convert layout markup text into a ReGui document.
///
/// Parses the document tree, converts the `Widget` elements that are
/// direct children of the root, and wraps them in the output envelope.
pub fn convert_layout_str(content: &str) -> Result<LayoutDocument> {
    let root = Element::parse(content)?;
    let data = conversion::convert_root(&root)?;
    Ok(LayoutDocument::new(data))
}

/// Read a layout file and convert it into a ReGui document.
pub fn convert_layout_file(path: &Path) -> Result<LayoutDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| RelayoutError::read(path, e))?;
    convert_layout_str(&content)
}
