use crate::error::{RelayoutError, Result};
use crate::types::WidgetNode;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Identifier carried in the output envelope.
pub const LAYOUT_IDENTIFIER: &str = "ReGui";

/// Schema version carried in the output envelope.
pub const LAYOUT_VERSION: u32 = 1;

/// Top-level conversion result: a fixed envelope around the converted
/// top-level widgets, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub identifier: String,
    pub version: u32,
    pub data: Vec<WidgetNode>,
}

impl LayoutDocument {
    pub fn new(data: Vec<WidgetNode>) -> Self {
        Self {
            identifier: LAYOUT_IDENTIFIER.to_string(),
            version: LAYOUT_VERSION,
            data,
        }
    }
}

/// Serialize a document as pretty JSON with 4-space indentation.
///
/// Non-ASCII characters are emitted literally; key order follows the
/// field order of the model structs.
pub fn to_pretty_json(document: &LayoutDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    // serde_json always produces valid UTF-8
    String::from_utf8(buf).map_err(|e| RelayoutError::Document(e.to_string()))
}

/// Write a document to `path` as UTF-8 pretty JSON.
pub fn write_document(document: &LayoutDocument, path: &Path) -> Result<()> {
    let content = to_pretty_json(document)?;
    std::fs::write(path, content).map_err(|e| RelayoutError::write(path, e))
}
