//! ReGui Layout Converter Library
//!
//! A library for converting legacy MyGUI-style XML layout files into the
//! ReGui JSON layout format. The whole conversion is a single synchronous
//! pass: parse the markup tree, map each `Widget` (with its nested
//! `Property` and `Controller` elements) into the output model, and wrap
//! the result in a fixed envelope.
//!
//! # Module Overview
//!
//! - [`layout`] - Markup parsing and the conversion pipeline
//! - [`types`] - Output data model (widgets, positions, properties)
//! - [`output`] - Output envelope and JSON serialization
//! - [`config`] - Configuration file support
//! - [`error`] - Error taxonomy
//!
//! # Example
//!
//! ```
//! use relayout_lib::{convert_layout_str, to_pretty_json};
//!
//! # fn example() -> relayout_lib::Result<()> {
//! let doc = convert_layout_str(
//!     r#"<MyGUI><Widget name="Root" type="Window" position="0 0 640 480"/></MyGUI>"#,
//! )?;
//! let json = to_pretty_json(&doc)?;
//! assert!(json.contains("\"identifier\": \"ReGui\""));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod types;

pub use config::Config;
pub use error::{ErrorCategory, ErrorPayload, RelayoutError, Result};
pub use layout::{
    coerce_bool, convert_layout_file, convert_layout_str, decode_escapes, parse_position,
    parse_properties, parse_widget, Element,
};
pub use output::{
    to_pretty_json, write_document, LayoutDocument, LAYOUT_IDENTIFIER, LAYOUT_VERSION,
};
pub use types::{
    ControllerNode, Coord, InstanceProperties, PositionSpec, PropertyMap, PropertyValue,
    WidgetNode,
};
