//! Raw XML element tree for layout markup.
//!
//! Parses the whole document into a generic [`Element`] tree before any
//! widget-level interpretation happens. Attribute values are unescaped
//! per standard XML character entities; element order is preserved.

use crate::error::{RelayoutError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// A single element node: tag name, attributes in source order, children
/// in document order. Text content is not retained; the layout format is
/// attribute-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name. Returns the first occurrence.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Parse a complete XML document into its root element.
    pub fn parse(content: &str) -> Result<Element> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);

        let mut root: Option<Element> = None;
        let mut stack: Vec<Element> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let mut element = element_from_tag(e.name().as_ref())?;
                    read_attributes(&e, &mut element)?;
                    stack.push(element);
                }
                Ok(Event::Empty(e)) => {
                    let mut element = element_from_tag(e.name().as_ref())?;
                    read_attributes(&e, &mut element)?;
                    attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack.pop().ok_or_else(|| {
                        RelayoutError::Document("unexpected closing tag".to_string())
                    })?;
                    attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(RelayoutError::Markup(e)),
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(RelayoutError::Document(
                "unexpected end of document inside an open element".to_string(),
            ));
        }
        root.ok_or_else(|| RelayoutError::Document("document has no root element".to_string()))
    }
}

fn element_from_tag(raw: &[u8]) -> Result<Element> {
    let name = std::str::from_utf8(raw)
        .map_err(|e| RelayoutError::Document(format!("invalid tag name: {e}")))?;
    Ok(Element::new(name.to_string()))
}

fn read_attributes(tag: &quick_xml::events::BytesStart, element: &mut Element) -> Result<()> {
    for attr in tag.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| RelayoutError::Document(format!("invalid attribute name: {e}")))?
            .to_string();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(())
}

fn attach(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(RelayoutError::Document(
                    "document has more than one root element".to_string(),
                ));
            }
            *root = Some(element);
        }
    }
    Ok(())
}
