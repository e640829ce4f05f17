//! UI dump document parsing into an owned node tree

use crate::error::HierarchyError;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Deepest element nesting accepted in a dump document
pub const MAX_DEPTH: usize = 1000;

/// Attribute value normalization: literal line breaks and tabs become
/// spaces, character references such as `&#10;` survive unescaping.
fn attribute_value(raw: &[u8]) -> Result<String, HierarchyError> {
    let raw = String::from_utf8_lossy(raw);
    let normalized = raw
        .replace("\r\n", " ")
        .replace(|c: char| matches!(c, '\t' | '\n' | '\r'), " ");
    Ok(unescape(&normalized)?.into_owned())
}

/// One element of a `uiautomator dump` document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiNode {
    pub class_name: String,
    pub text: String,
    pub content_desc: String,
    pub resource_id: String,
    pub bounds: String,
    pub children: Vec<UiNode>,
}

impl UiNode {
    /// Text shown to the user: `text`, falling back to `content-desc`
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.content_desc
        } else {
            &self.text
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, HierarchyError> {
        let mut node = UiNode::default();
        for attr in start.attributes() {
            let attr = attr?;
            let slot = match attr.key.as_ref() {
                b"class" => &mut node.class_name,
                b"text" => &mut node.text,
                b"content-desc" => &mut node.content_desc,
                b"resource-id" => &mut node.resource_id,
                b"bounds" => &mut node.bounds,
                _ => continue,
            };
            *slot = attribute_value(&attr.value)?;
        }
        Ok(node)
    }

    /// Parse a whole dump document. Every element becomes a node, whatever
    /// its tag name, so the `<hierarchy>` wrapper is the returned root.
    pub fn parse_document(xml: &str) -> Result<Self, HierarchyError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        // Open elements with their tag names, innermost last
        let mut stack: Vec<(String, UiNode)> = Vec::new();
        let mut root: Option<UiNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if root.is_some() {
                        return Err(HierarchyError::OutsideRoot);
                    }
                    if stack.len() >= MAX_DEPTH {
                        return Err(HierarchyError::TooDeep(MAX_DEPTH));
                    }
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    stack.push((name, UiNode::from_start(&start)?));
                }
                Event::Empty(start) => {
                    if root.is_some() {
                        return Err(HierarchyError::OutsideRoot);
                    }
                    if stack.len() >= MAX_DEPTH {
                        return Err(HierarchyError::TooDeep(MAX_DEPTH));
                    }
                    let node = UiNode::from_start(&start)?;
                    match stack.last_mut() {
                        Some((_, parent)) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
                Event::End(end) => {
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    let (open, node) = stack
                        .pop()
                        .ok_or_else(|| HierarchyError::UnexpectedEndTag(name.clone()))?;
                    if open != name {
                        return Err(HierarchyError::UnexpectedEndTag(name));
                    }
                    match stack.last_mut() {
                        Some((_, parent)) => parent.children.push(node),
                        None => root = Some(node),
                    }
                }
                Event::Text(_) | Event::CData(_) => {
                    if stack.is_empty() {
                        return Err(HierarchyError::OutsideRoot);
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some((name, _)) = stack.pop() {
            return Err(HierarchyError::UnclosedElement(name));
        }
        root.ok_or(HierarchyError::NoRootElement)
    }
}
