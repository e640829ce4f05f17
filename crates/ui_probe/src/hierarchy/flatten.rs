//! Flattening a UI node tree into tap-targetable elements

use super::bounds::Bounds;
use super::node::UiNode;
use crate::config::SYSTEM_UI_PREFIX;
use crate::error::HierarchyError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Center point of an element, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// A user-facing element extracted from the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiElement {
    pub text: String,
    pub coordinates: Coordinates,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

/// Walk `root` in document order and collect the elements worth targeting.
///
/// System UI chrome is skipped (its children are still visited). A node is
/// kept when it has bounds and either a display text not seen earlier in
/// this walk, or a resource id.
pub fn flatten(root: &UiNode) -> Vec<UiElement> {
    let mut seen_text = HashSet::new();
    let mut elements = Vec::new();

    // Explicit stack; children go on reversed so they pop in document order
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if !node.resource_id.starts_with(SYSTEM_UI_PREFIX) {
            if let Some(element) = element_for(node, &mut seen_text) {
                elements.push(element);
            }
        }
        pending.extend(node.children.iter().rev());
    }

    elements
}

fn element_for(node: &UiNode, seen_text: &mut HashSet<String>) -> Option<UiElement> {
    let bounds = Bounds::parse(&node.bounds)?;
    let display_text = node.display_text();

    let fresh_text = !display_text.is_empty() && !seen_text.contains(display_text);
    let has_id = !node.resource_id.is_empty();
    if !fresh_text && !has_id {
        return None;
    }

    if !display_text.is_empty() {
        seen_text.insert(display_text.to_string());
    }

    let (x, y) = bounds.center();
    Some(UiElement {
        text: display_text.to_string(),
        coordinates: Coordinates { x, y },
        class_name: node.class_name.clone(),
        resource_id: has_id.then(|| node.resource_id.clone()),
    })
}

/// Parse a dump document and flatten it
pub fn extract_elements(xml: &str) -> Result<Vec<UiElement>, HierarchyError> {
    let root = UiNode::parse_document(xml)?;
    let elements = flatten(&root);
    debug!("Extracted {} elements from {} bytes of XML", elements.len(), xml.len());
    Ok(elements)
}

/// Render the elements of a dump document as pretty JSON.
///
/// Never fails: a document that cannot be parsed is reported as an
/// `Error parsing XML: ...` string in place of the JSON.
pub fn elements_json(xml: &str) -> String {
    let rendered = extract_elements(xml)
        .map_err(|e| e.to_string())
        .and_then(|elements| serde_json::to_string_pretty(&elements).map_err(|e| e.to_string()));

    match rendered {
        Ok(json) => json,
        Err(e) => format!("Error parsing XML: {}", e),
    }
}
