//! UI hierarchy module
//!
//! This module provides:
//! - `bounds`: `[x1,y1][x2,y2]` rectangle parsing
//! - `node`: dump document parsing into a node tree
//! - `flatten`: extraction of de-duplicated, tap-targetable elements

mod bounds;
mod flatten;
mod node;

pub use bounds::Bounds;
pub use flatten::{elements_json, extract_elements, flatten, Coordinates, UiElement};
pub use node::UiNode;
