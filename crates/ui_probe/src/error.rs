//! Error types for device and hierarchy operations

use thiserror::Error;

/// Errors raised while turning a UI dump document into a node tree
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid attribute value: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("document nested deeper than {0} elements")]
    TooDeep(usize),

    #[error("no element found")]
    NoRootElement,

    #[error("unclosed element <{0}>")]
    UnclosedElement(String),

    #[error("unexpected end tag </{0}>")]
    UnexpectedEndTag(String),

    #[error("content outside the document element")]
    OutsideRoot,
}

#[derive(Debug, Error)]
pub enum AdbError {
    #[error("ADB is not installed or not in PATH")]
    AdbNotAvailable,

    #[error("ADB command failed: {0}")]
    CommandFailed(String),

    #[error("Command timeout: {0}")]
    Timeout(String),

    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, AdbError>;
