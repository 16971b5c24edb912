//! Content-Type lookup by file extension.
//!
//! The widget only ships HTML, CSS, JavaScript, JSON and an icon; everything
//! else is served as plain text.

use std::path::Path;

/// Content types the static responder can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Css,
    JavaScript,
    Json,
    Icon,
    PlainText,
}

impl ContentType {
    /// Look up by extension (without the dot). Matching is case-sensitive.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("html") => Self::Html,
            Some("css") => Self::Css,
            Some("js") => Self::JavaScript,
            Some("json") => Self::Json,
            Some("ico") => Self::Icon,
            _ => Self::PlainText,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_extension(path.extension().and_then(|ext| ext.to_str()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Css => "text/css",
            Self::JavaScript => "application/javascript",
            Self::Json => "application/json",
            Self::Icon => "image/x-icon",
            Self::PlainText => "text/plain",
        }
    }
}
