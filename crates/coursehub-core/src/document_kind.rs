//! Supported learning-material document kinds.
//!
//! The upload allow-list is a closed set: every accepted file maps to exactly
//! one [`DocumentKind`], which carries its canonical MIME type and the
//! extensions the remote store is told to accept.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    /// Legacy Word (`.doc`)
    Doc,
    /// Office Open XML Word (`.docx`)
    Docx,
    /// Legacy PowerPoint (`.ppt`)
    Ppt,
    /// Office Open XML PowerPoint (`.pptx`)
    Pptx,
    Text,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Pdf,
        DocumentKind::Doc,
        DocumentKind::Docx,
        DocumentKind::Ppt,
        DocumentKind::Pptx,
        DocumentKind::Text,
    ];

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Doc => "application/msword",
            DocumentKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentKind::Ppt => "application/vnd.ms-powerpoint",
            DocumentKind::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            DocumentKind::Text => "text/plain",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            DocumentKind::Pdf => &["pdf"],
            DocumentKind::Doc => &["doc"],
            DocumentKind::Docx => &["docx"],
            DocumentKind::Ppt => &["ppt"],
            DocumentKind::Pptx => &["pptx"],
            DocumentKind::Text => &["txt"],
        }
    }

    /// Resolve a declared MIME type. Parameters (`; charset=...`) and case are ignored.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let normalized = normalize_mime_type(content_type).to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime_type() == normalized)
    }

    /// Every extension across the allow-list, in declaration order.
    pub fn all_extensions() -> Vec<&'static str> {
        Self::ALL
            .iter()
            .flat_map(|kind| kind.extensions().iter().copied())
            .collect()
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Doc => "doc",
            DocumentKind::Docx => "docx",
            DocumentKind::Ppt => "ppt",
            DocumentKind::Pptx => "pptx",
            DocumentKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Strip MIME parameters (e.g. "text/plain; charset=utf-8" -> "text/plain").
pub fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}
