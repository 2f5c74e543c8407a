//! Export descriptors
//!
//! The host turns an `ExportedFile` into a download (Blob + object URL). The
//! text is exported verbatim; printing is left to the browser.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

const PLAIN_TEXT_MIME: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    PlainText,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::PlainText => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        PLAIN_TEXT_MIME
    }
}

impl FromStr for ExportFormat {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "txt" | "text" | "plaintext" => Ok(ExportFormat::PlainText),
            other => Err(EditorError::UnknownExportFormat(other.to_string())),
        }
    }
}

/// A file ready to hand to the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ExportedFile {
    pub fn new(basename: &str, format: ExportFormat, text: &str) -> Self {
        Self {
            file_name: format!("{}.{}", basename, format.extension()),
            mime_type: format.mime_type().to_string(),
            contents: text.to_string(),
        }
    }
}
