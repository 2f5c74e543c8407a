//! Editor configuration
//!
//! Built either from a JavaScript object handed to the `MarkdownEditor`
//! constructor or from YAML text. Every field has a default, so `{}` and an
//! empty YAML document are both valid.

use serde::{Deserialize, Serialize};

use crate::constants::{EXPORT_BASENAME, STORAGE_KEY};
use crate::error::{EditorError, Result};
use crate::navigation::ViewportBand;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Key under which the document text is persisted
    pub storage_key: String,
    /// Band used by the active-heading tracker
    pub viewport: ViewportBand,
    /// File name stem for exports
    pub export_basename: String,
    /// Open the welcome document when nothing has been saved
    pub welcome_document: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            viewport: ViewportBand::default(),
            export_basename: EXPORT_BASENAME.to_string(),
            welcome_document: true,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a YAML configuration
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: EditorConfig = if source.trim().is_empty() {
            EditorConfig::default()
        } else {
            serde_yaml::from_str(source)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(EditorError::InvalidConfig("storage key must not be empty".to_string()));
        }
        if self.export_basename.trim().is_empty() {
            return Err(EditorError::InvalidConfig("export basename must not be empty".to_string()));
        }
        self.viewport.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.storage_key, "promark-content");
        assert_eq!(config.export_basename, "document");
        assert!(config.welcome_document);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        assert_eq!(EditorConfig::from_yaml("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = EditorConfig::from_yaml("storageKey: notes\nviewport:\n  topInset: 0.1\n").unwrap();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.viewport.top_inset, 0.1);
        assert_eq!(config.viewport.bottom_inset, 0.6);
        assert_eq!(config.export_basename, "document");
    }

    #[test]
    fn test_malformed_yaml() {
        let err = EditorConfig::from_yaml("storageKey: [unclosed").unwrap_err();
        assert!(matches!(err, EditorError::Config(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = EditorConfig::from_yaml("storageKey: '  '").unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig(_)));

        let err = EditorConfig::from_yaml("viewport:\n  topInset: 0.5\n  bottomInset: 0.5\n").unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig(_)));
    }
}
