//! Outline data types

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::slug::slugify;

/// Heading depth tracked by the outline
///
/// Only the top three markdown levels appear in the outline. Deeper headings
/// are valid markdown but intentionally left out of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    /// Level for a run of `count` leading `#` characters
    pub fn from_marker_len(count: usize) -> Option<Self> {
        match count {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Level for an `h1`..`h3` element number
    pub fn from_u8(level: u8) -> Option<Self> {
        Self::from_marker_len(level as usize)
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A single outline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    /// Heading content, trimmed, inline markdown left as-is
    pub text: String,
    /// Anchor identifier derived from `text` only
    pub slug: String,
    /// Zero-based source line
    pub line: usize,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>, line: usize) -> Self {
        let text = text.into();
        let slug = slugify(&text);
        Self { level, text, slug, line }
    }
}

/// Ordered headings of one document version, in document order
///
/// Derived state: rebuilt wholesale from the text on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    headings: Vec<Heading>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, heading: Heading) {
        self.headings.push(heading);
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Heading> {
        self.headings.iter()
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// First heading carrying `slug`
    ///
    /// Slugs are not de-duplicated, so later headings with the same text are
    /// unreachable through this lookup, same as through the anchor id.
    pub fn find(&self, slug: &str) -> Option<&Heading> {
        self.headings.iter().find(|h| h.slug == slug)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.find(slug).is_some()
    }

    /// Distinct slugs in document order
    pub fn unique_slugs(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.headings
            .iter()
            .filter(|h| seen.insert(h.slug.as_str()))
            .map(|h| h.slug.clone())
            .collect()
    }
}

impl FromIterator<Heading> for Outline {
    fn from_iter<I: IntoIterator<Item = Heading>>(iter: I) -> Self {
        Self {
            headings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_marker_len() {
        assert_eq!(HeadingLevel::from_marker_len(1), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_marker_len(3), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_marker_len(0), None);
        assert_eq!(HeadingLevel::from_marker_len(4), None);
        assert_eq!(HeadingLevel::from_u8(2).map(HeadingLevel::as_u8), Some(2));
    }

    #[test]
    fn test_heading_derives_slug_from_text() {
        let heading = Heading::new(HeadingLevel::H2, "Key Features", 4);
        assert_eq!(heading.slug, "key-features");
        assert_eq!(heading.line, 4);
    }

    #[test]
    fn test_unique_slugs_keeps_first_occurrence_order() {
        let outline: Outline = vec![
            Heading::new(HeadingLevel::H1, "Overview", 0),
            Heading::new(HeadingLevel::H2, "Details", 2),
            Heading::new(HeadingLevel::H1, "Overview", 5),
        ]
        .into_iter()
        .collect();

        assert_eq!(outline.len(), 3);
        assert_eq!(outline.unique_slugs(), vec!["overview", "details"]);
        assert_eq!(outline.find("overview").map(|h| h.line), Some(0));
        assert!(!outline.contains_slug("missing"));
    }
}
