//! Heading slugs
//!
//! One normalization shared by the outline (link targets) and the renderer
//! (anchor ids). Both sides must call [`slugify`]; there is no other channel
//! keeping them in sync.
//!
//! Steps, in order:
//! 1. lowercase
//! 2. trim surrounding whitespace
//! 3. each whitespace run becomes `-`
//! 4. each `&` becomes `-and-`
//! 5. drop everything except ASCII word characters, Devanagari (U+0900..=U+097F) and `-`
//! 6. collapse hyphen runs
//!
//! Leading and trailing hyphens are kept. "Whitespace" is the browser's
//! notion of it, so the renderer and the outline agree on every input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::heading::HeadingLevel;
use super::whitespace::{self, WHITESPACE_CLASS};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{}+", WHITESPACE_CLASS)).expect("valid whitespace regex"));

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\x{0900}-\x{097F}\-]+").expect("valid disallowed-char regex"));

static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("valid hyphen regex"));

/// Map heading text to its anchor identifier
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(whitespace::trim(&lowered), "-");
    let expanded = hyphenated.replace('&', "-and-");
    let kept = DISALLOWED.replace_all(&expanded, "");
    HYPHEN_RUN.replace_all(&kept, "-").into_owned()
}

/// Anchor id the renderer stamps on a rendered heading element
///
/// `level` is the element number (`h1` → 1). Only `h1`..`h3` get an id, the
/// same levels the outline tracks.
pub fn heading_anchor_id(level: u8, text_content: &str) -> Option<String> {
    HeadingLevel::from_u8(level).map(|_| slugify(text_content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slugify("Key Features"), "key-features");
        assert_eq!(slugify("Code Example"), "code-example");
    }

    #[test]
    fn test_ampersand_expands() {
        assert_eq!(slugify("Tables & Charts!"), "tables-and-charts");
        assert_eq!(slugify("R&D"), "r-and-d");
    }

    #[test]
    fn test_whitespace_trimmed_and_collapsed() {
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("tab\tand\nnewline"), "tab-and-newline");
    }

    #[test]
    fn test_browser_whitespace_rules() {
        assert_eq!(slugify("a\u{FEFF}b"), "a-b");
        assert_eq!(slugify("\u{FEFF}Title\u{FEFF}"), "title");
        assert_eq!(slugify("a\u{85}b"), "ab");
        assert_eq!(slugify("\u{85}Title"), "title");
        assert_eq!(slugify("a\u{3000}b\u{A0}c"), "a-b-c");
    }

    #[test]
    fn test_punctuation_removed() {
        assert_eq!(slugify("API: Authentication (v2)?"), "api-authentication-v2");
        assert_eq!(slugify("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_devanagari_preserved() {
        assert_eq!(slugify("नमस्ते दुनिया"), "नमस्ते-दुनिया");
        assert_eq!(slugify("Hello नमस्ते"), "hello-नमस्ते");
    }

    #[test]
    fn test_other_scripts_stripped() {
        assert_eq!(slugify("Привет World"), "-world");
        assert_eq!(slugify("Café"), "caf");
        assert_eq!(slugify("Welcome to ProMark Viewer 🚀"), "welcome-to-promark-viewer-");
    }

    #[test]
    fn test_edge_hyphens_kept() {
        assert_eq!(slugify("-Title-"), "-title-");
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!?"), "");
    }

    #[test]
    fn test_deterministic() {
        for text in ["Key Features", "Tables & Charts!", "नमस्ते", "", "-x-"] {
            assert_eq!(slugify(text), slugify(text));
        }
    }

    #[test]
    fn test_output_alphabet() {
        let samples = [
            "Tables & Charts!",
            "  ---Weird---  Input &&& ",
            "Mixed: Ünïcödé & नमस्ते 123",
            "UPPER lower_Under",
            "a\u{00A0}b",
        ];
        for text in samples {
            let slug = slugify(text);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || c == '_'
                    || c == '-'
                    || ('\u{0900}'..='\u{097F}').contains(&c)),
                "unexpected character in {:?}",
                slug
            );
            assert!(!slug.contains("--"), "hyphen run in {:?}", slug);
        }
    }

    #[test]
    fn test_heading_anchor_id_levels() {
        assert_eq!(heading_anchor_id(1, "Key Features"), Some("key-features".to_string()));
        assert_eq!(heading_anchor_id(3, "Tables"), Some("tables".to_string()));
        assert_eq!(heading_anchor_id(4, "Deep"), None);
        assert_eq!(heading_anchor_id(0, "Zero"), None);
    }
}
