//! Outline extraction
//!
//! Single pass over the lines of a markdown document. Headings inside fenced
//! code blocks are inert. This is a plain-text scan, not a CommonMark parser:
//!
//! - any line whose trimmed form starts with three backticks toggles the fence,
//!   regardless of fence length, info string or indentation
//! - `~~~` fences are not recognized
//! - an unterminated fence swallows the rest of the document
//! - a heading is `^(#{1,3})\s+(.+)$` on the raw (untrimmed) line, with `\s`
//!   and `.` taken in their browser (JavaScript) meaning

use once_cell::sync::Lazy;
use regex::Regex;

use super::heading::{Heading, HeadingLevel, Outline};
use super::whitespace::{self, NON_TERMINATOR_CLASS, WHITESPACE_CLASS};

const FENCE_MARKER: &str = "```";

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^(#{{1,3}}){}+({}+)$", WHITESPACE_CLASS, NON_TERMINATOR_CLASS);
    Regex::new(&pattern).expect("valid heading regex")
});

/// Fenced code block state while scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FenceState {
    inside: bool,
}

impl FenceState {
    /// Feed one line; returns true when the line is code or a fence delimiter
    fn consume(&mut self, line: &str) -> bool {
        if whitespace::trim(line).starts_with(FENCE_MARKER) {
            self.inside = !self.inside;
            return true;
        }
        self.inside
    }
}

/// Build the outline of `text`
///
/// Total over any input; empty text gives an empty outline.
pub fn extract_outline(text: &str) -> Outline {
    let mut fence = FenceState::default();
    let mut outline = Outline::new();

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if fence.consume(line) {
            continue;
        }

        if let Some(heading) = match_heading(line, index) {
            outline.push(heading);
        }
    }

    if fence.inside {
        log::debug!("unterminated code fence, {} headings before it", outline.len());
    }

    outline
}

fn match_heading(line: &str, index: usize) -> Option<Heading> {
    let captures = HEADING_LINE.captures(line)?;
    let level = HeadingLevel::from_marker_len(captures.get(1)?.as_str().len())?;
    let text = whitespace::trim(captures.get(2)?.as_str());
    Some(Heading::new(level, text, index))
}
