//! Whitespace and line-terminator classes used by the outline
//!
//! The editor UI computes anchor ids in the browser, so the character classes
//! follow JavaScript's `\s`, `String.prototype.trim` and `.` rather than Rust's
//! Unicode `White_Space` property. The two differ on U+0085 (whitespace in
//! Rust only) and U+FEFF (whitespace in JavaScript only).

/// Regex character class equivalent to JavaScript's `\s`
pub(crate) const WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Regex character class equivalent to JavaScript's `.` without the `s` flag
pub(crate) const NON_TERMINATOR_CLASS: &str = r"[^\n\r\x{2028}\x{2029}]";

pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `s` without leading and trailing whitespace
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}
