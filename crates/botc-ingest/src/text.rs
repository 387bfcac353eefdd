//! Text normalization shared by every tool that reads the sheets.
//!
//! Two entry points:
//!
//! - [`sanitize_header`]: byte-order marks, control characters, surrounding
//!   whitespace
//! - [`clean_text`]: the same, plus CRLF/CR -> LF before control removal
//!
//! Both are pure and idempotent.

/// Unicode byte-order mark.
pub const BOM: char = '\u{feff}';

/// ASCII control characters other than tab, line feed and carriage return.
pub fn is_control_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{00}'..='\u{08}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}'
    )
}

pub fn contains_control_chars(value: &str) -> bool {
    value.chars().any(is_control_char)
}

pub fn count_control_chars(value: &str) -> usize {
    value.chars().filter(|ch| is_control_char(*ch)).count()
}

pub fn strip_control_chars(value: &str) -> String {
    value.chars().filter(|ch| !is_control_char(*ch)).collect()
}

/// Canonical form of a header cell.
pub fn sanitize_header(raw: &str) -> String {
    let without_bom = raw.trim_start_matches(BOM);
    let stripped = strip_control_chars(without_bom);
    trim_canonical(&stripped).to_string()
}

/// Canonical form of a data cell.
pub fn clean_text(raw: &str) -> String {
    let without_bom = raw.trim_start_matches(BOM);
    let unified = without_bom.replace("\r\n", "\n").replace('\r', "\n");
    let stripped = strip_control_chars(&unified);
    trim_canonical(&stripped).to_string()
}

// A BOM exposed by trimming is dropped as well, so the output is a fixpoint.
fn trim_canonical(value: &str) -> &str {
    value
        .trim_start_matches(|ch: char| ch.is_whitespace() || ch == BOM)
        .trim_end()
}

/// Parses a sheet boolean.
///
/// `true`/`1`/`yes`/`y` and `false`/`0`/`no`/`n` (any case). Empty and
/// unrecognized values are `None`; callers decide whether a non-empty
/// `None` is an error.
pub fn parse_optional_bool(raw: &str) -> Option<bool> {
    match clean_text(raw).to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}
