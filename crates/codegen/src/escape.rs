//! String-literal escaping for generated code.
//!
//! Escaping is total: every character has a defined encoding, so no
//! request content can break out of a generated literal.

use std::fmt::Write;

/// Escapes `raw` for a double-quoted string literal.
///
/// Backslash, double quote and the common whitespace characters get their
/// named escapes; any other control character is emitted as `\uXXXX`,
/// which both C# and Ruby double-quoted literals accept.
#[must_use]
pub fn double_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Escapes `raw` for a Ruby double-quoted literal.
///
/// Same rules as [`double_quoted`], plus `#{` is broken up so request
/// content cannot trigger string interpolation.
#[must_use]
pub fn ruby_double_quoted(raw: &str) -> String {
    double_quoted(raw).replace("#{", "\\#{")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quotes_and_backslashes() {
        assert_eq!(double_quoted(r#"say "hi"\now"#), r#"say \"hi\"\\now"#);
    }

    #[test]
    fn test_whitespace_escapes() {
        assert_eq!(double_quoted("a\nb\tc\r"), "a\\nb\\tc\\r");
    }

    #[test]
    fn test_control_characters_are_encoded() {
        assert_eq!(double_quoted("a\u{7}b"), "a\\u0007b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(double_quoted("plain text"), "plain text");
    }

    #[test]
    fn test_ruby_interpolation_guard() {
        assert_eq!(ruby_double_quoted("#{`rm -rf`}"), "\\#{`rm -rf`}");
        assert_eq!(ruby_double_quoted("anchor#tag"), "anchor#tag");
    }
}
