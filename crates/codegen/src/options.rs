//! Generation options shared across dialects.
//!
//! The declarations keep the option ids the wider tooling already uses
//! (`indentCount`, `requestTimeout`, ...), so callers configure every
//! target the same way. Dialects publish one of the schema tables below;
//! the typed [`ConvertOptions`] view is what the assembler consumes.

use scribe_domain::options::{OptionDefault, OptionKind, OptionSpec, SanitizedOptions};

/// Wrap the snippet in the target's program shell.
pub const INCLUDE_BOILERPLATE: OptionSpec = OptionSpec {
    id: "includeBoilerplate",
    name: "Include boilerplate",
    kind: OptionKind::Boolean,
    default: OptionDefault::Boolean(false),
    available: &[],
    description: "Include class definition and import statements in the snippet",
};

/// Number of indentation characters per level.
pub const INDENT_COUNT: OptionSpec = OptionSpec {
    id: "indentCount",
    name: "Indent count",
    kind: OptionKind::PositiveInteger,
    default: OptionDefault::Integer(2),
    available: &[],
    description: "Number of indentation characters to add per code level",
};

/// Character used for indentation.
pub const INDENT_TYPE: OptionSpec = OptionSpec {
    id: "indentType",
    name: "Indent type",
    kind: OptionKind::Enum,
    default: OptionDefault::Text("space"),
    available: &["tab", "space"],
    description: "Character used for indentation",
};

/// Request timeout in milliseconds; zero waits indefinitely.
pub const REQUEST_TIMEOUT: OptionSpec = OptionSpec {
    id: "requestTimeout",
    name: "Request timeout",
    kind: OptionKind::PositiveInteger,
    default: OptionDefault::Integer(0),
    available: &[],
    description: "How long the request should wait for a response before timing out \
                  (milliseconds); 0 waits indefinitely",
};

/// Whether generated clients follow redirects automatically.
pub const FOLLOW_REDIRECT: OptionSpec = OptionSpec {
    id: "followRedirect",
    name: "Follow redirect",
    kind: OptionKind::Boolean,
    default: OptionDefault::Boolean(true),
    available: &[],
    description: "Automatically follow HTTP redirects",
};

/// Trim whitespace around header and body field values.
pub const TRIM_REQUEST_BODY: OptionSpec = OptionSpec {
    id: "trimRequestBody",
    name: "Body trim",
    kind: OptionKind::Boolean,
    default: OptionDefault::Boolean(true),
    available: &[],
    description: "Trim request body fields",
};

/// Option schema for targets with a program shell.
pub const WITH_BOILERPLATE: &[OptionSpec] = &[
    INCLUDE_BOILERPLATE,
    INDENT_COUNT,
    INDENT_TYPE,
    REQUEST_TIMEOUT,
    FOLLOW_REDIRECT,
    TRIM_REQUEST_BODY,
];

/// Option schema for script targets without a shell.
pub const SCRIPT_ONLY: &[OptionSpec] = &[
    INDENT_COUNT,
    INDENT_TYPE,
    REQUEST_TIMEOUT,
    FOLLOW_REDIRECT,
    TRIM_REQUEST_BODY,
];

/// Request timeout directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Wait forever for a response.
    Infinite,
    /// Bail out after this many milliseconds.
    Millis(u64),
}

impl Timeout {
    /// Builds a timeout from the sanitized `requestTimeout` value.
    ///
    /// Zero means wait indefinitely, never a zero-duration timeout.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        if ms == 0 { Self::Infinite } else { Self::Millis(ms) }
    }

    /// Whole seconds, rounding up so sub-second timeouts stay non-zero.
    ///
    /// `None` for [`Timeout::Infinite`].
    #[must_use]
    pub const fn as_secs(self) -> Option<u64> {
        match self {
            Self::Infinite => None,
            Self::Millis(ms) => Some((ms + 999) / 1000),
        }
    }
}

/// Typed view over a sanitized option mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Wrap the snippet in the target's program shell.
    pub include_boilerplate: bool,
    /// One level of indentation.
    pub indent: String,
    /// Request timeout directive.
    pub request_timeout: Timeout,
    /// Whether the generated client follows redirects automatically.
    pub follow_redirect: bool,
    /// Trim whitespace around header and body field values.
    pub trim_body: bool,
}

impl ConvertOptions {
    /// Builds the typed view from a sanitized option mapping.
    ///
    /// Ids absent from the mapping (schemas differ between targets) fall
    /// back to the shared defaults.
    #[must_use]
    pub fn from_sanitized(options: &SanitizedOptions) -> Self {
        let count = options.integer(INDENT_COUNT.id).unwrap_or(2);
        let unit = match options.text(INDENT_TYPE.id) {
            Some("tab") => "\t",
            _ => " ",
        };
        Self {
            include_boilerplate: options.boolean(INCLUDE_BOILERPLATE.id).unwrap_or(false),
            indent: unit.repeat(usize::try_from(count).unwrap_or(2)),
            request_timeout: Timeout::from_millis(options.integer(REQUEST_TIMEOUT.id).unwrap_or(0)),
            follow_redirect: options.boolean(FOLLOW_REDIRECT.id).unwrap_or(true),
            trim_body: options.boolean(TRIM_REQUEST_BODY.id).unwrap_or(true),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_boilerplate: false,
            indent: "  ".to_string(),
            request_timeout: Timeout::Infinite,
            follow_redirect: true,
            trim_body: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scribe_domain::options::{RawOptions, sanitize};
    use serde_json::json;

    #[test]
    fn test_timeout_zero_is_infinite() {
        assert_eq!(Timeout::from_millis(0), Timeout::Infinite);
        assert_eq!(Timeout::from_millis(0).as_secs(), None);
    }

    #[test]
    fn test_timeout_seconds_round_up() {
        assert_eq!(Timeout::from_millis(3000).as_secs(), Some(3));
        assert_eq!(Timeout::from_millis(500).as_secs(), Some(1));
        assert_eq!(Timeout::from_millis(1001).as_secs(), Some(2));
    }

    #[test]
    fn test_defaults_from_empty_options() {
        let sanitized = sanitize(&RawOptions::new(), WITH_BOILERPLATE);
        let options = ConvertOptions::from_sanitized(&sanitized);
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_tab_indent() {
        let mut raw = RawOptions::new();
        raw.insert("indentType".to_string(), json!("tab"));
        raw.insert("indentCount".to_string(), json!(1));

        let options = ConvertOptions::from_sanitized(&sanitize(&raw, WITH_BOILERPLATE));
        assert_eq!(options.indent, "\t");
    }

    #[test]
    fn test_script_schema_has_no_boilerplate_option() {
        let mut raw = RawOptions::new();
        raw.insert("includeBoilerplate".to_string(), json!(true));

        let sanitized = sanitize(&raw, SCRIPT_ONLY);
        assert_eq!(sanitized.get("includeBoilerplate"), None);

        let options = ConvertOptions::from_sanitized(&sanitized);
        assert!(!options.include_boilerplate);
    }
}
