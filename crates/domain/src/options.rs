//! Declarative generation options and their sanitization.
//!
//! Each generator publishes a schema of the options it understands. Caller
//! input arrives as an untyped JSON mapping and is sanitized against that
//! schema: schema-valid values are kept, everything else falls back to the
//! declared default, and unknown keys are dropped. Sanitization is total;
//! it never fails.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Value type accepted by an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` or `false`.
    Boolean,
    /// An integer >= 0.
    PositiveInteger,
    /// One of a fixed set of strings.
    Enum,
    /// Any string.
    String,
}

/// A concrete, schema-valid option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Boolean value.
    Boolean(bool),
    /// Non-negative integer value.
    Integer(u64),
    /// String or enum-member value.
    Text(String),
}

impl OptionValue {
    /// Returns the boolean value, if this is one.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Default value carried by an option declaration.
///
/// A separate type from [`OptionValue`] so schemas can live in `const`
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(u64),
    /// Text default.
    Text(&'static str),
}

impl From<OptionDefault> for OptionValue {
    fn from(default: OptionDefault) -> Self {
        match default {
            OptionDefault::Boolean(b) => Self::Boolean(b),
            OptionDefault::Integer(n) => Self::Integer(n),
            OptionDefault::Text(s) => Self::Text(s.to_string()),
        }
    }
}

/// Declaration of a single generation option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Stable identifier used as the mapping key.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Accepted value type.
    pub kind: OptionKind,
    /// Value used when the caller omits or misuses the option.
    pub default: OptionDefault,
    /// Accepted members for [`OptionKind::Enum`]; empty otherwise.
    pub available: &'static [&'static str],
    /// What the option does.
    pub description: &'static str,
}

/// Untyped caller-supplied option mapping.
pub type RawOptions = BTreeMap<String, JsonValue>;

/// A complete, schema-valid option mapping.
///
/// Contains exactly one entry per schema id, no more and no fewer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedOptions {
    values: BTreeMap<String, OptionValue>,
}

impl SanitizedOptions {
    /// Returns the value for an option id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&OptionValue> {
        self.values.get(id)
    }

    /// Returns a boolean option's value.
    #[must_use]
    pub fn boolean(&self, id: &str) -> Option<bool> {
        self.get(id).and_then(OptionValue::as_boolean)
    }

    /// Returns an integer option's value.
    #[must_use]
    pub fn integer(&self, id: &str) -> Option<u64> {
        self.get(id).and_then(OptionValue::as_integer)
    }

    /// Returns a string or enum option's value.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(OptionValue::as_text)
    }

    /// Iterates over the option ids present.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no options are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validates raw options against a schema, substituting defaults.
///
/// For each schema entry the raw value is kept when it matches the
/// declared kind (booleans verbatim, integers >= 0, enum members, any
/// string); otherwise the default is used. Keys not present in the schema
/// are dropped.
#[must_use]
pub fn sanitize(raw: &RawOptions, schema: &[OptionSpec]) -> SanitizedOptions {
    let mut values = BTreeMap::new();
    for spec in schema {
        let value = raw
            .get(spec.id)
            .and_then(|v| coerce(v, spec))
            .unwrap_or_else(|| spec.default.into());
        values.insert(spec.id.to_string(), value);
    }
    SanitizedOptions { values }
}

fn coerce(value: &JsonValue, spec: &OptionSpec) -> Option<OptionValue> {
    match spec.kind {
        OptionKind::Boolean => value.as_bool().map(OptionValue::Boolean),
        OptionKind::PositiveInteger => value.as_u64().map(OptionValue::Integer),
        OptionKind::Enum => value
            .as_str()
            .filter(|s| spec.available.contains(s))
            .map(|s| OptionValue::Text(s.to_string())),
        OptionKind::String => value.as_str().map(|s| OptionValue::Text(s.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SCHEMA: &[OptionSpec] = &[
        OptionSpec {
            id: "pretty",
            name: "Pretty print",
            kind: OptionKind::Boolean,
            default: OptionDefault::Boolean(true),
            available: &[],
            description: "Format output across lines",
        },
        OptionSpec {
            id: "width",
            name: "Width",
            kind: OptionKind::PositiveInteger,
            default: OptionDefault::Integer(4),
            available: &[],
            description: "Indent width",
        },
        OptionSpec {
            id: "style",
            name: "Style",
            kind: OptionKind::Enum,
            default: OptionDefault::Text("space"),
            available: &["tab", "space"],
            description: "Indent character",
        },
    ];

    #[test]
    fn test_keys_are_exactly_schema_ids() {
        let mut raw = RawOptions::new();
        raw.insert("width".to_string(), json!(8));
        raw.insert("unknown".to_string(), json!("dropped"));

        let sanitized = sanitize(&raw, SCHEMA);
        let mut ids: Vec<_> = sanitized.ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["pretty", "style", "width"]);
    }

    #[test]
    fn test_valid_values_kept() {
        let mut raw = RawOptions::new();
        raw.insert("pretty".to_string(), json!(false));
        raw.insert("width".to_string(), json!(2));
        raw.insert("style".to_string(), json!("tab"));

        let sanitized = sanitize(&raw, SCHEMA);
        assert_eq!(sanitized.boolean("pretty"), Some(false));
        assert_eq!(sanitized.integer("width"), Some(2));
        assert_eq!(sanitized.text("style"), Some("tab"));
    }

    #[test]
    fn test_wrong_types_fall_back_to_defaults() {
        let mut raw = RawOptions::new();
        raw.insert("pretty".to_string(), json!("yes"));
        raw.insert("width".to_string(), json!(-3));
        raw.insert("style".to_string(), json!("dots"));

        let sanitized = sanitize(&raw, SCHEMA);
        assert_eq!(sanitized.boolean("pretty"), Some(true));
        assert_eq!(sanitized.integer("width"), Some(4));
        assert_eq!(sanitized.text("style"), Some("space"));
    }

    #[test]
    fn test_empty_input_yields_all_defaults() {
        let sanitized = sanitize(&RawOptions::new(), SCHEMA);
        assert_eq!(sanitized.len(), SCHEMA.len());
        assert_eq!(sanitized.boolean("pretty"), Some(true));
    }
}
