//! Request body representations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

const fn default_enabled() -> bool {
    true
}

/// A key/value field in a url-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name.
    pub key: String,
    /// Field value.
    pub value: String,
    /// Whether this field takes part in generation.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl FormField {
    /// Creates an enabled field.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled field.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: false,
        }
    }
}

/// A part of a multipart form-data body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormDataField {
    /// Literal text part.
    Text {
        /// Part name.
        key: String,
        /// Part value.
        value: String,
        /// Whether this part takes part in generation.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    /// File-attachment part.
    File {
        /// Part name.
        key: String,
        /// Path of the file to attach.
        path: String,
        /// Whether this part takes part in generation.
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
}

impl FormDataField {
    /// Creates an enabled text part.
    #[must_use]
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates an enabled file part.
    #[must_use]
    pub fn file(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::File {
            key: key.into(),
            path: path.into(),
            enabled: true,
        }
    }

    /// Returns whether this part takes part in generation.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Text { enabled, .. } | Self::File { enabled, .. } => *enabled,
        }
    }
}

/// Request body across the supported representation families.
///
/// The `mode` field is the serialized discriminator. An unrecognized mode
/// deserializes to [`RequestBody::None`] so malformed input degrades to an
/// empty body instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RequestBody {
    /// Raw text body.
    Raw {
        /// The body text.
        #[serde(default)]
        content: String,
        /// Declared content type; detected from the content when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content_type: Option<String>,
    },

    /// URL-encoded form body (application/x-www-form-urlencoded).
    Urlencoded {
        /// Ordered form fields.
        #[serde(default)]
        fields: Vec<FormField>,
    },

    /// Multipart form body (multipart/form-data).
    #[serde(rename = "formdata")]
    FormData {
        /// Ordered form parts.
        #[serde(default)]
        fields: Vec<FormDataField>,
    },

    /// Body streamed from a file.
    File {
        /// Path of the file holding the body.
        #[serde(default)]
        path: String,
    },

    /// GraphQL query body.
    #[serde(rename = "graphql")]
    GraphQl {
        /// The GraphQL query string.
        #[serde(default)]
        query: String,
        /// GraphQL variables as a JSON object.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variables: Option<JsonValue>,
    },

    /// No body.
    #[default]
    #[serde(other)]
    None,
}

impl RequestBody {
    /// Creates a raw body with a declared content type.
    #[must_use]
    pub fn raw(content: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self::Raw {
            content: content.into(),
            content_type: Some(content_type.into()),
        }
    }

    /// Creates a raw JSON body.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self::raw(content, "application/json")
    }

    /// Creates a raw plain-text body.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::raw(content, "text/plain")
    }

    /// Creates a url-encoded body.
    #[must_use]
    pub const fn urlencoded(fields: Vec<FormField>) -> Self {
        Self::Urlencoded { fields }
    }

    /// Creates a multipart form-data body.
    #[must_use]
    pub const fn form_data(fields: Vec<FormDataField>) -> Self {
        Self::FormData { fields }
    }

    /// Creates a file-backed body.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self::File { path: path.into() }
    }

    /// Creates a GraphQL body.
    #[must_use]
    pub fn graphql(query: impl Into<String>, variables: Option<JsonValue>) -> Self {
        Self::GraphQl {
            query: query.into(),
            variables,
        }
    }

    /// Returns whether no body is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
