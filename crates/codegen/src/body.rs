//! Body-mode dispatch shared by every dialect.
//!
//! The match over [`RequestBody`] is exhaustive, so adding a body mode is
//! a compile-time requirement on this module. The core owns disabled
//! filtering, trimming, ordering and GraphQL serialization; dialects only
//! render the resulting shapes.

use scribe_domain::{FormDataField, FormField, RequestBody};
use serde_json::Value as JsonValue;

use crate::dialect::{Dialect, RenderContext};

/// A multipart entry after disabled filtering and trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// Literal key/value part.
    Text {
        /// Part name.
        key: String,
        /// Part value.
        value: String,
    },
    /// File-attachment part.
    File {
        /// Part name.
        key: String,
        /// Path of the file to attach.
        path: String,
    },
}

/// Serializes ordered pairs into an `application/x-www-form-urlencoded`
/// payload string.
#[must_use]
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

/// Renders the body fragment for `body`, dispatching on its mode.
///
/// Disabled fields are skipped and entry order is preserved. `trim`
/// strips surrounding whitespace from raw content and field keys/values.
/// A `None` body, or one whose payload is effectively empty, yields an
/// empty fragment.
pub(crate) fn format_body(
    dialect: &dyn Dialect,
    body: &RequestBody,
    trim: bool,
    ctx: &RenderContext<'_>,
) -> Vec<String> {
    match body {
        RequestBody::None => Vec::new(),
        RequestBody::Raw {
            content,
            content_type,
        } => {
            let content = if trim { content.trim() } else { content.as_str() };
            if content.is_empty() {
                return Vec::new();
            }
            let content_type =
                detect_content_type(content, content_type.as_deref().unwrap_or_default());
            dialect.raw_body_lines(content, &content_type, ctx)
        }
        RequestBody::Urlencoded { fields } => {
            let pairs = collect_pairs(fields, trim);
            if pairs.is_empty() {
                Vec::new()
            } else {
                dialect.urlencoded_body_lines(&pairs, ctx)
            }
        }
        RequestBody::FormData { fields } => {
            let parts = collect_parts(fields, trim);
            if parts.is_empty() {
                Vec::new()
            } else {
                dialect.form_data_body_lines(&parts, ctx)
            }
        }
        RequestBody::File { path } => {
            if path.is_empty() {
                Vec::new()
            } else {
                dialect.file_body_lines(path, ctx)
            }
        }
        RequestBody::GraphQl { query, variables } => {
            let payload = graphql_payload(query, variables.as_ref());
            dialect.raw_body_lines(&payload, "application/json", ctx)
        }
    }
}

/// Content type implied by the body, used when no explicit header names
/// one. Multipart bodies imply none here: the client library computes the
/// boundary itself.
pub(crate) fn implied_content_type(body: &RequestBody, trim: bool) -> Option<String> {
    match body {
        RequestBody::None | RequestBody::FormData { .. } => None,
        RequestBody::Raw {
            content,
            content_type,
        } => {
            let content = if trim { content.trim() } else { content.as_str() };
            if content.is_empty() {
                None
            } else {
                Some(detect_content_type(
                    content,
                    content_type.as_deref().unwrap_or_default(),
                ))
            }
        }
        RequestBody::Urlencoded { fields } => fields
            .iter()
            .any(|f| f.enabled)
            .then(|| "application/x-www-form-urlencoded".to_string()),
        RequestBody::File { path } => (!path.is_empty())
            .then(|| mime_guess::from_path(path).first_or_octet_stream().to_string()),
        RequestBody::GraphQl { .. } => Some("application/json".to_string()),
    }
}

/// Declared content type, or one detected from the content: text that
/// parses as a JSON document is tagged `application/json`, everything
/// else `text/plain`.
pub(crate) fn detect_content_type(content: &str, declared: &str) -> String {
    if !declared.is_empty() {
        return declared.to_string();
    }
    let trimmed = content.trim_start();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<JsonValue>(content).is_ok()
    {
        "application/json".to_string()
    } else {
        "text/plain".to_string()
    }
}

fn collect_pairs(fields: &[FormField], trim: bool) -> Vec<(String, String)> {
    fields
        .iter()
        .filter(|f| f.enabled)
        .map(|f| {
            if trim {
                (f.key.trim().to_string(), f.value.trim().to_string())
            } else {
                (f.key.clone(), f.value.clone())
            }
        })
        .collect()
}

fn collect_parts(fields: &[FormDataField], trim: bool) -> Vec<FormPart> {
    fields
        .iter()
        .filter(|f| f.is_enabled())
        .map(|field| match field {
            FormDataField::Text { key, value, .. } => {
                if trim {
                    FormPart::Text {
                        key: key.trim().to_string(),
                        value: value.trim().to_string(),
                    }
                } else {
                    FormPart::Text {
                        key: key.clone(),
                        value: value.clone(),
                    }
                }
            }
            FormDataField::File { key, path, .. } => FormPart::File {
                key: key.clone(),
                path: path.clone(),
            },
        })
        .collect()
}

/// JSON payload for a GraphQL body; absent variables become an empty
/// object so the embedded document is always well-formed.
fn graphql_payload(query: &str, variables: Option<&JsonValue>) -> String {
    let variables = variables.cloned().unwrap_or_else(|| serde_json::json!({}));
    serde_json::json!({ "query": query, "variables": variables }).to_string()
}
