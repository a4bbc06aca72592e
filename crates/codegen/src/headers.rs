//! Header fragment rendering.

use scribe_domain::Headers;

use crate::dialect::Dialect;

/// Renders one declaration line per enabled header, in input order.
///
/// Keys keep their original casing. Values are trimmed when `trim` is
/// set. Disabled headers are skipped; an empty collection yields an empty
/// fragment.
pub(crate) fn format_headers(dialect: &dyn Dialect, headers: &Headers, trim: bool) -> Vec<String> {
    headers
        .enabled()
        .map(|h| {
            let value = if trim { h.value.trim() } else { h.value.as_str() };
            dialect.header_line(&h.name, value)
        })
        .collect()
}
