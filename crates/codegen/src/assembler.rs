//! The generic snippet assembler.
//!
//! One pipeline serves every target: connection, redirect handling,
//! request construction, headers, body, invocation, response, and the
//! optional boilerplate wrap. Dialects fill in syntax through their hooks;
//! ordering and option handling live here so the per-target strategies
//! cannot drift apart.

use scribe_domain::{RequestSpec, Snippet};
use url::Url;

use crate::body;
use crate::dialect::{Boilerplate, Dialect, RedirectDirective, RenderContext};
use crate::headers;
use crate::method::MethodSupport;
use crate::options::ConvertOptions;

/// Normalizes a request URL for embedding in generated source.
///
/// Parseable URLs come back in the parser's normalized, percent-encoded
/// form. Anything else is passed through trimmed; literal escaping
/// downstream keeps the generated code well-formed regardless.
#[must_use]
pub fn sanitize_url(raw: &str) -> String {
    Url::parse(raw.trim()).map_or_else(|_| raw.trim().to_string(), String::from)
}

/// Composes the full snippet for `request` against one dialect.
///
/// Cannot fail on well-typed input: every fallible concern has already
/// been reduced to a default by the time this runs.
pub(crate) fn assemble(
    dialect: &dyn Dialect,
    request: &RequestSpec,
    options: &ConvertOptions,
) -> Snippet {
    let url = sanitize_url(&request.url);
    let support = dialect.method_table().resolve(&request.method);
    if support == MethodSupport::Unsupported {
        tracing::warn!(
            method = %request.method,
            dialect = dialect.id(),
            "method not expressible; falling back to a generic POST-shaped call"
        );
    }
    let ctx = RenderContext {
        url: &url,
        method: &request.method,
        support,
        timeout: options.request_timeout,
        follow_redirect: options.follow_redirect,
        indent: &options.indent,
    };

    let mut lines = dialect.connection_lines(&ctx);
    if !options.follow_redirect {
        match dialect.redirect_directive(&ctx) {
            RedirectDirective::Statements(statements) => lines.extend(statements),
            RedirectDirective::BuiltIn => {}
            RedirectDirective::Unsupported => {
                tracing::warn!(
                    dialect = dialect.id(),
                    "target library cannot disable redirects; skipping"
                );
            }
        }
    }
    lines.extend(dialect.request_lines(&ctx));

    let mut header_lines = headers::format_headers(dialect, &request.headers, options.trim_body);
    let body_lines = body::format_body(dialect, &request.body, options.trim_body, &ctx);
    if !body_lines.is_empty() && !request.headers.contains_enabled("Content-Type") {
        if let Some(content_type) = body::implied_content_type(&request.body, options.trim_body) {
            header_lines.push(dialect.header_line("Content-Type", &content_type));
        }
    }
    lines.extend(header_lines);
    lines.extend(body_lines);
    lines.extend(dialect.invocation_lines(&ctx));
    lines.extend(dialect.response_lines());

    if options.include_boilerplate {
        if let Some(shell) = dialect.boilerplate(&options.indent) {
            lines = wrap(lines, &shell, &options.indent);
        }
    }
    Snippet::from_lines(lines)
}

fn wrap(core: Vec<String>, shell: &Boilerplate, indent: &str) -> Vec<String> {
    let pad = indent.repeat(shell.extra_depth);
    let mut lines = shell.header.clone();
    lines.extend(core.into_iter().map(|line| format!("{pad}{line}")));
    lines.extend(shell.footer.iter().cloned());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_url_normalizes() {
        assert_eq!(sanitize_url("http://example.com"), "http://example.com/");
        assert_eq!(
            sanitize_url("https://example.com/a b"),
            "https://example.com/a%20b"
        );
    }

    #[test]
    fn test_sanitize_url_falls_back_on_unparseable_input() {
        assert_eq!(sanitize_url("  not a url  "), "not a url");
    }

    #[test]
    fn test_wrap_arithmetic() {
        let shell = Boilerplate {
            header: vec!["head {".to_string()],
            footer: vec!["}".to_string()],
            extra_depth: 2,
        };
        let wrapped = wrap(vec!["body;".to_string()], &shell, "  ");
        assert_eq!(wrapped, vec!["head {", "    body;", "}"]);
    }
}
