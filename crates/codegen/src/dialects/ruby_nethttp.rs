//! Ruby snippets built on Net::HTTP.

use scribe_domain::options::OptionSpec;

use crate::body::FormPart;
use crate::dialect::{Boilerplate, Dialect, RedirectDirective, RenderContext};
use crate::escape;
use crate::method::{MethodSupport, MethodTable};
use crate::options;

/// Verbs Net::HTTP has no request class for.
const RUBY_METHODS: MethodTable = MethodTable::new(&["PURGE", "VIEW"], &["LINK", "UNLINK"]);

/// Verbs with a first-class `Net::HTTP` request class.
const NATIVE_CLASSES: &[(&str, &str)] = &[
    ("GET", "Get"),
    ("POST", "Post"),
    ("PUT", "Put"),
    ("PATCH", "Patch"),
    ("DELETE", "Delete"),
    ("HEAD", "Head"),
    ("OPTIONS", "Options"),
    ("TRACE", "Trace"),
    ("COPY", "Copy"),
    ("MOVE", "Move"),
    ("LOCK", "Lock"),
    ("UNLOCK", "Unlock"),
    ("PROPFIND", "Propfind"),
    ("MKCOL", "Mkcol"),
];

fn request_class(verb: &str) -> Option<&'static str> {
    NATIVE_CLASSES
        .iter()
        .find(|(v, _)| *v == verb)
        .map(|(_, class)| *class)
}

/// Net::HTTP dialect.
///
/// A script target: snippets are standalone Ruby, so there is no
/// boilerplate shell and the `require` prelude is always emitted. The
/// library never follows redirects on its own, which covers the
/// `followRedirect: false` case by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyNetHttp;

impl Dialect for RubyNetHttp {
    fn id(&self) -> &'static str {
        "ruby-nethttp"
    }

    fn display_name(&self) -> &'static str {
        "Ruby (Net::HTTP)"
    }

    fn file_extension(&self) -> &'static str {
        "rb"
    }

    fn options(&self) -> &'static [OptionSpec] {
        options::SCRIPT_ONLY
    }

    fn method_table(&self) -> &'static MethodTable {
        &RUBY_METHODS
    }

    fn escape(&self, raw: &str) -> String {
        escape::ruby_double_quoted(raw)
    }

    fn connection_lines(&self, ctx: &RenderContext<'_>) -> Vec<String> {
        let mut lines = vec![
            "require 'uri'".to_string(),
            "require 'net/http'".to_string(),
            format!("url = URI(\"{}\")", self.escape(ctx.url)),
            "http = Net::HTTP.new(url.host, url.port)".to_string(),
        ];
        if ctx.url.starts_with("https://") {
            lines.push("http.use_ssl = true".to_string());
        }
        match ctx.timeout.as_secs() {
            None => lines.push("http.read_timeout = nil".to_string()),
            Some(secs) => lines.push(format!("http.read_timeout = {secs}")),
        }
        lines
    }

    fn redirect_directive(&self, _ctx: &RenderContext<'_>) -> RedirectDirective {
        // Net::HTTP does not follow redirects unless the caller writes a
        // loop; nothing to disable.
        RedirectDirective::BuiltIn
    }

    fn request_lines(&self, ctx: &RenderContext<'_>) -> Vec<String> {
        let line = match ctx.support {
            MethodSupport::Native => request_class(ctx.method.as_str()).map_or_else(
                || {
                    format!(
                        "request = Net::HTTPGenericRequest.new(\"{}\", true, true, url)",
                        self.escape(ctx.method.as_str())
                    )
                },
                |class| format!("request = Net::HTTP::{class}.new(url)"),
            ),
            MethodSupport::EmulateAsGet => format!(
                "request = Net::HTTPGenericRequest.new(\"{}\", false, true, url)",
                self.escape(ctx.method.as_str())
            ),
            MethodSupport::EmulateAsPost | MethodSupport::Unsupported => format!(
                "request = Net::HTTPGenericRequest.new(\"{}\", true, true, url)",
                self.escape(ctx.method.as_str())
            ),
        };
        vec![line]
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!(
            "request[\"{}\"] = \"{}\"",
            self.escape(name),
            self.escape(value)
        )
    }

    fn raw_body_lines(
        &self,
        content: &str,
        _content_type: &str,
        _ctx: &RenderContext<'_>,
    ) -> Vec<String> {
        vec![format!("request.body = \"{}\"", self.escape(content))]
    }

    fn urlencoded_body_lines(
        &self,
        pairs: &[(String, String)],
        _ctx: &RenderContext<'_>,
    ) -> Vec<String> {
        let entries = pairs
            .iter()
            .map(|(key, value)| {
                format!("[\"{}\", \"{}\"]", self.escape(key), self.escape(value))
            })
            .collect::<Vec<_>>()
            .join(", ");
        vec![format!("request.body = URI.encode_www_form([{entries}])")]
    }

    fn form_data_body_lines(&self, parts: &[FormPart], _ctx: &RenderContext<'_>) -> Vec<String> {
        let entries = parts
            .iter()
            .map(|part| match part {
                FormPart::Text { key, value } => {
                    format!("[\"{}\", \"{}\"]", self.escape(key), self.escape(value))
                }
                FormPart::File { key, path } => {
                    format!("[\"{}\", File.open(\"{}\")]", self.escape(key), self.escape(path))
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            format!("form_data = [{entries}]"),
            "request.set_form form_data, \"multipart/form-data\"".to_string(),
        ]
    }

    fn file_body_lines(&self, path: &str, _ctx: &RenderContext<'_>) -> Vec<String> {
        vec![format!("request.body = File.read(\"{}\")", self.escape(path))]
    }

    fn invocation_lines(&self, _ctx: &RenderContext<'_>) -> Vec<String> {
        vec!["response = http.request(request)".to_string()]
    }

    fn response_lines(&self) -> Vec<String> {
        vec!["puts response.read_body".to_string()]
    }

    fn boilerplate(&self, _indent: &str) -> Option<Boilerplate> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Timeout;
    use pretty_assertions::assert_eq;
    use scribe_domain::Method;

    fn ctx<'a>(method: &'a Method, url: &'a str, timeout: Timeout) -> RenderContext<'a> {
        RenderContext {
            url,
            method,
            support: RUBY_METHODS.resolve(method),
            timeout,
            follow_redirect: true,
            indent: "  ",
        }
    }

    #[test]
    fn test_https_enables_ssl() {
        let method = Method::get();
        let lines = RubyNetHttp.connection_lines(&ctx(
            &method,
            "https://example.com/",
            Timeout::Infinite,
        ));
        assert!(lines.contains(&"http.use_ssl = true".to_string()));

        let plain =
            RubyNetHttp.connection_lines(&ctx(&method, "http://example.com/", Timeout::Infinite));
        assert!(!plain.contains(&"http.use_ssl = true".to_string()));
    }

    #[test]
    fn test_timeout_in_whole_seconds() {
        let method = Method::get();
        let lines = RubyNetHttp.connection_lines(&ctx(
            &method,
            "http://example.com/",
            Timeout::Millis(3000),
        ));
        assert!(lines.contains(&"http.read_timeout = 3".to_string()));
    }

    #[test]
    fn test_infinite_timeout_is_nil() {
        let method = Method::get();
        let lines =
            RubyNetHttp.connection_lines(&ctx(&method, "http://example.com/", Timeout::Infinite));
        assert!(lines.contains(&"http.read_timeout = nil".to_string()));
    }

    #[test]
    fn test_native_verbs_use_request_classes() {
        let method = Method::new("PROPFIND");
        let lines = RubyNetHttp.request_lines(&ctx(&method, "http://example.com/", Timeout::Infinite));
        assert_eq!(lines, vec!["request = Net::HTTP::Propfind.new(url)"]);
    }

    #[test]
    fn test_emulated_get_shape_has_no_body() {
        let method = Method::new("PURGE");
        let lines = RubyNetHttp.request_lines(&ctx(&method, "http://example.com/", Timeout::Infinite));
        assert_eq!(
            lines,
            vec!["request = Net::HTTPGenericRequest.new(\"PURGE\", false, true, url)"]
        );
    }

    #[test]
    fn test_emulated_post_shape_carries_body() {
        let method = Method::new("LINK");
        let lines = RubyNetHttp.request_lines(&ctx(&method, "http://example.com/", Timeout::Infinite));
        assert_eq!(
            lines,
            vec!["request = Net::HTTPGenericRequest.new(\"LINK\", true, true, url)"]
        );
    }
}
