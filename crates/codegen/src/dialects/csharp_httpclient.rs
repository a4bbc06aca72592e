//! C# snippets built on System.Net.Http.HttpClient.

use scribe_domain::options::OptionSpec;

use super::CSHARP_METHODS;
use crate::body::{self, FormPart};
use crate::dialect::{Boilerplate, Dialect, RedirectDirective, RenderContext};
use crate::escape;
use crate::method::{MethodSupport, MethodTable};
use crate::options::{self, Timeout};

/// HttpClient dialect for modern .NET.
///
/// Every request goes through `HttpRequestMessage`; verbs without an
/// `HttpMethod` static member are carried as literal strings through the
/// `HttpMethod` constructor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsharpHttpClient;

/// `HttpMethod` exposes static members for the standard verbs only;
/// anything else goes through the string constructor.
fn method_expr(verb: &str) -> String {
    match verb {
        "GET" => "HttpMethod.Get".to_string(),
        "POST" => "HttpMethod.Post".to_string(),
        "PUT" => "HttpMethod.Put".to_string(),
        "PATCH" => "HttpMethod.Patch".to_string(),
        "DELETE" => "HttpMethod.Delete".to_string(),
        "HEAD" => "HttpMethod.Head".to_string(),
        "OPTIONS" => "HttpMethod.Options".to_string(),
        "TRACE" => "HttpMethod.Trace".to_string(),
        other => format!("new HttpMethod(\"{}\")", escape::double_quoted(other)),
    }
}

impl Dialect for CsharpHttpClient {
    fn id(&self) -> &'static str {
        "csharp-httpclient"
    }

    fn display_name(&self) -> &'static str {
        "C# (HttpClient)"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn options(&self) -> &'static [OptionSpec] {
        options::WITH_BOILERPLATE
    }

    fn method_table(&self) -> &'static MethodTable {
        &CSHARP_METHODS
    }

    fn connection_lines(&self, ctx: &RenderContext<'_>) -> Vec<String> {
        let mut lines = if ctx.follow_redirect {
            vec!["var client = new HttpClient();".to_string()]
        } else {
            vec![
                "var handler = new HttpClientHandler { AllowAutoRedirect = false };".to_string(),
                "var client = new HttpClient(handler);".to_string(),
            ]
        };
        match ctx.timeout {
            Timeout::Infinite => {
                lines.push("client.Timeout = Timeout.InfiniteTimeSpan;".to_string());
            }
            Timeout::Millis(ms) => {
                lines.push(format!("client.Timeout = TimeSpan.FromMilliseconds({ms});"));
            }
        }
        lines
    }

    fn redirect_directive(&self, _ctx: &RenderContext<'_>) -> RedirectDirective {
        // Folded into connection_lines via HttpClientHandler.
        RedirectDirective::BuiltIn
    }

    fn request_lines(&self, ctx: &RenderContext<'_>) -> Vec<String> {
        let method = match ctx.support {
            MethodSupport::Native => method_expr(ctx.method.as_str()),
            _ => format!(
                "new HttpMethod(\"{}\")",
                self.escape(ctx.method.as_str())
            ),
        };
        vec![format!(
            "var request = new HttpRequestMessage({method}, \"{}\");",
            self.escape(ctx.url)
        )]
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!(
            "request.Headers.TryAddWithoutValidation(\"{}\", \"{}\");",
            self.escape(name),
            self.escape(value)
        )
    }

    fn raw_body_lines(
        &self,
        content: &str,
        content_type: &str,
        _ctx: &RenderContext<'_>,
    ) -> Vec<String> {
        vec![
            format!(
                "var content = new StringContent(\"{}\", Encoding.UTF8, \"{}\");",
                self.escape(content),
                self.escape(content_type)
            ),
            "request.Content = content;".to_string(),
        ]
    }

    fn urlencoded_body_lines(
        &self,
        pairs: &[(String, String)],
        _ctx: &RenderContext<'_>,
    ) -> Vec<String> {
        let payload = body::encode_pairs(pairs);
        vec![
            format!(
                "var content = new StringContent(\"{}\", Encoding.UTF8, \
                 \"application/x-www-form-urlencoded\");",
                self.escape(&payload)
            ),
            "request.Content = content;".to_string(),
        ]
    }

    fn form_data_body_lines(&self, parts: &[FormPart], _ctx: &RenderContext<'_>) -> Vec<String> {
        let mut lines = vec!["var content = new MultipartFormDataContent();".to_string()];
        let mut file_index = 0usize;
        for part in parts {
            match part {
                FormPart::Text { key, value } => lines.push(format!(
                    "content.Add(new StringContent(\"{}\"), \"{}\");",
                    self.escape(value),
                    self.escape(key)
                )),
                FormPart::File { key, path } => {
                    file_index += 1;
                    let var = format!("fileContent{file_index}");
                    let mime = mime_guess::from_path(path).first_or_octet_stream();
                    lines.push(format!(
                        "var {var} = new ByteArrayContent(File.ReadAllBytes(\"{}\"));",
                        self.escape(path)
                    ));
                    lines.push(format!(
                        "{var}.Headers.ContentType = MediaTypeHeaderValue.Parse(\"{mime}\");"
                    ));
                    lines.push(format!(
                        "content.Add({var}, \"{}\", Path.GetFileName(\"{}\"));",
                        self.escape(key),
                        self.escape(path)
                    ));
                }
            }
        }
        lines.push("request.Content = content;".to_string());
        lines
    }

    fn file_body_lines(&self, path: &str, _ctx: &RenderContext<'_>) -> Vec<String> {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        vec![
            format!(
                "var content = new ByteArrayContent(File.ReadAllBytes(\"{}\"));",
                self.escape(path)
            ),
            format!("content.Headers.ContentType = MediaTypeHeaderValue.Parse(\"{mime}\");"),
            "request.Content = content;".to_string(),
        ]
    }

    fn invocation_lines(&self, _ctx: &RenderContext<'_>) -> Vec<String> {
        vec!["var response = await client.SendAsync(request);".to_string()]
    }

    fn response_lines(&self) -> Vec<String> {
        vec!["Console.WriteLine(await response.Content.ReadAsStringAsync());".to_string()]
    }

    fn boilerplate(&self, indent: &str) -> Option<Boilerplate> {
        Some(Boilerplate {
            header: vec![
                "using System;".to_string(),
                "using System.IO;".to_string(),
                "using System.Net.Http;".to_string(),
                "using System.Net.Http.Headers;".to_string(),
                "using System.Text;".to_string(),
                "using System.Threading;".to_string(),
                "using System.Threading.Tasks;".to_string(),
                "namespace HelloWorldApplication {".to_string(),
                format!("{indent}class Program {{"),
                format!(
                    "{}static async Task Main(string[] args) {{",
                    indent.repeat(2)
                ),
            ],
            footer: vec![
                format!("{}}}", indent.repeat(2)),
                format!("{indent}}}"),
                "}".to_string(),
            ],
            extra_depth: 3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scribe_domain::Method;

    fn ctx<'a>(method: &'a Method, support: MethodSupport) -> RenderContext<'a> {
        RenderContext {
            url: "https://example.com/",
            method,
            support,
            timeout: Timeout::Millis(5000),
            follow_redirect: true,
            indent: "  ",
        }
    }

    #[test]
    fn test_native_method_uses_static_member() {
        let method = Method::get();
        let lines = CsharpHttpClient.request_lines(&ctx(&method, MethodSupport::Native));
        assert_eq!(
            lines,
            vec!["var request = new HttpRequestMessage(HttpMethod.Get, \"https://example.com/\");"]
        );
    }

    #[test]
    fn test_emulated_method_uses_string_constructor() {
        let method = Method::new("PURGE");
        let lines = CsharpHttpClient.request_lines(&ctx(&method, MethodSupport::EmulateAsGet));
        assert!(lines[0].contains("new HttpMethod(\"PURGE\")"));
    }

    #[test]
    fn test_unlisted_nonstandard_verb_still_renders() {
        assert_eq!(method_expr("FOO"), "new HttpMethod(\"FOO\")");
    }

    #[test]
    fn test_timeout_conversion() {
        let method = Method::get();
        let lines = CsharpHttpClient.connection_lines(&ctx(&method, MethodSupport::Native));
        assert!(lines.contains(&"client.Timeout = TimeSpan.FromMilliseconds(5000);".to_string()));
    }

    #[test]
    fn test_redirects_disabled_through_handler() {
        let method = Method::get();
        let mut context = ctx(&method, MethodSupport::Native);
        context.follow_redirect = false;
        let lines = CsharpHttpClient.connection_lines(&context);
        assert_eq!(
            lines[0],
            "var handler = new HttpClientHandler { AllowAutoRedirect = false };"
        );
    }

    #[test]
    fn test_multiple_file_parts_get_distinct_variables() {
        let method = Method::post();
        let parts = vec![
            FormPart::File {
                key: "a".to_string(),
                path: "a.png".to_string(),
            },
            FormPart::File {
                key: "b".to_string(),
                path: "b.png".to_string(),
            },
        ];
        let lines =
            CsharpHttpClient.form_data_body_lines(&parts, &ctx(&method, MethodSupport::Native));
        let text = lines.join("\n");
        assert!(text.contains("var fileContent1 ="));
        assert!(text.contains("var fileContent2 ="));
    }
}
