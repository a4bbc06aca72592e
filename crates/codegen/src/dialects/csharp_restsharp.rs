//! C# snippets built on the RestSharp client.

use scribe_domain::options::OptionSpec;

use super::CSHARP_METHODS;
use crate::body::FormPart;
use crate::dialect::{Boilerplate, Dialect, RedirectDirective, RenderContext};
use crate::method::{MethodSupport, MethodTable};
use crate::options::{self, Timeout};

/// RestSharp dialect (`RestClient` / `RestRequest`).
///
/// Unsupported verbs route through `ExecuteAsGet`/`ExecuteAsPost`, which
/// take the literal verb as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsharpRestSharp;

impl Dialect for CsharpRestSharp {
    fn id(&self) -> &'static str {
        "csharp-restsharp"
    }

    fn display_name(&self) -> &'static str {
        "C# (RestSharp)"
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
        let mut lines = vec![format!(
            "var client = new RestClient(\"{}\");",
            self.escape(ctx.url)
        )];
        match ctx.timeout {
            Timeout::Infinite => lines.push("client.Timeout = -1;".to_string()),
            Timeout::Millis(ms) => lines.push(format!("client.Timeout = {ms};")),
        }
        lines
    }

    fn redirect_directive(&self, _ctx: &RenderContext<'_>) -> RedirectDirective {
        RedirectDirective::Statements(vec!["client.FollowRedirects = false;".to_string()])
    }

    fn request_lines(&self, ctx: &RenderContext<'_>) -> Vec<String> {
        match ctx.support {
            MethodSupport::Native => {
                vec![format!("var request = new RestRequest(Method.{});", ctx.method)]
            }
            _ => vec!["var request = new RestRequest();".to_string()],
        }
    }

    fn header_line(&self, name: &str, value: &str) -> String {
        format!(
            "request.AddHeader(\"{}\", \"{}\");",
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
        vec![format!(
            "request.AddParameter(\"{}\", \"{}\", ParameterType.RequestBody);",
            self.escape(content_type),
            self.escape(content)
        )]
    }

    fn urlencoded_body_lines(
        &self,
        pairs: &[(String, String)],
        _ctx: &RenderContext<'_>,
    ) -> Vec<String> {
        pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "request.AddParameter(\"{}\", \"{}\");",
                    self.escape(key),
                    self.escape(value)
                )
            })
            .collect()
    }

    fn form_data_body_lines(&self, parts: &[FormPart], _ctx: &RenderContext<'_>) -> Vec<String> {
        parts
            .iter()
            .map(|part| match part {
                FormPart::Text { key, value } => format!(
                    "request.AddParameter(\"{}\", \"{}\");",
                    self.escape(key),
                    self.escape(value)
                ),
                FormPart::File { key, path } => format!(
                    "request.AddFile(\"{}\", \"{}\");",
                    self.escape(key),
                    self.escape(path)
                ),
            })
            .collect()
    }

    fn file_body_lines(&self, path: &str, _ctx: &RenderContext<'_>) -> Vec<String> {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        vec![format!(
            "request.AddParameter(\"{mime}\", File.ReadAllBytes(\"{}\"), ParameterType.RequestBody);",
            self.escape(path)
        )]
    }

    fn invocation_lines(&self, ctx: &RenderContext<'_>) -> Vec<String> {
        let line = match ctx.support {
            MethodSupport::Native => "IRestResponse response = client.Execute(request);".to_string(),
            MethodSupport::EmulateAsGet => format!(
                "IRestResponse response = client.ExecuteAsGet(request, \"{}\");",
                self.escape(ctx.method.as_str())
            ),
            MethodSupport::EmulateAsPost | MethodSupport::Unsupported => format!(
                "IRestResponse response = client.ExecuteAsPost(request, \"{}\");",
                self.escape(ctx.method.as_str())
            ),
        };
        vec![line]
    }

    fn response_lines(&self) -> Vec<String> {
        vec!["Console.WriteLine(response.Content);".to_string()]
    }

    fn boilerplate(&self, indent: &str) -> Option<Boilerplate> {
        Some(Boilerplate {
            header: vec![
                "using System;".to_string(),
                "using System.IO;".to_string(),
                "using RestSharp;".to_string(),
                "namespace HelloWorldApplication {".to_string(),
                format!("{indent}class HelloWorld {{"),
                format!("{}static void Main(string[] args) {{", indent.repeat(2)),
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
            timeout: Timeout::Infinite,
            follow_redirect: true,
            indent: "  ",
        }
    }

    #[test]
    fn test_native_request_names_the_method() {
        let method = Method::get();
        let lines = CsharpRestSharp.request_lines(&ctx(&method, MethodSupport::Native));
        assert_eq!(lines, vec!["var request = new RestRequest(Method.GET);"]);
    }

    #[test]
    fn test_emulated_request_is_anonymous() {
        let method = Method::new("PURGE");
        let lines = CsharpRestSharp.request_lines(&ctx(&method, MethodSupport::EmulateAsGet));
        assert_eq!(lines, vec!["var request = new RestRequest();"]);
    }

    #[test]
    fn test_emulated_invocation_carries_literal_verb() {
        let method = Method::new("PURGE");
        let lines = CsharpRestSharp.invocation_lines(&ctx(&method, MethodSupport::EmulateAsGet));
        assert_eq!(
            lines,
            vec!["IRestResponse response = client.ExecuteAsGet(request, \"PURGE\");"]
        );
    }

    #[test]
    fn test_infinite_timeout_renders_minus_one() {
        let method = Method::get();
        let lines = CsharpRestSharp.connection_lines(&ctx(&method, MethodSupport::Native));
        assert!(lines.contains(&"client.Timeout = -1;".to_string()));
    }
}
