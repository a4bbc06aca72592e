//! The per-target rendering strategy consumed by the generic assembler.

use scribe_domain::{Method, options::OptionSpec};

use crate::body::FormPart;
use crate::escape;
use crate::method::{MethodSupport, MethodTable};
use crate::options::Timeout;

/// Everything the rendering hooks need to know about one invocation.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Sanitized request URL, not yet escaped.
    pub url: &'a str,
    /// HTTP verb, case preserved.
    pub method: &'a Method,
    /// How this target expresses the verb.
    pub support: MethodSupport,
    /// Timeout directive.
    pub timeout: Timeout,
    /// Whether the generated client follows redirects automatically.
    pub follow_redirect: bool,
    /// One level of indentation.
    pub indent: &'a str,
}

/// How a dialect expresses "do not follow redirects".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDirective {
    /// Standalone statements appended after client construction.
    Statements(Vec<String>),
    /// Already covered: folded into the construction lines, or the
    /// library never follows redirects in the first place.
    BuiltIn,
    /// The library cannot express it; the assembler logs and skips.
    Unsupported,
}

/// Program shell wrapped around a snippet when boilerplate is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boilerplate {
    /// Lines prepended before the snippet.
    pub header: Vec<String>,
    /// Lines appended after the snippet.
    pub footer: Vec<String>,
    /// Extra indentation depth applied to every snippet line.
    pub extra_depth: usize,
}

/// A target-library rendering strategy.
///
/// The assembler owns ordering, option handling and body-mode dispatch;
/// implementations only provide syntax. Hooks receive raw content and are
/// responsible for escaping it with [`Dialect::escape`] (or their own
/// rules) before embedding it in a literal.
pub trait Dialect {
    /// Stable identifier, e.g. `csharp-restsharp`.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// File extension for saved snippets.
    fn file_extension(&self) -> &'static str;

    /// Declarative option schema for this target.
    fn options(&self) -> &'static [OptionSpec];

    /// Verbs this target's library cannot express verbatim.
    fn method_table(&self) -> &'static MethodTable;

    /// Escapes content for this target's string-literal grammar.
    fn escape(&self, raw: &str) -> String {
        escape::double_quoted(raw)
    }

    /// Client construction lines, embedding the timeout directive.
    fn connection_lines(&self, ctx: &RenderContext<'_>) -> Vec<String>;

    /// How this target disables automatic redirects.
    fn redirect_directive(&self, ctx: &RenderContext<'_>) -> RedirectDirective;

    /// Request-object construction per the resolved method support.
    fn request_lines(&self, ctx: &RenderContext<'_>) -> Vec<String>;

    /// One header declaration; `name` keeps its original casing.
    fn header_line(&self, name: &str, value: &str) -> String;

    /// Raw string body tagged with a content type.
    fn raw_body_lines(
        &self,
        content: &str,
        content_type: &str,
        ctx: &RenderContext<'_>,
    ) -> Vec<String>;

    /// Ordered url-encoded pairs; disabled entries are already removed.
    fn urlencoded_body_lines(
        &self,
        pairs: &[(String, String)],
        ctx: &RenderContext<'_>,
    ) -> Vec<String>;

    /// Ordered multipart parts; disabled entries are already removed.
    fn form_data_body_lines(&self, parts: &[FormPart], ctx: &RenderContext<'_>) -> Vec<String>;

    /// Body streamed from a file path.
    fn file_body_lines(&self, path: &str, ctx: &RenderContext<'_>) -> Vec<String>;

    /// The call executing the request.
    fn invocation_lines(&self, ctx: &RenderContext<'_>) -> Vec<String>;

    /// Printing the response.
    fn response_lines(&self) -> Vec<String>;

    /// Program shell, if this target has one.
    fn boilerplate(&self, indent: &str) -> Option<Boilerplate>;
}
