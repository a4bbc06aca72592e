//! Target registry and the public generator surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use scribe_domain::options::{OptionSpec, RawOptions, sanitize};
use scribe_domain::{RequestSpec, Snippet};

use crate::assembler;
use crate::dialect::Dialect;
use crate::dialects::{CsharpHttpClient, CsharpRestSharp, RubyNetHttp};
use crate::error::{ScribeError, ScribeResult};
use crate::options::ConvertOptions;

/// Supported target libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// C# with the RestSharp client
    #[default]
    CsharpRestsharp,
    /// C# with System.Net.Http.HttpClient
    CsharpHttpclient,
    /// Ruby with Net::HTTP
    RubyNethttp,
}

impl Target {
    /// All selectable targets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::CsharpRestsharp,
            Self::CsharpHttpclient,
            Self::RubyNethttp,
        ]
    }

    /// The dialect strategy behind this target.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::CsharpRestsharp => &CsharpRestSharp,
            Self::CsharpHttpclient => &CsharpHttpClient,
            Self::RubyNethttp => &RubyNetHttp,
        }
    }

    /// Human-readable name shown in pickers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.dialect().display_name()
    }

    /// File extension for saved snippets.
    #[must_use]
    pub fn file_extension(self) -> &'static str {
        self.dialect().file_extension()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Target {
    type Err = ScribeError;

    fn from_str(s: &str) -> ScribeResult<Self> {
        match s {
            "csharp-restsharp" => Ok(Self::CsharpRestsharp),
            "csharp-httpclient" => Ok(Self::CsharpHttpclient),
            "ruby-nethttp" => Ok(Self::RubyNethttp),
            other => Err(ScribeError::UnknownTarget(other.to_string())),
        }
    }
}

/// Snippet generator for one target library.
///
/// Stateless: every conversion is an independent, pure transformation of
/// its inputs, so a single value can serve any number of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    target: Target,
}

impl Generator {
    /// Creates a generator for `target`.
    #[must_use]
    pub const fn new(target: Target) -> Self {
        Self { target }
    }

    /// The target this generator renders.
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// The declarative option schema for this target.
    #[must_use]
    pub fn options(&self) -> &'static [OptionSpec] {
        self.target.dialect().options()
    }

    /// Converts `request` into a snippet.
    ///
    /// Option values that fail schema validation fall back to their
    /// defaults and unknown body modes degrade to an empty body, so the
    /// conversion itself cannot fail for well-typed input.
    ///
    /// # Errors
    ///
    /// Reserved: no error is currently produced, but the channel is part
    /// of the public contract so future failure modes stay non-breaking.
    pub fn convert(&self, request: &RequestSpec, raw_options: &RawOptions) -> ScribeResult<Snippet> {
        let dialect = self.target.dialect();
        let sanitized = sanitize(raw_options, dialect.options());
        let options = ConvertOptions::from_sanitized(&sanitized);
        tracing::debug!(
            target = dialect.id(),
            method = %request.method,
            "generating snippet"
        );
        Ok(assembler::assemble(dialect, request, &options))
    }
}

/// Generates a snippet for `request` in the given target dialect.
///
/// Convenience wrapper over [`Generator::convert`].
///
/// # Errors
///
/// Reserved; see [`Generator::convert`].
pub fn generate(
    request: &RequestSpec,
    target: Target,
    raw_options: &RawOptions,
) -> ScribeResult<Snippet> {
    Generator::new(target).convert(request, raw_options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_target_from_str() {
        assert_eq!(
            "csharp-restsharp".parse::<Target>().unwrap(),
            Target::CsharpRestsharp
        );
        assert_eq!(
            "ruby-nethttp".parse::<Target>().unwrap(),
            Target::RubyNethttp
        );
    }

    #[test]
    fn test_unknown_target_is_fatal() {
        let err = "brainfuck-curl".parse::<Target>().unwrap_err();
        assert_eq!(err, ScribeError::UnknownTarget("brainfuck-curl".to_string()));
    }

    #[test]
    fn test_serde_ids_match_from_str() {
        for target in Target::all() {
            let id = serde_json::to_value(target).unwrap();
            let parsed: Target = id.as_str().unwrap().parse().unwrap();
            assert_eq!(parsed, *target);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Target::CsharpRestsharp.to_string(), "C# (RestSharp)");
        assert_eq!(Target::RubyNethttp.file_extension(), "rb");
    }

    #[test]
    fn test_all_targets_generate_nonempty_snippets() {
        let request = RequestSpec::get("https://api.example.com/users");
        for target in Target::all() {
            let snippet = generate(&request, *target, &RawOptions::new()).unwrap();
            assert!(!snippet.is_empty(), "empty snippet for {target:?}");
        }
    }
}
