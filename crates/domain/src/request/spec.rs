//! Request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Headers, Method, RequestBody};

/// Complete description of an HTTP request to reproduce in generated code.
///
/// Owned by the caller and treated as read-only input: generation never
/// mutates or retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestSpec {
    /// HTTP verb, case preserved
    #[serde(default)]
    pub method: Method,
    /// Target URL as written by the caller
    #[serde(default)]
    pub url: String,
    /// HTTP headers in declaration order
    #[serde(default)]
    pub headers: Headers,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
}

impl RequestSpec {
    /// Creates a request with the given method and URL.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: RequestBody::None,
        }
    }

    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::get(), url)
    }

    /// Creates a POST request for the given URL.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::post(), url)
    }

    /// Parses the URL, returning the normalized form if valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn parse_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_request() {
        let req = RequestSpec::get("https://api.example.com/users");
        assert_eq!(req.method, Method::get());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_parse_url_normalizes() {
        let req = RequestSpec::get("http://example.com");
        assert_eq!(req.parse_url().unwrap().as_str(), "http://example.com/");
    }

    #[test]
    fn test_minimal_json_deserializes() {
        let req: RequestSpec = serde_json::from_str(r#"{"url": "http://example.com"}"#).unwrap();
        assert_eq!(req.method, Method::get());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }
}
