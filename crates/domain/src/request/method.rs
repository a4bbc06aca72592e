//! HTTP method as an open verb

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An HTTP request method.
///
/// The verb is stored verbatim and compared case-sensitively, so
/// nonstandard methods such as `PURGE` or `PROPFIND` survive unchanged.
/// Whether a target library can express a verb natively is decided later
/// by its compatibility table, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Method(String);

impl Method {
    /// Creates a method from a verb, preserving its case.
    #[must_use]
    pub fn new(verb: impl Into<String>) -> Self {
        Self(verb.into())
    }

    /// The GET method.
    #[must_use]
    pub fn get() -> Self {
        Self::new("GET")
    }

    /// The POST method.
    #[must_use]
    pub fn post() -> Self {
        Self::new("POST")
    }

    /// Returns the verb as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::get()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Method {
    fn from(verb: &str) -> Self {
        Self::new(verb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_preserved() {
        let method = Method::new("Purge");
        assert_eq!(method.as_str(), "Purge");
        assert_ne!(method, Method::new("PURGE"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Method::get().to_string(), "GET");
        assert_eq!(Method::new("PROPFIND").to_string(), "PROPFIND");
    }

    #[test]
    fn test_from_str_never_fails() {
        let method: Method = "UNLINK".parse().unwrap();
        assert_eq!(method, Method::new("UNLINK"));
    }

    #[test]
    fn test_default_is_get() {
        assert_eq!(Method::default(), Method::get());
    }
}
