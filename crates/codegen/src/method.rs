//! Per-target HTTP method compatibility.

use scribe_domain::Method;

/// How a target library can express a given HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodSupport {
    /// First-class, method-specific call.
    Native,
    /// Emulated through a GET-shaped generic call carrying the literal
    /// verb; no request body travels with the emulated call.
    EmulateAsGet,
    /// Emulated through a POST-shaped generic call carrying the literal
    /// verb.
    EmulateAsPost,
    /// The library cannot express the method at all.
    Unsupported,
}

/// Verb lists describing what a target library cannot express verbatim.
///
/// One table exists per dialect, as const data, so variants of the same
/// ecosystem share a single source of truth instead of drifting copies.
/// Verbs are matched case-sensitively; anything absent from every list
/// resolves to [`MethodSupport::Native`].
#[derive(Debug, Clone, Copy)]
pub struct MethodTable {
    get_like: &'static [&'static str],
    post_like: &'static [&'static str],
    unsupported: &'static [&'static str],
}

impl MethodTable {
    /// A table for a library with first-class support for every verb.
    pub const NATIVE: Self = Self::new(&[], &[]);

    /// Creates a table from the GET-shaped and POST-shaped emulation lists.
    #[must_use]
    pub const fn new(
        get_like: &'static [&'static str],
        post_like: &'static [&'static str],
    ) -> Self {
        Self {
            get_like,
            post_like,
            unsupported: &[],
        }
    }

    /// Marks verbs the library cannot express even through emulation.
    #[must_use]
    pub const fn with_unsupported(mut self, verbs: &'static [&'static str]) -> Self {
        self.unsupported = verbs;
        self
    }

    /// Classifies `method` against this table.
    #[must_use]
    pub fn resolve(&self, method: &Method) -> MethodSupport {
        let verb = method.as_str();
        if self.get_like.contains(&verb) {
            MethodSupport::EmulateAsGet
        } else if self.post_like.contains(&verb) {
            MethodSupport::EmulateAsPost
        } else if self.unsupported.contains(&verb) {
            MethodSupport::Unsupported
        } else {
            MethodSupport::Native
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TABLE: MethodTable = MethodTable::new(&["PURGE", "VIEW"], &["LINK", "UNLINK"]);

    #[test]
    fn test_get_like_resolution() {
        assert_eq!(
            TABLE.resolve(&Method::new("PURGE")),
            MethodSupport::EmulateAsGet
        );
    }

    #[test]
    fn test_post_like_resolution() {
        assert_eq!(
            TABLE.resolve(&Method::new("LINK")),
            MethodSupport::EmulateAsPost
        );
    }

    #[test]
    fn test_unlisted_verbs_are_native() {
        assert_eq!(TABLE.resolve(&Method::get()), MethodSupport::Native);
        assert_eq!(
            TABLE.resolve(&Method::new("PROPFIND")),
            MethodSupport::Native
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(
            TABLE.resolve(&Method::new("purge")),
            MethodSupport::Native
        );
    }

    #[test]
    fn test_unsupported_list() {
        const STRICT: MethodTable =
            MethodTable::new(&[], &[]).with_unsupported(&["TRACE"]);
        assert_eq!(
            STRICT.resolve(&Method::new("TRACE")),
            MethodSupport::Unsupported
        );
    }

    #[test]
    fn test_native_table() {
        assert_eq!(
            MethodTable::NATIVE.resolve(&Method::new("PURGE")),
            MethodSupport::Native
        );
    }
}
