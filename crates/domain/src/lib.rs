//! Scribe Domain - Core request and option types
//!
//! This crate defines the domain model for the Scribe snippet generator.
//! All types here are pure Rust with no I/O dependencies: a request
//! description, the declarative option schema with its sanitizer, and the
//! generated snippet value.

pub mod options;
pub mod request;
pub mod snippet;

pub use options::{
    OptionDefault, OptionKind, OptionSpec, OptionValue, RawOptions, SanitizedOptions, sanitize,
};
pub use request::{FormDataField, FormField, Header, Headers, Method, RequestBody, RequestSpec};
pub use snippet::Snippet;
