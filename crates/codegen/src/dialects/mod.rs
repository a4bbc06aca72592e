//! Concrete target dialects.

mod csharp_httpclient;
mod csharp_restsharp;
mod ruby_nethttp;

pub use csharp_httpclient::CsharpHttpClient;
pub use csharp_restsharp::CsharpRestSharp;
pub use ruby_nethttp::RubyNetHttp;

use crate::method::MethodTable;

/// Verbs the C# client libraries cannot express verbatim.
///
/// Shared by both C# dialects so the lists cannot drift apart.
pub(crate) const CSHARP_METHODS: MethodTable = MethodTable::new(
    &["PURGE", "UNLOCK", "VIEW", "COPY"],
    &["LINK", "UNLINK", "LOCK", "PROPFIND"],
);
