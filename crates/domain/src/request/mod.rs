//! HTTP request description types

mod body;
mod header;
mod method;
mod spec;

pub use body::{FormDataField, FormField, RequestBody};
pub use header::{Header, Headers};
pub use method::Method;
pub use spec::RequestSpec;
