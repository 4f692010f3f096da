//! REST API endpoint implementations.
//!
//! Each endpoint is a free function over a `reqwest::Client`, the base URL
//! and the cookie store. Every request carries the ambient `Cookie` header
//! and every response's `Set-Cookie` headers are absorbed into the store.

mod request;
mod sessions;
mod spaces;
mod users;

pub use sessions::{create_session, delete_session};
pub use spaces::create_space;
pub use users::register_user;

pub(crate) use request::{FailedResponse, ensure_success, parse_json, send_request};
