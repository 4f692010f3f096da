//! Data models for Natter API requests and responses.
//!
//! Only the fields the client reads are modeled; any other fields in a
//! response body are ignored.

pub mod common;
pub mod sessions;
pub mod spaces;
pub mod users;

pub use common::ErrorBody;
pub use sessions::SessionToken;
pub use spaces::{CreateSpaceRequest, CreatedSpace};
pub use users::{NewUser, RegisteredUser, validate_username};
