//! On-disk locations for client state.
//!
//! Responsibilities:
//! - Resolve the platform-appropriate path of the persisted cookie jar.
//!
//! Does NOT handle:
//! - Reading or writing the cookie jar (see `natter_client::cookies`).

mod path;

pub use path::default_cookie_jar_path;
