//! Natter API client.
//!
//! This crate provides a typed async client for the Natter social-spaces
//! API: Basic-auth login that stores the anti-forgery token as the
//! `csrfToken` cookie, space creation guarded by `X-CSRF-Token`, and the
//! cookie store that carries the session between requests.

pub mod auth;
pub mod client;
pub mod cookies;
pub mod endpoints;
pub mod error;
pub mod handlers;
pub mod models;

pub use auth::{Credentials, basic_auth_header};
pub use client::NatterClient;
pub use client::builder::NatterClientBuilder;
pub use cookies::{Cookie, CookieStore, FileCookieStore, MemoryCookieStore, SameSite, get_cookie};
pub use error::{ClientError, Result};
pub use handlers::{
    LoginForm, LoginOutcome, SpaceForm, SpaceOutcome, submit_create_space, submit_login,
};
pub use models::{CreateSpaceRequest, CreatedSpace, NewUser, RegisteredUser, SessionToken};
