//! Cookie store capability shared by the login and space flows.
//!
//! The browser keeps two kinds of cookies for Natter: the ambient session
//! cookie set by the server through `Set-Cookie`, and the `csrfToken` cookie
//! written by the login handler. Both live in one [`CookieStore`] that is
//! injected into [`crate::NatterClient`].
//!
//! # Submodules
//! - `cookie`: the [`Cookie`] value and `Set-Cookie` parsing on top of the `cookie` crate
//! - `lookup`: [`get_cookie`] over a `document.cookie` style string
//! - `memory`: in-process [`MemoryCookieStore`]
//! - `file`: JSON-backed [`FileCookieStore`] shared between CLI invocations
//!
//! # Invariants
//! - Cookie names are unique within a store; setting a name replaces it in place
//! - `document_cookie()` never exposes `HttpOnly` cookies
//! - `Secure` cookies are only attached to https or loopback requests

mod cookie;
mod file;
mod lookup;
mod memory;

use std::fmt;

use reqwest::header::{HeaderMap, SET_COOKIE};
use url::Url;

use crate::error::Result;

pub use self::cookie::{Cookie, SameSite, SetCookie};
pub use file::FileCookieStore;
pub use lookup::get_cookie;
pub use memory::MemoryCookieStore;

/// Storage for cookies, abstracting the browser's cookie jar.
pub trait CookieStore: Send + Sync + fmt::Debug {
    /// Insert or replace the cookie with the same name.
    fn set(&mut self, cookie: Cookie);

    /// Remove a cookie by name, returning it if present.
    fn remove(&mut self, name: &str) -> Option<Cookie>;

    /// All stored cookies in insertion order.
    fn cookies(&self) -> Vec<Cookie>;

    /// Flush the store to its backing medium. In-memory stores do nothing.
    fn persist(&self) -> Result<()> {
        Ok(())
    }

    /// Look up a stored cookie by exact name.
    fn get(&self, name: &str) -> Option<Cookie> {
        self.cookies().into_iter().find(|c| c.name == name)
    }

    /// The cookie string a page script would see: `name=value` pairs joined
    /// by `"; "`, without `HttpOnly` cookies.
    fn document_cookie(&self) -> String {
        self.cookies()
            .iter()
            .filter(|c| !c.http_only)
            .map(Cookie::pair)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Value of the `Cookie` request header for `url`, if any cookie applies.
    fn cookie_header(&self, url: &Url) -> Option<String> {
        let pairs: Vec<String> = self
            .cookies()
            .iter()
            .filter(|c| c.applies_to(url))
            .map(Cookie::pair)
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }

    /// Absorb every `Set-Cookie` header of a response.
    ///
    /// Returns `true` if the store changed.
    fn store_response_cookies(&mut self, headers: &HeaderMap) -> bool {
        let mut changed = false;
        for value in headers.get_all(SET_COOKIE) {
            let Ok(raw) = value.to_str() else {
                tracing::debug!("Ignoring non-ASCII Set-Cookie header");
                continue;
            };
            let Some(set_cookie) = SetCookie::parse(raw) else {
                tracing::debug!("Ignoring malformed Set-Cookie header");
                continue;
            };

            if set_cookie.is_removal() {
                changed |= self.remove(&set_cookie.cookie.name).is_some();
            } else {
                tracing::debug!(name = %set_cookie.cookie.name, "Storing response cookie");
                self.set(set_cookie.cookie);
                changed = true;
            }
        }
        changed
    }
}
