//! In-memory cookie store.

use super::{Cookie, CookieStore};

/// A cookie store that lives as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieStore {
    cookies: Vec<Cookie>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_cookies(cookies: Vec<Cookie>) -> Self {
        let mut store = Self::new();
        for cookie in cookies {
            store.set(cookie);
        }
        store
    }
}

impl CookieStore for MemoryCookieStore {
    fn set(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    fn remove(&mut self, name: &str) -> Option<Cookie> {
        let index = self.cookies.iter().position(|c| c.name == name)?;
        Some(self.cookies.remove(index))
    }

    fn cookies(&self) -> Vec<Cookie> {
        self.cookies.clone()
    }
}
