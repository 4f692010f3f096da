//! Cookie values and `Set-Cookie` parsing.
//!
//! Parsing and rendering go through the `cookie` crate; [`Cookie`] is the
//! owned, serializable form kept in a jar.

use std::fmt;

use ::cookie::Cookie as RawCookie;
pub use ::cookie::SameSite;
use natter_config::constants::CSRF_COOKIE_NAME;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use url::{Host, Url};

/// A stored cookie.
///
/// Values are kept exactly as written; decoding happens on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "same_site_serde"
    )]
    pub same_site: Option<SameSite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Cookie {
    /// A plain session cookie with no attributes.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            secure: false,
            http_only: false,
            same_site: None,
            path: None,
        }
    }

    /// The anti-forgery cookie written after login: `Secure; SameSite=Strict`,
    /// no expiry, default path.
    pub fn csrf_token(token: impl Into<String>) -> Self {
        Self {
            secure: true,
            same_site: Some(SameSite::Strict),
            ..Self::new(CSRF_COOKIE_NAME, token)
        }
    }

    /// `name=value`, as it appears in `Cookie` headers and `document.cookie`.
    pub fn pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }

    /// Whether this cookie would be attached to a request for `url`.
    pub fn applies_to(&self, url: &Url) -> bool {
        if self.secure && url.scheme() != "https" && !is_loopback(url) {
            return false;
        }
        match &self.path {
            Some(path) => path_matches(url.path(), path),
            None => true,
        }
    }

    fn to_raw(&self) -> RawCookie<'static> {
        let mut builder = RawCookie::build((self.name.clone(), self.value.clone()));
        if self.secure {
            builder = builder.secure(true);
        }
        if self.http_only {
            builder = builder.http_only(true);
        }
        if let Some(same_site) = self.same_site {
            builder = builder.same_site(same_site);
        }
        if let Some(path) = &self.path {
            builder = builder.path(path.clone());
        }
        builder.build()
    }

    fn from_raw(raw: &RawCookie<'_>) -> Self {
        Self {
            name: raw.name().to_string(),
            value: raw.value_trimmed().to_string(),
            secure: raw.secure().unwrap_or(false),
            http_only: raw.http_only().unwrap_or(false),
            same_site: raw.same_site(),
            path: raw
                .path()
                .filter(|p| p.starts_with('/'))
                .map(str::to_string),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}

/// A parsed `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq)]
pub struct SetCookie {
    pub cookie: Cookie,
    pub max_age: Option<Duration>,
    pub expires: Option<OffsetDateTime>,
}

impl SetCookie {
    /// Parse a `Set-Cookie` header value.
    ///
    /// `Domain` is ignored. Returns `None` when the name is empty or the `=`
    /// is missing.
    pub fn parse(raw: &str) -> Option<Self> {
        let parsed = RawCookie::parse(raw).ok()?;
        Some(Self {
            cookie: Cookie::from_raw(&parsed),
            max_age: parsed.max_age(),
            expires: parsed.expires_datetime(),
        })
    }

    /// A non-positive `Max-Age` or an `Expires` in the past deletes the cookie.
    pub fn is_removal(&self) -> bool {
        self.is_removal_at(OffsetDateTime::now_utc())
    }

    fn is_removal_at(&self, now: OffsetDateTime) -> bool {
        if let Some(max_age) = self.max_age {
            return max_age <= Duration::ZERO;
        }
        matches!(self.expires, Some(expires) if expires <= now)
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

/// RFC 6265 path-match.
fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    request_path.starts_with(cookie_path)
        && (cookie_path.ends_with('/')
            || request_path.as_bytes().get(cookie_path.len()) == Some(&b'/'))
}

mod same_site_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SameSite;

    pub fn serialize<S>(value: &Option<SameSite>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(same_site) => serializer.collect_str(same_site),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SameSite>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| match s.to_ascii_lowercase().as_str() {
            "strict" => Some(SameSite::Strict),
            "lax" => Some(SameSite::Lax),
            "none" => Some(SameSite::None),
            _ => None,
        }))
    }
}
