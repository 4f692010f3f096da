//! Cookies command: show what the cookie jar holds.

use anyhow::Result;
use natter_client::Cookie;
use natter_config::Config;

use crate::commands::build_client;
use crate::output::{OutputFormat, print_result};

pub fn run(config: &Config, document: bool, format: OutputFormat) -> Result<()> {
    let client = build_client(config)?;
    let store = client.cookie_store();

    if document {
        let cookie_string = store.document_cookie();
        return print_result(format, &cookie_string, &cookie_string);
    }

    let cookies = store.cookies();
    print_result(format, &cookies, &render_cookies(&cookies))
}

fn render_cookies(cookies: &[Cookie]) -> String {
    if cookies.is_empty() {
        return "No cookies stored".to_string();
    }
    cookies
        .iter()
        .map(Cookie::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cookies() {
        assert_eq!(render_cookies(&[]), "No cookies stored");

        let cookies = vec![Cookie::csrf_token("T"), Cookie::new("theme", "dark")];
        assert_eq!(
            render_cookies(&cookies),
            "csrfToken=T; SameSite=Strict; Secure\ntheme=dark"
        );
    }
}
