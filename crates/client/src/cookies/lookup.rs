//! Cookie lookup over a `document.cookie` style string.

use percent_encoding::percent_decode_str;

/// Find the value of `name` in a cookie string of `name=value` pairs
/// separated by `;`.
///
/// Names and values are percent-decoded before comparison. Input that does
/// not decode to UTF-8 is used verbatim. Pairs are split at the first `=`,
/// so values may themselves contain `=`.
pub fn get_cookie(cookie_string: &str, name: &str) -> Option<String> {
    cookie_string
        .split(';')
        .filter_map(|item| {
            let (raw_name, raw_value) = item.split_once('=')?;
            Some((decode(raw_name.trim()), decode(raw_value.trim())))
        })
        .find(|(cookie_name, _)| cookie_name == name)
        .map(|(_, value)| value)
}

fn decode(component: &str) -> String {
    percent_decode_str(component)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| component.to_string())
}
