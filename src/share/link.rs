//! Share link construction and parsing
//!
//! A share link is the app's base URL with the state fingerprint in the
//! query string: `https://host/?state=<fingerprint>`.

use std::collections::HashMap;

use crate::error::{Result, invalid_share_url};

/// Query parameter carrying the state fingerprint
pub const STATE_PARAM: &str = "state";

/// Strip an href down to `scheme://authority`, appending an optional
/// deployment path prefix (e.g. `/dash` when the app is served behind a
/// reverse proxy).
pub fn url_base(href: &str, path_prefix: Option<&str>) -> Result<String> {
    let scheme_end = href
        .find("://")
        .ok_or_else(|| invalid_share_url(href))?;
    let scheme = &href[..scheme_end];
    if scheme.is_empty() {
        return Err(invalid_share_url(href));
    }

    let rest = &href[scheme_end + "://".len()..];
    let authority_end = rest
        .find(['/', '?', '#'])
        .unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    if authority.is_empty() {
        return Err(invalid_share_url(href));
    }

    let prefix = path_prefix.unwrap_or("");
    Ok(format!("{scheme}://{authority}{prefix}"))
}

/// Build a shareable link for a state fingerprint
pub fn share_url(base: &str, fingerprint: &str) -> String {
    format!("{base}/?{STATE_PARAM}={fingerprint}")
}

/// Parse a URL query string into key/value pairs.
///
/// Tolerates a leading `?`, decodes `+` and percent escapes, and keeps the
/// first value when a key repeats.
pub fn parse_query_string(qs: &str) -> HashMap<String, String> {
    let qs = qs.trim_start_matches('?');
    let mut result = HashMap::new();

    for pair in qs.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        let key = percent_decode(key);
        if key.is_empty() {
            continue;
        }
        result.entry(key).or_insert_with(|| percent_decode(value));
    }

    result
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match hex_pair(bytes.get(i + 1).copied(), bytes.get(i + 2).copied()) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: Option<u8>, lo: Option<u8>) -> Option<u8> {
    let hi = (hi? as char).to_digit(16)?;
    let lo = (lo? as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
