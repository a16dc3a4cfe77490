//! Percent-encoding for Navigator query-parameter content
//!
//! The outer query string uses `&` and `=` as field separators, so content
//! is encoded with the unreserved set only: a literal `&` inside an address
//! or stop name always becomes `%26` and can never split a field.

use crate::error::NavigatorLinkError;

/// Percent-encode a string for use as a Navigator query-parameter value
///
/// Encodes all characters except unreserved characters (`A-Z`, `a-z`, `0-9`,
/// `-`, `_`, `.`, `~`) as UTF-8 `%XX` sequences. Spaces are encoded as `%20`.
///
/// # Errors
///
/// Returns [`NavigatorLinkError::Unencodable`] carrying the full input when
/// the text contains control characters, which the Navigator URL handler
/// does not accept in any field.
pub fn query_encode(input: &str) -> Result<String, NavigatorLinkError> {
    if input.chars().any(char::is_control) {
        return Err(NavigatorLinkError::Unencodable {
            text: input.to_string(),
        });
    }

    let mut result = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            _ => {
                for b in c.to_string().as_bytes() {
                    result.push_str(&format!("%{b:02X}"));
                }
            },
        }
    }
    Ok(result)
}
