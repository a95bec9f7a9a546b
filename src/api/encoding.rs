//! Query-string encoding for request URLs.

/// Percent-encodes a value for use inside a URL query component.
///
/// Keeps the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) and encodes
/// every other byte of the UTF-8 representation as `%XX`. Spaces become `%20`.
///
/// # Examples
///
/// ```
/// use zallery::api::encode_component;
///
/// assert_eq!(encode_component("red cats"), "red%20cats");
/// assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
/// ```
#[must_use]
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Joins `(key, value)` pairs into an encoded query string without the `?`.
#[must_use]
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
