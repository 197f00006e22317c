// src/core/sanitize.rs

/// Decode a form-encoded string: `+` is a space, `%XX` escapes are bytes.
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn unquote_plus(s: &str) -> String {
    let spaced = s.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
