use crate::compat::{Cow, String, ToString};
use crate::error::{ParseError, Result};
use crate::types::SchemeType;

/// Get the scheme type from a scheme string.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        (6, Some(b'g')) if bytes == b"gopher" => SchemeType::Gopher,
        (10, Some(b'j')) if bytes == b"javascript" => SchemeType::Javascript,
        _ => SchemeType::Other,
    }
}

/// Scan the scheme at the start of `input`.
///
/// Returns the lowercased scheme and the offset just after the `:`,
/// or `None` if the input has no `:` at all.
///
/// # Errors
///
/// Returns [`ParseError::InvalidProtocol`] if the candidate is not `[a-z.+-]+`.
pub fn scan_scheme(input: &str) -> Result<Option<(Cow<'_, str>, usize)>> {
    let Some(colon) = memchr::memchr(b':', input.as_bytes()) else {
        return Ok(None);
    };
    let candidate = &input[..colon];

    // Lowercasing is deferred until something below 'a' shows up
    let lowercase = candidate.bytes().any(|b| b < b'a');

    let scheme = if lowercase {
        Cow::Owned(candidate.to_ascii_lowercase())
    } else {
        Cow::Borrowed(candidate)
    };
    if !is_valid_scheme(&scheme) {
        return Err(ParseError::InvalidProtocol);
    }
    Ok(Some((scheme, colon + 1)))
}

/// Check the `^[a-z.+-]+$` shape.
fn is_valid_scheme(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme
            .bytes()
            .all(|b| matches!(b, b'a'..=b'z' | b'.' | b'+' | b'-'))
}

/// Strip one trailing `:` from a scheme given to the protocol setter.
pub fn strip_protocol_colon(protocol: &str) -> String {
    protocol.strip_suffix(':').unwrap_or(protocol).to_string()
}
