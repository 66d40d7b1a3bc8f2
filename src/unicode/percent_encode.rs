use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Component percent-encode set, matching `encodeURIComponent`:
/// everything except alphanumerics and `-_.!~*'()`
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode userinfo for output.
/// The first `:` (user/password separator) is kept literal.
pub fn encode_userinfo(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut separator_kept = false;

    for (i, part) in input.split(':').enumerate() {
        if i > 0 {
            if separator_kept {
                out.push_str("%3A");
            } else {
                out.push(':');
                separator_kept = true;
            }
        }
        for chunk in utf8_percent_encode(part, COMPONENT_SET) {
            out.push_str(chunk);
        }
    }
    out
}

/// Decode percent-encoded userinfo
///
/// # Errors
///
/// Returns [`ParseError::InvalidPercentEncoding`] if the decoded bytes are not UTF-8.
pub fn percent_decode(input: &str) -> Result<Cow<'_, str>> {
    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| ParseError::InvalidPercentEncoding)
}
