use crate::error::{ParseError, Result};

/// Maximum length of a single hostname label
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of the whole hostname, in characters
pub const MAX_HOSTNAME_LENGTH: usize = 256;

/// Check an ASCII hostname (as produced by IDNA conversion) against the
/// rules the host scanner enforces: no empty labels, labels of at most 63
/// characters, at most 256 characters overall, and only `[a-z0-9_-]`
/// besides the dots.
pub fn is_valid_ascii_hostname(hostname: &str) -> bool {
    hostname.len() <= MAX_HOSTNAME_LENGTH
        && hostname.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LENGTH
                && label
                    .bytes()
                    .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_'))
        })
}

/// Consume the ASCII digits at the start of `bytes` as a port.
///
/// Returns the port and the number of digits consumed. Zero (which also
/// covers "no digits at all") and values above 65535 are rejected.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPort`] for a zero or overflowing port.
pub fn scan_port(bytes: &[u8]) -> Result<(u16, usize)> {
    let mut port: u32 = 0;
    let mut consumed = 0;

    for &b in bytes {
        if !b.is_ascii_digit() {
            break;
        }
        port = port * 10 + u32::from(b - b'0');
        if port > u32::from(u16::MAX) {
            return Err(ParseError::InvalidPort);
        }
        consumed += 1;
    }

    if port == 0 {
        return Err(ParseError::InvalidPort);
    }
    Ok((port as u16, consumed))
}

/// Parse the leading decimal digits of a port string, like `parseInt`.
/// Leading whitespace is skipped and anything after the digits is ignored.
/// Returns None if there are no digits, the value is zero, or out of range.
pub fn parse_port_prefix(port: &str) -> Option<u16> {
    let digits = port.trim_start();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    match digits[..len].parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}
