use crate::character_sets::is_host_ending;
use crate::checkers::{
    MAX_HOSTNAME_LENGTH, MAX_LABEL_LENGTH, is_valid_ascii_hostname, scan_port,
};
use crate::compat::Cow;
use crate::error::{ParseError, Result};
use crate::helpers::{has_authority_marker, is_char_start};
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::percent_decode;
use crate::url::{Url, derive_host};

/// Position of the `@` closing a userinfo section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Userinfo {
    at: usize,
    decode: bool,
}

/// Find the userinfo section of an authority starting at `start`.
/// The last `@` before `/`, `?`, `#` or the end of input wins.
fn scan_userinfo(bytes: &[u8], start: usize) -> Option<Userinfo> {
    let mut userinfo = None;
    let mut percent_seen = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            b'@' => {
                userinfo = Some(Userinfo {
                    at: i,
                    decode: percent_seen,
                });
            }
            b'%' => percent_seen = true,
            _ if is_host_ending(b) => break,
            _ => {}
        }
    }
    userinfo
}

/// Scan `//[userinfo@]host[:port]` starting at `start` (just after the scheme colon).
///
/// Populates auth, hostname, host and port on `url` and returns the offset
/// where the authority ends. If there is no `//` marker, nothing is consumed.
///
/// # Errors
///
/// - [`ParseError::InvalidHost`] for an overlong label or hostname, misplaced
///   dots, a port without a hostname, a second userinfo marker, or an IDNA
///   result that breaks any of these rules
/// - [`ParseError::InvalidPort`] for a zero or overflowing port
/// - [`ParseError::InvalidPercentEncoding`] if decoded userinfo is not UTF-8
/// - [`ParseError::IdnaError`] if a non-ASCII hostname cannot be converted
pub fn scan_authority(url: &mut Url, input: &str, start: usize) -> Result<usize> {
    let bytes = input.as_bytes();
    if !has_authority_marker(bytes, start) {
        return Ok(start);
    }
    url.slashes = true;

    let mut host_start = start + 2;
    if let Some(userinfo) = scan_userinfo(bytes, host_start) {
        let raw = &input[host_start..userinfo.at];
        let auth = if userinfo.decode {
            percent_decode(raw)?
        } else {
            Cow::Borrowed(raw)
        };
        url.auth = auth.into_owned();
        host_start = userinfo.at + 1;
    }

    let mut lowercase = false;
    let mut idna = false;
    let mut last: Option<u8> = None;
    let mut chars_after_dot = 0;
    let mut hostname_chars = 0;
    let mut host_end = bytes.len();
    let mut authority_end = bytes.len();

    for (i, &b) in bytes.iter().enumerate().skip(host_start) {
        match b {
            b':' => {
                if i == host_start {
                    return Err(ParseError::InvalidHost);
                }
                let (port, digits) = scan_port(&bytes[i + 1..])?;
                url.port = Some(port);
                host_end = i;
                authority_end = i + 1 + digits;
                break;
            }
            b'.' => {
                if matches!(last, None | Some(b'.')) {
                    return Err(ParseError::InvalidHost);
                }
                chars_after_dot = 0;
                hostname_chars += 1;
                last = Some(b);
                continue;
            }
            b'A'..=b'Z' => lowercase = true,
            b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' => {}
            // Only one userinfo section is allowed
            b'@' => return Err(ParseError::InvalidHost),
            0x7F..=0xFF => idna = true,
            // `{`, `|`, `}`, `~` and any other punctuation end the host
            _ => {
                host_end = i;
                authority_end = i;
                break;
            }
        }

        if is_char_start(b) {
            chars_after_dot += 1;
            hostname_chars += 1;
            if chars_after_dot > MAX_LABEL_LENGTH {
                return Err(ParseError::InvalidHost);
            }
        }
        last = Some(b);
    }

    if last == Some(b'.') {
        return Err(ParseError::InvalidHost);
    }
    if hostname_chars > MAX_HOSTNAME_LENGTH {
        return Err(ParseError::InvalidHost);
    }

    if host_end > host_start {
        let mut hostname = Cow::Borrowed(&input[host_start..host_end]);
        if lowercase {
            hostname = Cow::Owned(hostname.to_ascii_lowercase());
        }
        if idna {
            // Mapping and punycode can produce dots and longer labels
            let ascii = domain_to_ascii(&hostname)?;
            if !is_valid_ascii_hostname(&ascii) {
                return Err(ParseError::InvalidHost);
            }
            hostname = Cow::Owned(ascii);
        }
        url.host = derive_host(&hostname, url.port);
        url.hostname = hostname.into_owned();
    }

    Ok(authority_end)
}
