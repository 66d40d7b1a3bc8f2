use crate::compat::String;
use crate::error::{ParseError, Result};

/// Convert a hostname containing non-ASCII characters to its ASCII form
/// using the IDNA `ToASCII` algorithm.
///
/// # Errors
///
/// Returns [`ParseError::IdnaError`] if the domain is rejected by IDNA processing.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    log::debug!("converting non-ASCII hostname {domain:?} to ASCII");
    idna::domain_to_ascii(domain).map_err(|_| ParseError::IdnaError)
}
