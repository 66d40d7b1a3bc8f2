mod authority;
mod components;
mod state;

use authority::scan_authority;
use components::{scan_fragment, scan_path, scan_query};
use state::State;

use crate::error::{ParseError, Result};
use crate::helpers::trim_c0_control_and_space;
use crate::scheme::{get_scheme_type, scan_scheme};
use crate::url::Url;

/// Parse a URL string in a single left-to-right pass
///
/// # Errors
///
/// - [`ParseError::InvalidProtocol`] if there is no valid scheme
/// - [`ParseError::InvalidHost`] / [`ParseError::InvalidPort`] for a bad authority
/// - [`ParseError::UnexpectedCharacter`] if the remainder does not start a
///   path, query or fragment
pub fn parse_url(input: &str) -> Result<Url> {
    let input = trim_c0_control_and_space(input);
    let bytes = input.as_bytes();

    let Some((scheme, mut pointer)) = scan_scheme(input)? else {
        return Err(ParseError::InvalidProtocol);
    };
    let scheme_type = get_scheme_type(&scheme);

    let mut url = Url::default();
    url.scheme = scheme.into_owned();

    if scheme_type.has_authority() {
        pointer = scan_authority(&mut url, input, pointer)?;
    }

    if let Some(&b) = bytes.get(pointer) {
        match State::from_delimiter(b) {
            Some(State::Path) => scan_path(&mut url, input, pointer + 1),
            Some(State::Query) => scan_query(&mut url, input, pointer + 1),
            Some(State::Fragment) => scan_fragment(&mut url, input, pointer + 1),
            // Schemes without an authority start their path right after the colon
            None if !scheme_type.has_authority() => scan_path(&mut url, input, pointer),
            None => return Err(ParseError::UnexpectedCharacter),
        }
    }

    log::trace!(
        "parsed url: scheme={:?} hostname={:?} pathname={:?}",
        url.scheme,
        url.hostname,
        url.pathname
    );
    Ok(url)
}
