use crate::character_sets::escape_component;
use crate::compat::{Cow, String};
use crate::scheme::get_scheme_type;
use crate::unicode::percent_encode::encode_userinfo;
use crate::url::{Url, derive_host};

/// Rebuild `search` from `query` when only the query was set
fn query_to_search(query: Option<&str>) -> Cow<'_, str> {
    match query {
        None | Some("") => Cow::Borrowed(""),
        Some(query) => {
            let mut search = String::with_capacity(query.len() + 1);
            search.push('?');
            search.push_str(query);
            Cow::Owned(search)
        }
    }
}

/// Append `component`, adding `marker` in front if it is missing.
fn push_with_marker(buffer: &mut String, component: &str, marker: char) {
    if component.is_empty() {
        return;
    }
    if !component.starts_with(marker) {
        buffer.push(marker);
    }
    buffer.push_str(component);
}

/// Serialize a URL from its current fields.
///
/// Output order is scheme, `//` (when required), userinfo, host, pathname,
/// search, hash. Pathname and search go through the auto-escape table;
/// the hash is written as stored.
pub fn format_url(url: &Url) -> String {
    let mut buffer = String::with_capacity(
        url.scheme.len()
            + url.auth.len()
            + url.host.len().max(url.hostname.len() + 6)
            + url.pathname.len()
            + url.search.len()
            + url.hash.len()
            + 8,
    );

    let slashes =
        url.slashes || url.scheme.is_empty() || get_scheme_type(&url.scheme).requires_slashes();
    buffer.push_str(&url.scheme);
    buffer.push_str(if slashes { "://" } else { ":" });

    // No hostname means no authority to attach userinfo or a port to
    if !url.host.is_empty() || !url.hostname.is_empty() {
        if !url.auth.is_empty() {
            buffer.push_str(&encode_userinfo(&url.auth));
            buffer.push('@');
        }
        if url.host.is_empty() {
            buffer.push_str(&derive_host(&url.hostname, url.port));
        } else {
            buffer.push_str(&url.host);
        }
    }

    let search = if url.search.is_empty() {
        query_to_search(url.query.as_deref())
    } else {
        Cow::Borrowed(url.search.as_str())
    };

    push_with_marker(&mut buffer, &escape_component(&url.pathname), '/');
    push_with_marker(&mut buffer, &escape_component(&search), '?');
    push_with_marker(&mut buffer, &url.hash, '#');

    buffer
}
