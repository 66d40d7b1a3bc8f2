use crate::character_sets::{escape_into_new, needs_escape};
use crate::compat::{Cow, String};
use crate::url::Url;

/// Result of scanning one component span
struct Span {
    end: usize,
    escape: bool,
}

/// Scan from `start` until one of `delimiters` or the end of input,
/// noting whether any byte needs escaping.
fn scan_span(bytes: &[u8], start: usize, delimiters: &[u8]) -> Span {
    let mut escape = false;
    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if delimiters.contains(&b) {
            return Span { end: i, escape };
        }
        if !escape && needs_escape(b) {
            escape = true;
        }
    }
    Span {
        end: bytes.len(),
        escape,
    }
}

/// Borrow the span as-is, or build an escaped copy if it was flagged.
fn resolve(span: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        Cow::Owned(escape_into_new(span))
    } else {
        Cow::Borrowed(span)
    }
}

/// Prefix `body` with `marker` into a fresh string
fn with_marker(marker: char, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 1);
    out.push(marker);
    out.push_str(body);
    out
}

/// Scan a path body starting at `start`, handing off to the query or
/// fragment scanner at `?` or `#`.
pub fn scan_path(url: &mut Url, input: &str, start: usize) {
    let bytes = input.as_bytes();
    let span = scan_span(bytes, start, b"?#");

    match bytes.get(span.end) {
        Some(b'?') => scan_query(url, input, span.end + 1),
        Some(b'#') => scan_fragment(url, input, span.end + 1),
        _ => {}
    }

    let body = &input[start..span.end];
    url.pathname = with_marker('/', &resolve(body, span.escape));
}

/// Scan a query body starting at `start`, handing off to the fragment
/// scanner at `#`.
pub fn scan_query(url: &mut Url, input: &str, start: usize) {
    let bytes = input.as_bytes();
    let span = scan_span(bytes, start, b"#");

    if span.end < bytes.len() {
        scan_fragment(url, input, span.end + 1);
    }

    let body = &input[start..span.end];
    if body.is_empty() {
        url.search = String::new();
        url.query = Some(String::new());
        return;
    }

    let query = resolve(body, span.escape);
    url.search = with_marker('?', &query);
    url.query = Some(query.into_owned());
}

/// Scan a fragment body starting at `start` through the end of input.
pub fn scan_fragment(url: &mut Url, input: &str, start: usize) {
    let span = scan_span(input.as_bytes(), start, b"");
    let body = &input[start..span.end];

    url.hash = if body.is_empty() {
        String::new()
    } else {
        with_marker('#', &resolve(body, span.escape))
    };
}
