use core::cell::OnceCell;

use crate::checkers::parse_port_prefix;
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::formatter::format_url;
use crate::scheme::{get_scheme_type, strip_protocol_colon};
use crate::types::SchemeType;

/// Build the display host: hostname plus `:port` when a port is present.
pub(crate) fn derive_host(hostname: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => {
            let port = port.to_string();
            let mut host = String::with_capacity(hostname.len() + port.len() + 1);
            host.push_str(hostname);
            host.push(':');
            host.push_str(&port);
            host
        }
        None => hostname.to_string(),
    }
}

/// Build the request path: pathname followed by search.
pub(crate) fn derive_canonical_path(pathname: &str, search: &str) -> String {
    let mut path = String::with_capacity(pathname.len() + search.len());
    path.push_str(pathname);
    path.push_str(search);
    path
}

/// A parsed URL.
///
/// Every field is populated once by [`Url::parse`] and can then be changed
/// independently through its setter. Setters never re-derive related fields:
/// changing the port does not update [`Url::host`], for example.
///
/// [`Url::href`] is computed on first access and cached. Later mutations do
/// not invalidate it; call [`Url::format`] for a fresh serialization.
///
/// # Examples
///
/// ```
/// use quickurl::Url;
///
/// let url = Url::parse("HTTP://User@Example.COM:8080/a b?q=1#top").unwrap();
/// assert_eq!(url.protocol(), "http:");
/// assert_eq!(url.auth(), "User");
/// assert_eq!(url.host(), "example.com:8080");
/// assert_eq!(url.pathname(), "/a%20b");
/// assert_eq!(url.query(), Some("q=1"));
/// assert_eq!(url.href(), "http://User@example.com:8080/a%20b?q=1#top");
/// ```
#[derive(Debug, Clone)]
pub struct Url {
    pub(crate) scheme: String,
    pub(crate) slashes: bool,
    pub(crate) auth: String,
    pub(crate) host: String,
    pub(crate) hostname: String,
    pub(crate) port: Option<u16>,
    pub(crate) pathname: String,
    pub(crate) search: String,
    pub(crate) query: Option<String>,
    pub(crate) hash: String,
    href: OnceCell<String>,
}

impl Default for Url {
    fn default() -> Self {
        Self {
            scheme: String::new(),
            slashes: false,
            auth: String::new(),
            host: String::new(),
            hostname: String::new(),
            port: None,
            pathname: "/".to_string(),
            search: String::new(),
            query: None,
            hash: String::new(),
            href: OnceCell::new(),
        }
    }
}

impl Url {
    /// Parse a URL string.
    ///
    /// Leading and trailing C0 controls and spaces are trimmed first.
    ///
    /// # Errors
    ///
    /// Returns a syntax [`ParseError`] if the input is not a valid URL.
    pub fn parse(input: &str) -> Result<Self> {
        crate::parser::parse_url(input)
    }

    /// Parse a URL from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotAString`] if `input` is not valid UTF-8,
    /// otherwise the same errors as [`Url::parse`].
    pub fn parse_bytes(input: &[u8]) -> Result<Self> {
        let input = core::str::from_utf8(input).map_err(|_| ParseError::NotAString)?;
        Self::parse(input)
    }

    /// Check if a URL string can be parsed
    ///
    /// # Examples
    ///
    /// ```
    /// use quickurl::Url;
    ///
    /// assert!(Url::can_parse("http://example.com"));
    /// assert!(!Url::can_parse("http://example.com:0/"));
    /// assert!(!Url::can_parse("not a url"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Serialize the current fields into a canonical URL string.
    /// Unlike [`Url::href`], this is never cached.
    pub fn format(&self) -> String {
        format_url(self)
    }

    /// Get the full URL, formatting it on first access
    pub fn href(&self) -> &str {
        self.href.get_or_init(|| self.format())
    }

    /// Assigning `href` has no effect.
    pub fn set_href(&mut self, _href: &str) {}

    /// Get the scheme without the trailing `:` (e.g. "http")
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the scheme type
    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.scheme)
    }

    /// Get the protocol (e.g. "http:")
    pub fn protocol(&self) -> String {
        let mut protocol = String::with_capacity(self.scheme.len() + 1);
        protocol.push_str(&self.scheme);
        protocol.push(':');
        protocol
    }

    /// Set the protocol; one trailing `:` is stripped
    pub fn set_protocol(&mut self, protocol: &str) {
        self.scheme = strip_protocol_colon(protocol);
    }

    /// Whether the URL was written with `//` after the scheme
    pub fn slashes(&self) -> bool {
        self.slashes
    }

    /// Set whether `//` follows the scheme
    pub fn set_slashes(&mut self, slashes: bool) {
        self.slashes = slashes;
    }

    /// Get the userinfo (`user[:pass]`), percent-decoded
    pub fn auth(&self) -> &str {
        &self.auth
    }

    /// Set the userinfo; it is percent-encoded again when formatted
    pub fn set_auth(&mut self, auth: &str) {
        self.auth = auth.to_string();
    }

    /// Get the host including port if present.
    /// Returns "example.com:8080" or "example.com"
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Set the host; an empty host makes the formatter fall back to hostname and port
    pub fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    /// Get the hostname (without port)
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Set the hostname without touching [`Url::host`]
    pub fn set_hostname(&mut self, hostname: &str) {
        self.hostname = hostname.to_string();
    }

    /// Get the port as a decimal string, or "" if absent
    pub fn port(&self) -> String {
        self.port.map(|port| port.to_string()).unwrap_or_default()
    }

    /// Get the port as a number
    pub fn port_number(&self) -> Option<u16> {
        self.port
    }

    /// Set the port from its leading decimal digits.
    /// Anything that does not yield a port in 1..=65535 clears it.
    /// [`Url::host`] is left unchanged.
    pub fn set_port(&mut self, port: &str) {
        self.port = parse_port_prefix(port);
    }

    /// Get the pathname
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Set the pathname; a missing leading `/` is added when formatted
    pub fn set_pathname(&mut self, pathname: &str) {
        self.pathname = pathname.to_string();
    }

    /// Get the search string (including leading `?`, or "")
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Set the search string; a missing leading `?` is added when formatted
    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// Get the query without the leading `?`.
    /// `None` means no query; `Some("")` means a bare `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Set the query, used by the formatter only while search is empty
    pub fn set_query(&mut self, query: Option<&str>) {
        self.query = query.map(ToString::to_string);
    }

    /// Get the hash/fragment (including leading `#`, or "")
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Set the hash; a missing leading `#` is added when formatted
    pub fn set_hash(&mut self, hash: &str) {
        self.hash = hash.to_string();
    }

    /// Get pathname + search
    pub fn path(&self) -> String {
        derive_canonical_path(&self.pathname, &self.search)
    }

    /// Assigning `path` has no effect.
    pub fn set_path(&mut self, _path: &str) {}
}

/// Compares components; the cached `href` is ignored.
impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.slashes == other.slashes
            && self.auth == other.auth
            && self.host == other.host
            && self.hostname == other.hostname
            && self.port == other.port
            && self.pathname == other.pathname
            && self.search == other.search
            && self.query == other.query
            && self.hash == other.hash
    }
}

impl Eq for Url {}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.href())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Url;

    use core::fmt;

    use serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{self, Visitor},
    };

    impl Serialize for Url {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.href())
        }
    }

    /// Parses a URL from a string.
    #[derive(Debug, Clone, Copy)]
    struct UrlVisitor;

    impl Visitor<'_> for UrlVisitor {
        type Value = Url;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a URL string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Url::parse(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Url {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(UrlVisitor)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let url = Url::default();
        assert_eq!(url.pathname(), "/");
        assert_eq!(url.query(), None);
        assert_eq!(url.port(), "");
        assert_eq!(url.protocol(), ":");
    }

    #[test]
    fn test_derive_host() {
        assert_eq!(derive_host("example.com", None), "example.com");
        assert_eq!(derive_host("example.com", Some(8080)), "example.com:8080");
    }

    #[test]
    fn test_derive_canonical_path() {
        assert_eq!(derive_canonical_path("/a", "?b"), "/a?b");
        assert_eq!(derive_canonical_path("/a", ""), "/a");
    }

    #[test]
    fn test_parse_bytes() {
        let url = Url::parse_bytes(b"http://example.com/").unwrap();
        assert_eq!(url.hostname(), "example.com");
        assert_eq!(
            Url::parse_bytes(b"http://\xFF/").unwrap_err(),
            ParseError::NotAString
        );
    }

    #[test]
    fn test_eq_ignores_cache() {
        let a = Url::parse("http://example.com/").unwrap();
        let b = Url::parse("http://example.com/").unwrap();
        let _ = a.href();
        assert_eq!(a, b);
    }
}
