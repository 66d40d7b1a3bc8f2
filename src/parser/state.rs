/// Scanner that takes over at a delimiter once the scheme and
/// authority have been consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Path state, entered on `/`
    Path,
    /// Query state, entered on `?`
    Query,
    /// Fragment state, entered on `#`
    Fragment,
}

impl State {
    /// Select the next scanner from the delimiter at the current position
    pub fn from_delimiter(b: u8) -> Option<Self> {
        match b {
            b'/' => Some(Self::Path),
            b'?' => Some(Self::Query),
            b'#' => Some(Self::Fragment),
            _ => None,
        }
    }
}
