/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not a string (bytes are not valid UTF-8)
    NotAString,
    /// Missing scheme separator, or scheme outside `[a-z.+-]+`
    InvalidProtocol,
    /// Invalid host format
    InvalidHost,
    /// Invalid port number
    InvalidPort,
    /// Trailing content that does not start a path, query or fragment
    UnexpectedCharacter,
    /// Invalid percent encoding
    InvalidPercentEncoding,
    /// IDNA processing error
    IdnaError,
}

impl ParseError {
    /// Whether this is a syntax error (everything except [`ParseError::NotAString`]).
    pub fn is_syntax_error(self) -> bool {
        self != Self::NotAString
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::NotAString => "Input is not a string",
            Self::InvalidProtocol => "Invalid protocol",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::UnexpectedCharacter => "Unexpected character",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::IdnaError => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
