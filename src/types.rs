/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ftp,
    File,
    Gopher,
    Javascript,
    #[default]
    Other,
}

impl SchemeType {
    /// Check if this scheme is always serialized with `//`
    pub fn requires_slashes(self) -> bool {
        matches!(
            self,
            Self::Http | Self::Https | Self::Ftp | Self::File | Self::Gopher
        )
    }

    /// Check if an authority section may follow the scheme
    pub fn has_authority(self) -> bool {
        self != Self::Javascript
    }
}
