/// Check if a character is a C0 control or space
#[inline]
pub fn is_c0_control_or_space(c: char) -> bool {
    c as u32 <= 0x20
}

/// Trim leading/trailing C0 controls and space.
/// This is the only normalization applied before the scheme is scanned.
pub fn trim_c0_control_and_space(input: &str) -> &str {
    input.trim_matches(is_c0_control_or_space)
}

/// Whether `bytes[pos..]` starts with the `//` authority marker
#[inline]
pub fn has_authority_marker(bytes: &[u8], pos: usize) -> bool {
    bytes.get(pos..pos + 2) == Some(b"//")
}

/// Check if a byte starts a UTF-8 sequence (so it counts as one character)
#[inline]
pub fn is_char_start(b: u8) -> bool {
    b & 0xC0 != 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_c0_control_and_space() {
        assert_eq!(trim_c0_control_and_space("\t\nhello\r\n"), "hello");
        assert_eq!(trim_c0_control_and_space("hello"), "hello");
        assert_eq!(trim_c0_control_and_space("\t\n\r"), "");
        assert_eq!(trim_c0_control_and_space("  hello world  "), "hello world");
        assert_eq!(trim_c0_control_and_space("\u{0}x\u{1f}"), "x");
    }

    #[test]
    fn test_has_authority_marker() {
        assert!(has_authority_marker(b"http://a", 5));
        assert!(!has_authority_marker(b"http:/a", 5));
        assert!(!has_authority_marker(b"http:/", 5));
        assert!(!has_authority_marker(b"http:", 5));
    }

    #[test]
    fn test_is_char_start() {
        assert!(is_char_start(b'a'));
        assert!(is_char_start(0xE6));
        assert!(!is_char_start(0x97));
    }
}
