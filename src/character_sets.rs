use crate::compat::{Cow, String};

/// Characters that are always percent-escaped in path, query and fragment output.
const AUTO_ESCAPE: [(u8, &str); 14] = [
    (b'\t', "%09"),
    (b'\n', "%0A"),
    (b'\r', "%0D"),
    (b' ', "%20"),
    (b'"', "%22"),
    (b'\'', "%27"),
    (b'<', "%3C"),
    (b'>', "%3E"),
    (b'\\', "%5C"),
    (b'^', "%5E"),
    (b'`', "%60"),
    (b'{', "%7B"),
    (b'|', "%7C"),
    (b'}', "%7D"),
];

/// Escape sequence for every ASCII code point, empty when the byte passes through.
const AUTO_ESCAPE_MAP: [&str; 128] = {
    let mut table = [""; 128];

    let mut i = 0;
    while i < AUTO_ESCAPE.len() {
        let (byte, escaped) = AUTO_ESCAPE[i];
        table[byte as usize] = escaped;
        i += 1;
    }

    table
};

/// Characters that end the authority section: `#`, `/`, `?`
const HOST_ENDING_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    table[b'#' as usize] = true;
    table[b'/' as usize] = true;
    table[b'?' as usize] = true;
    table
};

/// Escape sequence for `b`, if it belongs to the auto-escape set.
#[inline]
pub fn auto_escape(b: u8) -> Option<&'static str> {
    AUTO_ESCAPE_MAP
        .get(b as usize)
        .copied()
        .filter(|escaped| !escaped.is_empty())
}

/// Check if a byte must be escaped in path/query/fragment output
#[inline]
pub fn needs_escape(b: u8) -> bool {
    auto_escape(b).is_some()
}

/// Check if a byte terminates the authority section
#[inline]
pub fn is_host_ending(b: u8) -> bool {
    HOST_ENDING_TABLE.get(b as usize).copied().unwrap_or(false)
}

/// Replace every auto-escape character in `input` with its escape sequence.
/// Borrows when nothing needs escaping.
pub fn escape_component(input: &str) -> Cow<'_, str> {
    if !input.bytes().any(needs_escape) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(escape_into_new(input))
}

/// Copy runs between escaped characters, substituting each escape sequence.
pub fn escape_into_new(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut run_start = 0;

    for (i, b) in input.bytes().enumerate() {
        if let Some(escaped) = auto_escape(b) {
            out.push_str(&input[run_start..i]);
            out.push_str(escaped);
            run_start = i + 1;
        }
    }
    out.push_str(&input[run_start..]);
    out
}
