//! Buffer clean-up run once before tokenizing.

/// Rewrite `\r\n` and lone `\r` as `\n` and drop form feeds. Returns the new
/// byte length, which is never larger than the old one.
pub fn normalize_line_endings(buffer: &mut String) -> usize {
    if !buffer.contains(['\r', '\x0c']) {
        return buffer.len();
    }
    let mut out = String::with_capacity(buffer.len());
    let mut chars = buffer.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            '\x0c' => {}
            c => out.push(c),
        }
    }
    *buffer = out;
    buffer.len()
}

/// False if any character is a control character other than
/// `\n`, `\r`, `\t` or form feed.
pub fn is_valid_text(buffer: &str) -> bool {
    buffer
        .chars()
        .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t' | '\x0c'))
}

/// [`is_valid_text`] for raw bytes; input that is not UTF-8 is invalid.
pub fn is_valid_bytes(bytes: &[u8]) -> bool {
    core::str::from_utf8(bytes).is_ok_and(is_valid_text)
}
