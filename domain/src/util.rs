//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Take the first `max_chars` characters of `s`.
///
/// Unlike [`truncate_str`] this counts characters, not bytes, so a CJK
/// résumé and an ASCII one get the same budget.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
