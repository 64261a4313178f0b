//! String utilities for the domain layer.

/// Keep at most `max_chars` characters of `s`.
///
/// Counts Unicode scalar values rather than bytes, so phrases written in
/// scripts with multi-byte characters keep the same visible budget.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Trim surrounding whitespace, returning `None` when nothing is left.
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
