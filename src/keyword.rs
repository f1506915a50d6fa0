//! Pad-group keyword classification of configuration lines.

/// Returns the first keyword, in the order given, that occurs anywhere in `line`.
///
/// Order matters when keywords overlap (`"VGPIO_USB"` and `"VGPIO"`): callers list the most
/// specific keyword first.
pub fn keywords_check<'k>(line: &str, keywords: &[&'k str]) -> Option<&'k str> {
  keywords.iter().copied().find(|k| line.contains(*k))
}

/// Whether any of `keywords` occurs in `line`.
pub fn contains_any(line: &str, keywords: &[&str]) -> bool {
  keywords_check(line, keywords).is_some()
}
