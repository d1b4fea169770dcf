//! Filesystem-safe note filenames.

/// Punctuation allowed in a sanitized note name, besides ASCII letters.
const ALLOWED_PUNCTUATION: &[char] = &[' ', '.', '-', '_', '\''];

/// Strips a user-entered note name down to a filesystem-safe string.
///
/// - Trims leading/trailing whitespace
/// - Keeps only ASCII letters (either case), space, `.`, `-`, `_` and `'`
/// - Drops every other character without a replacement
/// - Trims again, so dropped characters never leave edge whitespace
///
/// The result may be empty; callers must reject an empty name.
///
/// # Examples
///
/// ```
/// use notebag::domain::sanitize;
///
/// assert_eq!(sanitize("My Note!! #1"), "My Note");
/// assert_eq!(sanitize("  Bob's to-do_list.v2 "), "Bob's to-do_list.v");
/// assert_eq!(sanitize("#42"), "");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || ALLOWED_PUNCTUATION.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
