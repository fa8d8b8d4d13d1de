//! Reduction of untrusted file names to a single safe path segment.
//!
//! Every store operation that accepts a caller-supplied name goes through
//! [`sanitize_file_name`] before touching the filesystem.

/// Characters treated as directory separators regardless of platform.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Reduces an untrusted name to a single path segment safe to join under a
/// store root.
///
/// Keeps only the text after the last `/` or `\`, drops NUL characters and
/// strips leading dots, so `.`, `..` and hidden names cannot survive.
/// Returns `None` when nothing usable is left.
///
/// # Examples
///
/// ```
/// use armory_core::naming::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("../../etc/passwd").as_deref(), Some("passwd"));
/// assert_eq!(sanitize_file_name("cat.png").as_deref(), Some("cat.png"));
/// assert_eq!(sanitize_file_name("../"), None);
/// ```
pub fn sanitize_file_name(raw: &str) -> Option<String> {
    let segment = raw.rsplit(SEPARATORS).next().unwrap_or_default();

    let cleaned: String = segment.chars().filter(|c| *c != '\0').collect();
    let name = cleaned.trim_start_matches('.');

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
