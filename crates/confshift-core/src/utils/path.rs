//! Path utilities for format detection.

use camino::Utf8Path;

/// Get the lowercased text after the last `.` of the whole path.
///
/// Unlike [`Utf8Path::extension`] this also treats dot-files such as
/// `.yaml` as having an extension, and a path without any `.` yields its
/// full text.
pub fn get_extension(path: &Utf8Path) -> String {
    path.as_str()
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
