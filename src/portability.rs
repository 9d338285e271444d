//! Portable filename checks
//!
//! Predicates over a single filename (one path element, not a whole path).
//! Paths themselves accept any name; these checks are for callers that want
//! names to survive a trip between platforms.

const WINDOWS_INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const WINDOWS_RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

fn is_dot_name(name: &str) -> bool {
    name == "." || name == ".."
}

/// Whether `name` is a valid Windows filename
///
/// Rejects control characters, any of `<>:"/\|?*`, a trailing space or dot
/// (except for `.` and `..`) and reserved device names such as `CON` or
/// `lpt1.txt`.
///
/// # Examples
/// ```
/// use lexical_path::portability::windows_name;
///
/// assert!(windows_name("report 2024.txt"));
/// assert!(!windows_name("a:b"));
/// assert!(!windows_name("trailing."));
/// assert!(!windows_name("Prn.log"));
/// ```
pub fn windows_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name
        .chars()
        .any(|c| c.is_ascii_control() || WINDOWS_INVALID_CHARS.contains(&c))
    {
        return false;
    }
    if !is_dot_name(name) && (name.ends_with(' ') || name.ends_with('.')) {
        return false;
    }

    let base = name.split('.').next().unwrap_or_default().to_ascii_uppercase();
    !WINDOWS_RESERVED_NAMES.contains(&base.as_str())
}

/// Whether `name` uses only the POSIX portable filename character set
pub fn portable_posix_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Whether `name` is valid on both Windows and POSIX and does not start with `.` or `-`
///
/// `.` and `..` are accepted.
pub fn portable_name(name: &str) -> bool {
    windows_name(name)
        && portable_posix_name(name)
        && (is_dot_name(name) || !(name.starts_with('.') || name.starts_with('-')))
}

/// A [`portable_name`] without any dot, or `.`/`..`
pub fn portable_directory_name(name: &str) -> bool {
    is_dot_name(name) || (portable_name(name) && !name.contains('.'))
}

/// A [`portable_name`] with at most one dot, followed by at most three characters
///
/// # Examples
/// ```
/// use lexical_path::portability::portable_file_name;
///
/// assert!(portable_file_name("main.rs"));
/// assert!(portable_file_name("README"));
/// assert!(!portable_file_name("archive.tar.gz"));
/// assert!(!portable_file_name("notes.markdown"));
/// ```
pub fn portable_file_name(name: &str) -> bool {
    if !portable_name(name) || is_dot_name(name) {
        return false;
    }
    match name.split_once('.') {
        None => true,
        Some((_, extension)) => !extension.contains('.') && extension.len() <= 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_name() {
        // Valid names
        assert!(windows_name("file.txt"));
        assert!(windows_name("with space"));
        assert!(windows_name("."));
        assert!(windows_name(".."));
        assert!(windows_name("CONSOLE"));
        assert!(windows_name("émigré"));

        // Invalid names
        assert!(!windows_name(""));
        assert!(!windows_name("file\0null"));
        assert!(!windows_name("tab\there"));
        assert!(!windows_name("a|b"));
        assert!(!windows_name("a/b"));
        assert!(!windows_name("dir "));
        assert!(!windows_name("CON"));
        assert!(!windows_name("con.txt"));
        assert!(!windows_name("COM9.tar.gz"));
    }

    #[test]
    fn test_portable_posix_name() {
        assert!(portable_posix_name("a-b_c.d"));
        assert!(portable_posix_name("-leading"));
        assert!(!portable_posix_name(""));
        assert!(!portable_posix_name("with space"));
        assert!(!portable_posix_name("émigré"));
    }

    #[test]
    fn test_portable_name() {
        assert!(portable_name("foo.bar"));
        assert!(portable_name("."));
        assert!(portable_name(".."));
        assert!(!portable_name(".hidden"));
        assert!(!portable_name("-flag"));
        assert!(!portable_name("aux"));
        assert!(!portable_name("a b"));
    }

    #[test]
    fn test_portable_directory_and_file_names() {
        assert!(portable_directory_name("src"));
        assert!(portable_directory_name(".."));
        assert!(!portable_directory_name("src.d"));

        assert!(portable_file_name("a.txt"));
        assert!(!portable_file_name("a."));
        assert!(portable_file_name("abc"));
        assert!(!portable_file_name("."));
        assert!(!portable_file_name("a.b.c"));
        assert!(!portable_file_name("a.html"));
    }
}
