//! Property test generators for path grammars
//!
//! Strategies produce path text for both conventions: plain names, the
//! special `.`/`..` elements, separator runs and root names.

use proptest::prelude::*;

/// Generators for path text
pub struct PathGenerators;

impl PathGenerators {
    /// A name without separators, dots only inside
    pub fn name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,8}[a-zA-Z0-9_]|[a-zA-Z0-9_]"
    }

    /// A name, or one of the special `.` and `..` elements
    pub fn element() -> impl Strategy<Value = String> {
        prop_oneof![
            6 => Self::name(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
        ]
    }

    /// A run of one to three `/` separators
    pub fn posix_separator() -> impl Strategy<Value = String> {
        (1usize..=3).prop_map(|count| "/".repeat(count))
    }

    /// A run of one or two separators, each `/` or `\`
    pub fn windows_separator() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 1..=2)
            .prop_map(|separators| separators.into_iter().collect())
    }

    /// Elements joined by `separator` runs, with an optional leading and trailing run
    fn joined(
        separator: BoxedStrategy<String>,
    ) -> impl Strategy<Value = (Option<String>, Vec<(String, String)>, Option<String>)> {
        (
            prop::option::of(separator.clone()),
            prop::collection::vec((Self::element(), separator.clone()), 0..=5),
            prop::option::of(separator),
        )
    }

    fn assemble(
        root: String,
        (leading, elements, trailing): (Option<String>, Vec<(String, String)>, Option<String>),
    ) -> String {
        let mut text = root;
        text.push_str(&leading.unwrap_or_default());
        let count = elements.len();
        for (index, (element, separator)) in elements.into_iter().enumerate() {
            text.push_str(&element);
            if index + 1 < count {
                text.push_str(&separator);
            }
        }
        if count > 0 {
            text.push_str(&trailing.unwrap_or_default());
        }
        text
    }

    /// Any POSIX path text, including the empty path
    pub fn posix_path() -> impl Strategy<Value = String> {
        Self::joined(Self::posix_separator().boxed())
            .prop_map(|parts| Self::assemble(String::new(), parts))
    }

    /// A Windows root name: drive, UNC host or namespace prefix
    pub fn windows_root_name() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => Just(String::new()),
            3 => "[a-zA-Z]".prop_map(|letter| format!("{letter}:")),
            1 => Self::name().prop_map(|host| format!("//{host}")),
            1 => Self::name().prop_map(|host| format!(r"\\{host}")),
            1 => "[a-zA-Z]".prop_map(|letter| format!(r"\\?\{letter}:")),
        ]
    }

    /// Any Windows path text, including the empty path
    pub fn windows_path() -> impl Strategy<Value = String> {
        (
            Self::windows_root_name(),
            Self::joined(Self::windows_separator().boxed()),
        )
            .prop_map(|(root, parts)| Self::assemble(root, parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Generation, PosixPath, WindowsPath};

    proptest! {
        #[test]
        fn names_have_no_separators(name in PathGenerators::name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/') && !name.contains('\\'));
            prop_assert!(!name.starts_with('.') && !name.ends_with('.'));
        }

        #[test]
        fn spans_partition_posix_paths(text in PathGenerators::posix_path()) {
            let path = PosixPath::from(text.as_str());
            let spans = path.spans();
            prop_assert_eq!(spans.root_name.end, spans.root_directory.start);
            prop_assert_eq!(spans.root_directory.end, spans.relative_path.start);
            prop_assert_eq!(
                path.root_name().len() + path.root_directory().len() + path.relative_path().len(),
                path.len()
            );
        }

        #[test]
        fn spans_partition_windows_paths(text in PathGenerators::windows_path()) {
            let path = WindowsPath::from(text.as_str());
            prop_assert_eq!(
                path.root_name().len() + path.root_directory().len() + path.relative_path().len(),
                path.len()
            );
        }

        #[test]
        fn backward_iteration_mirrors_forward(text in PathGenerators::windows_path()) {
            let path = WindowsPath::from(text.as_str());
            for generation in [Generation::V3, Generation::V4] {
                let forward: Vec<_> = path.iter(generation).map(|e| e.to_path()).collect();
                let mut backward: Vec<_> = path.iter(generation).rev().map(|e| e.to_path()).collect();
                backward.reverse();
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
