//! Path canonicalization and link-target classification.
//!
//! All paths in the store are slash-separated strings relative to the store
//! root. These helpers know nothing about the filesystem and never touch the
//! store.

/// Canonicalizes a slash-separated path by collapsing `.` and `..` segments.
///
/// Empty and `.` segments are dropped. A `..` segment pops the previously
/// pushed segment; leading or excess `..` segments are absorbed silently
/// rather than treated as an error, so the result never climbs above the
/// (implicit) root. The output never starts with a separator.
///
/// ```
/// use relroot::domain::canonicalize;
///
/// assert_eq!(canonicalize("a/./b/../c"), "a/c");
/// assert_eq!(canonicalize("../a"), "a");
/// ```
#[must_use]
pub fn canonicalize(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.trim().split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    stack.join("/")
}

/// Returns the base name of a path: the substring after the last `/`, or the
/// whole string when it contains no separator.
#[must_use]
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Classification of a raw link target, before any resolution is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The target starts with `./` or `../`.
    Relative,
    /// The target contains no path separator.
    BareName,
    /// A nested or extension-bearing path, interpreted relative to the
    /// resolving sub-root.
    Other,
}

impl LinkKind {
    /// Classifies a raw link target.
    ///
    /// The `Relative` check takes precedence, so `../x` is `Relative` even
    /// though it contains a separator.
    #[must_use]
    pub fn of(target: &str) -> Self {
        if target.starts_with("./") || target.starts_with("../") {
            Self::Relative
        } else if target.contains('/') {
            Self::Other
        } else {
            Self::BareName
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_collapses_dot_and_empty_segments() {
        assert_eq!(canonicalize("a/./b//c"), "a/b/c");
        assert_eq!(canonicalize("./a"), "a");
    }

    #[test]
    fn canonicalize_pops_on_parent_segments() {
        assert_eq!(canonicalize("a/b/../c"), "a/c");
        assert_eq!(canonicalize("a/b/../../c"), "c");
    }

    #[test]
    fn canonicalize_absorbs_excess_parent_segments() {
        assert_eq!(canonicalize("../a"), "a");
        assert_eq!(canonicalize("../../.."), "");
    }

    #[test]
    fn canonicalize_never_emits_a_leading_separator() {
        assert_eq!(canonicalize("/a/b"), "a/b");
    }

    #[test]
    fn canonicalize_trims_surrounding_whitespace() {
        assert_eq!(canonicalize("  a/b "), "a/b");
    }

    #[test]
    fn file_name_takes_the_last_segment() {
        assert_eq!(file_name("a/b/c.md"), "c.md");
        assert_eq!(file_name("c.md"), "c.md");
        assert_eq!(file_name("a/"), "");
    }

    #[test]
    fn classify_relative_prefixes() {
        assert_eq!(LinkKind::of("./note"), LinkKind::Relative);
        assert_eq!(LinkKind::of("../sub/note"), LinkKind::Relative);
    }

    #[test]
    fn classify_bare_names() {
        assert_eq!(LinkKind::of("note"), LinkKind::BareName);
        assert_eq!(LinkKind::of("note.md"), LinkKind::BareName);
    }

    #[test]
    fn classify_nested_paths_as_other() {
        assert_eq!(LinkKind::of("sub/note"), LinkKind::Other);
        assert_eq!(LinkKind::of("sub/deeper/note.md"), LinkKind::Other);
    }
}
