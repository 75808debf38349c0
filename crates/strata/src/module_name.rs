//! Algebra over dotted module names.
//!
//! Module names are plain strings of the form `"a.b.c"`. Nothing here touches
//! the graph; these helpers are shared by the scanner, the graph and the
//! layer analyzer.

/// `foo.bar.baz -> Some("foo.bar")`, `foo -> None`.
pub fn parent(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(base, _)| base)
}

/// The first component: `foo.bar.baz -> foo`.
pub fn root(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Whether `name` lies strictly below `potential_ancestor` in the hierarchy.
pub fn is_descendant_of(name: &str, potential_ancestor: &str) -> bool {
    name.len() > potential_ancestor.len() + 1
        && name.starts_with(potential_ancestor)
        && name.as_bytes()[potential_ancestor.len()] == b'.'
}

/// Whether `name` is an immediate child of `potential_parent`.
pub fn is_child_of(name: &str, potential_parent: &str) -> bool {
    parent(name) == Some(potential_parent)
}

/// `foo.bar.baz -> [foo.bar.baz, foo.bar, foo]`.
pub fn self_and_ancestors(name: &str) -> Vec<&str> {
    let mut names = vec![name];
    while let Some(parent_name) = parent(names[names.len() - 1]) {
        names.push(parent_name);
    }
    names
}

/// Join a base and a leaf into a dotted name, tolerating an empty base.
pub fn join(base: &str, leaf: &str) -> String {
    if base.is_empty() {
        leaf.to_owned()
    } else {
        format!("{base}.{leaf}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent() {
        assert_eq!(parent("foo.bar.baz"), Some("foo.bar"));
        assert_eq!(parent("foo"), None);
    }

    #[test]
    fn test_root() {
        assert_eq!(root("foo.bar.baz"), "foo");
        assert_eq!(root("foo"), "foo");
    }

    #[test]
    fn test_is_descendant_of() {
        assert!(is_descendant_of("foo.bar.baz", "foo"));
        assert!(is_descendant_of("foo.bar.baz", "foo.bar"));
        assert!(!is_descendant_of("foo.bar.baz", "foo.bar.baz"));
        assert!(!is_descendant_of("foobar.baz", "foo"));
        assert!(!is_descendant_of("foo", "foo.bar"));
    }

    #[test]
    fn test_is_child_of() {
        assert!(is_child_of("foo.bar", "foo"));
        assert!(!is_child_of("foo.bar.baz", "foo"));
        assert!(!is_child_of("foo", "foo"));
    }

    #[test]
    fn test_self_and_ancestors() {
        assert_eq!(
            self_and_ancestors("foo.bar.baz"),
            vec!["foo.bar.baz", "foo.bar", "foo"]
        );
        assert_eq!(self_and_ancestors("foo"), vec!["foo"]);
    }
}
