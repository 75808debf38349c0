use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use strata::errors::StrataError;
use strata::graph::ImportGraph;

fn graph_with_edges(edges: &[(&str, &str)]) -> ImportGraph {
    let mut graph = ImportGraph::new();
    for (importer, imported) in edges {
        graph.add_import(importer, imported, None, None).unwrap();
    }
    graph
}

fn names(values: &[&str]) -> FxHashSet<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}

#[test]
fn test_added_imports_are_reflected_in_every_query() {
    let mut graph = ImportGraph::new();
    graph.add_import("mypackage.foo", "mypackage.bar", None, None).unwrap();

    assert!(graph.contains_module("mypackage.foo"));
    assert!(graph.contains_module("mypackage.bar"));
    assert!(
        graph
            .direct_import_exists("mypackage.foo", "mypackage.bar", false)
            .unwrap()
    );
    assert_eq!(
        graph
            .find_modules_directly_imported_by("mypackage.foo")
            .unwrap(),
        names(&["mypackage.bar"])
    );
    assert_eq!(
        graph
            .find_modules_that_directly_import("mypackage.bar")
            .unwrap(),
        names(&["mypackage.foo"])
    );
}

#[test]
fn test_find_shortest_chain_prefers_the_short_route() {
    let graph = graph_with_edges(&[
        ("a", "b"),
        ("b", "c"),
        ("a", "d"),
        ("d", "e"),
        ("e", "f"),
        ("f", "c"),
    ]);
    assert_eq!(
        graph.find_shortest_chain("a", "c", false).unwrap(),
        Some(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
    );
}

#[test]
fn test_find_shortest_chains_as_packages() {
    let mut graph = graph_with_edges(&[
        ("green.foo", "blue.foo"),
        ("green.baz", "y3"),
        ("y3", "y2"),
        ("y2", "y1"),
        ("y1", "blue.bar"),
    ]);
    graph.add_module("green").unwrap();
    graph.add_module("blue").unwrap();

    let chains = graph.find_shortest_chains("green", "blue", true).unwrap();
    let expected: FxHashSet<Vec<String>> = FxHashSet::from_iter([
        vec!["green.foo".to_owned(), "blue.foo".to_owned()],
        vec![
            "green.baz".to_owned(),
            "y3".to_owned(),
            "y2".to_owned(),
            "y1".to_owned(),
            "blue.bar".to_owned(),
        ],
    ]);
    assert_eq!(chains, expected);
}

#[test]
fn test_squashing_a_subpackage() {
    let mut graph = ImportGraph::new();
    graph.add_module("foo").unwrap();
    graph
        .add_import("foo.green", "bar.blue", Some(1), Some("import bar.blue"))
        .unwrap();
    graph
        .add_import("bar.blue", "foo", Some(3), Some("import foo"))
        .unwrap();

    graph.squash_module("foo").unwrap();

    let mut modules: Vec<String> = graph.modules().into_iter().collect();
    modules.sort();
    assert_eq!(modules, vec!["bar.blue", "foo"]);
    assert!(graph.direct_import_exists("foo", "bar.blue", false).unwrap());
    assert!(graph.direct_import_exists("bar.blue", "foo", false).unwrap());
    assert_eq!(graph.get_import_details("bar.blue", "foo").len(), 1);
    assert!(graph.get_import_details("foo", "bar.blue").is_empty());
}

#[test]
fn test_find_matching_modules() {
    let mut graph = ImportGraph::new();
    for module in ["pkg", "pkg.a", "pkg.a.b", "pkg.a.c", "pkg.a.c.d", "pkg.x", "pkg.x.y"] {
        graph.add_module(module).unwrap();
    }

    assert_eq!(
        graph.find_matching_modules("pkg.*.b").unwrap(),
        names(&["pkg.a.b"])
    );
    assert_eq!(
        graph.find_matching_modules("pkg.**").unwrap(),
        names(&["pkg.a", "pkg.a.b", "pkg.a.c", "pkg.a.c.d", "pkg.x", "pkg.x.y"])
    );
    assert!(matches!(
        graph.find_matching_modules("foo*"),
        Err(StrataError::InvalidModuleExpression(_))
    ));
}

#[test]
fn test_find_matching_direct_imports_returns_every_edge_once() {
    let mut graph = graph_with_edges(&[
        ("pkg.b", "pkg.c"),
        ("pkg.a", "pkg.b"),
    ]);
    graph
        .add_import("pkg.a", "pkg.b", Some(5), Some("from pkg import b"))
        .unwrap();

    assert_eq!(
        graph.find_matching_direct_imports("** -> **").unwrap(),
        vec![
            ("pkg.a".to_owned(), "pkg.b".to_owned()),
            ("pkg.b".to_owned(), "pkg.c".to_owned()),
        ]
    );
    assert_eq!(
        graph
            .find_matching_direct_imports("pkg.a -> pkg.*")
            .unwrap(),
        vec![("pkg.a".to_owned(), "pkg.b".to_owned())]
    );
    assert!(matches!(
        graph.find_matching_direct_imports("pkg.a"),
        Err(StrataError::InvalidImportExpression(_))
    ));
}

#[test]
fn test_count_imports_ignores_details() {
    let mut graph = ImportGraph::new();
    graph
        .add_import("a", "b", Some(1), Some("import b"))
        .unwrap();
    graph
        .add_import("a", "b", Some(7), Some("import b  # again"))
        .unwrap();
    assert_eq!(graph.count_imports(), 1);
    assert_eq!(graph.get_import_details("a", "b").len(), 2);
}

#[test]
fn test_deep_copy_independence() {
    let mut graph = graph_with_edges(&[("a", "b")]);
    let copied = graph.clone();

    graph.add_import("b", "c", None, None).unwrap();
    graph.remove_import("a", "b").unwrap();

    assert_eq!(copied.count_imports(), 1);
    assert!(copied.direct_import_exists("a", "b", false).unwrap());
    assert!(!copied.contains_module("c"));
}

#[test]
fn test_downstream_and_upstream_queries_agree_with_chains() {
    let graph = graph_with_edges(&[("a", "b"), ("b", "c"), ("d", "b")]);

    for module in ["a", "b", "c", "d"] {
        for other in ["a", "b", "c", "d"] {
            if module == other {
                continue;
            }
            let chain = graph.chain_exists(module, other, false).unwrap();
            let upstream = graph
                .find_upstream_modules(module, false)
                .unwrap()
                .contains(other);
            assert_eq!(chain, upstream, "{module} -> {other}");
        }
    }
}
