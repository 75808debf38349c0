use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use strata::builder::{BuildOptions, build_graph};
use strata::errors::StrataError;
use strata::graph::ImportGraph;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn no_cache_options() -> BuildOptions {
    BuildOptions {
        use_cache: false,
        ..BuildOptions::default()
    }
}

fn build(root: &Path, packages: &[&str], options: &BuildOptions) -> ImportGraph {
    let packages: Vec<String> = packages.iter().map(|&name| name.to_owned()).collect();
    build_graph(&packages, &[root.to_path_buf()], options).unwrap()
}

#[test]
fn test_build_and_query_a_small_package() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    write(
        &root.join("foo/one.py"),
        "import foo.two\nimport externalone\n",
    );
    write(&root.join("foo/two.py"), "");

    let graph = build(root, &["foo"], &no_cache_options());

    let mut modules: Vec<String> = graph.modules().into_iter().collect();
    modules.sort();
    assert_eq!(modules, vec!["foo", "foo.one", "foo.two"]);
    assert!(graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
    assert_eq!(graph.count_imports(), 1);

    let details = graph.get_import_details("foo.one", "foo.two");
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].line_number, 1);
    assert_eq!(details[0].line_contents, "import foo.two");
}

#[test]
fn test_external_packages_are_included_as_squashed_when_requested() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    write(
        &root.join("foo/one.py"),
        "import foo.two\nimport externalone\n",
    );
    write(&root.join("foo/two.py"), "");

    let options = BuildOptions {
        include_external_packages: true,
        ..no_cache_options()
    };
    let graph = build(root, &["foo"], &options);

    assert!(graph.contains_module("externalone"));
    assert!(graph.is_module_squashed("externalone").unwrap());
    assert!(
        graph
            .direct_import_exists("foo.one", "externalone", false)
            .unwrap()
    );

    let details = graph.get_import_details("foo.one", "externalone");
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].line_number, 2);
    assert_eq!(details[0].line_contents, "import externalone");
}

#[test]
fn test_relative_import_in_package_init() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    write(
        &root.join("foo/one/__init__.py"),
        "from .yellow import my_function\n",
    );
    write(&root.join("foo/one/yellow.py"), "def my_function(): pass\n");

    let graph = build(root, &["foo"], &no_cache_options());

    assert!(
        graph
            .direct_import_exists("foo.one", "foo.one.yellow", false)
            .unwrap()
    );
    let details = graph.get_import_details("foo.one", "foo.one.yellow");
    assert_eq!(details[0].line_contents, "from .yellow import my_function");
}

#[test]
fn test_multiple_roots_with_cross_imports() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("green/__init__.py"), "");
    write(&root.join("green/api.py"), "from blue import engine\n");
    write(&root.join("blue/__init__.py"), "");
    write(&root.join("blue/engine.py"), "");

    let graph = build(root, &["green", "blue"], &no_cache_options());

    assert!(
        graph
            .direct_import_exists("green.api", "blue.engine", false)
            .unwrap()
    );
    assert!(graph.chain_exists("green", "blue", true).unwrap());
}

#[test]
fn test_namespace_portions_as_roots() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    // `ns` has no __init__.py: ns.red and ns.blue are portions.
    write(&root.join("ns/red/__init__.py"), "");
    write(&root.join("ns/red/one.py"), "from ns.blue import two\n");
    write(&root.join("ns/blue/__init__.py"), "");
    write(&root.join("ns/blue/two.py"), "");

    let graph = build(root, &["ns.red", "ns.blue"], &no_cache_options());

    assert!(
        graph
            .direct_import_exists("ns.red.one", "ns.blue.two", false)
            .unwrap()
    );
}

#[test]
fn test_external_module_sharing_a_namespace_is_distilled() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("ns/blue/__init__.py"), "");
    write(
        &root.join("ns/blue/one.py"),
        "import ns.green.alpha.deep\nimport django.db.models\n",
    );

    let options = BuildOptions {
        include_external_packages: true,
        ..no_cache_options()
    };
    let graph = build(root, &["ns.blue"], &options);

    // A sibling portion is kept one component below the shared namespace;
    // an unrelated external package is distilled to its root.
    assert!(graph.contains_module("ns.green"));
    assert!(!graph.contains_module("ns.green.alpha"));
    assert!(graph.contains_module("django"));
    assert!(!graph.contains_module("django.db"));
}

#[test]
fn test_syntax_error_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    write(&root.join("foo/bad.py"), "import foo\ndef broken(:\n");

    let packages = vec!["foo".to_owned()];
    let result = build_graph(&packages, &[root.to_path_buf()], &no_cache_options());
    match result {
        Err(StrataError::SourceSyntaxError { filename, line, .. }) => {
            assert!(filename.ends_with("bad.py"));
            assert_eq!(line, 2);
        }
        other => panic!("expected SourceSyntaxError, got {other:?}"),
    }
}

#[test]
fn test_namespace_package_root_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/one.py"), "");

    let packages = vec!["foo".to_owned()];
    let result = build_graph(&packages, &[root.to_path_buf()], &no_cache_options());
    assert!(matches!(
        result,
        Err(StrataError::NamespacePackageEncountered(_))
    ));
}

#[test]
fn test_type_checking_imports_can_be_excluded_from_the_build() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    write(
        &root.join("foo/one.py"),
        "from typing import TYPE_CHECKING\n\nif TYPE_CHECKING:\n    import foo.two\n",
    );
    write(&root.join("foo/two.py"), "");

    let graph = build(root, &["foo"], &no_cache_options());
    assert!(graph.direct_import_exists("foo.one", "foo.two", false).unwrap());

    let options = BuildOptions {
        exclude_type_checking_imports: true,
        ..no_cache_options()
    };
    let graph = build(root, &["foo"], &options);
    assert!(!graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
}

#[test]
fn test_imports_nested_in_functions_are_found() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    write(
        &root.join("foo/one.py"),
        "def lazy():\n    import foo.two\n    return foo.two\n",
    );
    write(&root.join("foo/two.py"), "");

    let graph = build(root, &["foo"], &no_cache_options());
    assert!(graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
    assert_eq!(
        graph.get_import_details("foo.one", "foo.two")[0].line_number,
        2
    );
}

#[test]
fn test_latin1_encoded_source() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(&root.join("foo/__init__.py"), "");
    fs::write(
        root.join("foo/one.py"),
        b"# -*- coding: latin-1 -*-\nimport foo.two  # caf\xe9\n",
    )
    .unwrap();
    write(&root.join("foo/two.py"), "");

    let graph = build(root, &["foo"], &no_cache_options());
    assert!(graph.direct_import_exists("foo.one", "foo.two", false).unwrap());
}
