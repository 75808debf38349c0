use std::collections::BTreeSet;

use pretty_assertions::assert_eq;

use strata::graph::{ImportGraph, Layer, Route};

fn graph_with_edges(edges: &[(&str, &str)]) -> ImportGraph {
    let mut graph = ImportGraph::new();
    for (importer, imported) in edges {
        graph.add_import(importer, imported, None, None).unwrap();
    }
    graph
}

fn layers(names: &[&str]) -> Vec<Layer> {
    names.iter().map(|&name| Layer::single(name)).collect()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}

#[test]
fn test_illegal_dependencies_are_collected_into_routes() {
    let mut graph = graph_with_edges(&[
        // Conformant imports.
        ("high.green", "medium.orange"),
        ("high.green", "low.white"),
        ("medium.orange", "low.white"),
        ("low.white", "utils.printers"),
        // Two illegal chains from medium up to high.
        ("medium.orange", "tungsten"),
        ("tungsten", "copper"),
        ("copper", "high.green"),
        ("medium.orange.beta", "gold.delta"),
        ("gold.delta", "high.yellow"),
    ]);
    for module in ["high", "medium", "low"] {
        graph.add_module(module).unwrap();
    }

    let dependencies = graph
        .find_illegal_dependencies_for_layers(&layers(&["high", "medium", "low"]), &[])
        .unwrap();

    assert_eq!(dependencies.len(), 1);
    let dependency = &dependencies[0];
    assert_eq!(dependency.importer, "medium");
    assert_eq!(dependency.imported, "high");

    let routes: Vec<&Route> = dependency.routes.iter().collect();
    assert_eq!(routes.len(), 2);
    assert_eq!(
        dependency.routes,
        BTreeSet::from([
            Route {
                heads: set(&["medium.orange"]),
                middle: vec!["tungsten".to_owned(), "copper".to_owned()],
                tails: set(&["high.green"]),
            },
            Route {
                heads: set(&["medium.orange.beta"]),
                middle: vec!["gold.delta".to_owned()],
                tails: set(&["high.yellow"]),
            },
        ])
    );
}

#[test]
fn test_shared_middles_are_merged_into_one_route() {
    let mut graph = graph_with_edges(&[
        ("low.one", "shared"),
        ("low.two", "shared"),
        ("shared", "high.green"),
        ("shared", "high.yellow"),
    ]);
    graph.add_module("high").unwrap();
    graph.add_module("low").unwrap();

    let dependencies = graph
        .find_illegal_dependencies_for_layers(&layers(&["high", "low"]), &[])
        .unwrap();

    assert_eq!(dependencies.len(), 1);
    assert_eq!(
        dependencies[0].routes,
        BTreeSet::from([Route {
            heads: set(&["low.one", "low.two"]),
            middle: vec!["shared".to_owned()],
            tails: set(&["high.green", "high.yellow"]),
        }])
    );
}

#[test]
fn test_layers_within_containers() {
    let mut graph = graph_with_edges(&[
        ("mypackage.low.white", "mypackage.high.green"),
        ("otherpackage.high", "otherpackage.low"),
    ]);
    for module in ["mypackage", "mypackage.low", "mypackage.high", "otherpackage"] {
        graph.add_module(module).unwrap();
    }

    let dependencies = graph
        .find_illegal_dependencies_for_layers(
            &layers(&["high", "low"]),
            &["mypackage".to_owned(), "otherpackage".to_owned()],
        )
        .unwrap();

    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].importer, "mypackage.low");
    assert_eq!(dependencies[0].imported, "mypackage.high");
}

#[test]
fn test_sibling_layers_share_a_rank() {
    let mut graph = graph_with_edges(&[
        ("mypackage.utils", "mypackage.api"),
        ("mypackage.logging", "mypackage.utils"),
    ]);
    graph.add_module("mypackage").unwrap();

    // utils and logging are non-independent siblings at the bottom; only the
    // import up to api is illegal.
    let sibling_layers = vec![
        Layer::single("api"),
        Layer::new(["utils".to_owned(), "logging".to_owned()], false, false),
    ];
    let dependencies = graph
        .find_illegal_dependencies_for_layers(&sibling_layers, &["mypackage".to_owned()])
        .unwrap();

    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].importer, "mypackage.utils");
    assert_eq!(dependencies[0].imported, "mypackage.api");
}

#[test]
fn test_closed_layer_must_be_passed_through() {
    let mut graph = graph_with_edges(&[
        ("high.entry", "mid.service"),
        ("mid.service", "low.db"),
        // Bypasses mid.
        ("high.entry", "low.db"),
    ]);
    for module in ["high", "mid", "low"] {
        graph.add_module(module).unwrap();
    }
    let closed_layers = vec![
        Layer::single("high"),
        Layer::new(["mid".to_owned()], true, true),
        Layer::single("low"),
    ];

    let dependencies = graph
        .find_illegal_dependencies_for_layers(&closed_layers, &[])
        .unwrap();

    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0].importer, "high");
    assert_eq!(dependencies[0].imported, "low");
    assert_eq!(
        dependencies[0].routes,
        BTreeSet::from([Route {
            heads: set(&["high.entry"]),
            middle: vec![],
            tails: set(&["low.db"]),
        }])
    );
}
