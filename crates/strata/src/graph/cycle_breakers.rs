//! Nomination of imports whose removal would make a package locally acyclic.
//!
//! The package's immediate children are projected into a small weighted
//! digraph, one counted edge per dependent child pair; imports involving the
//! package module itself are disregarded. A linear ordering is built by
//! peeling sources and sinks and then greedily extracting the node with the
//! highest weighted out-minus-in degree; edges pointing leftwards in that
//! ordering form the feedback set. The whole procedure is deterministic:
//! ties are broken alphabetically.

use petgraph::stable_graph::NodeIndex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::StrataResult;
use crate::module_name;

use super::ImportGraph;

type Projection = FxHashMap<NodeIndex, FxHashSet<NodeIndex>>;

impl ImportGraph {
    /// Identify a set of imports that, if removed, would leave the dependency
    /// graph between the package's children acyclic.
    ///
    /// Each nominated import is the lexicographically first of the underlying
    /// imports between the two child subtrees it stands for.
    pub fn nominate_cycle_breakers(
        &self,
        package: &str,
    ) -> StrataResult<FxHashSet<(String, String)>> {
        self.require_node(package)?;

        // The local graph is built over the immediate children only; imports
        // to or from the package module itself play no part.
        let children: Vec<NodeIndex> = self
            .node_indices()
            .filter(|&index| module_name::is_child_of(self.name_of(index), package))
            .collect();
        if children.len() < 2 {
            return Ok(FxHashSet::default());
        }

        // Map every module underneath a child to the child subtree
        // containing it.
        let mut projection_of: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        for &child in &children {
            for member in self.package_members(child) {
                projection_of.insert(member, child);
            }
        }

        // Count the dependencies between distinct projection nodes,
        // remembering a deterministic representative import for each.
        let mut weights: FxHashMap<(NodeIndex, NodeIndex), usize> = FxHashMap::default();
        let mut representatives: FxHashMap<(NodeIndex, NodeIndex), (String, String)> =
            FxHashMap::default();
        for importer_index in self.node_indices() {
            let Some(&importer_projection) = projection_of.get(&importer_index) else {
                continue;
            };
            for imported_index in self.successors(importer_index) {
                let Some(&imported_projection) = projection_of.get(&imported_index) else {
                    continue;
                };
                if importer_projection == imported_projection {
                    continue;
                }
                let key = (importer_projection, imported_projection);
                *weights.entry(key).or_default() += 1;
                let candidate = (
                    self.name_of(importer_index).to_owned(),
                    self.name_of(imported_index).to_owned(),
                );
                let representative = representatives.entry(key).or_insert_with(|| candidate.clone());
                if candidate < *representative {
                    *representative = candidate;
                }
            }
        }

        let mut imports: Projection = children
            .iter()
            .map(|&node| (node, FxHashSet::default()))
            .collect();
        let mut reverse_imports: Projection = imports.clone();
        for &(importer, imported) in weights.keys() {
            imports.get_mut(&importer).unwrap().insert(imported);
            reverse_imports.get_mut(&imported).unwrap().insert(importer);
        }

        let ordering = self.order_for_feedback(&imports, &reverse_imports, &weights);
        let position: FxHashMap<NodeIndex, usize> = ordering
            .iter()
            .enumerate()
            .map(|(position, &node)| (node, position))
            .collect();

        // Any dependency pointing leftwards in the ordering is a breaker.
        let mut cycle_breakers = FxHashSet::default();
        for &(importer, imported) in weights.keys() {
            if position[&imported] < position[&importer] {
                cycle_breakers.insert(representatives[&(importer, imported)].clone());
            }
        }
        Ok(cycle_breakers)
    }

    /// Order the projection nodes so that as much dependency weight as
    /// possible points rightwards.
    fn order_for_feedback(
        &self,
        imports: &Projection,
        reverse_imports: &Projection,
        weights: &FxHashMap<(NodeIndex, NodeIndex), usize>,
    ) -> Vec<NodeIndex> {
        let mut working_imports = imports.clone();
        let mut working_reverse_imports = reverse_imports.clone();

        // Iteratively peel sources to the front...
        let mut sources: Vec<NodeIndex> = vec![];
        loop {
            let mut current_sources: Vec<NodeIndex> = working_reverse_imports
                .iter()
                .filter(|(_, importers)| importers.is_empty())
                .map(|(&source, _)| source)
                .collect();
            if current_sources.is_empty() {
                break;
            }
            current_sources.sort_by_key(|&node| self.name_of(node));
            for &source in &current_sources {
                remove_projection_node(source, &mut working_imports, &mut working_reverse_imports);
            }
            sources.extend(current_sources);
        }

        // ...and sinks to the back. Each batch of new sinks depends on the
        // previously found ones, so it goes earlier in the tail.
        let mut sinks: Vec<NodeIndex> = vec![];
        loop {
            let mut new_sinks: Vec<NodeIndex> = working_imports
                .iter()
                .filter(|(_, importeds)| importeds.is_empty())
                .map(|(&sink, _)| sink)
                .collect();
            if new_sinks.is_empty() {
                break;
            }
            new_sinks.sort_by_key(|&node| self.name_of(node));
            for &sink in &new_sinks {
                remove_projection_node(sink, &mut working_imports, &mut working_reverse_imports);
            }
            sinks.splice(0..0, new_sinks);
        }

        // Whatever remains is cyclic; extract greedily by weighted
        // out-degree minus in-degree, alphabetically on ties.
        let mut middle: Vec<NodeIndex> = vec![];
        while !working_imports.is_empty() {
            let best = working_imports
                .keys()
                .map(|&candidate| {
                    let difference = degree_difference(
                        candidate,
                        &working_imports,
                        &working_reverse_imports,
                        weights,
                    );
                    (candidate, difference)
                })
                .min_by(|(a, difference_a), (b, difference_b)| {
                    // Highest difference first, then alphabetical.
                    difference_b
                        .cmp(difference_a)
                        .then_with(|| self.name_of(*a).cmp(self.name_of(*b)))
                })
                .map(|(candidate, _)| candidate)
                .expect("non-empty working graph");

            middle.push(best);
            remove_projection_node(best, &mut working_imports, &mut working_reverse_imports);
        }

        sources.into_iter().chain(middle).chain(sinks).collect()
    }
}

fn remove_projection_node(
    node: NodeIndex,
    imports: &mut Projection,
    reverse_imports: &mut Projection,
) {
    imports.remove(&node);
    for importeds in imports.values_mut() {
        importeds.remove(&node);
    }
    reverse_imports.remove(&node);
    for importers in reverse_imports.values_mut() {
        importers.remove(&node);
    }
}

/// Weighted out-degree minus in-degree within the working projection.
fn degree_difference(
    node: NodeIndex,
    imports: &Projection,
    reverse_imports: &Projection,
    weights: &FxHashMap<(NodeIndex, NodeIndex), usize>,
) -> isize {
    let outdegree: isize = imports[&node]
        .iter()
        .map(|&imported| weights[&(node, imported)] as isize)
        .sum();
    let indegree: isize = reverse_imports[&node]
        .iter()
        .map(|&importer| weights[&(importer, node)] as isize)
        .sum();
    outdegree - indegree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_edges(edges: &[(&str, &str)]) -> ImportGraph {
        let mut graph = ImportGraph::new();
        for (importer, imported) in edges {
            graph.add_import(importer, imported, None, None).unwrap();
        }
        graph
    }

    #[test]
    fn test_acyclic_package_has_no_breakers() {
        let mut graph = graph_with_edges(&[
            ("pkg.a", "pkg.b"),
            ("pkg.b", "pkg.c"),
            ("pkg.a", "pkg.c"),
        ]);
        graph.add_module("pkg").unwrap();
        assert!(graph.nominate_cycle_breakers("pkg").unwrap().is_empty());
    }

    #[test]
    fn test_simple_two_module_cycle() {
        // a -> b twice, b -> a once: breaking the lighter edge wins.
        let mut graph = graph_with_edges(&[
            ("pkg.a.one", "pkg.b.one"),
            ("pkg.a.two", "pkg.b.two"),
            ("pkg.b.one", "pkg.a.one"),
        ]);
        for module in ["pkg", "pkg.a", "pkg.b"] {
            graph.add_module(module).unwrap();
        }

        let breakers = graph.nominate_cycle_breakers("pkg").unwrap();
        assert_eq!(
            breakers,
            FxHashSet::from_iter([("pkg.b.one".to_owned(), "pkg.a.one".to_owned())])
        );
    }

    #[test]
    fn test_breakers_leave_children_acyclic() {
        let mut graph = graph_with_edges(&[
            ("pkg.a", "pkg.b"),
            ("pkg.b", "pkg.c"),
            ("pkg.c", "pkg.a"),
            ("pkg.c", "pkg.d"),
        ]);
        graph.add_module("pkg").unwrap();

        let breakers = graph.nominate_cycle_breakers("pkg").unwrap();
        assert_eq!(breakers.len(), 1);

        let mut without_breakers = graph.clone();
        for (importer, imported) in &breakers {
            without_breakers.remove_import(importer, imported).unwrap();
        }
        // No chain may now run from any child back to itself.
        for child in ["pkg.a", "pkg.b", "pkg.c", "pkg.d"] {
            assert!(
                without_breakers
                    .find_shortest_cycle(child, false)
                    .unwrap()
                    .is_none()
            );
        }
    }

    #[test]
    fn test_representative_is_lexicographic() {
        // Two underlying imports in each direction between subtrees a and b.
        let mut graph = graph_with_edges(&[
            ("pkg.a.zulu", "pkg.b.one"),
            ("pkg.a.alpha", "pkg.b.two"),
            ("pkg.b.zulu", "pkg.a.one"),
            ("pkg.b.alpha", "pkg.a.two"),
        ]);
        for module in ["pkg", "pkg.a", "pkg.b"] {
            graph.add_module(module).unwrap();
        }

        let breakers = graph.nominate_cycle_breakers("pkg").unwrap();
        assert_eq!(breakers.len(), 1);
        let (importer, imported) = breakers.into_iter().next().unwrap();
        // Whichever direction is nominated, it is the alphabetically first
        // underlying import of that direction.
        assert!(importer.ends_with("alpha"), "{importer} -> {imported}");
    }

    #[test]
    fn test_imports_between_passed_package_and_children_are_disregarded() {
        // The package __init__ imports its only child, which imports it
        // back. With a single child there is no sibling cycle to break.
        let graph = graph_with_edges(&[("pkg", "pkg.a"), ("pkg.a", "pkg")]);
        assert_eq!(
            graph.nominate_cycle_breakers("pkg").unwrap(),
            FxHashSet::default()
        );

        // With two children, imports involving the package module still play
        // no part in the nomination.
        let graph = graph_with_edges(&[
            ("pkg", "pkg.a"),
            ("pkg.b", "pkg"),
            ("pkg.a", "pkg.b"),
            ("pkg.b", "pkg.a"),
            ("pkg.a", "pkg.b.extra"),
        ]);
        assert_eq!(
            graph.nominate_cycle_breakers("pkg").unwrap(),
            FxHashSet::from_iter([("pkg.b".to_owned(), "pkg.a".to_owned())])
        );
    }

    #[test]
    fn test_determinism() {
        let edges = [
            ("pkg.a", "pkg.b"),
            ("pkg.b", "pkg.c"),
            ("pkg.c", "pkg.a"),
            ("pkg.b", "pkg.a"),
            ("pkg.c", "pkg.b"),
        ];
        let mut first = graph_with_edges(&edges);
        first.add_module("pkg").unwrap();
        let expected = first.nominate_cycle_breakers("pkg").unwrap();
        for _ in 0..5 {
            let mut graph = graph_with_edges(&edges);
            graph.add_module("pkg").unwrap();
            assert_eq!(graph.nominate_cycle_breakers("pkg").unwrap(), expected);
        }
    }
}
