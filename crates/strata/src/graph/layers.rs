//! Layered-architecture analysis.
//!
//! 'Layers' is an architectural pattern in which an ordered list of
//! modules/packages have a dependency direction from high to low: a higher
//! layer may import a lower layer, but not the other way around. Sibling
//! modules can share a layer; independent layers forbid imports between
//! siblings too. A closed layer may not be bypassed: chains from a higher
//! layer to a lower one must pass through it.

use std::collections::BTreeSet;

use itertools::Itertools;
use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;

use crate::errors::{StrataError, StrataResult};
use crate::module_name;

use super::ImportGraph;

/// One rank in a layered architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Module name suffixes (relative to a container, if any). Multiple
    /// tails are siblings at the same rank.
    pub module_tails: Vec<String>,
    /// Whether sibling modules within the layer may import each other.
    pub independent: bool,
    /// Whether chains from higher to lower layers must pass through this one.
    pub closed: bool,
}

impl Layer {
    pub fn new<T: Into<String>>(
        module_tails: impl IntoIterator<Item = T>,
        independent: bool,
        closed: bool,
    ) -> Self {
        Self {
            module_tails: module_tails.into_iter().map(Into::into).collect(),
            independent,
            closed,
        }
    }

    /// A single-module, independent, open layer.
    pub fn single(module_tail: impl Into<String>) -> Self {
        Self::new([module_tail.into()], true, false)
    }
}

/// A family of import chains that share the same interior. An empty `middle`
/// stands for the direct imports `heads` x `tails`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route {
    pub heads: BTreeSet<String>,
    pub middle: Vec<String>,
    pub tails: BTreeSet<String>,
}

/// An illegal dependency from one layer package to another, with every route
/// the imports take.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageDependency {
    pub importer: String,
    pub imported: String,
    pub routes: BTreeSet<Route>,
}

/// A layer module resolved against a container and checked for presence.
#[derive(Debug, Clone)]
struct ResolvedLayer {
    modules: Vec<String>,
    independent: bool,
    closed: bool,
}

impl ImportGraph {
    /// Find dependencies that don't conform to the supplied layered
    /// architecture.
    ///
    /// The `layers` are ordered from higher to lower. Layer modules that
    /// don't exist in the graph are ignored. If `containers` are given, the
    /// whole analysis runs once per container with the layer tails resolved
    /// beneath it.
    ///
    /// Returns one `PackageDependency` per offending pair of layer modules,
    /// sorted; an empty result means the graph conforms.
    pub fn find_illegal_dependencies_for_layers(
        &self,
        layers: &[Layer],
        containers: &[String],
    ) -> StrataResult<Vec<PackageDependency>> {
        for container in containers {
            if !self.contains_module(container) {
                return Err(StrataError::NoSuchContainer(container.clone()));
            }
        }

        let quasi_containers: Vec<Option<&str>> = if containers.is_empty() {
            vec![None]
        } else {
            containers.iter().map(|name| Some(name.as_str())).collect()
        };

        let mut dependencies = vec![];
        for container in quasi_containers {
            let resolved = self.resolve_layers(layers, container);
            let all_layer_modules: FxHashSet<&str> = resolved
                .iter()
                .flat_map(|layer| layer.modules.iter().map(String::as_str))
                .collect();

            for (importer_package, imported_package) in generate_permutations(&resolved) {
                if let Some(dependency) = self.find_illegal_dependencies_between(
                    &importer_package,
                    &imported_package,
                    &all_layer_modules,
                )? {
                    dependencies.push(dependency);
                }
            }
        }

        dependencies.sort();
        Ok(dependencies)
    }

    fn resolve_layers(&self, layers: &[Layer], container: Option<&str>) -> Vec<ResolvedLayer> {
        layers
            .iter()
            .map(|layer| ResolvedLayer {
                modules: layer
                    .module_tails
                    .iter()
                    .map(|tail| match container {
                        Some(container) => format!("{container}.{tail}"),
                        None => tail.clone(),
                    })
                    .filter(|module| self.contains_module(module))
                    .collect(),
                independent: layer.independent,
                closed: layer.closed,
            })
            .collect()
    }

    /// Return a `PackageDependency` with the illegal chains between two layer
    /// packages, if there are any.
    fn find_illegal_dependencies_between(
        &self,
        importer_package: &str,
        imported_package: &str,
        all_layer_modules: &FxHashSet<&str>,
    ) -> StrataResult<Option<PackageDependency>> {
        // Shortcut the detailed search when there is no chain at all.
        if !self.chain_exists(importer_package, imported_package, true)? {
            return Ok(None);
        }

        // Work on a copy with every unrelated layer removed, so chains routed
        // through other layers are not reported against this pair.
        let mut working = self.clone();
        for &layer_module in all_layer_modules {
            if layer_module == importer_package
                || layer_module == imported_package
                || module_name::is_descendant_of(importer_package, layer_module)
                || module_name::is_descendant_of(imported_package, layer_module)
            {
                continue;
            }
            for descendant in working.descendant_names(layer_module) {
                working.remove_module(&descendant);
            }
            working.remove_module(layer_module);
        }

        let importer_members = working.package_members(working.require_node(importer_package)?);
        let imported_members = working.package_members(working.require_node(imported_package)?);

        // Direct imports become trivial routes and are removed before the
        // chain search.
        let mut routes: BTreeSet<Route> = BTreeSet::new();
        for &importer_index in &importer_members {
            let direct: Vec<NodeIndex> = working
                .successors(importer_index)
                .filter(|imported_index| imported_members.contains(imported_index))
                .collect();
            for imported_index in direct {
                routes.insert(Route {
                    heads: BTreeSet::from([working.name_of(importer_index).to_owned()]),
                    middle: vec![],
                    tails: BTreeSet::from([working.name_of(imported_index).to_owned()]),
                });
                working.hide_import(importer_index, imported_index);
            }
        }

        let middles = working.pop_middles(&importer_members, &imported_members);
        for middle in middles {
            let first = working.require_node(&middle[0])?;
            let last = working.require_node(&middle[middle.len() - 1])?;
            let heads: BTreeSet<String> = importer_members
                .iter()
                .filter(|&&member| working.has_edge(member, first))
                .map(|&member| working.name_of(member).to_owned())
                .collect();
            let tails: BTreeSet<String> = imported_members
                .iter()
                .filter(|&&member| working.has_edge(last, member))
                .map(|&member| working.name_of(member).to_owned())
                .collect();
            routes.insert(Route {
                heads,
                middle,
                tails,
            });
        }

        if routes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PackageDependency {
                importer: importer_package.to_owned(),
                imported: imported_package.to_owned(),
                routes,
            }))
        }
    }

    /// Iteratively pop the shortest chains between two packages, collecting
    /// the distinct interiors. Treats both packages as squashed: popping a
    /// chain removes every package edge onto its first and off its last
    /// interior module.
    fn pop_middles(
        &self,
        importer_members: &FxHashSet<NodeIndex>,
        imported_members: &FxHashSet<NodeIndex>,
    ) -> Vec<Vec<String>> {
        let mut scratch = self.clone();
        scratch.hide_imports_between(importer_members);
        scratch.hide_imports_between(imported_members);

        let mut middles = vec![];
        while let Some(chain) = scratch.shortest_path(importer_members, imported_members) {
            let interior = &chain[1..chain.len() - 1];
            // Direct imports were removed before this search.
            debug_assert!(!interior.is_empty(), "direct chain found during middle search");
            if interior.is_empty() {
                scratch.hide_import(chain[0], chain[1]);
                continue;
            }

            for &member in importer_members {
                scratch.hide_import(member, interior[0]);
            }
            for &member in imported_members {
                scratch.hide_import(interior[interior.len() - 1], member);
            }
            for (&importer_index, &imported_index) in interior.iter().tuple_windows() {
                scratch.hide_import(importer_index, imported_index);
            }

            middles.push(
                interior
                    .iter()
                    .map(|&index| scratch.name_of(index).to_owned())
                    .collect(),
            );
        }
        middles
    }
}

/// All pairs of layer modules to check, as `(importer, imported)`:
///
/// 1. lower -> higher for every cross-level combination (never legal),
/// 2. higher -> lower when a present closed layer lies strictly between
///    (bypassing the closed layer is illegal in the downward direction too),
/// 3. both directions between siblings of an independent layer.
fn generate_permutations(resolved: &[ResolvedLayer]) -> Vec<(String, String)> {
    let mut permutations = vec![];

    for (index, layer) in resolved.iter().enumerate() {
        for module in &layer.modules {
            for lower_layer in &resolved[index + 1..] {
                for lower_module in &lower_layer.modules {
                    permutations.push((lower_module.clone(), module.clone()));
                }
            }

            if layer.independent {
                for sibling_module in &layer.modules {
                    if sibling_module == module {
                        continue;
                    }
                    permutations.push((module.clone(), sibling_module.clone()));
                }
            }
        }
    }

    // Downward checks across closed layers.
    for (higher_index, higher_layer) in resolved.iter().enumerate() {
        for (lower_index, lower_layer) in resolved.iter().enumerate().skip(higher_index + 1) {
            let closed_between = resolved[higher_index + 1..lower_index]
                .iter()
                .any(|between| between.closed && !between.modules.is_empty());
            if !closed_between {
                continue;
            }
            for higher_module in &higher_layer.modules {
                for lower_module in &lower_layer.modules {
                    permutations.push((higher_module.clone(), lower_module.clone()));
                }
            }
        }
    }

    permutations
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

    fn layers(names: &[&str]) -> Vec<Layer> {
        names.iter().map(|&name| Layer::single(name)).collect()
    }

    #[test]
    fn test_conformant_graph_has_no_illegal_dependencies() {
        let graph = graph_with_edges(&[("high", "medium"), ("medium", "low"), ("high", "low")]);
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&layers(&["high", "medium", "low"]), &[])
            .unwrap();
        assert!(dependencies.is_empty());
    }

    #[test]
    fn test_direct_illegal_import() {
        let mut graph = graph_with_edges(&[("low.white", "high.green")]);
        graph.add_module("high").unwrap();
        graph.add_module("low").unwrap();
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&layers(&["high", "low"]), &[])
            .unwrap();

        assert_eq!(dependencies.len(), 1);
        let dependency = &dependencies[0];
        assert_eq!(dependency.importer, "low");
        assert_eq!(dependency.imported, "high");
        assert_eq!(
            dependency.routes,
            BTreeSet::from([Route {
                heads: BTreeSet::from(["low.white".to_owned()]),
                middle: vec![],
                tails: BTreeSet::from(["high.green".to_owned()]),
            }])
        );
    }

    #[test]
    fn test_indirect_illegal_imports_are_grouped_into_routes() {
        let mut graph = graph_with_edges(&[
            // Legal imports.
            ("high.green", "medium.orange"),
            ("medium.orange", "low.white"),
            // Illegal chains from medium up to high.
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
        assert_eq!(
            dependency.routes,
            BTreeSet::from([
                Route {
                    heads: BTreeSet::from(["medium.orange".to_owned()]),
                    middle: vec!["tungsten".to_owned(), "copper".to_owned()],
                    tails: BTreeSet::from(["high.green".to_owned()]),
                },
                Route {
                    heads: BTreeSet::from(["medium.orange.beta".to_owned()]),
                    middle: vec!["gold.delta".to_owned()],
                    tails: BTreeSet::from(["high.yellow".to_owned()]),
                },
            ])
        );
    }

    #[test]
    fn test_chains_via_other_layers_are_not_reported() {
        // low -> medium -> high: illegal between (low, medium) and
        // (medium, high), but not reported for (low, high) since the chain
        // passes through the medium layer.
        let graph = graph_with_edges(&[("low", "medium"), ("medium", "high")]);
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&layers(&["high", "medium", "low"]), &[])
            .unwrap();

        let pairs: Vec<(&str, &str)> = dependencies
            .iter()
            .map(|dependency| (dependency.importer.as_str(), dependency.imported.as_str()))
            .collect();
        assert_eq!(pairs, vec![("low", "medium"), ("medium", "high")]);
    }

    #[test]
    fn test_containers_qualify_layer_names() {
        let mut graph = graph_with_edges(&[
            ("mypackage.low.white", "mypackage.high.green"),
            ("otherpackage.low", "otherpackage.high"),
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

        let importers: Vec<&str> = dependencies
            .iter()
            .map(|dependency| dependency.importer.as_str())
            .collect();
        assert_eq!(importers, vec!["mypackage.low", "otherpackage.low"]);
    }

    #[test]
    fn test_missing_container_fails() {
        let graph = graph_with_edges(&[("a", "b")]);
        let result =
            graph.find_illegal_dependencies_for_layers(&layers(&["a", "b"]), &["nowhere".to_owned()]);
        assert!(
            matches!(result, Err(StrataError::NoSuchContainer(name)) if name == "nowhere")
        );
    }

    #[test]
    fn test_absent_layers_are_skipped() {
        let graph = graph_with_edges(&[("low", "high")]);
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&layers(&["high", "ghost", "low"]), &[])
            .unwrap();
        assert_eq!(dependencies.len(), 1);
    }

    #[test]
    fn test_independent_siblings_may_not_import_each_other() {
        let mut graph = graph_with_edges(&[("medium.blue", "medium.green")]);
        graph.add_module("medium").unwrap();
        let dependencies = graph
            .find_illegal_dependencies_for_layers(
                &[Layer::new(["blue".to_owned(), "green".to_owned()], true, false)],
                &["medium".to_owned()],
            )
            .unwrap();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0].importer, "medium.blue");
        assert_eq!(dependencies[0].imported, "medium.green");
    }

    #[test]
    fn test_non_independent_siblings_may_import_each_other() {
        let mut graph = graph_with_edges(&[("medium.blue", "medium.green")]);
        graph.add_module("medium").unwrap();
        let dependencies = graph
            .find_illegal_dependencies_for_layers(
                &[Layer::new(["blue".to_owned(), "green".to_owned()], false, false)],
                &["medium".to_owned()],
            )
            .unwrap();
        assert!(dependencies.is_empty());
    }

    #[test]
    fn test_closed_layer_cannot_be_bypassed() {
        let graph = graph_with_edges(&[
            ("high", "mid"),
            ("mid", "low"),
            // Bypasses the closed mid layer.
            ("high", "low"),
        ]);
        let closed_layers = vec![
            Layer::single("high"),
            Layer {
                module_tails: vec!["mid".to_owned()],
                independent: true,
                closed: true,
            },
            Layer::single("low"),
        ];
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&closed_layers, &[])
            .unwrap();

        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0].importer, "high");
        assert_eq!(dependencies[0].imported, "low");
    }

    #[test]
    fn test_open_layer_may_be_bypassed() {
        let graph = graph_with_edges(&[("high", "mid"), ("mid", "low"), ("high", "low")]);
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&layers(&["high", "mid", "low"]), &[])
            .unwrap();
        assert!(dependencies.is_empty());
    }

    #[test]
    fn test_absent_closed_layer_is_no_barrier() {
        let graph = graph_with_edges(&[("high", "low")]);
        let closed_layers = vec![
            Layer::single("high"),
            Layer {
                module_tails: vec!["ghost".to_owned()],
                independent: true,
                closed: true,
            },
            Layer::single("low"),
        ];
        let dependencies = graph
            .find_illegal_dependencies_for_layers(&closed_layers, &[])
            .unwrap();
        assert!(dependencies.is_empty());
    }
}
