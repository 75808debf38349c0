//! Indirect import queries: chains, cycles, and transitive closures.

use petgraph::stable_graph::NodeIndex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{StrataError, StrataResult};

use super::ImportGraph;

impl ImportGraph {
    /// Attempt to find the shortest chain of imports between two modules, in
    /// the direction of importer to imported.
    ///
    /// With `as_packages`, both modules are treated as packages: all their
    /// descendants are candidate endpoints, and imports internal to either
    /// package cannot appear in the chain.
    pub fn find_shortest_chain(
        &self,
        importer: &str,
        imported: &str,
        as_packages: bool,
    ) -> StrataResult<Option<Vec<String>>> {
        let importer_index = self.require_node(importer)?;
        let imported_index = self.require_node(imported)?;

        if !as_packages {
            let sources = FxHashSet::from_iter([importer_index]);
            let sinks = FxHashSet::from_iter([imported_index]);
            return Ok(self
                .shortest_path(&sources, &sinks)
                .map(|chain| self.chain_names(&chain)));
        }

        let sources = self.package_members(importer_index);
        let sinks = self.package_members(imported_index);
        if !sources.is_disjoint(&sinks) {
            return Err(StrataError::InvalidOperation(
                "Modules have shared descendants.".to_owned(),
            ));
        }

        // Chains must not pass through either package's internals, so run the
        // search on a scratch copy with those imports hidden. The live graph
        // is never touched, whatever path the search takes.
        let mut scratch = self.clone();
        scratch.hide_imports_between(&sources);
        scratch.hide_imports_between(&sinks);

        Ok(scratch
            .shortest_path(&sources, &sinks)
            .map(|chain| self.chain_names(&chain)))
    }

    /// Return whether any chain of imports exists between the two modules, in
    /// the direction of importer to imported.
    pub fn chain_exists(
        &self,
        importer: &str,
        imported: &str,
        as_packages: bool,
    ) -> StrataResult<bool> {
        Ok(self
            .find_shortest_chain(importer, imported, as_packages)?
            .is_some())
    }

    /// Find the shortest import chains between the importer and imported
    /// packages: one chain per pair of endpoints with any chain between them,
    /// ignoring chains that are contained within other chains in the result.
    ///
    /// With `as_packages` false, both arguments are treated as single modules
    /// and the result holds at most one chain.
    pub fn find_shortest_chains(
        &self,
        importer: &str,
        imported: &str,
        as_packages: bool,
    ) -> StrataResult<FxHashSet<Vec<String>>> {
        if !as_packages {
            return Ok(self
                .find_shortest_chain(importer, imported, false)?
                .into_iter()
                .collect());
        }

        let importer_index = self.require_node(importer)?;
        let imported_index = self.require_node(imported)?;

        let downstream_members = self.package_members(importer_index);
        let upstream_members = self.package_members(imported_index);
        if !downstream_members.is_disjoint(&upstream_members) {
            return Err(StrataError::InvalidOperation(
                "Modules have shared descendants.".to_owned(),
            ));
        }

        let mut scratch = self.clone();
        scratch.hide_imports_between(&downstream_members);
        scratch.hide_imports_between(&upstream_members);

        // Hide every import incident to a package member, then reveal each
        // probed pair's imports in turn. This stops chains from sneaking
        // through other modules of either package.
        let mut imports_by_member: FxHashMap<NodeIndex, Vec<(NodeIndex, NodeIndex)>> =
            FxHashMap::default();
        for &member in downstream_members.iter().chain(&upstream_members) {
            let mut incident: Vec<(NodeIndex, NodeIndex)> = scratch
                .predecessors(member)
                .map(|importer_index| (importer_index, member))
                .collect();
            incident.extend(
                scratch
                    .successors(member)
                    .map(|imported_index| (member, imported_index)),
            );
            imports_by_member.insert(member, incident);
        }
        for incident in imports_by_member.values() {
            scratch.hide_all(incident);
        }

        let mut chains = FxHashSet::default();
        for &upstream in &upstream_members {
            scratch.reveal_all(&imports_by_member[&upstream]);
            let sinks = FxHashSet::from_iter([upstream]);
            for &downstream in &downstream_members {
                scratch.reveal_all(&imports_by_member[&downstream]);
                let sources = FxHashSet::from_iter([downstream]);
                if let Some(chain) = scratch.shortest_path(&sources, &sinks) {
                    chains.insert(self.chain_names(&chain));
                }
                scratch.hide_all(&imports_by_member[&downstream]);
            }
            scratch.hide_all(&imports_by_member[&upstream]);
        }

        Ok(chains)
    }

    /// Enumerate every simple chain (no repeated module) from importer to
    /// imported.
    pub fn find_all_simple_chains(
        &self,
        importer: &str,
        imported: &str,
    ) -> StrataResult<Vec<Vec<String>>> {
        let importer_index = self.require_node(importer)?;
        let imported_index = self.require_node(imported)?;

        let paths: Vec<Vec<NodeIndex>> = petgraph::algo::all_simple_paths(
            &self.graph,
            importer_index,
            imported_index,
            0,
            None,
        )
        .collect();
        Ok(paths.iter().map(|path| self.chain_names(path)).collect())
    }

    /// The shortest cycle through the module, as a chain starting and ending
    /// at it - or, with `as_package`, the shortest chain leaving the package
    /// and coming back to it, ignoring imports internal to the package.
    pub fn find_shortest_cycle(
        &self,
        module: &str,
        as_package: bool,
    ) -> StrataResult<Option<Vec<String>>> {
        let index = self.require_node(module)?;

        if !as_package {
            let sources: FxHashSet<NodeIndex> = self.successors(index).collect();
            let sinks = FxHashSet::from_iter([index]);
            return Ok(self.shortest_path(&sources, &sinks).map(|path| {
                let mut chain = vec![self.name_of(index).to_owned()];
                chain.extend(self.chain_names(&path));
                chain
            }));
        }

        let members = self.package_members(index);
        let mut scratch = self.clone();
        scratch.hide_imports_between(&members);

        let sources: FxHashSet<NodeIndex> = members
            .iter()
            .flat_map(|&member| scratch.successors(member).collect::<Vec<_>>())
            .collect();
        let Some(path) = scratch.shortest_path(&sources, &members) else {
            return Ok(None);
        };

        // Work out which member kicked the cycle off.
        let head = members
            .iter()
            .filter(|&&member| scratch.has_edge(member, path[0]))
            .min_by_key(|&&member| self.name_of(member))
            .copied()
            .expect("a cycle source must have an importing package member");

        let mut chain = vec![self.name_of(head).to_owned()];
        chain.extend(self.chain_names(&path));
        Ok(Some(chain))
    }

    /// Return all the modules that import (even indirectly) the supplied
    /// module.
    ///
    /// With `as_package`, the module's descendants are included as sources
    /// and excluded from the result, leaving only downstream modules external
    /// to the subpackage.
    pub fn find_downstream_modules(
        &self,
        module: &str,
        as_package: bool,
    ) -> StrataResult<FxHashSet<String>> {
        let index = self.require_node(module)?;
        let sources = if as_package {
            self.package_members(index)
        } else {
            FxHashSet::from_iter([index])
        };
        Ok(self
            .reachable_from(&sources, false)
            .into_iter()
            .map(|reached| self.name_of(reached).to_owned())
            .collect())
    }

    /// Return all the modules that are imported (even indirectly) by the
    /// supplied module.
    pub fn find_upstream_modules(
        &self,
        module: &str,
        as_package: bool,
    ) -> StrataResult<FxHashSet<String>> {
        let index = self.require_node(module)?;
        let sources = if as_package {
            self.package_members(index)
        } else {
            FxHashSet::from_iter([index])
        };
        Ok(self
            .reachable_from(&sources, true)
            .into_iter()
            .map(|reached| self.name_of(reached).to_owned())
            .collect())
    }

    // Internals
    // ---------

    fn chain_names(&self, chain: &[NodeIndex]) -> Vec<String> {
        chain
            .iter()
            .map(|&index| self.name_of(index).to_owned())
            .collect()
    }

    /// Hide every import whose endpoints both lie in the given set.
    pub(crate) fn hide_imports_between(&mut self, members: &FxHashSet<NodeIndex>) {
        let internal: Vec<(NodeIndex, NodeIndex)> = members
            .iter()
            .flat_map(|&importer_index| {
                self.successors(importer_index)
                    .filter(|imported_index| members.contains(imported_index))
                    .map(move |imported_index| (importer_index, imported_index))
                    .collect::<Vec<_>>()
            })
            .collect();
        self.hide_all(&internal);
    }

    pub(crate) fn hide_all(&mut self, imports: &[(NodeIndex, NodeIndex)]) {
        for &(importer_index, imported_index) in imports {
            self.hide_import(importer_index, imported_index);
        }
    }

    pub(crate) fn reveal_all(&mut self, imports: &[(NodeIndex, NodeIndex)]) {
        for &(importer_index, imported_index) in imports {
            self.reveal_import(importer_index, imported_index);
        }
    }
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
    fn test_find_shortest_chain() {
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
    fn test_find_shortest_chain_returns_none_when_unreachable() {
        let graph = graph_with_edges(&[("a", "b"), ("c", "b")]);
        assert_eq!(graph.find_shortest_chain("a", "c", false).unwrap(), None);
    }

    #[test]
    fn test_find_shortest_chain_missing_module_fails() {
        let graph = graph_with_edges(&[("a", "b")]);
        assert!(graph.find_shortest_chain("a", "nowhere", false).is_err());
    }

    #[test]
    fn test_find_shortest_chain_as_packages_ignores_internal_imports() {
        let mut graph = graph_with_edges(&[
            ("green.foo", "green.bar"),
            ("green.bar", "blue.baz"),
        ]);
        graph.add_module("green").unwrap();
        graph.add_module("blue").unwrap();

        // green.foo -> green.bar is internal to green, so the only chain as
        // packages is the direct import from green.bar.
        let chain = graph.find_shortest_chain("green", "blue", true).unwrap();
        assert_eq!(
            chain,
            Some(vec!["green.bar".to_owned(), "blue.baz".to_owned()])
        );
    }

    #[test]
    fn test_chain_exists() {
        let graph = graph_with_edges(&[("a", "b"), ("b", "c")]);
        assert!(graph.chain_exists("a", "c", false).unwrap());
        assert!(!graph.chain_exists("c", "a", false).unwrap());
    }

    #[test]
    fn test_find_shortest_chains_between_packages() {
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
    fn test_find_shortest_chains_with_shared_descendants_fails() {
        let mut graph = ImportGraph::new();
        graph.add_module("foo").unwrap();
        graph.add_module("foo.blue").unwrap();
        assert!(matches!(
            graph.find_shortest_chains("foo", "foo.blue", true),
            Err(StrataError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_find_all_simple_chains() {
        let graph = graph_with_edges(&[("a", "b"), ("b", "c"), ("a", "c"), ("c", "a")]);
        let mut chains = graph.find_all_simple_chains("a", "c").unwrap();
        chains.sort();
        assert_eq!(
            chains,
            vec![
                vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
                vec!["a".to_owned(), "c".to_owned()],
            ]
        );
    }

    #[test]
    fn test_find_shortest_cycle() {
        let graph = graph_with_edges(&[("a", "b"), ("b", "c"), ("c", "a"), ("x", "a")]);
        assert_eq!(
            graph.find_shortest_cycle("a", false).unwrap(),
            Some(vec![
                "a".to_owned(),
                "b".to_owned(),
                "c".to_owned(),
                "a".to_owned()
            ])
        );
        assert_eq!(graph.find_shortest_cycle("x", false).unwrap(), None);
    }

    #[test]
    fn test_find_shortest_cycle_as_package() {
        let mut graph = graph_with_edges(&[
            ("pkg.one", "pkg.two"),
            ("pkg.two", "outside"),
            ("outside", "pkg.one"),
        ]);
        graph.add_module("pkg").unwrap();

        // pkg.one -> pkg.two is ignored as internal; the cycle leaves from
        // pkg.two and re-enters at pkg.one.
        let cycle = graph.find_shortest_cycle("pkg", true).unwrap().unwrap();
        assert_eq!(
            cycle,
            vec![
                "pkg.two".to_owned(),
                "outside".to_owned(),
                "pkg.one".to_owned()
            ]
        );
    }

    #[test]
    fn test_queries_leave_the_graph_intact() {
        let mut graph = graph_with_edges(&[
            ("green.foo", "blue.foo"),
            ("green.foo", "green.bar"),
            ("blue.foo", "blue.baz"),
        ]);
        graph.add_module("green").unwrap();
        graph.add_module("blue").unwrap();

        let import_count = graph.count_imports();
        graph.find_shortest_chains("green", "blue", true).unwrap();
        graph.find_shortest_chain("green", "blue", true).unwrap();
        graph.find_shortest_cycle("green", true).unwrap();
        assert_eq!(graph.count_imports(), import_count);
    }

    #[test]
    fn test_find_downstream_and_upstream_modules() {
        let graph = graph_with_edges(&[("a", "b"), ("b", "c"), ("d", "c")]);

        let downstream = graph.find_downstream_modules("c", false).unwrap();
        assert_eq!(
            downstream,
            FxHashSet::from_iter(["a".to_owned(), "b".to_owned(), "d".to_owned()])
        );

        let upstream = graph.find_upstream_modules("a", false).unwrap();
        assert_eq!(
            upstream,
            FxHashSet::from_iter(["b".to_owned(), "c".to_owned()])
        );
    }

    #[test]
    fn test_find_downstream_modules_as_package() {
        let mut graph = graph_with_edges(&[
            ("external", "pkg.one"),
            ("pkg.two", "pkg.one"),
        ]);
        graph.add_module("pkg").unwrap();

        let downstream = graph.find_downstream_modules("pkg", true).unwrap();
        assert_eq!(downstream, FxHashSet::from_iter(["external".to_owned()]));
    }
}
