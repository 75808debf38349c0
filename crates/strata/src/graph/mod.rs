//! A directed graph of imports between Python modules.
//!
//! Nodes are module names; edges point from importer to imported. Modules are
//! interned in a stable petgraph so that node indices survive removals, with
//! a name lookup on the side. Import details (line number and contents) live
//! in a parallel map so that edge existence never depends on whether details
//! were recorded.

use indexmap::IndexMap;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{StrataError, StrataResult};
use crate::module_expressions::{ImportExpression, ModuleExpression};
use crate::module_name;

pub mod chains;
pub mod cycle_breakers;
pub mod layers;
pub(crate) mod pathfinding;

pub use layers::{Layer, PackageDependency, Route};

/// Provenance for one direct import.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImportDetails {
    pub line_number: u32,
    pub line_contents: String,
}

/// A directed graph of imports between modules.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    graph: StableDiGraph<String, ()>,
    node_lookup: IndexMap<String, NodeIndex>,
    squashed: FxHashSet<NodeIndex>,
    import_details: FxHashMap<(NodeIndex, NodeIndex), Vec<ImportDetails>>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // Mechanics
    // ---------

    /// The names of all the modules in the graph.
    pub fn modules(&self) -> FxHashSet<String> {
        self.node_lookup.keys().cloned().collect()
    }

    pub fn contains_module(&self, module: &str) -> bool {
        self.node_lookup.contains_key(module)
    }

    /// Add a module to the graph.
    pub fn add_module(&mut self, module: &str) -> StrataResult<()> {
        self.add_module_inner(module, false)
    }

    /// Add a 'squashed' module: a node representing both the module and all
    /// its descendants, which are not stored individually.
    pub fn add_squashed_module(&mut self, module: &str) -> StrataResult<()> {
        self.add_module_inner(module, true)
    }

    fn add_module_inner(&mut self, module: &str, is_squashed: bool) -> StrataResult<()> {
        if let Some(ancestor) = self.find_ancestor_squashed_module(module) {
            return Err(StrataError::InvalidOperation(format!(
                "Module is a descendant of squashed module {ancestor}."
            )));
        }

        if let Some(&index) = self.node_lookup.get(module) {
            if self.squashed.contains(&index) != is_squashed {
                return Err(StrataError::InvalidOperation(
                    "Cannot add a squashed module when it is already present in the graph \
                     as an unsquashed module, or vice versa."
                        .to_owned(),
                ));
            }
            return Ok(());
        }

        let index = self.graph.add_node(module.to_owned());
        self.node_lookup.insert(module.to_owned(), index);
        if is_squashed {
            self.squashed.insert(index);
        }
        Ok(())
    }

    /// Remove a module and all imports to or from it. Removing a module that
    /// isn't present is a no-op.
    pub fn remove_module(&mut self, module: &str) {
        let Some(index) = self.node_lookup.shift_remove(module) else {
            return;
        };
        self.squashed.remove(&index);
        self.import_details
            .retain(|&(importer, imported), _| importer != index && imported != index);
        self.graph.remove_node(index);
    }

    /// Add a direct import between two modules, adding the modules themselves
    /// if they are not already present.
    ///
    /// Line metadata must be supplied together or not at all.
    pub fn add_import(
        &mut self,
        importer: &str,
        imported: &str,
        line_number: Option<u32>,
        line_contents: Option<&str>,
    ) -> StrataResult<()> {
        let details = match (line_number, line_contents) {
            (Some(line_number), Some(line_contents)) => Some(ImportDetails {
                line_number,
                line_contents: line_contents.to_owned(),
            }),
            (None, None) => None,
            _ => {
                return Err(StrataError::InvalidOperation(
                    "Line number and contents must be provided together, or not at all."
                        .to_owned(),
                ));
            }
        };

        for module in [importer, imported] {
            if !self.contains_module(module) {
                self.add_module(module)?;
            }
        }
        let importer_index = self.node_lookup[importer];
        let imported_index = self.node_lookup[imported];
        self.graph.update_edge(importer_index, imported_index, ());

        if let Some(details) = details {
            self.import_details
                .entry((importer_index, imported_index))
                .or_default()
                .push(details);
        }
        Ok(())
    }

    /// Remove a direct import between two modules. Does not remove the
    /// modules themselves.
    pub fn remove_import(&mut self, importer: &str, imported: &str) -> StrataResult<()> {
        let importer_index = self.require_node(importer)?;
        let imported_index = self.require_node(imported)?;
        if let Some(edge) = self.graph.find_edge(importer_index, imported_index) {
            self.graph.remove_edge(edge);
        }
        self.import_details
            .remove(&(importer_index, imported_index));
        Ok(())
    }

    /// The number of distinct imports in the graph (not detail records).
    pub fn count_imports(&self) -> usize {
        self.graph.edge_count()
    }

    /// 'Squash' a module: contract every import to or from a descendant onto
    /// the module itself, then delete the descendants.
    pub fn squash_module(&mut self, module: &str) -> StrataResult<()> {
        let index = self.require_node(module)?;
        if self.squashed.contains(&index) {
            return Ok(());
        }

        let descendants: Vec<String> = self.descendant_names(module);

        // Contract imports to/from descendants onto the squashed root.
        for descendant in &descendants {
            let descendant_index = self.node_lookup[descendant];
            let imported: Vec<NodeIndex> = self.successors(descendant_index).collect();
            for imported_index in imported {
                self.graph.update_edge(index, imported_index, ());
            }
            let importers: Vec<NodeIndex> = self.predecessors(descendant_index).collect();
            for importer_index in importers {
                self.graph.update_edge(importer_index, index, ());
            }
        }

        // Now the imports are contracted, the descendants can go. Their
        // import details go with them.
        for descendant in &descendants {
            self.remove_module(descendant);
        }

        self.squashed.insert(index);
        Ok(())
    }

    /// Return whether a module is squashed.
    pub fn is_module_squashed(&self, module: &str) -> StrataResult<bool> {
        let index = self.require_node(module)?;
        Ok(self.squashed.contains(&index))
    }

    // Descendants
    // -----------

    /// Find all modules one level below the module in the hierarchy.
    ///
    /// Fails for a squashed module: its children are not stored in the graph.
    pub fn find_children(&self, module: &str) -> StrataResult<FxHashSet<String>> {
        if self.is_module_squashed(module)? {
            return Err(StrataError::InvalidOperation(
                "Cannot find children of a squashed module.".to_owned(),
            ));
        }
        Ok(self
            .node_lookup
            .keys()
            .filter(|name| module_name::is_child_of(name, module))
            .cloned()
            .collect())
    }

    /// Find all modules below the module in the hierarchy.
    ///
    /// Fails for a squashed module: its descendants are not stored in the
    /// graph.
    pub fn find_descendants(&self, module: &str) -> StrataResult<FxHashSet<String>> {
        if self.is_module_squashed(module)? {
            return Err(StrataError::InvalidOperation(
                "Cannot find descendants of a squashed module.".to_owned(),
            ));
        }
        Ok(self.descendant_names(module).into_iter().collect())
    }

    // Direct imports
    // --------------

    /// Whether or not the importer module directly imports the imported
    /// module. With `as_packages`, both modules are expanded to include their
    /// descendants.
    pub fn direct_import_exists(
        &self,
        importer: &str,
        imported: &str,
        as_packages: bool,
    ) -> StrataResult<bool> {
        let importer_index = self.require_node(importer)?;
        let imported_index = self.require_node(imported)?;

        if !as_packages {
            return Ok(self.has_edge(importer_index, imported_index));
        }

        let importer_members = self.package_members(importer_index);
        let imported_members = self.package_members(imported_index);
        if !importer_members.is_disjoint(&imported_members) {
            return Err(StrataError::InvalidOperation(
                "Modules have shared descendants.".to_owned(),
            ));
        }

        Ok(importer_members.iter().any(|&candidate_importer| {
            self.successors(candidate_importer)
                .any(|successor| imported_members.contains(&successor))
        }))
    }

    pub fn find_modules_directly_imported_by(
        &self,
        module: &str,
    ) -> StrataResult<FxHashSet<String>> {
        let index = self.require_node(module)?;
        Ok(self
            .successors(index)
            .map(|successor| self.graph[successor].clone())
            .collect())
    }

    pub fn find_modules_that_directly_import(
        &self,
        module: &str,
    ) -> StrataResult<FxHashSet<String>> {
        let index = self.require_node(module)?;
        Ok(self
            .predecessors(index)
            .map(|predecessor| self.graph[predecessor].clone())
            .collect())
    }

    /// Metadata for the direct imports between two modules, sorted by line
    /// number.
    ///
    /// An import can exist without details, for example if it was added
    /// without line metadata; such imports yield an empty list.
    pub fn get_import_details(&self, importer: &str, imported: &str) -> Vec<ImportDetails> {
        let (Some(&importer_index), Some(&imported_index)) = (
            self.node_lookup.get(importer),
            self.node_lookup.get(imported),
        ) else {
            return vec![];
        };
        let mut details = self
            .import_details
            .get(&(importer_index, imported_index))
            .cloned()
            .unwrap_or_default();
        details.sort();
        details
    }

    // Pattern matching
    // ----------------

    /// Find all modules matching the passed module expression.
    pub fn find_matching_modules(&self, expression: &str) -> StrataResult<FxHashSet<String>> {
        let expression: ModuleExpression = expression.parse()?;
        Ok(self
            .node_lookup
            .keys()
            .filter(|name| expression.matches(name))
            .cloned()
            .collect())
    }

    /// Find all direct imports matching an expression of the form
    /// `importer_expression -> imported_expression`.
    ///
    /// Returns `(importer, imported)` pairs ordered alphabetically by
    /// importer, then imported; each distinct import appears once however
    /// many detail records it has.
    pub fn find_matching_direct_imports(
        &self,
        expression: &str,
    ) -> StrataResult<Vec<(String, String)>> {
        let expression: ImportExpression = expression.parse()?;

        let mut matching: Vec<(String, String)> = self
            .graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(importer, imported)| (&self.graph[importer], &self.graph[imported]))
            .filter(|(importer, imported)| {
                expression.importer.matches(importer) && expression.imported.matches(imported)
            })
            .map(|(importer, imported)| (importer.clone(), imported.clone()))
            .collect();
        matching.sort();
        Ok(matching)
    }

    // Internals
    // ---------

    pub(crate) fn node(&self, module: &str) -> Option<NodeIndex> {
        self.node_lookup.get(module).copied()
    }

    pub(crate) fn require_node(&self, module: &str) -> StrataResult<NodeIndex> {
        self.node(module)
            .ok_or_else(|| StrataError::ModuleNotPresent(module.to_owned()))
    }

    pub(crate) fn name_of(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    pub(crate) fn successors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(index, Direction::Outgoing)
    }

    pub(crate) fn predecessors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(index, Direction::Incoming)
    }

    pub(crate) fn has_edge(&self, importer: NodeIndex, imported: NodeIndex) -> bool {
        self.graph.find_edge(importer, imported).is_some()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    fn descendant_names(&self, module: &str) -> Vec<String> {
        self.node_lookup
            .keys()
            .filter(|name| module_name::is_descendant_of(name, module))
            .cloned()
            .collect()
    }

    /// All the modules in the package rooted at the given module, including
    /// itself. A squashed module is a single node by definition.
    pub(crate) fn package_members(&self, index: NodeIndex) -> FxHashSet<NodeIndex> {
        let mut members: FxHashSet<NodeIndex> = FxHashSet::default();
        members.insert(index);
        if !self.squashed.contains(&index) {
            let name = self.name_of(index);
            members.extend(
                self.node_lookup
                    .iter()
                    .filter(|(candidate, _)| module_name::is_descendant_of(candidate, name))
                    .map(|(_, &candidate_index)| candidate_index),
            );
        }
        members
    }

    /// Remove the edge from the adjacency only, leaving any import details in
    /// place. Used on scratch copies by the chain and layer algorithms, which
    /// never report details from hidden edges.
    pub(crate) fn hide_import(&mut self, importer: NodeIndex, imported: NodeIndex) {
        if let Some(edge) = self.graph.find_edge(importer, imported) {
            self.graph.remove_edge(edge);
        }
    }

    /// Put back an edge removed by `hide_import`.
    pub(crate) fn reveal_import(&mut self, importer: NodeIndex, imported: NodeIndex) {
        self.graph.update_edge(importer, imported, ());
    }

    fn find_ancestor_squashed_module<'a>(&self, module: &'a str) -> Option<&'a str> {
        let mut current = module_name::parent(module);
        while let Some(ancestor) = current {
            if let Some(index) = self.node_lookup.get(ancestor) {
                if self.squashed.contains(index) {
                    return Some(ancestor);
                }
            }
            current = module_name::parent(ancestor);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_import_adds_missing_modules() {
        let mut graph = ImportGraph::new();
        graph.add_import("foo", "bar", None, None).unwrap();

        assert!(graph.contains_module("foo"));
        assert!(graph.contains_module("bar"));
        assert!(graph.direct_import_exists("foo", "bar", false).unwrap());
        assert_eq!(graph.count_imports(), 1);
    }

    #[test]
    fn test_add_import_is_idempotent_on_the_edge() {
        let mut graph = ImportGraph::new();
        graph
            .add_import("foo", "bar", Some(1), Some("import bar"))
            .unwrap();
        graph
            .add_import("foo", "bar", Some(10), Some("import bar  # again"))
            .unwrap();

        assert_eq!(graph.count_imports(), 1);
        assert_eq!(graph.get_import_details("foo", "bar").len(), 2);
    }

    #[test]
    fn test_add_import_rejects_partial_details() {
        let mut graph = ImportGraph::new();
        let result = graph.add_import("foo", "bar", Some(1), None);
        assert!(matches!(result, Err(StrataError::InvalidOperation(_))));
    }

    #[test]
    fn test_remove_module_removes_incident_imports_and_details() {
        let mut graph = ImportGraph::new();
        graph
            .add_import("foo", "bar", Some(1), Some("import bar"))
            .unwrap();
        graph
            .add_import("baz", "foo", Some(2), Some("import foo"))
            .unwrap();

        graph.remove_module("foo");

        assert!(!graph.contains_module("foo"));
        assert!(graph.contains_module("bar"));
        assert_eq!(graph.count_imports(), 0);
        assert!(graph.get_import_details("baz", "foo").is_empty());
    }

    #[test]
    fn test_remove_missing_module_is_a_noop() {
        let mut graph = ImportGraph::new();
        graph.remove_module("nowhere");
        assert!(graph.modules().is_empty());
    }

    #[test]
    fn test_remove_import_keeps_modules() {
        let mut graph = ImportGraph::new();
        graph.add_import("foo", "bar", None, None).unwrap();
        graph.remove_import("foo", "bar").unwrap();

        assert!(graph.contains_module("foo"));
        assert!(graph.contains_module("bar"));
        assert_eq!(graph.count_imports(), 0);
    }

    #[test]
    fn test_cannot_mix_squashed_and_unsquashed_add() {
        let mut graph = ImportGraph::new();
        graph.add_module("foo").unwrap();
        assert!(matches!(
            graph.add_squashed_module("foo"),
            Err(StrataError::InvalidOperation(_))
        ));

        graph.add_squashed_module("bar").unwrap();
        assert!(matches!(
            graph.add_module("bar"),
            Err(StrataError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_cannot_add_descendant_of_squashed_module() {
        let mut graph = ImportGraph::new();
        graph.add_squashed_module("foo").unwrap();
        assert!(matches!(
            graph.add_module("foo.blue"),
            Err(StrataError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_is_module_squashed_requires_presence() {
        let graph = ImportGraph::new();
        assert!(matches!(
            graph.is_module_squashed("nowhere"),
            Err(StrataError::ModuleNotPresent(_))
        ));
    }

    #[test]
    fn test_find_descendants_with_gaps() {
        let mut graph = ImportGraph::new();
        // mypackage.foo itself is never added.
        for module in ["mypackage", "mypackage.foo.one", "mypackage.foo.two"] {
            graph.add_module(module).unwrap();
        }
        let descendants = graph.find_descendants("mypackage").unwrap();
        assert_eq!(descendants.len(), 2);
        assert!(descendants.contains("mypackage.foo.one"));
    }

    #[test]
    fn test_find_children() {
        let mut graph = ImportGraph::new();
        for module in ["foo.bar", "foo.bar.one", "foo.bar.two", "foo.bar.two.green"] {
            graph.add_module(module).unwrap();
        }
        let children = graph.find_children("foo.bar").unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.contains("foo.bar.one"));
        assert!(children.contains("foo.bar.two"));
    }

    #[test]
    fn test_find_children_of_squashed_module_fails() {
        let mut graph = ImportGraph::new();
        graph.add_squashed_module("foo").unwrap();
        assert!(matches!(
            graph.find_children("foo"),
            Err(StrataError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_direct_import_exists_as_packages() {
        let mut graph = ImportGraph::new();
        graph.add_module("green").unwrap();
        graph.add_module("blue").unwrap();
        graph
            .add_import("green.foo", "blue.bar.baz", None, None)
            .unwrap();

        assert!(graph.direct_import_exists("green", "blue", true).unwrap());
        assert!(!graph.direct_import_exists("blue", "green", true).unwrap());
        assert!(!graph.direct_import_exists("green", "blue", false).unwrap());
    }

    #[test]
    fn test_direct_import_exists_with_shared_descendants_fails() {
        let mut graph = ImportGraph::new();
        graph.add_module("foo").unwrap();
        graph.add_module("foo.blue").unwrap();
        assert!(matches!(
            graph.direct_import_exists("foo", "foo.blue", true),
            Err(StrataError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_squash_module_contracts_edges() {
        // Scenario: foo.green -> bar.blue and bar.blue -> foo.
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
        assert_eq!(graph.count_imports(), 2);

        // Details on the surviving edge are preserved; details on the
        // contracted edge are lost.
        assert_eq!(graph.get_import_details("bar.blue", "foo").len(), 1);
        assert!(graph.get_import_details("foo", "bar.blue").is_empty());
        assert!(graph.is_module_squashed("foo").unwrap());
    }

    #[test]
    fn test_squash_missing_module_fails() {
        let mut graph = ImportGraph::new();
        assert!(matches!(
            graph.squash_module("nowhere"),
            Err(StrataError::ModuleNotPresent(_))
        ));
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let mut graph = ImportGraph::new();
        graph
            .add_import("foo", "bar", Some(1), Some("import bar"))
            .unwrap();

        let copied = graph.clone();
        graph.add_import("bar", "baz", None, None).unwrap();
        graph.squash_module("foo").unwrap();

        assert_eq!(copied.count_imports(), 1);
        assert!(!copied.contains_module("baz"));
        assert!(!copied.is_module_squashed("foo").unwrap());
        assert_eq!(copied.get_import_details("foo", "bar").len(), 1);
    }

    #[test]
    fn test_count_imports_counts_edges_not_details() {
        let mut graph = ImportGraph::new();
        graph
            .add_import("foo", "bar", Some(1), Some("import bar"))
            .unwrap();
        graph
            .add_import("foo", "bar", Some(2), Some("from bar import x"))
            .unwrap();
        graph.add_import("bar", "baz", None, None).unwrap();
        assert_eq!(graph.count_imports(), 2);
    }

    #[test]
    fn test_matching_direct_imports_deduplicates_details() {
        let mut graph = ImportGraph::new();
        graph
            .add_import("pkg.a", "pkg.b", Some(1), Some("import pkg.b"))
            .unwrap();
        graph
            .add_import("pkg.a", "pkg.b", Some(9), Some("import pkg.b  # again"))
            .unwrap();
        graph.add_import("pkg.b", "pkg.c", None, None).unwrap();

        let matching = graph.find_matching_direct_imports("** -> **").unwrap();
        assert_eq!(
            matching,
            vec![
                ("pkg.a".to_owned(), "pkg.b".to_owned()),
                ("pkg.b".to_owned(), "pkg.c".to_owned()),
            ]
        );
    }
}
