//! Breadth-first search primitives used by the chain queries.
//!
//! The bidirectional search is adapted from networkx's
//! `bidirectional_shortest_path`, generalized to multiple sources and sinks:
//! two frontiers grow towards each other, always expanding the smaller one,
//! and the path is reconstructed at the first meeting point.

use petgraph::stable_graph::NodeIndex;
use rustc_hash::{FxHashMap, FxHashSet};

use super::ImportGraph;

impl ImportGraph {
    /// The shortest path from any source to any sink, or `None`.
    ///
    /// A node that is both a source and a sink yields a single-element path.
    pub(crate) fn shortest_path(
        &self,
        sources: &FxHashSet<NodeIndex>,
        sinks: &FxHashSet<NodeIndex>,
    ) -> Option<Vec<NodeIndex>> {
        if sources.is_empty() || sinks.is_empty() {
            return None;
        }
        if let Some(&common) = sources.intersection(sinks).next() {
            return Some(vec![common]);
        }

        // Predecessor map for the forward frontier, successor map for the
        // reverse frontier; `None` marks a search origin.
        let mut pred: FxHashMap<NodeIndex, Option<NodeIndex>> =
            sources.iter().map(|&source| (source, None)).collect();
        let mut succ: FxHashMap<NodeIndex, Option<NodeIndex>> =
            sinks.iter().map(|&sink| (sink, None)).collect();

        let mut forward_fringe: Vec<NodeIndex> = sources.iter().copied().collect();
        let mut reverse_fringe: Vec<NodeIndex> = sinks.iter().copied().collect();

        while !forward_fringe.is_empty() && !reverse_fringe.is_empty() {
            if forward_fringe.len() <= reverse_fringe.len() {
                let this_level = std::mem::take(&mut forward_fringe);
                for v in this_level {
                    for w in self.successors(v) {
                        if !pred.contains_key(&w) {
                            pred.insert(w, Some(v));
                            forward_fringe.push(w);
                        }
                        if succ.contains_key(&w) {
                            return Some(reconstruct_path(&pred, &succ, w));
                        }
                    }
                }
            } else {
                let this_level = std::mem::take(&mut reverse_fringe);
                for v in this_level {
                    for w in self.predecessors(v) {
                        if !succ.contains_key(&w) {
                            succ.insert(w, Some(v));
                            reverse_fringe.push(w);
                        }
                        if pred.contains_key(&w) {
                            return Some(reconstruct_path(&pred, &succ, w));
                        }
                    }
                }
            }
        }

        None
    }

    /// All nodes reachable from the sources, excluding the sources themselves
    /// unless re-reached. `forwards` follows successors (what the sources
    /// import); otherwise predecessors (what imports the sources).
    pub(crate) fn reachable_from(
        &self,
        sources: &FxHashSet<NodeIndex>,
        forwards: bool,
    ) -> FxHashSet<NodeIndex> {
        let mut visited: FxHashSet<NodeIndex> = sources.clone();
        let mut stack: Vec<NodeIndex> = sources.iter().copied().collect();

        while let Some(node) = stack.pop() {
            let neighbours: Vec<NodeIndex> = if forwards {
                self.successors(node).collect()
            } else {
                self.predecessors(node).collect()
            };
            for neighbour in neighbours {
                if visited.insert(neighbour) {
                    stack.push(neighbour);
                }
            }
        }

        &visited - sources
    }
}

fn reconstruct_path(
    pred: &FxHashMap<NodeIndex, Option<NodeIndex>>,
    succ: &FxHashMap<NodeIndex, Option<NodeIndex>>,
    meeting_point: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![];

    // From a source to the meeting point...
    let mut current = Some(meeting_point);
    while let Some(node) = current {
        path.push(node);
        current = pred[&node];
    }
    path.reverse();

    // ...and from the meeting point to a sink.
    let mut current = succ[&meeting_point];
    while let Some(node) = current {
        path.push(node);
        current = succ[&node];
    }

    path
}
