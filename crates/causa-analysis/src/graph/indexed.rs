//! Arena index over a borrowed [`CausalGraph`].
//!
//! Node and edge weights are positions into the graph's `nodes`/`edges`
//! vectors, so indexing never clones model data. Built once per analysis call
//! and dropped with it.

use std::collections::HashMap;

use causa_core::graph::{CausalEdge, CausalGraph, CausalNode};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::{debug, warn};

/// Indexed view of a causal graph. Dangling edges are left out; parallel
/// edges are kept.
pub struct IndexedGraph<'g> {
    source: &'g CausalGraph,
    pub graph: StableDiGraph<usize, usize>,
    index: HashMap<&'g str, NodeIndex>,
    dangling_edges: usize,
    duplicate_nodes: usize,
}

impl<'g> IndexedGraph<'g> {
    pub fn build(source: &'g CausalGraph) -> Self {
        let mut graph = StableDiGraph::with_capacity(source.nodes.len(), source.edges.len());
        let mut index = HashMap::with_capacity(source.nodes.len());
        let mut duplicate_nodes = 0;

        for (pos, node) in source.nodes.iter().enumerate() {
            if index.contains_key(node.id.as_str()) {
                duplicate_nodes += 1;
                warn!(node_id = %node.id, "duplicate node id, keeping first occurrence");
                continue;
            }
            let idx = graph.add_node(pos);
            index.insert(node.id.as_str(), idx);
        }

        let mut dangling_edges = 0;
        for (pos, edge) in source.edges.iter().enumerate() {
            match (
                index.get(edge.source_id.as_str()),
                index.get(edge.target_id.as_str()),
            ) {
                (Some(&from), Some(&to)) => {
                    graph.add_edge(from, to, pos);
                }
                _ => {
                    dangling_edges += 1;
                    warn!(
                        edge_id = %edge.id,
                        source_id = %edge.source_id,
                        target_id = %edge.target_id,
                        "skipping edge with dangling endpoint"
                    );
                }
            }
        }

        debug!(
            graph_id = %source.id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dangling_edges,
            "indexed causal graph"
        );

        Self {
            source,
            graph,
            index,
            dangling_edges,
            duplicate_nodes,
        }
    }

    /// The graph this index was built from.
    pub fn source(&self) -> &'g CausalGraph {
        self.source
    }

    /// Look up a node index by id.
    pub fn get_node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// The model node behind an index.
    ///
    /// # Panics
    /// If `idx` did not come from this graph.
    pub fn node(&self, idx: NodeIndex) -> &'g CausalNode {
        &self.source.nodes[self.graph[idx]]
    }

    /// The model edge behind an index.
    ///
    /// # Panics
    /// If `idx` did not come from this graph.
    pub fn edge(&self, idx: EdgeIndex) -> &'g CausalEdge {
        &self.source.edges[self.graph[idx]]
    }

    /// Incoming edges as `(edge, predecessor)` pairs, in input order.
    pub fn incoming(&self, idx: NodeIndex) -> Vec<(EdgeIndex, NodeIndex)> {
        self.neighbors(idx, Direction::Incoming)
    }

    /// Outgoing edges as `(edge, successor)` pairs, in input order.
    pub fn outgoing(&self, idx: NodeIndex) -> Vec<(EdgeIndex, NodeIndex)> {
        self.neighbors(idx, Direction::Outgoing)
    }

    pub fn has_incoming(&self, idx: NodeIndex) -> bool {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .next()
            .is_some()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Edges skipped because an endpoint id had no node.
    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    /// Nodes skipped because their id was already taken.
    pub fn duplicate_nodes(&self) -> usize {
        self.duplicate_nodes
    }

    fn neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<(EdgeIndex, NodeIndex)> {
        // petgraph walks adjacency newest-first; edge weights are input positions.
        let mut edges: Vec<(usize, EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Incoming => e.source(),
                    Direction::Outgoing => e.target(),
                };
                (*e.weight(), e.id(), other)
            })
            .collect();
        edges.sort_unstable_by_key(|(pos, _, _)| *pos);
        edges
            .into_iter()
            .map(|(_, edge, other)| (edge, other))
            .collect()
    }
}
