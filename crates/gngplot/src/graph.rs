//! Undirected graph view of a frame.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use gngplot_core::{frame::GraphFrame, identifier::NodeId};

/// The undirected graph a renderer draws.
///
/// Vertices are the edge endpoints, indexed in the order edges first mention
/// them. Entries of `nodes` that no edge touches are left out. Repeated and
/// reversed edges collapse into one undirected edge.
#[derive(Debug, Default)]
pub struct FrameGraph {
    graph: UnGraph<NodeId, ()>,
    indices: HashMap<NodeId, NodeIndex>,
}

impl FrameGraph {
    pub fn from_frame(frame: &GraphFrame) -> Self {
        let mut graph = Self::default();

        for edge in frame.edges() {
            let source = graph.ensure_node(edge.source());
            let target = graph.ensure_node(edge.target());
            graph.graph.update_edge(source, target, ());
        }

        graph
    }

    fn ensure_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&index) = self.indices.get(&id) {
            return index;
        }
        let index = self.graph.add_node(id);
        self.indices.insert(id, index);
        index
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Vertex identifiers in index order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices().map(|index| self.graph[index])
    }

    /// Edges as pairs of vertex indices, in insertion order
    pub fn index_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph.edge_indices().filter_map(|edge| {
            self.graph
                .edge_endpoints(edge)
                .map(|(a, b)| (a.index(), b.index()))
        })
    }

    /// Edges as pairs of identifiers, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        let graph = &self.graph;
        self.index_pairs()
            .map(move |(a, b)| (graph[NodeIndex::new(a)], graph[NodeIndex::new(b)]))
    }

    /// Index of a vertex
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.indices.get(&id).map(|index| index.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(json: &str) -> GraphFrame {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_duplicate_and_reversed_edges_collapse() {
        let graph = FrameGraph::from_frame(&frame(
            r#"{"nodes": {"a": [0,0], "b": [1,1]}, "edges": [["a","b"], ["b","a"], ["a","b"]]}"#,
        ));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_isolated_nodes_are_left_out() {
        let graph = FrameGraph::from_frame(&frame(
            r#"{"nodes": {"a": [0,0], "b": [1,1], "c": [2,2]}, "edges": [["a","b"]]}"#,
        ));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.index_of(NodeId::new("c")), None);
    }

    #[test]
    fn test_vertices_follow_edge_order() {
        let graph = FrameGraph::from_frame(&frame(
            r#"{"nodes": {"a": [0,0], "b": [1,1], "c": [2,2]}, "edges": [["c","b"], ["b","a"]]}"#,
        ));
        let nodes: Vec<NodeId> = graph.nodes().collect();
        assert_eq!(nodes, vec![NodeId::new("c"), NodeId::new("b"), NodeId::new("a")]);
    }

    #[test]
    fn test_dangling_endpoints_are_vertices() {
        let graph = FrameGraph::from_frame(&frame(
            r#"{"nodes": {"a": [0,0]}, "edges": [["a","ghost"]]}"#,
        ));
        let nodes: Vec<NodeId> = graph.nodes().collect();
        assert_eq!(nodes, vec![NodeId::new("a"), NodeId::new("ghost")]);
        assert_eq!(graph.index_pairs().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn test_edges_resolve_identifiers() {
        let graph = FrameGraph::from_frame(&frame(
            r#"{"nodes": {"x": [0,0], "y": [1,0]}, "edges": {"e": ["y","x"]}}"#,
        ));
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(NodeId::new("y"), NodeId::new("x"))]);
    }
}
