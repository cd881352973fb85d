//! The graph frame data model.
//!
//! A [`GraphFrame`] is one snapshot of a graph, decoded from one JSON
//! document of the shape
//!
//! ```json
//! {"nodes": {"a": [0, 0], "b": [1, 1]}, "edges": [["a", "b"]]}
//! ```
//!
//! `edges` may also be an object whose values are the pairs, as in
//! `{"e1": ["a", "b"]}`. Both shapes decode to the same edge list. Edges are
//! not checked against `nodes`; a dangling endpoint is the renderer's problem.

use std::fmt;

use indexmap::IndexMap;
use log::trace;
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, SeqAccess, Visitor},
};
use thiserror::Error;

use crate::{
    geometry::{Point, Point3},
    identifier::NodeId,
};

/// Error raised when a coordinate does not have two or three components.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("coordinate must have 2 or 3 components, found {0}")]
pub struct CoordinateError(usize);

/// A node position with two or three components.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub enum Coordinate {
    Planar(f64, f64),
    Spatial(f64, f64, f64),
}

impl Coordinate {
    /// Number of components (2 or 3)
    pub fn dimension(&self) -> usize {
        match self {
            Self::Planar(..) => 2,
            Self::Spatial(..) => 3,
        }
    }

    /// The first two components; a third is dropped.
    pub fn to_point(&self) -> Point {
        match *self {
            Self::Planar(x, y) | Self::Spatial(x, y, _) => Point::new(x as f32, y as f32),
        }
    }

    /// All three components; a planar coordinate lies at `z = 0`.
    pub fn to_point3(&self) -> Point3 {
        match *self {
            Self::Planar(x, y) => Point3::new(x as f32, y as f32, 0.0),
            Self::Spatial(x, y, z) => Point3::new(x as f32, y as f32, z as f32),
        }
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            &[x, y] => Ok(Self::Planar(x, y)),
            &[x, y, z] => Ok(Self::Spatial(x, y, z)),
            other => Err(CoordinateError(other.len())),
        }
    }
}

/// An undirected `(source, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Edge(NodeId, NodeId);

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self(source, target)
    }

    pub fn source(&self) -> NodeId {
        self.0
    }

    pub fn target(&self) -> NodeId {
        self.1
    }
}

/// One snapshot of a graph's nodes and edges.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphFrame {
    nodes: IndexMap<NodeId, Coordinate>,
    #[serde(deserialize_with = "deserialize_edges")]
    edges: Vec<Edge>,
}

impl GraphFrame {
    /// Builds a frame directly, bypassing JSON.
    pub fn new(nodes: IndexMap<NodeId, Coordinate>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Nodes in document order
    pub fn nodes(&self) -> &IndexMap<NodeId, Coordinate> {
        &self.nodes
    }

    /// Edges in document order, duplicates included
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up the coordinate of a node
    pub fn coordinate(&self, id: NodeId) -> Option<&Coordinate> {
        self.nodes.get(&id)
    }

    /// Number of keys in `nodes`
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of entries in `edges` as supplied
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            edges: self.edge_count(),
            nodes: self.node_count(),
        }
    }
}

/// Edge and node counts of a frame, printed after a static plot.
///
/// ```
/// # use gngplot_core::frame::FrameSummary;
/// let summary = FrameSummary { edges: 1, nodes: 2 };
/// assert_eq!(summary.to_string(), "Edges: 1\nNodes: 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    pub edges: usize,
    pub nodes: usize,
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edges: {}\nNodes: {}", self.edges, self.nodes)
    }
}

struct EdgesVisitor;

impl<'de> Visitor<'de> for EdgesVisitor {
    type Value = Vec<Edge>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of edge pairs or a mapping whose values are edge pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut edges = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(edge) = seq.next_element::<Edge>()? {
            edges.push(edge);
        }
        Ok(edges)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut edges = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((_, edge)) = map.next_entry::<serde::de::IgnoredAny, Edge>()? {
            edges.push(edge);
        }
        trace!(edges = edges.len(); "Edges decoded from a mapping, keys ignored");
        Ok(edges)
    }
}

fn deserialize_edges<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Edge>, D::Error> {
    deserializer.deserialize_any(EdgesVisitor)
}
