//! Force-directed 3D layout
//!
//! Fruchterman-Reingold spring layout used by the 3D plotter, which ignores
//! frame coordinates by default and arranges the graph itself.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use gngplot_core::geometry::Point3;

use crate::graph::FrameGraph;

/// Smallest distance used in force calculations, to keep forces finite.
const MIN_DISTANCE: f32 = 0.01;

/// Spring layout engine
///
/// Vertices start at random positions in the unit cube. Every iteration each
/// pair of vertices repels with force `k² / d` and each edge attracts with
/// `d² / k`, where `k = 1 / sqrt(n)`. Displacements are capped by a
/// temperature that cools linearly to zero. The result is centred on the
/// origin and scaled so the largest coordinate magnitude is 1.
#[derive(Debug, Clone)]
pub struct SpringLayout {
    iterations: usize,
    seed: Option<u64>,
}

impl SpringLayout {
    /// Create a new spring layout engine
    pub fn new() -> Self {
        Self {
            iterations: 50,
            seed: None,
        }
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Fix the random initial positions
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Initialize random positions in the unit cube
    fn initialize_positions(&self, count: usize) -> Vec<Point3> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        (0..count)
            .map(|_| Point3::new(rng.random(), rng.random(), rng.random()))
            .collect()
    }

    /// Positions for each vertex of `graph`, indexed like the graph.
    pub fn calculate(&self, graph: &FrameGraph) -> Vec<Point3> {
        let count = graph.node_count();
        match count {
            0 => return Vec::new(),
            1 => return vec![Point3::default()],
            _ => {}
        }

        let edges: Vec<(usize, usize)> = graph
            .index_pairs()
            .filter(|(a, b)| a != b)
            .collect();

        let mut positions = self.initialize_positions(count);
        let k = (1.0 / count as f32).sqrt();

        let mut temperature = 0.1 * extent(&positions);
        let cooling = temperature / (self.iterations as f32 + 1.0);

        for _ in 0..self.iterations {
            let mut displacements = vec![Point3::default(); count];

            // Repulsive forces between all vertices
            for i in 0..count {
                for j in 0..count {
                    if i == j {
                        continue;
                    }
                    let delta = positions[i].sub(positions[j]);
                    let distance = delta.length().max(MIN_DISTANCE);
                    let push = delta.scale(k * k / (distance * distance));
                    displacements[i] = displacements[i].add(push);
                }
            }

            // Attractive forces along edges
            for &(a, b) in &edges {
                let delta = positions[a].sub(positions[b]);
                let distance = delta.length().max(MIN_DISTANCE);
                let pull = delta.scale(distance / k);
                displacements[a] = displacements[a].sub(pull);
                displacements[b] = displacements[b].add(pull);
            }

            // Move each vertex at most `temperature` along its displacement
            for (position, displacement) in positions.iter_mut().zip(&displacements) {
                let length = displacement.length().max(MIN_DISTANCE);
                *position = position.add(displacement.scale(temperature / length));
            }

            temperature -= cooling;
        }

        rescale(&mut positions);
        debug!(nodes = count, edges = edges.len(), iterations = self.iterations; "Spring layout calculated");

        positions
    }
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Largest per-axis spread of the positions
fn extent(positions: &[Point3]) -> f32 {
    let axis = |value: fn(Point3) -> f32| {
        let (lo, hi) = positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(value(p)), hi.max(value(p)))
            });
        hi - lo
    };
    axis(Point3::x).max(axis(Point3::y)).max(axis(Point3::z))
}

/// Center on the mean and scale the largest magnitude to 1
fn rescale(positions: &mut [Point3]) {
    let count = positions.len() as f32;
    let mean = positions
        .iter()
        .fold(Point3::default(), |acc, &p| acc.add(p))
        .scale(1.0 / count);

    for position in positions.iter_mut() {
        *position = position.sub(mean);
    }

    let max = positions.iter().map(|p| p.max_abs()).fold(0.0, f32::max);
    if max > 0.0 {
        for position in positions.iter_mut() {
            *position = position.scale(1.0 / max);
        }
    }
}
