use std::collections::BTreeSet;

use serde::Serialize;

pub mod builder;
pub mod layout;

pub use builder::{build_edges, build_graph, build_nodes};
pub use layout::{remap, sphere_position};

/// Display tuning for the derived graph. The size domain is a plausible
/// character-count range, not a semantic constant; counts outside it
/// extrapolate linearly rather than clamping.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub radius: f64,
    pub size_domain: (f64, f64),
    pub size_range: (f64, f64),
    pub node_color: [u8; 4],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            size_domain: (0.0, 150.0),
            size_range: (10.0, 80.0),
            node_color: [50, 50, 125, 50],
        }
    }
}

/// One event placed on the sphere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: u64,
    pub title: String,
    pub position: [f64; 3],
    pub character_ids: BTreeSet<String>,
    pub size: f64,
    pub color: [u8; 4],
}

/// Co-occurrence link between two nodes, by index into the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub strength: usize,
}

/// The read-only artifact a renderer consumes. Rebuilding, after a
/// viewport change for instance, produces a fresh snapshot; nothing
/// accumulates across builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub max_link_strength: usize,
}
