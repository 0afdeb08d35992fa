use crate::model::Event;

use super::layout::{remap, sphere_position};
use super::{Edge, GraphSnapshot, LayoutConfig, Node};

/// One node per event, in event order. A position depends only on the
/// event's index, the event count and the radius, so the same dataset
/// always lays out identically.
pub fn build_nodes(events: &[Event], layout: &LayoutConfig) -> Vec<Node> {
    let count = events.len();
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let character_ids = event.character_ids();
            let size = remap(
                character_ids.len() as f64,
                layout.size_domain,
                layout.size_range,
            );
            Node {
                id: event.id,
                title: event.title.clone(),
                position: sphere_position(index, count, layout.radius),
                character_ids,
                size,
                color: layout.node_color,
            }
        })
        .collect()
}

/// Every unordered node pair sharing at least one character id becomes an
/// edge weighted by the shared count. Pairs with nothing in common leave
/// no trace.
pub fn build_edges(nodes: &[Node]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let strength = nodes[i]
                .character_ids
                .intersection(&nodes[j].character_ids)
                .count();
            if strength > 0 {
                edges.push(Edge {
                    from: i,
                    to: j,
                    strength,
                });
            }
        }
    }
    edges
}

/// Derives the full render artifact from a dataset.
pub fn build_graph(events: &[Event], layout: &LayoutConfig) -> GraphSnapshot {
    let nodes = build_nodes(events, layout);
    let edges = build_edges(&nodes);
    let max_link_strength = edges.iter().map(|edge| edge.strength).max().unwrap_or(0);
    GraphSnapshot {
        nodes,
        edges,
        max_link_strength,
    }
}
