//! Positioned Sankey graph model.
//!
//! Geometry is assigned by an external layout step (node order, coordinates
//! and ribbon widths are taken as given). The graph is immutable for the
//! duration of one render pass; links reference their endpoints by node id.

use crate::{Error, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node of the flow graph, rendered as a bar spanning `x0..x1` / `y0..y1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SankeyNode {
    pub id: String,
    /// Display label; falls back to the id when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Explicit fill color; when absent the renderer assigns one from its scheme.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub value: f64,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SankeyNode {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// A weighted directed edge between two nodes, rendered as a ribbon.
///
/// Identity is the `(source, target)` id pair; there is no multi-edge support
/// in the highlight model. `y0`/`y1` are the ribbon anchor offsets at the
/// source and target side, `width` the ribbon thickness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    pub value: f64,
    pub width: f64,
    pub y0: f64,
    pub y1: f64,
}

impl SankeyLink {
    /// Whether this link is incident to the given node id on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Nodes and links carrying layout geometry, as produced by the layout step.
///
/// Dangling endpoint ids (a link referencing a node that is not in `nodes`)
/// are tolerated: they never match a highlight test and never render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionedGraph {
    #[serde(default)]
    pub nodes: Vec<SankeyNode>,
    #[serde(default)]
    pub links: Vec<SankeyLink>,
}

impl PositionedGraph {
    pub fn new(nodes: Vec<SankeyNode>, links: Vec<SankeyLink>) -> Result<Self> {
        let graph = Self { nodes, links };
        graph.check_node_ids()?;
        Ok(graph)
    }

    /// Deserializes a graph from a JSON value and validates node identity.
    pub fn from_json(value: &Value) -> Result<Self> {
        let graph: Self = serde_json::from_value(Value::clone(value))?;
        graph.check_node_ids()?;
        Ok(graph)
    }

    pub fn node(&self, id: &str) -> Option<&SankeyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn link(&self, source: &str, target: &str) -> Option<&SankeyLink> {
        self.links
            .iter()
            .find(|l| l.source == source && l.target == target)
    }

    /// Node ids must be unique; everything downstream keys on them.
    fn check_node_ids(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(Error::InvalidModel {
                    message: format!("duplicate node id {}", node.id),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_parses_nodes_and_links() {
        let graph = PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "a", "value": 2.0, "x0": 0.0, "x1": 10.0, "y0": 0.0, "y1": 40.0 },
                { "id": "b", "value": 2.0, "x0": 90.0, "x1": 100.0, "y0": 0.0, "y1": 40.0 }
            ],
            "links": [
                { "source": "a", "target": "b", "value": 2.0, "width": 40.0, "y0": 20.0, "y1": 20.0 }
            ]
        }))
        .unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.links.len(), 1);
        assert!(graph.link("a", "b").is_some());
        assert!(graph.link("b", "a").is_none());
        assert_eq!(graph.node("a").unwrap().label(), "a");
    }

    #[test]
    fn from_json_rejects_duplicate_node_ids() {
        let err = PositionedGraph::from_json(&json!({
            "nodes": [
                { "id": "a", "x0": 0.0, "x1": 1.0, "y0": 0.0, "y1": 1.0 },
                { "id": "a", "x0": 2.0, "x1": 3.0, "y0": 0.0, "y1": 1.0 }
            ],
            "links": []
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid graph model: duplicate node id a");
    }

    #[test]
    fn dangling_link_endpoints_are_tolerated() {
        let graph = PositionedGraph::from_json(&json!({
            "nodes": [{ "id": "a", "x0": 0.0, "x1": 1.0, "y0": 0.0, "y1": 1.0 }],
            "links": [
                { "source": "a", "target": "ghost", "value": 1.0, "width": 1.0, "y0": 0.5, "y1": 0.5 }
            ]
        }))
        .unwrap();
        assert!(graph.node("ghost").is_none());
        assert!(graph.links[0].touches("ghost"));
    }
}
