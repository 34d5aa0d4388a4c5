//! Node color assignment.

use indexmap::IndexMap;
use rivulet_core::SankeyNode;

const SCHEME_TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

/// Per-node fill colors, assigned once per render pass in node order so the
/// scheme cycling is deterministic. Explicit `node.color` values win over the
/// scheme. The same palette backs the legend data source.
pub struct NodePalette {
    colors: IndexMap<String, String>,
}

impl NodePalette {
    pub fn assign(nodes: &[SankeyNode]) -> Self {
        let mut colors = IndexMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            let color = node
                .color
                .clone()
                .unwrap_or_else(|| SCHEME_TABLEAU10[i % SCHEME_TABLEAU10.len()].to_string());
            colors.insert(node.id.clone(), color);
        }
        Self { colors }
    }

    pub fn color_of(&self, node_id: &str) -> &str {
        self.colors
            .get(node_id)
            .map(String::as_str)
            .unwrap_or("#888888")
    }
}
