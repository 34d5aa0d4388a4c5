//! Node bar primitive.

use crate::color::NodePalette;
use crate::options::SankeyOptions;
use crate::scene::{HitTarget, Rect, Renderable};
use rivulet_core::{Highlight, PositionedGraph};

/// Builds the `nodes` layer: one rect per node bar.
pub(crate) fn render_nodes(
    graph: &PositionedGraph,
    options: &SankeyOptions,
    highlight: &Highlight,
    palette: &NodePalette,
    interactive: bool,
) -> Renderable {
    let mut children = Vec::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        let fill = palette.color_of(&node.id).to_string();
        let stroke = (options.node_border_width > 0.0).then(|| {
            options
                .node_border_color
                .as_ref()
                .map(|f| f(node))
                .unwrap_or_else(|| fill.clone())
        });

        children.push(Renderable::Rect(Rect {
            x: node.x0,
            y: node.y0,
            width: node.width(),
            height: node.height(),
            fill,
            stroke,
            stroke_width: options.node_border_width,
            opacity: options
                .node_opacity_for(highlight.has_selection(), highlight.is_node_active(node)),
            hit: interactive.then(|| HitTarget::Node(node.id.clone())),
        }));
    }
    Renderable::group("nodes", children)
}
