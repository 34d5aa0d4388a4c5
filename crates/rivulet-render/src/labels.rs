//! Node label primitive.

use crate::options::{LabelOrientation, LabelPosition, Layout, SankeyOptions};
use crate::scene::{Renderable, Text, TextAnchor};
use rivulet_core::PositionedGraph;

const LABEL_FONT_SIZE_PX: f64 = 14.0;

/// Builds the `labels` layer.
///
/// `Inside` places the label on the side of the bar that faces the chart
/// interior (the link region); `Outside` on the side facing away from it.
/// Which side that is flips at the chart midline, so labels in the first
/// half anchor differently from the second half.
pub(crate) fn render_labels(graph: &PositionedGraph, options: &SankeyOptions) -> Renderable {
    let mut children = Vec::with_capacity(graph.nodes.len());
    let color_for = |node: &rivulet_core::SankeyNode| {
        options
            .label_text_color
            .as_ref()
            .map(|f| f(node))
            .unwrap_or_else(|| "#000000".to_string())
    };

    for node in &graph.nodes {
        let (x, y, anchor) = match options.layout {
            Layout::Horizontal => {
                let y = (node.y0 + node.y1) / 2.0;
                let first_half = node.x0 < options.width / 2.0;
                let toward_interior = first_half == (options.label_position == LabelPosition::Inside);
                if toward_interior {
                    (node.x1 + options.label_padding, y, TextAnchor::Start)
                } else {
                    (node.x0 - options.label_padding, y, TextAnchor::End)
                }
            }
            Layout::Vertical => {
                let x = (node.x0 + node.x1) / 2.0;
                let first_half = node.y0 < options.height / 2.0;
                let toward_interior = first_half == (options.label_position == LabelPosition::Inside);
                if toward_interior {
                    (x, node.y1 + options.label_padding, TextAnchor::Middle)
                } else {
                    (x, node.y0 - options.label_padding, TextAnchor::Middle)
                }
            }
        };

        children.push(Renderable::Text(Text {
            x,
            y,
            dy_em: 0.35,
            anchor,
            content: node.label().to_string(),
            color: color_for(node),
            font_size: LABEL_FONT_SIZE_PX,
            rotate: match options.label_orientation {
                LabelOrientation::Horizontal => None,
                LabelOrientation::Vertical => Some(-90.0),
            },
        }));
    }
    Renderable::group("node-labels", children)
}
