//! Link ribbon primitive.

use crate::color::NodePalette;
use crate::options::{Layout, SankeyOptions};
use crate::scene::{HitTarget, LinkGradient, Renderable, Ribbon};
use crate::svg::fmt;
use rivulet_core::{Highlight, PositionedGraph};

/// Builds the `links` layer: one stroked bezier ribbon per link whose
/// endpoints both resolve. Links referencing unknown node ids are skipped.
pub(crate) fn render_links(
    graph: &PositionedGraph,
    options: &SankeyOptions,
    highlight: &Highlight,
    palette: &NodePalette,
    interactive: bool,
) -> Renderable {
    let mut children = Vec::with_capacity(graph.links.len());
    for link in &graph.links {
        let (Some(source), Some(target)) = (graph.node(&link.source), graph.node(&link.target))
        else {
            continue;
        };

        let d = match options.layout {
            Layout::Horizontal => {
                let sx = source.x1;
                let tx = target.x0;
                let mx = (sx + tx) / 2.0;
                format!(
                    "M{sx},{y0}C{mx},{y0},{mx},{y1},{tx},{y1}",
                    sx = fmt(sx),
                    y0 = fmt(link.y0),
                    mx = fmt(mx),
                    y1 = fmt(link.y1),
                    tx = fmt(tx),
                )
            }
            Layout::Vertical => {
                // Ribbon offsets run along the cross axis in vertical flows.
                let sy = source.y1;
                let ty = target.y0;
                let my = (sy + ty) / 2.0;
                format!(
                    "M{x0},{sy}C{x0},{my},{x1},{my},{x1},{ty}",
                    x0 = fmt(link.y0),
                    sy = fmt(sy),
                    my = fmt(my),
                    x1 = fmt(link.y1),
                    ty = fmt(ty),
                )
            }
        };

        let opacity =
            options.link_opacity_for(highlight.has_selection(), highlight.is_link_active(link));
        let gradient = options.enable_link_gradient.then(|| LinkGradient {
            from: palette.color_of(&link.source).to_string(),
            to: palette.color_of(&link.target).to_string(),
            vertical: options.layout == Layout::Vertical,
        });

        children.push(Renderable::Ribbon(Ribbon {
            d,
            stroke: palette.color_of(&link.source).to_string(),
            stroke_width: (link.width - options.link_contract * 2.0).max(1.0),
            opacity,
            blend_mode: options.link_blend_mode,
            gradient,
            hit: interactive.then(|| HitTarget::Link {
                source: link.source.clone(),
                target: link.target.clone(),
            }),
        }));
    }
    Renderable::group("links", children)
}
