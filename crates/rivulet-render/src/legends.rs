//! Legend primitive.
//!
//! Each configured legend entry becomes one anchored box of swatch+text rows
//! (or columns), all sharing the node-derived legend data.

use crate::color::NodePalette;
use crate::options::{LegendAnchor, LegendConfig, LegendDirection, SankeyOptions};
use crate::scene::{Rect, Renderable, Text, TextAnchor};
use rivulet_core::PositionedGraph;

const LEGEND_FONT_SIZE_PX: f64 = 11.0;
const SYMBOL_TEXT_GAP_PX: f64 = 6.0;

pub(crate) fn render_legends(
    graph: &PositionedGraph,
    options: &SankeyOptions,
    palette: &NodePalette,
) -> Renderable {
    let children = options
        .legends
        .iter()
        .map(|cfg| render_legend(cfg, graph, options, palette))
        .collect();
    Renderable::group("legends", children)
}

fn render_legend(
    cfg: &LegendConfig,
    graph: &PositionedGraph,
    options: &SankeyOptions,
    palette: &NodePalette,
) -> Renderable {
    let count = graph.nodes.len() as f64;
    let step = match cfg.direction {
        LegendDirection::Column => cfg.item_height + cfg.item_spacing,
        LegendDirection::Row => cfg.item_width + cfg.item_spacing,
    };
    // n items with n-1 gaps between them; no trailing gap after the last.
    let extent = (count * step - cfg.item_spacing).max(0.0);
    let (box_w, box_h) = match cfg.direction {
        LegendDirection::Column => (cfg.item_width, extent),
        LegendDirection::Row => (extent, cfg.item_height),
    };

    // Anchored inside the inner chart area, matching what the chart
    // dimensions passed to each legend renderable describe.
    let x0 = match cfg.anchor {
        LegendAnchor::TopLeft | LegendAnchor::Left | LegendAnchor::BottomLeft => 0.0,
        LegendAnchor::Top | LegendAnchor::Center | LegendAnchor::Bottom => {
            (options.width - box_w) / 2.0
        }
        LegendAnchor::TopRight | LegendAnchor::Right | LegendAnchor::BottomRight => {
            options.width - box_w
        }
    } + cfg.translate_x;
    let y0 = match cfg.anchor {
        LegendAnchor::TopLeft | LegendAnchor::Top | LegendAnchor::TopRight => 0.0,
        LegendAnchor::Left | LegendAnchor::Center | LegendAnchor::Right => {
            (options.height - box_h) / 2.0
        }
        LegendAnchor::BottomLeft | LegendAnchor::Bottom | LegendAnchor::BottomRight => {
            options.height - box_h
        }
    } + cfg.translate_y;

    let mut items = Vec::with_capacity(graph.nodes.len() * 2);
    for (i, node) in graph.nodes.iter().enumerate() {
        let (ix, iy) = match cfg.direction {
            LegendDirection::Column => (x0, y0 + i as f64 * step),
            LegendDirection::Row => (x0 + i as f64 * step, y0),
        };
        items.push(Renderable::Rect(Rect {
            x: ix,
            y: iy + (cfg.item_height - cfg.symbol_size) / 2.0,
            width: cfg.symbol_size,
            height: cfg.symbol_size,
            fill: palette.color_of(&node.id).to_string(),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
            hit: None,
        }));
        items.push(Renderable::Text(Text {
            x: ix + cfg.symbol_size + SYMBOL_TEXT_GAP_PX,
            y: iy + cfg.item_height / 2.0,
            dy_em: 0.35,
            anchor: TextAnchor::Start,
            content: node.label().to_string(),
            color: cfg.item_text_color.clone(),
            font_size: LEGEND_FONT_SIZE_PX,
            rotate: None,
        }));
    }
    Renderable::group("legend", items)
}
