//! SVG string emission for composed scenes.

use crate::options::{BlendMode, SankeyOptions};
use crate::scene::{Rect, Renderable, Ribbon, Text, TextAnchor};
use std::fmt::Write as _;

/// Serializes a composed scene to a standalone SVG document.
///
/// Hit targets are interaction metadata for host renderers and are not
/// represented in the SVG output.
pub fn render_scene_svg(
    scene: &[Renderable],
    options: &SankeyOptions,
    diagram_id: Option<&str>,
) -> String {
    let outer_w = options.outer_width().max(1.0);
    let outer_h = options.outer_height().max(1.0);
    let id = escape_xml(diagram_id.unwrap_or("sankey"));

    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_count = 0usize;
    for renderable in scene {
        emit(&mut body, &mut defs, &mut gradient_count, renderable);
    }

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="100%" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" style="max-width: {w}px; background-color: white;" viewBox="0 0 {w} {h}" role="graphics-document document" aria-roledescription="sankey">"#,
        id = id,
        w = fmt(outer_w),
        h = fmt(outer_h),
    );
    if !defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&defs);
        out.push_str("</defs>");
    }
    let _ = write!(
        &mut out,
        r#"<g transform="translate({x},{y})">"#,
        x = fmt(options.margin.left),
        y = fmt(options.margin.top),
    );
    out.push_str(&body);
    out.push_str("</g></svg>");
    out
}

fn emit(body: &mut String, defs: &mut String, gradient_count: &mut usize, r: &Renderable) {
    match r {
        Renderable::Empty => {}
        Renderable::Group(g) => {
            let _ = write!(body, r#"<g class="{}">"#, escape_xml(&g.class));
            for child in &g.children {
                emit(body, defs, gradient_count, child);
            }
            body.push_str("</g>");
        }
        Renderable::Rect(rect) => emit_rect(body, rect),
        Renderable::Ribbon(ribbon) => emit_ribbon(body, defs, gradient_count, ribbon),
        Renderable::Text(text) => emit_text(body, text),
    }
}

fn emit_rect(body: &mut String, rect: &Rect) {
    let _ = write!(
        body,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}" fill-opacity="{o}""#,
        x = fmt(rect.x),
        y = fmt(rect.y),
        w = fmt(rect.width),
        h = fmt(rect.height),
        fill = escape_xml(&rect.fill),
        o = fmt(rect.opacity),
    );
    if let Some(stroke) = &rect.stroke {
        let _ = write!(
            body,
            r#" stroke="{s}" stroke-width="{w}""#,
            s = escape_xml(stroke),
            w = fmt(rect.stroke_width),
        );
    }
    body.push_str("/>");
}

fn emit_ribbon(body: &mut String, defs: &mut String, gradient_count: &mut usize, ribbon: &Ribbon) {
    let stroke = match &ribbon.gradient {
        Some(gradient) => {
            *gradient_count += 1;
            let gid = format!("link-gradient-{gradient_count}");
            let (x2, y2) = if gradient.vertical {
                ("0", "1")
            } else {
                ("1", "0")
            };
            let _ = write!(
                defs,
                r#"<linearGradient id="{gid}" x1="0" y1="0" x2="{x2}" y2="{y2}"><stop offset="0%" stop-color="{from}"/><stop offset="100%" stop-color="{to}"/></linearGradient>"#,
                from = escape_xml(&gradient.from),
                to = escape_xml(&gradient.to),
            );
            format!("url(#{gid})")
        }
        None => escape_xml(&ribbon.stroke),
    };

    let _ = write!(
        body,
        r#"<path d="{d}" fill="none" stroke="{stroke}" stroke-width="{w}" stroke-opacity="{o}""#,
        d = ribbon.d,
        w = fmt(ribbon.stroke_width),
        o = fmt(ribbon.opacity),
    );
    if ribbon.blend_mode != BlendMode::Normal {
        let _ = write!(
            body,
            r#" style="mix-blend-mode: {}""#,
            ribbon.blend_mode.css_name()
        );
    }
    body.push_str("/>");
}

fn emit_text(body: &mut String, text: &Text) {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let _ = write!(
        body,
        r#"<text x="{x}" y="{y}" dy="{dy}em" text-anchor="{anchor}" fill="{color}" font-size="{size}""#,
        x = fmt(text.x),
        y = fmt(text.y),
        dy = fmt(text.dy_em),
        color = escape_xml(&text.color),
        size = fmt(text.font_size),
    );
    if let Some(angle) = text.rotate {
        let _ = write!(
            body,
            r#" transform="rotate({a} {x} {y})""#,
            a = fmt(angle),
            x = fmt(text.x),
            y = fmt(text.y),
        );
    }
    let _ = write!(body, ">{}</text>", escape_xml(&text.content));
}

/// Stringifies numbers the way D3 generally does for SVG attributes: a
/// round-trippable decimal form, avoiding `-0` and tiny float noise from our
/// own calculations.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
