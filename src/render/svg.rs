//! Serialisiert eine [`RenderScene`] als SVG-Dokument in Weltkoordinaten.
//!
//! Die Spiegelung wird hier nicht angewendet. Sie gehört zur Komposition
//! (Canvas bzw. Raster-Export).

use crate::shared::{RenderScene, SceneItem, Shape, Stroke, TextAlign};
use std::fmt::Write;

/// Ausschnitt und Pixelgröße des SVG-Dokuments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgFrame {
    /// Halbe Kantenlänge des Weltausschnitts um den Ursprung
    pub half_extent: f32,
    /// Kantenlänge in Pixeln
    pub size_px: u32,
    /// Hintergrundfarbe (`None` = transparent)
    pub background: Option<[f32; 4]>,
}

/// Erzeugt ein quadratisches SVG-Dokument für den gegebenen Ausschnitt.
pub fn scene_to_svg(scene: &RenderScene, frame: &SvgFrame) -> String {
    let h = frame.half_extent;
    let mut out = String::with_capacity(256 + scene.items.len() * 96);

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{x} {y} {w} {w}">"#,
        size = frame.size_px,
        x = -h,
        y = -h,
        w = 2.0 * h,
    );
    if let Some(bg) = frame.background {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" {}/>"#,
            -h,
            -h,
            2.0 * h,
            2.0 * h,
            paint_attr("fill", bg)
        );
    }

    for item in &scene.items {
        write_item(&mut out, item);
    }

    out.push_str("</svg>");
    out
}

fn write_item(out: &mut String, item: &SceneItem) {
    match &item.shape {
        Shape::Segment { from, to, width } => {
            // Segmente tragen ihre Farbe in `fill`
            let color = item.fill.unwrap_or([0.0, 0.0, 0.0, 1.0]);
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}" stroke-linecap="round" {}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                width,
                paint_attr("stroke", color)
            );
        }
        Shape::Circle { center, radius } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" {}{}/>"#,
                center.x,
                center.y,
                radius,
                fill_attr(item.fill),
                stroke_attr(item.stroke)
            );
        }
        Shape::Rect {
            center,
            size,
            angle,
            corner_radius,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" transform="rotate({} {} {})" {}{}/>"#,
                center.x - size.x * 0.5,
                center.y - size.y * 0.5,
                size.x,
                size.y,
                corner_radius,
                angle.to_degrees(),
                center.x,
                center.y,
                fill_attr(item.fill),
                stroke_attr(item.stroke)
            );
        }
        Shape::Text {
            anchor,
            text,
            size,
            align,
        } => {
            let anchor_attr = match align {
                TextAlign::Start => "start",
                TextAlign::Middle => "middle",
                TextAlign::End => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="monospace" text-anchor="{}" {}>{}</text>"#,
                anchor.x,
                anchor.y,
                size,
                anchor_attr,
                fill_attr(item.fill),
                escape_xml(text)
            );
        }
    }
}

fn fill_attr(fill: Option<[f32; 4]>) -> String {
    match fill {
        Some(color) => paint_attr("fill", color),
        None => r#"fill="none""#.to_string(),
    }
}

fn stroke_attr(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(stroke) => format!(
            r#" stroke-width="{}" {}"#,
            stroke.width,
            paint_attr("stroke", stroke.color)
        ),
        None => String::new(),
    }
}

fn paint_attr(name: &str, color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let mut attr = format!(
        r##"{name}="#{:02x}{:02x}{:02x}""##,
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    );
    if color[3] < 1.0 {
        let _ = write!(attr, r#" {name}-opacity="{}""#, color[3].clamp(0.0, 1.0));
    }
    attr
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Layer, Viewport};
    use crate::shared::SceneRole;
    use glam::Vec2;

    fn scene(items: Vec<SceneItem>) -> RenderScene {
        RenderScene {
            items,
            viewport: Viewport::new(),
            canvas_size: Some([800.0, 600.0]),
            grid_pitch: 25.4,
            active_layer: Layer::Top,
        }
    }

    #[test]
    fn header_uses_symmetric_viewbox() {
        let svg = scene_to_svg(
            &scene(Vec::new()),
            &SvgFrame {
                half_extent: 500.0,
                size_px: 2500,
                background: None,
            },
        );
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="2500" height="2500" viewBox="-500 -500 1000 1000">"#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn items_serialize_with_paint_and_escaped_text() {
        let svg = scene_to_svg(
            &scene(vec![
                SceneItem {
                    role: SceneRole::Route { layer: Layer::Top },
                    shape: Shape::Segment {
                        from: Vec2::ZERO,
                        to: Vec2::new(10.0, 0.0),
                        width: 2.0,
                    },
                    fill: Some([1.0, 0.0, 0.0, 0.5]),
                    stroke: None,
                },
                SceneItem {
                    role: SceneRole::Label,
                    shape: Shape::Text {
                        anchor: Vec2::ZERO,
                        text: "R&D <1>".into(),
                        size: 10.0,
                        align: TextAlign::Middle,
                    },
                    fill: Some([1.0, 1.0, 1.0, 1.0]),
                    stroke: None,
                },
            ]),
            &SvgFrame {
                half_extent: 10.0,
                size_px: 20,
                background: Some([1.0, 1.0, 1.0, 1.0]),
            },
        );
        assert!(svg.contains(r##"stroke="#ff0000" stroke-opacity="0.5""##));
        assert!(svg.contains("R&amp;D &lt;1&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }
}
