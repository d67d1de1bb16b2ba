//! Zeichnet eine [`RenderScene`] mit dem egui-Painter.
//!
//! Weltkoordinaten werden über den Viewport der Szene auf Pixel relativ zur
//! Flächenmitte abgebildet. Texte werden nie gespiegelt, nur ihr Anker.

use crate::shared::{RenderScene, SceneItem, Shape, TextAlign};
use glam::Vec2;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x11, 0x24, 0x0a);
/// #fbbf24 mit 40 % Deckkraft (vormultipliziert)
const GRID_DOT: egui::Color32 = egui::Color32::from_rgba_premultiplied(100, 76, 14, 102);
const GRID_DOT_RADIUS: f32 = 1.2;
/// Unterhalb dieses Punktabstands wird das Raster nicht gezeichnet
const GRID_MIN_SPACING_PX: f32 = 4.0;

/// Wandelt eine Szenenfarbe in eine egui-Farbe.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

/// Zeichnet Hintergrund, Punktraster und alle Szenen-Elemente in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    paint_grid(painter, rect, scene);

    let viewport = scene.viewport;
    let center = rect.center();
    let to_screen = |world: Vec2| {
        let p = viewport.world_to_screen(world);
        egui::pos2(center.x + p.x, center.y + p.y)
    };

    for item in &scene.items {
        paint_item(painter, item, viewport.scale, &to_screen);
    }
}

fn paint_grid(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let spacing = scene.grid_pitch * scene.viewport.scale;
    if spacing < GRID_MIN_SPACING_PX {
        return;
    }
    let origin = rect.center() + egui::vec2(scene.viewport.offset.x, scene.viewport.offset.y);
    let start_x = rect.left() + (origin.x - rect.left()).rem_euclid(spacing);
    let start_y = rect.top() + (origin.y - rect.top()).rem_euclid(spacing);

    let mut y = start_y;
    while y <= rect.bottom() {
        let mut x = start_x;
        while x <= rect.right() {
            painter.circle_filled(egui::pos2(x, y), GRID_DOT_RADIUS, GRID_DOT);
            x += spacing;
        }
        y += spacing;
    }
}

fn paint_item(
    painter: &egui::Painter,
    item: &SceneItem,
    scale: f32,
    to_screen: &impl Fn(Vec2) -> egui::Pos2,
) {
    let fill = item.fill.map(color32).unwrap_or(egui::Color32::TRANSPARENT);
    let stroke = item
        .stroke
        .map(|s| egui::Stroke::new(s.width * scale, color32(s.color)))
        .unwrap_or(egui::Stroke::NONE);

    match &item.shape {
        Shape::Segment { from, to, width } => {
            let stroke = egui::Stroke::new(width * scale, fill);
            let (a, b) = (to_screen(*from), to_screen(*to));
            painter.line_segment([a, b], stroke);
            // runde Enden
            painter.circle_filled(a, stroke.width * 0.5, fill);
            painter.circle_filled(b, stroke.width * 0.5, fill);
        }
        Shape::Circle { center, radius } => {
            painter.circle(to_screen(*center), radius * scale, fill, stroke);
        }
        Shape::Rect {
            center,
            size,
            angle,
            corner_radius,
        } => {
            // Rotationen sind Vielfache von 90°, das Rechteck bleibt achsparallel
            let quarter_turns = (angle / std::f32::consts::FRAC_PI_2).round() as i32;
            let size = if quarter_turns.rem_euclid(2) == 1 {
                egui::vec2(size.y, size.x)
            } else {
                egui::vec2(size.x, size.y)
            };
            let screen_rect = egui::Rect::from_center_size(to_screen(*center), size * scale);
            painter.rect(
                screen_rect,
                corner_radius * scale,
                fill,
                stroke,
                egui::StrokeKind::Inside,
            );
        }
        Shape::Text {
            anchor,
            text,
            size,
            align,
        } => {
            let align = match align {
                TextAlign::Start => egui::Align2::LEFT_BOTTOM,
                TextAlign::Middle => egui::Align2::CENTER_BOTTOM,
                TextAlign::End => egui::Align2::RIGHT_BOTTOM,
            };
            painter.text(
                to_screen(*anchor),
                align,
                text,
                egui::FontId::monospace((size * scale).max(1.0)),
                fill,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::color32;

    #[test]
    fn color32_rounds_and_clamps_channels() {
        assert_eq!(
            color32([1.0, 0.5, -1.0, 2.0]),
            egui::Color32::from_rgba_unmultiplied(255, 128, 0, 255)
        );
    }
}
