//! Builder für Render-Szenen aus dem AppState.
//!
//! Zeichenreihenfolge: Routes, dann je Bauteil Körper, Beschriftung und Pins,
//! zuletzt die Schaltflächen des selektierten Bauteils.

use crate::app::use_cases::hit_test::selection_handles;
use crate::app::AppState;
use crate::core::{Component, PinKind};
use crate::shared::{RenderScene, SceneItem, SceneRole, Shape, Stroke, TextAlign};
use glam::Vec2;

const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

const WHITE: [f32; 4] = rgba(0xffffff, 1.0);
const BODY_FILL: [f32; 4] = rgba(0x0f172a, 1.0);
const BODY_OUTLINE: [f32; 4] = rgba(0xffffff, 0.1);
const TYPE_LABEL: [f32; 4] = rgba(0x64748b, 1.0);
const PAD_FILL: [f32; 4] = rgba(0xd4af37, 1.0);
const HOLE_FILL: [f32; 4] = rgba(0x111111, 1.0);
const PENDING_RING: [f32; 4] = rgba(0x22c55e, 1.0);
const PIN_LABEL_POWER: [f32; 4] = rgba(0xef4444, 1.0);
const PIN_LABEL_GROUND: [f32; 4] = rgba(0x71717a, 1.0);
const PIN_LABEL_SIGNAL: [f32; 4] = rgba(0xfbbf24, 1.0);
const HANDLE_BACKDROP: [f32; 4] = rgba(0x020617, 0.9);
const HANDLE_ROTATE: [f32; 4] = rgba(0x3b82f6, 1.0);
const HANDLE_DELETE: [f32; 4] = rgba(0xef4444, 1.0);

const NAME_OFFSET_Y: f32 = -52.0;
const TYPE_OFFSET_Y: f32 = 58.0;
const NAME_SIZE: f32 = 10.0;
const TYPE_SIZE: f32 = 7.0;
const PIN_LABEL_SIZE: f32 = 7.0;
const PIN_LABEL_OFFSET: Vec2 = Vec2::new(12.0, 3.5);
const PENDING_RING_RADIUS: f32 = 10.0;
const BODY_CORNER_RADIUS: f32 = 4.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let viewport = state.view.viewport;
    let options = &state.options;
    let mut items = Vec::with_capacity(
        state.board.route_count() + state.board.component_count() * 8,
    );

    // Routes zuerst, damit Pads darüber liegen
    let route_width = 3.0 / viewport.scale + 1.8;
    for route in state.board.routes() {
        let (Some(from), Some(to)) = (
            state.board.pin_world_position(&route.from),
            state.board.pin_world_position(&route.to),
        ) else {
            continue;
        };
        let mut color = route.color;
        if route.layer != state.view.active_layer {
            color[3] *= options.inactive_layer_opacity;
        }
        items.push(SceneItem {
            role: SceneRole::Route { layer: route.layer },
            shape: Shape::Segment {
                from,
                to,
                width: route_width,
            },
            fill: Some(color),
            stroke: None,
        });
    }

    for component in state.board.components() {
        let selected = state.editor.selected_component.as_deref() == Some(component.id.as_str());
        push_component(state, component, selected, &mut items);
    }

    if let Some(component) = state
        .editor
        .selected_component
        .as_deref()
        .and_then(|id| state.board.component(id))
    {
        push_affordance(component, &viewport, &mut items);
    }

    RenderScene {
        items,
        viewport,
        canvas_size: state.view.canvas_size,
        grid_pitch: options.grid_pitch,
        active_layer: state.view.active_layer,
    }
}

fn push_component(
    state: &AppState,
    component: &Component,
    selected: bool,
    items: &mut Vec<SceneItem>,
) {
    let options = &state.options;
    let flipped = state.view.viewport.flipped;
    let to_world = |local: Vec2| component.position + component.rotation.apply(local);

    items.push(SceneItem {
        role: SceneRole::ComponentBody {
            component_id: component.id.clone(),
        },
        shape: Shape::Rect {
            center: component.position,
            size: options.body_size(),
            angle: component.rotation.radians(),
            corner_radius: BODY_CORNER_RADIUS,
        },
        fill: Some(BODY_FILL),
        stroke: Some(if selected {
            Stroke {
                color: WHITE,
                width: 2.5,
            }
        } else {
            Stroke {
                color: BODY_OUTLINE,
                width: 1.0,
            }
        }),
    });

    items.push(text_item(
        SceneRole::Label,
        to_world(Vec2::new(0.0, NAME_OFFSET_Y)),
        &component.name,
        NAME_SIZE,
        TextAlign::Middle,
        WHITE,
    ));
    items.push(text_item(
        SceneRole::Label,
        to_world(Vec2::new(0.0, TYPE_OFFSET_Y)),
        &component.component_type,
        TYPE_SIZE,
        TextAlign::Middle,
        TYPE_LABEL,
    ));

    for pin in &component.pins {
        let center = component.pin_world_position(pin);
        items.push(SceneItem {
            role: SceneRole::Pad,
            shape: Shape::Circle {
                center,
                radius: options.pad_radius,
            },
            fill: Some(PAD_FILL),
            stroke: None,
        });
        items.push(SceneItem {
            role: SceneRole::PadHole,
            shape: Shape::Circle {
                center,
                radius: options.hole_radius,
            },
            fill: Some(HOLE_FILL),
            stroke: None,
        });

        let pending = state
            .editor
            .route_start
            .as_ref()
            .is_some_and(|start| start.component_id == component.id && start.pin_id == pin.id);
        if pending {
            items.push(SceneItem {
                role: SceneRole::PendingMarker,
                shape: Shape::Circle {
                    center,
                    radius: PENDING_RING_RADIUS,
                },
                fill: None,
                stroke: Some(Stroke {
                    color: PENDING_RING,
                    width: 2.5,
                }),
            });
        }

        // Rechte Pins beschriften nach außen rechts, linke nach links
        let right_side = pin.offset.x > 0.0;
        let side = if right_side { 1.0 } else { -1.0 };
        let anchor = to_world(pin.offset + Vec2::new(side * PIN_LABEL_OFFSET.x, PIN_LABEL_OFFSET.y));
        let align = match (right_side, flipped) {
            (true, false) | (false, true) => TextAlign::Start,
            _ => TextAlign::End,
        };
        let color = match pin.kind {
            PinKind::Power => PIN_LABEL_POWER,
            PinKind::Ground => PIN_LABEL_GROUND,
            PinKind::Signal => PIN_LABEL_SIGNAL,
        };
        items.push(text_item(
            SceneRole::PinLabel,
            anchor,
            &pin.label,
            PIN_LABEL_SIZE,
            align,
            color,
        ));
    }
}

fn push_affordance(
    component: &Component,
    viewport: &crate::core::Viewport,
    items: &mut Vec<SceneItem>,
) {
    let handles = selection_handles(component, viewport);
    let k = handles.handle_scale;
    items.push(SceneItem {
        role: SceneRole::Affordance,
        shape: Shape::Rect {
            center: handles.backdrop_center,
            size: handles.backdrop_size,
            angle: component.rotation.radians(),
            corner_radius: 10.0 * k,
        },
        fill: Some(HANDLE_BACKDROP),
        stroke: Some(Stroke {
            color: BODY_OUTLINE,
            width: k,
        }),
    });

    for (center, color, glyph) in [
        (handles.rotate, HANDLE_ROTATE, "⟳"),
        (handles.delete, HANDLE_DELETE, "✕"),
    ] {
        items.push(SceneItem {
            role: SceneRole::Affordance,
            shape: Shape::Circle {
                center,
                radius: handles.radius,
            },
            fill: Some(color),
            stroke: Some(Stroke {
                color: WHITE,
                width: 1.5 * k,
            }),
        });
        items.push(text_item(
            SceneRole::Affordance,
            center + Vec2::new(0.0, 4.0 * k),
            glyph,
            12.0 * k,
            TextAlign::Middle,
            WHITE,
        ));
    }
}

fn text_item(
    role: SceneRole,
    anchor: Vec2,
    text: &str,
    size: f32,
    align: TextAlign,
    color: [f32; 4],
) -> SceneItem {
    SceneItem {
        role,
        shape: Shape::Text {
            anchor,
            text: text.to_string(),
            size,
            align,
        },
        fill: Some(color),
        stroke: None,
    }
}
