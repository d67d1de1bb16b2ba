//! Use-Case: Ermittelt, was unter einer Screen-Position liegt.
//!
//! Reihenfolge: Schaltflächen des selektierten Bauteils, dann Pins, dann
//! Bauteil-Körper. Bauteile werden von oben (zuletzt gezeichnet) nach unten geprüft.

use crate::app::interaction::PointerTarget;
use crate::app::AppState;
use crate::core::{Component, Viewport};
use glam::Vec2;

/// Geometrie der Schaltflächen über einem selektierten Bauteil (Weltkoordinaten)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionHandles {
    /// Mittelpunkt der Rotations-Schaltfläche
    pub rotate: Vec2,
    /// Mittelpunkt der Lösch-Schaltfläche
    pub delete: Vec2,
    /// Radius beider Schaltflächen
    pub radius: f32,
    /// Mittelpunkt der Hinterlegung
    pub backdrop_center: Vec2,
    /// Größe der Hinterlegung
    pub backdrop_size: Vec2,
    /// Zoom-Ausgleich der Schaltflächen
    pub handle_scale: f32,
}

/// Berechnet die Schaltflächen-Geometrie eines Bauteils.
///
/// Die Leiste sitzt im lokalen Bauteil-System `90/scale + 15` über dem Anker
/// und wird mit `1/scale + 0.45` skaliert, damit sie bei jedem Zoom bedienbar
/// bleibt. Bei Spiegelung wird sie gegengespiegelt, Rotation bleibt links.
pub fn selection_handles(component: &Component, viewport: &Viewport) -> SelectionHandles {
    let k = 1.0 / viewport.scale + 0.45;
    let base = Vec2::new(0.0, -(90.0 / viewport.scale + 15.0));
    let side = if viewport.flipped { -1.0 } else { 1.0 };

    let to_world = |local: Vec2| component.position + component.rotation.apply(local);

    SelectionHandles {
        rotate: to_world(base + k * Vec2::new(-24.0 * side, -2.0)),
        delete: to_world(base + k * Vec2::new(24.0 * side, -2.0)),
        radius: 12.0 * k,
        backdrop_center: to_world(base + k * Vec2::new(0.0, -2.0)),
        backdrop_size: k * Vec2::new(96.0, 36.0),
        handle_scale: k,
    }
}

/// Hit-Test in Weltkoordinaten
pub fn pick_world(state: &AppState, world: Vec2) -> PointerTarget {
    if let Some(component) = state
        .editor
        .selected_component
        .as_deref()
        .and_then(|id| state.board.component(id))
    {
        let handles = selection_handles(component, &state.view.viewport);
        if handles.rotate.distance(world) <= handles.radius {
            return PointerTarget::RotateHandle(component.id.clone());
        }
        if handles.delete.distance(world) <= handles.radius {
            return PointerTarget::DeleteHandle(component.id.clone());
        }
    }

    if let Some(pin) = state.board.pin_at(world, state.options.pad_radius) {
        return PointerTarget::Pin(pin);
    }

    match state.board.component_at(world, state.options.body_size()) {
        Some(component) => PointerTarget::Component(component.id.clone()),
        None => PointerTarget::Empty,
    }
}

/// Hit-Test für eine Screen-Position relativ zur Flächenmitte
pub fn pick(state: &AppState, screen_pos: Vec2) -> PointerTarget {
    let world = state.view.viewport.screen_to_world(screen_pos);
    pick_world(state, world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pin, PinKind, PinRef, Rotation};
    use approx::assert_relative_eq;

    fn state_with_component() -> AppState {
        let mut state = AppState::new();
        state.view.viewport.scale = 1.0;
        state.board.add_component(Component::new(
            "comp_1",
            "U1",
            "IC",
            Vec2::new(100.0, 100.0),
            vec![Pin::new("pin_0", "A", Vec2::new(-25.4, -25.4), PinKind::Signal)],
        ));
        state
    }

    #[test]
    fn pins_win_over_bodies() {
        let state = state_with_component();
        assert_eq!(
            pick_world(&state, Vec2::new(74.6, 74.6)),
            PointerTarget::Pin(PinRef::new("comp_1", "pin_0"))
        );
        assert_eq!(
            pick_world(&state, Vec2::new(110.0, 120.0)),
            PointerTarget::Component("comp_1".into())
        );
        assert_eq!(pick_world(&state, Vec2::new(400.0, 0.0)), PointerTarget::Empty);
    }

    #[test]
    fn handles_only_for_selected_component() {
        let mut state = state_with_component();
        let component = state.board.component("comp_1").cloned().expect("vorhanden");
        let handles = selection_handles(&component, &state.view.viewport);

        assert_eq!(pick_world(&state, handles.rotate), PointerTarget::Empty);

        state.editor.selected_component = Some("comp_1".into());
        assert_eq!(
            pick_world(&state, handles.rotate),
            PointerTarget::RotateHandle("comp_1".into())
        );
        assert_eq!(
            pick_world(&state, handles.delete),
            PointerTarget::DeleteHandle("comp_1".into())
        );
    }

    #[test]
    fn handle_layout_follows_zoom_and_mirror() {
        let mut component = Component::new("c", "C", "IC", Vec2::ZERO, Vec::new());
        let mut viewport = Viewport::new();
        viewport.scale = 1.0;

        let handles = selection_handles(&component, &viewport);
        assert_relative_eq!(handles.handle_scale, 1.45);
        assert_relative_eq!(handles.rotate.x, -24.0 * 1.45, epsilon = 1e-4);
        assert_relative_eq!(handles.rotate.y, -105.0 - 2.0 * 1.45, epsilon = 1e-4);
        assert_relative_eq!(handles.radius, 12.0 * 1.45, epsilon = 1e-4);

        viewport.flipped = true;
        let mirrored = selection_handles(&component, &viewport);
        assert_relative_eq!(mirrored.rotate.x, 24.0 * 1.45, epsilon = 1e-4);

        component.rotation = Rotation::Deg90;
        viewport.flipped = false;
        let rotated = selection_handles(&component, &viewport);
        assert_relative_eq!(rotated.rotate.x, 105.0 + 2.0 * 1.45, epsilon = 1e-4);
    }

    #[test]
    fn pick_converts_from_screen_space() {
        let mut state = state_with_component();
        state.view.viewport.scale = 2.0;
        state.view.viewport.offset = Vec2::new(-200.0, -200.0);
        // Bauteilanker (100,100) liegt bei Screen (0,0)
        assert_eq!(
            pick(&state, Vec2::ZERO),
            PointerTarget::Component("comp_1".into())
        );
    }
}
