//! Routing-Engine: Pin-Auflösung, deterministische Farbwahl und Lagen-Tagging.

use super::{Board, Layer, LayerMode, PinKind, PinRef, Route};

/// Farbregeln für neue Routes
#[derive(Debug, Clone, Copy)]
pub struct RouteStyle<'a> {
    /// Feste Farbe, sobald ein Ende ein Versorgungs-Pin ist
    pub power: [f32; 4],
    /// Feste Farbe, sobald ein Ende ein Masse-Pin ist
    pub ground: [f32; 4],
    /// Zyklische Palette für Signalnetze
    pub palette: &'a [[f32; 4]],
}

/// Wählt die Farbe einer neuen Route.
///
/// Priorität: Versorgung vor Masse vor Palette. Die Palette wird über
/// `route_count mod len` indiziert und ist damit reproduzierbar.
pub fn route_color(a: PinKind, b: PinKind, route_count: usize, style: &RouteStyle) -> [f32; 4] {
    if a == PinKind::Power || b == PinKind::Power {
        return style.power;
    }
    if a == PinKind::Ground || b == PinKind::Ground {
        return style.ground;
    }
    if style.palette.is_empty() {
        return style.power;
    }
    style.palette[route_count % style.palette.len()]
}

/// Lage einer neuen Route: im SINGLE-Modus immer TOP.
pub fn route_layer(layer_mode: LayerMode, active_layer: Layer) -> Layer {
    match layer_mode {
        LayerMode::Single => Layer::Top,
        LayerMode::Double => active_layer,
    }
}

/// Legt eine Route zwischen zwei Pins an.
///
/// Gibt `None` zurück (ohne Mutation), wenn eines der Enden nicht auflösbar ist.
pub fn create_route(
    board: &mut Board,
    from: &PinRef,
    to: &PinRef,
    layer: Layer,
    style: &RouteStyle,
) -> Option<String> {
    let from_kind = board.resolve_pin(from)?.1.kind;
    let to_kind = board.resolve_pin(to)?.1.kind;

    let color = route_color(from_kind, to_kind, board.route_count(), style);
    let id = board.allocate_id("route");
    board.add_route(Route {
        id: id.clone(),
        from: from.clone(),
        to: to.clone(),
        color,
        layer,
    });
    Some(id)
}

/// Unscharfe Auflösung einer Bauteil/Pin-Referenz (ID oder Name/Label, case-insensitiv).
///
/// Bei mehrdeutigen Namen gewinnt das zuerst platzierte Bauteil.
pub fn resolve_fuzzy(board: &Board, component_ref: &str, pin_ref: &str) -> Option<PinRef> {
    let component = board.find_component_by_ref(component_ref)?;
    let pin = component.find_pin_by_ref(pin_ref)?;
    Some(PinRef::new(component.id.clone(), pin.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Component, Pin};
    use glam::Vec2;

    const POWER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const GROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    const PALETTE: [[f32; 4]; 3] = [
        [0.1, 0.1, 0.1, 1.0],
        [0.2, 0.2, 0.2, 1.0],
        [0.3, 0.3, 0.3, 1.0],
    ];

    fn style() -> RouteStyle<'static> {
        RouteStyle {
            power: POWER,
            ground: GROUND,
            palette: &PALETTE,
        }
    }

    fn board() -> Board {
        let mut board = Board::new();
        board.add_component(Component::new(
            "u1",
            "MCU",
            "IC",
            Vec2::ZERO,
            vec![
                Pin::new("pin_0", "VCC", Vec2::new(-25.4, -25.4), PinKind::Power),
                Pin::new("pin_1", "GND", Vec2::new(25.4, -25.4), PinKind::Ground),
                Pin::new("pin_2", "TX", Vec2::new(-25.4, 0.0), PinKind::Signal),
                Pin::new("pin_3", "RX", Vec2::new(25.4, 0.0), PinKind::Signal),
            ],
        ));
        board.add_component(Component::new(
            "j1",
            "Header",
            "Connector",
            Vec2::new(200.0, 0.0),
            vec![
                Pin::new("pin_0", "1", Vec2::new(-25.4, -25.4), PinKind::Signal),
                Pin::new("pin_1", "2", Vec2::new(25.4, -25.4), PinKind::Signal),
            ],
        ));
        board
    }

    #[test]
    fn power_wins_over_ground_and_palette() {
        let s = style();
        assert_eq!(route_color(PinKind::Power, PinKind::Signal, 0, &s), POWER);
        assert_eq!(route_color(PinKind::Signal, PinKind::Power, 5, &s), POWER);
        assert_eq!(route_color(PinKind::Ground, PinKind::Power, 2, &s), POWER);
        assert_eq!(route_color(PinKind::Ground, PinKind::Signal, 1, &s), GROUND);
    }

    #[test]
    fn palette_cycles_by_route_count() {
        let s = style();
        let colors: Vec<[f32; 4]> = (0..4)
            .map(|n| route_color(PinKind::Signal, PinKind::Signal, n, &s))
            .collect();
        assert_eq!(colors, vec![PALETTE[0], PALETTE[1], PALETTE[2], PALETTE[0]]);
    }

    #[test]
    fn replaying_the_same_sequence_yields_identical_colors() {
        let pairs = [
            (PinRef::new("u1", "pin_2"), PinRef::new("j1", "pin_0")),
            (PinRef::new("u1", "pin_0"), PinRef::new("j1", "pin_1")),
            (PinRef::new("u1", "pin_3"), PinRef::new("j1", "pin_1")),
        ];
        let run = || {
            let mut b = board();
            for (from, to) in &pairs {
                create_route(&mut b, from, to, Layer::Top, &style()).expect("auflösbar");
            }
            b.routes().iter().map(|r| r.color).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
        assert_eq!(run(), vec![PALETTE[0], POWER, PALETTE[2]]);
    }

    #[test]
    fn unresolvable_endpoint_creates_nothing() {
        let mut b = board();
        let result = create_route(
            &mut b,
            &PinRef::new("u1", "pin_2"),
            &PinRef::new("missing", "pin_0"),
            Layer::Top,
            &style(),
        );
        assert!(result.is_none());
        assert_eq!(b.route_count(), 0);
    }

    #[test]
    fn single_mode_forces_top_layer() {
        assert_eq!(route_layer(LayerMode::Single, Layer::Bottom), Layer::Top);
        assert_eq!(route_layer(LayerMode::Double, Layer::Bottom), Layer::Bottom);
    }

    #[test]
    fn fuzzy_resolution_uses_names_and_labels() {
        let b = board();
        assert_eq!(
            resolve_fuzzy(&b, "mcu", "tx"),
            Some(PinRef::new("u1", "pin_2"))
        );
        assert_eq!(
            resolve_fuzzy(&b, "j1", "2"),
            Some(PinRef::new("j1", "pin_1"))
        );
        assert!(resolve_fuzzy(&b, "MCU", "MISO").is_none());
        assert!(resolve_fuzzy(&b, "unknown", "tx").is_none());
    }
}
