//! Die zentrale Board-Datenstruktur mit Bauteilen und Routes.

use super::{Component, Pin, PinRef, Route};
use glam::Vec2;
use indexmap::IndexMap;

/// Gesamter editierbarer Inhalt einer Platine.
///
/// Bauteile behalten ihre Einfügereihenfolge (Zeichen-, Hit-Test- und DRC-Reihenfolge).
/// `Clone` erzeugt eine vollständig unabhängige Kopie ohne geteilte Daten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Alle Bauteile, indexiert nach ihrer ID
    components: IndexMap<String, Component>,
    /// Alle Routes in Erstellungsreihenfolge
    routes: Vec<Route>,
    /// Laufender Zähler für neue IDs
    next_serial: u64,
}

impl Board {
    /// Erstellt ein leeres Board
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergibt eine neue, im Board noch unbenutzte ID mit Präfix (z.B. `comp_3`).
    pub fn allocate_id(&mut self, prefix: &str) -> String {
        loop {
            self.next_serial += 1;
            let candidate = format!("{}_{}", prefix, self.next_serial);
            let taken = self.components.contains_key(&candidate)
                || self.routes.iter().any(|r| r.id == candidate);
            if !taken {
                return candidate;
            }
        }
    }

    /// Fügt ein Bauteil hinzu (ersetzt ein bestehendes mit gleicher ID)
    pub fn add_component(&mut self, component: Component) {
        self.components.insert(component.id.clone(), component);
    }

    /// Entfernt ein Bauteil und atomar alle Routes, die es referenzieren.
    ///
    /// Gibt das Bauteil und die mitgelöschten Routes zurück.
    pub fn remove_component(&mut self, component_id: &str) -> Option<(Component, Vec<Route>)> {
        let removed = self.components.shift_remove(component_id)?;
        let (dangling, kept): (Vec<Route>, Vec<Route>) = std::mem::take(&mut self.routes)
            .into_iter()
            .partition(|r| r.references_component(component_id));
        self.routes = kept;
        Some((removed, dangling))
    }

    /// Sucht ein Bauteil per ID
    pub fn component(&self, component_id: &str) -> Option<&Component> {
        self.components.get(component_id)
    }

    /// Mutable Referenz auf ein Bauteil
    pub fn component_mut(&mut self, component_id: &str) -> Option<&mut Component> {
        self.components.get_mut(component_id)
    }

    /// Prüft ob ein Bauteil existiert
    pub fn contains_component(&self, component_id: &str) -> bool {
        self.components.contains_key(component_id)
    }

    /// Iteriert alle Bauteile in Zeichenreihenfolge
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &Component> {
        self.components.values()
    }

    /// Iteriert alle Bauteile mutable
    pub fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.components.values_mut()
    }

    /// Alle Routes
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Fügt eine Route hinzu. Endpunkte müssen vorher aufgelöst worden sein.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Anzahl der Bauteile
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Anzahl der Routes
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Gibt `true` zurück wenn weder Bauteile noch Routes vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.routes.is_empty()
    }

    /// Löst eine schwache Pin-Referenz gegen den aktuellen Inhalt auf.
    pub fn resolve_pin(&self, pin_ref: &PinRef) -> Option<(&Component, &Pin)> {
        let component = self.components.get(&pin_ref.component_id)?;
        let pin = component.pin(&pin_ref.pin_id)?;
        Some((component, pin))
    }

    /// Weltposition eines referenzierten Pins (None bei ungültiger Referenz)
    pub fn pin_world_position(&self, pin_ref: &PinRef) -> Option<Vec2> {
        self.resolve_pin(pin_ref)
            .map(|(component, pin)| component.pin_world_position(pin))
    }

    /// Unscharfe Auflösung: erstes Bauteil, dessen ID oder Name (case-insensitiv) passt.
    pub fn find_component_by_ref(&self, reference: &str) -> Option<&Component> {
        self.components.values().find(|c| c.matches_ref(reference))
    }

    /// Entfernt alle Routes, deren Endpunkte nicht mehr auflösbar sind.
    /// Gibt die Anzahl entfernter Routes zurück.
    pub fn prune_dangling_routes(&mut self) -> usize {
        let before = self.routes.len();
        let components = &self.components;
        self.routes.retain(|route| {
            [&route.from, &route.to].iter().all(|end| {
                components
                    .get(&end.component_id)
                    .is_some_and(|c| c.pin(&end.pin_id).is_some())
            })
        });
        before - self.routes.len()
    }

    /// Oberstes Bauteil, dessen Körper den Weltpunkt enthält
    pub fn component_at(&self, world: Vec2, body_size: Vec2) -> Option<&Component> {
        self.components
            .values()
            .rev()
            .find(|c| c.body_contains(world, body_size))
    }

    /// Oberster Pin innerhalb von `radius` um den Weltpunkt
    pub fn pin_at(&self, world: Vec2, radius: f32) -> Option<PinRef> {
        self.components.values().rev().find_map(|c| {
            c.pin_at(world, radius)
                .map(|pin| PinRef::new(c.id.clone(), pin.id.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Layer, PinKind};

    fn two_pin_component(id: &str, name: &str, position: Vec2) -> Component {
        Component::new(
            id,
            name,
            "IC",
            position,
            vec![
                Pin::new("pin_0", "A", Vec2::new(-25.4, 0.0), PinKind::Signal),
                Pin::new("pin_1", "B", Vec2::new(25.4, 0.0), PinKind::Signal),
            ],
        )
    }

    fn route(id: &str, from: &str, to: &str) -> Route {
        Route {
            id: id.into(),
            from: PinRef::new(from, "pin_0"),
            to: PinRef::new(to, "pin_1"),
            color: [0.0, 0.0, 0.0, 1.0],
            layer: Layer::Top,
        }
    }

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.add_component(two_pin_component("a", "Alpha", Vec2::ZERO));
        board.add_component(two_pin_component("b", "Beta", Vec2::new(200.0, 0.0)));
        board.add_component(two_pin_component("c", "Gamma", Vec2::new(400.0, 0.0)));
        board.add_route(route("r1", "a", "b"));
        board.add_route(route("r2", "b", "c"));
        board.add_route(route("r3", "c", "a"));
        board
    }

    #[test]
    fn remove_component_cascades_routes_only_for_that_component() {
        let mut board = sample_board();
        let untouched_c = board.component("c").cloned();

        let (removed, dangling) = board.remove_component("a").expect("a vorhanden");

        assert_eq!(removed.id, "a");
        let dangling_ids: Vec<&str> = dangling.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(dangling_ids, vec!["r1", "r3"]);
        assert_eq!(board.routes().len(), 1);
        assert_eq!(board.routes()[0].id, "r2");
        assert_eq!(board.component("c").cloned(), untouched_c);
        assert!(board.remove_component("a").is_none());
    }

    #[test]
    fn allocate_id_skips_existing_ids() {
        let mut board = Board::new();
        board.add_component(two_pin_component("comp_1", "X", Vec2::ZERO));
        assert_eq!(board.allocate_id("comp"), "comp_2");
        assert_eq!(board.allocate_id("route"), "route_3");
    }

    #[test]
    fn find_component_by_ref_matches_id_or_name_case_insensitive() {
        let board = sample_board();
        assert_eq!(board.find_component_by_ref("BETA").map(|c| c.id.as_str()), Some("b"));
        assert_eq!(board.find_component_by_ref("c").map(|c| c.id.as_str()), Some("c"));
        assert!(board.find_component_by_ref("delta").is_none());
    }

    #[test]
    fn prune_dangling_routes_drops_unresolvable_endpoints() {
        let mut board = sample_board();
        board.add_route(Route {
            id: "r4".into(),
            from: PinRef::new("a", "pin_9"),
            to: PinRef::new("b", "pin_0"),
            color: [1.0; 4],
            layer: Layer::Bottom,
        });
        assert_eq!(board.prune_dangling_routes(), 1);
        assert_eq!(board.route_count(), 3);
    }

    #[test]
    fn hit_tests_return_topmost_entity() {
        let mut board = Board::new();
        board.add_component(two_pin_component("under", "U", Vec2::ZERO));
        board.add_component(two_pin_component("over", "O", Vec2::new(10.0, 0.0)));

        let hit = board.component_at(Vec2::new(5.0, 0.0), Vec2::new(60.0, 90.0));
        assert_eq!(hit.map(|c| c.id.as_str()), Some("over"));

        let pin = board.pin_at(Vec2::new(35.0, 1.0), 6.5);
        assert_eq!(pin, Some(PinRef::new("over", "pin_1")));
        assert!(board.pin_at(Vec2::new(100.0, 100.0), 6.5).is_none());
    }
}
