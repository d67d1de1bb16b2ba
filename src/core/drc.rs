//! Design-Rule-Check: paarweiser Abstandstest der Bauteil-Footprints.
//!
//! Geprüft wird die unrotierte Bounding-Box. Rotierte Bauteile werden
//! bewusst nicht gesondert behandelt.

use super::Component;
use glam::Vec2;
use std::fmt;

/// Ein kollidierendes Bauteil-Paar (in Board-Reihenfolge)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// ID des zuerst platzierten Bauteils
    pub first_id: String,
    /// Name des zuerst platzierten Bauteils
    pub first_name: String,
    /// ID des später platzierten Bauteils
    pub second_id: String,
    /// Name des später platzierten Bauteils
    pub second_name: String,
}

impl Collision {
    /// Prüft ob die Kollision ein bestimmtes Bauteil betrifft
    pub fn involves(&self, component_id: &str) -> bool {
        self.first_id == component_id || self.second_id == component_id
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first_name, self.second_name)
    }
}

/// Ergebnis eines DRC-Laufs. Leer bedeutet: keine Verletzung.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrcReport {
    /// Alle gefundenen Kollisionen
    pub collisions: Vec<Collision>,
}

impl DrcReport {
    /// Keine Kollisionen gefunden
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty()
    }

    /// Menschenlesbare Paarliste, z.B. `["U1 & R1", "U2 & C3"]`
    pub fn pair_names(&self) -> Vec<String> {
        self.collisions.iter().map(ToString::to_string).collect()
    }
}

/// Prüft ob zwei Footprints die Mindestabstände unterschreiten.
///
/// Kollision genau dann, wenn `|Δx| < clearance.x` und `|Δy| < clearance.y`.
pub fn collides(a: &Component, b: &Component, clearance: Vec2) -> bool {
    let delta = (a.position - b.position).abs();
    delta.x < clearance.x && delta.y < clearance.y
}

/// O(n²)-Scan über alle Bauteil-Paare. Liest nur, mutiert nichts.
pub fn check_clearance<'a, I>(components: I, clearance: Vec2) -> DrcReport
where
    I: IntoIterator<Item = &'a Component>,
{
    let components: Vec<&Component> = components.into_iter().collect();
    let mut collisions = Vec::new();

    for (i, a) in components.iter().enumerate() {
        for b in &components[i + 1..] {
            if collides(a, b, clearance) {
                collisions.push(Collision {
                    first_id: a.id.clone(),
                    first_name: a.name.clone(),
                    second_id: b.id.clone(),
                    second_name: b.name.clone(),
                });
            }
        }
    }

    DrcReport { collisions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rotation;

    const CLEARANCE: Vec2 = Vec2::new(60.0, 90.0);

    fn comp(id: &str, x: f32, y: f32) -> Component {
        Component::new(id, id.to_uppercase(), "IC", Vec2::new(x, y), Vec::new())
    }

    #[test]
    fn close_components_collide_and_moving_clears_report() {
        let a = comp("a", 0.0, 0.0);
        let mut b = comp("b", 30.0, 50.0);

        let report = check_clearance([&a, &b], CLEARANCE);
        assert_eq!(report.pair_names(), vec!["A & B".to_string()]);

        b.position = Vec2::new(100.0, 200.0);
        let report = check_clearance([&a, &b], CLEARANCE);
        assert!(report.is_clean());
    }

    #[test]
    fn collision_is_symmetric_and_never_reflexive() {
        let a = comp("a", 10.0, 10.0);
        let b = comp("b", -40.0, 80.0);
        let c = comp("c", 500.0, 0.0);
        for (x, y) in [(&a, &b), (&a, &c), (&b, &c)] {
            assert_eq!(collides(x, y, CLEARANCE), collides(y, x, CLEARANCE));
        }

        let report = check_clearance([&a, &b, &c], CLEARANCE);
        assert!(report.collisions.iter().all(|c| c.first_id != c.second_id));
        assert_eq!(report.collisions.len(), 1);
        assert!(report.collisions[0].involves("a"));
        assert!(report.collisions[0].involves("b"));
    }

    #[test]
    fn thresholds_are_strict() {
        let a = comp("a", 0.0, 0.0);
        let b = comp("b", 60.0, 0.0);
        let c = comp("c", 0.0, 90.0);
        assert!(!collides(&a, &b, CLEARANCE));
        assert!(!collides(&a, &c, CLEARANCE));
    }

    #[test]
    fn rotation_is_ignored() {
        let a = comp("a", 0.0, 0.0);
        let mut b = comp("b", 0.0, 80.0);
        assert!(collides(&a, &b, CLEARANCE));
        b.rotation = Rotation::Deg90;
        assert!(collides(&a, &b, CLEARANCE));
    }
}
