//! Bauteil-Vorlagen und Raster-Platzierung neuer Bauteile.
//!
//! Pins einer Vorlage werden in zwei Spalten angeordnet: gerade Indizes
//! links (`x = -grid`), ungerade rechts (`x = +grid`), zeilenweise ab `y = -grid`.

use super::{Component, Pin, PinKind};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

/// Beschreibung eines Pins ohne Position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinTemplate {
    /// Anzeigename
    pub label: String,
    /// Elektrische Art (fehlend = Signal)
    #[serde(rename = "type", default)]
    pub kind: PinKind,
}

/// Beschreibung eines Bauteils ohne ID und Position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    /// Anzeigename
    pub name: String,
    /// Klassifikation
    #[serde(rename = "type", default)]
    pub component_type: String,
    /// Pins in Reihenfolge
    #[serde(default)]
    pub pins: Vec<PinTemplate>,
}

impl ComponentTemplate {
    /// Lokaler Offset des i-ten Pins im Zwei-Spalten-Layout
    pub fn pin_offset(index: usize, grid: f32) -> Vec2 {
        let x = if index % 2 == 0 { -grid } else { grid };
        let y = (index / 2) as f32 * grid - grid;
        Vec2::new(x, y)
    }

    /// Erzeugt ein unrotiertes Bauteil mit synthetisierten Pin-IDs (`pin_<i>`).
    pub fn instantiate(&self, id: impl Into<String>, position: Vec2, grid: f32) -> Component {
        let pins = self
            .pins
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Pin::new(
                    format!("pin_{}", i),
                    p.label.clone(),
                    Self::pin_offset(i, grid),
                    p.kind,
                )
            })
            .collect();
        Component::new(id, self.name.clone(), self.component_type.clone(), position, pins)
    }
}

/// Quelle für Rasterzellen neuer Bauteile
pub trait PlacementSource {
    /// Liefert eine Zelle `(k, m)` mit `k, m` in `0..=max_cell`
    fn next_cell(&mut self, max_cell: u32) -> (u32, u32);
}

/// Größter Zellindex bei zufälliger Platzierung
pub const PLACEMENT_MAX_CELL: u32 = 4;

/// Pseudozufällige Platzierung (xorshift64*)
#[derive(Debug, Clone)]
pub struct GridPlacer {
    state: u64,
}

impl GridPlacer {
    /// Seed aus der Hash-Zufallsquelle des Prozesses
    pub fn from_entropy() -> Self {
        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u64(0x9e37_79b9_7f4a_7c15);
        Self::seeded(hasher.finish())
    }

    /// Reproduzierbare Platzierung (Tests, Benchmarks)
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }
}

impl Default for GridPlacer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PlacementSource for GridPlacer {
    fn next_cell(&mut self, max_cell: u32) -> (u32, u32) {
        let span = u64::from(max_cell) + 1;
        let k = (self.next_u64() >> 33) % span;
        let m = (self.next_u64() >> 33) % span;
        (k as u32, m as u32)
    }
}

/// Immer dieselbe Zelle
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPlacer(pub u32, pub u32);

impl PlacementSource for FixedPlacer {
    fn next_cell(&mut self, max_cell: u32) -> (u32, u32) {
        (self.0.min(max_cell), self.1.min(max_cell))
    }
}

/// Weltposition einer Rasterzelle
pub fn cell_position(cell: (u32, u32), grid: f32) -> Vec2 {
    Vec2::new(cell.0 as f32 * grid, cell.1 as f32 * grid)
}
