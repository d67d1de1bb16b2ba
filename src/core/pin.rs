//! Anschlusspunkte (Pins) eines Bauteils.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Elektrische Art eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PinKind {
    /// Versorgungsspannung
    #[serde(rename = "VCC", alias = "POWER", alias = "vcc", alias = "power")]
    Power,
    /// Masse
    #[serde(rename = "GND", alias = "GROUND", alias = "gnd", alias = "ground")]
    Ground,
    /// Normales Signal
    #[default]
    #[serde(rename = "SIGNAL", alias = "signal")]
    Signal,
}

/// Ein Anschlusspunkt mit festem Offset relativ zum Bauteil-Ursprung.
///
/// Die Weltposition wird nie gespeichert, sondern immer über
/// `Component::pin_world_position` aus Bauteil-Position und Rotation abgeleitet.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    /// Eindeutig innerhalb des besitzenden Bauteils
    pub id: String,
    /// Anzeigename (z.B. "VCC", "D2")
    pub label: String,
    /// Lokaler Offset zum Bauteil-Ursprung (nicht Weltkoordinaten)
    pub offset: Vec2,
    /// Elektrische Art
    pub kind: PinKind,
}

impl Pin {
    /// Erstellt einen neuen Pin
    pub fn new(id: impl Into<String>, label: impl Into<String>, offset: Vec2, kind: PinKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            offset,
            kind,
        }
    }

    /// Prüft ob der Pin über ID oder Label (case-insensitiv) referenziert wird.
    pub fn matches_ref(&self, reference: &str) -> bool {
        self.id == reference || self.label.to_lowercase() == reference.to_lowercase()
    }
}
