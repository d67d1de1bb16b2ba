//! Punkt-zu-Punkt-Netze (Routes) zwischen zwei Pins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physikalische Routing-Lage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Bestückungsseite
    #[default]
    Top,
    /// Lötseite
    Bottom,
}

impl Layer {
    /// Jeweils andere Lage
    pub fn toggled(self) -> Self {
        match self {
            Layer::Top => Layer::Bottom,
            Layer::Bottom => Layer::Top,
        }
    }

    /// Kleingeschriebener Name (für Dateinamen und Protokolle)
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Top => "top",
            Layer::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Einseitige oder doppelseitige Platine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerMode {
    /// Nur TOP, Lagenwechsel gesperrt
    Single,
    /// TOP und BOTTOM
    #[default]
    Double,
}

impl LayerMode {
    /// Jeweils anderer Modus
    pub fn toggled(self) -> Self {
        match self {
            LayerMode::Single => LayerMode::Double,
            LayerMode::Double => LayerMode::Single,
        }
    }
}

impl fmt::Display for LayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerMode::Single => f.write_str("SINGLE"),
            LayerMode::Double => f.write_str("DOUBLE"),
        }
    }
}

/// Schwache Referenz auf einen Pin eines Bauteils (nur IDs, kein Besitz).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PinRef {
    /// Bauteil-ID
    pub component_id: String,
    /// Pin-ID innerhalb des Bauteils
    pub pin_id: String,
}

impl PinRef {
    /// Erstellt eine neue Pin-Referenz
    pub fn new(component_id: impl Into<String>, pin_id: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            pin_id: pin_id.into(),
        }
    }
}

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component_id, self.pin_id)
    }
}

/// Eine Verbindung zwischen zwei Pins.
///
/// Die Endpunkte sind schwache Referenzen und müssen vor jeder Verwendung
/// gegen die aktuellen Bauteile aufgelöst werden.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Global eindeutige ID
    pub id: String,
    /// Start-Pin
    pub from: PinRef,
    /// Ziel-Pin
    pub to: PinRef,
    /// Anzeigefarbe (RGBA)
    pub color: [f32; 4],
    /// Routing-Lage
    pub layer: Layer,
}

impl Route {
    /// Prüft ob die Route ein Bauteil an einem der beiden Enden referenziert
    pub fn references_component(&self, component_id: &str) -> bool {
        self.from.component_id == component_id || self.to.component_id == component_id
    }
}
