//! Bauteile mit Position, Rotation und eigenen Pins.

use super::Pin;
use glam::Vec2;

/// Erlaubte Bauteil-Rotationen (nur Vielfache von 90°)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Rotation in Grad (0, 90, 180, 270)
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Rotation im Bogenmaß
    pub fn radians(self) -> f32 {
        (self.degrees() as f32).to_radians()
    }

    /// Wandelt Grad in eine Rotation um. Negative Werte und Vielfache von 360
    /// werden normalisiert, alles andere als 90er-Schritte ist ungültig.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Nächste Rotation (+90° modulo 360)
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Dreht einen lokalen Vektor um den Ursprung.
    ///
    /// Entspricht `rx = x·cos θ − y·sin θ`, `ry = x·sin θ + y·cos θ`,
    /// für 90er-Schritte aber exakt ohne Rundungsfehler.
    pub fn apply(self, v: Vec2) -> Vec2 {
        match self {
            Rotation::Deg0 => v,
            Rotation::Deg90 => Vec2::new(-v.y, v.x),
            Rotation::Deg180 => Vec2::new(-v.x, -v.y),
            Rotation::Deg270 => Vec2::new(v.y, -v.x),
        }
    }

    /// Inverse Drehung (Welt → lokal)
    pub fn apply_inverse(self, v: Vec2) -> Vec2 {
        match self {
            Rotation::Deg0 => v,
            Rotation::Deg90 => Vec2::new(v.y, -v.x),
            Rotation::Deg180 => Vec2::new(-v.x, -v.y),
            Rotation::Deg270 => Vec2::new(-v.y, v.x),
        }
    }
}

/// Ein platziertes Bauteil. Besitzt seine Pins exklusiv.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Global eindeutige ID
    pub id: String,
    /// Anzeigename (z.B. "U1", "ESP32")
    pub name: String,
    /// Freie Klassifikation (z.B. "IC", "Resistor")
    pub component_type: String,
    /// Anker-Position in Weltkoordinaten
    pub position: Vec2,
    /// Rotation um den Anker
    pub rotation: Rotation,
    /// Pins in Reihenfolge
    pub pins: Vec<Pin>,
}

impl Component {
    /// Erstellt ein unrotiertes Bauteil an der gegebenen Position
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component_type: impl Into<String>,
        position: Vec2,
        pins: Vec<Pin>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type: component_type.into(),
            position,
            rotation: Rotation::Deg0,
            pins,
        }
    }

    /// Sucht einen Pin per exakter ID
    pub fn pin(&self, pin_id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == pin_id)
    }

    /// Sucht den ersten Pin, der per ID oder Label (case-insensitiv) passt
    pub fn find_pin_by_ref(&self, reference: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.matches_ref(reference))
    }

    /// Prüft ob das Bauteil über ID oder Name (case-insensitiv) referenziert wird.
    pub fn matches_ref(&self, reference: &str) -> bool {
        self.id == reference || self.name.to_lowercase() == reference.to_lowercase()
    }

    /// Weltposition eines Pins: lokaler Offset rotiert, dann um den Anker verschoben.
    pub fn pin_world_position(&self, pin: &Pin) -> Vec2 {
        self.position + self.rotation.apply(pin.offset)
    }

    /// Wandelt einen Weltpunkt in das lokale (unrotierte) Bauteil-Koordinatensystem.
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        self.rotation.apply_inverse(world - self.position)
    }

    /// Prüft ob ein Weltpunkt auf dem (rotierten) Bauteil-Körper liegt.
    pub fn body_contains(&self, world: Vec2, body_size: Vec2) -> bool {
        let local = self.world_to_local(world);
        let half = body_size * 0.5;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }

    /// Sucht den obersten Pin innerhalb von `radius` um den Weltpunkt.
    pub fn pin_at(&self, world: Vec2, radius: f32) -> Option<&Pin> {
        self.pins
            .iter()
            .rev()
            .find(|pin| self.pin_world_position(pin).distance(world) <= radius)
    }
}
