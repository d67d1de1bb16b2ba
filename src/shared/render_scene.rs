//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render`/`ui` sie konsumieren.
//! Alle Geometrie liegt in Weltkoordinaten; Spiegelung und Zoom wendet erst
//! der Konsument über den mitgelieferten [`Viewport`] an.

use crate::core::{Layer, Viewport};
use glam::Vec2;

/// Semantische Rolle eines Szenen-Elements.
///
/// Der Export-Filter entscheidet anhand der Rolle, was im Monochrom-Druck landet.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneRole {
    /// Leiterbahn auf einer Lage
    Route {
        /// Lage der Route
        layer: Layer,
    },
    /// Bauteil-Körper
    ComponentBody {
        /// ID des Bauteils
        component_id: String,
    },
    /// Bauteil-Name oder -Typ
    Label,
    /// Pin-Beschriftung
    PinLabel,
    /// Kupfer-Pad
    Pad,
    /// Bohrung im Pad
    PadHole,
    /// Markierung des offenen Routing-Starts
    PendingMarker,
    /// Rotations-/Lösch-Schaltflächen am selektierten Bauteil
    Affordance,
}

/// Horizontale Ausrichtung von Text am Ankerpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// Primitive Zeichenform
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Gerade Linie mit runden Enden
    Segment { from: Vec2, to: Vec2, width: f32 },
    /// Kreis
    Circle { center: Vec2, radius: f32 },
    /// Rechteck, um `center` um `angle` (Bogenmaß) gedreht
    Rect {
        center: Vec2,
        size: Vec2,
        angle: f32,
        corner_radius: f32,
    },
    /// Einzeilige Beschriftung. Wird nie mitgespiegelt.
    Text {
        anchor: Vec2,
        text: String,
        size: f32,
        align: TextAlign,
    },
}

/// Linienzug um eine Form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: [f32; 4],
    pub width: f32,
}

/// Ein Element der Szene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub role: SceneRole,
    pub shape: Shape,
    /// Füllfarbe (bei Segmenten die Linienfarbe). `None` = keine Füllung.
    pub fill: Option<[f32; 4]>,
    pub stroke: Option<Stroke>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Zeichenelemente in Zeichenreihenfolge
    pub items: Vec<SceneItem>,
    /// Viewport-Zustand für diesen Frame
    pub viewport: Viewport,
    /// Größe der Zeichenfläche in Pixeln, falls bekannt
    pub canvas_size: Option<[f32; 2]>,
    /// Rastermaß für das Punktraster
    pub grid_pitch: f32,
    /// Aktive Routing-Lage
    pub active_layer: Layer,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Alle Elemente einer Rolle
    pub fn items_with_role<'a>(
        &'a self,
        predicate: impl Fn(&SceneRole) -> bool + 'a,
    ) -> impl Iterator<Item = &'a SceneItem> + 'a {
        self.items.iter().filter(move |item| predicate(&item.role))
    }
}
