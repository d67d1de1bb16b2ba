use crate::core::{routing, Layer, LayerMode, Viewport};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom/Spiegelung
    pub viewport: Viewport,
    /// Lage, auf der neue Routes entstehen (im SINGLE-Modus ignoriert)
    pub active_layer: Layer,
    /// Einseitig oder doppelseitig
    pub layer_mode: LayerMode,
    /// Größe der Zeichenfläche in Pixeln. `None` solange keine Zeichenfläche existiert.
    pub canvas_size: Option<[f32; 2]>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lage für eine jetzt erzeugte Route
    pub fn routing_layer(&self) -> Layer {
        routing::route_layer(self.layer_mode, self.active_layer)
    }
}
