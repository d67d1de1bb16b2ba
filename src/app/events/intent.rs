use crate::core::{ComponentTemplate, PinRef};
use crate::shared::ExportFormat;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeichenfläche & Pointer ─────────────────────────────────
    /// Zeichenfläche hat (neue) Größe in Pixeln
    CanvasResized { size: [f32; 2] },
    /// Primärtaste gedrückt (Screen-Position relativ zur Flächenmitte)
    PointerPressed { screen_pos: glam::Vec2 },
    /// Pointer bewegt (Screen-Delta in Pixeln)
    PointerMoved { delta: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased,
    /// Mausrad; positives `delta_y` zoomt heraus
    WheelScrolled { delta_y: f32 },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom und Pan zurücksetzen
    ResetViewRequested,
    /// Spiegelung umschalten
    ToggleFlipRequested,
    /// Aktive Lage umschalten (nur DOUBLE)
    ToggleActiveLayerRequested,
    /// SINGLE ↔ DOUBLE
    ToggleLayerModeRequested,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Selektiertes Bauteil um 90° drehen
    RotateSelectedRequested,
    /// Selektiertes Bauteil löschen
    DeleteSelectedRequested,
    /// Bauteil per ID drehen
    RotateComponentRequested { component_id: String },
    /// Bauteil per ID löschen
    DeleteComponentRequested { component_id: String },
    /// Pin angeklickt (Routing-Geste)
    PinClicked { pin: PinRef },
    /// Escape: Selektion und offenen Routing-Start verwerfen
    EscapePressed,
    /// Bauteil aus Vorlage platzieren (`None` = zufällige Rasterzelle)
    PlaceComponentRequested {
        template: ComponentTemplate,
        world_pos: Option<glam::Vec2>,
    },
    /// Alle Bauteile ins Raster einrasten
    SnapToGridRequested,

    // ── Prüfung & Ausgabe ───────────────────────────────────────
    /// Design-Rule-Check ausführen
    DrcRequested,
    /// Druckbild exportieren
    ExportRequested { format: ExportFormat },
    /// Projekt speichern
    SaveProjectRequested { path: PathBuf },
    /// Projekt laden
    LoadProjectRequested { path: PathBuf },

    // ── Translator ──────────────────────────────────────────────
    /// Freitext-Anfrage an den Translator
    TranslatorPromptSubmitted { prompt: String },
    /// Antwort des Translators (JSON-Text)
    TranslatorResponseReceived { payload: String },
    /// Translator nicht erreichbar oder Fehlerantwort
    TranslatorRequestFailed { reason: String },

    // ── History ─────────────────────────────────────────────────
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,
}
