use crate::core::{ComponentTemplate, PinRef};
use crate::shared::ExportFormat;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Ansicht ─────────────────────────────────────────────────
    /// Größe der Zeichenfläche setzen
    SetCanvasSize { size: [f32; 2] },
    /// Ansicht um Screen-Delta verschieben
    PanView { delta: glam::Vec2 },
    /// Zoom mit Faktor (wird begrenzt)
    ZoomView { factor: f32 },
    /// Zoom und Pan zurücksetzen
    ResetView,
    /// Spiegelung umschalten
    ToggleFlip,
    /// Aktive Lage umschalten
    ToggleActiveLayer,
    /// Lagenmodus umschalten
    ToggleLayerMode,

    // ── Pointer-Automat ─────────────────────────────────────────
    /// Pan-Geste beginnen
    BeginPan,
    /// Drag eines Bauteils beginnen
    BeginComponentDrag { component_id: String },
    /// Gezogenes Bauteil um Screen-Delta verschieben
    DragComponent { screen_delta: glam::Vec2 },
    /// Aktuelle Pointer-Geste beenden
    EndPointerInteraction,

    // ── Selektion ───────────────────────────────────────────────
    /// Bauteil selektieren (ersetzt vorherige Selektion)
    SelectComponent { component_id: String },
    /// Selektion aufheben
    ClearSelection,
    /// Offenen Routing-Start verwerfen
    CancelPendingRoute,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Bauteil um 90° drehen
    RotateComponent { component_id: String },
    /// Bauteil samt Routes löschen
    DeleteComponent { component_id: String },
    /// Pin-Klick im Routing-Ablauf
    PinClick { pin: PinRef },
    /// Bauteil aus Vorlage platzieren
    PlaceComponent {
        template: ComponentTemplate,
        world_pos: Option<glam::Vec2>,
    },
    /// Alle Bauteile einrasten
    SnapToGrid,

    // ── Prüfung & Ausgabe ───────────────────────────────────────
    /// DRC ausführen
    RunDrc,
    /// Export ausführen
    Export { format: ExportFormat },
    /// Projekt speichern
    SaveProject { path: PathBuf },
    /// Projekt laden
    LoadProject { path: PathBuf },

    // ── Translator ──────────────────────────────────────────────
    /// Anfrage vorbereiten und in Bearbeitung gehen
    SubmitTranslatorPrompt { prompt: String },
    /// Antwort anwenden
    ApplyTranslatorResponse { payload: String },
    /// Fehlschlag melden
    FailTranslatorRequest { reason: String },

    // ── History ─────────────────────────────────────────────────
    /// Undo
    Undo,
    /// Redo
    Redo,
}
