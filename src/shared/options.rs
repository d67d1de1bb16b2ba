//! Zentrale Konfiguration für den PCB-Layout-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Raster ──────────────────────────────────────────────────────────

/// Rastermaß in Welteinheiten (0.1 Zoll).
pub const GRID_PITCH: f32 = 25.4;

// ── Viewport ────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 10.0;
/// Zoom-Faktor beim Hineinzoomen.
pub const ZOOM_IN_FACTOR: f32 = 1.1;
/// Zoom-Faktor beim Herauszoomen.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;
/// Zoom nach "Ansicht zurücksetzen".
pub const RESET_SCALE: f32 = 1.5;

// ── DRC ─────────────────────────────────────────────────────────────

/// Mindestabstand horizontal (Bauteilmitte zu Bauteilmitte).
pub const DRC_CLEARANCE_X: f32 = 60.0;
/// Mindestabstand vertikal.
pub const DRC_CLEARANCE_Y: f32 = 90.0;

// ── Undo ────────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 30;

// ── Farben ──────────────────────────────────────────────────────────

const fn hex(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Zyklische Palette für Signal-Routes.
pub const ROUTE_PALETTE: [[f32; 4]; 10] = [
    hex(0x3b, 0x82, 0xf6),
    hex(0x22, 0xc5, 0x5e),
    hex(0xea, 0xb3, 0x08),
    hex(0xa8, 0x55, 0xf7),
    hex(0xec, 0x48, 0x99),
    hex(0x06, 0xb6, 0xd4),
    hex(0xf9, 0x73, 0x16),
    hex(0xff, 0xff, 0xff),
    hex(0x84, 0xcc, 0x16),
    hex(0x63, 0x66, 0xf1),
];
/// Farbe für Routes an Versorgungs-Pins (Rot).
pub const POWER_COLOR: [f32; 4] = hex(0xef, 0x44, 0x44);
/// Farbe für Routes an Masse-Pins (Schwarz).
pub const GROUND_COLOR: [f32; 4] = hex(0x00, 0x00, 0x00);
/// Deckkraft von Routes auf der inaktiven Lage.
pub const INACTIVE_LAYER_OPACITY: f32 = 0.1;

// ── Footprint ───────────────────────────────────────────────────────

/// Bauteil-Körper (Breite, Höhe) in Welteinheiten.
pub const COMPONENT_BODY_SIZE: [f32; 2] = [60.0, 90.0];
/// Pad-Radius (zugleich Pin-Hitbox).
pub const PAD_RADIUS: f32 = 6.5;
/// Bohrloch-Radius.
pub const HOLE_RADIUS: f32 = 2.5;

// ── Export ──────────────────────────────────────────────────────────

/// Kantenlänge des Export-Rasters in Pixeln.
pub const EXPORT_SIZE_PX: u32 = 2500;
/// Halbe Kantenlänge des exportierten Weltausschnitts.
pub const EXPORT_VIEWBOX_HALF_EXTENT: f32 = 500.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pcb_layout_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Raster ──────────────────────────────────────────────────
    /// Rastermaß für Snap und Pin-Layout
    pub grid_pitch: f32,

    // ── Viewport ────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub zoom_min: f32,
    /// Maximaler Zoom-Faktor
    pub zoom_max: f32,
    /// Mausrad nach oben
    pub wheel_zoom_in_factor: f32,
    /// Mausrad nach unten
    pub wheel_zoom_out_factor: f32,
    /// Zoom-Button "+"
    pub button_zoom_in_factor: f32,
    /// Zoom-Button "−"
    pub button_zoom_out_factor: f32,
    /// Zoom nach Reset
    pub reset_scale: f32,

    // ── DRC ─────────────────────────────────────────────────────
    /// Mindestabstand X
    pub drc_clearance_x: f32,
    /// Mindestabstand Y
    pub drc_clearance_y: f32,

    // ── Undo ────────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,

    // ── Routes ──────────────────────────────────────────────────
    /// Palette für Signal-Routes
    pub route_palette: Vec<[f32; 4]>,
    /// Farbe für Versorgungs-Routes
    pub power_color: [f32; 4],
    /// Farbe für Masse-Routes
    pub ground_color: [f32; 4],
    /// Deckkraft der inaktiven Lage
    pub inactive_layer_opacity: f32,

    // ── Footprint ───────────────────────────────────────────────
    /// Bauteil-Körpergröße
    pub component_body_size: [f32; 2],
    /// Pad-Radius
    pub pad_radius: f32,
    /// Bohrloch-Radius
    pub hole_radius: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Kantenlänge des Export-Rasters
    pub export_size_px: u32,
    /// Halbe Kantenlänge des exportierten Ausschnitts
    pub export_viewbox_half_extent: f32,
    /// Zielverzeichnis für Exporte (leer = Arbeitsverzeichnis)
    pub export_directory: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_pitch: GRID_PITCH,

            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            wheel_zoom_in_factor: ZOOM_IN_FACTOR,
            wheel_zoom_out_factor: ZOOM_OUT_FACTOR,
            button_zoom_in_factor: ZOOM_IN_FACTOR,
            button_zoom_out_factor: ZOOM_OUT_FACTOR,
            reset_scale: RESET_SCALE,

            drc_clearance_x: DRC_CLEARANCE_X,
            drc_clearance_y: DRC_CLEARANCE_Y,

            history_depth: HISTORY_DEPTH,

            route_palette: ROUTE_PALETTE.to_vec(),
            power_color: POWER_COLOR,
            ground_color: GROUND_COLOR,
            inactive_layer_opacity: INACTIVE_LAYER_OPACITY,

            component_body_size: COMPONENT_BODY_SIZE,
            pad_radius: PAD_RADIUS,
            hole_radius: HOLE_RADIUS,

            export_size_px: EXPORT_SIZE_PX,
            export_viewbox_half_extent: EXPORT_VIEWBOX_HALF_EXTENT,
            export_directory: String::new(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Korrigiert widersprüchliche Werte aus einer Datei.
    ///
    /// Vertauschte Zoom-Grenzen werden getauscht, nicht-endliche oder
    /// nicht-positive Grenzen auf die Standardwerte zurückgesetzt.
    fn sanitized(mut self) -> Self {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.zoom_min) || !valid(self.zoom_max) {
            log::warn!(
                "Ungültige Zoom-Grenzen ({}, {}), verwende Standardwerte",
                self.zoom_min,
                self.zoom_max
            );
            self.zoom_min = ZOOM_MIN;
            self.zoom_max = ZOOM_MAX;
        } else if self.zoom_min > self.zoom_max {
            log::warn!(
                "Zoom-Grenzen vertauscht ({} > {}), werden getauscht",
                self.zoom_min,
                self.zoom_max
            );
            std::mem::swap(&mut self.zoom_min, &mut self.zoom_max);
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pcb_layout_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pcb_layout_editor.toml")
    }

    /// DRC-Mindestabstand als Vektor
    pub fn drc_clearance(&self) -> glam::Vec2 {
        glam::Vec2::new(self.drc_clearance_x, self.drc_clearance_y)
    }

    /// Körpergröße als Vektor
    pub fn body_size(&self) -> glam::Vec2 {
        glam::Vec2::from(self.component_body_size)
    }

    /// Farbregeln für neue Routes
    pub fn route_style(&self) -> crate::core::RouteStyle<'_> {
        crate::core::RouteStyle {
            power: self.power_color,
            ground: self.ground_color,
            palette: &self.route_palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let opts: EditorOptions =
            toml::from_str("grid_pitch = 10.0\nhistory_depth = 5\n").expect("gültiges TOML");
        assert_eq!(opts.grid_pitch, 10.0);
        assert_eq!(opts.history_depth, 5);
        assert_eq!(opts.drc_clearance_x, DRC_CLEARANCE_X);
        assert_eq!(opts.route_palette.len(), 10);
    }

    #[test]
    fn saved_options_load_back_unchanged() {
        let dir = std::env::temp_dir().join("pcb_layout_editor_options_roundtrip");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
        let path = dir.join("pcb_layout_editor.toml");

        let mut opts = EditorOptions::default();
        opts.export_directory = "out".into();
        opts.zoom_max = 4.0;
        opts.save_to_file(&path).expect("speicherbar");

        assert_eq!(EditorOptions::load_from_file(&path), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn swapped_zoom_bounds_are_repaired_on_load() {
        let dir = std::env::temp_dir().join("pcb_layout_editor_options_zoom");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
        let path = dir.join("pcb_layout_editor.toml");
        std::fs::write(&path, "zoom_min = 8.0\nzoom_max = 0.5\n").expect("schreibbar");

        let opts = EditorOptions::load_from_file(&path);
        assert_eq!((opts.zoom_min, opts.zoom_max), (0.5, 8.0));

        // Zoomen mit den reparierten Grenzen darf nicht panicken
        let mut viewport = crate::core::Viewport::new();
        viewport.zoom_by_clamped(100.0, opts.zoom_min, opts.zoom_max);
        assert_eq!(viewport.scale, 8.0);

        std::fs::write(&path, "zoom_min = -1.0\n").expect("schreibbar");
        let opts = EditorOptions::load_from_file(&path);
        assert_eq!((opts.zoom_min, opts.zoom_max), (ZOOM_MIN, ZOOM_MAX));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/pcb_layout_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
