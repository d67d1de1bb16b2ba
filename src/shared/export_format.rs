//! Ausgabeformate des Druck-Exports.

use std::fmt;

/// Vom Benutzer gewähltes Exportformat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Verlustfreies Raster
    Png,
    /// JPEG in höchster Qualität
    Jpeg,
    /// Fertigungsformat (nur Platzhalter, erzeugt keine Datei)
    Gerber,
}

impl ExportFormat {
    /// Dateiendung ohne Punkt
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Gerber => "gbr",
        }
    }

    /// Erzeugt dieses Format ein Rasterbild?
    pub fn is_raster(self) -> bool {
        !matches!(self, ExportFormat::Gerber)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Png => f.write_str("PNG"),
            ExportFormat::Jpeg => f.write_str("JPEG"),
            ExportFormat::Gerber => f.write_str("GERBER"),
        }
    }
}
