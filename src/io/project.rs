//! Persistierter Projektdatensatz (JSON).
//!
//! Ein Datensatz enthält alle Bauteile, alle Routes und den Lagenmodus.
//! Feldnamen sind camelCase, Farben werden als `#rrggbb` abgelegt.

use crate::core::{Board, Component, Layer, LayerMode, Pin, PinKind, PinRef, Rotation, Route};
use anyhow::{bail, Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pin im Projektdatensatz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinRecord {
    pub id: String,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: PinKind,
    pub x: f32,
    pub y: f32,
}

/// Bauteil im Projektdatensatz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub component_type: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub rotation: i32,
    #[serde(default)]
    pub pins: Vec<PinRecord>,
}

/// Route im Projektdatensatz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub id: String,
    pub from_comp: String,
    pub from_pin: String,
    pub to_comp: String,
    pub to_pin: String,
    pub color: String,
    #[serde(default)]
    pub layer: Layer,
}

/// Kompletter Projektdatensatz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub layer_mode: LayerMode,
}

impl ProjectRecord {
    /// Erstellt einen Datensatz aus dem aktuellen Board
    pub fn from_board(board: &Board, layer_mode: LayerMode) -> Self {
        let components = board
            .components()
            .map(|c| ComponentRecord {
                id: c.id.clone(),
                name: c.name.clone(),
                component_type: c.component_type.clone(),
                x: c.position.x,
                y: c.position.y,
                rotation: c.rotation.degrees(),
                pins: c
                    .pins
                    .iter()
                    .map(|p| PinRecord {
                        id: p.id.clone(),
                        label: p.label.clone(),
                        kind: p.kind,
                        x: p.offset.x,
                        y: p.offset.y,
                    })
                    .collect(),
            })
            .collect();

        let routes = board
            .routes()
            .iter()
            .map(|r| RouteRecord {
                id: r.id.clone(),
                from_comp: r.from.component_id.clone(),
                from_pin: r.from.pin_id.clone(),
                to_comp: r.to.component_id.clone(),
                to_pin: r.to.pin_id.clone(),
                color: color_to_hex(r.color),
                layer: r.layer,
            })
            .collect();

        Self {
            components,
            routes,
            layer_mode,
        }
    }

    /// Baut ein Board aus dem Datensatz.
    ///
    /// Routes mit nicht auflösbaren Endpunkten werden verworfen.
    pub fn into_board(self) -> Result<(Board, LayerMode)> {
        let mut board = Board::new();

        for record in self.components {
            let Some(rotation) = Rotation::from_degrees(record.rotation) else {
                bail!(
                    "Bauteil {}: ungültige Rotation {}°",
                    record.id,
                    record.rotation
                );
            };
            let pins = record
                .pins
                .into_iter()
                .map(|p| Pin::new(p.id, p.label, Vec2::new(p.x, p.y), p.kind))
                .collect();
            let mut component = Component::new(
                record.id,
                record.name,
                record.component_type,
                Vec2::new(record.x, record.y),
                pins,
            );
            component.rotation = rotation;
            board.add_component(component);
        }

        for record in self.routes {
            let color = hex_to_color(&record.color)
                .with_context(|| format!("Route {}: ungültige Farbe", record.id))?;
            board.add_route(Route {
                id: record.id,
                from: PinRef::new(record.from_comp, record.from_pin),
                to: PinRef::new(record.to_comp, record.to_pin),
                color,
                layer: record.layer,
            });
        }

        let dropped = board.prune_dangling_routes();
        if dropped > 0 {
            log::warn!("{} Routes mit ungültigen Endpunkten verworfen", dropped);
        }

        Ok((board, self.layer_mode))
    }
}

/// Wandelt eine RGBA-Farbe in `#rrggbb` (Alpha wird nur bei < 1 angehängt)
pub fn color_to_hex(color: [f32; 4]) -> String {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parst `#rrggbb` oder `#rrggbbaa`
pub fn hex_to_color(hex: &str) -> Result<[f32; 4]> {
    let digits = hex.trim().trim_start_matches('#');
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        bail!("Farbe '{}' hat kein Format #rrggbb", hex);
    }
    let channel = |i: usize| -> Result<f32> {
        let value = u8::from_str_radix(&digits[i..i + 2], 16)
            .with_context(|| format!("Farbe '{}' ist kein Hex-Wert", hex))?;
        Ok(f32::from(value) / 255.0)
    };
    let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
    Ok([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// Serialisiert den Datensatz als JSON
pub fn to_json(record: &ProjectRecord) -> Result<String> {
    serde_json::to_string_pretty(record).context("Projekt konnte nicht serialisiert werden")
}

/// Parst einen Datensatz aus JSON
pub fn from_json(json: &str) -> Result<ProjectRecord> {
    serde_json::from_str(json).context("Projektdatei ist kein gültiges JSON-Projekt")
}

/// Schreibt den Datensatz (überschreibt vorhandene Dateien)
pub fn save(path: &Path, record: &ProjectRecord) -> Result<()> {
    let json = to_json(record)?;
    std::fs::write(path, json)
        .with_context(|| format!("Projekt konnte nicht nach {} geschrieben werden", path.display()))
}

/// Liest einen Datensatz von der Platte
pub fn load(path: &Path) -> Result<ProjectRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Projekt {} konnte nicht gelesen werden", path.display()))?;
    from_json(&json)
}
