//! Use-Case-Funktionen für Bauteil-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `rotate`: Bauteil um 90° drehen
//! - `delete`: Bauteil samt Routes löschen
//! - `place`: Bauteil aus Vorlage platzieren
//! - `snap`: Alle Bauteile ins Raster einrasten

mod delete;
mod place;
mod rotate;
mod snap;

pub use delete::delete_component;
pub use place::place_component;
pub use rotate::rotate_component;
pub use snap::snap_to_grid;
