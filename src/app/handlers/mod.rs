//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drc;
pub mod editing;
pub mod export;
pub mod history;
pub mod pointer;
pub mod project;
pub mod routing;
pub mod selection;
pub mod translator;
pub mod view;
