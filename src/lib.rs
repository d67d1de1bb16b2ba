//! PCB-Layout-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{Board, Component, Layer, LayerMode, Pin, PinKind, PinRef, Route, Viewport};
pub use shared::{EditorOptions, ExportFormat, RenderScene};
