//! Core-Domänentypen: Bauteile, Pins, Routes, Board, Viewport, DRC und Routing.

pub mod board;
pub mod component;
pub mod drc;
pub mod pin;
pub mod placement;
pub mod route;
pub mod routing;
pub mod viewport;

pub use board::Board;
pub use component::{Component, Rotation};
pub use drc::{check_clearance, Collision, DrcReport};
pub use pin::{Pin, PinKind};
pub use placement::{
    ComponentTemplate, FixedPlacer, GridPlacer, PinTemplate, PlacementSource, PLACEMENT_MAX_CELL,
};
pub use route::{Layer, LayerMode, PinRef, Route};
pub use routing::{route_color, route_layer, RouteStyle};
pub use viewport::Viewport;
