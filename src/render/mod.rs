//! Ausgabe einer [`RenderScene`] außerhalb des interaktiven Canvas.
//!
//! `svg` serialisiert die Szene, `export` filtert sie monochrom und rastert
//! sie über resvg zu PNG/JPEG.

pub mod export;
mod svg;

pub use crate::shared::RenderScene;
pub use export::{export_file_name, monochrome_scene, rasterize};
pub use svg::{scene_to_svg, SvgFrame};
