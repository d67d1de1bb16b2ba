//! Monochromer Druck-Export: Szene filtern, per resvg rastern, als PNG/JPEG kodieren.

use super::svg::{scene_to_svg, SvgFrame};
use crate::core::Layer;
use crate::shared::{EditorOptions, ExportFormat, RenderScene, SceneItem, SceneRole};
use anyhow::{anyhow, bail, Context, Result};
use image::ImageEncoder;
use resvg::{tiny_skia, usvg};

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Reduziert eine Szene auf den Druckinhalt der aktiven Lage.
///
/// Übrig bleiben Routes der aktiven Lage und Pads (schwarz) sowie die
/// Bohrungen (weiß ausgestanzt). Alles andere entfällt.
pub fn monochrome_scene(scene: &RenderScene) -> RenderScene {
    let items = scene
        .items
        .iter()
        .filter_map(|item| {
            let fill = match &item.role {
                SceneRole::Route { layer } if *layer == scene.active_layer => BLACK,
                SceneRole::Pad => BLACK,
                SceneRole::PadHole => WHITE,
                _ => return None,
            };
            Some(SceneItem {
                role: item.role.clone(),
                shape: item.shape.clone(),
                fill: Some(fill),
                stroke: None,
            })
        })
        .collect();

    RenderScene {
        items,
        viewport: scene.viewport,
        canvas_size: scene.canvas_size,
        grid_pitch: scene.grid_pitch,
        active_layer: scene.active_layer,
    }
}

/// Rastert die (bereits gefilterte) Szene und kodiert sie im gewünschten Format.
///
/// Bei gespiegelter Ansicht wird das gesamte Raster horizontal gespiegelt.
pub fn rasterize(
    scene: &RenderScene,
    options: &EditorOptions,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    let size = options.export_size_px;
    if size == 0 {
        bail!("Export-Größe muss größer als null sein");
    }

    let svg = scene_to_svg(
        scene,
        &SvgFrame {
            half_extent: options.export_viewbox_half_extent,
            size_px: size,
            background: Some(WHITE),
        },
    );

    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| anyhow!("Export-SVG nicht lesbar: {e}"))?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| anyhow!("Raster {size}x{size} konnte nicht angelegt werden"))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = if scene.viewport.flipped {
        tiny_skia::Transform::from_row(-1.0, 0.0, 0.0, 1.0, size as f32, 0.0)
    } else {
        tiny_skia::Transform::identity()
    };
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let rgba = image::RgbaImage::from_raw(size, size, pixmap.take())
        .context("Rasterpuffer hat unerwartete Größe")?;

    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => {
            image::codecs::png::PngEncoder::new(&mut bytes).write_image(
                rgba.as_raw(),
                size,
                size,
                image::ExtendedColorType::Rgba8,
            )?;
        }
        ExportFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, 100).write_image(
                rgb.as_raw(),
                size,
                size,
                image::ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Gerber => bail!("{} ist kein Raster-Format", format),
    }

    log::debug!(
        "Export gerastert: {} Elemente, {}x{} px, {} Bytes",
        scene.items.len(),
        size,
        size,
        bytes.len()
    );
    Ok(bytes)
}

/// Dateiname des Exports: `PCB_Print_<LAGE>_[Flipped_]<millis>.<ext>`
pub fn export_file_name(layer: Layer, flipped: bool, millis: u128, format: ExportFormat) -> String {
    format!(
        "PCB_Print_{}_{}{}.{}",
        layer.as_str().to_uppercase(),
        if flipped { "Flipped_" } else { "" },
        millis,
        format.extension()
    )
}
