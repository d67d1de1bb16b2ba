//! 2D-Viewport mit Pan, Zoom und horizontaler Spiegelung.
//!
//! Screen-Koordinaten sind Pixel relativ zur Mitte der Zeichenfläche.
//! Weltkoordinaten sind Platineneinheiten (Rastermaß 25.4).

use glam::Vec2;

/// Pan/Zoom/Spiegel-Transformation Welt ↔ Screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Zoom-Faktor (Pixel pro Welteinheit)
    pub scale: f32,
    /// Pan-Verschiebung in Screen-Pixeln
    pub offset: Vec2,
    /// Horizontale Spiegelung für die Ansicht von unten
    pub flipped: bool,
}

impl Viewport {
    /// Minimaler Zoom-Faktor.
    pub const SCALE_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const SCALE_MAX: f32 = 10.0;
    /// Zoom-Faktor nach Reset.
    pub const RESET_SCALE: f32 = 1.5;

    /// Erstellt den Standard-Viewport (Zoom 1.5, kein Pan, nicht gespiegelt)
    pub fn new() -> Self {
        Self {
            scale: Self::RESET_SCALE,
            offset: Vec2::ZERO,
            flipped: false,
        }
    }

    /// Spiegelt einen Weltpunkt um die Szenen-Y-Achse, falls aktiv.
    pub fn mirror(&self, p: Vec2) -> Vec2 {
        if self.flipped {
            Vec2::new(-p.x, p.y)
        } else {
            p
        }
    }

    /// `offset + scale * mirror(p)`
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.offset + self.mirror(world) * self.scale
    }

    /// Inverse von [`Self::world_to_screen`]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.mirror((screen - self.offset) / self.scale)
    }

    /// Rechnet ein Pointer-Delta in ein Welt-Delta um.
    ///
    /// Bei Spiegelung wird X negiert, damit die Mausbewegung der sichtbaren
    /// Bewegung entspricht.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        self.mirror(delta / self.scale)
    }

    /// Verschiebt die Ansicht um ein Pixel-Delta (unbegrenzt)
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Multipliziert den Zoom mit `factor`, begrenzt auf [SCALE_MIN, SCALE_MAX]
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::SCALE_MIN, Self::SCALE_MAX);
    }

    /// Zoom mit konfigurierbaren Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.scale = (self.scale * factor).clamp(min, max);
    }

    /// Setzt Zoom und Pan zurück. Die Spiegelung bleibt erhalten.
    pub fn reset(&mut self, scale: f32) {
        self.scale = scale;
        self.offset = Vec2::ZERO;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn world_to_screen_applies_offset_scale_and_mirror() {
        let mut viewport = Viewport::new();
        viewport.scale = 2.0;
        viewport.offset = Vec2::new(10.0, -5.0);

        assert_eq!(
            viewport.world_to_screen(Vec2::new(3.0, 4.0)),
            Vec2::new(16.0, 3.0)
        );

        viewport.flipped = true;
        assert_eq!(
            viewport.world_to_screen(Vec2::new(3.0, 4.0)),
            Vec2::new(4.0, 3.0)
        );
    }

    #[test]
    fn screen_to_world_inverts_world_to_screen() {
        let viewport = Viewport {
            scale: 3.7,
            offset: Vec2::new(-120.0, 44.0),
            flipped: true,
        };
        let world = Vec2::new(12.5, -80.25);
        let back = viewport.screen_to_world(viewport.world_to_screen(world));
        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn screen_delta_negates_x_when_flipped() {
        let mut viewport = Viewport::new();
        viewport.scale = 2.0;
        assert_eq!(
            viewport.screen_delta_to_world(Vec2::new(10.0, 4.0)),
            Vec2::new(5.0, 2.0)
        );
        viewport.flipped = true;
        assert_eq!(
            viewport.screen_delta_to_world(Vec2::new(10.0, 4.0)),
            Vec2::new(-5.0, 2.0)
        );
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = Viewport::new();
        for _ in 0..100 {
            viewport.zoom_by(1.1);
        }
        assert_relative_eq!(viewport.scale, Viewport::SCALE_MAX);
        for _ in 0..200 {
            viewport.zoom_by(0.9);
        }
        assert_relative_eq!(viewport.scale, Viewport::SCALE_MIN);
    }

    #[test]
    fn reset_restores_scale_and_offset() {
        let mut viewport = Viewport::new();
        viewport.zoom_by(3.0);
        viewport.pan(Vec2::new(50.0, 20.0));
        viewport.flipped = true;

        viewport.reset(Viewport::RESET_SCALE);

        assert_relative_eq!(viewport.scale, 1.5);
        assert_eq!(viewport.offset, Vec2::ZERO);
        assert!(viewport.flipped);
    }
}
