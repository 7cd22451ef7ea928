//! Koordinaten-Transformation zwischen Feld- und Canvas-Raum.
//!
//! Feld-Konvention: Ursprung in der Feldmitte, +x vorwärts, +y links,
//! Einheiten in Zoll. Canvas-Konvention: Pixel, Ursprung oben links.
//! Die Abbildung ist eine reine Rotation/Spiegelung mit uniformem Maßstab:
//! Canvas-x fällt mit Welt-y, Canvas-y fällt mit Welt-x.
//!
//! Die Konvention ist ungewöhnlich, aber fest: exportierte Pfade und der
//! Live-Pose-Sync hängen an exakt dieser Abbildung.

use glam::DVec2;

use crate::core::Pose;

/// Abbildung Welt ↔ Canvas für einen konkreten Viewport.
#[derive(Debug, Clone, Copy)]
pub struct FieldTransform {
    /// Canvas-Position der Feldmitte in Pixeln
    pub canvas_center: DVec2,
    /// Uniformer Maßstab Pixel pro Zoll (beide Achsen)
    pub pixels_per_inch: f64,
}

impl FieldTransform {
    /// Erstellt eine Transformation für einen Viewport.
    pub fn new(canvas_center: DVec2, pixels_per_inch: f64) -> Self {
        Self {
            canvas_center,
            pixels_per_inch,
        }
    }

    /// Welt → Canvas: `cx = center.x - y·ppi`, `cy = center.y - x·ppi`.
    pub fn world_to_canvas(&self, world: DVec2) -> DVec2 {
        DVec2::new(
            self.canvas_center.x - world.y * self.pixels_per_inch,
            self.canvas_center.y - world.x * self.pixels_per_inch,
        )
    }

    /// Canvas → Welt: exakte Umkehrung von `world_to_canvas`.
    pub fn canvas_to_world(&self, canvas: DVec2) -> DVec2 {
        DVec2::new(
            (self.canvas_center.y - canvas.y) / self.pixels_per_inch,
            (self.canvas_center.x - canvas.x) / self.pixels_per_inch,
        )
    }

    /// Canvas-Delta eines Heading-Pfeils mit gegebener Pixel-Länge.
    ///
    /// Heading 0° zeigt nach -Canvas-y ("oben"), konsistent zur Abbildung:
    /// Welt-Richtung (cos h, sin h) projiziert auf (-sin h, -cos h).
    pub fn heading_vector(heading_deg: f64, length_px: f64) -> DVec2 {
        let rad = heading_deg.to_radians();
        DVec2::new(-rad.sin(), -rad.cos()) * length_px
    }
}

/// Dreht einen lokalen Vektor (Roboter-Rahmen) in den Welt-Rahmen.
///
/// Lokal +x = vorwärts (Footprint-Länge), lokal +y = links (Breite).
pub fn rotate_local_to_world(local: DVec2, heading_deg: f64) -> DVec2 {
    let rad = heading_deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    DVec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
}

/// Die vier Footprint-Ecken eines Roboters in Welt-Koordinaten.
///
/// Reihenfolge: vorne-links, vorne-rechts, hinten-rechts, hinten-links.
pub fn footprint_corners(pose: &Pose, length_in: f64, width_in: f64) -> [DVec2; 4] {
    let half_l = length_in / 2.0;
    let half_w = width_in / 2.0;
    [
        DVec2::new(half_l, half_w),
        DVec2::new(half_l, -half_w),
        DVec2::new(-half_l, -half_w),
        DVec2::new(-half_l, half_w),
    ]
    .map(|corner| pose.pos + rotate_local_to_world(corner, pose.heading))
}

/// Snappt eine Position auf das Feld-Raster und klemmt sie in die Feldgrenzen.
///
/// Bei `step <= 0` wird nur geklemmt. Sonst wird der Abstand zur negativen
/// Feldkante auf das nächste Vielfache von `step` gerundet und anschließend
/// geklemmt; das Ergebnis liegt damit für beliebige Eingaben im Feld.
pub fn snap_to_field(p: DVec2, step: f64, field_size: f64) -> DVec2 {
    let half = field_size / 2.0;
    let snap_axis = |value: f64| {
        let rounded = if step > 0.0 {
            ((value + half) / step).round() * step - half
        } else {
            value
        };
        rounded.clamp(-half, half)
    };
    DVec2::new(snap_axis(p.x), snap_axis(p.y))
}
