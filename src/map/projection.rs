use glam::{DAffine2, DVec2};

use crate::map::geometry::Point;

/// Logical extent of the geographic coordinate space (full lon/lat range)
pub const INTRINSIC_SIZE: DVec2 = DVec2::new(360.0, 180.0);

/// Uniform surface units per geographic unit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(pub f64);

impl ScaleFactor {
    /// Equirectangular transform: scale, flip y so north is up, and move the
    /// geographic origin to the center of the surface.
    pub fn transform(self) -> DAffine2 {
        DAffine2::from_scale(DVec2::new(self.0, -self.0))
            * DAffine2::from_translation(DVec2::new(INTRINSIC_SIZE.x / 2.0, -INTRINSIC_SIZE.y / 2.0))
    }
}

/// Scale factor that fits the intrinsic width into `surface_width`
pub fn scale(surface_width: f64) -> ScaleFactor {
    ScaleFactor(surface_width / INTRINSIC_SIZE.x)
}

/// Surface extent for a given width (aspect matches the intrinsic size)
pub fn surface_size(surface_width: f64) -> DVec2 {
    DVec2::new(surface_width, surface_width * INTRINSIC_SIZE.y / INTRINSIC_SIZE.x)
}

/// Geographic point to surface point
#[inline(always)]
pub fn project(point: Point, scale: ScaleFactor) -> DVec2 {
    scale.transform().transform_point2(point)
}

/// Surface point back to geographic point
pub fn unproject(surface_point: DVec2, scale: ScaleFactor) -> Point {
    scale.transform().inverse().transform_point2(surface_point)
}
