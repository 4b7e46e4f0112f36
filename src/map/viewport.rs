use glam::DVec2;

use crate::map::geometry::Point;
use crate::map::projection;
use crate::map::tiles::SurfaceRect;

const MIN_ZOOM: f64 = 0.5;
const MAX_ZOOM: f64 = 64.0;
const ZOOM_STEP: f64 = 1.5;

/// Visible part of the map surface and the zoom it is shown at
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Surface point shown in the middle of the screen
    pub center: DVec2,
    /// Screen pixels per surface unit
    pub zoom: f64,
    /// Screen pixel width
    pub width: usize,
    /// Screen pixel height
    pub height: usize,
    surface: DVec2,
}

impl Viewport {
    pub fn new(center: DVec2, zoom: f64, width: usize, height: usize, surface: DVec2) -> Self {
        let mut vp = Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
            surface,
        };
        vp.clamp_center();
        vp
    }

    /// Whole world centered, with the surface as wide as the screen
    pub fn world(width: usize, height: usize) -> Self {
        let surface = projection::surface_size(width as f64);
        Self::new(surface / 2.0, 1.0, width, height, surface)
    }

    pub fn surface_size(&self) -> DVec2 {
        self.surface
    }

    /// Track a new screen size; the surface is rescaled to the new width
    pub fn resize(&mut self, width: usize, height: usize) {
        let surface = projection::surface_size(width as f64);
        if self.surface.x > 0.0 {
            self.center *= surface.x / self.surface.x;
        } else {
            self.center = surface / 2.0;
        }
        self.surface = surface;
        self.width = width;
        self.height = height;
        self.clamp_center();
    }

    fn half_screen(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64) / 2.0
    }

    fn clamp_center(&mut self) {
        self.center = self.center.clamp(DVec2::ZERO, self.surface);
    }

    /// Pan the viewport by a screen pixel delta
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.center += DVec2::new(dx as f64, dy as f64) / self.zoom;
        self.clamp_center();
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Zoom in keeping the surface point under (px, py) in place
    pub fn zoom_in_at(&mut self, px: i32, py: i32) {
        self.zoom_at(px, py, ZOOM_STEP);
    }

    pub fn zoom_out_at(&mut self, px: i32, py: i32) {
        self.zoom_at(px, py, 1.0 / ZOOM_STEP);
    }

    fn zoom_at(&mut self, px: i32, py: i32, factor: f64) {
        let screen = DVec2::new(px as f64, py as f64);
        let anchor = self.to_surface(screen);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.center = anchor - (screen - self.half_screen()) / self.zoom;
        self.clamp_center();
    }

    /// Screen pixel to surface point
    pub fn to_surface(&self, screen: DVec2) -> DVec2 {
        self.center + (screen - self.half_screen()) / self.zoom
    }

    /// Surface area currently on screen
    pub fn visible_region(&self) -> SurfaceRect {
        let size = DVec2::new(self.width as f64, self.height as f64) / self.zoom;
        SurfaceRect::new(self.center - size / 2.0, size)
    }

    pub fn center_on(&mut self, surface_point: DVec2) {
        self.center = surface_point;
        self.clamp_center();
    }

    /// Geographic coordinate at the middle of the screen
    pub fn center_lonlat(&self) -> Point {
        // A zero-width surface has no inverse projection
        if self.surface.x <= 0.0 {
            return Point::ZERO;
        }
        projection::unproject(self.center, projection::scale(self.surface.x))
    }
}
