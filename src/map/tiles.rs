use glam::{DAffine2, DVec2};
use std::collections::HashMap;
use std::sync::Arc;
use tiny_skia::{ColorU8, Pixmap};

use crate::map::geometry::Bounds;
use crate::map::projection::ScaleFactor;

/// Tiles kept around beyond the ones currently on screen
const MAX_CACHED_TILES: usize = 32;

/// Tiling and level-of-detail tuning. Affects redraw granularity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    /// Edge length of a square tile in pixels
    pub tile_size: u32,
    /// Number of resolution tiers
    pub levels_of_detail: u32,
    /// How many of those tiers magnify beyond 1:1
    pub levels_of_detail_bias: u32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_size: 1024,
            levels_of_detail: 5,
            levels_of_detail_bias: 2,
        }
    }
}

impl TileConfig {
    /// Pixels per surface unit at `level`. Level 0 is the most magnified.
    pub fn level_scale(&self, level: u32) -> f64 {
        2f64.powi(self.levels_of_detail_bias as i32 - level as i32)
    }

    /// Least magnified level that is still at least as sharp as `zoom`,
    /// falling back to the most magnified one.
    pub fn level_for_zoom(&self, zoom: f64) -> LevelOfDetail {
        let levels = self.levels_of_detail.max(1);
        let index = (0..levels)
            .rev()
            .find(|&level| self.level_scale(level) >= zoom)
            .unwrap_or(0);
        LevelOfDetail {
            index,
            scale: self.level_scale(index),
        }
    }

    /// Keys of the tiles at `level` that overlap `region`, clipped to the surface
    pub fn tiles_covering(&self, region: SurfaceRect, level: LevelOfDetail, surface: DVec2) -> Vec<TileKey> {
        let Some(region) = region.clip(&SurfaceRect::new(DVec2::ZERO, surface)) else {
            return Vec::new();
        };

        let tile = self.tile_size.max(1) as f64;
        let grid = (surface * level.scale / tile).ceil();
        let first = (region.origin * level.scale / tile).floor().max(DVec2::ZERO);
        let last = (region.max() * level.scale / tile).ceil().min(grid);

        let mut keys = Vec::new();
        for row in first.y as u32..last.y as u32 {
            for col in first.x as u32..last.x as u32 {
                keys.push(TileKey {
                    level: level.index,
                    col,
                    row,
                });
            }
        }
        keys
    }
}

/// A discrete resolution tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOfDetail {
    pub index: u32,
    /// Pixels per surface unit
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub level: u32,
    pub col: u32,
    pub row: u32,
}

/// Rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl SurfaceRect {
    pub fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    pub fn max(&self) -> DVec2 {
        self.origin + self.size
    }

    /// Overlapping part of two rects, `None` if they do not overlap
    pub fn clip(&self, other: &SurfaceRect) -> Option<SurfaceRect> {
        let min = self.origin.max(other.origin);
        let max = self.max().min(other.max());
        if max.x <= min.x || max.y <= min.y {
            return None;
        }
        Some(SurfaceRect::new(min, max - min))
    }
}

/// The part of the surface a single raster covers, and at what resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRegion {
    /// Top-left corner in surface coordinates
    pub origin: DVec2,
    /// Pixels per surface unit
    pub scale: f64,
    /// Edge length in pixels
    pub size: u32,
}

impl TileRegion {
    pub fn for_key(key: TileKey, config: &TileConfig) -> Self {
        let scale = config.level_scale(key.level);
        let size = config.tile_size.max(1);
        let span = size as f64 / scale;
        Self {
            origin: DVec2::new(key.col as f64, key.row as f64) * span,
            scale,
            size,
        }
    }

    /// Geographic point to tile pixel: projection followed by the tile offset
    pub fn transform(&self, projection: ScaleFactor) -> DAffine2 {
        DAffine2::from_scale(DVec2::splat(self.scale))
            * DAffine2::from_translation(-self.origin)
            * projection.transform()
    }

    /// Pixel-space extent of the tile
    pub fn pixel_bounds(&self) -> Bounds {
        Bounds::new(DVec2::ZERO, DVec2::splat(self.size as f64))
    }
}

/// A rendered raster for one tile key
pub struct Tile {
    pub key: TileKey,
    pub region: TileRegion,
    pub pixmap: Pixmap,
}

impl Tile {
    /// Colour at a surface point, `None` outside the tile
    pub fn pixel_at(&self, surface_point: DVec2) -> Option<ColorU8> {
        let p = (surface_point - self.region.origin) * self.region.scale;
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        self.pixmap
            .pixel(p.x as u32, p.y as u32)
            .map(|c| c.demultiply())
    }
}

/// Tiles covering one requested region at a single level of detail
pub struct TileSet {
    level: LevelOfDetail,
    tile_size: u32,
    tiles: HashMap<TileKey, Arc<Tile>>,
}

impl TileSet {
    pub fn new(level: LevelOfDetail, tile_size: u32, tiles: HashMap<TileKey, Arc<Tile>>) -> Self {
        Self {
            level,
            tile_size: tile_size.max(1),
            tiles,
        }
    }

    pub fn level(&self) -> LevelOfDetail {
        self.level
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Colour at a surface point, `None` where no tile covers it
    pub fn sample(&self, surface_point: DVec2) -> Option<ColorU8> {
        if surface_point.x < 0.0 || surface_point.y < 0.0 {
            return None;
        }
        let cell = (surface_point * self.level.scale / self.tile_size as f64).floor();
        let key = TileKey {
            level: self.level.index,
            col: cell.x as u32,
            row: cell.y as u32,
        };
        self.tiles.get(&key)?.pixel_at(surface_point)
    }
}

/// Rendered tiles shared between consecutive paints
#[derive(Default)]
pub(crate) struct TileCache {
    tiles: HashMap<TileKey, Arc<Tile>>,
}

impl TileCache {
    pub fn contains(&self, key: &TileKey) -> bool {
        self.tiles.contains_key(key)
    }

    pub fn get(&self, key: &TileKey) -> Option<Arc<Tile>> {
        self.tiles.get(key).cloned()
    }

    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.key, Arc::new(tile));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Drop everything but `keep` once the cache grows past its capacity
    pub fn trim(&mut self, keep: &[TileKey]) {
        if self.tiles.len() > MAX_CACHED_TILES {
            self.tiles.retain(|key, _| keep.contains(key));
        }
    }
}
