use glam::DVec2;
use rayon::prelude::*;
use std::path::Path;
use tiny_skia::{ColorU8, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::data;
use crate::map::geometry::{Bounds, Country, Geometry, Point, SelectionSet};
use crate::map::projection::{self, ScaleFactor};
use crate::map::tiles::{SurfaceRect, Tile, TileCache, TileConfig, TileKey, TileRegion, TileSet};

/// Fill and border colours for the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyle {
    pub selected_fill: ColorU8,
    pub unselected_fill: ColorU8,
    pub border_color: ColorU8,
    /// Border width in geographic units; scales with zoom
    pub border_width: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            selected_fill: ColorU8::from_rgba(95, 133, 167, 255),
            unselected_fill: ColorU8::from_rgba(239, 236, 230, 255),
            border_color: ColorU8::from_rgba(255, 255, 255, 255),
            border_width: 0.2,
        }
    }
}

impl MapStyle {
    pub fn paint(&self, selected: bool, stroke_width: f32) -> PaintStyle {
        PaintStyle {
            fill: if selected {
                self.selected_fill
            } else {
                self.unselected_fill
            },
            stroke: self.border_color,
            stroke_width,
        }
    }
}

/// Resolved paint for one fill-and-stroke operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub fill: ColorU8,
    pub stroke: ColorU8,
    /// Stroke width in surface pixels
    pub stroke_width: f32,
}

/// Closed sub-paths painted together, so the fill rule applies across all of them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundPath {
    subpaths: Vec<Vec<DVec2>>,
}

impl CompoundPath {
    /// One sub-path per ring of `geometry`, each point mapped through `to_surface`
    pub fn from_geometry(geometry: &Geometry, to_surface: impl Fn(Point) -> DVec2) -> Self {
        Self {
            subpaths: geometry
                .rings()
                .iter()
                .map(|ring| ring.iter().map(|&p| to_surface(p)).collect())
                .collect(),
        }
    }

    pub fn subpaths(&self) -> &[Vec<DVec2>] {
        &self.subpaths
    }

    /// Move to the first point, line to the rest, close. Empty rings are skipped.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for subpath in &self.subpaths {
            let Some((first, rest)) = subpath.split_first() else {
                continue;
            };
            pb.move_to(first.x as f32, first.y as f32);
            for p in rest {
                pb.line_to(p.x as f32, p.y as f32);
            }
            pb.close();
        }
        pb.finish()
    }
}

/// Canvas-like drawing target the renderer paints into
pub trait Surface {
    /// Fill then stroke `path` in a single paint operation
    fn fill_stroke(&mut self, path: &CompoundPath, style: &PaintStyle);
}

impl Surface for Pixmap {
    fn fill_stroke(&mut self, path: &CompoundPath, style: &PaintStyle) {
        let Some(path) = path.to_skia() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        let fill = style.fill;
        paint.set_color_rgba8(fill.red(), fill.green(), fill.blue(), fill.alpha());
        self.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        if style.stroke_width > 0.0 {
            let stroke_color = style.stroke;
            paint.set_color_rgba8(
                stroke_color.red(),
                stroke_color.green(),
                stroke_color.blue(),
                stroke_color.alpha(),
            );
            let stroke = Stroke {
                width: style.stroke_width,
                ..Stroke::default()
            };
            self.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

/// Owns the parsed countries and the current selection, and paints them into tiles
pub struct WorldRenderer {
    countries: Vec<Country>,
    /// Geographic bounds per country, same order as `countries`
    bounds: Vec<Option<Bounds>>,
    selection: SelectionSet,
    style: MapStyle,
    config: TileConfig,
    surface_width: f64,
    cache: TileCache,
    needs_display: bool,
}

impl WorldRenderer {
    pub fn new(countries: Vec<Country>, surface_width: f64) -> Self {
        let bounds = countries.iter().map(Country::bounds).collect();
        Self {
            countries,
            bounds,
            selection: SelectionSet::new(),
            style: MapStyle::default(),
            config: TileConfig::default(),
            surface_width,
            cache: TileCache::default(),
            needs_display: true,
        }
    }

    /// Load countries from a feature-collection file. A missing or unreadable
    /// file gives an empty map.
    pub fn from_path(path: &Path, surface_width: f64) -> Self {
        let countries = match data::load_countries(path) {
            Ok(countries) => countries,
            Err(e) => {
                log::warn!("No country data loaded: {e:#}");
                Vec::new()
            }
        };
        Self::new(countries, surface_width)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn has_data(&self) -> bool {
        !self.countries.is_empty()
    }

    pub fn selected_countries(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Replace the selection; the next paint reflects it
    pub fn set_selected_countries<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = ids.into_iter().collect();
        log::debug!("Selection changed: {} countries", self.selection.len());
        self.invalidate();
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: MapStyle) {
        self.style = style;
        self.invalidate();
    }

    pub fn set_selected_fill(&mut self, color: ColorU8) {
        self.style.selected_fill = color;
        self.invalidate();
    }

    pub fn set_unselected_fill(&mut self, color: ColorU8) {
        self.style.unselected_fill = color;
        self.invalidate();
    }

    pub fn tile_config(&self) -> &TileConfig {
        &self.config
    }

    pub fn set_tile_config(&mut self, config: TileConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn set_surface_width(&mut self, surface_width: f64) {
        if surface_width != self.surface_width {
            self.surface_width = surface_width;
            self.invalidate();
        }
    }

    pub fn surface_size(&self) -> DVec2 {
        projection::surface_size(self.surface_width)
    }

    pub fn scale_factor(&self) -> ScaleFactor {
        projection::scale(self.surface_width)
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Consume the pending redraw request
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    fn invalidate(&mut self) {
        self.cache.clear();
        self.needs_display = true;
    }

    /// Paint every country overlapping `region` into `surface`.
    /// Reads the countries and selection only; safe to call for many tiles at once.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, region: &TileRegion) {
        let scale = self.scale_factor();
        let to_tile = region.transform(scale);
        let stroke_width = (self.style.border_width * scale.0 * region.scale) as f32;
        let visible = region.pixel_bounds();

        for (country, bounds) in self.countries.iter().zip(&self.bounds) {
            // No points, nothing to paint
            let Some(bounds) = bounds else {
                continue;
            };
            let pixel_bounds = bounds
                .map(|p| to_tile.transform_point2(p))
                .expand(stroke_width as f64);
            if !pixel_bounds.intersects(&visible) {
                continue;
            }

            let path = CompoundPath::from_geometry(country.geometry(), |p| to_tile.transform_point2(p));
            let style = self.style.paint(self.selection.contains(country.id()), stroke_width);
            surface.fill_stroke(&path, &style);
        }
    }

    /// Rasterize one region of the surface
    pub fn render_region(&self, region: &TileRegion) -> Option<Pixmap> {
        let Some(mut pixmap) = Pixmap::new(region.size, region.size) else {
            log::warn!("Cannot allocate a {0}x{0} tile", region.size);
            return None;
        };
        self.draw(&mut pixmap, region);
        Some(pixmap)
    }

    pub fn render_tile(&self, key: TileKey) -> Option<Tile> {
        let region = TileRegion::for_key(key, &self.config);
        log::trace!("Rendering tile {key:?}");
        let pixmap = self.render_region(&region)?;
        Some(Tile { key, region, pixmap })
    }

    /// Tiles covering `visible` at the level of detail for `zoom`, rendering
    /// the ones not already cached.
    pub fn tiles_for_region(&mut self, visible: SurfaceRect, zoom: f64) -> TileSet {
        let level = self.config.level_for_zoom(zoom);
        let keys = self.config.tiles_covering(visible, level, self.surface_size());

        let missing: Vec<TileKey> = keys.iter().copied().filter(|k| !self.cache.contains(k)).collect();
        if !missing.is_empty() {
            let this = &*self;
            let rendered: Vec<Tile> = missing.par_iter().filter_map(|&key| this.render_tile(key)).collect();
            log::debug!("Rendered {} tiles at level {}", rendered.len(), level.index);
            for tile in rendered {
                self.cache.insert(tile);
            }
        }
        self.cache.trim(&keys);

        let tiles = keys
            .iter()
            .filter_map(|key| self.cache.get(key).map(|tile| (*key, tile)))
            .collect();
        TileSet::new(level, self.config.tile_size, tiles)
    }

    #[cfg(test)]
    fn cached_tiles(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    /// Records every paint call instead of rasterizing
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<(CompoundPath, PaintStyle)>,
    }

    impl Surface for RecordingSurface {
        fn fill_stroke(&mut self, path: &CompoundPath, style: &PaintStyle) {
            self.calls.push((path.clone(), *style));
        }
    }

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<Point> {
        vec![
            DVec2::new(min_x, min_y),
            DVec2::new(max_x, min_y),
            DVec2::new(max_x, max_y),
            DVec2::new(min_x, max_y),
        ]
    }

    fn sample_countries() -> Vec<Country> {
        vec![
            Country::new(
                catalog::UNITED_STATES_OF_AMERICA,
                "United States of America",
                Geometry::MultiPolygon(vec![rect(-120.0, 30.0, -80.0, 48.0), rect(-160.0, 55.0, -140.0, 70.0)]),
            )
            .unwrap(),
            Country::new(catalog::BRAZIL, "Brazil", Geometry::Polygon(rect(-70.0, -30.0, -40.0, 0.0))).unwrap(),
        ]
    }

    fn whole_surface(renderer: &WorldRenderer) -> TileRegion {
        TileRegion {
            origin: DVec2::ZERO,
            scale: 1.0,
            size: renderer.surface_width() as u32,
        }
    }

    fn fill_at(pixmap: &Pixmap, renderer: &WorldRenderer, lon: f64, lat: f64) -> ColorU8 {
        let p = projection::project(DVec2::new(lon, lat), renderer.scale_factor());
        pixmap.pixel(p.x as u32, p.y as u32).unwrap().demultiply()
    }

    #[test]
    fn test_selected_country_uses_selected_fill() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        renderer.set_selected_countries([catalog::UNITED_STATES_OF_AMERICA]);

        let mut surface = RecordingSurface::default();
        renderer.draw(&mut surface, &whole_surface(&renderer));

        assert_eq!(surface.calls.len(), 2);
        let style = renderer.style();
        assert_eq!(surface.calls[0].1.fill, style.selected_fill);
        assert_eq!(surface.calls[1].1.fill, style.unselected_fill);
    }

    #[test]
    fn test_clearing_selection_reverts_fill() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        renderer.set_selected_countries(["USA"]);
        renderer.set_selected_countries(Vec::<String>::new());

        let mut surface = RecordingSurface::default();
        renderer.draw(&mut surface, &whole_surface(&renderer));

        let unselected = renderer.style().unselected_fill;
        assert!(surface.calls.iter().all(|(_, style)| style.fill == unselected));
    }

    #[test]
    fn test_multipolygon_is_one_compound_path() {
        let renderer = WorldRenderer::new(sample_countries(), 720.0);
        let mut surface = RecordingSurface::default();
        renderer.draw(&mut surface, &whole_surface(&renderer));

        let (usa, _) = &surface.calls[0];
        assert_eq!(usa.subpaths().len(), 2);
        assert_eq!(usa.subpaths()[0].len(), 4);
        // (-120, 30) at scale 2: ((-120+180)*2, (90-30)*2)
        assert_eq!(usa.subpaths()[0][0], DVec2::new(120.0, 120.0));
    }

    #[test]
    fn test_stroke_width_scales_with_zoom() {
        let renderer = WorldRenderer::new(sample_countries(), 720.0);
        let mut surface = RecordingSurface::default();
        let region = TileRegion {
            origin: DVec2::ZERO,
            scale: 4.0,
            size: 4096,
        };
        renderer.draw(&mut surface, &region);
        // 0.2 units * 2 (surface scale) * 4 (tile scale)
        assert!((surface.calls[0].1.stroke_width - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_countries_outside_tile_are_skipped() {
        let renderer = WorldRenderer::new(sample_countries(), 720.0);
        let mut surface = RecordingSurface::default();
        // Eastern hemisphere only; both countries are in the west
        let region = TileRegion {
            origin: DVec2::new(400.0, 0.0),
            scale: 1.0,
            size: 300,
        };
        renderer.draw(&mut surface, &region);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_pixels_reflect_selection() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        renderer.set_selected_countries(["USA"]);

        let pixmap = renderer.render_region(&whole_surface(&renderer)).unwrap();
        let style = *renderer.style();
        assert_eq!(fill_at(&pixmap, &renderer, -100.0, 40.0), style.selected_fill);
        assert_eq!(fill_at(&pixmap, &renderer, -55.0, -15.0), style.unselected_fill);
        // Open ocean stays transparent
        assert_eq!(fill_at(&pixmap, &renderer, 0.0, -60.0).alpha(), 0);
    }

    #[test]
    fn test_empty_map_draws_nothing() {
        let renderer = WorldRenderer::new(Vec::new(), 720.0);
        assert!(!renderer.has_data());

        let mut surface = RecordingSurface::default();
        renderer.draw(&mut surface, &whole_surface(&renderer));
        assert!(surface.calls.is_empty());

        let pixmap = renderer.render_region(&whole_surface(&renderer)).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn test_missing_asset_gives_empty_map() {
        let renderer = WorldRenderer::from_path(Path::new("does/not/exist/world.json"), 720.0);
        assert!(!renderer.has_data());
    }

    #[test]
    fn test_selection_change_requests_one_redraw() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        assert!(renderer.take_needs_display());
        assert!(!renderer.take_needs_display());

        renderer.set_selected_countries(["BRA"]);
        assert!(renderer.take_needs_display());
        assert!(!renderer.take_needs_display());
    }

    #[test]
    fn test_selection_change_invalidates_tiles() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        renderer.set_tile_config(TileConfig {
            tile_size: 256,
            ..TileConfig::default()
        });
        let visible = SurfaceRect::new(DVec2::ZERO, renderer.surface_size());
        let usa = projection::project(DVec2::new(-100.0, 40.0), renderer.scale_factor());

        let tiles = renderer.tiles_for_region(visible, 1.0);
        assert_eq!(tiles.len(), 6);
        assert_eq!(renderer.cached_tiles(), 6);
        assert_eq!(tiles.sample(usa), Some(renderer.style().unselected_fill));

        renderer.set_selected_countries(["USA"]);
        assert_eq!(renderer.cached_tiles(), 0);

        let tiles = renderer.tiles_for_region(visible, 1.0);
        assert_eq!(tiles.sample(usa), Some(renderer.style().selected_fill));
    }

    #[test]
    fn test_style_change_invalidates_tiles() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        renderer.set_tile_config(TileConfig {
            tile_size: 256,
            ..TileConfig::default()
        });
        renderer.set_selected_countries(["USA"]);
        let visible = SurfaceRect::new(DVec2::ZERO, renderer.surface_size());
        let usa = projection::project(DVec2::new(-100.0, 40.0), renderer.scale_factor());
        let brazil = projection::project(DVec2::new(-55.0, -15.0), renderer.scale_factor());

        renderer.tiles_for_region(visible, 1.0);
        renderer.take_needs_display();
        assert_eq!(renderer.cached_tiles(), 6);

        let red = ColorU8::from_rgba(200, 30, 30, 255);
        renderer.set_selected_fill(red);
        assert_eq!(renderer.cached_tiles(), 0);
        assert!(renderer.take_needs_display());
        assert_eq!(renderer.tiles_for_region(visible, 1.0).sample(usa), Some(red));

        let green = ColorU8::from_rgba(30, 160, 60, 255);
        renderer.set_unselected_fill(green);
        assert_eq!(renderer.cached_tiles(), 0);
        assert!(renderer.take_needs_display());
        assert_eq!(renderer.tiles_for_region(visible, 1.0).sample(brazil), Some(green));

        renderer.set_style(MapStyle::default());
        assert_eq!(renderer.cached_tiles(), 0);
        assert!(renderer.take_needs_display());
        let tiles = renderer.tiles_for_region(visible, 1.0);
        assert_eq!(tiles.sample(usa), Some(MapStyle::default().selected_fill));
        assert_eq!(tiles.sample(brazil), Some(MapStyle::default().unselected_fill));
    }

    #[test]
    fn test_zooming_in_uses_sharper_level() {
        let mut renderer = WorldRenderer::new(sample_countries(), 720.0);
        renderer.set_tile_config(TileConfig {
            tile_size: 256,
            ..TileConfig::default()
        });
        let visible = SurfaceRect::new(DVec2::new(100.0, 100.0), DVec2::new(50.0, 25.0));

        let tiles = renderer.tiles_for_region(visible, 3.0);
        assert_eq!(tiles.level().scale, 4.0);
        assert!(!tiles.is_empty());
        assert!(tiles.sample(DVec2::new(120.0, 110.0)).is_some());
        assert!(tiles.sample(DVec2::new(700.0, 350.0)).is_none());
    }
}
