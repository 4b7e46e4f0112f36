use world_map::map::projection;
use world_map::{Country, TileConfig, Viewport, WorldRenderer};

/// Terminals give small surfaces; smaller tiles keep the first paint quick
const VIEWER_TILE_SIZE: u32 = 256;

/// Screen pixels for a terminal of `width` x `height` cells.
/// One cell is 1x2 pixels (half blocks); the border and status bar take 2 columns and 3 rows.
fn map_pixels(width: usize, height: usize) -> (usize, usize) {
    (width.saturating_sub(2), height.saturating_sub(3) * 2)
}

/// Application state
pub struct App {
    pub viewport: Viewport,
    pub renderer: WorldRenderer,
    pub should_quit: bool,
    /// Last mouse position for drag tracking
    pub last_mouse: Option<(u16, u16)>,
    /// Index of the country the keyboard cursor is on
    cursor: usize,
    /// View changed since the last paint
    dirty: bool,
}

impl App {
    pub fn new(mut renderer: WorldRenderer, width: usize, height: usize) -> Self {
        let (pixel_width, pixel_height) = map_pixels(width, height);
        renderer.set_tile_config(TileConfig {
            tile_size: VIEWER_TILE_SIZE,
            ..TileConfig::default()
        });
        renderer.set_surface_width(pixel_width as f64);

        Self {
            viewport: Viewport::world(pixel_width, pixel_height),
            renderer,
            should_quit: false,
            last_mouse: None,
            cursor: 0,
            dirty: true,
        }
    }

    /// Update viewport size when terminal resizes
    pub fn resize(&mut self, width: usize, height: usize) {
        let (pixel_width, pixel_height) = map_pixels(width, height);
        self.resize_map(pixel_width, pixel_height);
    }

    /// Match the viewport to the map area actually laid out
    pub fn resize_map(&mut self, pixel_width: usize, pixel_height: usize) {
        if pixel_width == self.viewport.width && pixel_height == self.viewport.height {
            return;
        }
        self.viewport.resize(pixel_width, pixel_height);
        self.renderer.set_surface_width(pixel_width as f64);
        self.dirty = true;
    }

    /// True once per change to the view or the map; clears the pending state
    pub fn needs_redraw(&mut self) -> bool {
        let view = std::mem::take(&mut self.dirty);
        let map = self.renderer.take_needs_display();
        view || map
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.viewport.pan(dx, dy);
        self.dirty = true;
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.dirty = true;
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.dirty = true;
    }

    /// Zoom in towards a screen position (terminal column/row)
    pub fn zoom_in_at(&mut self, col: u16, row: u16) {
        let (px, py) = Self::cell_to_pixel(col, row);
        self.viewport.zoom_in_at(px, py);
        self.dirty = true;
    }

    pub fn zoom_out_at(&mut self, col: u16, row: u16) {
        let (px, py) = Self::cell_to_pixel(col, row);
        self.viewport.zoom_out_at(px, py);
        self.dirty = true;
    }

    /// Account for the 1 cell border
    fn cell_to_pixel(col: u16, row: u16) -> (i32, i32) {
        (col.saturating_sub(1) as i32, row.saturating_sub(1) as i32 * 2)
    }

    pub fn reset_view(&mut self) {
        self.viewport = Viewport::world(self.viewport.width, self.viewport.height);
        self.dirty = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Pan by the distance dragged since the last mouse event
    pub fn handle_drag(&mut self, x: u16, y: u16) {
        if let Some((last_x, last_y)) = self.last_mouse {
            let dx = last_x as i32 - x as i32;
            let dy = last_y as i32 - y as i32;
            if dx != 0 || dy != 0 {
                self.pan(dx, dy * 2);
            }
        }
        self.last_mouse = Some((x, y));
    }

    pub fn end_drag(&mut self) {
        self.last_mouse = None;
    }

    pub fn cursor_country(&self) -> Option<&Country> {
        self.renderer.countries().get(self.cursor)
    }

    pub fn next_country(&mut self) {
        let count = self.renderer.countries().len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
            self.dirty = true;
        }
    }

    pub fn prev_country(&mut self) {
        let count = self.renderer.countries().len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
            self.dirty = true;
        }
    }

    /// Add or remove the cursor country from the selection
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.cursor_country().map(|c| c.id().to_string()) else {
            return;
        };
        let selection = self.renderer.selected_countries();
        let ids: Vec<String> = if selection.contains(&id) {
            selection.iter().filter(|s| *s != id).map(str::to_string).collect()
        } else {
            selection.iter().map(str::to_string).chain(Some(id)).collect()
        };
        self.renderer.set_selected_countries(ids);
    }

    pub fn clear_selection(&mut self) {
        if !self.renderer.selected_countries().is_empty() {
            self.renderer.set_selected_countries(Vec::<String>::new());
        }
    }

    /// Center the view on the cursor country
    pub fn focus_cursor(&mut self) {
        let Some(bounds) = self.cursor_country().and_then(Country::bounds) else {
            return;
        };
        let scale = projection::scale(self.viewport.surface_size().x);
        self.viewport.center_on(projection::project(bounds.center(), scale));
        self.dirty = true;
    }

    pub fn zoom_level(&self) -> String {
        format!("{:.1}x", self.viewport.zoom)
    }

    /// Resolution of the tiles used at the current zoom
    pub fn lod_level(&self) -> String {
        let level = self.renderer.tile_config().level_for_zoom(self.viewport.zoom);
        format!("LOD {} @{}x", level.index, level.scale)
    }

    pub fn center_coords(&self) -> String {
        let center = self.viewport.center_lonlat();
        format!(
            "{:.1}°{}, {:.1}°{}",
            center.y.abs(),
            if center.y >= 0.0 { "N" } else { "S" },
            center.x.abs(),
            if center.x >= 0.0 { "E" } else { "W" }
        )
    }
}
