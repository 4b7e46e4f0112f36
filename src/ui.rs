use crate::app::App;
use glam::DVec2;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};
use tiny_skia::ColorU8;
use world_map::map::TileSet;
use world_map::Viewport;

const OCEAN: (u8, u8, u8) = (24, 38, 56);

/// Render the UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Split into map area and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Map
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_map(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

fn render_map(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " World Map ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Half blocks give 1x2 pixels per character
    app.resize_map(inner.width as usize, inner.height as usize * 2);

    let viewport = app.viewport.clone();
    let tiles = app
        .renderer
        .tiles_for_region(viewport.visible_region(), viewport.zoom);

    frame.render_widget(MapWidget { tiles, viewport }, inner);
}

/// Paints map tiles into the terminal, two pixels per cell
struct MapWidget {
    tiles: TileSet,
    viewport: Viewport,
}

impl MapWidget {
    /// Terminal colour for a screen pixel, blending edge pixels over the ocean
    fn color_at(&self, px: f64, py: f64) -> Color {
        let surface_point = self.viewport.to_surface(DVec2::new(px, py));
        match self.tiles.sample(surface_point) {
            Some(c) if c.alpha() > 0 => blend_over_ocean(c),
            _ => Color::Rgb(OCEAN.0, OCEAN.1, OCEAN.2),
        }
    }
}

fn blend_over_ocean(c: ColorU8) -> Color {
    let a = c.alpha() as u16;
    let mix = |fg: u8, bg: u8| ((fg as u16 * a + bg as u16 * (255 - a)) / 255) as u8;
    Color::Rgb(
        mix(c.red(), OCEAN.0),
        mix(c.green(), OCEAN.1),
        mix(c.blue(), OCEAN.2),
    )
}

impl Widget for MapWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                // Sample pixel centers: top half and bottom half of the cell
                let x = col as f64 + 0.5;
                let top = self.color_at(x, row as f64 * 2.0 + 0.5);
                let bottom = self.color_at(x, row as f64 * 2.0 + 1.5);
                buf[(area.x + col, area.y + row)]
                    .set_char('▀')
                    .set_fg(top)
                    .set_bg(bottom);
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (cursor, cursor_selected) = match app.cursor_country() {
        Some(country) => (
            format!("{} ({})", country.name(), country.id()),
            app.renderer.is_selected(country.id()),
        ),
        None => ("no countries loaded".to_string(), false),
    };

    let status = Line::from(vec![
        Span::styled(" Zoom: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.zoom_level(), Style::default().fg(Color::Yellow)),
        Span::styled(" (", Style::default().fg(Color::DarkGray)),
        Span::styled(app.lod_level(), Style::default().fg(Color::Magenta)),
        Span::styled(") ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.center_coords(), Style::default().fg(Color::Cyan)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            cursor,
            Style::default().fg(if cursor_selected { Color::Green } else { Color::White }),
        ),
        Span::styled(
            format!(" [{} selected]", app.renderer.selected_countries().len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            " | hjkl:pan +/-:zoom n/N:country space:select x:clear f:focus r:reset q:quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(status);
    frame.render_widget(paragraph, area);
}
