mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::path::Path;
use std::time::Duration;
use world_map::WorldRenderer;

/// Feature collection with one feature per country
const WORLD_DATA: &str = "data/world.json";

fn main() -> Result<()> {
    env_logger::init();

    // Load before the terminal goes raw so diagnostics stay readable
    let renderer = WorldRenderer::from_path(Path::new(WORLD_DATA), 0.0);

    let mut terminal = ratatui::init();
    terminal.clear()?;
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, renderer);

    // Disable mouse capture and restore terminal
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Handle mouse events for panning and zooming
fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.zoom_in_at(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.zoom_out_at(mouse.column, mouse.row),
        // Horizontal scroll for panning (trackpad two-finger swipe)
        MouseEventKind::ScrollLeft => app.pan(-15, 0),
        MouseEventKind::ScrollRight => app.pan(15, 0),
        MouseEventKind::Down(MouseButton::Left) => {
            app.last_mouse = Some((mouse.column, mouse.row));
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.handle_drag(mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_drag();
        }
        _ => {}
    }
}

fn run(terminal: &mut DefaultTerminal, renderer: WorldRenderer) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(renderer, size.width as usize, size.height as usize);

    loop {
        // Paint only when the view or the selection changed
        if app.needs_redraw() {
            terminal.draw(|frame| ui::render(frame, &mut app))?;
        }

        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (not release)
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => app.quit(),

                            // Pan with hjkl or arrow keys
                            KeyCode::Left | KeyCode::Char('h') => app.pan(-10, 0),
                            KeyCode::Right | KeyCode::Char('l') => app.pan(10, 0),
                            KeyCode::Up | KeyCode::Char('k') => app.pan(0, -6),
                            KeyCode::Down | KeyCode::Char('j') => app.pan(0, 6),

                            // Zoom
                            KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_in(),
                            KeyCode::Char('-') | KeyCode::Char('_') => app.zoom_out(),

                            // Selection
                            KeyCode::Char('n') | KeyCode::Tab => app.next_country(),
                            KeyCode::Char('N') | KeyCode::BackTab => app.prev_country(),
                            KeyCode::Char(' ') => app.toggle_selected(),
                            KeyCode::Char('x') => app.clear_selection(),
                            KeyCode::Char('f') => app.focus_cursor(),

                            // Reset view
                            KeyCode::Char('r') | KeyCode::Char('0') => app.reset_view(),

                            _ => {}
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse(&mut app, mouse);
                }
                Event::Resize(width, height) => {
                    app.resize(width as usize, height as usize);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
