//! fitview-tui: Terminal UI for the fitview FIT viewer
//!
//! This crate provides the renderer layer:
//! - Chart pane with bar/line datasets, zoom/pan, and a selection overlay
//! - Event loop translating keys and mouse drags into core updates
//! - Status bar and key hints

mod app;
mod chart;
mod event;
mod theme;
mod ui;
mod widgets;

pub use app::App;
pub use chart::{ChartWidget, Viewport};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use fitview_core;
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::Path;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the viewer on a FIT file.
///
/// Sets up the terminal, kicks off the initial load, runs the event loop,
/// and restores the terminal on exit.
pub async fn run_tui(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(file.to_path_buf());
    app.start_load();

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = Theme::default();

    loop {
        terminal.draw(|frame| ui::draw(app, &theme, frame))?;

        // Apply any load completions before waiting on input
        app.process_load_outcomes();

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => match event::key_to_action(key) {
                    // Reload spawns a task, so the loop owns it
                    Action::Reload => app.start_load(),
                    action => app.handle_action(action),
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        app.pointer_down(mouse.column, mouse.row);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        app.pointer_up(mouse.column, mouse.row);
                    }
                    MouseEventKind::ScrollUp => app.handle_action(Action::ZoomIn),
                    MouseEventKind::ScrollDown => app.handle_action(Action::ZoomOut),
                    _ => {}
                },
                Event::Tick => {}
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
