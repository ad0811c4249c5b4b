use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::Line,
    style::Style,
    widgets::Paragraph,
    Terminal,
};
use tracing::info;

use panorama_core::AppConfig;
use panorama_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets::{NavBarWidget, ProgressBarWidget, StripWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Panorama"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let width = terminal.size()?.width;
    let mut app = App::new(config.clone(), width);
    info!(sections = app.sections().len(), width, "Panorama started");

    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        app.frame_interval(),
        config.ui.wheel_step,
    );

    let result = run_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Cancel any in-flight animation before leaving
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Navigation
                    Constraint::Min(1),    // Strip
                    Constraint::Length(1), // Progress
                    Constraint::Length(1), // Help
                ])
                .split(frame.area());

            NavBarWidget::render(frame, layout[0], app);
            StripWidget::render(frame, layout[1], app);
            ProgressBarWidget::render(frame, layout[2], app);

            let help = " q:quit  wheel/h/l:scroll  tab:next  1-9:jump  t:theme";
            frame.render_widget(
                Paragraph::new(Line::from(help))
                    .style(Style::default().fg(app.theme.grey0).bg(app.theme.bg0)),
                layout[3],
            );
        })?;

        // Poll at the frame rate while a scroll frame is pending
        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, keymap);
                    app.apply(action);
                }
                AppEvent::Wheel(wheel) => {
                    app.handle_wheel(wheel);
                }
                AppEvent::Resize(width, _) => {
                    app.resize(width);
                }
                AppEvent::Tick => {}
            }
        }

        // Fire a due frame whatever event arrived
        app.advance(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
