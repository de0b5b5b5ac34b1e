mod app;
mod views;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use fate_table::SnapshotStore;

use app::{ActiveView, App, InputMode};

/// How long one event-loop tick waits before draining oracle replies.
const TICK: Duration = Duration::from_millis(100);

pub fn run(store: &SnapshotStore) -> Result<(), String> {
    let table = crate::commands::load_table(store)?;

    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(table, store.clone());

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.drain_oracle();

        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        // Poll with a timeout so oracle replies show up without a
        // keypress.
        if !event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            continue;
        }

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('?') => app.toggle_help(),
                    KeyCode::Tab => app.next_view(),
                    KeyCode::Char('1') => app.switch_view(ActiveView::Sheet),
                    KeyCode::Char('2') => app.switch_view(ActiveView::Chat),
                    KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
                    KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
                    KeyCode::Char('r') => app.roll(),
                    KeyCode::Char('i') if app.active_view == ActiveView::Chat => {
                        app.input_mode = InputMode::Insert;
                    }
                    KeyCode::Char(']') => app.next_character(),
                    KeyCode::Char('[') => app.prev_character(),
                    KeyCode::Char('n') if app.active_view == ActiveView::Sheet => {
                        app.add_character();
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => match app.active_view {
                        ActiveView::Sheet => app.adjust_fate(1),
                        ActiveView::Chat => app.modifier += 1,
                    },
                    KeyCode::Char('-') => match app.active_view {
                        ActiveView::Sheet => app.adjust_fate(-1),
                        ActiveView::Chat => app.modifier -= 1,
                    },
                    _ => {}
                },
                InputMode::Insert => match key.code {
                    KeyCode::Esc => {
                        app.input.clear();
                        app.input_mode = InputMode::Normal;
                    }
                    KeyCode::Enter => app.submit_input(),
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) => app.input.push(c),
                    _ => {}
                },
            }
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    views::draw_tab_bar(frame, app, chunks[0]);

    match app.active_view {
        ActiveView::Sheet => views::sheet::draw(frame, app, chunks[1]),
        ActiveView::Chat => views::chat::draw(frame, app, chunks[1]),
    }

    views::draw_status_bar(frame, app, chunks[2]);

    if app.show_help {
        views::draw_help_popup(frame);
    }
}
