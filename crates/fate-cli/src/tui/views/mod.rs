pub mod chat;
pub mod sheet;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};

use super::app::{ActiveView, App, InputMode};

pub fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles = vec!["[1] Sheet", "[2] Chat"];
    let selected = match app.active_view {
        ActiveView::Sheet => 0,
        ActiveView::Chat => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::White).bold())
        .divider(" | ");

    frame.render_widget(tabs, area);
}

pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(notice) = &app.notice {
        notice.clone()
    } else {
        match app.input_mode {
            InputMode::Insert => {
                "typing… (Enter to send, /ai <prompt> for the oracle, Esc to cancel)".to_string()
            }
            InputMode::Normal => {
                let oracle = if app.pending_oracle > 0 {
                    " | oracle is thinking…"
                } else {
                    ""
                };
                match app.active_view {
                    ActiveView::Sheet => format!(
                        "{} [{}]{oracle} | [/]:character +/-:fate n:new r:roll Tab:view ?:help q:quit",
                        app.table.room.name, app.table.room.code
                    ),
                    ActiveView::Chat => format!(
                        "modifier {:+}{oracle} | i:type +/-:modifier r:roll j/k:scroll ?:help q:quit",
                        app.modifier
                    ),
                }
            }
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Tab / 1 / 2   Switch view"),
        Line::from("  [ / ]         Previous / next character"),
        Line::from("  n             New character (sheet view)"),
        Line::from("  + / -         Fate points (sheet) or modifier (chat)"),
        Line::from("  r             Roll 4dF with the current modifier"),
        Line::from("  i             Type a chat message (chat view)"),
        Line::from("  /ai <prompt>  Ask the oracle from the input line"),
        Line::from("  j / k         Scroll"),
        Line::from("  ?             Toggle this help"),
        Line::from("  q             Quit"),
        Line::from("  Ctrl+C        Force quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
