use fate_dice::ladder_label;
use fate_table::{ChatMessage, MessageKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, InputMode};

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Message log
            Constraint::Length(3), // Input line
        ])
        .split(area);

    draw_log(frame, app, chunks[0]);
    draw_input(frame, app, chunks[1]);
}

fn draw_log(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line<'_>> = app
        .table
        .room
        .messages
        .iter()
        .map(message_line)
        .collect();

    // Stick to the bottom; chat_scroll counts lines scrolled back up.
    let inner_height = area.height.saturating_sub(2);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let bottom = total.saturating_sub(inner_height);
    let offset = bottom.saturating_sub(app.chat_scroll);

    let log = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Table log ({total}) "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .scroll((offset, 0));

    frame.render_widget(log, area);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.input_mode {
        InputMode::Insert => (
            format!("{}▏", app.input),
            Style::default().fg(Color::White),
        ),
        InputMode::Normal => (
            "press 'i' to type, /ai <prompt> asks the oracle".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title(format!(" Message (modifier {:+}) ", app.modifier))
            .borders(Borders::ALL)
            .border_style(match app.input_mode {
                InputMode::Insert => Style::default().fg(Color::Cyan),
                InputMode::Normal => Style::default().fg(Color::DarkGray),
            }),
    );

    frame.render_widget(input, area);
}

fn message_line(message: &ChatMessage) -> Line<'_> {
    let time = Span::styled(
        message.timestamp.format("%H:%M ").to_string(),
        Style::default().fg(Color::DarkGray),
    );

    match message.kind {
        MessageKind::System => Line::from(vec![
            time,
            Span::styled(
                message.body.as_str(),
                Style::default().fg(Color::DarkGray).italic(),
            ),
        ]),
        MessageKind::Oracle => Line::from(vec![
            time,
            Span::styled(
                format!("{}: ", message.sender),
                Style::default().fg(Color::Magenta).bold(),
            ),
            Span::styled(message.body.as_str(), Style::default().fg(Color::Magenta)),
        ]),
        MessageKind::Roll => {
            let mut spans = vec![
                time,
                Span::styled(
                    format!("{} ", message.sender),
                    Style::default().fg(Color::White).bold(),
                ),
            ];
            if let Some(roll) = &message.roll {
                let rung = ladder_label(roll.total).unwrap_or("off the ladder");
                spans.push(Span::styled(
                    roll.to_string(),
                    Style::default().fg(Color::Cyan).bold(),
                ));
                spans.push(Span::styled(
                    format!(" ({rung})"),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::raw(message.body.as_str()));
            }
            Line::from(spans)
        }
        MessageKind::Text => Line::from(vec![
            time,
            Span::styled(
                format!("{}: ", message.sender),
                Style::default().fg(Color::White).bold(),
            ),
            Span::raw(message.body.as_str()),
        ]),
    }
}
