use fate_core::{Character, SkillSection};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(character) = app.active_character() else {
        let empty = Paragraph::new("No characters yet. Press 'n' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Sheet ").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let title = format!(
        " {} ({}/{}) ",
        character.name,
        app.active_index + 1,
        app.table.room.characters.len()
    );

    let paragraph = Paragraph::new(sheet_lines(character))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .scroll((app.sheet_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn sheet_lines(character: &Character) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let heading = Style::default().fg(Color::Cyan).bold();
    let dim = Style::default().fg(Color::DarkGray);

    if !character.concept.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Concept  ", dim),
            Span::raw(character.concept.as_str()),
        ]));
    }
    if !character.trouble.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Trouble  ", dim),
            Span::raw(character.trouble.as_str()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Fate points  ", dim),
        Span::styled(character.fate_points.to_string(), heading),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::styled("Aspects", heading));
    for aspect in &character.aspects {
        if aspect.text.is_empty() {
            lines.push(Line::styled("  —", dim));
        } else {
            lines.push(Line::from(format!("  {}", aspect.text)));
        }
    }
    for aspect in &character.temp_aspects {
        lines.push(Line::from(format!(
            "  {} (invokes: {})",
            aspect.text, aspect.invokes
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::styled("Skills", heading));
    push_section(&mut lines, &character.skills, dim);
    if !character.custom_skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Custom skills", heading));
        push_section(&mut lines, &character.custom_skills, dim);
    }
    lines.push(Line::from(""));

    lines.push(Line::styled("Stress", heading));
    for track in &character.stress {
        let mut spans = vec![Span::raw(format!("  {:<10} ", track.name))];
        for &marked in &track.cells {
            spans.push(if marked {
                Span::styled("[x]", Style::default().fg(Color::Red))
            } else {
                Span::styled("[ ]", dim)
            });
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(Line::styled("Consequences", heading));
    for consequence in &character.consequences {
        let text = if consequence.text.is_empty() {
            Span::styled("—", dim)
        } else {
            Span::raw(consequence.text.as_str())
        };
        let severity = consequence.severity.to_string();
        lines.push(Line::from(vec![
            Span::raw(format!("  {severity:<14} ")),
            text,
        ]));
    }

    let stunts: Vec<&str> = character
        .stunts
        .iter()
        .map(|s| s.text.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    if !stunts.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Stunts", heading));
        for stunt in stunts {
            lines.push(Line::from(format!("  {stunt}")));
        }
    }

    if !character.extras.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Extras", heading));
        for extra in character.extras.lines() {
            lines.push(Line::from(format!("  {extra}")));
        }
    }

    lines
}

fn push_section(lines: &mut Vec<Line<'_>>, section: &SkillSection, dim: Style) {
    if section.is_empty() {
        lines.push(Line::styled("  (empty)", dim));
        return;
    }
    for rating in section.ratings_descending() {
        let slots: Vec<String> = (0..section.count(rating))
            .map(|i| {
                section
                    .slot_label(rating, i)
                    .filter(|label| !label.is_empty())
                    .unwrap_or("—")
                    .to_string()
            })
            .collect();
        let rating = rating.to_string();
        lines.push(Line::from(format!("  {rating:>3}  {}", slots.join(", "))));
    }
}
