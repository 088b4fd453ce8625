//! Prediction and error indicator

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

/// Text shown for a prediction: strings unquoted, anything else pretty JSON
pub fn prediction_text(prediction: &Value) -> String {
    match prediction {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Lines of the result panel for the current store state
pub fn result_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.store.state();
    let mut lines = Vec::new();

    if state.fetching {
        lines.push(Line::from(Span::styled(
            "Thinking...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    if state.error {
        lines.push(Line::from(Span::styled(
            "⚠ Something went wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    match &state.prediction {
        Some(prediction) => {
            lines.extend(
                prediction_text(prediction)
                    .lines()
                    .map(|l| Line::from(l.to_string())),
            );
            if let Some(at) = app.state.last_prediction_at {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("{} · y:copy", at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        None if lines.is_empty() => lines.push(Line::from(Span::styled(
            "Fill in the form and ask the AI.",
            Style::default().fg(Color::DarkGray),
        ))),
        None => {}
    }

    lines
}

/// Draw the result panel
pub fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.store.state().error {
        Color::Red
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(result_lines(app))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
