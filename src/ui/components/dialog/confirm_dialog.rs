//! Confirmation dialog for resetting the form

use super::base::{render_dialog, DialogConfig};
use crate::state::PendingReset;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Prompt shown before the form is cleared
pub const RESET_PROMPT: &str = "Are you sure you want to reset? Unsaved data will be lost.";

/// Option lines with selection highlighting (Cancel first, then Reset)
fn option_lines(pending: &PendingReset) -> Vec<Line<'static>> {
    let options = [false, true];
    let labels = ["Cancel", "Reset"];
    let colors = [Color::White, Color::Red];

    options
        .iter()
        .zip(labels)
        .zip(colors)
        .map(|((&is_reset, label), base_color)| {
            let is_selected = pending.selected_option == is_reset;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(base_color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{label}"), style))
        })
        .collect()
}

/// Render the reset confirmation dialog
pub fn render_confirm_dialog(frame: &mut Frame, pending: &PendingReset) {
    let hint = vec![
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("y/n", Style::default().fg(Color::Cyan)),
        Span::styled(" answer  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm Reset",
            title_color: Color::Red,
            border_color: Color::Red,
            message: RESET_PROMPT,
            body: option_lines(pending),
            hint: Some(hint),
            max_width: 56,
        },
    );
}
