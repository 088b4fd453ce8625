//! Layout components (header, panels, status bar)

use super::forms::ACTIONS_HEIGHT;
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the right-hand panel (buttons + result)
const SIDE_PANEL_WIDTH: u16 = 34;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub actions: Rect,
    pub result: Rect,
    pub status: Rect,
}

/// Split the screen into header, form, side panel and status bar
pub fn create_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                  // Form
            Constraint::Length(SIDE_PANEL_WIDTH), // Side panel
        ])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ACTIONS_HEIGHT), // Buttons
            Constraint::Min(0),                 // Result
        ])
        .split(body[1]);

    AppLayout {
        header: rows[0],
        form: body[0],
        actions: side[0],
        result: side[1],
        status: rows[2],
    }
}

/// Draw the title banner
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Are You Burning Out, Bro?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Learn It With AI >>",
            Style::default().fg(Color::Magenta),
        )),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Key hints shown in the status bar
fn key_hints() -> String {
    format!(" Tab/↑↓:move  ←→:change  0-9:type  {SUBMIT_SHORTCUT}:ask  {RESET_SHORTCUT}:reset  y:copy")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Request status
    let indicator = if app.is_disabled() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else if app.store.state().error {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(key_hints(), Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_fill_screen() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.form.x, 0);
        assert_eq!(layout.actions.width, SIDE_PANEL_WIDTH);
        assert_eq!(layout.form.width + layout.actions.width, 100);
        assert_eq!(layout.actions.height, ACTIONS_HEIGHT);
        assert_eq!(layout.result.y, layout.actions.y + ACTIONS_HEIGHT);
    }

    #[test]
    fn test_key_hints_name_shortcuts() {
        let hints = key_hints();
        assert!(hints.contains(SUBMIT_SHORTCUT));
        assert!(hints.contains(RESET_SHORTCUT));
    }
}
