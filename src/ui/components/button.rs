//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Everything a button needs to render itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonProps<'a> {
    /// Primary buttons get a green accent
    pub primary: bool,
    /// Short name shown on the border
    pub title: &'a str,
    /// Text inside the button
    pub label: &'a str,
    pub disabled: bool,
    pub is_selected: bool,
}

/// Border and text styles for a button
pub fn button_styles(props: &ButtonProps) -> (Style, Style) {
    if props.disabled {
        let dim = Style::default().fg(Color::DarkGray);
        return (dim, dim);
    }

    let accent = if props.primary {
        Color::Green
    } else {
        Color::White
    };

    let border_style = if props.is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if props.is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if props.primary {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };

    (border_style, text_style)
}

/// Render a bordered button
pub fn render_button(frame: &mut Frame, area: Rect, props: &ButtonProps) {
    let (border_style, text_style) = button_styles(props);
    let prefix = if props.is_selected { "▸" } else { " " };

    let paragraph = Paragraph::new(format!("{prefix}{} ", props.label)).style(text_style);
    let block = Block::default()
        .title(format!(" {} ", props.title))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(primary: bool, disabled: bool, is_selected: bool) -> ButtonProps<'static> {
        ButtonProps {
            primary,
            title: "Reset",
            label: "Reset",
            disabled,
            is_selected,
        }
    }

    #[test]
    fn test_disabled_button_is_dimmed_even_when_selected() {
        let (border, text) = button_styles(&props(true, true, true));
        assert_eq!(border.fg, Some(Color::DarkGray));
        assert_eq!(text.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_primary_button_has_green_accent() {
        let (_, text) = button_styles(&props(true, false, false));
        assert_eq!(text.fg, Some(Color::Green));
    }

    #[test]
    fn test_selected_button_is_cyan() {
        let (border, text) = button_styles(&props(false, false, true));
        assert_eq!(border.fg, Some(Color::Cyan));
        assert_eq!(text.fg, Some(Color::Cyan));
    }
}
