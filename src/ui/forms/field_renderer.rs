//! Field rendering utilities for the form

use crate::state::{FieldKind, FieldSpec, FieldValue};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Everything needed to render one input row
#[derive(Debug, Clone, PartialEq)]
pub struct FormItemProps<'a> {
    pub spec: &'static FieldSpec,
    pub value: Option<&'a FieldValue>,
    /// Digits typed but not yet committed
    pub draft: Option<&'a str>,
    pub is_active: bool,
    pub disabled: bool,
}

impl FormItemProps<'_> {
    /// Text shown in the value column
    pub fn value_text(&self) -> String {
        if let Some(draft) = self.draft.filter(|_| self.is_active) {
            return draft.to_string();
        }
        self.spec
            .display_value(self.value)
            .unwrap_or_else(|| "(empty)".to_string())
    }

    fn is_empty(&self) -> bool {
        self.value.is_none() && !(self.is_active && self.draft.is_some())
    }
}

/// Render an input row: focus marker, padded label, value and edit hint
pub fn form_item_line(props: &FormItemProps, width: u16) -> Line<'static> {
    let label_width = (width as usize * 3 / 5).clamp(10, 40);
    let label = format!(
        "{:<label_width$}",
        truncate_str(props.spec.title, label_width.saturating_sub(1))
    );
    let marker = if props.is_active { "▸ " } else { "  " };

    if props.disabled {
        let dim = Style::default().fg(Color::DarkGray);
        return Line::from(vec![
            Span::styled(marker, dim),
            Span::styled(label, dim),
            Span::styled(props.value_text(), dim),
        ]);
    }

    let label_style = if props.is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let value_style = if props.is_empty() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if props.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(label, label_style),
    ];

    match props.spec.kind {
        FieldKind::Select { .. } if props.is_active => {
            let arrow = Style::default().fg(Color::Cyan);
            spans.push(Span::styled("◂ ", arrow));
            spans.push(Span::styled(props.value_text(), value_style));
            spans.push(Span::styled(" ▸", arrow));
        }
        FieldKind::Number { step, .. } if props.is_active => {
            spans.push(Span::styled(props.value_text(), value_style));
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            if step > 1 {
                spans.push(Span::styled(
                    format!("  ±{step}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        _ => spans.push(Span::styled(props.value_text(), value_style)),
    }

    Line::from(spans)
}

/// Truncate to at most `max_chars` characters, marking the cut with "…"
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
