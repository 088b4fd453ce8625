//! The burnout form: grouped input rows inside a scrolling panel

use super::field_renderer::{form_item_line, FormItemProps};
use crate::app::App;
use crate::state::forms::catalog::{field, Group, GROUPS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One rendered row of the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormRow<'a> {
    GroupTitle(&'static Group),
    Item(FormItemProps<'a>),
    Spacer,
}

/// Build the form rows for the current value, focus and fetch state
pub fn form_rows(app: &App) -> Vec<FormRow<'_>> {
    let value = &app.store.state().value;
    let focused = app.state.form.focused_field().map(|f| f.id);
    let draft = app.state.form.draft.as_deref();
    let disabled = app.is_disabled();

    let mut rows = Vec::new();
    for (idx, group) in GROUPS.iter().enumerate() {
        if idx > 0 {
            rows.push(FormRow::Spacer);
        }
        rows.push(FormRow::GroupTitle(group));
        for spec in group.items.iter().filter_map(|id| field(id)) {
            let is_active = focused == Some(spec.id);
            rows.push(FormRow::Item(FormItemProps {
                spec,
                value: value.get(spec.id),
                draft: draft.filter(|_| is_active),
                is_active,
                disabled,
            }));
        }
    }
    rows
}

/// First visible row so the active row (and one row after it) stays on screen
pub fn scroll_offset(rows: &[FormRow], height: usize) -> usize {
    if height == 0 || rows.len() <= height {
        return 0;
    }
    let max_offset = rows.len() - height;
    let active = rows
        .iter()
        .position(|row| matches!(row, FormRow::Item(item) if item.is_active));
    match active {
        // Buttons are focused: show the end of the form
        None => max_offset,
        Some(idx) => (idx + 2).saturating_sub(height).min(max_offset),
    }
}

fn row_line(row: &FormRow, width: u16) -> Line<'static> {
    match row {
        FormRow::GroupTitle(group) => Line::from(Span::styled(
            group.title.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        FormRow::Item(item) => form_item_line(item, width),
        FormRow::Spacer => Line::from(""),
    }
}

/// Draw the form panel
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.state.form.focused_field().is_some() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Tell us about yourself ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = form_rows(app);
    let height = inner.height as usize;
    let offset = scroll_offset(&rows, height);

    let lines: Vec<Line> = rows
        .iter()
        .skip(offset)
        .take(height)
        .map(|row| row_line(row, inner.width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::MockPredictorClientTrait;
    use crate::state::{FieldValue, FocusRing};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn test_app() -> App {
        App::with_predictor(Arc::new(MockPredictorClientTrait::new()))
    }

    fn items<'a>(rows: &'a [FormRow<'a>]) -> Vec<&'a FormItemProps<'a>> {
        rows.iter()
            .filter_map(|row| match row {
                FormRow::Item(item) => Some(item),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_field_renders_once() {
        let app = test_app();
        let rows = form_rows(&app);
        let items = items(&rows);
        assert_eq!(items.len(), 30);

        let titles = rows
            .iter()
            .filter(|row| matches!(row, FormRow::GroupTitle(_)))
            .count();
        assert_eq!(titles, GROUPS.len());
    }

    #[test]
    fn test_first_field_is_active_by_default() {
        let app = test_app();
        let rows = form_rows(&app);
        let active: Vec<_> = items(&rows)
            .into_iter()
            .filter(|item| item.is_active)
            .map(|item| item.spec.id)
            .collect();
        assert_eq!(active, vec!["age"]);
    }

    #[test]
    fn test_rows_carry_current_values() {
        let mut app = test_app();
        let spec = field("age").unwrap();
        app.change_field(spec, FieldValue::Number(42));
        let rows = form_rows(&app);
        let age = items(&rows)
            .into_iter()
            .find(|item| item.spec.id == "age")
            .unwrap();
        assert_eq!(age.value, Some(&FieldValue::Number(42)));
    }

    #[test]
    fn test_all_items_disabled_while_fetching() {
        let mut app = test_app();
        app.store.dispatch(crate::state::Action::PostParamsPending);
        let rows = form_rows(&app);
        assert!(items(&rows).iter().all(|item| item.disabled));
    }

    #[test]
    fn test_scroll_offset_fits_without_scrolling() {
        let app = test_app();
        let rows = form_rows(&app);
        assert_eq!(scroll_offset(&rows, rows.len()), 0);
        assert_eq!(scroll_offset(&rows, 0), 0);
    }

    #[test]
    fn test_scroll_offset_follows_focus() {
        let mut app = test_app();
        let height = 10;

        assert_eq!(scroll_offset(&form_rows(&app), height), 0);

        app.state.form.focus_field("stockOptionLevel");
        let rows = form_rows(&app);
        let offset = scroll_offset(&rows, height);
        let active = rows
            .iter()
            .position(|row| matches!(row, FormRow::Item(item) if item.is_active))
            .unwrap();
        assert!(active >= offset && active < offset + height);
    }

    #[test]
    fn test_scroll_offset_shows_end_when_buttons_focused() {
        let mut app = test_app();
        let count = app.state.form.focus_count();
        app.state.form.set_active_index(count - 1);
        let rows = form_rows(&app);
        assert_eq!(scroll_offset(&rows, 10), rows.len() - 10);
    }
}
