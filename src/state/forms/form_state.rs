//! Focus and draft state of the rendered form controls

use super::catalog::{input_count, ordered_fields};
use super::field::FieldSpec;

/// Action buttons below the form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    AskAi,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::AskAi, FormButton::Reset];
}

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(&'static FieldSpec),
    Button(FormButton),
}

/// Trait for common focus-ring operations
pub trait FocusRing {
    fn focus_count(&self) -> usize;
    fn active_index(&self) -> usize;
    fn set_active_index(&mut self, index: usize);
    fn next_focus(&mut self) {
        let count = self.focus_count();
        let current = self.active_index();
        self.set_active_index((current + 1) % count);
    }
    fn prev_focus(&mut self) {
        let count = self.focus_count();
        let current = self.active_index();
        if current == 0 {
            self.set_active_index(count - 1);
        } else {
            self.set_active_index(current - 1);
        }
    }
}

/// Control state for the burnout form
///
/// Fields come first in group order, followed by the action buttons.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub active_index: usize,
    /// Uncommitted text typed into the focused number field
    pub draft: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the active index to a field or button
    pub fn focus(&self) -> Focus {
        let fields = input_count();
        if self.active_index < fields {
            if let Some(spec) = ordered_fields().nth(self.active_index) {
                return Focus::Field(spec);
            }
        }
        match self.active_index - fields {
            0 => Focus::Button(FormButton::AskAi),
            _ => Focus::Button(FormButton::Reset),
        }
    }

    /// The focused field, if focus is on a field
    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        match self.focus() {
            Focus::Field(spec) => Some(spec),
            Focus::Button(_) => None,
        }
    }

    pub fn is_button_focused(&self, button: FormButton) -> bool {
        self.focus() == Focus::Button(button)
    }

    /// Move focus onto a specific field
    pub fn focus_field(&mut self, id: &str) {
        if let Some(index) = ordered_fields().position(|f| f.id == id) {
            self.draft = None;
            self.active_index = index;
        }
    }

    /// Append a digit to the draft; non-digits are ignored
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() {
            let draft = self.draft.get_or_insert_with(String::new);
            // i64 overflows past 18 digits
            if draft.len() < 18 {
                draft.push(c);
            }
        }
    }

    pub fn pop_digit(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.pop();
        }
    }

    /// Take the draft out, leaving none
    pub fn take_draft(&mut self) -> Option<String> {
        self.draft.take().filter(|d| !d.is_empty())
    }

    pub fn clear_draft(&mut self) {
        self.draft = None;
    }
}

impl FocusRing for FormState {
    fn focus_count(&self) -> usize {
        input_count() + FormButton::ALL.len()
    }
    fn active_index(&self) -> usize {
        self.active_index
    }
    fn set_active_index(&mut self, index: usize) {
        self.draft = None;
        self.active_index = index.min(self.focus_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_first_field() {
        let form = FormState::new();
        assert_eq!(form.focused_field().map(|f| f.id), Some("age"));
    }

    #[test]
    fn test_focus_count_includes_buttons() {
        let form = FormState::new();
        assert_eq!(form.focus_count(), 32);
    }

    #[test]
    fn test_buttons_follow_fields() {
        let mut form = FormState::new();
        form.set_active_index(30);
        assert_eq!(form.focus(), Focus::Button(FormButton::AskAi));
        form.next_focus();
        assert_eq!(form.focus(), Focus::Button(FormButton::Reset));
        assert!(form.is_button_focused(FormButton::Reset));
    }

    #[test]
    fn test_next_focus_wraps() {
        let mut form = FormState::new();
        form.set_active_index(31);
        form.next_focus();
        assert_eq!(form.active_index, 0);
    }

    #[test]
    fn test_prev_focus_wraps() {
        let mut form = FormState::new();
        form.prev_focus();
        assert_eq!(form.active_index, 31);
    }

    #[test]
    fn test_set_active_index_clamps() {
        let mut form = FormState::new();
        form.set_active_index(100);
        assert_eq!(form.active_index, 31);
    }

    #[test]
    fn test_moving_focus_drops_draft() {
        let mut form = FormState::new();
        form.push_digit('4');
        form.next_focus();
        assert!(form.draft.is_none());
    }

    #[test]
    fn test_push_digit_ignores_non_digits() {
        let mut form = FormState::new();
        form.push_digit('4');
        form.push_digit('x');
        form.push_digit('2');
        assert_eq!(form.draft.as_deref(), Some("42"));
    }

    #[test]
    fn test_pop_digit_and_take_empty_draft() {
        let mut form = FormState::new();
        form.push_digit('7');
        form.pop_digit();
        assert_eq!(form.take_draft(), None);
        assert!(form.draft.is_none());
    }

    #[test]
    fn test_draft_is_bounded() {
        let mut form = FormState::new();
        for _ in 0..30 {
            form.push_digit('9');
        }
        assert_eq!(form.draft.as_ref().map(String::len), Some(18));
    }

    #[test]
    fn test_focus_field_by_id() {
        let mut form = FormState::new();
        form.focus_field("yearsSinceLastPromotion");
        assert_eq!(
            form.focused_field().map(|f| f.id),
            Some("yearsSinceLastPromotion")
        );
        form.focus_field("missing");
        assert_eq!(
            form.focused_field().map(|f| f.id),
            Some("yearsSinceLastPromotion")
        );
    }
}
