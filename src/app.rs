//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_action_modifier;
use crate::predictor::{PredictorClient, PredictorClientTrait};
use crate::state::{
    Action, AppState, FieldKind, FieldSpec, FieldValue, Focus, FocusRing, FormButton,
    PendingReset, Store,
};
use crate::ui::prediction_text;
use anyhow::{anyhow, Result};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// UI-only state (focus, dialogs, status)
    pub state: AppState,
    /// Form value, prediction, fetch and error flags
    pub store: Store,
    /// Prediction service client
    predictor: Arc<dyn PredictorClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured prediction service
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let predictor = PredictorClient::from_config(config)?;
        tracing::info!("Prediction endpoint: {}", predictor.endpoint());
        Ok(Self::with_predictor(Arc::new(predictor)))
    }

    /// Create an App with an explicit predictor client
    pub fn with_predictor(predictor: Arc<dyn PredictorClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            store: Store::new(),
            predictor,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Inputs and buttons are disabled while a request is in flight
    pub fn is_disabled(&self) -> bool {
        self.store.state().fetching
    }

    /// Apply outcomes of background requests; returns true if any arrived
    pub fn poll_store(&mut self) -> bool {
        let mut changed = false;
        while let Some(action) = self.store.try_next() {
            match &action {
                Action::PostParamsFulfilled(_) => {
                    let now = Local::now();
                    self.state.last_prediction_at = Some(now);
                    self.state.status_message =
                        Some(format!("Prediction received at {}", now.format("%H:%M:%S")));
                }
                Action::PostParamsRejected => self.state.status_message = None,
                _ => {}
            }
            self.store.dispatch(action);
            changed = true;
        }
        changed
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle reset confirmation (modal)
        if self.state.pending_reset.is_some() {
            self.handle_reset_dialog_key(key);
            return Ok(());
        }

        // Form shortcuts (work from anywhere)
        if is_action_modifier(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.request_reset(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Char('y') => {
                if let Err(err) = self.copy_prediction() {
                    self.push_error(format!("Copy failed: {err}"));
                }
            }
            _ => match self.state.form.focus() {
                Focus::Field(spec) => self.handle_field_key(spec, key),
                Focus::Button(button) => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.press(button);
                    }
                }
            },
        }
        Ok(())
    }

    /// Handle editing keys for the focused field
    fn handle_field_key(&mut self, spec: &'static FieldSpec, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.focus_next();
            return;
        }
        if self.is_disabled() {
            return;
        }

        let current = self.store.state().value.get(spec.id).cloned();
        match (spec.kind, key.code) {
            (FieldKind::Number { .. }, KeyCode::Char(c)) if c.is_ascii_digit() => {
                self.state.form.push_digit(c);
            }
            (FieldKind::Number { .. }, KeyCode::Backspace) => {
                if self.state.form.draft.is_none() {
                    // Start editing from the current value
                    self.state.form.draft = current.as_ref().map(FieldValue::to_string);
                }
                self.state.form.pop_digit();
            }
            (FieldKind::Number { .. }, KeyCode::Right | KeyCode::Char('+')) => {
                self.state.form.clear_draft();
                if let Some(value) = spec.stepped(current.as_ref(), true) {
                    self.change_field(spec, value);
                }
            }
            (FieldKind::Number { .. }, KeyCode::Left | KeyCode::Char('-')) => {
                self.state.form.clear_draft();
                if let Some(value) = spec.stepped(current.as_ref(), false) {
                    self.change_field(spec, value);
                }
            }
            (FieldKind::Select { .. }, KeyCode::Right | KeyCode::Char(' ')) => {
                if let Some(value) = spec.cycled(current.as_ref(), true) {
                    self.change_field(spec, value);
                }
            }
            (FieldKind::Select { .. }, KeyCode::Left) => {
                if let Some(value) = spec.cycled(current.as_ref(), false) {
                    self.change_field(spec, value);
                }
            }
            _ => {}
        }
    }

    /// Merge an edit into the form value through the field's change rule
    pub fn change_field(&mut self, spec: &FieldSpec, value: FieldValue) {
        let patch = spec.patch(value);
        let merged = self.store.state().value.merged(&patch);
        self.store.set_value(merged);
    }

    /// Commit the number draft of the focused field, if any
    fn commit_draft(&mut self) {
        let Some(spec) = self.state.form.focused_field() else {
            self.state.form.clear_draft();
            return;
        };
        let Some(draft) = self.state.form.take_draft() else {
            return;
        };
        if self.is_disabled() {
            return;
        }
        if let Some(value) = spec.parse_draft(&draft) {
            self.change_field(spec, value);
        }
    }

    fn focus_next(&mut self) {
        self.commit_draft();
        self.state.form.next_focus();
    }

    fn focus_prev(&mut self) {
        self.commit_draft();
        self.state.form.prev_focus();
    }

    fn press(&mut self, button: FormButton) {
        match button {
            FormButton::AskAi => self.submit(),
            FormButton::Reset => self.request_reset(),
        }
    }

    /// Send the full form value for prediction
    pub fn submit(&mut self) {
        if self.is_disabled() {
            return;
        }
        self.commit_draft();
        let value = self.store.state().value.clone();
        tracing::info!("Submitting {} field values", value.len());
        self.state.status_message = Some("Asking AI...".to_string());
        self.store.post_params(Arc::clone(&self.predictor), value);
    }

    /// Ask for confirmation before clearing the form
    pub fn request_reset(&mut self) {
        if self.is_disabled() {
            return;
        }
        self.state.pending_reset = Some(PendingReset::default());
    }

    fn handle_reset_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab => {
                if let Some(pending) = self.state.pending_reset.as_mut() {
                    pending.toggle();
                }
            }
            KeyCode::Enter => {
                let confirmed = self
                    .state
                    .pending_reset
                    .as_ref()
                    .is_some_and(|p| p.selected_option);
                if confirmed {
                    self.confirm_reset();
                } else {
                    self.state.pending_reset = None;
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_reset(),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.state.pending_reset = None;
            }
            _ => {}
        }
    }

    fn confirm_reset(&mut self) {
        self.state.pending_reset = None;
        self.state.form.clear_draft();
        self.store.reset_value();
        self.state.status_message = Some("Form reset".to_string());
    }

    /// Handle mouse events (wheel moves focus)
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() || self.state.pending_reset.is_some() {
            return Ok(());
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.focus_prev(),
            MouseEventKind::ScrollDown => self.focus_next(),
            _ => {}
        }
        Ok(())
    }

    /// Copy the current prediction to the system clipboard
    fn copy_prediction(&mut self) -> Result<()> {
        let text = self
            .store
            .state()
            .prediction
            .as_ref()
            .map(prediction_text)
            .ok_or_else(|| anyhow!("no prediction yet"))?;
        self.copy_to_clipboard(&text)?;
        self.state.status_message = Some(format!("Copied {} chars", text.len()));
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
