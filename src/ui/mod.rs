//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_panel;

use crate::app::App;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

pub use result_panel::prediction_text;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area());

    layout::draw_header(frame, layout.header);
    forms::draw_form(frame, layout.form, app);
    forms::draw_actions(frame, layout.actions, app);
    result_panel::draw_result(frame, layout.result, app);
    layout::draw_status_bar(frame, layout.status, app);

    // Modals on top; errors take precedence
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(pending) = &app.state.pending_reset {
        render_confirm_dialog(frame, pending);
    }
}
