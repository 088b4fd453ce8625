//! Ask AI / Reset buttons

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormButton;
use crate::ui::components::{render_button, ButtonProps, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Height of the action panel
pub const ACTIONS_HEIGHT: u16 = BUTTON_HEIGHT * FormButton::ALL.len() as u16;

/// Props for each form button, in focus order
pub fn action_buttons(app: &App) -> Vec<ButtonProps<'static>> {
    let disabled = app.is_disabled();
    FormButton::ALL
        .iter()
        .map(|&button| {
            let is_selected = app.state.form.is_button_focused(button);
            match button {
                FormButton::AskAi => ButtonProps {
                    primary: true,
                    title: SUBMIT_SHORTCUT,
                    label: if disabled { "Asking AI..." } else { "» Ask AI «" },
                    disabled,
                    is_selected,
                },
                FormButton::Reset => ButtonProps {
                    primary: false,
                    title: RESET_SHORTCUT,
                    label: "Reset",
                    disabled,
                    is_selected,
                },
            }
        })
        .collect()
}

/// Draw the action buttons stacked vertically
pub fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let buttons = action_buttons(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            buttons
                .iter()
                .map(|_| Constraint::Length(BUTTON_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (props, chunk) in buttons.iter().zip(chunks.iter()) {
        render_button(frame, *chunk, props);
    }
}
