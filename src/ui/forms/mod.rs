//! Form rendering module
//!
//! - `field_renderer`: a single input row
//! - `form`: grouped rows with scrolling
//! - `actions`: Ask AI and Reset buttons

mod actions;
mod field_renderer;
mod form;

pub use actions::{draw_actions, ACTIONS_HEIGHT};
pub use form::draw_form;
