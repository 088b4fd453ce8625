//! Application state module

mod app_state;
pub mod forms;
mod store;

pub use app_state::*;
pub use forms::*;
pub use store::*;
