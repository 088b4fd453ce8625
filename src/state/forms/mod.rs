//! Form domain layer
//!
//! Static field metadata, the section layout, and the control state
//! (focus ring and number drafts) of the burnout form.

pub mod catalog;
mod field;
mod form_state;

pub use field::{ChangeRule, FieldKind, FieldSpec, FieldValue, FormValue, OptionId, SelectOption};
pub use form_state::{Focus, FocusRing, FormButton, FormState};
