//! Form state for the creation flows and auth

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
