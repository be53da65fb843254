//! UI-agnostic application core
//!
//! Everything that decides *what* happens lives here; the TUI layer only
//! renders state and routes key presses.

pub mod export;
pub mod form;
pub mod roster;
pub mod session;

pub use form::{EmployeeForm, FormMode};
pub use roster::{Roster, RosterFilter, Summary};
pub use session::Session;
