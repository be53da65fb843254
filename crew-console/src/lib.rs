//! Crew Console - terminal dashboard for employee management
//!
//! Login gate, summary dashboard, and an employee roster with
//! search/filter/selection, create/edit/delete, status toggle and
//! print/export. All data lives behind the REST backend; the console keeps
//! only a per-view cache.

pub mod app;
pub mod core;
pub mod event;
pub mod theme;
pub mod ui;
