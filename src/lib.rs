//! ticklist — a tiny terminal to-do list.
//!
//! The functional core is [`store::TaskStore`], an in-memory ordered
//! sequence of tasks with four operations (add, edit, toggle, remove).
//! Everything under [`tui`] is presentation: a ratatui event loop that
//! drives the store and two modal popups (duplicate-title alert, delete
//! confirmation).

pub mod io;
pub mod model;
pub mod store;
pub mod tui;
pub mod util;
