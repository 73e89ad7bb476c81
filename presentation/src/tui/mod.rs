//! TUI (Text User Interface) module for qachat
//!
//! Terminal chat view built on ratatui: header, scrolling history, a
//! single-line input and a status bar, with a blocking alert for failed
//! requests.

mod app;
mod event;
mod keys;
mod state;
mod style;
mod widgets;

pub use app::{ChatApp, render};
pub use event::AppEvent;
pub use keys::{KeyAction, map_key};
pub use state::TuiState;
pub use style::RoleStyle;
pub use widgets::{
    MainLayout, alert::AlertWidget, header::HeaderWidget, history::HistoryWidget,
    input::InputWidget, status_bar::StatusBarWidget,
};
