//! TUI module: Terminal User Interface using Ratatui.
//!
//! Numbered menus in the source system's shape:
//! - Main menu with doctor/patient login
//! - Doctor session (appointments, status changes)
//! - Patient session (booking, billing, health records)

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::Theme;
