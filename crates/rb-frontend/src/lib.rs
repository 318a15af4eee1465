//! Room Builder Frontend
//!
//! egui-based application for furnishing a room.

pub mod actions;
pub mod app;
pub mod config;
pub mod panels;
pub mod state;
pub mod theme;

// Re-exports for convenience
pub use app::RoomBuilderApp;
pub use config::{AppConfig, ConfigManager, SharedConfig};
pub use state::{AppAction, AppState, SharedAppState};
