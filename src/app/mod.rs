//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod input_target;
mod intent_mapping;
/// Bildschirm-Modi und Button-Aktionen
pub mod mode;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Formen, Nachzeichnungen, View, UI).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use input_target::{FieldValue, InputTarget};
pub use mode::{AppMode, UiButton};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, StatusMessage, UiState, ViewState};
pub use use_cases::measurement::MeasureKind;
