//! Application State: zentrale Datenhaltung.

mod app_state;
mod ui;
mod view;

pub use app_state::AppState;
pub use ui::{InputFields, StatusMessage, UiState, MESSAGE_HIDDEN_GRAY, MESSAGE_START_GRAY};
pub use view::ViewState;
