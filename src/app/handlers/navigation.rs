//! Handler für Moduswechsel und Frame-Takt.

use crate::app::mode::AppMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Wechselt in den Zielmodus.
pub fn switch_mode(state: &mut AppState, to: AppMode) {
    use_cases::mode::switch_mode(state, to);
}

/// Führt einen Frame-Schritt aus.
pub fn advance_frame(state: &mut AppState) {
    use_cases::frame::advance_frame(state);
}

/// Beendet die Anwendung kontrolliert.
pub fn request_exit(state: &mut AppState) {
    use_cases::persistence::request_exit(state);
}
