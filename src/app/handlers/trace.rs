//! Handler für Maus- und Geräte-Nachzeichnung.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Beginnt einen Maus-Strich.
pub fn begin_pointer_stroke(state: &mut AppState) {
    use_cases::trace::begin_pointer_stroke(state);
}

/// Beendet den Maus-Strich.
pub fn end_pointer_stroke(state: &mut AppState) {
    use_cases::trace::end_pointer_stroke(state);
}

/// Zeichnet bis zur Zeigerposition.
pub fn trace_pointer(state: &mut AppState, pos: DVec2) {
    use_cases::trace::trace_pointer(state, pos);
}

/// Wendet ein Geräte-Inkrement an.
pub fn apply_device_increment(state: &mut AppState, increment: DVec2) {
    use_cases::trace::apply_device_increment(state, increment);
}

/// Setzt die Geräte-Verfügbarkeit.
pub fn set_device_connected(state: &mut AppState, connected: bool) {
    use_cases::trace::set_device_connected(state, connected);
}

/// Leert die aktive Nachzeichnung.
pub fn clear(state: &mut AppState) {
    use_cases::trace::clear_trace(state);
}
