//! Use-Case-Funktionen für Maus- und Geräte-Nachzeichnung.

use crate::app::AppState;
use glam::DVec2;

/// Maustaste gedrückt: der nächste Zeiger-Punkt beginnt einen neuen Strich.
pub fn begin_pointer_stroke(state: &mut AppState) {
    state.ui.pointer_pressed = true;
}

/// Maustaste losgelassen: Strich beenden.
pub fn end_pointer_stroke(state: &mut AppState) {
    state.ui.pointer_pressed = false;
    state.pointer_trace.cut();
}

/// Zeichnet bis zur Zeigerposition.
pub fn trace_pointer(state: &mut AppState, pos: DVec2) {
    state.pointer_trace.pointer_moved(pos);
}

/// Addiert ein bereits skaliertes Geräte-Inkrement auf die Geschwindigkeit.
pub fn apply_device_increment(state: &mut AppState, increment: DVec2) {
    state.device_trace.accelerate(increment);
}

/// Setzt die Geräte-Verfügbarkeit; beim Trennen wird der Strich beendet.
pub fn set_device_connected(state: &mut AppState, connected: bool) {
    if state.ui.device_connected == connected {
        return;
    }
    state.ui.device_connected = connected;
    if !connected {
        state.device_trace.cut();
    }
    log::info!(
        "Nachzeichen-Gerät {}",
        if connected { "verbunden" } else { "getrennt" }
    );
}

/// Leert die Zeichenfläche des aktiven Trace-Modus.
pub fn clear_trace(state: &mut AppState) {
    if let Some(trace) = state.active_trace_mut() {
        trace.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mode::AppMode;
    use crate::app::use_cases::mode::switch_mode;

    #[test]
    fn test_pointer_strokes_follow_button_state() {
        let mut state = AppState::new();
        state.mode = AppMode::Main;
        switch_mode(&mut state, AppMode::PointerTrace);

        begin_pointer_stroke(&mut state);
        trace_pointer(&mut state, DVec2::new(10.0, 10.0));
        trace_pointer(&mut state, DVec2::new(20.0, 10.0));
        end_pointer_stroke(&mut state);
        begin_pointer_stroke(&mut state);
        trace_pointer(&mut state, DVec2::new(50.0, 50.0));
        trace_pointer(&mut state, DVec2::new(60.0, 50.0));

        assert_eq!(state.pointer_trace.strokes().len(), 2);
    }

    #[test]
    fn test_clear_trace_only_affects_active_mode() {
        let mut state = AppState::new();
        state.mode = AppMode::Main;
        switch_mode(&mut state, AppMode::DeviceTrace);
        apply_device_increment(&mut state, DVec2::new(1.0, 0.0));
        assert_eq!(state.device_trace.strokes().len(), 1);

        clear_trace(&mut state);
        assert!(state.device_trace.strokes().is_empty());
        assert_eq!(state.device_trace.velocity(), DVec2::ZERO);
    }

    #[test]
    fn test_disconnect_restarts_from_origin() {
        let mut state = AppState::new();
        state.mode = AppMode::Main;
        switch_mode(&mut state, AppMode::DeviceTrace);
        set_device_connected(&mut state, true);
        apply_device_increment(&mut state, DVec2::new(0.0, 2.0));

        set_device_connected(&mut state, false);
        assert_eq!(state.device_trace.velocity(), DVec2::ZERO);
    }
}
