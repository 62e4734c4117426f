//! Use-Case: Moduswechsel mit Austritts- und Eintrittsaktionen.

use crate::app::mode::AppMode;
use crate::app::AppState;
use crate::core::RegularPolygon;

/// Wechselt den Modus und führt die zugehörigen einmaligen Aktionen aus.
pub fn switch_mode(state: &mut AppState, to: AppMode) {
    let from = state.mode;
    if from == to {
        return;
    }

    exit_mode(state, from);
    state.mode = to;
    enter_mode(state, to);

    log::debug!("Modus gewechselt: {:?} -> {:?}", from, to);
}

fn exit_mode(state: &mut AppState, mode: AppMode) {
    match mode {
        AppMode::PointerTrace => {
            state.ui.pointer_pressed = false;
            state.pointer_trace.disarm();
        }
        AppMode::DeviceTrace => state.device_trace.disarm(),
        _ => {}
    }
}

fn enter_mode(state: &mut AppState, mode: AppMode) {
    match mode {
        AppMode::RegularEntry => ensure_fresh_pending_regular(state),
        AppMode::FreehandEntry => ensure_fresh_pending_freehand(state),
        AppMode::PointerTrace => state.pointer_trace.arm(),
        AppMode::DeviceTrace => state.device_trace.arm(),
        AppMode::Start | AppMode::Tutorial | AppMode::Main => {}
    }
}

/// Übernimmt einen fertigen ausstehenden Eintrag und legt einen frischen an.
pub fn ensure_fresh_pending_regular(state: &mut AppState) {
    if state.regulars.promote_if_complete(RegularPolygon::new) {
        log::info!(
            "Regelmäßiges Polygon fertig ({} gesamt)",
            state.regulars.completed_count()
        );
    }
}

/// Übernimmt ein geschlossenes ausstehendes Freihand-Polygon.
pub fn ensure_fresh_pending_freehand(state: &mut AppState) {
    let pending = state.new_pending_freehand();
    if state.freehands.promote_if_complete(|| pending) {
        log::info!(
            "Freihand-Polygon fertig ({} gesamt)",
            state.freehands.completed_count()
        );
    }
}
