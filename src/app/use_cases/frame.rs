//! Use-Case: ein Frame-Schritt der Update-Schleife.

use crate::app::mode::AppMode;
use crate::app::AppState;

/// Meldung im Geräte-Modus ohne verbundenes Gerät.
pub const NO_DEVICE_MESSAGE: &str = "No tracing device detected.";

/// Schließt fertige Freihand-Polygone, übernimmt fertige Einträge und
/// blendet die Statusnachricht weiter aus.
pub fn advance_frame(state: &mut AppState) {
    state.ui.message.tick(state.options.message_fade_interval);

    if state.freehands.current_mut().tick() {
        log::debug!("Freihand-Polygon automatisch geschlossen");
    }
    super::mode::ensure_fresh_pending_freehand(state);
    super::mode::ensure_fresh_pending_regular(state);

    if state.mode == AppMode::DeviceTrace && !state.ui.device_connected {
        state.ui.message.set(NO_DEVICE_MESSAGE);
    }
}
