//! Handler für Formeingabe, Messung und Löschen.

use crate::app::input_target::InputTarget;
use crate::app::use_cases;
use crate::app::use_cases::measurement::MeasureKind;
use crate::app::AppState;

/// Wendet eine Feldeingabe auf die ausstehende Form an.
pub fn commit_field(state: &mut AppState, target: InputTarget, text: &str) {
    use_cases::shape_input::commit_field(state, target, text);
}

/// Löscht alle Formen.
pub fn clear(state: &mut AppState) {
    use_cases::shape_input::clear_shapes(state);
}

/// Misst die zuletzt fertige Form.
pub fn measure(state: &mut AppState, kind: MeasureKind) {
    use_cases::measurement::measure(state, kind);
}
