//! Use-Case: Feldeingaben auf die ausstehenden Formen anwenden.

use crate::app::input_target::{FieldValue, InputTarget};
use crate::app::AppState;
use crate::core::{RegularPolygon, ShapeError};

/// Validiert den Feldtext und wendet ihn auf die ausstehende Form an.
///
/// Eingabefehler werden nicht weitergereicht: sie landen als Statusnachricht
/// in der Oberfläche. Das Feld wird in jedem Fall geleert.
pub fn commit_field(state: &mut AppState, target: InputTarget, text: &str) {
    let result = target
        .parse(text)
        .and_then(|value| apply_value(state, target, value));

    if let Err(e) = result {
        if e.is_input_error() {
            log::debug!("Eingabe '{}' für {:?} abgelehnt: {}", text, target, e);
        } else {
            log::warn!("Unerwarteter Fehler bei Eingabe für {:?}: {}", target, e);
        }
        state.ui.message.set(e.to_string());
    }
    state.ui.fields.clear(target);
}

/// Ersetzt beide Sammlungen durch je einen frischen Eintrag und blendet Formen aus.
pub fn clear_shapes(state: &mut AppState) {
    state.regulars.clear(RegularPolygon::new());
    let pending = state.new_pending_freehand();
    state.freehands.clear(pending);
    state.view.shapes_visible = false;
    log::info!("Alle Formen gelöscht");
}

fn apply_value(
    state: &mut AppState,
    target: InputTarget,
    value: FieldValue,
) -> Result<(), ShapeError> {
    match (target, value) {
        (InputTarget::RegularSideCount, FieldValue::SideCount(n)) => {
            state.regulars.current_mut().set_side_count(n)?;
            super::mode::ensure_fresh_pending_regular(state);
        }
        (InputTarget::RegularSideLength, FieldValue::Length(length)) => {
            state.regulars.current_mut().set_side_length(length)?;
            state.view.shapes_visible = true;
            super::mode::ensure_fresh_pending_regular(state);
        }
        (InputTarget::FreehandSideCount, FieldValue::SideCount(n)) => {
            state.freehands.current_mut().set_side_count(n)?;
        }
        (InputTarget::FreehandSide, FieldValue::Length(length)) => {
            state.freehands.current_mut().submit_side(length)?;
            state.view.shapes_visible = true;
        }
        (InputTarget::FreehandAngle, FieldValue::Angle(angle)) => {
            state.freehands.current_mut().submit_angle(angle)?;
            state.view.shapes_visible = true;
        }
        (target, value) => {
            log::warn!("Unpassender Feldwert {:?} für {:?}", value, target);
        }
    }
    Ok(())
}
