//! Use-Case-Funktionen für Koordinatenkreuz und Zoom.

use crate::app::AppState;

/// Blendet das Koordinatenkreuz ein oder aus.
pub fn set_coordinate_plane(state: &mut AppState, visible: bool) {
    state.view.show_coordinate_plane = visible;
}

/// Zoomt hinein: die Skalierung wird durch den Zoom-Faktor geteilt.
pub fn zoom_in(state: &mut AppState) {
    let target = state.view.scale / state.options.zoom_step;
    set_scale(state, target);
}

/// Zoomt heraus: die Skalierung wird mit dem Zoom-Faktor multipliziert.
pub fn zoom_out(state: &mut AppState) {
    let target = state.view.scale * state.options.zoom_step;
    set_scale(state, target);
}

/// Setzt die Anzeige-Skalierung (geklemmt) und projiziert alle Freihand-Polygone neu.
///
/// Regelmäßige Polygone bekommen die Skalierung erst beim Rendern übergeben.
pub fn set_scale(state: &mut AppState, scale: f64) {
    let clamped = state.options.clamp_scale(scale);
    if clamped == state.view.scale {
        return;
    }
    state.view.scale = clamped;
    for polygon in state.freehands.iter_mut() {
        polygon.rescale(clamped);
    }
    log::debug!("Anzeige-Skalierung: {}", clamped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input_target::InputTarget;
    use crate::app::mode::AppMode;
    use crate::app::use_cases::shape_input::commit_field;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_clamps_to_limits() {
        let mut state = AppState::new();
        for _ in 0..20 {
            zoom_in(&mut state);
        }
        assert_eq!(state.view.scale, state.options.scale_min);

        for _ in 0..40 {
            zoom_out(&mut state);
        }
        assert_eq!(state.view.scale, state.options.scale_max);
    }

    #[test]
    fn test_zoom_rescales_pending_freehand_and_keeps_logical_size() {
        let mut state = AppState::new();
        state.mode = AppMode::FreehandEntry;
        commit_field(&mut state, InputTarget::FreehandSideCount, "4");
        commit_field(&mut state, InputTarget::FreehandSide, "10");
        let start = state.freehands.current().start();

        zoom_out(&mut state);

        let polygon = state.freehands.current();
        assert_eq!(polygon.scale(), 2.0);
        assert_relative_eq!(polygon.vertices()[1].x - start.x, 50.0);
        assert_relative_eq!(polygon.perimeter(), 10.0);

        // Neue Kanten nutzen die neue Skalierung
        commit_field(&mut state, InputTarget::FreehandSide, "10");
        commit_field(&mut state, InputTarget::FreehandAngle, "90");
        assert_relative_eq!(state.freehands.current().perimeter(), 20.0);
    }
}
