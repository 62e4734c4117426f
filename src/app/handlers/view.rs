//! Handler für Koordinatenkreuz und Zoom.

use crate::app::use_cases;
use crate::app::AppState;

/// Blendet das Koordinatenkreuz ein.
pub fn show_coordinate_plane(state: &mut AppState) {
    use_cases::view::set_coordinate_plane(state, true);
}

/// Blendet das Koordinatenkreuz aus.
pub fn hide_coordinate_plane(state: &mut AppState) {
    use_cases::view::set_coordinate_plane(state, false);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::view::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::view::zoom_out(state);
}
