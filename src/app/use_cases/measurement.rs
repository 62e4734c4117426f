//! Use-Case: Fläche und Umfang der zuletzt fertigen Form.

use crate::app::mode::AppMode;
use crate::app::AppState;
use crate::core::ShapeError;

/// Art der Messung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    Area,
    Perimeter,
}

impl MeasureKind {
    fn label(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Perimeter => "Perimeter",
        }
    }
}

/// Misst die zuletzt fertiggestellte Form der Sammlung des aktiven Modus.
///
/// Ausgeblendete Formen (nach CLEAR) gelten als nicht vorhanden.
pub fn measure_last_completed(state: &AppState, kind: MeasureKind) -> Result<f64, ShapeError> {
    if !state.view.shapes_visible {
        return Err(ShapeError::NoShapeAvailable);
    }
    match state.mode {
        AppMode::RegularEntry => {
            let polygon = state
                .regulars
                .last_completed()
                .ok_or(ShapeError::NoShapeAvailable)?;
            match kind {
                MeasureKind::Area => polygon.area(),
                MeasureKind::Perimeter => polygon.perimeter(),
            }
        }
        AppMode::FreehandEntry => {
            let polygon = state
                .freehands
                .last_completed()
                .ok_or(ShapeError::NoShapeAvailable)?;
            Ok(match kind {
                MeasureKind::Area => polygon.area(),
                MeasureKind::Perimeter => polygon.perimeter(),
            })
        }
        _ => Err(ShapeError::NoShapeAvailable),
    }
}

/// Formatierte Messung für die Statusnachricht.
pub fn format_measurement(kind: MeasureKind, value: f64) -> String {
    format!("{}: {:.2}", kind.label(), value)
}

/// Misst und schreibt das Ergebnis (oder den Fehler) in die Statusnachricht.
pub fn measure(state: &mut AppState, kind: MeasureKind) {
    let text = match measure_last_completed(state, kind) {
        Ok(value) => format_measurement(kind, value),
        Err(e) => e.to_string(),
    };
    state.ui.message.set(text);
}
