//! Builder für Render-Szenen aus dem AppState.

use crate::app::mode::AppMode;
use crate::app::AppState;
use crate::core::geometry::{round2, UNIT_PER_SIDE};
use crate::shared::{AxisTick, CoordinateGrid, EditorOptions, RenderScene, SegmentBuffer};
use glam::DVec2;

/// Mindestabstand zwischen zwei Gitterlinien in Pixeln.
const MIN_GRID_SPACING: f64 = 25.0;
/// Gitterabstand oberhalb von Skalierung 2.
const COARSE_GRID_SPACING: f64 = 100.0;
/// Abstand zur x-Achse, in dem keine y-Beschriftung gesetzt wird.
const AXIS_LABEL_GAP: f64 = 5.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let mut buffer = SegmentBuffer::new(state.options.origin());
    let scale = state.view.scale;
    let shapes_visible = state.view.shapes_visible;

    match state.mode {
        AppMode::Main if shapes_visible => {
            state
                .regulars
                .iter()
                .for_each(|p| p.render(&mut buffer, scale));
            state.freehands.iter().for_each(|p| p.render(&mut buffer));
        }
        AppMode::RegularEntry if shapes_visible => state
            .regulars
            .iter()
            .for_each(|p| p.render(&mut buffer, scale)),
        AppMode::FreehandEntry if shapes_visible => {
            state.freehands.iter().for_each(|p| p.render(&mut buffer))
        }
        AppMode::PointerTrace => state.pointer_trace.render(&mut buffer),
        AppMode::DeviceTrace => state.device_trace.render(&mut buffer),
        _ => {}
    }

    let grid = (state.mode.has_canvas() && state.view.show_coordinate_plane)
        .then(|| build_grid(&state.options, scale));

    let message = if state.mode.shows_message() {
        state
            .ui
            .message
            .visible()
            .map(|(text, gray)| (text.to_string(), gray))
    } else {
        None
    };

    RenderScene {
        canvas_size: state.options.canvas_size,
        line_width: state.options.line_width,
        segments: buffer.segments,
        grid,
        message,
    }
}

/// Berechnet Achsen, Gitterlinien und Beschriftungen für die Skalierung.
///
/// Oberhalb von Skalierung 2 bleibt der Abstand fest bei 100 Pixeln,
/// darunter wächst er mit der Skalierung (mindestens 25 Pixel).
pub fn build_grid(options: &EditorOptions, scale: f64) -> CoordinateGrid {
    let origin = options.origin();
    let width = f64::from(options.canvas_size[0]);
    let height = f64::from(options.canvas_size[1]);
    let spacing = if scale > 2.0 {
        COARSE_GRID_SPACING
    } else {
        (50.0 * scale).max(MIN_GRID_SPACING)
    };

    let mut grid = CoordinateGrid {
        axes: vec![
            [DVec2::new(0.0, origin.y), DVec2::new(width, origin.y)],
            [DVec2::new(origin.x, height), DVec2::new(origin.x, 0.0)],
        ],
        ..CoordinateGrid::default()
    };

    for x in grid_positions(origin.x, width, spacing) {
        grid.grid_lines
            .push([DVec2::new(x, 0.0), DVec2::new(x, height)]);
        grid.x_ticks.push(AxisTick {
            position: DVec2::new(x, origin.y),
            label: format_label((x - origin.x) / UNIT_PER_SIDE * scale, scale),
        });
    }
    for y in grid_positions(origin.y, height, spacing) {
        grid.grid_lines
            .push([DVec2::new(0.0, y), DVec2::new(width, y)]);
        if (y - origin.y).abs() > AXIS_LABEL_GAP {
            grid.y_ticks.push(AxisTick {
                position: DVec2::new(origin.x, y),
                label: format_label((origin.y - y) / UNIT_PER_SIDE * scale, scale),
            });
        }
    }
    grid
}

/// Gitterpositionen im Abstand `spacing`, ausgerichtet am Ursprung, innerhalb `[0, extent]`.
fn grid_positions(origin: f64, extent: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let first = -(origin / spacing).floor();
    let last = ((extent - origin) / spacing).floor();
    let steps = (last - first).max(-1.0) as i64;
    (0..=steps).map(move |i| origin + (first + i as f64) * spacing)
}

/// Ganze Zahlen ab Skalierung 1, sonst auf zwei Stellen gerundet.
fn format_label(value: f64, scale: f64) -> String {
    if scale >= 1.0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", round2(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegularPolygon;
    use crate::core::ShapeCollection;

    #[test]
    fn build_draws_nothing_on_start_screen() {
        let mut state = AppState::new();
        state.view.shapes_visible = true;
        state.regulars = ShapeCollection::with_completed(
            vec![RegularPolygon::with_params(4, 5.0).expect("gültig")],
            RegularPolygon::new(),
        );

        let scene = build(&state);
        assert!(scene.segments.is_empty());
        assert!(scene.grid.is_none());
    }

    #[test]
    fn build_respects_shape_visibility() {
        let mut state = AppState::new();
        state.mode = AppMode::RegularEntry;
        state.regulars = ShapeCollection::with_completed(
            vec![RegularPolygon::with_params(4, 5.0).expect("gültig")],
            RegularPolygon::new(),
        );
        assert!(build(&state).segments.is_empty());

        state.view.shapes_visible = true;
        assert_eq!(build(&state).segments.len(), 4);
    }

    #[test]
    fn build_hides_message_while_pointer_tracing() {
        let mut state = AppState::new();
        state.ui.message.set("Hinweis");
        state.mode = AppMode::Main;
        assert!(build(&state).message.is_some());

        state.mode = AppMode::PointerTrace;
        assert!(build(&state).message.is_none());
    }

    #[test]
    fn grid_labels_follow_scale() {
        let options = EditorOptions::default();

        let grid = build_grid(&options, 1.0);
        assert!(grid
            .x_ticks
            .iter()
            .any(|t| t.position.x == 300.0 && t.label == "5"));
        assert!(grid
            .y_ticks
            .iter()
            .any(|t| t.position.y == 225.0 && t.label == "5"));
        assert!(grid.y_ticks.iter().all(|t| t.position.y != 275.0));

        let fine = build_grid(&options, 0.25);
        assert!(fine
            .x_ticks
            .iter()
            .any(|t| t.position.x == 275.0 && t.label == "0.63"));

        let coarse = build_grid(&options, 8.0);
        assert!(coarse
            .x_ticks
            .iter()
            .any(|t| t.position.x == 350.0 && t.label == "80"));
    }

    #[test]
    fn grid_positions_stay_inside_canvas() {
        let positions: Vec<f64> = grid_positions(250.0, 700.0, 100.0).collect();
        assert_eq!(positions, vec![50.0, 150.0, 250.0, 350.0, 450.0, 550.0, 650.0]);
    }
}
