//! Writer für den zeilenbasierten Form-Speicher.

use crate::core::{FreehandPolygon, RegularPolygon};
use glam::DVec2;

/// Serialisiert alle fertigen Formen.
///
/// Ausstehende Einträge werden übersprungen. Freihand-Punkte werden auf
/// Skalierung 1.0 normiert, damit der Speicher unabhängig vom Zoom ist.
pub fn write_shape_store<'a>(
    regulars: impl IntoIterator<Item = &'a RegularPolygon>,
    freehands: impl IntoIterator<Item = &'a FreehandPolygon>,
) -> String {
    let regular_tokens: Vec<String> = regulars
        .into_iter()
        .filter_map(|polygon| Some((polygon.side_count()?, polygon.side_length()?)))
        .flat_map(|(n, side)| [n.to_string(), format_float(side)])
        .collect();

    let mut output = format!("[{}]\n", regular_tokens.join(", "));

    for polygon in freehands.into_iter().filter(|p| p.is_closed()) {
        output.push_str(&format_points(&polygon.points_at_scale(1.0)));
        output.push('\n');
    }

    // Leerzeile beendet den Freihand-Block
    output.push('\n');
    output
}

/// Punktliste als `[[x, y], [x, y], …]`.
fn format_points(points: &[DVec2]) -> String {
    let pairs: Vec<String> = points
        .iter()
        .map(|p| format!("[{}, {}]", format_float(p.x), format_float(p.y)))
        .collect();
    format!("[{}]", pairs.join(", "))
}

/// Gleitkommazahl immer mit Dezimalpunkt (`10.0`, nicht `10`).
fn format_float(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::DEFAULT_ORIGIN;

    #[test]
    fn test_empty_store_writes_empty_list_and_terminator() {
        let output = write_shape_store(&[], &[]);
        assert_eq!(output, "[]\n\n");
    }

    #[test]
    fn test_pending_entries_are_dropped() {
        let regulars = vec![
            RegularPolygon::with_params(5, 10.0).expect("gültig"),
            RegularPolygon::with_params(6, 20.5).expect("gültig"),
            RegularPolygon::new(),
        ];
        let freehands = vec![FreehandPolygon::new(DEFAULT_ORIGIN, 1.0)];

        let output = write_shape_store(&regulars, &freehands);
        assert_eq!(output, "[5, 10.0, 6, 20.5]\n\n");
    }

    #[test]
    fn test_closed_freehand_written_at_unit_scale() {
        let points = vec![
            DVec2::new(250.0, 275.0),
            DVec2::new(310.0, 275.0),
            DVec2::new(310.0, 315.0),
            DVec2::new(250.0, 275.0),
        ];
        let mut polygon = FreehandPolygon::from_loaded(points).expect("gültige Form");
        polygon.rescale(2.0);

        let output = write_shape_store(&[], &[polygon]);
        assert_eq!(
            output,
            "[]\n[[250.0, 275.0], [310.0, 275.0], [310.0, 315.0], [250.0, 275.0]]\n\n"
        );
    }
}
