//! Use-Case-Funktionen für den Form-Speicher.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::{RegularPolygon, ShapeCollection};
use crate::store;

/// Lädt den Form-Speicher und ersetzt beide Sammlungen.
///
/// Geladene Freihand-Polygone liegen bei Skalierung 1.0 vor und werden auf
/// die aktuelle Anzeige-Skalierung projiziert.
pub fn load_store(state: &mut AppState) -> anyhow::Result<()> {
    let loaded = store::load_from_file(&state.options.store_file)?;
    let has_shapes = !loaded.regulars.is_empty() || !loaded.freehands.is_empty();

    let mut freehands = loaded.freehands;
    for polygon in &mut freehands {
        polygon.rescale(state.view.scale);
    }

    state.regulars = ShapeCollection::with_completed(loaded.regulars, RegularPolygon::new());
    let pending = state.new_pending_freehand();
    state.freehands = ShapeCollection::with_completed(freehands, pending);
    state.view.shapes_visible = has_shapes;
    Ok(())
}

/// Schreibt alle fertigen Formen in den Form-Speicher.
pub fn save_store(state: &AppState) -> anyhow::Result<()> {
    store::save_to_file(
        &state.options.store_file,
        state.regulars.completed(),
        state.freehands.completed(),
    )
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorOptions;

    #[test]
    fn test_missing_store_yields_empty_collections() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let options = EditorOptions {
            store_file: dir.path().join("missing.txt"),
            ..EditorOptions::default()
        };
        let mut state = AppState::with_options(options);

        load_store(&mut state).expect("fehlende Datei ist kein Fehler");

        assert_eq!(state.completed_shape_count(), 0);
        assert!(!state.view.shapes_visible);
    }

    #[test]
    fn test_save_then_load_restores_completed_shapes() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let options = EditorOptions {
            store_file: dir.path().join("shapes.txt"),
            ..EditorOptions::default()
        };
        let mut state = AppState::with_options(options.clone());
        state.regulars = ShapeCollection::with_completed(
            vec![RegularPolygon::with_params(6, 2.5).expect("gültig")],
            RegularPolygon::new(),
        );
        save_store(&state).expect("Speichern");

        let mut reloaded = AppState::with_options(options);
        load_store(&mut reloaded).expect("Laden");

        assert_eq!(reloaded.regulars.completed_count(), 1);
        assert!(reloaded.view.shapes_visible);
        assert_eq!(
            reloaded.regulars.last_completed().and_then(|p| p.side_length()),
            Some(2.5)
        );
    }
}
