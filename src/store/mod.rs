//! Persistenz der fertigen Formen als zeilenbasierte Textdatei.
//!
//! Das Format speichert regelmäßige Polygone als Parameterpaare und
//! Freihand-Polygone als Punktlisten bei Skalierung 1.0.

pub mod parser;
pub mod writer;

pub use parser::{parse_shape_store, ParsedStore, ShapeStore};
pub use writer::write_shape_store;

use crate::core::{FreehandPolygon, RegularPolygon};
use anyhow::Context;
use std::path::Path;

/// Lädt den Form-Speicher. Fehlende Datei = keine Vordaten.
///
/// Defekte Abschnitte werden verworfen (siehe [`ParsedStore::recover`]),
/// nur echte I/O-Fehler werden weitergereicht.
pub fn load_from_file(path: &Path) -> anyhow::Result<ShapeStore> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("Kein Form-Speicher gefunden: {}", path.display());
            return Ok(ShapeStore::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Form-Speicher nicht lesbar: {}", path.display()))
        }
    };

    let store = parse_shape_store(&content).recover();
    log::info!(
        "Form-Speicher geladen: {} regelmäßige, {} Freihand-Formen",
        store.regulars.len(),
        store.freehands.len()
    );
    Ok(store)
}

/// Schreibt alle fertigen Formen in den Form-Speicher.
pub fn save_to_file<'a>(
    path: &Path,
    regulars: impl IntoIterator<Item = &'a RegularPolygon>,
    freehands: impl IntoIterator<Item = &'a FreehandPolygon>,
) -> anyhow::Result<()> {
    let content = write_shape_store(regulars, freehands);
    std::fs::write(path, content)
        .with_context(|| format!("Form-Speicher nicht schreibbar: {}", path.display()))?;
    log::info!("Form-Speicher gespeichert nach: {}", path.display());
    Ok(())
}
