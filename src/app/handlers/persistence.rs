//! Handler für den Form-Speicher.

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt den Form-Speicher und propagiert I/O-Fehler an den Aufrufer.
pub fn load(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::persistence::load_store(state)
}

/// Speichert alle fertigen Formen.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::persistence::save_store(state)
}
