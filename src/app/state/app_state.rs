use crate::app::input_target::InputTarget;
use crate::app::mode::AppMode;
use crate::app::CommandLog;
use crate::core::{
    ConstructionState, FreehandPolygon, RegularPolygon, ShapeCollection, TraceCapture, TraceSource,
};
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Bildschirm
    pub mode: AppMode,
    /// Regelmäßige Polygone (fertige + ein ausstehendes)
    pub regulars: ShapeCollection<RegularPolygon>,
    /// Freihand-Polygone (fertige + ein ausstehendes)
    pub freehands: ShapeCollection<FreehandPolygon>,
    /// Maus-Nachzeichnung
    pub pointer_trace: TraceCapture,
    /// Geräte-Nachzeichnung
    pub device_trace: TraceCapture,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let origin = options.origin();
        let view = ViewState::new();
        Self {
            mode: AppMode::default(),
            regulars: ShapeCollection::new(RegularPolygon::new()),
            freehands: ShapeCollection::new(FreehandPolygon::new(origin, view.scale)),
            pointer_trace: TraceCapture::new(TraceSource::Pointer, origin),
            device_trace: TraceCapture::new(TraceSource::Device, origin),
            view,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Frischer ausstehender Freihand-Eintrag bei aktueller Skalierung.
    pub fn new_pending_freehand(&self) -> FreehandPolygon {
        FreehandPolygon::new(self.options.origin(), self.view.scale)
    }

    /// Nachzeichnung des aktiven Trace-Modus.
    pub fn active_trace_mut(&mut self) -> Option<&mut TraceCapture> {
        match self.mode {
            AppMode::PointerTrace => Some(&mut self.pointer_trace),
            AppMode::DeviceTrace => Some(&mut self.device_trace),
            _ => None,
        }
    }

    /// Eingabefelder, die im aktuellen Zustand angeboten werden.
    ///
    /// Im Freihand-Modus ist die Seitenanzahl nur vor der ersten Kante
    /// änderbar, Seitenlänge und Winkel erst nach gesetzter Seitenanzahl.
    pub fn active_input_targets(&self) -> Vec<InputTarget> {
        match self.mode {
            AppMode::FreehandEntry => match self.freehands.current().state() {
                ConstructionState::AwaitingSideCount => vec![InputTarget::FreehandSideCount],
                ConstructionState::AwaitingFirstSide => vec![
                    InputTarget::FreehandSideCount,
                    InputTarget::FreehandSide,
                ],
                ConstructionState::AwaitingSideAndAngle => {
                    vec![InputTarget::FreehandSide, InputTarget::FreehandAngle]
                }
                ConstructionState::Closed => Vec::new(),
            },
            mode => mode.input_targets().to_vec(),
        }
    }

    /// Anzahl fertiger Formen beider Sammlungen (für UI-Anzeige)
    pub fn completed_shape_count(&self) -> usize {
        self.regulars.completed_count() + self.freehands.completed_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
