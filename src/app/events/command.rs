use super::super::input_target::InputTarget;
use super::super::mode::AppMode;
use crate::app::use_cases::measurement::MeasureKind;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Form-Speicher laden und Sammlungen ersetzen
    LoadStore,
    /// Fertige Formen in den Form-Speicher schreiben
    SaveStore,
    /// Modus wechseln (inkl. Austritts- und Eintrittsaktionen)
    SwitchMode { to: AppMode },
    /// Feldtext validieren und auf die ausstehende Form anwenden
    CommitField { target: InputTarget, text: String },
    /// Beide Formsammlungen leeren
    ClearShapes,
    /// Strich-Aufzeichnung des aktiven Trace-Modus leeren
    ClearTrace,
    /// Koordinatenkreuz einblenden
    ShowCoordinatePlane,
    /// Koordinatenkreuz ausblenden
    HideCoordinatePlane,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Fläche oder Umfang der zuletzt fertigen Form messen
    Measure { kind: MeasureKind },
    /// Maus-Strich beginnen
    BeginPointerStroke,
    /// Maus-Strich beenden
    EndPointerStroke,
    /// Maus-Position nachzeichnen
    TracePointer { pos: glam::DVec2 },
    /// Geschwindigkeits-Inkrement des Geräts anwenden
    ApplyDeviceIncrement { increment: glam::DVec2 },
    /// Geräte-Verfügbarkeit setzen
    SetDeviceConnected { connected: bool },
    /// Frame-Schritt: Formen schließen/übernehmen, Nachricht ausblenden
    AdvanceFrame,
    /// Anwendung kontrolliert beenden
    RequestExit,
}
