use super::super::input_target::InputTarget;
use super::super::mode::UiButton;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Form-Speicher beim Start laden
    StoreLoadRequested,
    /// Feldeingabe mit Enter bestätigt
    NumericFieldCommitted { target: InputTarget, text: String },
    /// Button gedrückt
    ButtonActivated { button: UiButton },
    /// Zeiger bewegt (Device-Koordinaten der Zeichenfläche)
    PointerMoved { pos: glam::DVec2 },
    /// Primäre Maustaste auf der Zeichenfläche gedrückt
    PointerDown,
    /// Primäre Maustaste losgelassen
    PointerUp,
    /// Rohes Neigungs-Sample des Nachzeichen-Geräts
    DeviceSample { dx: f64, dy: f64 },
    /// Nachzeichen-Gerät verbunden/getrennt
    DeviceConnectionChanged { connected: bool },
    /// Frame-Takt
    Tick,
    /// Anwendung beenden
    ExitRequested,
}
