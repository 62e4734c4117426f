use crate::app::input_target::InputTarget;
use std::collections::HashMap;

/// Grauwert einer frisch gesetzten Statusnachricht.
pub const MESSAGE_START_GRAY: u8 = 100;
/// Grauwert, ab dem die Nachricht unsichtbar ist (weißer Hintergrund).
pub const MESSAGE_HIDDEN_GRAY: u8 = 255;

/// Kurzlebige Statusnachricht mit Ausblend-Effekt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusMessage {
    text: String,
    gray: u8,
    frame_count: u32,
    active: bool,
}

impl StatusMessage {
    /// Setzt einen neuen Text und startet das Ausblenden von vorn.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.gray = MESSAGE_START_GRAY;
        self.frame_count = 0;
        self.active = true;
    }

    /// Frame-Schritt: alle `interval` Frames wird die Schrift eine Stufe heller.
    pub fn tick(&mut self, interval: u32) {
        if !self.active {
            return;
        }
        self.frame_count += 1;
        if self.frame_count % interval.max(1) == 0 {
            self.gray = self.gray.saturating_add(1);
        }
        if self.gray >= MESSAGE_HIDDEN_GRAY {
            self.active = false;
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text und Grauwert, solange die Nachricht noch sichtbar ist.
    pub fn visible(&self) -> Option<(&str, u8)> {
        (self.active && self.gray < MESSAGE_HIDDEN_GRAY).then_some((self.text.as_str(), self.gray))
    }
}

/// Text-Puffer der Eingabefelder
#[derive(Debug, Clone, Default)]
pub struct InputFields {
    texts: HashMap<InputTarget, String>,
}

impl InputFields {
    /// Veränderbarer Puffer für das Eingabe-Widget.
    pub fn text_mut(&mut self, target: InputTarget) -> &mut String {
        self.texts.entry(target).or_default()
    }

    pub fn text(&self, target: InputTarget) -> &str {
        self.texts.get(&target).map_or("", String::as_str)
    }

    pub fn clear(&mut self, target: InputTarget) {
        if let Some(text) = self.texts.get_mut(&target) {
            text.clear();
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Text der Eingabefelder
    pub fields: InputFields,
    /// Statusnachricht am unteren Rand
    pub message: StatusMessage,
    /// Ob die primäre Maustaste auf der Zeichenfläche gedrückt ist
    pub pointer_pressed: bool,
    /// Ob ein Nachzeichen-Gerät verbunden ist
    pub device_connected: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
