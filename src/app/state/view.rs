/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Anzeige-Skalierung (logische Einheiten pro 10 Pixel)
    pub scale: f64,
    /// Ob das Koordinatenkreuz eingeblendet ist
    pub show_coordinate_plane: bool,
    /// Ob Formen gezeichnet werden (nach CLEAR bis zur nächsten Längeneingabe aus)
    pub shapes_visible: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            show_coordinate_plane: false,
            shapes_visible: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
