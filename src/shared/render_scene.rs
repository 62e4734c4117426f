//! Render-Szene als expliziter Übergabevertrag zwischen App und UI-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use glam::DVec2;

/// Beschriftete Tick-Marke einer Achse.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Device-Position der Marke
    pub position: DVec2,
    /// Logischer Wert als Text
    pub label: String,
}

/// Koordinatenkreuz mit Achsen, Gitterlinien und Beschriftungen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateGrid {
    /// x- und y-Achse durch den Ursprung
    pub axes: Vec<[DVec2; 2]>,
    /// Hilfslinien parallel zu den Achsen
    pub grid_lines: Vec<[DVec2; 2]>,
    /// Beschriftungen an der x-Achse
    pub x_ticks: Vec<AxisTick>,
    /// Beschriftungen an der y-Achse
    pub y_ticks: Vec<AxisTick>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Linienstärke
    pub line_width: f32,
    /// Segmente aller sichtbaren Formen und Striche
    pub segments: Vec<[DVec2; 2]>,
    /// Koordinatenkreuz (nur wenn eingeblendet)
    pub grid: Option<CoordinateGrid>,
    /// Statusnachricht mit Grauwert (0 = schwarz, 255 = unsichtbar)
    pub message: Option<(String, u8)>,
}
