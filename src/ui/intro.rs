//! Start- und Anleitungs-Bildschirm.

use crate::app::AppMode;

const TITLE: &str = "GEOMETRY DISPLAYER";

const TUTORIAL_LINES: &[&str] = &[
    "This is a tool to help you display geometric shapes!",
    "You can choose to draw regular shapes, customized/irregular shapes",
    "or even draw with the mouse or a tilt device.",
    "The area and perimeter of the shape can be calculated by the program.",
    "You can also turn on a Cartesian coordinate plane",
    "and zoom in and out with the + and - buttons.",
    "If you mess up the drawing, just click the CLEAR button.",
    "",
    "Notes while drawing:",
    "Angles for customized shapes are given in degrees,",
    "relative to the x-axis in the counterclockwise direction.",
    "For precise area values of customized shapes,",
    "enter the points in clockwise direction.",
];

/// Rendert den Inhalt für Modi ohne Zeichenfläche.
pub fn render_intro(ui: &mut egui::Ui, mode: AppMode) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        match mode {
            AppMode::Tutorial => {
                ui.heading("TUTORIAL");
                ui.add_space(12.0);
                for line in TUTORIAL_LINES {
                    ui.label(*line);
                }
            }
            _ => {
                ui.label(egui::RichText::new(TITLE).size(40.0).strong());
            }
        }
    });
}
