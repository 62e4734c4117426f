//! UI-Komponenten: Seitenleiste, Zeichenfläche, Statusleiste, Intro-Bildschirme.

mod canvas;
mod intro;
mod keyboard;
/// UI-Layer mit egui
///
/// Alle Komponenten lesen den AppState und liefern `AppIntent`s zurück,
/// mutiert wird ausschließlich über den Controller (Ausnahme: Feld-Texte).
pub mod panels;
pub mod status;

pub use canvas::CanvasInput;
pub use intro::render_intro;
pub use keyboard::device_sample;
pub use panels::render_side_panel;
pub use status::render_status_bar;
