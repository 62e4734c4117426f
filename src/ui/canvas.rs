//! Zeichenfläche: malt die RenderScene und übersetzt Zeiger-Eingaben in AppIntents.

use crate::app::AppIntent;
use crate::shared::{AxisTick, RenderScene};
use glam::DVec2;

const GRID_COLOR: egui::Color32 = egui::Color32::from_gray(215);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_gray(60);
const SHAPE_COLOR: egui::Color32 = egui::Color32::BLACK;
const LABEL_FONT_SIZE: f32 = 11.0;
const MESSAGE_FONT_SIZE: f32 = 18.0;
/// Abstand der Statusnachricht zum unteren Rand der Zeichenfläche.
const MESSAGE_MARGIN: f32 = 24.0;

/// Verwaltet den Input-Zustand der Zeichenfläche
#[derive(Default)]
pub struct CanvasInput {
    /// Primärtaste wurde auf der Zeichenfläche gedrückt und noch nicht losgelassen
    stroke_active: bool,
}

impl CanvasInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet die Szene in fester Größe und sammelt Zeiger-Events.
    ///
    /// Positionen werden relativ zur linken oberen Ecke der Zeichenfläche gemeldet,
    /// im selben Koordinatensystem wie die Szene.
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &RenderScene) -> Vec<AppIntent> {
        let size = egui::vec2(scene.canvas_size[0], scene.canvas_size[1]);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        paint_scene(&ui.painter_at(rect), rect, scene);

        self.collect_pointer_intents(ui, &response, rect)
    }

    fn collect_pointer_intents(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (pressed, released, moving, latest) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.latest_pos(),
            )
        });

        if pressed && response.hovered() {
            self.stroke_active = true;
            events.push(AppIntent::PointerDown);
        }

        if let Some(pos) = latest.filter(|p| (moving || pressed) && rect.contains(*p)) {
            let local = pos - rect.min;
            events.push(AppIntent::PointerMoved {
                pos: DVec2::new(f64::from(local.x), f64::from(local.y)),
            });
        }

        if released && self.stroke_active {
            self.stroke_active = false;
            events.push(AppIntent::PointerUp);
        }

        events
    }
}

fn to_screen(rect: egui::Rect, p: DVec2) -> egui::Pos2 {
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

    if let Some(grid) = &scene.grid {
        let grid_stroke = egui::Stroke::new(1.0, GRID_COLOR);
        for [a, b] in &grid.grid_lines {
            painter.line_segment([to_screen(rect, *a), to_screen(rect, *b)], grid_stroke);
        }
        let axis_stroke = egui::Stroke::new(1.5, AXIS_COLOR);
        for [a, b] in &grid.axes {
            painter.line_segment([to_screen(rect, *a), to_screen(rect, *b)], axis_stroke);
        }
        paint_ticks(painter, rect, &grid.x_ticks, egui::Align2::CENTER_TOP);
        paint_ticks(painter, rect, &grid.y_ticks, egui::Align2::RIGHT_CENTER);
    }

    let shape_stroke = egui::Stroke::new(scene.line_width, SHAPE_COLOR);
    for [a, b] in &scene.segments {
        painter.line_segment([to_screen(rect, *a), to_screen(rect, *b)], shape_stroke);
    }

    if let Some((text, gray)) = &scene.message {
        painter.text(
            egui::pos2(rect.center().x, rect.max.y - MESSAGE_MARGIN),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(MESSAGE_FONT_SIZE),
            egui::Color32::from_gray(*gray),
        );
    }
}

fn paint_ticks(
    painter: &egui::Painter,
    rect: egui::Rect,
    ticks: &[AxisTick],
    anchor: egui::Align2,
) {
    // kleiner Versatz, damit die Beschriftung nicht auf der Achse liegt
    let offset = if anchor == egui::Align2::CENTER_TOP {
        egui::vec2(0.0, 3.0)
    } else {
        egui::vec2(-3.0, 0.0)
    };
    for tick in ticks {
        painter.text(
            to_screen(rect, tick.position) + offset,
            anchor,
            &tick.label,
            egui::FontId::monospace(LABEL_FONT_SIZE),
            AXIS_COLOR,
        );
    }
}
