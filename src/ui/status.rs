//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Mode: {:?}", state.mode));
            ui.separator();

            ui.label(format!(
                "Regular: {} | Customized: {}",
                state.regulars.completed_count(),
                state.freehands.completed_count()
            ));
            ui.separator();

            ui.label(format!("Scale: {}", state.view.scale));

            if !state.view.shapes_visible {
                ui.separator();
                ui.label("Shapes hidden");
            }

            // FPS und letzter Command (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
                if let Some(command) = state.command_log.last() {
                    ui.separator();
                    ui.weak(format!("Last: {:?}", command));
                }
            });
        });
    });
}
