//! Seitenleiste mit Modus-Buttons, Ansichts-Steuerung und Eingabefeldern.

use crate::app::{AppIntent, AppMode, AppState, InputTarget, UiButton};

const PANEL_WIDTH: f32 = 220.0;
const FIELD_WIDTH: f32 = 90.0;

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
///
/// Bekommt `&mut AppState`, weil die Eingabefelder ihren Text direkt im
/// UI-State puffern. Übernommen wird ein Wert erst per Enter als Intent.
pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("control_panel")
        .exact_width(PANEL_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Geometry Displayer");
            ui.separator();

            render_mode_buttons(ui, state.mode, &mut events);

            if state.mode.has_canvas() {
                ui.separator();
                render_view_controls(ui, state, &mut events);
            }

            match state.mode {
                AppMode::RegularEntry | AppMode::FreehandEntry => {
                    ui.separator();
                    render_input_fields(ui, state, &mut events);
                }
                AppMode::DeviceTrace => {
                    ui.separator();
                    render_device_controls(ui, state, &mut events);
                }
                AppMode::PointerTrace => {
                    ui.separator();
                    ui.label("Hold the left mouse button on the canvas to draw.");
                }
                _ => {}
            }
        });

    events
}

fn render_mode_buttons(ui: &mut egui::Ui, mode: AppMode, events: &mut Vec<AppIntent>) {
    for &button in mode.buttons() {
        if ui.button(button.label()).clicked() {
            events.push(AppIntent::ButtonActivated { button });
        }
    }
}

/// Koordinatenkreuz-Umschalter und Zoom (nur bei sichtbarem Koordinatenkreuz).
fn render_view_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let toggle = if state.view.show_coordinate_plane {
        UiButton::HideCoordinatePlane
    } else {
        UiButton::ShowCoordinatePlane
    };
    if ui.button(toggle.label()).clicked() {
        events.push(AppIntent::ButtonActivated { button: toggle });
    }

    if state.mode.supports_zoom() && state.view.show_coordinate_plane {
        ui.horizontal(|ui| {
            for button in [UiButton::ZoomIn, UiButton::ZoomOut] {
                if ui.button(button.label()).clicked() {
                    events.push(AppIntent::ButtonActivated { button });
                }
            }
            ui.label(format!("Scale: {}", state.view.scale));
        });
    }
}

fn render_input_fields(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    if state.mode == AppMode::FreehandEntry {
        ui.label(state.freehands.current().status_text());
    }

    for target in state.active_input_targets() {
        ui.horizontal(|ui| {
            ui.label(target.label());
            let response = ui.add(
                egui::TextEdit::singleline(state.ui.fields.text_mut(target))
                    .desired_width(FIELD_WIDTH),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(commit_intent(state, target));
            }
        });
    }

    ui.small("Press Enter to apply a value.");
}

fn commit_intent(state: &AppState, target: InputTarget) -> AppIntent {
    AppIntent::NumericFieldCommitted {
        target,
        text: state.ui.fields.text(target).to_string(),
    }
}

/// Verbindungsschalter für das (per Pfeiltasten simulierte) Neigungs-Gerät.
fn render_device_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut connected = state.ui.device_connected;
    if ui.checkbox(&mut connected, "Tilt device connected").changed() {
        events.push(AppIntent::DeviceConnectionChanged { connected });
    }
    ui.label("Arrow keys tilt the device.");
}
