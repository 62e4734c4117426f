//! Mapping von UI-Intents auf mutierende App-Commands.

use super::mode::{AppMode, UiButton};
use super::use_cases::measurement::MeasureKind;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StoreLoadRequested => vec![AppCommand::LoadStore],
        // Exit zuerst: ein fehlgeschlagenes Speichern darf das Beenden nicht blockieren
        AppIntent::ExitRequested => vec![AppCommand::RequestExit, AppCommand::SaveStore],
        AppIntent::Tick => vec![AppCommand::AdvanceFrame],
        AppIntent::ButtonActivated { button } => map_button(state, button),
        AppIntent::NumericFieldCommitted { target, text } => {
            if state.active_input_targets().contains(&target) {
                vec![AppCommand::CommitField { target, text }]
            } else {
                log::debug!("Eingabe für {:?} in Modus {:?} ignoriert", target, state.mode);
                vec![]
            }
        }
        AppIntent::PointerDown if state.mode == AppMode::PointerTrace => {
            vec![AppCommand::BeginPointerStroke]
        }
        AppIntent::PointerUp if state.mode == AppMode::PointerTrace => {
            vec![AppCommand::EndPointerStroke]
        }
        AppIntent::PointerMoved { pos }
            if state.mode == AppMode::PointerTrace && state.ui.pointer_pressed =>
        {
            vec![AppCommand::TracePointer { pos }]
        }
        AppIntent::PointerDown | AppIntent::PointerUp | AppIntent::PointerMoved { .. } => vec![],
        AppIntent::DeviceSample { dx, dy } => {
            if state.mode == AppMode::DeviceTrace && state.ui.device_connected {
                // Gerät liefert Neigung, Zeichenrichtung ist entgegengesetzt
                let increment = -glam::DVec2::new(dx, dy) / state.options.device_sensitivity;
                vec![AppCommand::ApplyDeviceIncrement { increment }]
            } else {
                vec![]
            }
        }
        AppIntent::DeviceConnectionChanged { connected } => {
            vec![AppCommand::SetDeviceConnected { connected }]
        }
    }
}

fn map_button(state: &AppState, button: UiButton) -> Vec<AppCommand> {
    if let Some(to) = state.mode.next(button) {
        return vec![AppCommand::SwitchMode { to }];
    }

    let mode = state.mode;
    match button {
        UiButton::Clear => match mode {
            AppMode::Main | AppMode::RegularEntry | AppMode::FreehandEntry => {
                vec![AppCommand::ClearShapes]
            }
            AppMode::PointerTrace | AppMode::DeviceTrace => vec![AppCommand::ClearTrace],
            AppMode::Start | AppMode::Tutorial => vec![],
        },
        UiButton::ShowCoordinatePlane if mode.has_canvas() && !state.view.show_coordinate_plane => {
            vec![AppCommand::ShowCoordinatePlane]
        }
        UiButton::HideCoordinatePlane if mode.has_canvas() && state.view.show_coordinate_plane => {
            vec![AppCommand::HideCoordinatePlane]
        }
        UiButton::ZoomIn if mode.supports_zoom() && state.view.show_coordinate_plane => {
            vec![AppCommand::ZoomIn]
        }
        UiButton::ZoomOut if mode.supports_zoom() && state.view.show_coordinate_plane => {
            vec![AppCommand::ZoomOut]
        }
        UiButton::CalculateArea if is_entry_mode(mode) => vec![AppCommand::Measure {
            kind: MeasureKind::Area,
        }],
        UiButton::CalculatePerimeter if is_entry_mode(mode) => vec![AppCommand::Measure {
            kind: MeasureKind::Perimeter,
        }],
        _ => vec![],
    }
}

fn is_entry_mode(mode: AppMode) -> bool {
    matches!(mode, AppMode::RegularEntry | AppMode::FreehandEntry)
}
