//! Geo Shape Editor.
//!
//! Interaktiver Editor für regelmäßige und freie Polygone mit Umfang-
//! und Flächenberechnung, Nachzeichnen per Maus oder Neigungs-Gerät.

use eframe::egui;
use geo_shape_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

/// Breite der Seitenleiste plus Ränder.
const PANEL_ALLOWANCE: [f32; 2] = [260.0, 60.0];

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Geo Shape Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let window_size = [
            editor_options.canvas_size[0] + PANEL_ALLOWANCE[0],
            editor_options.canvas_size[1] + PANEL_ALLOWANCE[1],
        ];
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size)
                .with_title("Geo Shape Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Geo Shape Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    canvas: ui::CanvasInput,
    /// Zeitpunkt (egui-Zeit in Sekunden) des nächsten Frame-Takts
    next_tick_at: f64,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            canvas: ui::CanvasInput::new(),
            next_tick_at: 0.0,
        };
        app.process_events(vec![AppIntent::StoreLoadRequested]);
        app
    }

    fn tick_interval(&self) -> f64 {
        1.0 / f64::from(self.state.options.tick_rate_hz.max(1))
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        // Fenster schließen → erst speichern, dann im nächsten Frame beenden
        if ctx.input(|i| i.viewport().close_requested()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            events.push(AppIntent::ExitRequested);
        }

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_side_panel(ctx, &mut self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.mode.has_canvas() {
                let scene = self.controller.build_render_scene(&self.state);
                events.extend(self.canvas.show(ui, &scene));
            } else {
                ui::render_intro(ui, self.state.mode);
            }
        });

        let now = ctx.input(|i| i.time);
        if now >= self.next_tick_at {
            self.next_tick_at = now + self.tick_interval();
            // Gerät liefert genau ein Sample pro Takt, auch in Ruhelage
            if self.state.ui.device_connected {
                events.push(ui::device_sample(ctx));
            }
            events.push(AppIntent::Tick);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Hält den Frame-Takt auch ohne Eingaben am Laufen.
    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.should_exit {
            ctx.request_repaint();
            return;
        }
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(self.tick_interval()));
    }
}
