//! Pfeiltasten als Ersatz für ein Neigungs-Gerät.
//!
//! Wie ein Beschleunigungs-Sensor liefert die Tastatur pro Takt genau ein
//! Rohsample (Vorzeichen = Neigung), in Ruhelage `(0, 0)`.

use crate::app::AppIntent;

/// Rohwert eines Neigungs-Samples bei gedrückter Taste.
const TILT_SAMPLE: f64 = 200.0;

/// Liest die aktuelle Neigung als `DeviceSample`; ohne gedrückte Taste `(0, 0)`.
pub fn device_sample(ctx: &egui::Context) -> AppIntent {
    let (left, right, up, down) = ctx.input(|i| {
        (
            i.key_down(egui::Key::ArrowLeft),
            i.key_down(egui::Key::ArrowRight),
            i.key_down(egui::Key::ArrowUp),
            i.key_down(egui::Key::ArrowDown),
        )
    });

    // Neigung nach rechts bewegt den Stift nach rechts: Sample negativ
    AppIntent::DeviceSample {
        dx: axis(right, left),
        dy: axis(down, up),
    }
}

fn axis(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => -TILT_SAMPLE,
        (false, true) => TILT_SAMPLE,
        _ => 0.0,
    }
}
