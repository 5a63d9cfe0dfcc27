//! Entrance screen: the clickable wordmark and the call-to-action.

use deck_core::gate::{EntranceGate, REQUIRED_A_CLICKS, REQUIRED_Q_CLICKS};
use eframe::egui;
use shared::protocol::{DeckInput, GateElement};

use super::theme::Palette;

const WORDMARK_SIZE: f32 = 120.0;
const CALL_TO_ACTION: &str = "Future of Shopping";

fn progress_color(palette: &Palette, done: u8, required: u8) -> egui::Color32 {
    let t = f32::from(done.min(required)) / f32::from(required.max(1));
    palette.text.lerp_to_gamma(palette.accent, t)
}

fn wordmark_glyph(
    ui: &mut egui::Ui,
    text: &str,
    size: f32,
    color: egui::Color32,
) -> egui::Response {
    ui.add(
        egui::Label::new(egui::RichText::new(text).strong().size(size).color(color))
            .sense(egui::Sense::click()),
    )
}

pub fn show(
    ctx: &egui::Context,
    gate: &EntranceGate,
    title: &str,
    palette: &Palette,
) -> Vec<DeckInput> {
    let mut inputs = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(palette.background))
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                ui.add_space(ui.available_height() * 0.28);

                ui.horizontal(|ui| {
                    // Keep the wordmark centered as the Q grows.
                    let q_scale = 1.0 + 0.08 * f32::from(gate.q_clicks());
                    let approx_width = WORDMARK_SIZE * (3.2 + q_scale * 0.8);
                    ui.add_space(((ui.available_width() - approx_width) / 2.0).max(0.0));
                    ui.spacing_mut().item_spacing.x = 2.0;

                    let q = wordmark_glyph(
                        ui,
                        "Q",
                        WORDMARK_SIZE * q_scale,
                        progress_color(palette, gate.q_clicks(), REQUIRED_Q_CLICKS),
                    );
                    if q.clicked() {
                        inputs.push(DeckInput::GateClick {
                            element: GateElement::Q,
                        });
                    }

                    let apostrophe_color = if gate.apostrophe_clicked() {
                        palette.accent_soft
                    } else {
                        palette.text
                    };
                    let apostrophe = wordmark_glyph(ui, "'", WORDMARK_SIZE, apostrophe_color);
                    if apostrophe.clicked() {
                        inputs.push(DeckInput::GateClick {
                            element: GateElement::Apostrophe,
                        });
                    }

                    let a = wordmark_glyph(
                        ui,
                        "A",
                        WORDMARK_SIZE,
                        progress_color(palette, gate.a_clicks(), REQUIRED_A_CLICKS),
                    );
                    if a.clicked() {
                        inputs.push(DeckInput::GateClick {
                            element: GateElement::A,
                        });
                    }

                    ui.label(
                        egui::RichText::new("NTA")
                            .strong()
                            .size(WORDMARK_SIZE)
                            .color(palette.text),
                    );
                });

                ui.add_space(12.0);
                ui.label(egui::RichText::new(title).size(18.0).color(palette.muted));
                ui.add_space(40.0);

                let unlocked = gate.is_unlocked();
                let cta = egui::Button::new(
                    egui::RichText::new(CALL_TO_ACTION).strong().size(22.0),
                )
                .min_size(egui::vec2(280.0, 56.0))
                .corner_radius(egui::CornerRadius::same(28));
                let enter_pressed = unlocked && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.add_enabled(unlocked, cta).clicked() || enter_pressed {
                    inputs.push(DeckInput::EnterDeck);
                }
            });
        });

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_color_reaches_accent_when_complete() {
        let palette = Palette::default();
        assert_eq!(progress_color(&palette, 0, REQUIRED_Q_CLICKS), palette.text);
        assert_eq!(
            progress_color(&palette, REQUIRED_Q_CLICKS, REQUIRED_Q_CLICKS),
            palette.accent
        );
    }
}
