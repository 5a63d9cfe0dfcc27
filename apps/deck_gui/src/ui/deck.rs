//! Deck screen: slide viewport, auto-hiding navbar, arrows and counter.

use deck_core::{DeckNavigator, RenderedSlide, SlidePosition};
use eframe::egui;
use shared::protocol::DeckInput;

use super::{
    slide_view::{self, SlideFrame},
    theme::Palette,
    ui_in_rect,
};
use crate::controller::events::RevealZone;

const NAVBAR_HEIGHT: f32 = 64.0;
const NAVBAR_TRANSITION_SECS: f32 = 0.3;
const SLIDE_TRANSITION_SECS: f32 = 0.7;

pub struct DeckView<'a> {
    pub navigator: &'a DeckNavigator,
    pub slides: &'a [RenderedSlide<SlideFrame>],
    pub brand: &'a str,
}

fn slide_offset(position: SlidePosition) -> f32 {
    match position {
        SlidePosition::Before => -1.0,
        SlidePosition::Active => 0.0,
        SlidePosition::After => 1.0,
    }
}

pub fn show(
    ctx: &egui::Context,
    view: &DeckView<'_>,
    reveal_zone: &mut RevealZone,
    palette: &Palette,
) -> Vec<DeckInput> {
    let mut inputs = Vec::new();

    let viewport = egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(palette.background))
        .show(ctx, |ui| {
            let viewport = ui.max_rect();
            for slide in view.slides {
                let offset = ctx.animate_value_with_time(
                    egui::Id::new(("slide_offset", slide.index)),
                    slide_offset(slide.position),
                    SLIDE_TRANSITION_SECS,
                );
                let opacity = ctx.animate_bool_with_time(
                    egui::Id::new(("slide_opacity", slide.index)),
                    slide.output.is_active,
                    SLIDE_TRANSITION_SECS,
                );
                if opacity <= 0.0 {
                    continue;
                }
                let rect = viewport.translate(egui::vec2(offset * viewport.width(), 0.0));
                ui_in_rect(ui, rect, |ui| {
                    ui.set_opacity(opacity);
                    slide_view::paint(ui, &slide.output, palette);
                });
            }
            viewport
        })
        .inner;

    let navbar_y = ctx.animate_value_with_time(
        egui::Id::new("navbar_offset"),
        if view.navigator.navbar_hidden() {
            -NAVBAR_HEIGHT
        } else {
            0.0
        },
        NAVBAR_TRANSITION_SECS,
    );
    let navbar = egui::Area::new(egui::Id::new("deck_navbar"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(viewport.left(), viewport.top() + navbar_y))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(palette.surface)
                .stroke(egui::Stroke::new(1.0, palette.border))
                .inner_margin(egui::Margin::symmetric(24, 0))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(viewport.width() - 48.0, NAVBAR_HEIGHT));
                    ui.horizontal_centered(|ui| {
                        ui.label(
                            egui::RichText::new(view.brand)
                                .strong()
                                .size(22.0)
                                .color(palette.accent),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Lock").clicked() {
                                inputs.push(DeckInput::Lock);
                            }
                        });
                    });
                });
        });

    let pointer = ctx.input(|i| i.pointer.hover_pos());
    if reveal_zone.update(pointer, Some(navbar.response.rect)) {
        inputs.push(DeckInput::RevealNavbar);
    }

    let arrow = |label: &str| {
        egui::Button::new(egui::RichText::new(label).size(28.0))
            .min_size(egui::vec2(48.0, 48.0))
            .corner_radius(egui::CornerRadius::same(24))
    };
    if view.navigator.can_go_previous() {
        egui::Area::new(egui::Id::new("deck_previous"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::LEFT_CENTER, egui::vec2(16.0, 0.0))
            .show(ctx, |ui| {
                if ui.add(arrow("‹")).clicked() {
                    inputs.push(DeckInput::PreviousClicked);
                }
            });
    }
    if view.navigator.can_go_next() {
        egui::Area::new(egui::Id::new("deck_next"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_CENTER, egui::vec2(-16.0, 0.0))
            .show(ctx, |ui| {
                if ui.add(arrow("›")).clicked() {
                    inputs.push(DeckInput::NextClicked);
                }
            });
    }

    if let Some(counter) = view.navigator.counter() {
        egui::Area::new(egui::Id::new("deck_counter"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -20.0))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(palette.surface)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(counter.label())
                                .monospace()
                                .color(palette.muted),
                        );
                    });
            });
    }

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_sit_one_viewport_away() {
        assert_eq!(slide_offset(SlidePosition::Before), -1.0);
        assert_eq!(slide_offset(SlidePosition::Active), 0.0);
        assert_eq!(slide_offset(SlidePosition::After), 1.0);
    }
}
