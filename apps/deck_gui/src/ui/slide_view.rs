//! Slide renderer backed by manifest descriptors.

use std::sync::Arc;

use deck_core::SlideRender;
use eframe::egui;
use shared::domain::{SlideDescriptor, SlideKind};

use super::theme::Palette;

#[derive(Debug, Clone)]
pub struct SlideView {
    content: Arc<SlideDescriptor>,
}

impl SlideView {
    pub fn new(descriptor: &SlideDescriptor) -> Self {
        Self {
            content: Arc::new(descriptor.clone()),
        }
    }
}

/// A slide ready to paint for the current frame.
#[derive(Debug, Clone)]
pub struct SlideFrame {
    pub content: Arc<SlideDescriptor>,
    pub is_active: bool,
}

impl SlideRender for SlideView {
    type Output = SlideFrame;

    fn render(&self, is_active: bool) -> SlideFrame {
        SlideFrame {
            content: Arc::clone(&self.content),
            is_active,
        }
    }
}

fn is_centered(kind: SlideKind) -> bool {
    matches!(kind, SlideKind::Intro | SlideKind::Ask | SlideKind::ThankYou)
}

pub fn paint(ui: &mut egui::Ui, frame: &SlideFrame, palette: &Palette) {
    let slide = &frame.content;
    let layout = if is_centered(slide.kind) {
        egui::Layout::top_down(egui::Align::Center)
    } else {
        egui::Layout::top_down(egui::Align::Min)
    };

    ui.add_space(ui.available_height() * 0.2);
    egui::Frame::NONE
        .inner_margin(egui::Margin::symmetric(96, 0))
        .show(ui, |ui| {
            ui.with_layout(layout, |ui| {
                let title_size = if is_centered(slide.kind) { 56.0 } else { 40.0 };
                ui.label(
                    egui::RichText::new(&slide.title)
                        .strong()
                        .size(title_size)
                        .color(palette.text),
                );
                if let Some(subtitle) = &slide.subtitle {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(subtitle)
                            .size(22.0)
                            .color(palette.accent_soft),
                    );
                }

                if !slide.points.is_empty() {
                    ui.add_space(28.0);
                    for point in &slide.points {
                        ui.label(
                            egui::RichText::new(format!("•  {point}"))
                                .size(20.0)
                                .color(palette.muted),
                        );
                        ui.add_space(6.0);
                    }
                }

                if !slide.metrics.is_empty() {
                    ui.add_space(28.0);
                    ui.horizontal_wrapped(|ui| {
                        for metric in &slide.metrics {
                            metric_card(ui, &metric.label, &metric.value, palette);
                        }
                    });
                }
            });
        });
}

fn metric_card(ui: &mut egui::Ui, label: &str, value: &str, palette: &Palette) {
    egui::Frame::NONE
        .fill(palette.surface)
        .stroke(egui::Stroke::new(1.0, palette.border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(18, 14))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(value)
                        .strong()
                        .size(28.0)
                        .color(palette.accent),
                );
                ui.label(egui::RichText::new(label).size(14.0).color(palette.muted));
            });
        });
}
