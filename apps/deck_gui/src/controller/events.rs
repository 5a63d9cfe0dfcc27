//! Translation from raw egui input to deck inputs.

use eframe::egui;
use shared::protocol::KeyInput;

/// Height of the invisible strip at the top of the window that reveals the navbar.
pub const REVEAL_STRIP_HEIGHT: f32 = 100.0;

pub fn translate_key(key: egui::Key) -> Option<KeyInput> {
    match key {
        egui::Key::ArrowRight => Some(KeyInput::ArrowRight),
        egui::Key::ArrowLeft => Some(KeyInput::ArrowLeft),
        egui::Key::Space => Some(KeyInput::Space),
        _ => None,
    }
}

/// Navigation keys pressed this frame, in delivery order.
pub fn pressed_navigation_keys(ctx: &egui::Context) -> Vec<(egui::Key, KeyInput)> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => translate_key(*key).map(|input| (*key, input)),
                _ => None,
            })
            .collect()
    })
}

/// Tracks pointer presence over the reveal region and reports entry edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct RevealZone {
    inside: bool,
}

impl RevealZone {
    pub fn update(&mut self, pointer: Option<egui::Pos2>, navbar_rect: Option<egui::Rect>) -> bool {
        let inside = pointer.is_some_and(|pos| {
            pos.y <= REVEAL_STRIP_HEIGHT || navbar_rect.is_some_and(|rect| rect.contains(pos))
        });
        let entered = inside && !self.inside;
        self.inside = inside;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_navigation_keys_translate() {
        assert_eq!(translate_key(egui::Key::ArrowRight), Some(KeyInput::ArrowRight));
        assert_eq!(translate_key(egui::Key::ArrowLeft), Some(KeyInput::ArrowLeft));
        assert_eq!(translate_key(egui::Key::Space), Some(KeyInput::Space));
        assert_eq!(translate_key(egui::Key::Enter), None);
        assert_eq!(translate_key(egui::Key::ArrowUp), None);
    }

    #[test]
    fn reveal_zone_reports_entry_once() {
        let mut zone = RevealZone::default();
        assert!(!zone.update(Some(egui::pos2(400.0, 300.0)), None));
        assert!(zone.update(Some(egui::pos2(400.0, 40.0)), None));
        assert!(!zone.update(Some(egui::pos2(420.0, 60.0)), None));
        assert!(!zone.update(None, None));
        assert!(zone.update(Some(egui::pos2(10.0, 5.0)), None));
    }

    #[test]
    fn navbar_rect_extends_reveal_zone() {
        let mut zone = RevealZone::default();
        let navbar = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 140.0));
        assert!(zone.update(Some(egui::pos2(50.0, 120.0)), Some(navbar)));
    }
}
