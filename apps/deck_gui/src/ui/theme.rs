use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: egui::Color32,
    pub surface: egui::Color32,
    pub border: egui::Color32,
    pub text: egui::Color32,
    pub muted: egui::Color32,
    pub accent: egui::Color32,
    pub accent_soft: egui::Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: egui::Color32::from_rgb(12, 12, 20),
            surface: egui::Color32::from_rgba_unmultiplied(24, 24, 38, 230),
            border: egui::Color32::from_rgb(52, 52, 78),
            text: egui::Color32::from_rgb(236, 236, 244),
            muted: egui::Color32::from_rgb(148, 148, 172),
            accent: egui::Color32::from_rgb(99, 102, 241),
            accent_soft: egui::Color32::from_rgb(139, 92, 246),
        }
    }
}
