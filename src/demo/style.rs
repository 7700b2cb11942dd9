use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const STACK_PANEL_DEFAULT: f32 = 220.0;
pub const SCENE_MARGIN: f32 = 24.0;
pub const CARD_OFFSET: f32 = 10.0;
pub const CARD_ROUNDING: u8 = 6;
pub const HEADING_SIZE: f32 = 22.0;
pub const BODY_SIZE: f32 = 14.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 4;

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
