use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::config::PLOT_CONFIG;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub heading: Color32,
    pub subheading: Color32,
    pub central_panel: Color32,
    pub header_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub title_size: f32,
    pub status_text_size: f32,
    pub card_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::WHITE,
        subheading: Color32::LIGHT_GRAY,
        central_panel: Color32::from_rgb(24, 26, 31),
        header_panel: Color32::from_rgb(40, 44, 52),
    },
    title_size: 28.0,
    status_text_size: 24.0,
    card_spacing: 8.0,
};

impl UiConfig {
    /// Frame for the Header bar
    pub fn header_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.header_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 12),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// One event card in the list
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: PLOT_CONFIG.color_card_background,
            stroke: Stroke::new(1.0, PLOT_CONFIG.color_card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
