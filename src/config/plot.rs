//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- SERIES ---
    pub historical_color: Color32,
    pub historical_width: f32,
    pub simulated_color: Color32,
    pub simulated_width: f32,
    /// Dash length of the simulated series (screen pixels)
    pub simulated_dash_length: f32,
    /// Marker radius for a simulated run that is only one point long
    pub simulated_marker_radius: f32,

    // --- CHANGE POINTS ---
    pub change_point_color: Color32,
    pub change_point_width: f32,
    pub change_point_dash_length: f32,
    pub change_point_label_size: f32,

    // --- LAYOUT ---
    pub chart_height: f32,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    /// Roughly how many date ticks we aim for across the visible width
    pub target_x_ticks: f64,

    // --- SEMANTIC COLORS ---
    pub color_error: Color32,
    pub color_warning: Color32,
    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    pub color_card_background: Color32,
    pub color_card_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    historical_color: Color32::from_rgb(0x88, 0x84, 0xd8), // Lavender
    historical_width: 2.0,
    simulated_color: Color32::from_rgb(0x82, 0xca, 0x9d), // Mint
    simulated_width: 2.0,
    simulated_dash_length: 5.0,
    simulated_marker_radius: 3.0,

    change_point_color: Color32::RED,
    change_point_width: 1.0,
    change_point_dash_length: 3.0,
    change_point_label_size: 14.0,

    chart_height: 500.0,
    plot_y_padding_pct: 0.05,
    target_x_ticks: 10.0,

    color_error: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 215, 0), // Gold
    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_card_background: Color32::from_black_alpha(40),
    color_card_border: Color32::from_gray(60),
};
