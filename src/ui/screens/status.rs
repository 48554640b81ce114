use eframe::egui::{CentralPanel, Color32, Context, RichText};

use crate::{
    config::PLOT_CONFIG,
    ui::{UI_CONFIG, UI_TEXT},
};

fn render_status(ctx: &Context, text: &str, color: Color32) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(
                    RichText::new(text)
                        .size(UI_CONFIG.status_text_size)
                        .strong()
                        .color(color),
                );
            });
        });
}

/// Fetch still in flight.
pub(crate) fn render_loading(ctx: &Context) {
    render_status(ctx, &UI_TEXT.loading, PLOT_CONFIG.color_warning);
}

/// Fetch failed. Only the message, never partial data.
pub(crate) fn render_error(ctx: &Context, message: &str) {
    let text = format!("{} {}", UI_TEXT.error_prefix, message);
    render_status(ctx, &text, PLOT_CONFIG.color_error);
}
