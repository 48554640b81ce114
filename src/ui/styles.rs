use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::{config::PLOT_CONFIG, ui::UI_CONFIG};

pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = PLOT_CONFIG.color_text_neutral;

    ctx.set_visuals(visuals);
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn heading_colored(&mut self, text: impl Into<String>, size: f32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text.into()).color(PLOT_CONFIG.color_text_subdued));
    }

    fn heading_colored(&mut self, text: impl Into<String>, size: f32) {
        self.heading(
            RichText::new(text.into())
                .size(size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }
}
