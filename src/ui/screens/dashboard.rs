use {
    crate::{
        app::LoadedDashboard,
        config::PLOT_CONFIG,
        domain::ChangePoint,
        ui::{PlotView, UI_CONFIG, UI_TEXT, UiStyleExt},
        utils::format_heading_date,
    },
    eframe::egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel, Ui},
};

/// "Lehman Collapse (~September 2008)"
pub(crate) fn event_card_heading(cp: &ChangePoint) -> String {
    format!("{} (~{})", cp.event_name, format_heading_date(&cp.date))
}

pub(crate) fn render_dashboard(
    ctx: &Context,
    dashboard: &LoadedDashboard,
    plot_view: &mut PlotView,
    annotate_change_points: bool,
) {
    TopBottomPanel::top("header_panel")
        .frame(UI_CONFIG.header_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading_colored(UI_TEXT.header_title.as_str(), UI_CONFIG.title_size);
                ui.label(
                    RichText::new(&UI_TEXT.header_subtitle).color(UI_CONFIG.colors.subheading),
                );
            });
        });

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                plot_view.show_price_chart(ui, &dashboard.chart, annotate_change_points);

                if dashboard.chart.skipped > 0 {
                    ui.label_subdued(format!(
                        "{} {}",
                        dashboard.chart.skipped, UI_TEXT.label_skipped_entries
                    ));
                }

                ui.add_space(20.0);
                render_event_list(ui, &dashboard.analysis.change_points);
            });
        });
}

/// One card per change point, in payload order.
fn render_event_list(ui: &mut Ui, change_points: &[ChangePoint]) {
    ui.heading_colored(UI_TEXT.events_heading.as_str(), 20.0);
    ui.add_space(UI_CONFIG.card_spacing);

    if change_points.is_empty() {
        ui.label_subdued(UI_TEXT.events_empty.as_str());
        return;
    }

    for cp in change_points {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(event_card_heading(cp))
                    .size(16.0)
                    .strong()
                    .color(PLOT_CONFIG.color_text_primary),
            );
            ui.label(RichText::new(&cp.event_description).color(PLOT_CONFIG.color_text_neutral));
        });
        ui.add_space(UI_CONFIG.card_spacing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_heading_has_parenthetical_month_year() {
        let cp = ChangePoint {
            date: "2008-09-15".to_string(),
            event_name: "Lehman Collapse".to_string(),
            event_description: "Global financial crisis deepens.".to_string(),
        };
        assert_eq!(event_card_heading(&cp), "Lehman Collapse (~September 2008)");
    }
}
