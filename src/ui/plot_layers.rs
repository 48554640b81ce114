use eframe::egui::{Align2, RichText};

use egui_plot::{Line, LineStyle, PlotPoint, PlotPoints, PlotUi, Points, Text, VLine};

use crate::chart::ChartModel;
use crate::config::PLOT_CONFIG;
use crate::ui::ui_plot_view::PlotCache;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub model: &'a ChartModel,
    pub cache: &'a PlotCache,
    /// Print event names on the change point lines
    pub annotate_change_points: bool,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. HISTORICAL PRICE (every point, whatever its type)
// ============================================================================
pub struct HistoricalPriceLayer;

impl PlotLayer for HistoricalPriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.cache.historical.is_empty() {
            return;
        }
        plot_ui.line(
            Line::new(
                UI_TEXT.series_historical.as_str(),
                PlotPoints::new(ctx.cache.historical.clone()),
            )
            .color(PLOT_CONFIG.historical_color)
            .width(PLOT_CONFIG.historical_width),
        );
    }
}

// ============================================================================
// 2. SIMULATED PRICE (only where the point is flagged Simulated)
// ============================================================================
pub struct SimulatedPriceLayer;

impl PlotLayer for SimulatedPriceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let name = UI_TEXT.series_simulated.as_str();
        for run in &ctx.cache.simulated_runs {
            // A lone point has no segment to draw, so mark it instead
            if run.len() == 1 {
                plot_ui.points(
                    Points::new(name, PlotPoints::new(run.clone()))
                        .color(PLOT_CONFIG.simulated_color)
                        .radius(PLOT_CONFIG.simulated_marker_radius),
                );
                continue;
            }
            plot_ui.line(
                Line::new(name, PlotPoints::new(run.clone()))
                    .color(PLOT_CONFIG.simulated_color)
                    .width(PLOT_CONFIG.simulated_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.simulated_dash_length,
                    }),
            );
        }
    }
}

// ============================================================================
// 3. CHANGE POINTS (dashed vertical reference lines)
// ============================================================================
pub struct ChangePointLayer;

impl PlotLayer for ChangePointLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let label_y = ctx.model.y_bounds.map(|(_, max)| max);

        for marker in &ctx.model.markers {
            // Unnamed so the lines stay out of the legend
            plot_ui.vline(
                VLine::new("", marker.x)
                    .color(PLOT_CONFIG.change_point_color)
                    .width(PLOT_CONFIG.change_point_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.change_point_dash_length,
                    }),
            );

            if let (true, Some(y)) = (ctx.annotate_change_points, label_y) {
                plot_ui.text(
                    Text::new(
                        "",
                        PlotPoint::new(marker.x, y),
                        RichText::new(&marker.event_name)
                            .size(PLOT_CONFIG.change_point_label_size)
                            .color(PLOT_CONFIG.change_point_color),
                    )
                    .anchor(Align2::CENTER_TOP),
                );
            }
        }
    }
}

/// Bottom to top: markers first so the price lines draw over them.
pub fn layer_stack() -> Vec<Box<dyn PlotLayer>> {
    vec![
        Box::new(ChangePointLayer),
        Box::new(HistoricalPriceLayer),
        Box::new(SimulatedPriceLayer),
    ]
}
