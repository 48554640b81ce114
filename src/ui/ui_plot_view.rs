use eframe::egui::Ui;
use egui_plot::{AxisHints, GridMark, Legend, Plot, VPlacement};

use crate::chart::{ChartModel, anchored_date_ticks};
use crate::config::PLOT_CONFIG;
use crate::ui::plot_layers::{LayerContext, layer_stack};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format_x_tick;

/// Series in the shape egui_plot wants, built once per payload.
#[derive(Clone, Default)]
pub struct PlotCache {
    pub point_count: usize,
    pub historical: Vec<[f64; 2]>,
    pub simulated_runs: Vec<Vec<[f64; 2]>>,
}

impl PlotCache {
    fn build(model: &ChartModel) -> Self {
        Self {
            point_count: model.points.len(),
            historical: model.historical_series(),
            simulated_runs: model.simulated_runs(),
        }
    }
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

// Helper to build the Time Axis: day numbers rendered as "Sep 2008"
fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| format_x_tick(mark.value))
        .placement(VPlacement::Bottom)
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y().label(UI_TEXT.plot_y_axis.as_str())
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    fn cache_for(&mut self, model: &ChartModel) -> &PlotCache {
        let stale = self
            .cache
            .as_ref()
            .is_none_or(|c| c.point_count != model.points.len());
        if stale {
            self.cache = None;
        }
        self.cache.get_or_insert_with(|| PlotCache::build(model))
    }

    pub fn show_price_chart(&mut self, ui: &mut Ui, model: &ChartModel, annotate: bool) {
        let cache = self.cache_for(model);
        let first_x = model.x_bounds().map(|(lo, _)| lo);

        let mut plot = Plot::new(UI_TEXT.plot_id.as_str())
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let (ticks, step) =
                    anchored_date_ticks(min, max, PLOT_CONFIG.target_x_ticks, first_x);
                ticks
                    .into_iter()
                    .map(|value| GridMark {
                        value,
                        step_size: step,
                    })
                    .collect()
            })
            .label_formatter(|_name, value| model.tooltip_at(value.x).unwrap_or_default())
            .allow_scroll(false);

        if let Some((y_min, y_max)) = model.y_bounds {
            plot = plot.include_y(y_min).include_y(y_max);
        }

        plot.show(ui, |plot_ui| {
            let ctx = LayerContext {
                model,
                cache,
                annotate_change_points: annotate,
            };
            for layer in layer_stack() {
                layer.render(plot_ui, &ctx);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalysisResult, ChangePoint, PriceKind, PricePoint};
    use eframe::egui::{CentralPanel, Context, RawInput, Shape};

    fn model_with(n: usize) -> ChartModel {
        let price_data = (0..n)
            .map(|i| PricePoint {
                date: format!("2020-01-{:02}", i + 1),
                price: 50.0 + i as f64,
                kind: if i % 2 == 0 {
                    PriceKind::Historical
                } else {
                    PriceKind::Simulated
                },
            })
            .collect();
        ChartModel::build(&AnalysisResult {
            price_data,
            change_points: vec![],
        })
    }

    #[test]
    fn cache_is_built_once_and_rebuilt_when_payload_changes() {
        let mut view = PlotView::new();
        assert!(view.cache.is_none());

        let small = model_with(3);
        assert_eq!(view.cache_for(&small).historical.len(), 3);
        assert_eq!(view.cache_for(&small).simulated_runs.len(), 1);
        assert!(view.cache.is_some());

        let bigger = model_with(5);
        assert_eq!(view.cache_for(&bigger).historical.len(), 5);
        assert_eq!(view.cache_for(&bigger).simulated_runs.len(), 2);
    }

    fn model_with_events(names: &[&str]) -> ChartModel {
        let mut analysis = AnalysisResult {
            price_data: (0..6)
                .map(|i| PricePoint {
                    date: format!("2008-{:02}-15", i + 7),
                    price: 140.0 - 15.0 * i as f64,
                    kind: PriceKind::Historical,
                })
                .collect(),
            change_points: vec![],
        };
        for (i, name) in names.iter().enumerate() {
            analysis.change_points.push(ChangePoint {
                date: format!("2008-{:02}-01", i + 8),
                event_name: name.to_string(),
                event_description: String::new(),
            });
        }
        ChartModel::build(&analysis)
    }

    /// Every text shape the chart paints, one entry per shape.
    fn chart_texts(model: &ChartModel, annotate: bool) -> Vec<String> {
        fn walk(shape: &Shape, out: &mut Vec<String>) {
            match shape {
                Shape::Text(text) => out.push(text.galley.text().to_string()),
                Shape::Vec(shapes) => shapes.iter().for_each(|s| walk(s, out)),
                _ => {}
            }
        }

        let ctx = Context::default();
        let mut view = PlotView::new();
        let mut texts = Vec::new();
        for _ in 0..3 {
            let output = ctx.run(RawInput::default(), |ctx| {
                CentralPanel::default().show(ctx, |ui| view.show_price_chart(ui, model, annotate));
            });
            texts.clear();
            for clipped in &output.shapes {
                walk(&clipped.shape, &mut texts);
            }
        }
        texts
    }

    #[test]
    fn change_point_lines_are_unlabelled_by_default() {
        let model = model_with_events(&["Lehman Collapse", "OPEC Cut"]);
        assert_eq!(model.markers.len(), 2);

        let texts = chart_texts(&model, false);
        assert!(!texts.iter().any(|t| t.contains("Lehman Collapse")));
        assert!(!texts.iter().any(|t| t.contains("OPEC Cut")));
        // The chart itself did render
        assert!(texts.iter().any(|t| t.contains("Brent Price (Historical)")));
    }

    #[test]
    fn annotation_labels_each_change_point_once() {
        let names = ["Lehman Collapse", "OPEC Cut"];
        let model = model_with_events(&names);

        let texts = chart_texts(&model, true);
        for name in names {
            assert_eq!(texts.iter().filter(|t| t.as_str() == name).count(), 1, "{name}");
        }
    }
}
