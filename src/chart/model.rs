use argminmax::ArgMinMax;

use crate::config::PLOT_CONFIG;
use crate::domain::{AnalysisResult, PriceKind, PricePoint};
use crate::utils::{TimeUtils, format_usd};

/// One price point placed on the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub price: f64,
    pub kind: PriceKind,
    /// Raw date from the payload, shown verbatim in the tooltip
    pub date: String,
}

impl PlottedPoint {
    /// Value of the simulated series at this point. `None` is a gap.
    pub fn simulated_value(&self) -> Option<f64> {
        self.kind.is_simulated().then_some(self.price)
    }

    pub fn tooltip(&self) -> String {
        format!(
            "Date: {}\nPrice: {}\nType: {}",
            self.date,
            format_usd(self.price),
            self.kind
        )
    }
}

/// Vertical reference line at a change point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangePointMarker {
    pub x: f64,
    pub event_name: String,
}

/// Everything the plot needs, computed once when the payload arrives.
#[derive(Debug, Clone, Default)]
pub struct ChartModel {
    pub points: Vec<PlottedPoint>,
    pub markers: Vec<ChangePointMarker>,
    /// Padded (min, max) of all plotted prices
    pub y_bounds: Option<(f64, f64)>,
    /// Entries whose date could not be placed on the axis
    pub skipped: usize,
}

impl ChartModel {
    pub fn build(result: &AnalysisResult) -> Self {
        let mut skipped = 0;

        let points: Vec<PlottedPoint> = result
            .price_data
            .iter()
            .filter_map(|p| {
                let placed = place_point(p);
                if placed.is_none() {
                    skipped += 1;
                }
                placed
            })
            .collect();

        let markers: Vec<ChangePointMarker> = result
            .change_points
            .iter()
            .filter_map(|cp| match TimeUtils::parse_date(&cp.date) {
                Some(date) => Some(ChangePointMarker {
                    x: TimeUtils::date_to_x(date),
                    event_name: cp.event_name.clone(),
                }),
                None => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            log::warn!("{} entries had unreadable dates and are not plotted", skipped);
        }

        let y_bounds = padded_bounds(&points, PLOT_CONFIG.plot_y_padding_pct);

        Self {
            points,
            markers,
            y_bounds,
            skipped,
        }
    }

    /// The historical series: every point, whatever its kind.
    pub fn historical_series(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.price]).collect()
    }

    /// Consecutive runs of simulated points. Each run is drawn as its own line so gaps
    /// stay empty.
    pub fn simulated_runs(&self) -> Vec<Vec<[f64; 2]>> {
        let mut runs = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();
        for point in &self.points {
            match point.simulated_value() {
                Some(price) => current.push([point.x, price]),
                None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }

    /// Earliest and latest plotted date, markers included.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p.x)
            .chain(self.markers.iter().map(|m| m.x))
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }

    /// Point closest in time to `x`.
    pub fn nearest_point(&self, x: f64) -> Option<&PlottedPoint> {
        self.points
            .iter()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }

    pub fn tooltip_at(&self, x: f64) -> Option<String> {
        self.nearest_point(x).map(PlottedPoint::tooltip)
    }
}

fn place_point(p: &PricePoint) -> Option<PlottedPoint> {
    let date = TimeUtils::parse_date(&p.date)?;
    Some(PlottedPoint {
        x: TimeUtils::date_to_x(date),
        price: p.price,
        kind: p.kind,
        date: p.date.clone(),
    })
}

fn padded_bounds(points: &[PlottedPoint], pad_pct: f64) -> Option<(f64, f64)> {
    let prices: Vec<f64> = points
        .iter()
        .map(|p| p.price)
        .filter(|p| p.is_finite())
        .collect();
    if prices.is_empty() {
        return None;
    }
    let (min_idx, max_idx) = prices.as_slice().argminmax();
    let (min, max) = (prices[min_idx], prices[max_idx]);

    let range = max - min;
    // Flat series: pad around the value itself
    let pad = if range > 0.0 {
        range * pad_pct
    } else {
        (max.abs() * pad_pct).max(1.0)
    };
    Some((min - pad, max + pad))
}
