use chrono::{Datelike, NaiveDate};

use crate::utils::TimeUtils;

/// Month spacings we are willing to label: 1M, 3M, 6M, 1Y, 2Y, 5Y, 10Y.
const MONTH_STEPS: [i32; 7] = [1, 3, 6, 12, 24, 60, 120];

const AVG_DAYS_PER_MONTH: f64 = 30.44;

// Helper: pick the smallest "nice" month step that keeps us at or under target_count ticks
pub fn calculate_month_step(range_days: f64, target_count: f64) -> i32 {
    let months = range_days / AVG_DAYS_PER_MONTH;
    let target = target_count.max(1.0);
    MONTH_STEPS
        .iter()
        .copied()
        .find(|&step| months / step as f64 <= target)
        .unwrap_or(*MONTH_STEPS.last().unwrap_or(&120))
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn first_of_month(index: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

/// Tick positions on the 1st of the month, aligned to the chosen step so that e.g. yearly
/// ticks land on January. Returns (x values, step width in days).
pub fn date_ticks(min_x: f64, max_x: f64, target_count: f64) -> (Vec<f64>, f64) {
    let (Some(start), Some(end)) = (TimeUtils::x_to_date(min_x), TimeUtils::x_to_date(max_x))
    else {
        return (Vec::new(), 0.0);
    };
    if end < start {
        return (Vec::new(), 0.0);
    }

    let step = calculate_month_step(max_x - min_x, target_count);
    let mut index = month_index(start);
    if start.day() > 1 {
        index += 1;
    }
    // Align up to the next multiple of step
    index = (index + step - 1).div_euclid(step) * step;

    let mut ticks = Vec::new();
    while let Some(date) = first_of_month(index) {
        if date > end {
            break;
        }
        ticks.push(TimeUtils::date_to_x(date));
        index += step;
    }
    (ticks, step as f64 * AVG_DAYS_PER_MONTH)
}

/// Month ticks plus one at `anchor` (the earliest plotted date) when it is in view, so the
/// axis always labels where the data starts. An aligned tick closer than half a step to the
/// anchor is dropped in its favour.
pub fn anchored_date_ticks(
    min_x: f64,
    max_x: f64,
    target_count: f64,
    anchor: Option<f64>,
) -> (Vec<f64>, f64) {
    let (mut ticks, step_days) = date_ticks(min_x, max_x, target_count);
    let Some(anchor) = anchor.filter(|a| (min_x..=max_x).contains(a)) else {
        return (ticks, step_days);
    };
    if step_days <= 0.0 {
        return (ticks, step_days);
    }
    ticks.retain(|&t| (t - anchor).abs() >= step_days / 2.0);
    ticks.push(anchor);
    ticks.sort_by(f64::total_cmp);
    (ticks, step_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::format_x_tick;

    fn x(y: i32, m: u32, d: u32) -> f64 {
        TimeUtils::date_to_x(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn step_grows_with_range() {
        assert_eq!(calculate_month_step(200.0, 10.0), 1);
        assert_eq!(calculate_month_step(3.0 * 365.0, 10.0), 6);
        assert_eq!(calculate_month_step(35.0 * 365.0, 10.0), 60);
        assert_eq!(calculate_month_step(1000.0 * 365.0, 10.0), 120);
    }

    #[test]
    fn yearly_ticks_land_on_january() {
        let (ticks, step_days) = date_ticks(x(2005, 3, 10), x(2012, 6, 1), 10.0);
        let labels: Vec<String> = ticks.iter().map(|&t| format_x_tick(t)).collect();
        assert_eq!(
            labels,
            vec!["Jan 2006", "Jan 2007", "Jan 2008", "Jan 2009", "Jan 2010", "Jan 2011", "Jan 2012"]
        );
        assert!(step_days > 360.0 && step_days < 370.0);
    }

    #[test]
    fn monthly_ticks_start_after_partial_month() {
        let (ticks, _) = date_ticks(x(2008, 9, 15), x(2008, 12, 31), 10.0);
        let labels: Vec<String> = ticks.iter().map(|&t| format_x_tick(t)).collect();
        assert_eq!(labels, vec!["Oct 2008", "Nov 2008", "Dec 2008"]);
    }

    #[test]
    fn first_point_gets_its_own_tick() {
        let start = x(2008, 9, 15);
        let (ticks, _) = anchored_date_ticks(start, x(2008, 12, 31), 10.0, Some(start));
        let labels: Vec<String> = ticks.iter().map(|&t| format_x_tick(t)).collect();
        assert_eq!(labels, vec!["Sep 2008", "Oct 2008", "Nov 2008", "Dec 2008"]);
        assert_eq!(ticks[0], start);
    }

    #[test]
    fn anchor_replaces_a_crowding_tick() {
        let start = x(2008, 9, 25);
        let (ticks, _) = anchored_date_ticks(start, x(2008, 12, 31), 10.0, Some(start));
        let labels: Vec<String> = ticks.iter().map(|&t| format_x_tick(t)).collect();
        assert_eq!(labels, vec!["Sep 2008", "Nov 2008", "Dec 2008"]);
    }

    #[test]
    fn anchor_out_of_view_is_ignored() {
        let (plain, _) = date_ticks(x(2009, 1, 1), x(2009, 6, 30), 10.0);
        let (anchored, _) =
            anchored_date_ticks(x(2009, 1, 1), x(2009, 6, 30), 10.0, Some(x(2008, 9, 15)));
        assert_eq!(plain, anchored);
    }

    #[test]
    fn inverted_range_has_no_ticks() {
        let (ticks, _) = date_ticks(x(2010, 1, 1), x(2009, 1, 1), 10.0);
        assert!(ticks.is_empty());
    }
}
