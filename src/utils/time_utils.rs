use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    /// "Sep 2008"
    pub const TICK_FORMAT: &str = "%b %Y";
    /// "September 2008"
    pub const HEADING_FORMAT: &str = "%B %Y";

    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Parse the date strings the backend emits. Accepts plain dates (ISO or US order),
    /// year-month (`2008-09`, placed on the 1st), RFC 3339 timestamps and naive date-times
    /// (pandas likes to emit `2008-09-15T00:00:00`).
    ///
    /// Anything else has no position on a time axis and is left off the chart.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let s = raw.trim();
        if let Some(date) = Self::DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        if let Some(dt) = Self::DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Some(dt.date());
        }
        Self::parse_year_month(s)
    }

    // chrono won't build a NaiveDate without a day, so pin it to the 1st
    fn parse_year_month(s: &str) -> Option<NaiveDate> {
        let (year, month) = s.split_once('-')?;
        if year.len() != 4 || !(1..=2).contains(&month.len()) {
            return None;
        }
        NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
    }

    /// Day number used as the chart's x coordinate.
    pub fn date_to_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    pub fn x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() || x.abs() > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
    }
}

/// Full month name + full year, as used in event card headings.
pub fn format_heading_date(raw: &str) -> String {
    TimeUtils::parse_date(raw)
        .map(|d| d.format(TimeUtils::HEADING_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_x_tick(x: f64) -> String {
    TimeUtils::x_to_date(x)
        .map(|d| d.format(TimeUtils::TICK_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn format_duration(ms: u128) -> String {
    if ms < 1000 {
        return format!("{}ms", ms);
    }
    format!("{:.1}s", ms as f64 / 1000.0)
}
