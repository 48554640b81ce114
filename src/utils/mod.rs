mod time_utils;

pub use time_utils::{TimeUtils, format_duration, format_heading_date, format_x_tick};

/// Wall-clock instant that also works on wasm32.
pub type AppInstant = web_time::Instant;

/// "$100.46"
pub fn format_usd(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_uses_two_decimals() {
        assert_eq!(format_usd(100.456), "$100.46");
        assert_eq!(format_usd(36.5), "$36.50");
    }
}
