use std::sync::LazyLock;

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub window_title: String,
    pub header_title: String,
    pub header_subtitle: String,

    // --- Loading / Error screens ---
    pub loading: String,
    pub error_prefix: String,
    pub error_fetch_failed: String,

    // --- PLOT LABELS ---
    pub plot_id: String,
    pub plot_y_axis: String,
    pub plot_x_axis: String,
    pub series_historical: String,
    pub series_simulated: String,

    // --- Event list ---
    pub events_heading: String,
    pub events_empty: String,

    pub label_skipped_entries: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Change Point Dashboard".to_string(),
    window_title: "Birhan Energies - Brent Oil Change Points".to_string(),
    header_title: "Birhan Energies: Brent Oil Price Analysis".to_string(),
    header_subtitle: "Change Point Dashboard".to_string(),

    loading: "Loading Analysis Data...".to_string(),
    error_prefix: "Error:".to_string(),
    error_fetch_failed: "Failed to fetch data from the server. Is the backend running?"
        .to_string(),

    plot_id: "brent_price_plot".to_string(),
    plot_y_axis: "Price (USD)".to_string(),
    plot_x_axis: "Date".to_string(),
    series_historical: "Brent Price (Historical)".to_string(),
    series_simulated: "Simulated Price".to_string(),

    events_heading: "Key Event Analysis".to_string(),
    events_empty: "No change points in this analysis.".to_string(),

    label_skipped_entries: "entries with unreadable dates were not plotted".to_string(),
});
