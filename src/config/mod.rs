//! Configuration module for the dashboard.

mod endpoint;
mod settings;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use endpoint::{ENDPOINT, EndpointConfig};
pub use plot::{PLOT_CONFIG, PlotConfig};
pub use settings::{DashboardSettings, SourceSelection};
