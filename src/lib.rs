// Core modules
pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

pub use app::{App, DashboardState};
pub use config::{DashboardSettings, ENDPOINT, SourceSelection};
pub use domain::{AnalysisResult, ChangePoint, PriceKind, PricePoint};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analysis endpoint to fetch from
    #[arg(long, default_value = ENDPOINT.analysis_url)]
    pub url: String,

    /// Read the analysis from a local results file instead of the backend
    #[arg(long, num_args = 0..=1, default_missing_value = ENDPOINT.results_file)]
    pub payload: Option<PathBuf>,

    /// Label each change point line with its event name
    #[arg(long, default_value_t = false)]
    pub annotate_events: bool,
}

impl Cli {
    pub fn into_settings(self) -> DashboardSettings {
        let source = match self.payload {
            Some(path) => SourceSelection::File { path },
            None if self.url.is_empty() => SourceSelection::default(),
            None => SourceSelection::Http { url: self.url },
        };
        DashboardSettings {
            source,
            annotate_change_points: self.annotate_events,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args.into_settings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fetch_from_local_backend() {
        let settings = Cli::parse_from(["changepoint-dashboard"]).into_settings();
        assert_eq!(
            settings.source,
            SourceSelection::Http {
                url: "http://127.0.0.1:5000/api/data".to_string()
            }
        );
        assert!(!settings.annotate_change_points);
    }

    #[test]
    fn payload_flag_without_path_uses_results_file() {
        let settings = Cli::parse_from(["changepoint-dashboard", "--payload"]).into_settings();
        assert_eq!(
            settings.source,
            SourceSelection::File {
                path: PathBuf::from("analysis_results.json")
            }
        );
    }

    #[test]
    fn url_and_annotation_overrides() {
        let settings = Cli::parse_from([
            "changepoint-dashboard",
            "--url",
            "http://localhost:8080/api/data",
            "--annotate-events",
        ])
        .into_settings();
        assert_eq!(
            settings.source,
            SourceSelection::Http {
                url: "http://localhost:8080/api/data".to_string()
            }
        );
        assert!(settings.annotate_change_points);
    }

    #[test]
    fn default_cli_matches_parsed_defaults_once_resolved() {
        // The wasm build never parses arguments and relies on Cli::default()
        assert_eq!(
            Cli::default().into_settings(),
            Cli::parse_from(["changepoint-dashboard"]).into_settings()
        );
    }
}
