//! Runtime settings resolved from the command line

use std::path::PathBuf;

use crate::config::ENDPOINT;

/// Where the analysis payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    Http { url: String },
    /// Read the results file directly (native only)
    File { path: PathBuf },
}

impl Default for SourceSelection {
    fn default() -> Self {
        Self::Http {
            url: ENDPOINT.analysis_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSettings {
    pub source: SourceSelection,
    /// Print each event name on its reference line. Off by default, matching the
    /// dashboard's original look where the labels were left blank.
    pub annotate_change_points: bool,
}
