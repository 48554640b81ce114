// src/app/state.rs

use crate::{chart::ChartModel, data::FetchOutcome, domain::AnalysisResult, ui::UI_TEXT};

/// A successfully fetched payload plus its precomputed chart model.
pub struct LoadedDashboard {
    pub analysis: AnalysisResult,
    pub chart: ChartModel,
}

impl LoadedDashboard {
    pub fn new(analysis: AnalysisResult) -> Self {
        let chart = ChartModel::build(&analysis);
        Self { analysis, chart }
    }
}

/// What the window is showing. Exactly one of these at a time.
#[derive(Default)]
pub enum DashboardState {
    Failed(String),
    #[default]
    Loading,
    Loaded(Box<LoadedDashboard>),
}

impl DashboardState {
    /// Error wins over data, data wins over loading.
    pub fn resolve(data: Option<AnalysisResult>, error: Option<String>) -> Self {
        match (error, data) {
            (Some(message), _) => Self::Failed(message),
            (None, None) => Self::Loading,
            (None, Some(analysis)) => Self::Loaded(Box::new(LoadedDashboard::new(analysis))),
        }
    }

    /// Collapse a fetch outcome. Every failure cause maps to the same user-facing message;
    /// the detail was already logged by the fetcher.
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome {
            Ok(analysis) => Self::resolve(Some(analysis), None),
            Err(_) => Self::resolve(None, Some(UI_TEXT.error_fetch_failed.clone())),
        }
    }
}

#[cfg(test)]
impl DashboardState {
    pub(crate) fn loaded(&self) -> Option<&LoadedDashboard> {
        match self {
            Self::Loaded(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub(crate) fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
