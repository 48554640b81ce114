use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// Whether a price was observed or produced by the model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, AsRefStr,
)]
pub enum PriceKind {
    #[default]
    Historical,
    Simulated,
    /// Anything the backend sends that we don't recognise. Never plotted as simulated.
    #[serde(other)]
    Other,
}

impl PriceKind {
    pub fn is_simulated(self) -> bool {
        matches!(self, Self::Simulated)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// ISO-ish date string, kept exactly as the backend sent it.
    pub date: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: PriceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePoint {
    pub date: String,
    pub event_name: String,
    pub event_description: String,
}

/// The whole payload served by `/api/data`.
/// Nothing is validated: ordering and non-emptiness are the backend's business.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub price_data: Vec<PricePoint>,
    pub change_points: Vec<ChangePoint>,
}

impl AnalysisResult {
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn simulated_count(&self) -> usize {
        self.price_data
            .iter()
            .filter(|p| p.kind.is_simulated())
            .count()
    }
}
