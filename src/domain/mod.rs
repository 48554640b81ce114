// Domain types for the analysis payload
mod analysis;

pub use analysis::{AnalysisResult, ChangePoint, PriceKind, PricePoint};
