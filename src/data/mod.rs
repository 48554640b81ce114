mod error;
mod fetch;
mod provider;

pub use {
    error::FetchError,
    fetch::{FetchOutcome, fetch_analysis, spawn_fetch},
    provider::{AnalysisSource, BoxedSource, HttpSource, build_source},
};

#[cfg(not(target_arch = "wasm32"))]
pub use provider::FileSource;
