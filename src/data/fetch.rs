// The one-shot analysis fetch, started once when the app is constructed

use eframe::egui::Context;
use poll_promise::Promise;

use crate::data::{AnalysisSource, BoxedSource, FetchError};
use crate::domain::AnalysisResult;
use crate::utils::{AppInstant, format_duration};

#[cfg(not(target_arch = "wasm32"))]
use {crate::config::ENDPOINT, tokio::runtime::Runtime};

pub type FetchOutcome = Result<AnalysisResult, FetchError>;

/// Run the source once and log what happened. Failure detail stops here: callers only
/// learn *that* it failed.
pub async fn fetch_analysis(source: &dyn AnalysisSource) -> FetchOutcome {
    let start = AppInstant::now();
    let outcome = source.fetch().await;
    let elapsed = format_duration(start.elapsed().as_millis());

    match &outcome {
        Ok(result) => log::info!(
            "Loaded {} price points ({} simulated) and {} change points via {} in {}",
            result.price_data.len(),
            result.simulated_count(),
            result.change_points.len(),
            source.describe(),
            elapsed,
        ),
        Err(e) => log::error!(
            "Analysis fetch via {} failed after {}: {}",
            source.describe(),
            elapsed,
            e
        ),
    }
    outcome
}

/// Kick off the fetch in the background. `repaint` is poked when the result lands so the
/// UI wakes up without polling on a timer.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_fetch(source: BoxedSource, repaint: Option<Context>) -> Promise<FetchOutcome> {
    Promise::spawn_thread(ENDPOINT.fetch_thread_name, move || {
        let outcome = match Runtime::new() {
            Ok(rt) => rt.block_on(fetch_analysis(source.as_ref())),
            Err(e) => {
                log::error!("Could not create tokio runtime for analysis fetch: {}", e);
                Err(FetchError::Runtime(e))
            }
        };
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
        outcome
    })
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_fetch(source: BoxedSource, repaint: Option<Context>) -> Promise<FetchOutcome> {
    Promise::spawn_local(async move {
        let outcome = fetch_analysis(source.as_ref()).await;
        if let Some(ctx) = repaint {
            ctx.request_repaint();
        }
        outcome
    })
}
