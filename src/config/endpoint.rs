//! Backend endpoint configuration

pub struct EndpointConfig {
    /// Where the analysis backend serves its precomputed results
    pub analysis_url: &'static str,
    /// File the backend itself serves from. Used by `--payload` when no path is given.
    pub results_file: &'static str,
    /// Worker thread name for the one-shot fetch (native only)
    pub fetch_thread_name: &'static str,
}

pub const ENDPOINT: EndpointConfig = EndpointConfig {
    analysis_url: "http://127.0.0.1:5000/api/data",
    results_file: "analysis_results.json",
    fetch_thread_name: "analysis_fetch",
};
