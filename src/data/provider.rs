use async_trait::async_trait;
use reqwest::Client;

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::config::SourceSelection;
use crate::data::FetchError;
use crate::domain::AnalysisResult;

/// Abstract interface for loading the precomputed analysis.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AnalysisSource {
    async fn fetch(&self) -> Result<AnalysisResult, FetchError>;

    /// Short human description for log lines (e.g. "GET http://...").
    fn describe(&self) -> String;
}

#[cfg(not(target_arch = "wasm32"))]
pub type BoxedSource = Box<dyn AnalysisSource + Send + Sync>;

#[cfg(target_arch = "wasm32")]
pub type BoxedSource = Box<dyn AnalysisSource>;

/// Plain GET against the backend. No headers, no retry, no timeout.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AnalysisSource for HttpSource {
    async fn fetch(&self) -> Result<AnalysisResult, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(AnalysisResult::from_json_slice(&body)?)
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

/// Reads the results file the backend would otherwise serve.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl AnalysisSource for FileSource {
    async fn fetch(&self) -> Result<AnalysisResult, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(AnalysisResult::from_json_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

pub fn build_source(selection: &SourceSelection) -> BoxedSource {
    match selection {
        SourceSelection::Http { url } => Box::new(HttpSource::new(url.clone())),
        #[cfg(not(target_arch = "wasm32"))]
        SourceSelection::File { path } => Box::new(FileSource::new(path.clone())),
        #[cfg(target_arch = "wasm32")]
        SourceSelection::File { path } => {
            log::warn!(
                "No filesystem in the browser, ignoring {} and using the backend",
                path.display()
            );
            Box::new(HttpSource::new(crate::config::ENDPOINT.analysis_url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    const BODY: &str = r#"{"price_data":[{"date":"2008-09-15","price":100.456,"type":"Historical"}],"change_points":[]}"#;

    /// Serve exactly one canned HTTP response on a random local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/api/data")
    }

    #[tokio::test]
    async fn http_source_decodes_success_body() {
        let url = serve_once("HTTP/1.1 200 OK", BODY);
        let result = HttpSource::new(url).fetch().await.unwrap();
        assert_eq!(result.price_data.len(), 1);
        assert!(result.change_points.is_empty());
    }

    #[tokio::test]
    async fn http_source_rejects_non_2xx() {
        let url = serve_once("HTTP/1.1 404 Not Found", r#"{"error":"Analysis results file not found."}"#);
        let err = HttpSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn http_source_reports_decode_failure() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>not json</html>");
        let err = HttpSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn http_source_reports_connection_refused() {
        // Grab a free port, then close it again so nothing is listening.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = HttpSource::new(format!("http://127.0.0.1:{port}/api/data"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn file_source_reads_results_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis_results.json");
        std::fs::write(&path, BODY).unwrap();

        let source = FileSource::new(&path);
        assert!(source.describe().contains("analysis_results.json"));
        let result = source.fetch().await.unwrap();
        assert_eq!(result.price_data[0].price, 100.456);
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("absent.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn default_selection_targets_local_backend() {
        let source = build_source(&SourceSelection::default());
        assert_eq!(source.describe(), "GET http://127.0.0.1:5000/api/data");
    }
}
