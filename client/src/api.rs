use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::view::ResultsView;
use common::results::TestResults;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

/// Error body produced by the API (`{ success, data, message }`).
#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.message)
}

/// Reads test results from the API. One request per call; nothing is cached
/// or retried.
#[derive(Debug, Clone)]
pub struct ResultsClient {
    http: Client,
    base_url: Url,
    config: ClientConfig,
}

impl ResultsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidBaseUrl(config.base_url.clone()))?;

        let http = Client::builder()
            .user_agent(concat!("results-view/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/api/results/test/{test_id}`, with `test_id` percent-encoded as
    /// a single path segment.
    pub fn results_url(&self, test_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "results", "test", test_id]);
        }
        url
    }

    /// `GET /api/results/test/{test_id}`
    pub async fn fetch_test_results(&self, test_id: &str) -> Result<TestResults, ClientError> {
        let url = self.results_url(test_id);
        log::debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::NOT_FOUND {
            let message =
                error_message(&body).unwrap_or_else(|| format!("Test {test_id} not found"));
            return Err(ClientError::NotFound(message));
        }
        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_owned()
            });
            return Err(ClientError::Server { status, message });
        }

        serde_json::from_slice::<TestResults>(&body)
            .map_err(|e| ClientError::UnexpectedPayload(e.to_string()))
    }

    /// Builds a view for `test_id` and settles it with a single fetch.
    ///
    /// Failures are logged and kept in the returned view's `Failed` state.
    pub async fn load_view(&self, test_id: &str) -> ResultsView {
        let mut view = ResultsView::new(test_id, self.config.pass_threshold);
        let outcome = self.fetch_test_results(test_id).await;
        if let Err(err) = &outcome {
            log::error!("Error fetching results for test {test_id}: {err}");
        }
        view.resolve(outcome);
        view
    }
}
