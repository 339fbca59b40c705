use common::scoring::PassThreshold;
use std::env;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Everything the results client needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the API, without a trailing slash.
    pub base_url: String,
    pub pass_threshold: PassThreshold,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            pass_threshold: PassThreshold::default(),
        }
    }

    pub fn with_pass_threshold(mut self, threshold: PassThreshold) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Reads `RESULTS_API_URL` and `PASS_THRESHOLD` (after loading `.env`),
    /// falling back to defaults for anything missing or malformed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("RESULTS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let threshold = match env::var("PASS_THRESHOLD") {
            Ok(raw) => match raw.trim().parse::<u32>() {
                Ok(value) => PassThreshold::new(value),
                Err(_) => {
                    log::warn!("Ignoring invalid PASS_THRESHOLD '{raw}'");
                    PassThreshold::default()
                }
            },
            Err(_) => PassThreshold::default(),
        };

        Self::new(base_url).with_pass_threshold(threshold)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
