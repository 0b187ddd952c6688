//! Lock source that downloads the dependency lock with a single GET.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::LockSource;

#[derive(Debug, Clone)]
pub struct HttpLockSource {
    client: Client,
}

impl HttpLockSource {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl LockSource for HttpLockSource {
    fn fetch(&self, location: &str) -> Result<String, AppError> {
        let fetch_error = |details: String| AppError::LockFetch {
            location: location.to_string(),
            details,
        };

        let url = Url::parse(location).map_err(|e| fetch_error(format!("invalid URL: {}", e)))?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP status {}", status.as_u16())));
        }

        response.text().map_err(|e| fetch_error(format!("Failed to read response body: {}", e)))
    }
}
