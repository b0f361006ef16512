use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::DataSource;
use crate::error::TaxofetchError;

/// Fetches the raw text of one `assembly_summary.txt` for a (source,
/// group) pair. The loader treats any error as "that source is empty".
pub trait SummaryClient: Send + Sync {
    fn fetch_summary(&self, source: DataSource, group: &str) -> Result<String, TaxofetchError>;
}

#[derive(Clone)]
pub struct NcbiHttpClient {
    client: Client,
    base_url: String,
}

impl NcbiHttpClient {
    pub fn new() -> Result<Self, TaxofetchError> {
        Self::with_base_url("https://ftp.ncbi.nlm.nih.gov/genomes".to_string())
    }

    pub fn with_base_url(base_url: String) -> Result<Self, TaxofetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("taxofetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| TaxofetchError::SummaryHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| TaxofetchError::SummaryHttp(err.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn send_with_retries<F>(
        &self,
        mut make_req: F,
    ) -> Result<reqwest::blocking::Response, TaxofetchError>
    where
        F: FnMut() -> reqwest::blocking::RequestBuilder,
    {
        const MAX_RETRIES: usize = 3;
        const BASE_DELAY_MS: u64 = 200;
        let mut attempt = 0usize;
        loop {
            let response = make_req().send();
            match response {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < MAX_RETRIES && is_retryable_status(status) {
                        let delay = BASE_DELAY_MS * (attempt as u64 + 1);
                        thread::sleep(Duration::from_millis(delay));
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(err) => {
                    if attempt < MAX_RETRIES && is_retryable_error(&err) {
                        let delay = BASE_DELAY_MS * (attempt as u64 + 1);
                        thread::sleep(Duration::from_millis(delay));
                        attempt += 1;
                        continue;
                    }
                    return Err(TaxofetchError::SummaryHttp(err.to_string()));
                }
            }
        }
    }
}

impl SummaryClient for NcbiHttpClient {
    fn fetch_summary(&self, source: DataSource, group: &str) -> Result<String, TaxofetchError> {
        let url = format!(
            "{}/{}/{}/assembly_summary.txt",
            self.base_url,
            source.ftp_dir(),
            group
        );
        let response = self.send_with_retries(|| self.client.get(&url))?;
        if !response.status().is_success() {
            return Err(TaxofetchError::SummaryStatus {
                status: response.status().as_u16(),
                url,
            });
        }
        response
            .text()
            .map_err(|err| TaxofetchError::SummaryHttp(err.to_string()))
    }
}

fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

fn is_retryable_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect() || err.is_request()
}
