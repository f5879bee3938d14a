use anyhow::anyhow;

/// One operation: fetch the next pending command from the source.
///
/// The returned string is the raw response body; decoding it is the caller's
/// concern. Transport faults (refused, timeout, non-2xx) are errors.
pub trait CommandSource: Send + Sync {
    fn fetch_next(&self) -> anyhow::Result<String>;
}

/// Command source over HTTP GET against a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CommandSource for HttpSource {
    fn fetch_next(&self) -> anyhow::Result<String> {
        let body = ureq::get(&self.endpoint)
            .call()
            .map_err(|e| anyhow!("fetch from {} failed: {}", self.endpoint, e))?
            .into_string()?;
        Ok(body)
    }
}
