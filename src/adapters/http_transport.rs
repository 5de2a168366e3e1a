use {
    crate::domain::{
        error::ConsoleError,
        transport::{Transport, TransportFuture},
    },
    reqwest::{Method, Url, header},
    serde_json::Value,
    std::time::Duration,
};

/// Upper bound on one request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `Transport` over HTTP(S) against one console host.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ConsoleError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ConsoleError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConsoleError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConsoleError::Transport(format!("http client: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Absolute link URLs are kept; paths are joined onto the base URL.
    pub fn resolve(&self, url: &str) -> Result<Url, ConsoleError> {
        self.base_url
            .join(url)
            .map_err(|e| ConsoleError::InvalidUrl(format!("{url}: {e}")))
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> TransportFuture<'_> {
        let url = url.to_string();
        Box::pin(async move { self.send(Method::GET, &url, None).await })
    }

    fn put(&self, url: &str, body: Value) -> TransportFuture<'_> {
        let url = url.to_string();
        Box::pin(async move { self.send(Method::PUT, &url, Some(body)).await })
    }
}

impl HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value, ConsoleError> {
        let target = self.resolve(url)?;
        tracing::debug!(%method, url = %target, "sending request");

        let mut request = self
            .client
            .request(method, target.clone())
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ConsoleError::Transport(format!("{target}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %target, status = status.as_u16(), "request failed");
            return Err(ConsoleError::Status {
                url: target.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ConsoleError::Transport(format!("{target}: {e}")))?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
