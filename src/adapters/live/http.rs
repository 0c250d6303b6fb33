//! Live adapter for the `HttpClient` port using reqwest.

use std::time::Duration;

use reqwest::{Client, Method};

use crate::config::DEFAULT_HTTP_TIMEOUT;
use crate::error::Error;
use crate::ports::http::{HttpClient, HttpFuture, HttpRequest, HttpResponse};

/// Live HTTP client with a default per-request timeout.
pub struct LiveHttpClient {
    client: Client,
    default_timeout: Duration,
}

impl LiveHttpClient {
    /// Creates a client that applies `default_timeout` to requests without their own.
    #[must_use]
    pub fn new(default_timeout: Duration) -> Self {
        Self { client: Client::new(), default_timeout }
    }

    /// The timeout used when a request does not set one.
    #[must_use]
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }
}

impl Default for LiveHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_HTTP_TIMEOUT)
    }
}

impl HttpClient for LiveHttpClient {
    fn send(&self, request: HttpRequest) -> HttpFuture<'_> {
        Box::pin(async move {
            let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
                .map_err(|e| Error::http(format!("invalid HTTP method {:?}: {e}", request.method)))?;
            let timeout = request.timeout.unwrap_or(self.default_timeout);

            let mut builder = self.client.request(method.clone(), &request.url).timeout(timeout);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                tracing::debug!(%method, url = %request.url, error = %e, "HTTP request failed");
                Error::http(e)
            })?;

            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(Error::http)?.to_vec();
            tracing::debug!(%method, url = %request.url, status, bytes = body.len(), "HTTP response");

            Ok(HttpResponse { status, body })
        })
    }
}
