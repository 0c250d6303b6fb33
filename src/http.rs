//! JSON-oriented helpers over the [`HttpClient`] port.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::ports::http::{HttpClient, HttpRequest, HttpResponse};

const JSON: &str = "application/json";

/// Sends a request with the given method, headers, optional body and timeout.
///
/// # Errors
///
/// Returns [`crate::Error::Http`] on transport failure or timeout.
pub async fn request(
    client: &dyn HttpClient,
    method: &str,
    url: &str,
    headers: BTreeMap<String, String>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
) -> Result<HttpResponse> {
    let request =
        HttpRequest { method: method.to_string(), url: url.to_string(), headers, body, timeout };
    client.send(request).await
}

/// `GET`s `url` with `Accept: application/json` added to `headers`.
///
/// # Errors
///
/// Returns [`crate::Error::Http`] on transport failure or timeout.
pub async fn get_json(
    client: &dyn HttpClient,
    url: &str,
    mut headers: BTreeMap<String, String>,
) -> Result<HttpResponse> {
    headers.insert("Accept".to_string(), JSON.to_string());
    request(client, "GET", url, headers, None, None).await
}

/// `POST`s `body` encoded as JSON, with JSON `Content-Type` and `Accept` headers.
///
/// # Errors
///
/// Returns [`crate::Error::Encode`] if `body` cannot be serialized and
/// [`crate::Error::Http`] on transport failure or timeout.
pub async fn post_json<T: Serialize + ?Sized>(
    client: &dyn HttpClient,
    url: &str,
    mut headers: BTreeMap<String, String>,
    body: &T,
    timeout: Option<Duration>,
) -> Result<HttpResponse> {
    let encoded = serde_json::to_vec(body)?;
    headers.insert("Content-Type".to_string(), JSON.to_string());
    headers.insert("Accept".to_string(), JSON.to_string());
    request(client, "POST", url, headers, Some(encoded), timeout).await
}
