//! `commons get|post` commands.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::context::ServiceContext;
use crate::http;
use crate::ports::HttpResponse;

/// Execute the `get` command, yielding the response body.
///
/// # Errors
///
/// Returns an error string for malformed headers, transport failures and
/// non-2xx responses.
pub fn get(ctx: &ServiceContext, url: &str, headers: &[String]) -> Result<String, String> {
    let headers = parse_headers(headers)?;
    let response = block_on(http::get_json(ctx.http.as_ref(), url, headers))?;
    into_body(response)
}

/// Execute the `post` command, yielding the response body.
///
/// # Errors
///
/// Returns an error string if `data` is not JSON, for malformed headers,
/// transport failures and non-2xx responses.
pub fn post(
    ctx: &ServiceContext,
    url: &str,
    data: &str,
    headers: &[String],
    timeout_ms: Option<u64>,
) -> Result<String, String> {
    let body: serde_json::Value =
        serde_json::from_str(data).map_err(|e| format!("--data is not valid JSON: {e}"))?;
    let headers = parse_headers(headers)?;
    let timeout = timeout_ms.map(Duration::from_millis);
    let response = block_on(http::post_json(ctx.http.as_ref(), url, headers, &body, timeout))?;
    into_body(response)
}

/// Parses `Name: value` pairs.
fn parse_headers(raw: &[String]) -> Result<BTreeMap<String, String>, String> {
    raw.iter()
        .map(|h| {
            let (name, value) =
                h.split_once(':').ok_or_else(|| format!("header {h:?} is not `Name: value`"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(format!("header {h:?} has an empty name"));
            }
            Ok((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn block_on<F>(future: F) -> Result<HttpResponse, String>
where
    F: std::future::Future<Output = crate::Result<HttpResponse>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    runtime.block_on(future).map_err(|e| e.to_string())
}

fn into_body(response: HttpResponse) -> Result<String, String> {
    let body = String::from_utf8_lossy(&response.body).into_owned();
    if response.is_success() {
        Ok(body)
    } else {
        Err(format!("server responded with status {}: {body}", response.status))
    }
}
