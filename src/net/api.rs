//! HTTP access to the tensors endpoint.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Native builds: a stub returning [`FetchError::Unavailable`] so state and
//! view code compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! [`request_page`] keeps transport, status, and decode failures apart for
//! logging. [`fetch_page`] is what the panel calls: it logs the error and
//! collapses it to `None`, which the panel renders as an empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tensors::{PageError, PageQuery, TensorPage};

/// Failure of a single page request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("tensors request failed: {0}")]
    Status(u16),
    #[error(transparent)]
    Decode(#[from] PageError),
    #[error("tensors endpoint is only reachable from the browser")]
    Unavailable,
}

/// Append an encoded query string to `endpoint`.
#[cfg(any(feature = "csr", test))]
fn page_url(endpoint: &str, encoded_query: &str) -> String {
    if encoded_query.is_empty() {
        return endpoint.to_owned();
    }
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}{encoded_query}")
}

/// `GET <endpoint>?log_dir=..&cursor=..&limit=..&noKernel=..&noBias=..`.
///
/// # Errors
///
/// Returns [`FetchError`] on transport failure, a non-success status, or a
/// body that is not a tensors page.
pub async fn request_page(endpoint: &str, query: &PageQuery) -> Result<TensorPage, FetchError> {
    #[cfg(feature = "csr")]
    {
        let url = page_url(endpoint, &encode_query(query)?);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(TensorPage::from_json(&body)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, query);
        Err(FetchError::Unavailable)
    }
}

/// Form-encode the query with the browser's `URLSearchParams`.
#[cfg(feature = "csr")]
fn encode_query(query: &PageQuery) -> Result<String, FetchError> {
    let params = web_sys::UrlSearchParams::new().map_err(|e| FetchError::Network(format!("{e:?}")))?;
    for (key, value) in query.params() {
        params.append(key, &value);
    }
    Ok(String::from(params.to_string()))
}

/// Fetch one page, logging and collapsing any failure to `None`.
pub async fn fetch_page(endpoint: &str, query: &PageQuery) -> Option<TensorPage> {
    match request_page(endpoint, query).await {
        Ok(page) => {
            log::debug!("tensors page: cursor={} layers={}", query.cursor, page.layers.len());
            for skipped in &page.skipped {
                log::warn!("tensors page cursor={}: {skipped}", query.cursor);
            }
            Some(page)
        }
        Err(e) => {
            log::warn!("tensors fetch failed: cursor={} limit={}: {e}", query.cursor, query.limit);
            None
        }
    }
}
