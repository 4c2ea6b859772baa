//! Header fetching: one GET with debug directives attached.
//!
//! The fetcher performs exactly one request and never retries. A retry could
//! land on a different edge server and yield diagnostics that do not describe
//! the response being explained; if a caller wants retries, that is their
//! policy to implement around this module.

mod headers;
mod request;

use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::directives::DirectiveSet;
use crate::error_handling::TransportError;

pub use headers::RawHeaders;

/// The three-way result of a diagnostic fetch.
///
/// The split matters: an HTTP 4xx/5xx still carries diagnosable cache
/// headers and flows into the extractor like a success, whereas a transport
/// failure produced no headers at all and short-circuits the pipeline.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Final status was 2xx/3xx; headers captured.
    Success {
        /// Final HTTP status code
        status: u16,
        /// The raw response headers
        headers: RawHeaders,
    },
    /// Final status was >= 400, but the server responded with valid headers.
    HttpError {
        /// Final HTTP status code
        status: u16,
        /// The raw response headers
        headers: RawHeaders,
    },
    /// The request never produced a response; no headers exist.
    Failure(TransportError),
}

impl FetchOutcome {
    /// Returns the captured headers, if the server responded at all.
    pub fn headers(&self) -> Option<&RawHeaders> {
        match self {
            FetchOutcome::Success { headers, .. } | FetchOutcome::HttpError { headers, .. } => {
                Some(headers)
            }
            FetchOutcome::Failure(_) => None,
        }
    }

    /// Returns the final HTTP status, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchOutcome::Success { status, .. } | FetchOutcome::HttpError { status, .. } => {
                Some(*status)
            }
            FetchOutcome::Failure(_) => None,
        }
    }
}

/// Performs the single diagnostic GET.
///
/// Sends one GET to `url` with the directive set attached via `Pragma`
/// (omitted when the set is empty). Redirects are followed transparently by
/// the client; only the final status and final header set are observed.
///
/// Timeout, connect timeout, User-Agent and redirect policy come from the
/// client built by [`init_client`](crate::initialization::init_client).
pub async fn fetch_edge_headers(
    client: &Client,
    url: &Url,
    directives: &DirectiveSet,
) -> FetchOutcome {
    info!("GET {url} ({} debug directives)", directives.len());

    let builder = request::apply_pragma(client.get(url.clone()), directives);

    match builder.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if response.url() != url {
                debug!("final URL after redirects: {}", response.url());
            }
            let headers = RawHeaders::from_reqwest(response.headers());
            debug!("response {status} with {} headers", headers.len());
            if status >= 400 {
                FetchOutcome::HttpError { status, headers }
            } else {
                FetchOutcome::Success { status, headers }
            }
        }
        Err(error) => FetchOutcome::Failure(TransportError::from_reqwest(&error)),
    }
}
