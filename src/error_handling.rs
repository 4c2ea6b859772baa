//! Error type definitions and transport-error classification.
//!
//! The taxonomy follows the pipeline's propagation policy: input and
//! transport errors are terminal (no analysis is possible without headers),
//! an HTTP error status is not an error here at all (its headers still flow
//! into the extractor), and parse anomalies never become errors — the
//! composite parsers absorb them and surface `unknown` fields instead.

use std::error::Error as StdError;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for URL validation failures.
///
/// All variants are raised before any network I/O.
#[derive(Error, Debug)]
pub enum InvalidUrlError {
    /// The string does not parse as a URL at all.
    #[error("invalid URL '{0}'")]
    Malformed(String),

    /// The URL parses but uses a scheme other than http/https.
    #[error("unsupported scheme '{scheme}' in URL '{url}' (only http and https are supported)")]
    UnsupportedScheme {
        /// The offending scheme
        scheme: String,
        /// The full URL as given
        url: String,
    },

    /// The URL exceeds the maximum accepted length.
    #[error("URL is too long ({length} > {max} characters)")]
    TooLong {
        /// Actual length of the given URL
        length: usize,
        /// Maximum accepted length
        max: usize,
    },
}

/// Error types for directive set construction.
#[derive(Error, Debug)]
pub enum DirectiveSetError {
    /// The same directive name was given more than once.
    ///
    /// Duplicates would be joined into the `Pragma` value twice, and Akamai's
    /// behavior for repeated directives is undefined.
    #[error("duplicate debug directive '{0}'")]
    DuplicateDirective(String),
}

/// Classification of a terminal transport failure.
///
/// Distinguished tags rather than one generic error because the caller's
/// remediation differs: a timeout suggests raising `--timeout-seconds`, a
/// TLS failure points at certificates, a connection failure at DNS or
/// firewalls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request exceeded the configured timeout.
    Timeout,
    /// TLS handshake or certificate verification failed.
    Tls,
    /// The connection could not be established (refused, DNS failure, reset).
    Connection,
    /// Any other transport-level failure.
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Tls => write!(f, "TLS error"),
            TransportErrorKind::Connection => write!(f, "connection error"),
            TransportErrorKind::Other => write!(f, "request error"),
        }
    }
}

/// A terminal transport failure: the request produced no response headers.
///
/// Carried inside [`FetchOutcome::Failure`](crate::fetch::FetchOutcome) and
/// short-circuits the pipeline — no analysis record can be produced.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// The failure classification
    pub kind: TransportErrorKind,
    /// Human-readable detail from the transport layer
    pub message: String,
}

impl TransportError {
    /// Classifies a `reqwest::Error` into a [`TransportError`].
    ///
    /// Timeout and connect failures have dedicated predicates on the reqwest
    /// error; TLS failures do not, so the source chain is searched for
    /// certificate/handshake vocabulary. Anything unrecognized lands in
    /// `Other`.
    pub fn from_reqwest(error: &ReqwestError) -> Self {
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if is_tls_error(error) {
            TransportErrorKind::Tls
        } else if error.is_connect() {
            TransportErrorKind::Connection
        } else {
            TransportErrorKind::Other
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}

/// Walks the error source chain looking for TLS vocabulary.
///
/// reqwest surfaces rustls failures as connect errors whose sources mention
/// certificates or the handshake; that wording is the only classification
/// signal available without depending on rustls error types directly.
fn is_tls_error(error: &ReqwestError) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = source {
        let text = err.to_string().to_lowercase();
        if text.contains("certificate")
            || text.contains("tls")
            || text.contains("ssl")
            || text.contains("handshake")
        {
            return true;
        }
        source = err.source();
    }
    false
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_kind_display() {
        assert_eq!(TransportErrorKind::Timeout.to_string(), "timeout");
        assert_eq!(TransportErrorKind::Tls.to_string(), "TLS error");
        assert_eq!(
            TransportErrorKind::Connection.to_string(),
            "connection error"
        );
        assert_eq!(TransportErrorKind::Other.to_string(), "request error");
    }

    #[test]
    fn test_transport_error_display_includes_kind_and_message() {
        let err = TransportError {
            kind: TransportErrorKind::Timeout,
            message: "deadline elapsed".to_string(),
        };
        assert_eq!(err.to_string(), "timeout: deadline elapsed");
    }

    #[test]
    fn test_invalid_url_error_messages() {
        let err = InvalidUrlError::UnsupportedScheme {
            scheme: "ftp".to_string(),
            url: "ftp://example.com".to_string(),
        };
        assert!(err.to_string().contains("ftp"));

        let err = InvalidUrlError::TooLong {
            length: 3000,
            max: 2048,
        };
        assert!(err.to_string().contains("3000"));
        assert!(err.to_string().contains("2048"));
    }

    #[test]
    fn test_duplicate_directive_message_names_the_directive() {
        let err = DirectiveSetError::DuplicateDirective("akamai-x-cache-on".to_string());
        assert!(err.to_string().contains("akamai-x-cache-on"));
    }
}
