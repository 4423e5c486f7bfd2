use std::fmt;

use scrapeboard_core::{PanelId, PanelOutput, RequestToken};

/// What went wrong with a request. `Network`, `HttpStatus` and `Decode` are
/// transport errors; `Backend` is a logical error the service embedded in a
/// 2xx payload (the selector-discover `error` field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    HttpStatus(u16),
    Decode,
    Backend,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network error"),
            ApiErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            ApiErrorKind::Decode => write!(f, "decode error"),
            ApiErrorKind::Backend => write!(f, "backend error"),
        }
    }
}

/// A failed request, with a message fit for the panel's error display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Completion of a dispatched request, echoing the recency token so the core
/// can discard results of superseded requests.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Completed {
        panel: PanelId,
        token: RequestToken,
        result: Result<PanelOutput, ApiError>,
    },
}
