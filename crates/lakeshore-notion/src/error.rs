//! Error types for Notion integration.

use lakeshore_store::{ErrorStatus, StoreError, StoreErrorKind};

/// Backend tag attached to converted [`StoreError`]s.
pub(crate) const BACKEND: &str = "Notion";

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (Notion error object as JSON).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl NotionError {
    /// Convert into a backend-neutral [`StoreError`] for `target`.
    #[must_use]
    pub fn into_store_error(self, target: &str) -> StoreError {
        let base = match &self {
            Self::HttpRequest(ureq::Error::Timeout(_)) => {
                StoreError::new(StoreErrorKind::Timeout).with_status(ErrorStatus::Temporary)
            }
            Self::HttpRequest(ureq::Error::Io(_)) => {
                StoreError::new(StoreErrorKind::Unavailable).with_status(ErrorStatus::Temporary)
            }
            Self::HttpRequest(_) => StoreError::new(StoreErrorKind::Other),
            Self::HttpResponse { status, .. } => StoreError::from_http_status(*status)
                .unwrap_or_else(|| StoreError::new(StoreErrorKind::Other)),
            Self::Json(_) => StoreError::new(StoreErrorKind::Decode),
        };
        base.with_target(target)
            .with_backend(BACKEND)
            .with_source(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_http_response_maps_status() {
        let err = NotionError::HttpResponse {
            status: 401,
            body: r#"{"object":"error","code":"unauthorized"}"#.to_owned(),
        }
        .into_store_error("db-cats");

        assert_eq!(err.kind, StoreErrorKind::Unauthorized);
        assert_eq!(err.target.as_deref(), Some("db-cats"));
        assert_eq!(err.backend, Some("Notion"));
        assert!(err.downcast_source::<NotionError>().is_some());
    }

    #[test]
    fn test_rate_limited_is_persistent() {
        let err = NotionError::HttpResponse {
            status: 429,
            body: String::new(),
        }
        .into_store_error("page-1");

        assert_eq!(err.kind, StoreErrorKind::RateLimited);
        assert_eq!(err.status, ErrorStatus::Persistent);
    }

    #[test]
    fn test_json_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = NotionError::Json(json_err).into_store_error("db-blog");

        assert_eq!(err.kind, StoreErrorKind::Decode);
        assert!(err.to_string().starts_with("[Notion] Decode error: JSON error"));
    }

    #[test]
    fn test_display_http_response() {
        let err = NotionError::HttpResponse {
            status: 404,
            body: "missing".to_owned(),
        };
        assert_eq!(err.to_string(), "HTTP error: 404 - missing");
    }
}
