//! Content store trait and error types.
//!
//! Provides the core [`ContentStore`] trait for querying collections and
//! retrieving single records, along with [`StoreError`] for unified error
//! handling across backends.

use crate::filter::Filter;
use crate::record::Record;

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Record or collection does not exist.
    NotFound,
    /// Credentials missing, invalid, or lacking access.
    Unauthorized,
    /// Request rejected as malformed (bad filter, bad id).
    InvalidRequest,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Too many requests.
    RateLimited,
    /// Operation timed out.
    Timeout,
    /// Response body could not be decoded.
    Decode,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// Don't retry (auth error, not found, invalid request).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (rate limited, service unavailable).
    Persistent,
}

/// Store error with semantic kind and backend-specific source.
///
/// This layer never retries; [`ErrorStatus`] is carried for callers and logs.
#[derive(Debug)]
pub struct StoreError {
    /// Semantic error category.
    pub kind: StoreErrorKind,
    /// Retry guidance.
    pub status: ErrorStatus,
    /// Collection or record identifier the request targeted.
    pub target: Option<String>,
    /// Backend identifier (e.g., "Notion", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a new store error.
    #[must_use]
    pub fn new(kind: StoreErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            target: None,
            backend: None,
            source: None,
        }
    }

    /// Attach the targeted collection or record id.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error for a target.
    #[must_use]
    pub fn not_found(target: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::NotFound).with_target(target)
    }

    /// Map an HTTP status code to a store error.
    ///
    /// Returns `None` for non-error statuses.
    #[must_use]
    pub fn from_http_status(status: u16) -> Option<Self> {
        let (kind, retry) = match status {
            0..=399 => return None,
            401 | 403 => (StoreErrorKind::Unauthorized, ErrorStatus::Permanent),
            404 => (StoreErrorKind::NotFound, ErrorStatus::Permanent),
            400 | 409 | 422 => (StoreErrorKind::InvalidRequest, ErrorStatus::Permanent),
            408 => (StoreErrorKind::Timeout, ErrorStatus::Temporary),
            429 => (StoreErrorKind::RateLimited, ErrorStatus::Persistent),
            500..=599 => (StoreErrorKind::Unavailable, ErrorStatus::Persistent),
            _ => (StoreErrorKind::Other, ErrorStatus::Permanent),
        };
        Some(Self::new(kind).with_status(retry))
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (target: abc)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StoreErrorKind::NotFound => "Not found",
            StoreErrorKind::Unauthorized => "Unauthorized",
            StoreErrorKind::InvalidRequest => "Invalid request",
            StoreErrorKind::Unavailable => "Unavailable",
            StoreErrorKind::RateLimited => "Rate limited",
            StoreErrorKind::Timeout => "Timeout",
            StoreErrorKind::Decode => "Decode error",
            StoreErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(target) = &self.target {
            write!(f, " (target: {target})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only access to the external content store.
///
/// Implementations are blocking and shared across threads; independent
/// requests may be issued concurrently from a thread pool.
pub trait ContentStore: Send + Sync {
    /// Query a collection, returning every record matching `filter` in the
    /// store's natural order.
    ///
    /// Only records from a single response are returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, authorization or decoding failure.
    fn query(&self, collection_id: &str, filter: &Filter) -> Result<Vec<Record>, StoreError>;

    /// Retrieve one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] with [`StoreErrorKind::NotFound`] if no record
    /// has this id, or another kind on request failure.
    fn retrieve(&self, record_id: &str) -> Result<Record, StoreError>;
}
