use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

/// Geographic coordinate in decimal degrees.
///
/// Used both for the immutable initial map viewport center and for the
/// user-placed pin. Defaults to (0,0) until the geolocation probe resolves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Lifecycle of an asynchronous fetch slot.
///
/// Every external read (regions, sub-regions, catalog) is tracked through one
/// of these so the front-end can distinguish "still loading" from "failed"
/// from "loaded but empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    #[allow(dead_code)]
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Failure reason, if the fetch failed
    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_state_from_result() {
        let ok: FetchState<Vec<String>> = FetchState::from_result(Ok(vec!["SP".to_string()]));
        assert!(ok.is_ready());
        assert_eq!(ok.value().map(|v| v.len()), Some(1));

        let err: FetchState<Vec<String>> = FetchState::from_result(Err(
            AppError::ExternalServiceError("connection refused".to_string()),
        ));
        assert!(!err.is_ready());
        assert_eq!(
            err.failure(),
            Some("External service error: connection refused")
        );
    }

    #[test]
    fn test_fetch_state_defaults_to_pending() {
        let state: FetchState<Vec<String>> = FetchState::default();
        assert_eq!(state, FetchState::Pending);
        assert!(state.value().is_none());
        assert!(state.failure().is_none());
    }
}
