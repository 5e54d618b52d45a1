//! Config load state
//!
//! Every page loads its data when it is rendered. A load either completes
//! with data or fails; failures are logged here and never reach the caller
//! as errors.

use serde::Serialize;

use crate::error::ConfigError;

/// Status reported in JSON views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Tagged result of a config load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed { reason: String },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Convert a load result, logging the failure.
    ///
    /// `what` names the data set in the log line ("catálogo", "bundles").
    pub fn from_result(what: &str, result: Result<T, ConfigError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(e) => {
                tracing::error!("erro ao carregar {}: {}", what, e);
                LoadState::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Ready(_) => LoadStatus::Ready,
            LoadState::Failed { .. } => LoadStatus::Failed,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Loaded data, or the empty value while loading or after a failure
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            LoadState::Ready(data) => data,
            _ => T::default(),
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded items; empty while loading or after a failure
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_exposes_items() {
        let state = LoadState::from_result("catálogo", Ok(vec![1, 2, 3]));
        assert_eq!(state.status(), LoadStatus::Ready);
        assert_eq!(state.items(), &[1, 2, 3]);
        assert!(state.failure().is_none());
    }

    #[test]
    fn failure_becomes_empty_list() {
        let state: LoadState<Vec<u8>> = LoadState::from_result(
            "catálogo",
            Err(ConfigError::Deserialization("expected value".to_string())),
        );
        assert_eq!(state.status(), LoadStatus::Failed);
        assert!(state.items().is_empty());
        assert_eq!(
            state.failure(),
            Some("Deserialization error: expected value")
        );
    }

    #[test]
    fn default_is_loading() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert_eq!(state.status(), LoadStatus::Loading);
        assert!(state.items().is_empty());
    }

    #[test]
    fn unwrap_or_default_drops_the_tag() {
        let failed: LoadState<Vec<u8>> = LoadState::Failed {
            reason: "x".to_string(),
        };
        assert!(failed.unwrap_or_default().is_empty());
        assert_eq!(LoadState::Ready(vec![1]).unwrap_or_default(), vec![1]);
    }
}
