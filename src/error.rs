use thiserror::Error;

/// Failures at construction time. Operations on a live stack never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("a navigator needs at least one route: pass an initial route or a non-empty initial route stack")]
    EmptyRouteStack,
}
