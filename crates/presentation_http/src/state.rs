//! Application state shared across handlers

use std::sync::Arc;

use ai_vision::DescribeEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Backend that turns images into descriptions
    pub describer: Arc<dyn DescribeEngine>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("describer", &self.describer.endpoint())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state around any describe engine
    #[must_use]
    pub fn new(describer: Arc<dyn DescribeEngine>) -> Self {
        Self { describer }
    }
}
