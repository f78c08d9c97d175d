//! Announcer adapter - Implements AnnouncerPort using ai_speech

use std::sync::Arc;

use ai_speech::{EspeakProvider, SpeechConfig, SpeechEngine, SpeechError};
use application::{error::ApplicationError, ports::AnnouncerPort};
use async_trait::async_trait;
use tracing::instrument;

/// Adapter for speech announcers
pub struct AnnouncerAdapter {
    engine: Arc<dyn SpeechEngine>,
}

impl std::fmt::Debug for AnnouncerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnouncerAdapter")
            .field("voice", &self.engine.voice())
            .finish_non_exhaustive()
    }
}

impl AnnouncerAdapter {
    /// Create an adapter around any speech engine
    #[must_use]
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self { engine }
    }

    /// Create an adapter using the espeak-ng provider
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = EspeakProvider::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Convert ai_speech error to application error
    fn map_error(e: SpeechError) -> ApplicationError {
        match e {
            SpeechError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::Speech(other.to_string()),
        }
    }
}

#[async_trait]
impl AnnouncerPort for AnnouncerAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn announce(&self, text: String) -> Result<(), ApplicationError> {
        self.engine.speak(&text).await.map_err(Self::map_error)
    }

    async fn stop(&self) -> Result<(), ApplicationError> {
        self.engine.stop().await.map_err(Self::map_error)
    }

    async fn shutdown(&self) -> Result<(), ApplicationError> {
        self.engine.shutdown().await.map_err(Self::map_error)
    }

    async fn is_available(&self) -> bool {
        self.engine.is_available().await
    }
}
