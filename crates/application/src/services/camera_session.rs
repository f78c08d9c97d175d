//! Camera session - Binds preview and capture outputs to the device camera

use std::{fmt, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CameraPort, ScreenPort},
};

/// Service owning the bound camera session
pub struct CameraSession {
    camera: Arc<dyn CameraPort>,
    screen: Arc<dyn ScreenPort>,
}

impl fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraSession").finish_non_exhaustive()
    }
}

impl CameraSession {
    /// Create a new camera session service
    pub fn new(camera: Arc<dyn CameraPort>, screen: Arc<dyn ScreenPort>) -> Self {
        Self { camera, screen }
    }

    /// Bind the live preview and still-capture outputs
    ///
    /// The port releases any previously bound session before rebinding. On
    /// failure the user is notified and no session is active; there is no
    /// retry.
    #[instrument(skip(self))]
    pub async fn start(&self) -> Result<(), ApplicationError> {
        match self.camera.bind().await {
            Ok(()) => {
                info!("Camera session bound");
                Ok(())
            },
            Err(e) => {
                warn!(error = %e, "Camera session bind failed");
                if let Err(notify_err) = self
                    .screen
                    .notify("Camera failed to start".to_string())
                    .await
                {
                    warn!(error = %notify_err, "Failed to show camera start notice");
                }
                Err(e)
            },
        }
    }

    /// Release the camera session and its background resources
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ApplicationError> {
        self.camera.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockCameraPort, MockScreenPort};

    #[tokio::test]
    async fn start_binds_session() {
        let mut camera = MockCameraPort::new();
        camera.expect_bind().times(1).returning(|| Ok(()));

        let mut screen = MockScreenPort::new();
        screen.expect_notify().times(0);

        let session = CameraSession::new(Arc::new(camera), Arc::new(screen));
        session.start().await.unwrap();
    }

    #[tokio::test]
    async fn bind_failure_notifies_and_propagates() {
        let mut camera = MockCameraPort::new();
        camera
            .expect_bind()
            .times(1)
            .returning(|| Err(ApplicationError::Camera("provider unavailable".to_string())));

        let mut screen = MockScreenPort::new();
        screen
            .expect_notify()
            .times(1)
            .withf(|message| message == "Camera failed to start")
            .returning(|_| Ok(()));

        let session = CameraSession::new(Arc::new(camera), Arc::new(screen));
        let result = session.start().await;

        assert!(matches!(result, Err(ApplicationError::Camera(_))));
    }

    #[tokio::test]
    async fn shutdown_releases_camera() {
        let mut camera = MockCameraPort::new();
        camera.expect_shutdown().times(1).returning(|| Ok(()));

        let screen = MockScreenPort::new();

        let session = CameraSession::new(Arc::new(camera), Arc::new(screen));
        session.shutdown().await.unwrap();
    }
}
