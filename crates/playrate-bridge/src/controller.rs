//! The control-surface client.

use thiserror::Error;

use playrate_core::protocol::{Request, Response};
use playrate_core::speed::{clamp_speed, DEFAULT_SPEED};

use crate::transport::{Transport, TransportError};

/// Why a controller call failed. Transport problems mean the state is
/// unknown; `Rejected` means the authority answered but could not apply the
/// rate to any element.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Remote client of the speed authority.
///
/// Holds no authoritative state of its own: every display value is fetched
/// fresh, so any number of controllers can mutate concurrently without
/// diverging from the page.
pub struct RemoteController<T: Transport> {
    transport: T,
}

impl<T: Transport> RemoteController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the current rate for display.
    ///
    /// Unknown state (transport failure, unintelligible reply) displays as
    /// the default rate. That substitute is display-only; it is never
    /// written back to the authority.
    pub async fn read_speed(&self) -> f64 {
        match self.transport.request(Request::GetSpeed).await {
            Ok(Response::Speed { speed }) => clamp_speed(speed),
            Ok(other) => {
                tracing::debug!(?other, "unexpected reply to a read, displaying default");
                DEFAULT_SPEED
            }
            Err(error) => {
                tracing::debug!(%error, "read failed, displaying default");
                DEFAULT_SPEED
            }
        }
    }

    /// Ask the authority to move the rate by `delta`. Returns the rate the
    /// authority settled on.
    pub async fn request_adjust(&self, delta: f64) -> Result<f64, ControllerError> {
        self.mutate(Request::change(delta)).await
    }

    /// Ask the authority to adopt an absolute rate.
    pub async fn request_set(&self, value: f64) -> Result<f64, ControllerError> {
        self.mutate(Request::set(value)).await
    }

    async fn mutate(&self, request: Request) -> Result<f64, ControllerError> {
        match self.transport.request(request).await? {
            Response::Mutation {
                success: true,
                speed: Some(speed),
                ..
            } => Ok(speed),
            Response::Mutation { error, .. } => Err(ControllerError::Rejected(
                error.unwrap_or_else(|| "rejected without a reason".to_string()),
            )),
            Response::Speed { .. } => Err(ControllerError::Rejected(
                "mutation answered with a bare reading".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{channel, serve};
    use async_trait::async_trait;
    use playrate_core::media::MediaElement;
    use playrate_core::mock::MockVideo;
    use playrate_engine::{MediaRegistry, SpeedAuthority};
    use std::sync::Arc;

    /// Transport that always answers with one canned reply.
    struct ScriptedTransport {
        reply: Response,
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn request(&self, _request: Request) -> Result<Response, TransportError> {
            Ok(self.reply.clone())
        }
    }

    fn live_stack() -> (
        RemoteController<crate::transport::ChannelTransport>,
        Arc<SpeedAuthority>,
        Arc<MockVideo>,
    ) {
        let registry = Arc::new(MediaRegistry::new());
        let video = Arc::new(MockVideo::ready());
        registry.attach(Arc::clone(&video) as Arc<dyn MediaElement>);
        let authority = Arc::new(SpeedAuthority::new(registry));

        let (transport, rx) = channel(16);
        tokio::spawn(serve(Arc::clone(&authority), rx));
        (RemoteController::new(transport), authority, video)
    }

    #[tokio::test]
    async fn reads_and_mutations_round_trip() {
        let (controller, authority, video) = live_stack();

        assert_eq!(controller.read_speed().await, 1.0);

        assert_eq!(controller.request_set(2.0).await.unwrap(), 2.0);
        assert_eq!(controller.request_adjust(0.25).await.unwrap(), 2.25);
        assert_eq!(controller.read_speed().await, 2.25);

        assert_eq!(authority.speed(), 2.25);
        assert_eq!(video.playback_rate(), 2.25);
    }

    #[tokio::test]
    async fn mutations_report_the_clamped_rate() {
        let (controller, _authority, _video) = live_stack();

        assert_eq!(controller.request_set(500.0).await.unwrap(), 16.0);
        assert_eq!(controller.request_adjust(-100.0).await.unwrap(), 0.1);
    }

    #[tokio::test]
    async fn read_failure_displays_the_default_rate() {
        let (transport, rx) = channel(1);
        drop(rx);
        let controller = RemoteController::new(transport);

        assert_eq!(controller.read_speed().await, DEFAULT_SPEED);
    }

    #[tokio::test]
    async fn mutation_failure_surfaces_the_transport_error() {
        let (transport, rx) = channel(1);
        drop(rx);
        let controller = RemoteController::new(transport);

        let outcome = controller.request_set(2.0).await;
        assert!(matches!(
            outcome,
            Err(ControllerError::Transport(TransportError::Disconnected))
        ));
    }

    #[tokio::test]
    async fn rejected_mutation_carries_the_authority_reason() {
        let registry = Arc::new(MediaRegistry::new());
        let authority = Arc::new(SpeedAuthority::new(registry));
        let (transport, rx) = channel(16);
        tokio::spawn(serve(Arc::clone(&authority), rx));
        let controller = RemoteController::new(transport);

        let outcome = controller.request_set(2.0).await;
        match outcome {
            Err(ControllerError::Rejected(reason)) => {
                assert_eq!(reason, "no media element to apply the rate to");
            }
            other => panic!("expected rejection, got {other:?}"),
        }

        // The failed application still moved the authoritative rate.
        assert_eq!(authority.speed(), 2.0);
        assert_eq!(controller.read_speed().await, 2.0);
    }

    #[tokio::test]
    async fn out_of_range_readings_are_clamped_for_display() {
        let controller = RemoteController::new(ScriptedTransport {
            reply: Response::speed(500.0),
        });
        assert_eq!(controller.read_speed().await, 16.0);

        let controller = RemoteController::new(ScriptedTransport {
            reply: Response::speed(f64::NAN),
        });
        assert_eq!(controller.read_speed().await, DEFAULT_SPEED);
    }

    #[tokio::test]
    async fn malformed_reply_to_a_read_displays_the_default_rate() {
        let controller = RemoteController::new(ScriptedTransport {
            reply: Response::applied(3.0),
        });
        assert_eq!(controller.read_speed().await, DEFAULT_SPEED);
    }
}
