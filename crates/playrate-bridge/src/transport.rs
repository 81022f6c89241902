//! The async request/response channel between controller and authority.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use playrate_core::protocol::{Request, Response};
use playrate_engine::SpeedAuthority;

use crate::dispatch;

/// One in-flight message: the raw request plus the slot its reply goes into.
/// Dropping the slot without sending is how the responder ignores a message.
pub type WireMessage = (serde_json::Value, oneshot::Sender<serde_json::Value>);

/// Failures of the channel itself, as opposed to the authority rejecting an
/// operation. Any of these means "state unknown", never an authoritative
/// value.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Nobody is listening on the other end.
    #[error("no responder is listening")]
    Disconnected,
    /// The responder saw the message and chose not to answer it.
    #[error("request dropped without a response")]
    NoResponse,
    /// A message or reply failed to encode or decode.
    #[error("malformed wire traffic: {0}")]
    Codec(String),
}

/// A fire-once request/response channel to the speed authority: no retries,
/// no timeouts, every failure reported explicitly.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: Request) -> Result<Response, TransportError>;
}

/// In-process transport over an mpsc/oneshot pair.
#[derive(Clone)]
pub struct ChannelTransport {
    tx: mpsc::Sender<WireMessage>,
}

/// Create a connected transport plus the receiver half a responder consumes.
pub fn channel(capacity: usize) -> (ChannelTransport, mpsc::Receiver<WireMessage>) {
    let (tx, rx) = mpsc::channel(capacity);
    (ChannelTransport { tx }, rx)
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn request(&self, request: Request) -> Result<Response, TransportError> {
        let raw = match serde_json::to_value(&request) {
            Ok(raw) => raw,
            Err(error) => return Err(TransportError::Codec(error.to_string())),
        };

        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send((raw, reply_tx))
            .await
            .map_err(|_| TransportError::Disconnected)?;

        let raw_reply = reply_rx.await.map_err(|_| TransportError::NoResponse)?;
        serde_json::from_value(raw_reply).map_err(|error| TransportError::Codec(error.to_string()))
    }
}

/// Run the page-context responder until the channel closes: parse each
/// message, answer recognizable requests, drop everything else unanswered.
pub async fn serve(authority: Arc<SpeedAuthority>, mut requests: mpsc::Receiver<WireMessage>) {
    while let Some((raw, reply)) = requests.recv().await {
        match dispatch::handle_raw(&authority, &raw) {
            Some(response) => match serde_json::to_value(&response) {
                Ok(raw_reply) => {
                    // The requester may have given up; that is its problem.
                    let _ = reply.send(raw_reply);
                }
                Err(error) => {
                    tracing::warn!(%error, "reply failed to encode");
                }
            },
            None => {
                tracing::debug!(message = %raw, "ignoring unrecognizable message");
            }
        }
    }
    tracing::debug!("request channel closed, responder exiting");
}
