use thiserror::Error;

/// Errors that can occur while enqueueing an outbound message on a peer
/// connection. Dispatch is a non-blocking enqueue, so these are the only
/// failures a send can surface; the broadcaster logs and absorbs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The peer's outgoing queue has no room left for the message
    #[error("Send queue full for peer {peer_id} - dropped {message_bytes} byte update")]
    QueueFull {
        peer_id: String,
        message_bytes: usize,
    },

    /// The peer's connection has already been torn down
    #[error("Connection to peer {peer_id} is closed")]
    ConnectionClosed { peer_id: String },
}
