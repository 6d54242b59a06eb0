use crate::{connection::error::SendError, types::PeerId, world::update_message::UpdateMessage};

/// A remote connection as seen by the replication layer.
///
/// Implemented by the transport; the broadcaster only ever holds these as
/// `&dyn RemotePeer` borrowed from a [`Replica`](crate::Replica).
pub trait RemotePeer {
    /// Stable id of this connection.
    fn id(&self) -> PeerId;

    /// Whether the peer has finished scene load / handshake gating. An
    /// unready peer silently receives nothing this tick; it is caught up by
    /// full-state resync on readiness, outside this crate.
    fn is_scene_ready(&self) -> bool;

    /// Enqueues a message for delivery. Never blocks; delivery reliability is
    /// the transport's concern.
    fn send(&self, message: UpdateMessage) -> Result<(), SendError>;
}
