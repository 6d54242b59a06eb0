use bytes::BytesMut;

use crate::{transport::peer::RemotePeer, types::NetId, world::update_message::UpdateMessage};

/// Capability interface of a networked object whose mutable state is synced
/// to remote peers.
///
/// Spawning, scene membership and observer-set bookkeeping live outside this
/// crate; a replica only answers questions about its own sync state, writes
/// its changed fields into the sinks it is handed, and knows which
/// connections matter for routing.
pub trait Replica {
    /// Stable network identifier.
    fn net_id(&self) -> NetId;

    /// Number of remote peers currently observing this replica.
    fn observer_count(&self) -> usize;

    /// Whether the local peer holds write authority over this replica.
    fn has_authority(&self) -> bool;

    /// Whether the local peer is the authoritative server for this replica.
    fn is_server_side(&self) -> bool;

    /// Serializes the fields that changed since they were last flushed, as of
    /// snapshot time `now` (seconds). Owner-only fields go to `owner`,
    /// everything else to `observers`. Returns bytes written to each sink.
    fn serialize_delta(
        &mut self,
        now: f64,
        owner: &mut BytesMut,
        observers: &mut BytesMut,
    ) -> (usize, usize);

    /// Whether un-serialized dirty state remains after a serialization pass
    /// (interval-gated fields, or a partial flush upstream).
    fn still_dirty(&self) -> bool;

    /// Clears all dirty flags as of snapshot time `now`.
    fn clear_dirty(&mut self, now: f64);

    /// Server-side: the connection that owns this replica, if any. Unowned
    /// replicas (scene objects, NPCs) return `None`.
    fn owner_connection(&self) -> Option<&dyn RemotePeer>;

    /// Server-side: the server's own local player connection when running in
    /// host mode, otherwise `None`.
    fn local_player(&self) -> Option<&dyn RemotePeer>;

    /// Client-side: this client's connection to the server.
    fn client_connection(&self) -> Option<&dyn RemotePeer>;

    /// Broadcasts `message` to every observing peer except the owner, on the
    /// unreliable channel. Periodic state sync is fire-and-forget: a dropped
    /// update is superseded by the next one.
    fn send_to_observers(&self, message: UpdateMessage);
}

/// Lookup of live replicas by net id.
///
/// A `NetId` drained from the dirty set may refer to a replica that was
/// despawned since it was marked; such ids resolve to `None` and are skipped.
pub trait ReplicaWorld {
    fn replica_mut(&mut self, net_id: &NetId) -> Option<&mut dyn Replica>;
}
