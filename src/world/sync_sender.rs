use log::{trace, warn};

use crate::{
    transport::buffer::{BufferPool, PooledWriter},
    types::NetId,
    world::{
        delivery,
        dirty_set::DirtySet,
        replica::{Replica, ReplicaWorld},
        update_message::UpdateMessage,
    },
};

/// Per-tick driver that flushes dirty replica state to remote peers.
///
/// External code marks replicas dirty whenever replicated state changes; once
/// per tick the host calls [`send_updates`](Self::send_updates), which drains
/// the pending set and produces zero, one, or two [`UpdateMessage`]s per
/// replica (owner payload, observer payload). Replicas that still report
/// dirty state after a pass are re-queued for the next tick - that re-queue
/// is the only retry mechanism.
pub struct SyncSender {
    dirty_replicas: DirtySet,
    still_dirty_tmp: Vec<NetId>,
}

impl SyncSender {
    pub fn new() -> Self {
        Self {
            dirty_replicas: DirtySet::new(),
            still_dirty_tmp: Vec::new(),
        }
    }

    /// Marks a replica as having pending state changes. Idempotent.
    pub fn mark_dirty(&self, net_id: NetId) {
        self.dirty_replicas.mark(net_id);
    }

    /// Clonable handle to the pending set, for callers (property mutators,
    /// network-receive callbacks) that outlive a borrow of the sender.
    pub fn dirty_handle(&self) -> DirtySet {
        self.dirty_replicas.clone()
    }

    /// Runs one synchronization pass at snapshot time `now` (seconds).
    ///
    /// Cheap no-op while the pending set is empty. Completes synchronously;
    /// message dispatch is a fire-and-forget enqueue on the transport.
    pub fn send_updates<W: ReplicaWorld + ?Sized>(
        &mut self,
        world: &mut W,
        buffers: &dyn BufferPool,
        now: f64,
    ) {
        let pending = self.dirty_replicas.drain();
        if pending.is_empty() {
            return;
        }

        trace!("SyncSender: flushing {} dirty replicas", pending.len());

        self.still_dirty_tmp.clear();

        for net_id in pending {
            // despawned since it was marked
            let Some(replica) = world.replica_mut(&net_id) else {
                continue;
            };

            // on a client, a dirty replica must still hold authority to have
            // anything worth sending (its changes are owner->server ones)
            if replica.observer_count() > 0 || replica.has_authority() {
                trace!(
                    "SyncSender: sending delta to {} observers [net_id={:?}]",
                    replica.observer_count(),
                    net_id
                );

                Self::send_update_message(replica, buffers, now);

                if replica.still_dirty() {
                    self.still_dirty_tmp.push(net_id);
                }
            } else {
                trace!(
                    "SyncSender: no audience, clearing dirty state [net_id={:?}]",
                    net_id
                );

                // it would be spawned in full on new observers anyway
                replica.clear_dirty(now);
            }
        }

        for net_id in self.still_dirty_tmp.drain(..) {
            self.dirty_replicas.requeue(net_id);
        }
    }

    fn send_update_message(replica: &mut dyn Replica, buffers: &dyn BufferPool, now: f64) {
        // one writer for the owner, one for everyone else; owner-only fields
        // never reach the observer broadcast
        let mut owner_writer = PooledWriter::new(buffers);
        let mut observers_writer = PooledWriter::new(buffers);

        let (owner_written, observers_written) =
            replica.serialize_delta(now, &mut owner_writer, &mut observers_writer);

        if owner_written > 0 {
            Self::send_to_remote_owner(&*replica, &mut owner_writer);
        }

        if observers_written > 0 {
            let message = UpdateMessage::new(replica.net_id(), observers_writer.take_payload());
            replica.send_to_observers(message);
        }

        // both writers return to the pool here, whichever branches ran
    }

    fn send_to_remote_owner(replica: &dyn Replica, owner_writer: &mut PooledWriter<'_>) {
        let Some(peer) = delivery::owner_recipient(replica) else {
            return;
        };

        if !peer.is_scene_ready() {
            return;
        }

        let message = UpdateMessage::new(replica.net_id(), owner_writer.take_payload());
        if let Err(err) = peer.send(message) {
            warn!(
                "SyncSender: dropping owner update [net_id={:?}]: {}",
                replica.net_id(),
                err
            );
        }
    }
}

impl Default for SyncSender {
    fn default() -> Self {
        Self::new()
    }
}
