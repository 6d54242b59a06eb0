//! # Varsync
//! Delta-state synchronization for networked-object replication: a per-tick
//! broadcaster that flushes dirty replica state to remote peers, and a stable
//! taxonomy of application-facing connection stop reasons.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod connection;
mod transport;
mod types;
mod world;

pub use connection::{error::SendError, stopped_reason::StoppedReason};
pub use transport::{
    buffer::{BufferPool, PooledWriter},
    peer::RemotePeer,
    reason::{DisconnectReason, RejectReason},
};
pub use types::{NetId, PeerId};
pub use world::{
    delivery::{owner_recipient, owner_role, OwnerRole},
    dirty_set::DirtySet,
    replica::{Replica, ReplicaWorld},
    sync_sender::SyncSender,
    update_message::UpdateMessage,
};
