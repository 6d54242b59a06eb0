use crate::{transport::peer::RemotePeer, world::replica::Replica};

/// Sending role of the local peer for one replica, resolved once per owner
/// send instead of re-querying the replica at every branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OwnerRole {
    /// Local peer is the authoritative server for the replica
    Server,
    /// Local peer is a client holding authority over the replica
    AuthoritativeClient,
    /// Local peer is neither; an owner send in this state breaks the
    /// replication contract
    None,
}

pub fn owner_role(replica: &dyn Replica) -> OwnerRole {
    if replica.is_server_side() {
        OwnerRole::Server
    } else if replica.has_authority() {
        OwnerRole::AuthoritativeClient
    } else {
        OwnerRole::None
    }
}

/// Resolves which remote connection should receive a replica's owner payload.
///
/// Returns `None` when the replica has no owning connection (unowned scene
/// objects), or when the owner is the server's own local player - a host
/// acting as its own client must not be sent a duplicate network message,
/// its state is already authoritative locally.
///
/// Readiness gating is the send site's job, not the router's.
///
/// # Panics
///
/// Panics when the local peer is neither the server for the replica nor a
/// client with authority over it. An owner payload in that state means the
/// replication pipeline was driven outside its contract.
pub fn owner_recipient(replica: &dyn Replica) -> Option<&dyn RemotePeer> {
    match owner_role(replica) {
        OwnerRole::Server => {
            let owner = replica.owner_connection()?;
            if let Some(local_player) = replica.local_player() {
                if owner.id() == local_player.id() {
                    return None;
                }
            }
            Some(owner)
        }
        OwnerRole::AuthoritativeClient => replica.client_connection(),
        OwnerRole::None => {
            panic!(
                "Delivery: replica {:?} has an owner payload but local peer is neither server-side nor an authoritative client",
                replica.net_id()
            );
        }
    }
}
