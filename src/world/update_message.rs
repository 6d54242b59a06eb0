use bytes::Bytes;

use crate::types::NetId;

/// Outbound envelope for one replica's serialized delta.
///
/// Owner and observer payloads are never combined: when both audiences have
/// pending bytes, two separate messages go out (an owner-addressed unicast
/// and an observer-addressed multicast).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateMessage {
    pub net_id: NetId,
    pub payload: Bytes,
}

impl UpdateMessage {
    pub fn new(net_id: NetId, payload: Bytes) -> Self {
        Self { net_id, payload }
    }
}
