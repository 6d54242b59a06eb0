// Transport-level close vocabularies. These belong to the socket layer; the
// application-facing mapping lives in `connection::StoppedReason`.

/// Reason the transport closed an established connection.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(u8)]
pub enum DisconnectReason {
    /// No reason given
    None = 0,
    /// Remote peer stopped replying
    Timeout = 1,
    /// Disconnect called on the local peer
    RequestedByLocalPeer = 2,
    /// Disconnect requested by the remote peer
    RequestedByRemotePeer = 3,
    /// Received packet was not allowed by the peer's config
    InvalidPacket = 4,
    /// Outgoing send buffer was full
    SendBufferFull = 5,
}

impl DisconnectReason {
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a wire code. Codes added by a newer transport collapse to
    /// `None` so that old peers keep working.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Timeout,
            2 => Self::RequestedByLocalPeer,
            3 => Self::RequestedByRemotePeer,
            4 => Self::InvalidPacket,
            5 => Self::SendBufferFull,
            _ => Self::None,
        }
    }
}

/// Reason the transport rejected a connection attempt.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(u8)]
pub enum RejectReason {
    /// No reason given
    None = 0,
    /// Server never replied
    Timeout = 1,
    /// Server had no connection slots left
    ServerFull = 2,
    /// Key sent with the first message did not match the server's key
    KeyInvalid = 3,
    /// Attempt was closed by a peer before the server accepted
    ClosedByPeer = 4,
}

impl RejectReason {
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a wire code. Codes added by a newer transport collapse to
    /// `None` so that old peers keep working.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Timeout,
            2 => Self::ServerFull,
            3 => Self::KeyInvalid,
            4 => Self::ClosedByPeer,
            _ => Self::None,
        }
    }
}
