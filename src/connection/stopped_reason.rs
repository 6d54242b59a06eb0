use crate::transport::reason::{DisconnectReason, RejectReason};

/// Reason a client was stopped or its connection attempt failed, surfaced to
/// the application layer.
///
/// Uses different enums than the transport layer so that users don't need the
/// transport vocabulary to handle events, and so the values here stay stable
/// while transport reasons come and go.
///
/// Wire tags are explicit and never reordered or reused once shipped - check
/// all numbers when adding a value, they are not in order!
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(u8)]
pub enum StoppedReason {
    /// No reason given
    None = 0,

    /// Connection timed out, remote peer stopped replying
    Timeout = 1,
    /// Disconnect was requested locally
    LocalConnectionClosed = 2,
    /// Disconnect was requested by the remote side
    RemoteConnectionClosed = 3,
    /// Remote side disconnected us because a sent packet broke its config
    InvalidPacket = 8,
    /// Remote side disconnected us because its send buffer was full
    SendBufferFull = 10,

    /// Server rejected the connection because it was full
    ServerFull = 4,
    /// Server never replied while connecting
    ConnectingTimeout = 5,
    /// Disconnect was requested locally before the server accepted us
    ConnectingCancel = 6,
    /// Key sent with the first message did not match the server's key
    KeyInvalid = 9,

    /// Server was stopped while running in host mode
    HostModeStopped = 7,
}

impl StoppedReason {
    /// Stable wire tag for this reason.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`to_u8`](Self::to_u8). Returns `None` for tags that have
    /// never been shipped.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Timeout),
            2 => Some(Self::LocalConnectionClosed),
            3 => Some(Self::RemoteConnectionClosed),
            4 => Some(Self::ServerFull),
            5 => Some(Self::ConnectingTimeout),
            6 => Some(Self::ConnectingCancel),
            7 => Some(Self::HostModeStopped),
            8 => Some(Self::InvalidPacket),
            9 => Some(Self::KeyInvalid),
            10 => Some(Self::SendBufferFull),
            _ => Option::None,
        }
    }
}

// Matches are exhaustive on purpose: adding a transport reason must not
// compile until it is mapped here. Unknown wire codes never reach these
// conversions - they collapse to the `None` variant at decode time, see
// `DisconnectReason::from_u8` / `RejectReason::from_u8`.

impl From<DisconnectReason> for StoppedReason {
    fn from(reason: DisconnectReason) -> Self {
        match reason {
            DisconnectReason::None => StoppedReason::None,
            DisconnectReason::Timeout => StoppedReason::Timeout,
            DisconnectReason::RequestedByRemotePeer => StoppedReason::RemoteConnectionClosed,
            DisconnectReason::RequestedByLocalPeer => StoppedReason::LocalConnectionClosed,
            DisconnectReason::InvalidPacket => StoppedReason::InvalidPacket,
            DisconnectReason::SendBufferFull => StoppedReason::SendBufferFull,
        }
    }
}

impl From<RejectReason> for StoppedReason {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::None => StoppedReason::None,
            RejectReason::Timeout => StoppedReason::ConnectingTimeout,
            RejectReason::ServerFull => StoppedReason::ServerFull,
            RejectReason::KeyInvalid => StoppedReason::KeyInvalid,
            RejectReason::ClosedByPeer => StoppedReason::ConnectingCancel,
        }
    }
}
