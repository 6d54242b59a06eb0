// NetId
/// Stable network identifier of a replicated object. Assigned at spawn by the
/// authoritative peer and shared by every peer's view of the same object.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct NetId(u32);

impl NetId {
    pub fn new(value: u32) -> Self {
        NetId(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// PeerId
/// Stable identifier of a remote connection, unique for the lifetime of the
/// local peer. Comparing two `PeerId`s is how the host-mode loopback
/// connection is recognized.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct PeerId(u64);

impl PeerId {
    pub fn new(value: u64) -> Self {
        PeerId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
