use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use log::trace;

use crate::types::NetId;

/// Set of replicas known to have pending state changes.
///
/// Insertion is idempotent; the set is drained and rebuilt every tick by the
/// [`SyncSender`](crate::SyncSender). Clones share the same underlying set,
/// so property mutators and network-receive callbacks on other threads can
/// hold a handle and mark replicas dirty while the tick driver owns the
/// drain.
#[derive(Clone)]
pub struct DirtySet {
    replicas: Arc<Mutex<HashSet<NetId>>>,
}

impl DirtySet {
    pub fn new() -> Self {
        Self {
            replicas: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Adds a replica to the pending set. No-op if already present.
    pub fn mark(&self, net_id: NetId) {
        let Ok(mut replicas) = self.replicas.lock() else {
            panic!("DirtySet: lock poisoned");
        };
        if replicas.insert(net_id) {
            trace!("DirtySet: new dirty replica [net_id={:?}]", net_id);
        }
    }

    pub fn contains(&self, net_id: &NetId) -> bool {
        let Ok(replicas) = self.replicas.lock() else {
            panic!("DirtySet: lock poisoned");
        };
        replicas.contains(net_id)
    }

    pub fn len(&self) -> usize {
        let Ok(replicas) = self.replicas.lock() else {
            panic!("DirtySet: lock poisoned");
        };
        replicas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Atomically takes the current pending set, leaving it empty. Marks
    /// arriving concurrently land in the set for the next drain.
    pub fn drain(&self) -> HashSet<NetId> {
        let Ok(mut replicas) = self.replicas.lock() else {
            panic!("DirtySet: lock poisoned");
        };
        std::mem::take(&mut *replicas)
    }

    /// Re-inserts a replica that is still dirty after a send pass. Same set
    /// semantics as [`mark`](Self::mark), without the first-insertion trace.
    pub(crate) fn requeue(&self, net_id: NetId) {
        let Ok(mut replicas) = self.replicas.lock() else {
            panic!("DirtySet: lock poisoned");
        };
        replicas.insert(net_id);
    }
}

impl Default for DirtySet {
    fn default() -> Self {
        Self::new()
    }
}
