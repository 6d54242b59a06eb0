pub mod delivery;
pub mod dirty_set;
pub mod replica;
pub mod sync_sender;
pub mod update_message;
