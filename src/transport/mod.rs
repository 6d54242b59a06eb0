pub mod buffer;
pub mod peer;
pub mod reason;
