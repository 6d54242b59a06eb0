pub mod error;
pub mod stopped_reason;
