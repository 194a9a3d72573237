//! Domain layer for LiftUp: the accessibility configuration model,
//! the settings store that owns it, and the key-value storage the
//! store persists through.

pub mod accessibility;
pub mod error;
pub mod storage;
pub mod store;
