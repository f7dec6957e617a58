//! Adapters implementing the port traits.

pub mod channel;
pub mod snapshot;

pub use channel::ChannelInvalidation;
pub use snapshot::{Snapshot, SnapshotError, SnapshotStore};
