//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the query core and the
//! simulator that owns the construct tree (tree snapshot, resource
//! configuration, logs, invalidation). Implementations live in
//! `src/adapters/`.

pub mod invalidation;
pub mod logs;
pub mod resource_config;
pub mod tree;

pub use invalidation::{InvalidationSource, QueryName};
pub use logs::LogSource;
pub use resource_config::{ConfigLookupError, ResourceConfig, ResourceConfigSource};
pub use tree::TreeSource;
