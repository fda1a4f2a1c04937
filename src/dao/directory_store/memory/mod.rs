//! In-process backend keeping every registry in one lock-protected map set.
//!
//! Selected with `TEAMHUB_STORE=memory` and used by the integration tests. All
//! writes run under a single write lock, so cross-registry updates and point
//! increments are applied without losing concurrent changes.

mod store;

pub use store::MemoryDirectoryStore;
