//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `armory_core::storage`. Both stores live on the local
//! filesystem under roots injected at construction, so tests can point them
//! at an isolated temporary directory.

pub mod filesystem;

pub use filesystem::{FsMediaStore, FsSquadRegistry};
