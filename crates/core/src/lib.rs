//! Functional core for the armory.
//!
//! Everything in this crate is pure: name sanitization, the image allow-list,
//! the squad registry line codec and the store error taxonomy. Filesystem
//! access lives in the `armory` server crate behind the traits in [`storage`].

pub mod media;
pub mod naming;
pub mod squad;
pub mod storage;
