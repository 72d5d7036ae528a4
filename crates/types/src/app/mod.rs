// Path: crates/types/src/app/mod.rs
//! Application-level records whose canonical order feeds consensus hashes.

/// The commit identifier and its embedded sharding hash.
pub mod commit;
/// Validator updates and their ordering by public key.
pub mod consensus;
/// Events and the default-event attribute index.
pub mod events;

pub use commit::*;
pub use consensus::*;
pub use events::*;
