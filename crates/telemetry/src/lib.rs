// Path: crates/telemetry/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # kvorder Telemetry
//!
//! Structured logging initialisation for kvorder binaries. Library crates only
//! emit through `tracing`/`log`; the subscriber is installed once, here.

/// The initialization routine for global structured logging.
pub mod init;

pub use init::init_tracing;
