// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo
    )
)]

//! # kvorder Types
//!
//! Canonical ordering and encoding for the unordered key/value collections that
//! feed consensus-critical hashes: validator-set updates, event attribute tags,
//! and the sharding hash embedded in a commit identifier.
//!
//! ## Architectural Role
//!
//! Every node must derive bit-identical bytes from logically equivalent input.
//! This crate owns the sort orders, the `key:hex(value)|` canonical string form,
//! and the wire-compatible JSON and SCALE representations. It performs no I/O
//! and never logs; failures are returned to the caller.

/// Application-level records: validator updates, events and commit identifiers.
pub mod app;
/// The canonical, deterministic binary codec and the JSON wire codec.
pub mod codec;
/// Configuration structures for the tooling built on top of this crate.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Byte- and integer-valued key/value pairs and their canonical ordering.
pub mod kv;
/// Serde adapters that keep JSON output field-compatible with existing nodes.
pub mod wire;
