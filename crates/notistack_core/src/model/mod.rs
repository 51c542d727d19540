//! Domain model for notification placement.
//!
//! # Responsibility
//! - Define the canonical placement record shared across processes.
//! - Define the geometry value types consumed from the host toolkit.
//!
//! # Invariants
//! - Every active notification is identified by a stable, non-empty `id`.
//! - Persisted records are validated on both write and read paths.

pub mod geometry;
pub mod record;
