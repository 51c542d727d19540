//! Lifecycle orchestration services.
//!
//! # Responsibility
//! - Bind the placement calculator and the shared registry to a popup's
//!   show/hide transitions.
//! - Keep host toolkit access behind narrow trait seams.

pub mod popup;
