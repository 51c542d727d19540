//! Placement and stacking coordination for desktop popup notifications.
//!
//! When several notifications are shown at the same screen anchor, each one
//! must sit clear of the others, even when they are created and destroyed by
//! independent processes sharing the machine. This crate persists every
//! active notification's footprint to a shared file-backed registry and
//! computes each popup's coordinate from the space the others already occupy.
//! It is the single source of truth for the stacking invariants; rendering
//! stays with the host toolkit.

pub mod logging;
pub mod model;
pub mod placement;
pub mod registry;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::geometry::{Insets, Position, Size, WorkArea};
pub use model::record::{Anchor, PlacementRecord, RecordValidationError};
pub use placement::{base_position, compute_position, occupied_extent};
pub use registry::{FileRegistry, PlacementRegistry, RegistryError, RegistryResult};
pub use service::popup::{PopupNotification, PopupWindow, ScreenGeometry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
