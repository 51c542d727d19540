//! Placement record domain model.
//!
//! # Responsibility
//! - Define the record describing one active notification for stacking.
//! - Validate records before they reach the shared registry.
//!
//! # Invariants
//! - `anchor` is fixed for the lifetime of a record.
//! - `id` is non-empty and unique per concurrently active notification.
//! - `size` is a finite, non-negative extent along the stacking axis.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Screen anchor a notification is aligned to.
///
/// Anchors name a corner or edge midpoint of the screen work area. Bottom
/// anchors stack upward, top anchors stack downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    BottomRight,
    BottomLeft,
    CenterBottom,
    TopRight,
    TopLeft,
    CenterTop,
}

impl Anchor {
    /// All anchors in a stable order.
    pub const ALL: [Anchor; 6] = [
        Anchor::BottomRight,
        Anchor::BottomLeft,
        Anchor::CenterBottom,
        Anchor::TopRight,
        Anchor::TopLeft,
        Anchor::CenterTop,
    ];

    /// Stable token used in persisted data and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::BottomRight => "bottom_right",
            Anchor::BottomLeft => "bottom_left",
            Anchor::CenterBottom => "center_bottom",
            Anchor::TopRight => "top_right",
            Anchor::TopLeft => "top_left",
            Anchor::CenterTop => "center_top",
        }
    }

    /// Whether this anchor aligns to the bottom edge of the work area.
    ///
    /// Bottom anchors move stacked notifications upward (smaller `y`), top
    /// anchors move them downward.
    pub fn is_bottom_edge(self) -> bool {
        matches!(
            self,
            Anchor::BottomRight | Anchor::BottomLeft | Anchor::CenterBottom
        )
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error for a [`PlacementRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordValidationError {
    /// Record id is empty or whitespace-only.
    EmptyId,
    /// Record size is negative, NaN or infinite.
    InvalidSize(f64),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "placement record id must not be empty"),
            Self::InvalidSize(size) => write!(
                f,
                "placement record size must be finite and non-negative, got {size}"
            ),
        }
    }
}

impl Error for RecordValidationError {}

/// One active notification's contribution to stacking at its anchor.
///
/// Records are created exactly once when a notification is shown and removed
/// exactly once when it is hidden. The `size` captured at show time is never
/// updated afterwards, so content growth after first layout is not reflected
/// in siblings' stacking math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Screen anchor this notification stacks at.
    pub anchor: Anchor,
    /// Opaque removal key, unique per concurrently active notification.
    pub id: String,
    /// Vertical extent along the stacking axis, known after first layout.
    pub size: f64,
}

impl PlacementRecord {
    /// Creates a record with a generated unique id.
    pub fn new(anchor: Anchor, size: f64) -> Self {
        Self::with_id(anchor, size, Uuid::new_v4().to_string())
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Used when the notification instance already carries an identity. The
    /// id must stay unique among concurrently active notifications; the
    /// registry does not detect duplicates.
    pub fn with_id(anchor: Anchor, size: f64, id: impl Into<String>) -> Self {
        Self {
            anchor,
            id: id.into(),
            size,
        }
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    /// - [`RecordValidationError::EmptyId`] when `id` has no visible content.
    /// - [`RecordValidationError::InvalidSize`] when `size` is negative or
    ///   not finite.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.id.trim().is_empty() {
            return Err(RecordValidationError::EmptyId);
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(RecordValidationError::InvalidSize(self.size));
        }
        Ok(())
    }
}
