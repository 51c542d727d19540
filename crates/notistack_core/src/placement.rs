//! Pure placement math for stacked notifications.
//!
//! # Responsibility
//! - Compute where a notification of a given size sits at a given anchor.
//! - Account for the space already occupied by other active notifications.
//!
//! # Invariants
//! - No I/O: the registry snapshot is a plain argument.
//! - Deterministic for identical inputs.
//! - Stacking is vertical-only, away from the anchored edge.

use crate::model::geometry::{Insets, Position, Size, WorkArea};
use crate::model::record::{Anchor, PlacementRecord};

/// Sums the stacking extent consumed at `anchor` by other notifications.
///
/// Records whose id equals `exclude_id` are skipped so a notification never
/// stacks against its own registry entry.
pub fn occupied_extent(anchor: Anchor, exclude_id: &str, snapshot: &[PlacementRecord]) -> f64 {
    snapshot
        .iter()
        .filter(|record| record.id != exclude_id && record.anchor == anchor)
        .map(|record| record.size)
        .sum()
}

/// Coordinate of a single, unstacked notification at `anchor`.
///
/// Also the fallback position when the registry cannot be read.
pub fn base_position(anchor: Anchor, margin: &Insets, work_area: &WorkArea, size: &Size) -> Position {
    let x = match anchor {
        Anchor::BottomRight | Anchor::TopRight => work_area.max_x() - size.width - margin.right,
        Anchor::BottomLeft | Anchor::TopLeft => margin.left,
        Anchor::CenterBottom | Anchor::CenterTop => (work_area.width - size.width) / 2.0,
    };
    let y = if anchor.is_bottom_edge() {
        work_area.max_y() - size.height - margin.bottom
    } else {
        work_area.min_y + margin.top
    };
    Position::new(x, y)
}

/// Coordinate of a notification given the current occupancy of its anchor.
///
/// Bottom anchors shift upward by the occupied extent, top anchors shift
/// downward. Horizontal placement is unaffected by stacking.
pub fn compute_position(
    anchor: Anchor,
    margin: &Insets,
    work_area: &WorkArea,
    size: &Size,
    exclude_id: &str,
    snapshot: &[PlacementRecord],
) -> Position {
    let base = base_position(anchor, margin, work_area, size);
    let occupied = occupied_extent(anchor, exclude_id, snapshot);
    let y = if anchor.is_bottom_edge() {
        base.y - occupied
    } else {
        base.y + occupied
    };
    Position::new(base.x, y)
}
