//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notistack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notistack_core::{compute_position, Anchor, Insets, PlacementRecord, Size, WorkArea};

fn main() {
    println!("notistack_core version={}", notistack_core::core_version());

    let work_area = WorkArea::new(0.0, 0.0, 1920.0, 1080.0);
    let snapshot = [PlacementRecord::with_id(Anchor::BottomRight, 80.0, "first")];
    let position = compute_position(
        Anchor::BottomRight,
        &Insets::default(),
        &work_area,
        &Size::new(300.0, 80.0),
        "second",
        &snapshot,
    );
    println!(
        "sample bottom_right stacked position x={} y={}",
        position.x, position.y
    );
}
