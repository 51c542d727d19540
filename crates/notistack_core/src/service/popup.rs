//! Popup notification lifecycle controller.
//!
//! # Responsibility
//! - Place a popup when it is shown and register its footprint.
//! - Deregister the footprint when the popup is hidden.
//! - Survive registry failures without blocking the popup itself.
//!
//! # Invariants
//! - At most one registry record exists per controller between a show and
//!   the matching hide; redundant transitions are ignored.
//! - Registry failures degrade to the unstacked base position; they never
//!   prevent showing or hiding.
//! - The record size is captured at show time and never refreshed.

use crate::model::geometry::{Insets, Position, Size, WorkArea};
use crate::model::record::{Anchor, PlacementRecord};
use crate::placement;
use crate::registry::PlacementRegistry;
use log::{debug, error, warn};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Host popup window consumed by the controller.
///
/// Width and height report the rendered content extent, available only after
/// the host toolkit's first layout pass.
pub trait PopupWindow {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
}

/// Host screen-geometry query.
pub trait ScreenGeometry {
    /// Work-area bounds of the primary display.
    fn primary_work_area(&self) -> WorkArea;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Hidden,
    Shown,
}

/// Binds one popup's show/hide transitions to the shared placement registry.
///
/// The host wires its window-shown event to [`handle_shown`] and its
/// window-hidden event to [`handle_hidden`]; the controller owns the local
/// state guarding against redundant transitions.
///
/// [`handle_shown`]: PopupNotification::handle_shown
/// [`handle_hidden`]: PopupNotification::handle_hidden
pub struct PopupNotification<R: PlacementRegistry> {
    registry: R,
    anchor: Anchor,
    margin: Insets,
    id: String,
    duration: Option<Duration>,
    visibility: Visibility,
    shown_at: Option<Instant>,
    last_position: Option<Position>,
}

impl<R: PlacementRegistry> PopupNotification<R> {
    /// Creates a controller with a generated id and bottom-right anchor.
    pub fn new(registry: R) -> Self {
        Self::with_id(registry, Uuid::new_v4().to_string())
    }

    /// Creates a controller with a caller-provided id.
    ///
    /// The id must be unique among concurrently active notifications; it is
    /// the removal key in the shared registry.
    pub fn with_id(registry: R, id: impl Into<String>) -> Self {
        Self {
            registry,
            anchor: Anchor::BottomRight,
            margin: Insets::default(),
            id: id.into(),
            duration: None,
            visibility: Visibility::Hidden,
            shown_at: None,
            last_position: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Sets the screen anchor used by the next show.
    ///
    /// Ignored while the popup is shown: the registered record's anchor is
    /// fixed, and changing it mid-display would desynchronize the registry.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        if self.visibility == Visibility::Shown {
            warn!(
                "event=popup_config module=service status=ignored field=anchor id={} reason=shown",
                self.id
            );
            return;
        }
        self.anchor = anchor;
    }

    pub fn margin(&self) -> Insets {
        self.margin
    }

    /// Sets the margin between the popup and the work-area edges.
    ///
    /// Takes effect at the next show or [`refresh_position`] call; hosts
    /// reacting to a margin change while shown should call
    /// [`refresh_position`] afterwards.
    ///
    /// [`refresh_position`]: PopupNotification::refresh_position
    pub fn set_margin(&mut self, margin: Insets) {
        self.margin = margin;
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Sets the intended display duration consumed by host auto-hide timers.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Time since the popup was shown, `None` while hidden.
    pub fn elapsed(&self) -> Option<Duration> {
        self.shown_at.map(|shown_at| shown_at.elapsed())
    }

    /// Whether the configured display duration has fully elapsed.
    ///
    /// Always `false` without a configured duration or while hidden. The
    /// host timer decides when to hide; this is the query it polls.
    pub fn is_expired(&self) -> bool {
        match (self.duration, self.elapsed()) {
            (Some(duration), Some(elapsed)) => elapsed >= duration,
            _ => false,
        }
    }

    /// Places the popup and registers its footprint; call on window-shown.
    ///
    /// Redundant calls while already shown are ignored and return the last
    /// applied position. A registry read failure degrades to the unstacked
    /// base coordinate; a registry write failure is logged and the popup
    /// stays visible either way.
    pub fn handle_shown(
        &mut self,
        window: &mut impl PopupWindow,
        screen: &impl ScreenGeometry,
    ) -> Position {
        if self.visibility == Visibility::Shown {
            if let Some(position) = self.last_position {
                warn!(
                    "event=popup_show module=service status=ignored id={} reason=already_shown",
                    self.id
                );
                return position;
            }
        }

        let size = Size::new(window.width(), window.height());
        let position = self.apply_position(window, screen, &size);

        let record = PlacementRecord::with_id(self.anchor, size.height, self.id.clone());
        if let Err(err) = self.registry.add(&record) {
            error!(
                "event=popup_show module=service status=degraded stage=register id={} error={}",
                self.id, err
            );
        }

        self.visibility = Visibility::Shown;
        self.shown_at = Some(Instant::now());
        debug!(
            "event=popup_show module=service status=ok id={} anchor={} x={} y={}",
            self.id, self.anchor, position.x, position.y
        );
        position
    }

    /// Deregisters the popup's footprint; call on window-hidden.
    ///
    /// A no-op while already hidden. A registry failure is logged and never
    /// blocks the window from closing.
    pub fn handle_hidden(&mut self) {
        if self.visibility == Visibility::Hidden {
            debug!(
                "event=popup_hide module=service status=ignored id={} reason=already_hidden",
                self.id
            );
            return;
        }

        if let Err(err) = self.registry.remove_by_id(&self.id) {
            error!(
                "event=popup_hide module=service status=degraded id={} error={}",
                self.id, err
            );
        }

        self.visibility = Visibility::Hidden;
        self.shown_at = None;
        debug!("event=popup_hide module=service status=ok id={}", self.id);
    }

    /// Recomputes and re-applies the position while shown.
    ///
    /// Hosts call this after a margin change or a work-area change. The
    /// popup's current rendered size drives the coordinate, but the
    /// registered record keeps its show-time size. Returns `None` while
    /// hidden.
    pub fn refresh_position(
        &mut self,
        window: &mut impl PopupWindow,
        screen: &impl ScreenGeometry,
    ) -> Option<Position> {
        if self.visibility != Visibility::Shown {
            return None;
        }
        let size = Size::new(window.width(), window.height());
        let position = self.apply_position(window, screen, &size);
        debug!(
            "event=popup_refresh module=service status=ok id={} x={} y={}",
            self.id, position.x, position.y
        );
        Some(position)
    }

    fn apply_position(
        &mut self,
        window: &mut impl PopupWindow,
        screen: &impl ScreenGeometry,
        size: &Size,
    ) -> Position {
        let work_area = screen.primary_work_area();
        let snapshot = match self.registry.list_all() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(
                    "event=popup_place module=service status=degraded stage=snapshot id={} error={}",
                    self.id, err
                );
                Vec::new()
            }
        };
        let position = placement::compute_position(
            self.anchor,
            &self.margin,
            &work_area,
            size,
            &self.id,
            &snapshot,
        );
        window.set_x(position.x);
        window.set_y(position.y);
        self.last_position = Some(position);
        position
    }
}
