// Interaction controller
//
// Turns raw pointer deltas into candidate time ranges: live offsets are
// render-only until release, at which point the candidate is gated,
// snapped, validated, and either returned as a commit or discarded with
// the original bounds intact. Rejection is always silent; no commit path
// can leave an item partially mutated.

use chrono::{DateTime, Local};
use egui::{Pos2, Rect, Vec2};

use super::gesture::{GestureState, ResizeHandle};
use crate::layout::time_mapper::{block_height, snap_to_interval, time_from_y_offset, y_position};
use crate::models::item::{SourceRef, TimelineItem};
use crate::models::settings::TimelineSettings;

/// A validated time change ready for the owning collaborator to persist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeChange {
    pub source: SourceRef,
    pub new_start: DateTime<Local>,
    pub new_end: DateTime<Local>,
}

/// State of the one item currently in edit mode.
///
/// Holds the bounds captured when edit mode was entered; the live pointer
/// offset only ever moves the preview geometry until a release commits it.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub source: SourceRef,
    pub original_start: DateTime<Local>,
    pub original_end: DateTime<Local>,
    /// Timeline-relative rect the item had when edit mode was entered.
    pub original_rect: Rect,
    pub state: GestureState,
    /// Accumulated vertical pointer delta of the gesture in progress.
    pub offset_y: f32,
}

/// Gesture state machine for one day view.
///
/// Owns at most one [`EditSession`]; entering edit on a second item exits
/// the first, which keeps edit mode visually exclusive without the
/// controller knowing anything about the view. All inputs arrive as
/// explicit parameters so the controller is testable without a UI.
#[derive(Debug, Clone)]
pub struct InteractionController {
    session: Option<EditSession>,
    day_anchor: DateTime<Local>,
    pixels_per_minute: f32,
    snap_interval_minutes: u32,
    min_commit_distance_px: f32,
}

impl InteractionController {
    pub fn new(day_anchor: DateTime<Local>, settings: &TimelineSettings) -> Self {
        Self {
            session: None,
            day_anchor,
            pixels_per_minute: settings.pixels_per_minute(),
            snap_interval_minutes: settings.snap_interval_minutes,
            min_commit_distance_px: settings.min_commit_distance_px,
        }
    }

    /// Re-apply the day and settings; called whenever the host changes the
    /// visible day or zoom. A session on another day is dropped; a zoom
    /// change rescales the session's geometry to the new pixel scale and
    /// abandons any gesture in flight, since its accumulated offset is in
    /// old pixels.
    pub fn configure(&mut self, day_anchor: DateTime<Local>, settings: &TimelineSettings) {
        if self.day_anchor.date_naive() != day_anchor.date_naive() {
            self.session = None;
        }

        let ppm = settings.pixels_per_minute();
        if ppm != self.pixels_per_minute {
            if let Some(session) = self.session.as_mut() {
                session.original_rect = Self::rect_for_times(
                    session.original_rect,
                    session.original_start,
                    session.original_end,
                    ppm,
                );
                session.state = GestureState::Editing;
                session.offset_y = 0.0;
            }
        }

        self.day_anchor = day_anchor;
        self.pixels_per_minute = ppm;
        self.snap_interval_minutes = settings.snap_interval_minutes;
        self.min_commit_distance_px = settings.min_commit_distance_px;
    }

    pub fn state(&self) -> GestureState {
        self.session
            .as_ref()
            .map(|s| s.state)
            .unwrap_or(GestureState::Idle)
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Source of the item currently in edit mode, if any.
    pub fn editing(&self) -> Option<SourceRef> {
        self.session.as_ref().map(|s| s.source)
    }

    pub fn is_editing(&self, source: SourceRef) -> bool {
        self.editing() == Some(source)
    }

    /// Enter edit mode on an item after its sustained press completed.
    ///
    /// Non-editable items are refused. Any previous session is exited
    /// first, so the single-editor rule holds by construction.
    pub fn begin_edit(&mut self, item: &TimelineItem, rect: Rect) -> bool {
        if !item.editable {
            log::debug!("edit refused for non-editable item {:?}", item.source);
            return false;
        }

        self.session = Some(EditSession {
            source: item.source,
            original_start: item.start,
            original_end: item.end,
            original_rect: rect,
            state: GestureState::Editing,
            offset_y: 0.0,
        });
        true
    }

    /// Leave edit mode, dropping any gesture in progress.
    pub fn exit_edit(&mut self) {
        self.session = None;
    }

    /// Start a body drag; only legal from `Editing`.
    pub fn begin_drag(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.state == GestureState::Editing {
                session.state = GestureState::Dragging;
                session.offset_y = 0.0;
            }
        }
    }

    /// Start a handle resize; only legal from `Editing`.
    pub fn begin_resize(&mut self, handle: ResizeHandle) {
        if let Some(session) = self.session.as_mut() {
            if session.state == GestureState::Editing {
                session.state = handle.gesture();
                session.offset_y = 0.0;
            }
        }
    }

    /// Feed a pointer delta into the gesture in progress. No model
    /// mutation happens here; the offset only moves the preview.
    pub fn update_pointer(&mut self, delta_y: f32) {
        if let Some(session) = self.session.as_mut() {
            if session.state.is_active_gesture() {
                session.offset_y += delta_y;
            }
        }
    }

    /// The rect to render the edited block at while a gesture is live.
    pub fn preview_rect(&self) -> Option<Rect> {
        let session = self.session.as_ref()?;
        let rect = session.original_rect;
        let preview = match session.state {
            GestureState::Dragging => rect.translate(Vec2::new(0.0, session.offset_y)),
            GestureState::ResizingTop => Rect::from_min_max(
                Pos2::new(rect.left(), rect.top() + session.offset_y),
                rect.max,
            ),
            GestureState::ResizingBottom => Rect::from_min_max(
                rect.min,
                Pos2::new(rect.right(), rect.bottom() + session.offset_y),
            ),
            _ => rect,
        };
        Some(preview)
    }

    /// End the gesture in progress and attempt a commit.
    ///
    /// Returns the validated change, or `None` when the gesture was
    /// sub-threshold or would invert the range; either way the session
    /// returns to `Editing`. On a commit the session's bounds advance to
    /// the committed values, so follow-up gestures in the same edit
    /// session measure from where the block now is.
    pub fn release(&mut self) -> Option<TimeChange> {
        let anchor = self.day_anchor;
        let ppm = self.pixels_per_minute;
        let interval = self.snap_interval_minutes;
        let min_distance = self.min_commit_distance_px;

        let session = self.session.as_mut()?;
        let state = session.state;
        let offset = session.offset_y;
        session.state = GestureState::Editing;
        session.offset_y = 0.0;

        let change = match state {
            GestureState::Dragging => {
                if offset.abs() <= min_distance {
                    log::debug!(
                        "drag of {:.1}px on {:?} below threshold, discarded",
                        offset,
                        session.source
                    );
                    None
                } else {
                    let raw =
                        time_from_y_offset(session.original_rect.top() + offset, anchor, ppm);
                    let new_start = snap_to_interval(raw, interval);
                    let new_end = new_start + (session.original_end - session.original_start);
                    Some(TimeChange {
                        source: session.source,
                        new_start,
                        new_end,
                    })
                }
            }
            GestureState::ResizingTop => {
                let raw = time_from_y_offset(session.original_rect.top() + offset, anchor, ppm);
                let new_start = snap_to_interval(raw, interval);
                if new_start >= session.original_end {
                    log::warn!("resize would invert {:?}, ignoring", session.source);
                    None
                } else {
                    Some(TimeChange {
                        source: session.source,
                        new_start,
                        new_end: session.original_end,
                    })
                }
            }
            GestureState::ResizingBottom => {
                let raw = time_from_y_offset(
                    session.original_rect.top() + session.original_rect.height() + offset,
                    anchor,
                    ppm,
                );
                let new_end = snap_to_interval(raw, interval);
                if new_end <= session.original_start {
                    log::warn!("resize would invert {:?}, ignoring", session.source);
                    None
                } else {
                    Some(TimeChange {
                        source: session.source,
                        new_start: session.original_start,
                        new_end,
                    })
                }
            }
            _ => None,
        };

        if let Some(change) = change {
            session.original_start = change.new_start;
            session.original_end = change.new_end;
            session.original_rect = Self::rect_for_times(
                session.original_rect,
                change.new_start,
                change.new_end,
                ppm,
            );
        }

        change
    }

    /// Vertical geometry for a time range, keeping the block's horizontal
    /// extent.
    fn rect_for_times(
        rect: Rect,
        start: DateTime<Local>,
        end: DateTime<Local>,
        pixels_per_minute: f32,
    ) -> Rect {
        Rect::from_min_size(
            Pos2::new(rect.left(), y_position(start, pixels_per_minute)),
            Vec2::new(rect.width(), block_height(start, end, pixels_per_minute)),
        )
    }
}
