// Timeline item module
// Common projected shape for everything placed on the day view

use chrono::{DateTime, Local};
use thiserror::Error;

/// Reference back to the record a timeline item was projected from.
///
/// Each collaborator store (study sessions, scheduled events, exams,
/// breaks) maps its own rows into [`TimelineItem`]s; this sum carries the
/// store plus the row id so a commit can be routed back without the engine
/// ever branching on the concrete record shape. It also doubles as the
/// item's identity: two items from the same store never share a row id
/// within one day, so `SourceRef` is unique per day by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRef {
    Session(i64),
    Event(i64),
    Exam(i64),
    Break(i64),
}

/// Errors from timeline item validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("item title cannot be empty")]
    EmptyTitle,
    #[error("color must be in hex format (#RRGGBB)")]
    BadColor,
}

/// A single time-bounded entity on the day view.
///
/// Items are rebuilt from the collaborator stores on every recompute; the
/// engine never persists them. `end <= start` is tolerated by the layout
/// stage (such items render at the minimum block height) so inconsistent
/// source data is preserved as-is for the caller to handle.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub source: SourceRef,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub title: String,
    pub subtitle: Option<String>,
    /// Hex color like "#4A90D9"; the view falls back to a default when
    /// absent or unparseable.
    pub color: Option<String>,
    /// Icon name resolved by the host app.
    pub icon: Option<String>,
    /// Render with a dashed outline (planned but unconfirmed slots).
    pub dashed: bool,
    /// Historical/completed items are not editable; they still respond to
    /// taps for the detail view.
    pub editable: bool,
}

impl TimelineItem {
    /// Create an item with the required fields; everything else defaults.
    pub fn new(
        source: SourceRef,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Self {
        Self {
            source,
            start,
            end,
            title: title.into(),
            subtitle: None,
            color: None,
            icon: None,
            dashed: false,
            editable: true,
        }
    }

    /// Create a builder for constructing items with optional fields
    pub fn builder(
        source: SourceRef,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> TimelineItemBuilder {
        TimelineItemBuilder {
            item: Self::new(source, title, start, end),
        }
    }

    /// Validate the projected fields.
    ///
    /// Note: start/end ordering is deliberately not validated here; the
    /// layout stage is total over inverted ranges (minimum-height clamp) and the
    /// owning store is responsible for its own domain rules.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.title.trim().is_empty() {
            return Err(ItemError::EmptyTitle);
        }
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || color.len() != 7 {
                return Err(ItemError::BadColor);
            }
        }
        Ok(())
    }

    /// Get the duration of the item
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Builder for timeline items with optional fields
pub struct TimelineItemBuilder {
    item: TimelineItem,
}

impl TimelineItemBuilder {
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.item.subtitle = Some(subtitle.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.item.color = Some(color.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.item.icon = Some(icon.into());
        self
    }

    pub fn dashed(mut self, dashed: bool) -> Self {
        self.item.dashed = dashed;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.item.editable = editable;
        self
    }

    pub fn build(self) -> TimelineItem {
        self.item
    }
}
