//! Pure geometric layout for the day-view timeline.
//!
//! Converts time ranges into pixel rectangles: `time_mapper` does the
//! minute↔pixel math, `overlap` chains items into overlap groups, `columns`
//! assigns non-overlapping display columns inside a group, and `calculator`
//! composes all three into per-item rectangles.

pub mod calculator;
pub mod columns;
pub mod overlap;
pub mod time_mapper;

pub use calculator::{compute_layout, LayoutResult};
pub use columns::assign_columns;
pub use overlap::{group_overlapping, OverlapGroup};
