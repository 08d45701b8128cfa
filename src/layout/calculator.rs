//! Full per-item pixel layout: overlap grouping + column assignment +
//! time→pixel mapping composed into one pure pass.

use egui::{Pos2, Rect, Vec2};

use super::columns::assign_columns;
use super::overlap::group_overlapping;
use super::time_mapper::{block_height, y_position};
use crate::models::item::TimelineItem;

/// Computed geometry for one item, in timeline-relative coordinates
/// (x 0 at the left edge of the block area, y 0 at midnight).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub item: TimelineItem,
    pub rect: Rect,
    /// Column index and group column count, kept for diagnostics.
    pub column: usize,
    pub total_columns: usize,
}

impl LayoutResult {
    /// The rect translated into screen space given the timeline origin.
    pub fn screen_rect(&self, origin: Pos2) -> Rect {
        self.rect.translate(origin.to_vec2())
    }
}

/// Compute the pixel rectangle for every item of one day.
///
/// Pure function of its arguments; recompute on any item-set, width, or
/// zoom change. Items sharing an overlap group split the available width
/// evenly across the group's columns with `horizontal_padding` pixels
/// between columns. Empty input yields empty output.
pub fn compute_layout(
    items: &[TimelineItem],
    pixels_per_minute: f32,
    available_width: f32,
    horizontal_padding: f32,
) -> Vec<LayoutResult> {
    let mut results = Vec::with_capacity(items.len());

    for group in group_overlapping(items) {
        let assignments = assign_columns(&group);

        for (item, assignment) in group.items.into_iter().zip(assignments) {
            let total = assignment.total_columns;
            let width = (available_width - (total - 1) as f32 * horizontal_padding) / total as f32;
            let x = assignment.column as f32 * (width + horizontal_padding);
            let y = y_position(item.start, pixels_per_minute);
            let height = block_height(item.start, item.end, pixels_per_minute);

            results.push(LayoutResult {
                item,
                rect: Rect::from_min_size(Pos2::new(x, y), Vec2::new(width, height)),
                column: assignment.column,
                total_columns: total,
            });
        }
    }

    results
}
