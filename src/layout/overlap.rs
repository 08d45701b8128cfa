//! Overlap grouping: partitions a day's items into maximal chains of
//! time-overlapping items.
//!
//! Membership is transitive through overlap chains, not pairwise: an item
//! late in a long chain may not itself overlap an item early in the chain
//! when intermediate items bridge them. This keeps grouping a single linear
//! pass over the sorted items, at the cost of occasionally wider groups
//! than true interval-graph coloring would produce.

use chrono::{DateTime, Local};

use crate::models::item::TimelineItem;

/// A maximal chain of directly or transitively overlapping items, sorted by
/// start time, plus the chain's aggregate span.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup {
    pub items: Vec<TimelineItem>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

/// Partition items into overlap groups.
///
/// Items are stable-sorted by start time (equal starts keep their input
/// order), then chained: an item joins the open group when its start is
/// strictly before the group's running end, which is extended to the max of
/// itself and the item's end. Every input item lands in exactly one group;
/// items overlapping nothing become singleton groups.
pub fn group_overlapping(items: &[TimelineItem]) -> Vec<OverlapGroup> {
    let mut sorted: Vec<TimelineItem> = items.to_vec();
    sorted.sort_by_key(|item| item.start);

    let mut groups: Vec<OverlapGroup> = Vec::new();

    for item in sorted {
        match groups.last_mut() {
            Some(group) if item.start < group.end => {
                group.end = group.end.max(item.end);
                group.items.push(item);
            }
            _ => {
                groups.push(OverlapGroup {
                    start: item.start,
                    end: item.end,
                    items: vec![item],
                });
            }
        }
    }

    groups
}
