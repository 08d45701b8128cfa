//! First-fit column assignment within one overlap group.

use chrono::{DateTime, Local};

use super::overlap::OverlapGroup;
use crate::models::item::SourceRef;

/// Display column assigned to one item of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAssignment {
    pub source: SourceRef,
    pub column: usize,
    pub total_columns: usize,
}

/// Assign each item of a group a display column such that no two items in
/// the same column overlap in time.
///
/// Greedy first-fit in start order: each item takes the leftmost column
/// whose last occupant ended at or before the item's start, opening a new
/// column when none qualifies. `total_columns` is the number of columns the
/// whole group ended up needing, identical for every assignment returned.
pub fn assign_columns(group: &OverlapGroup) -> Vec<ColumnAssignment> {
    // end time of the latest item placed in each column so far
    let mut column_ends: Vec<DateTime<Local>> = Vec::new();
    let mut assignments: Vec<ColumnAssignment> = Vec::with_capacity(group.items.len());

    for item in &group.items {
        let column = match column_ends.iter().position(|&end| end <= item.start) {
            Some(free) => {
                column_ends[free] = item.end;
                free
            }
            None => {
                column_ends.push(item.end);
                column_ends.len() - 1
            }
        };

        assignments.push(ColumnAssignment {
            source: item.source,
            column,
            total_columns: 0,
        });
    }

    let total = column_ends.len();
    for assignment in &mut assignments {
        assignment.total_columns = total;
    }

    assignments
}
