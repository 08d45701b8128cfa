//! egui glue for the timeline engine.
//!
//! `day_timeline` wires pointer input into the interaction controller and
//! paints plain blocks; visual styling beyond the item-supplied color is
//! the host app's business.

pub mod color;
pub mod day_timeline;

pub use day_timeline::{DayTimeline, TimelineResponse};
