//! Day timeline widget: one 24-hour vertical canvas with side-by-side
//! blocks, a sustained-press edit mode, and drag/resize wiring against a
//! caller-owned [`InteractionController`].
//!
//! The widget reports what happened through [`TimelineResponse`]; it never
//! persists anything itself. Committing a reported time change (and
//! rejecting out-of-domain edits) is the owning store's job.

use chrono::{DateTime, Local};
use egui::{Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::color::block_color;
use crate::interaction::{GestureState, InteractionController, ResizeHandle, TimeChange};
use crate::layout::{compute_layout, LayoutResult};
use crate::models::item::{SourceRef, TimelineItem};
use crate::models::settings::TimelineSettings;

/// Width reserved for the hour labels on the left.
pub const TIME_LABEL_WIDTH: f32 = 50.0;
/// Gap between the label column and the block area.
pub const LABEL_GAP: f32 = 5.0;
/// Visual size of the resize handle circle.
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Resize hit zones for one block.
///
/// Small blocks split into top/bottom halves so both handles stay
/// reachable; taller blocks use a fixed 20 px zone at each edge.
#[derive(Debug, Clone, Copy)]
pub struct HandleZones {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleZones {
    pub fn for_block(block: Rect) -> Self {
        let zone_height = if block.height() < 50.0 {
            block.height() / 2.0
        } else {
            20.0
        };

        Self {
            top: Rect::from_min_size(block.min, Vec2::new(block.width(), zone_height)),
            bottom: Rect::from_min_size(
                Pos2::new(block.left(), block.bottom() - zone_height),
                Vec2::new(block.width(), zone_height),
            ),
        }
    }

    /// Check if a point hits a handle zone and return which one
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeHandle> {
        if self.top.contains(pos) {
            Some(ResizeHandle::Top)
        } else if self.bottom.contains(pos) {
            Some(ResizeHandle::Bottom)
        } else {
            None
        }
    }
}

/// What the widget observed this frame.
#[derive(Debug, Clone, Default)]
pub struct TimelineResponse {
    /// A validated commit from a finished drag or resize.
    pub time_change: Option<TimeChange>,
    /// A plain tap on a block; the host shows the detail view.
    pub tapped: Option<SourceRef>,
}

/// Press-in-progress bookkeeping for the sustained-press gesture.
#[derive(Debug, Clone, Copy)]
struct PressTrack {
    source: SourceRef,
    started: f64,
    start_pos: Pos2,
}

/// The day-view timeline widget.
pub struct DayTimeline<'a> {
    items: &'a [TimelineItem],
    settings: &'a TimelineSettings,
    day_anchor: DateTime<Local>,
}

impl<'a> DayTimeline<'a> {
    pub fn new(
        items: &'a [TimelineItem],
        settings: &'a TimelineSettings,
        day_anchor: DateTime<Local>,
    ) -> Self {
        Self {
            items,
            settings,
            day_anchor,
        }
    }

    fn press_id() -> egui::Id {
        egui::Id::new("day_timeline_press_track")
    }

    pub fn show(
        self,
        ui: &mut egui::Ui,
        controller: &mut InteractionController,
    ) -> TimelineResponse {
        controller.configure(self.day_anchor, self.settings);

        let ppm = self.settings.pixels_per_minute();
        let canvas_height = 24.0 * 60.0 * ppm;
        let desired = Vec2::new(ui.available_width(), canvas_height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

        let block_left = rect.left() + TIME_LABEL_WIDTH + LABEL_GAP;
        let block_width = (rect.width() - TIME_LABEL_WIDTH - LABEL_GAP).max(0.0);
        let origin = Pos2::new(block_left, rect.top());

        let layouts = compute_layout(
            self.items,
            ppm,
            block_width,
            self.settings.horizontal_padding,
        );

        self.draw_hour_grid(ui, rect, ppm);
        self.draw_blocks(ui, &layouts, origin, controller);
        self.draw_current_time(ui, rect, ppm);

        self.handle_input(ui, &response, &layouts, origin, controller)
    }

    fn draw_hour_grid(&self, ui: &egui::Ui, rect: Rect, ppm: f32) {
        let dark = ui.style().visuals.dark_mode;
        let line_color = if dark {
            Color32::from_gray(60)
        } else {
            Color32::from_rgb(210, 210, 210)
        };

        let painter = ui.painter_at(rect);
        for hour in 0..24 {
            let y = rect.top() + (hour * 60) as f32 * ppm;
            painter.line_segment(
                [
                    Pos2::new(rect.left() + TIME_LABEL_WIDTH + LABEL_GAP, y),
                    Pos2::new(rect.right(), y),
                ],
                Stroke::new(1.0, line_color),
            );
            painter.text(
                Pos2::new(rect.left() + TIME_LABEL_WIDTH - 5.0, y),
                egui::Align2::RIGHT_TOP,
                format!("{hour:02}:00"),
                FontId::proportional(12.0),
                Color32::GRAY,
            );
        }
    }

    fn draw_blocks(
        &self,
        ui: &egui::Ui,
        layouts: &[LayoutResult],
        origin: Pos2,
        controller: &InteractionController,
    ) {
        let painter = ui.painter();

        for layout in layouts {
            let editing = controller.is_editing(layout.item.source);
            let block = if editing {
                controller
                    .preview_rect()
                    .unwrap_or(layout.rect)
                    .translate(origin.to_vec2())
            } else {
                layout.screen_rect(origin)
            };

            let color = block_color(layout.item.color.as_deref());
            painter.rect_filled(block, 2.0, color);
            // accent bar on the left, like the rest of the app's blocks
            painter.rect_filled(
                Rect::from_min_size(block.min, Vec2::new(4.0, block.height())),
                2.0,
                color.linear_multiply(0.7),
            );

            if layout.item.dashed {
                Self::dashed_outline(painter, block, Stroke::new(1.0, Color32::WHITE));
            }
            if editing {
                painter.rect_stroke(block.expand(1.0), 2.0, Stroke::new(1.5, Color32::WHITE));
            }

            painter.text(
                Pos2::new(block.left() + 9.0, block.top() + 2.0),
                egui::Align2::LEFT_TOP,
                &layout.item.title,
                FontId::proportional(13.0),
                Color32::WHITE,
            );
            if let Some(ref subtitle) = layout.item.subtitle {
                painter.text(
                    Pos2::new(block.left() + 9.0, block.top() + 18.0),
                    egui::Align2::LEFT_TOP,
                    subtitle,
                    FontId::proportional(10.0),
                    Color32::from_rgba_unmultiplied(255, 255, 255, 190),
                );
            }

            if editing && layout.item.editable {
                Self::draw_handles(painter, block, color);
            }
        }
    }

    fn dashed_outline(painter: &egui::Painter, rect: Rect, stroke: Stroke) {
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        for pair in corners.windows(2) {
            painter.extend(egui::Shape::dashed_line(pair, stroke, 4.0, 3.0));
        }
    }

    fn draw_handles(painter: &egui::Painter, block: Rect, color: Color32) {
        for center in [block.center_top(), block.center_bottom()] {
            painter.circle_filled(center, HANDLE_VISUAL_SIZE / 2.0, Color32::WHITE);
            painter.circle_stroke(
                center,
                HANDLE_VISUAL_SIZE / 2.0,
                Stroke::new(1.0, color.linear_multiply(0.6)),
            );
        }
    }

    fn draw_current_time(&self, ui: &egui::Ui, rect: Rect, ppm: f32) {
        let now = Local::now();
        if now.date_naive() != self.day_anchor.date_naive() {
            return;
        }

        let y = rect.top() + crate::layout::time_mapper::y_position(now, ppm);
        let x_start = rect.left() + TIME_LABEL_WIDTH + LABEL_GAP;
        let line_color = Color32::from_rgb(255, 100, 100);

        let painter = ui.painter();
        painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, line_color);
        painter.line_segment(
            [Pos2::new(x_start, y), Pos2::new(rect.right(), y)],
            Stroke::new(2.0, line_color),
        );
    }

    fn handle_input(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        layouts: &[LayoutResult],
        origin: Pos2,
        controller: &mut InteractionController,
    ) -> TimelineResponse {
        let mut out = TimelineResponse::default();
        let ctx = ui.ctx().clone();
        let press_id = Self::press_id();

        let pointer_pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|i| i.pointer.hover_pos()));
        let hit = pointer_pos.and_then(|pos| hit_item(layouts, origin, pos));

        // Sustained press: arm on press-down over an editable block, enter
        // edit mode once the hold time passes without meaningful motion.
        if ui.input(|i| i.pointer.primary_pressed()) {
            if let (Some(pos), Some(layout)) = (pointer_pos, hit) {
                if layout.item.editable && !controller.is_editing(layout.item.source) {
                    let track = PressTrack {
                        source: layout.item.source,
                        started: ui.input(|i| i.time),
                        start_pos: pos,
                    };
                    ctx.memory_mut(|mem| mem.data.insert_temp(press_id, track));
                }
            }
        }

        let track = ctx.memory_mut(|mem| mem.data.get_temp::<PressTrack>(press_id));
        if let Some(track) = track {
            let down = ui.input(|i| i.pointer.primary_down());
            let now = ui.input(|i| i.time);
            let moved = pointer_pos
                .map(|pos| (pos - track.start_pos).length() > self.settings.min_commit_distance_px)
                .unwrap_or(true);

            if !down || moved {
                ctx.memory_mut(|mem| mem.data.remove::<PressTrack>(press_id));
            } else if now - track.started >= self.settings.min_hold_ms as f64 / 1000.0 {
                if let Some(layout) = layouts.iter().find(|l| l.item.source == track.source) {
                    controller.begin_edit(&layout.item, layout.rect);
                }
                ctx.memory_mut(|mem| mem.data.remove::<PressTrack>(press_id));
            } else {
                // keep repainting so the hold can mature without motion
                ctx.request_repaint();
            }
        }

        // Drag / resize on the block in edit mode.
        if controller.editing().is_some() {
            let edit_rect = controller
                .preview_rect()
                .map(|r| r.translate(origin.to_vec2()));

            if response.drag_started() {
                if let (Some(pos), Some(rect)) = (pointer_pos, edit_rect) {
                    if rect.contains(pos) {
                        match HandleZones::for_block(rect).hit_test(pos) {
                            Some(handle) => controller.begin_resize(handle),
                            None => controller.begin_drag(),
                        }
                    }
                }
            }

            if response.dragged() && controller.state().is_active_gesture() {
                controller.update_pointer(response.drag_delta().y);
                ui.output_mut(|o| {
                    o.cursor_icon = match controller.state() {
                        GestureState::Dragging => CursorIcon::Grabbing,
                        _ => CursorIcon::ResizeVertical,
                    }
                });
                ctx.request_repaint();
            }

            if response.drag_stopped() {
                out.time_change = controller.release();
            }

            // Tap outside the editing block exits edit mode.
            if response.clicked() {
                let outside = match (pointer_pos, edit_rect) {
                    (Some(pos), Some(rect)) => !rect.contains(pos),
                    _ => true,
                };
                if outside {
                    controller.exit_edit();
                }
            }
        } else if response.clicked() {
            // Plain tap while idle: detail view, editable or not.
            if let Some(layout) = hit {
                out.tapped = Some(layout.item.source);
            }
        }

        out
    }
}

/// Topmost block containing the pointer, in screen coordinates.
fn hit_item<'a>(layouts: &'a [LayoutResult], origin: Pos2, pos: Pos2) -> Option<&'a LayoutResult> {
    layouts
        .iter()
        .rev()
        .find(|layout| layout.screen_rect(origin).contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn handle_zones_split_small_blocks_in_half() {
        let block = Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(200.0, 40.0));
        let zones = HandleZones::for_block(block);
        assert_eq!(zones.top.height(), 20.0);
        assert_eq!(zones.bottom.height(), 20.0);
        // every point of a small block lands in some zone
        assert_eq!(
            zones.hit_test(Pos2::new(100.0, 110.0)),
            Some(ResizeHandle::Top)
        );
        assert_eq!(
            zones.hit_test(Pos2::new(100.0, 130.0)),
            Some(ResizeHandle::Bottom)
        );
    }

    #[test]
    fn handle_zones_leave_a_draggable_body_on_tall_blocks() {
        let block = Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(200.0, 120.0));
        let zones = HandleZones::for_block(block);
        assert_eq!(
            zones.hit_test(Pos2::new(100.0, 105.0)),
            Some(ResizeHandle::Top)
        );
        assert_eq!(zones.hit_test(Pos2::new(100.0, 160.0)), None);
        assert_eq!(
            zones.hit_test(Pos2::new(100.0, 215.0)),
            Some(ResizeHandle::Bottom)
        );
    }

    #[test]
    fn hit_item_prefers_the_topmost_block() {
        use crate::models::item::{SourceRef, TimelineItem};

        let items = [
            TimelineItem::new(SourceRef::Session(1), "A", at(9, 0), at(10, 0)),
            TimelineItem::new(SourceRef::Event(2), "B", at(9, 0), at(10, 0)),
        ];
        let layouts = compute_layout(&items, 1.0, 200.0, 2.0);
        let origin = Pos2::ZERO;

        // point inside the second column
        let second = layouts
            .iter()
            .find(|l| l.column == 1)
            .expect("two overlapping items need two columns");
        let pos = second.rect.center();
        let hit = hit_item(&layouts, origin, pos).expect("hit");
        assert_eq!(hit.item.source, second.item.source);
    }

    #[test]
    fn hit_item_misses_empty_space() {
        use crate::models::item::{SourceRef, TimelineItem};

        let items = [TimelineItem::new(
            SourceRef::Session(1),
            "A",
            at(9, 0),
            at(10, 0),
        )];
        let layouts = compute_layout(&items, 1.0, 200.0, 2.0);
        assert!(hit_item(&layouts, Pos2::ZERO, Pos2::new(100.0, 1200.0)).is_none());
    }
}
