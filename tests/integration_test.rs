// Integration tests: the four collaborator stores feed one homogenized
// item list through layout and the gesture machine, end to end.

use chrono::{DateTime, Duration, Local, TimeZone};
use pretty_assertions::assert_eq;

use day_timeline::interaction::{GestureState, InteractionController, ResizeHandle};
use day_timeline::layout::compute_layout;
use day_timeline::models::item::{SourceRef, TimelineItem};
use day_timeline::models::settings::TimelineSettings;

const WIDTH: f32 = 300.0;

fn at(h: u32, m: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
}

/// One day as the four stores would hand it over: a study session, a
/// scheduled event overlapping it, an exam, and a completed break.
fn study_day() -> Vec<TimelineItem> {
    vec![
        TimelineItem::builder(SourceRef::Session(11), "Algebra revision", at(9, 0), at(10, 0))
            .subtitle("Chapter 4")
            .color("#4A90D9")
            .build(),
        TimelineItem::builder(SourceRef::Event(3), "Study group", at(9, 30), at(10, 30))
            .color("#7ED321")
            .dashed(true)
            .build(),
        TimelineItem::builder(SourceRef::Exam(1), "Physics mock", at(13, 0), at(15, 0))
            .color("#D0021B")
            .build(),
        TimelineItem::builder(SourceRef::Break(8), "Lunch", at(12, 0), at(12, 30))
            .editable(false)
            .build(),
    ]
}

#[test]
fn full_day_layout_places_every_store() {
    let items = study_day();
    let settings = TimelineSettings::default();
    let layouts = compute_layout(
        &items,
        settings.pixels_per_minute(),
        WIDTH,
        settings.horizontal_padding,
    );

    assert_eq!(layouts.len(), items.len());

    // session and event overlap: side by side at half width
    let session = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Session(11))
        .unwrap();
    let event = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Event(3))
        .unwrap();
    assert_eq!(session.total_columns, 2);
    assert_eq!(event.total_columns, 2);
    assert_ne!(session.column, event.column);
    assert_eq!(session.rect.width(), (WIDTH - 2.0) / 2.0);

    // exam and break stand alone at full width
    let exam = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Exam(1))
        .unwrap();
    assert_eq!(exam.total_columns, 1);
    assert_eq!(exam.rect.width(), WIDTH);
    assert_eq!(exam.rect.top(), 780.0);
    assert_eq!(exam.rect.height(), 120.0);
}

#[test]
fn drag_a_session_and_commit_through_the_controller() {
    let items = study_day();
    let settings = TimelineSettings::default();
    let layouts = compute_layout(
        &items,
        settings.pixels_per_minute(),
        WIDTH,
        settings.horizontal_padding,
    );
    let session = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Session(11))
        .unwrap();

    let mut ctrl = InteractionController::new(at(0, 0), &settings);
    assert!(ctrl.begin_edit(&session.item, session.rect));
    ctrl.begin_drag();
    ctrl.update_pointer(37.0);

    let change = ctrl.release().expect("drag should commit");
    assert_eq!(change.source, SourceRef::Session(11));
    assert_eq!(change.new_start, at(9, 30));
    assert_eq!(change.new_end, at(10, 30));
    assert_eq!(change.new_end - change.new_start, Duration::minutes(60));

    // the engine never mutates the item; the store applies the change
    assert_eq!(session.item.start, at(9, 0));
}

#[test]
fn completed_break_cannot_enter_edit_mode_but_sessions_can() {
    let items = study_day();
    let settings = TimelineSettings::default();
    let layouts = compute_layout(
        &items,
        settings.pixels_per_minute(),
        WIDTH,
        settings.horizontal_padding,
    );
    let mut ctrl = InteractionController::new(at(0, 0), &settings);

    let lunch = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Break(8))
        .unwrap();
    assert!(!ctrl.begin_edit(&lunch.item, lunch.rect));
    assert_eq!(ctrl.state(), GestureState::Idle);

    let exam = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Exam(1))
        .unwrap();
    assert!(ctrl.begin_edit(&exam.item, exam.rect));
    assert_eq!(ctrl.state(), GestureState::Editing);
}

#[test]
fn resize_rejection_leaves_the_session_editable() {
    let items = study_day();
    let settings = TimelineSettings::default();
    let layouts = compute_layout(
        &items,
        settings.pixels_per_minute(),
        WIDTH,
        settings.horizontal_padding,
    );
    let exam = layouts
        .iter()
        .find(|l| l.item.source == SourceRef::Exam(1))
        .unwrap();

    let mut ctrl = InteractionController::new(at(0, 0), &settings);
    ctrl.begin_edit(&exam.item, exam.rect);

    // drag the top handle past the end: discarded
    ctrl.begin_resize(ResizeHandle::Top);
    ctrl.update_pointer(150.0);
    assert_eq!(ctrl.release(), None);
    assert_eq!(ctrl.state(), GestureState::Editing);

    // a sane follow-up resize still works in the same session
    ctrl.begin_resize(ResizeHandle::Bottom);
    ctrl.update_pointer(30.0);
    let change = ctrl.release().expect("valid resize should commit");
    assert_eq!(change.new_end, at(15, 30));
    assert_eq!(change.new_start, at(13, 0));
}

#[test]
fn settings_round_trip_through_serde() {
    let settings = TimelineSettings {
        zoom: 1.5,
        snap_interval_minutes: 15,
        min_commit_distance_px: 8.0,
        min_hold_ms: 250,
        horizontal_padding: 3.0,
    };

    let json = serde_json::to_string(&settings).expect("serialize");
    let loaded: TimelineSettings = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(loaded, settings);
    assert_eq!(loaded.pixels_per_minute(), 1.5);
}
