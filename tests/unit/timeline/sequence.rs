use super::*;

fn quiz4() -> Timeline {
    Timeline::new(4, 240, 90).unwrap()
}

#[test]
fn total_duration_sums_windows() {
    assert_eq!(quiz4().total_duration(), 1050);
    assert_eq!(Timeline::new(0, 240, 90).unwrap().total_duration(), 90);
}

#[test]
fn active_window_respects_half_open_bounds() {
    let t = quiz4();
    let slot = |f| t.active_window(f).map(|a| a.slot);
    assert_eq!(slot(0), Some(WindowSlot::Choice(0)));
    assert_eq!(slot(239), Some(WindowSlot::Choice(0)));
    assert_eq!(slot(240), Some(WindowSlot::Choice(1)));
    assert_eq!(slot(959), Some(WindowSlot::Choice(3)));
    assert_eq!(slot(960), Some(WindowSlot::End));
    assert_eq!(slot(1049), Some(WindowSlot::End));
    assert_eq!(slot(1050), None);
    assert_eq!(slot(-1), None);
}

#[test]
fn relative_frame_rebases_to_window_start() {
    let t = quiz4();
    let w1 = t.choice_window(1).unwrap();
    assert_eq!(w1.start, 240);
    assert_eq!(w1.relative_frame(300), 60);
    assert_eq!(w1.relative_frame(200), -40);

    let active = t.active_window(300).unwrap();
    assert_eq!(active.local_frame, 60);
    assert_eq!(t.active_window(960).unwrap().local_frame, 0);
}

#[test]
fn relative_frame_saturates_far_outside_the_window() {
    let w1 = quiz4().choice_window(1).unwrap();
    assert_eq!(w1.relative_frame(i64::MIN), i64::MIN);
    assert_eq!(w1.relative_frame(i64::MAX), i64::MAX - 240);

    let huge = TimelineWindow {
        start: u64::MAX,
        length: 1,
    };
    assert_eq!(huge.relative_frame(0), -i64::MAX);
    assert!(!huge.contains(i64::MAX));
}

#[test]
fn windows_are_contiguous_and_cover_timeline() {
    let t = quiz4();
    let windows: Vec<_> = t.windows().collect();
    assert_eq!(windows.len(), 5);
    let mut cursor = 0;
    for (_, w) in &windows {
        assert_eq!(w.start, cursor);
        cursor = w.end();
    }
    assert_eq!(cursor, t.total_duration());
    assert_eq!(windows[4].0, WindowSlot::End);
    assert_eq!(windows[4].1, TimelineWindow { start: 960, length: 90 });
}

#[test]
fn empty_choice_list_starts_end_window_at_zero() {
    let t = Timeline::new(0, 240, 90).unwrap();
    assert_eq!(t.choice_window(0), None);
    assert_eq!(t.end_window().start, 0);
    assert_eq!(t.active_window(0).unwrap().slot, WindowSlot::End);
}

#[test]
fn zero_durations_are_rejected() {
    assert!(Timeline::new(4, 0, 90).is_err());
    assert!(Timeline::new(4, 240, 0).is_err());
    assert!(Timeline::new(usize::MAX, u64::MAX, 1).is_err());
}

#[test]
fn window_contains_matches_range() {
    let w = quiz4().choice_window(2).unwrap();
    assert!(w.contains(480));
    assert!(!w.contains(720));
    assert!(!w.contains(-5));
    assert!(w.range().contains(FrameIndex(719)));
    assert_eq!(
        quiz4().active_at(FrameIndex(720)).map(|a| a.slot),
        Some(WindowSlot::Choice(3))
    );
}
