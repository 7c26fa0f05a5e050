use srt_sync::{Subtitle, SubtitleTrack, SyncEngine, SyncEvent};

fn two_subtitle_track() -> SubtitleTrack {
    let mut track = SubtitleTrack::new();
    track.add(Subtitle::new(0.0, 2.0, "First".to_string()));
    track.add(Subtitle::new(2.0, 4.0, "Second".to_string()));
    track
}

#[test]
fn test_active_at_inside_range() {
    let track = two_subtitle_track();

    let active = SyncEngine::active_at(&track, 1.5).unwrap();
    assert_eq!(active.text, "First");
}

#[test]
fn test_active_at_bounds_are_inclusive() {
    let track = two_subtitle_track();

    // Начало первого диапазона и конец последнего принадлежат диапазонам
    assert_eq!(SyncEngine::active_at(&track, 0.0).unwrap().text, "First");
    assert_eq!(SyncEngine::active_at(&track, 4.0).unwrap().text, "Second");
}

#[test]
fn test_active_at_shared_boundary_first_wins() {
    let track = two_subtitle_track();

    // Момент 2.0 принадлежит обоим диапазонам, выигрывает первый по порядку
    let active = SyncEngine::active_at(&track, 2.0).unwrap();
    assert_eq!(active.text, "First");
}

#[test]
fn test_active_at_outside_ranges() {
    let track = two_subtitle_track();

    assert!(SyncEngine::active_at(&track, 5.0).is_none());
    assert!(SyncEngine::active_at(&track, -1.0).is_none());
}

#[test]
fn test_active_at_overlapping_ranges_first_wins() {
    let mut track = SubtitleTrack::new();
    track.add(Subtitle::new(0.0, 5.0, "Wide".to_string()));
    track.add(Subtitle::new(2.0, 4.0, "Nested".to_string()));

    // Вложенный диапазон не успевает: просмотр идет в исходном порядке
    assert_eq!(SyncEngine::active_at(&track, 3.0).unwrap().text, "Wide");
}

#[test]
fn test_on_tick_emits_active_and_updates_state() {
    let track = two_subtitle_track();
    let mut engine = SyncEngine::new();

    let event = engine.on_tick(1.0, &track);

    assert_eq!(
        event,
        SyncEvent::Active(Subtitle::new(0.0, 2.0, "First".to_string()))
    );
    assert_eq!(engine.state().active_range, Some((0.0, 2.0)));
}

#[test]
fn test_on_tick_emits_clear_outside_ranges() {
    let track = two_subtitle_track();
    let mut engine = SyncEngine::new();

    let event = engine.on_tick(10.0, &track);

    assert_eq!(event, SyncEvent::Clear);
    assert_eq!(engine.state().active_range, None);
}

#[test]
fn test_on_tick_rederives_activity_every_tick() {
    let track = two_subtitle_track();
    let mut engine = SyncEngine::new();

    // Результат тика зависит только от дорожки и момента времени
    assert_eq!(engine.on_tick(1.0, &track), SyncEvent::Active(track[0].clone()));
    assert_eq!(engine.on_tick(10.0, &track), SyncEvent::Clear);
    assert_eq!(engine.on_tick(3.0, &track), SyncEvent::Active(track[1].clone()));
    assert_eq!(engine.state().active_range, Some((2.0, 4.0)));
}

#[test]
fn test_on_tick_empty_track() {
    let track = SubtitleTrack::new();
    let mut engine = SyncEngine::new();

    assert_eq!(engine.on_tick(0.0, &track), SyncEvent::Clear);
    assert_eq!(engine.state().active_range, None);
}

#[test]
fn test_reset_clears_state() {
    let track = two_subtitle_track();
    let mut engine = SyncEngine::new();

    engine.on_tick(1.0, &track);
    assert!(engine.state().active_range.is_some());

    engine.reset();
    assert_eq!(engine.state().active_range, None);
}
