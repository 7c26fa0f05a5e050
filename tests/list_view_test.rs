use srt_sync::{SrtParser, Subtitle, SubtitleList, SyncEvent};

#[test]
fn test_build_matches_track_order() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n\n2\n00:00:03,000 --> 00:00:04,000\nSecond\n";
    let track = SrtParser::parse_str(srt);

    let list = SubtitleList::build(&track);

    assert_eq!(list.len(), 2);
    let texts: Vec<&str> = list.iter().map(|entry| entry.text.as_str()).collect();
    assert_eq!(texts, vec!["First", "Second"]);
}

#[test]
fn test_stale_event_matches_nothing() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n";
    let mut list = SubtitleList::build(&SrtParser::parse_str(srt));

    // Диапазон события не встречается в списке - подсветки нет
    let stale = SyncEvent::Active(Subtitle::new(7.0, 9.0, "Elsewhere".to_string()));
    assert_eq!(list.apply(&stale), None);
    assert_eq!(list.current_index(), None);
}

#[test]
fn test_rebuild_invalidates_old_highlight() {
    let old_srt = "1\n00:00:01,000 --> 00:00:02,000\nOld subtitle\n";
    let old_track = SrtParser::parse_str(old_srt);
    let mut list = SubtitleList::build(&old_track);

    // Подсвечиваем элемент старой дорожки
    let old_event = SyncEvent::Active(old_track[0].clone());
    assert_eq!(list.apply(&old_event), Some(0));

    // Перестраиваем список по новой дорожке с другими диапазонами
    let new_srt = "1\n00:00:05,000 --> 00:00:06,000\nNew subtitle\n";
    list = SubtitleList::build(&SrtParser::parse_str(new_srt));

    // Свежепостроенный список ничего не подсвечивает,
    // а событие старой дорожки не находит совпадений
    assert_eq!(list.current_index(), None);
    assert_eq!(list.apply(&old_event), None);
    assert_eq!(list.current_index(), None);
}

#[test]
fn test_duplicate_ranges_all_marked_first_returned() {
    // Два блока с одинаковым диапазоном дают неразличимые элементы
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nTake one\n\n2\n00:00:01,000 --> 00:00:02,000\nTake two\n";
    let mut list = SubtitleList::build(&SrtParser::parse_str(srt));

    let event = SyncEvent::Active(Subtitle::new(1.0, 2.0, "Take one".to_string()));
    assert_eq!(list.apply(&event), Some(0));

    // Подсвечиваются оба, целью прокрутки становится первый
    assert_eq!(list.iter().filter(|entry| entry.current).count(), 2);
}

#[test]
fn test_scroll_target_follows_highlight() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n\n2\n00:00:03,000 --> 00:00:04,000\nSecond\n";
    let track = SrtParser::parse_str(srt);
    let mut list = SubtitleList::build(&track);

    // Цель прокрутки повторяет подсветку на каждом событии
    assert_eq!(list.apply(&SyncEvent::Active(track[0].clone())), Some(0));
    assert_eq!(list.apply(&SyncEvent::Active(track[0].clone())), Some(0));
    assert_eq!(list.apply(&SyncEvent::Active(track[1].clone())), Some(1));
    assert_eq!(list.apply(&SyncEvent::Clear), None);
}

#[test]
fn test_selection_persists_across_rebuild_events() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n\n2\n00:00:03,000 --> 00:00:04,000\nSecond\n";
    let track = SrtParser::parse_str(srt);
    let mut list = SubtitleList::build(&track);

    // Выбор пользователя и подсветка текущего живут независимо
    list.select(0).unwrap();
    list.apply(&SyncEvent::Active(track[1].clone()));

    assert_eq!(list.selected_index(), Some(0));
    assert_eq!(list.current_index(), Some(1));

    let entry = list.get(1).unwrap();
    assert!(entry.current);
    assert!(!entry.selected);
}
