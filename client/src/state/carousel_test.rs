use super::*;

fn slide(title: &str) -> Slide {
    Slide {
        title: title.to_owned(),
        tag: "Nuevo".to_owned(),
        description: format!("{title} description"),
        image: ImageHandle { src: format!("/assets/{title}.png"), alt: title.to_owned(), fallback_src: None },
    }
}

fn collection(len: usize) -> SlideCollection {
    let slides = (0..len).map(|i| slide(&format!("slide-{i}"))).collect();
    SlideCollection::new(slides).expect("non-empty collection")
}

fn carousel(len: usize) -> CarouselState {
    CarouselState::new(collection(len))
}

// =============================================================
// SlideCollection
// =============================================================

#[test]
fn empty_collection_is_rejected() {
    assert_eq!(SlideCollection::new(Vec::new()), Err(CarouselError::EmptyCollection));
}

#[test]
fn with_first_keeps_order() {
    let slides = SlideCollection::with_first(slide("a"), [slide("b"), slide("c")]);
    let titles: Vec<_> = slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["a", "b", "c"]);
    assert!(!slides.is_empty());
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_carousel_starts_at_zero_and_playing() {
    let state = carousel(5);
    assert_eq!(state.current_index(), 0);
    assert!(!state.is_modal_open());
    assert!(state.is_playing());
    assert_eq!(state.mode(), AutoplayMode::Playing);
    assert_eq!(state.current_slide().title, "slide-0");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_wraps_modulo_length() {
    for start in 0..5 {
        for n in 0..12 {
            let mut state = carousel(5);
            state.go_to(start).unwrap();
            for _ in 0..n {
                state.next();
            }
            assert_eq!(state.current_index(), (start + n) % 5, "start={start} n={n}");
        }
    }
}

#[test]
fn previous_is_inverse_of_next() {
    for i in 0..5 {
        let mut state = carousel(5);
        state.go_to(i).unwrap();
        state.next();
        state.previous();
        assert_eq!(state.current_index(), i);
    }
}

#[test]
fn previous_wraps_from_zero_to_last() {
    let mut state = carousel(5);
    state.previous();
    assert_eq!(state.current_index(), 4);
}

#[test]
fn single_slide_navigation_stays_at_zero() {
    let mut state = carousel(1);
    state.next();
    state.previous();
    assert_eq!(state.current_index(), 0);
}

#[test]
fn go_to_sets_index_without_touching_modal() {
    let mut state = carousel(5);
    state.open_detail();
    state.go_to(3).unwrap();
    assert_eq!(state.current_index(), 3);
    assert!(state.is_modal_open());

    state.close_detail();
    state.go_to(1).unwrap();
    assert_eq!(state.current_index(), 1);
    assert!(!state.is_modal_open());
}

#[test]
fn go_to_out_of_range_is_rejected_and_state_unchanged() {
    let mut state = carousel(5);
    state.go_to(2).unwrap();
    let before = state.clone();
    assert_eq!(state.go_to(5), Err(CarouselError::IndexOutOfRange { index: 5, len: 5 }));
    assert_eq!(state, before);
}

#[test]
fn documented_call_sequence_yields_expected_indices() {
    let mut state = carousel(5);
    let mut seen = Vec::new();
    state.next();
    seen.push(state.current_index());
    state.next();
    seen.push(state.current_index());
    state.previous();
    seen.push(state.current_index());
    state.go_to(4).unwrap();
    seen.push(state.current_index());
    state.next();
    seen.push(state.current_index());
    assert_eq!(seen, [1, 2, 1, 4, 0]);
}

// =============================================================
// Detail view
// =============================================================

#[test]
fn open_then_close_leaves_index_and_returns_to_playing() {
    let mut state = carousel(5);
    state.go_to(2).unwrap();
    state.open_detail();
    assert_eq!(state.mode(), AutoplayMode::Paused);
    state.close_detail();
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.mode(), AutoplayMode::Playing);
}

#[test]
fn modal_transitions_restart_timer() {
    let mut state = carousel(5);
    let (generation, _) = state.autoplay_key();
    state.open_detail();
    let (paused_generation, playing) = state.autoplay_key();
    assert_ne!(paused_generation, generation);
    assert!(!playing);
    state.close_detail();
    let (resumed_generation, playing) = state.autoplay_key();
    assert_ne!(resumed_generation, paused_generation);
    assert!(playing);
}

#[test]
fn repeated_open_is_noop() {
    let mut state = carousel(5);
    state.open_detail();
    let key = state.autoplay_key();
    state.open_detail();
    assert_eq!(state.autoplay_key(), key);
}

#[test]
fn close_when_already_closed_is_noop() {
    let mut state = carousel(5);
    let key = state.autoplay_key();
    state.close_detail();
    assert_eq!(state.autoplay_key(), key);
}

// =============================================================
// Autoplay
// =============================================================

#[test]
fn autoplay_advances_once_after_full_interval() {
    let mut state = carousel(5);
    assert_eq!(state.advance_time(AUTOPLAY_INTERVAL_MS - 1), 0);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.advance_time(1), 1);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn autoplay_wraps_at_end() {
    let mut state = carousel(3);
    state.go_to(2).unwrap();
    state.autoplay_tick();
    assert_eq!(state.current_index(), 0);
}

#[test]
fn autoplay_long_idle_counts_every_interval() {
    let mut state = carousel(5);
    assert_eq!(state.advance_time(AUTOPLAY_INTERVAL_MS * 7 + 10), 7);
    assert_eq!(state.current_index(), 2);
}

#[test]
fn autoplay_ticks_do_not_restart_interval() {
    let mut state = carousel(5);
    let key = state.autoplay_key();
    state.autoplay_tick();
    assert_eq!(state.autoplay_key(), key);
}

#[test]
fn open_modal_suspends_advance_until_closed() {
    let mut state = carousel(5);
    state.advance_time(5000);
    state.open_detail();
    assert_eq!(state.advance_time(AUTOPLAY_INTERVAL_MS * 3), 0);
    assert_eq!(state.current_index(), 0);

    state.close_detail();
    // Fresh interval: the 5000 ms accumulated before opening are gone.
    assert_eq!(state.advance_time(AUTOPLAY_INTERVAL_MS - 1), 0);
    assert_eq!(state.advance_time(1), 1);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn manual_navigation_restarts_interval() {
    let mut state = carousel(5);
    state.advance_time(7000);
    state.next();
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.advance_time(7000), 0);
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.advance_time(1000), 1);
    assert_eq!(state.current_index(), 2);
}

#[test]
fn go_to_changes_autoplay_key_and_restarts_interval() {
    let mut state = carousel(5);
    let key = state.autoplay_key();
    state.advance_time(7000);
    state.go_to(3).expect("in range");
    assert_ne!(state.autoplay_key(), key);
    assert!(state.autoplay_key().1);
    assert_eq!(state.advance_time(7000), 0);
    assert_eq!(state.advance_time(1000), 1);
    assert_eq!(state.current_index(), 4);
}

#[test]
fn rejected_go_to_keeps_autoplay_key() {
    let mut state = carousel(5);
    let key = state.autoplay_key();
    assert!(state.go_to(9).is_err());
    assert_eq!(state.autoplay_key(), key);
}

#[test]
fn navigating_swipes_change_autoplay_key() {
    let mut state = carousel(5);
    let key = state.autoplay_key();
    state.gesture_start(200.0);
    state.gesture_end(120.0);
    let after_next = state.autoplay_key();
    assert_ne!(after_next, key);

    state.gesture_start(100.0);
    state.gesture_end(200.0);
    assert_ne!(state.autoplay_key(), after_next);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn short_swipe_keeps_autoplay_key() {
    let mut state = carousel(5);
    state.advance_time(5000);
    let key = state.autoplay_key();
    state.gesture_start(200.0);
    state.gesture_end(170.0);
    assert_eq!(state.autoplay_key(), key);
    assert_eq!(state.advance_time(3000), 1);
}

// =============================================================
// Gestures
// =============================================================

#[test]
fn swipe_left_sixty_units_advances_once() {
    let mut state = carousel(5);
    state.gesture_start(200.0);
    assert_eq!(state.gesture_end(140.0), Some(SwipeDirection::Next));
    assert_eq!(state.current_index(), 1);
}

#[test]
fn swipe_forty_units_is_ignored() {
    let mut state = carousel(5);
    state.gesture_start(200.0);
    assert_eq!(state.gesture_end(160.0), None);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn swipe_right_goes_back() {
    let mut state = carousel(5);
    state.gesture_start(100.0);
    assert_eq!(state.gesture_end(180.0), Some(SwipeDirection::Previous));
    assert_eq!(state.current_index(), 4);
}

#[test]
fn swipe_exactly_at_threshold_is_ignored() {
    assert_eq!(classify_swipe(100.0, 50.0), None);
    assert_eq!(classify_swipe(50.0, 100.0), None);
    assert_eq!(classify_swipe(100.0, 49.0), Some(SwipeDirection::Next));
}

#[test]
fn gesture_end_without_start_is_noop() {
    let mut state = carousel(5);
    assert_eq!(state.gesture_end(0.0), None);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn gesture_start_is_consumed_by_end() {
    let mut state = carousel(5);
    state.gesture_start(300.0);
    state.gesture_end(100.0);
    assert_eq!(state.gesture_end(0.0), None);
    assert_eq!(state.current_index(), 1);
}

#[test]
fn nan_coordinates_never_navigate() {
    let mut state = carousel(5);
    state.gesture_start(f64::NAN);
    assert_eq!(state.gesture_end(0.0), None);
    assert_eq!(state.current_index(), 0);
}
