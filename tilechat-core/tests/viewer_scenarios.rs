//! Carousel viewer scenario tests
//!
//! These drive a mounted viewer with explicit instants and check pagination,
//! auto-advance hold/wrap, manual pause, visibility gating, gesture
//! debouncing and teardown.

use std::time::{Duration, Instant};

use tilechat_core::carousel::playback::PlaybackPhase;
use tilechat_core::{
    CarouselViewer, Presentation, ViewerConfig, ViewerEvent, ViewerMessage,
    WrapMode,
};
use tilechat_model::Item;

const TICK: Duration = Duration::from_millis(5_000);
const DEBOUNCE: Duration = Duration::from_millis(50);

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            detail_url: format!("https://shop.example/tile-{i}"),
            ..Item::new(format!("Tile {i}"), 50.0 + i as f64)
        })
        .collect()
}

fn mount(n: usize) -> (CarouselViewer<Item>, Instant) {
    let t0 = Instant::now();
    (CarouselViewer::mount(items(n), ViewerConfig::tile_defaults(), t0), t0)
}

#[test]
fn initial_window_respects_page_size() {
    let cases = [
        (0, 0, false),
        (3, 3, false),
        (25, 25, false),
        (26, 25, true),
        (30, 25, true),
    ];
    for (n, window, has_more) in cases {
        let (viewer, _) = mount(n);
        assert_eq!(viewer.window().window_size(), window, "n={n}");
        assert_eq!(viewer.window().has_more(), has_more, "n={n}");
        assert_eq!(viewer.current_index(), 0);
    }
}

#[test]
fn empty_list_presents_no_items_and_never_ticks() {
    let (mut viewer, t0) = mount(0);
    assert!(matches!(viewer.presentation(), Presentation::Empty));
    assert_eq!(viewer.next_deadline(), None);
    assert!(viewer.update(ViewerMessage::Next, t0).is_empty());
    assert!(viewer.update(ViewerMessage::Previous, t0).is_empty());
    assert!(viewer.poll(t0 + TICK * 3).is_empty());
}

#[test]
fn single_item_does_not_auto_advance() {
    let (viewer, _) = mount(1);
    assert!(viewer.is_playing());
    assert!(!viewer.is_auto_advancing());
    assert_eq!(viewer.next_deadline(), None);
}

#[test]
fn three_items_tick_and_wrap() {
    let (mut viewer, t0) = mount(3);
    assert_eq!(viewer.next_deadline(), Some(t0 + TICK));

    assert_eq!(
        viewer.poll(t0 + TICK),
        vec![ViewerEvent::IndexChanged { index: 1 }]
    );
    viewer.poll(t0 + TICK * 2);
    assert_eq!(viewer.current_index(), 2);
    viewer.poll(t0 + TICK * 3);
    assert_eq!(viewer.current_index(), 0);
}

#[test]
fn tick_holds_at_last_item_while_more_can_load() {
    let (mut viewer, t0) = mount(30);
    viewer.update(ViewerMessage::SetPlaying(true), t0);
    for i in 1..=24 {
        viewer.poll(t0 + TICK * i);
    }
    assert_eq!(viewer.current_index(), 24);

    assert!(viewer.poll(t0 + TICK * 25).is_empty());
    assert_eq!(viewer.current_index(), 24);
    let projection = viewer.presentation();
    assert!(projection.projection().unwrap().show_load_more);

    let at = t0 + TICK * 25 + Duration::from_millis(10);
    let events = viewer.update(ViewerMessage::LoadMore, at);
    assert_eq!(
        events,
        vec![ViewerEvent::WindowExtended {
            window_size: 30,
            has_more: false
        }]
    );
    assert_eq!(viewer.current_index(), 24);
    // Period restarts after the window grows.
    assert_eq!(viewer.next_deadline(), Some(at + TICK));
    viewer.poll(at + TICK);
    assert_eq!(viewer.current_index(), 25);
}

#[test]
fn load_more_grows_by_one_page_and_never_shrinks() {
    let (mut viewer, t0) = mount(60);
    let mut last = viewer.window().window_size();
    while viewer.window().has_more() {
        viewer.update(ViewerMessage::LoadMore, t0);
        let now = viewer.window().window_size();
        assert_eq!(now - last, 25usize.min(60 - last));
        last = now;
    }
    assert_eq!(last, 60);
    assert!(viewer.update(ViewerMessage::LoadMore, t0).is_empty());
    assert_eq!(viewer.window().window_size(), 60);
}

#[test]
fn manual_navigation_pauses_until_play_is_restored() {
    let (mut viewer, t0) = mount(5);
    let events =
        viewer.update(ViewerMessage::Next, t0 + Duration::from_secs(1));
    assert_eq!(
        events,
        vec![
            ViewerEvent::IndexChanged { index: 1 },
            ViewerEvent::PlaybackChanged { playing: false },
        ]
    );
    assert_eq!(viewer.playback_phase(), PlaybackPhase::Stopped);
    assert!(viewer.poll(t0 + TICK * 4).is_empty());
    assert_eq!(viewer.current_index(), 1);

    let resume_at = t0 + TICK * 4;
    viewer.update(ViewerMessage::TogglePlay, resume_at);
    assert!(viewer.is_playing());
    assert_eq!(viewer.next_deadline(), Some(resume_at + TICK));
    viewer.poll(resume_at + TICK);
    assert_eq!(viewer.current_index(), 2);
}

#[test]
fn boundary_navigation_is_a_silent_no_op() {
    let (mut viewer, t0) = mount(3);
    assert!(viewer.update(ViewerMessage::Previous, t0).is_empty());
    assert!(viewer.is_playing());

    viewer.update(ViewerMessage::GoTo(2), t0);
    assert!(viewer.update(ViewerMessage::Next, t0).is_empty());
    assert_eq!(viewer.current_index(), 2);
    assert!(viewer.update(ViewerMessage::GoTo(7), t0).is_empty());
}

#[test]
fn infinite_wrap_mode_wraps_manual_navigation() {
    let t0 = Instant::now();
    let mut viewer =
        CarouselViewer::mount(items(3), ViewerConfig::simple_defaults(), t0);
    viewer.update(ViewerMessage::Previous, t0);
    assert_eq!(viewer.current_index(), 2);
    viewer.update(ViewerMessage::Next, t0);
    assert_eq!(viewer.current_index(), 0);
    assert!(!viewer.is_playing());
}

#[test]
fn infinite_wrap_mode_keeps_load_more_reachable() {
    let t0 = Instant::now();
    let config = ViewerConfig {
        wrap_mode: WrapMode::Infinite,
        ..ViewerConfig::tile_defaults()
    };
    let mut viewer = CarouselViewer::mount(items(30), config, t0);
    assert!(viewer.update(ViewerMessage::Previous, t0).is_empty());
    assert_eq!(viewer.current_index(), 0);
}

#[test]
fn visibility_gates_ticks() {
    let (mut viewer, t0) = mount(5);
    let hidden_at = t0 + Duration::from_secs(2);
    let events =
        viewer.update(ViewerMessage::Intersection { ratio: 0.0 }, hidden_at);
    assert_eq!(events, vec![ViewerEvent::VisibilityChanged { visible: false }]);
    assert_eq!(viewer.next_deadline(), None);
    assert!(viewer.poll(t0 + TICK * 3).is_empty());
    assert_eq!(viewer.current_index(), 0);
    assert!(viewer.is_playing());

    let shown_at = t0 + TICK * 3;
    viewer.update(ViewerMessage::Intersection { ratio: 0.5 }, shown_at);
    assert_eq!(viewer.next_deadline(), Some(shown_at + TICK));
    viewer.poll(shown_at + TICK);
    assert_eq!(viewer.current_index(), 1);
}

#[test]
fn unsupported_visibility_fails_open() {
    let (mut viewer, t0) = mount(4);
    viewer.update(ViewerMessage::Intersection { ratio: 0.0 }, t0);
    assert!(!viewer.is_auto_advancing());
    viewer.update(ViewerMessage::VisibilityUnsupported, t0);
    assert!(viewer.is_visible());
    assert!(viewer.is_auto_advancing());
}

#[test]
fn horizontal_swipe_advances_and_pauses() {
    let (mut viewer, t0) = mount(2);
    let events = viewer.update(
        ViewerMessage::Wheel {
            delta_x: 60.0,
            delta_y: 5.0,
        },
        t0,
    );
    assert!(events.is_empty());
    assert_eq!(viewer.next_deadline(), Some(t0 + DEBOUNCE));

    let events = viewer.poll(t0 + DEBOUNCE);
    assert_eq!(
        events,
        vec![
            ViewerEvent::IndexChanged { index: 1 },
            ViewerEvent::PlaybackChanged { playing: false },
        ]
    );
    assert!(!viewer.is_playing());
}

#[test]
fn small_swipe_is_ignored() {
    let (mut viewer, t0) = mount(3);
    viewer.update(
        ViewerMessage::Wheel {
            delta_x: 30.0,
            delta_y: 0.0,
        },
        t0,
    );
    assert!(viewer.poll(t0 + DEBOUNCE).is_empty());
    assert_eq!(viewer.current_index(), 0);
    assert!(viewer.is_playing());
}

#[test]
fn swipe_burst_moves_a_single_step() {
    let (mut viewer, t0) = mount(5);
    for ms in [0, 10, 20, 30, 40] {
        viewer.update(
            ViewerMessage::Wheel {
                delta_x: 120.0,
                delta_y: 0.0,
            },
            t0 + Duration::from_millis(ms),
        );
        viewer.poll(t0 + Duration::from_millis(ms));
    }
    viewer.poll(t0 + Duration::from_millis(40) + DEBOUNCE);
    assert_eq!(viewer.current_index(), 1);
}

#[test]
fn swipe_past_the_end_is_a_no_op() {
    let (mut viewer, t0) = mount(2);
    viewer.update(
        ViewerMessage::Wheel {
            delta_x: -80.0,
            delta_y: 0.0,
        },
        t0,
    );
    assert!(viewer.poll(t0 + DEBOUNCE).is_empty());
    assert!(viewer.is_playing());
}

#[test]
fn unmount_cancels_everything() {
    let (mut viewer, t0) = mount(5);
    viewer.update(
        ViewerMessage::Wheel {
            delta_x: 90.0,
            delta_y: 0.0,
        },
        t0,
    );
    viewer.unmount();
    assert_eq!(viewer.next_deadline(), None);
    assert!(viewer.poll(t0 + TICK * 10).is_empty());
    assert!(viewer.update(ViewerMessage::Next, t0).is_empty());
    assert_eq!(viewer.current_index(), 0);
}

#[test]
fn replacing_items_resets_navigation_and_playback() {
    let (mut viewer, t0) = mount(5);
    viewer.update(ViewerMessage::GoTo(3), t0);
    assert!(!viewer.is_playing());

    let at = t0 + Duration::from_secs(1);
    let events = viewer.replace_items(items(40), at);
    assert_eq!(
        events,
        vec![
            ViewerEvent::IndexChanged { index: 0 },
            ViewerEvent::ItemsReplaced {
                generation: 1,
                total: 40,
                window_size: 25
            },
            ViewerEvent::PlaybackChanged { playing: true },
        ]
    );
    assert!(viewer.window().has_more());
    assert_eq!(viewer.next_deadline(), Some(at + TICK));
}

#[test]
fn detail_and_category_requests_go_upward() {
    let (mut viewer, t0) = mount(3);
    viewer.update(ViewerMessage::Next, t0);
    assert_eq!(
        viewer.update(ViewerMessage::OpenDetails, t0),
        vec![ViewerEvent::DetailsRequested {
            url: "https://shop.example/tile-1".into()
        }]
    );
    assert_eq!(
        viewer.update(ViewerMessage::ChangeCategory, t0),
        vec![ViewerEvent::CategoryChangeRequested]
    );
}

#[test]
fn index_stays_in_window_across_mixed_inputs() {
    let (mut viewer, t0) = mount(53);
    // Small deterministic LCG so the sequence is reproducible.
    let mut seed: u64 = 0x2545_f491;
    let mut now = t0;
    for _ in 0..2_000 {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        now += Duration::from_millis(seed % 3_000);
        let message = match (seed >> 33) % 8 {
            0 => ViewerMessage::Next,
            1 => ViewerMessage::Previous,
            2 => ViewerMessage::TogglePlay,
            3 => ViewerMessage::LoadMore,
            4 => ViewerMessage::GoTo(((seed >> 40) % 60) as usize),
            5 => ViewerMessage::Intersection {
                ratio: ((seed >> 20) % 100) as f32 / 100.0,
            },
            6 => ViewerMessage::Wheel {
                delta_x: ((seed >> 24) % 200) as f32 - 100.0,
                delta_y: ((seed >> 16) % 40) as f32,
            },
            _ => ViewerMessage::SetPlaying(true),
        };
        viewer.update(message, now);
        viewer.poll(now);
        assert!(viewer.current_index() < viewer.window().window_size());
    }
}
