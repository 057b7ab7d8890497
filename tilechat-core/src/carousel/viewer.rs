//! CarouselViewer: the aggregate a host mounts

use std::time::Instant;

use tilechat_model::Item;

use super::gesture::{GestureInput, SwipeDirection};
use super::messages::{ViewerEvent, ViewerMessage};
use super::pagination::PageWindow;
use super::playback::{self, PlaybackController, PlaybackPhase};
use super::projection::{self, Presentation};
use super::types::{ViewerConfig, WrapMode};
use super::visibility::VisibilityGate;

/// What the viewer needs to know about an item beyond rendering.
pub trait CarouselItem {
    /// Product page opened by "See Details / Buy Now".
    fn detail_url(&self) -> Option<&str> {
        None
    }
}

impl CarouselItem for Item {
    fn detail_url(&self) -> Option<&str> {
        self.detail()
    }
}

/// One carousel instance.
///
/// The viewer owns its item list and all navigation state; nothing else
/// mutates it. Every entry point takes `now` so the host decides what time
/// is, and [`next_deadline`](Self::next_deadline) tells the host when to
/// call [`poll`](Self::poll) next.
#[derive(Debug, Clone)]
pub struct CarouselViewer<T> {
    items: Vec<T>,
    generation: u64,
    window: PageWindow,
    current_index: usize,
    playback: PlaybackController,
    visibility: VisibilityGate,
    gesture: GestureInput,
    config: ViewerConfig,
    mounted: bool,
}

impl<T: CarouselItem> CarouselViewer<T> {
    pub fn mount(items: Vec<T>, config: ViewerConfig, now: Instant) -> Self {
        let mut window = if config.paginate {
            PageWindow::new(config.page_size)
        } else {
            PageWindow::unpaginated()
        };
        window.initialize(items.len());

        let mut viewer = Self {
            items,
            generation: 0,
            window,
            current_index: 0,
            playback: PlaybackController::new(
                config.tick_interval(),
                config.autoplay,
            ),
            visibility: VisibilityGate::new(config.visibility_threshold),
            gesture: GestureInput::new(
                config.gesture_threshold,
                config.gesture_debounce(),
            ),
            config,
            mounted: true,
        };
        viewer.sync_playback(now);
        viewer
    }

    /// Apply one host input. Returns the notifications it produced.
    pub fn update(
        &mut self,
        message: ViewerMessage,
        now: Instant,
    ) -> Vec<ViewerEvent> {
        let mut events = Vec::new();
        if !self.mounted {
            return events;
        }

        match message {
            ViewerMessage::Next => self.step_forward(&mut events),
            ViewerMessage::Previous => self.step_backward(&mut events),
            ViewerMessage::GoTo(index) => {
                if index < self.window.window_size()
                    && index != self.current_index
                {
                    self.manual_move(index, &mut events);
                }
            }
            ViewerMessage::TogglePlay => {
                let playing = !self.playback.is_playing();
                self.set_playing(playing, now, &mut events);
            }
            ViewerMessage::SetPlaying(playing) => {
                self.set_playing(playing, now, &mut events);
            }
            ViewerMessage::Wheel { delta_x, delta_y } => {
                self.gesture.on_wheel(delta_x, delta_y, now);
            }
            ViewerMessage::Intersection { ratio } => {
                if self.visibility.on_intersection(ratio) {
                    events.push(ViewerEvent::VisibilityChanged {
                        visible: self.visibility.is_visible(),
                    });
                    self.sync_playback(now);
                }
            }
            ViewerMessage::VisibilityUnsupported => {
                if self.visibility.mark_unsupported() {
                    events
                        .push(ViewerEvent::VisibilityChanged { visible: true });
                }
                self.sync_playback(now);
            }
            ViewerMessage::LoadMore => {
                if self.window.load_more() {
                    events.push(ViewerEvent::WindowExtended {
                        window_size: self.window.window_size(),
                        has_more: self.window.has_more(),
                    });
                    // Window size is part of the run guard: re-arm the period.
                    self.playback.restart(now);
                    self.sync_playback(now);
                }
            }
            ViewerMessage::ChangeCategory => {
                events.push(ViewerEvent::CategoryChangeRequested);
            }
            ViewerMessage::OpenDetails => {
                if let Some(url) = self.current_item().and_then(T::detail_url) {
                    events.push(ViewerEvent::DetailsRequested {
                        url: url.to_string(),
                    });
                }
            }
        }

        events
    }

    /// Fire whatever is due at `now`: a debounced gesture, then a tick.
    pub fn poll(&mut self, now: Instant) -> Vec<ViewerEvent> {
        let mut events = Vec::new();
        if !self.mounted {
            return events;
        }

        if let Some(direction) = self.gesture.take_due(now) {
            self.apply_swipe(direction, &mut events);
        }

        if self.playback.take_due(now) {
            let next = playback::advance(
                self.current_index,
                self.window.window_size(),
                self.window.has_more(),
            );
            if next != self.current_index {
                self.current_index = next;
                log::debug!("Carousel auto-advanced to {next}");
                events.push(ViewerEvent::IndexChanged { index: next });
            }
        }

        events
    }

    /// Earliest instant at which [`poll`](Self::poll) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted {
            return None;
        }
        match (self.playback.next_tick_at(), self.gesture.deadline()) {
            (Some(tick), Some(gesture)) => Some(tick.min(gesture)),
            (tick, gesture) => tick.or(gesture),
        }
    }

    /// Swap in a new item list (a new search or category). Navigation and
    /// playback start over.
    pub fn replace_items(
        &mut self,
        items: Vec<T>,
        now: Instant,
    ) -> Vec<ViewerEvent> {
        let mut events = Vec::new();
        if !self.mounted {
            return events;
        }

        self.items = items;
        self.generation += 1;
        self.window.initialize(self.items.len());
        self.gesture.cancel();
        if self.current_index != 0 {
            self.current_index = 0;
            events.push(ViewerEvent::IndexChanged { index: 0 });
        }
        events.push(ViewerEvent::ItemsReplaced {
            generation: self.generation,
            total: self.window.total(),
            window_size: self.window.window_size(),
        });

        self.playback.stop();
        if self.playback.set_playing(self.config.autoplay) {
            events.push(ViewerEvent::PlaybackChanged {
                playing: self.config.autoplay,
            });
        }
        self.sync_playback(now);
        events
    }

    /// Terminal teardown: cancel the tick, the pending gesture and the
    /// visibility subscription. Later inputs are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.playback.stop();
        self.gesture.cancel();
        self.visibility.disconnect();
        log::debug!("Carousel unmounted (generation {})", self.generation);
    }

    pub fn presentation(&self) -> Presentation<'_, T> {
        projection::project(
            &self.items,
            &self.window,
            self.current_index,
            self.playback.is_playing(),
            self.config.aspect_ratio,
        )
    }
}

impl<T> CarouselViewer<T> {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&T> {
        if self.window.is_empty() {
            return None;
        }
        self.items.get(self.current_index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn playback_phase(&self) -> PlaybackPhase {
        self.playback.phase()
    }

    /// Visible, playing and more than one item loaded.
    pub fn is_auto_advancing(&self) -> bool {
        self.playback.is_running()
    }

    fn guard_conditions(&self) -> bool {
        self.visibility.is_visible() && self.window.window_size() > 1
    }

    fn sync_playback(&mut self, now: Instant) {
        let conditions = self.guard_conditions();
        self.playback.sync(conditions, now);
    }

    fn set_playing(
        &mut self,
        playing: bool,
        now: Instant,
        events: &mut Vec<ViewerEvent>,
    ) {
        if self.playback.set_playing(playing) {
            events.push(ViewerEvent::PlaybackChanged { playing });
        }
        self.sync_playback(now);
    }

    fn step_forward(&mut self, events: &mut Vec<ViewerEvent>) {
        let Some(last) = self.window.last_index() else {
            return;
        };
        if self.current_index < last {
            self.manual_move(self.current_index + 1, events);
        } else if self.wraps() && last > 0 {
            self.manual_move(0, events);
        }
    }

    fn step_backward(&mut self, events: &mut Vec<ViewerEvent>) {
        let Some(last) = self.window.last_index() else {
            return;
        };
        if self.current_index > 0 {
            self.manual_move(self.current_index - 1, events);
        } else if self.wraps() && last > 0 {
            self.manual_move(last, events);
        }
    }

    /// Wrapping would skip past the load-more affordance, so it only applies
    /// once everything is loaded.
    fn wraps(&self) -> bool {
        self.config.wrap_mode == WrapMode::Infinite && !self.window.has_more()
    }

    fn apply_swipe(
        &mut self,
        direction: SwipeDirection,
        events: &mut Vec<ViewerEvent>,
    ) {
        let Some(last) = self.window.last_index() else {
            return;
        };
        match direction {
            SwipeDirection::Forward if self.current_index < last => {
                self.manual_move(self.current_index + 1, events);
            }
            SwipeDirection::Backward if self.current_index > 0 => {
                self.manual_move(self.current_index - 1, events);
            }
            _ => {}
        }
    }

    /// User-initiated index change: move and pause auto-advance.
    fn manual_move(&mut self, index: usize, events: &mut Vec<ViewerEvent>) {
        self.current_index = index;
        events.push(ViewerEvent::IndexChanged { index });
        if self.playback.pause() {
            events.push(ViewerEvent::PlaybackChanged { playing: false });
        }
    }
}
