use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::schedule::{Clock, Scheduled};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Slide {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn alt_text(&self, title: &str, index: usize) -> String {
        match &self.alt {
            Some(alt) if !alt.is_empty() => alt.clone(),
            _ => format!("{} screenshot {}", title, index + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

fn default_interval_ms() -> u64 {
    5000
}

fn default_transition_ms() -> u64 {
    500
}

fn default_swipe_threshold() -> f64 {
    50.0
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "enabled")]
    pub show_navigation: bool,
    #[serde(default = "enabled")]
    pub show_indicators: bool,
    #[serde(default = "enabled")]
    pub keyboard: bool,
    #[serde(default = "enabled")]
    pub touch: bool,
    #[serde(default = "enabled")]
    pub pause_on_hover: bool,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            interval_ms: default_interval_ms(),
            transition_ms: default_transition_ms(),
            show_navigation: true,
            show_indicators: true,
            keyboard: true,
            touch: true,
            pause_on_hover: true,
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl SliderConfig {
    pub fn autoplaying(interval: Duration) -> Self {
        Self {
            autoplay: true,
            interval_ms: u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// Index, transition lock and per-slide load status of one slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    transitioning: bool,
    slides: Vec<SlideStatus>,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            transitioning: false,
            slides: vec![SlideStatus::Loading; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Arrows, indicators, gestures and autoplay only exist with two or more slides.
    pub fn is_navigable(&self) -> bool {
        self.len() > 1
    }

    pub fn status(&self, index: usize) -> Option<SlideStatus> {
        self.slides.get(index).copied()
    }

    pub fn next(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.begin((self.current + 1) % self.len());
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let len = self.len();
        self.begin((self.current + len - 1) % len);
        true
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Previous => self.previous(),
            Direction::Next => self.next(),
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if self.transitioning || index >= self.len() || index == self.current {
            return false;
        }
        self.begin(index);
        true
    }

    pub fn finish_transition(&mut self) -> bool {
        std::mem::replace(&mut self.transitioning, false)
    }

    pub fn mark_loaded(&mut self, index: usize) -> bool {
        self.set_status(index, SlideStatus::Loaded)
    }

    /// Only the failed slide changes; a failure counts as settled.
    pub fn mark_failed(&mut self, index: usize) -> bool {
        self.set_status(index, SlideStatus::Failed)
    }

    /// Previous and next positions, wrapping. `None` without a neighbour.
    pub fn neighbors(&self) -> Option<(usize, usize)> {
        if !self.is_navigable() {
            return None;
        }
        let len = self.len();
        Some(((self.current + len - 1) % len, (self.current + 1) % len))
    }

    /// Slides mounted in the DOM: the current one and its neighbours.
    pub fn visible(&self, index: usize) -> bool {
        if index == self.current {
            return true;
        }
        self.neighbors()
            .is_some_and(|(prev, next)| index == prev || index == next)
    }

    /// Live-region text, e.g. "Image 2 of 5: Dashboard".
    pub fn announcement(&self, title: &str, slides: &[Slide]) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let index = self.current;
        let alt = slides
            .get(index)
            .map(|s| s.alt_text(title, index))
            .unwrap_or_else(|| format!("{} screenshot {}", title, index + 1));
        Some(format!("Image {} of {}: {}", index + 1, self.len(), alt))
    }

    fn can_move(&self) -> bool {
        !self.transitioning && self.is_navigable()
    }

    fn begin(&mut self, index: usize) {
        self.current = index;
        self.transitioning = true;
    }

    fn set_status(&mut self, index: usize, status: SlideStatus) -> bool {
        match self.slides.get_mut(index) {
            Some(s) if *s != status => {
                *s = status;
                true
            }
            _ => false,
        }
    }
}

/// Horizontal swipe/drag detection. The gesture only counts once it travels
/// further than the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<f64>,
    last: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
        self.last = None;
    }

    pub fn track(&mut self, x: f64) {
        if self.start.is_some() {
            self.last = Some(x);
        }
    }

    pub fn finish(&mut self, threshold: f64) -> Option<Direction> {
        let (start, end) = (self.start.take()?, self.last.take()?);
        let distance = start - end;
        if distance.abs() <= threshold {
            return None;
        }
        if distance > 0.0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Previous)
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Step(Direction),
    Jump(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Manual,
    Autoplay,
}

type Listener = Rc<dyn Fn(&SliderState)>;

struct Inner<C: Clock> {
    state: SliderState,
    config: SliderConfig,
    clock: C,
    autoplay: Option<Scheduled<C>>,
    unlock: Option<Scheduled<C>>,
    started: bool,
    paused: bool,
    shut_down: bool,
    listener: Option<Listener>,
}

impl<C: Clock> Inner<C> {
    fn wants_autoplay(&self) -> bool {
        self.config.autoplay
            && self.started
            && !self.paused
            && !self.shut_down
            && self.state.is_navigable()
    }

    fn snapshot(&self) -> Option<(Listener, SliderState)> {
        self.listener
            .clone()
            .map(|listener| (listener, self.state.clone()))
    }
}

fn notify(update: Option<(Listener, SliderState)>) {
    if let Some((listener, state)) = update {
        listener(&state);
    }
}

/// Slider state plus the timers around it: the transition lock release and
/// the autoplay interval.
///
/// Autoplay policy: a manual navigation that moves the slider restarts the
/// interval, so the next automatic advance is a full interval later. Requests
/// dropped by the transition lock leave the interval alone. `pause` clears the
/// interval and `resume` re-arms it from scratch.
pub struct SliderController<C: Clock> {
    shared: Rc<RefCell<Inner<C>>>,
}

impl<C: Clock> SliderController<C> {
    pub fn new(len: usize, config: SliderConfig, clock: C) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Inner {
                state: SliderState::new(len),
                config,
                clock,
                autoplay: None,
                unlock: None,
                started: false,
                paused: false,
                shut_down: false,
                listener: None,
            })),
        }
    }

    pub fn set_listener(&self, listener: impl Fn(&SliderState) + 'static) {
        self.shared.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn state(&self) -> SliderState {
        self.shared.borrow().state.clone()
    }

    pub fn config(&self) -> SliderConfig {
        self.shared.borrow().config.clone()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.shared
            .borrow()
            .autoplay
            .as_ref()
            .is_some_and(Scheduled::is_armed)
    }

    /// Called once the component is mounted.
    pub fn start(&self) {
        let mut inner = self.shared.borrow_mut();
        if inner.shut_down || inner.started {
            return;
        }
        inner.started = true;
        arm_autoplay(&self.shared, &mut inner);
    }

    pub fn next(&self) {
        navigate(&self.shared, Request::Step(Direction::Next), Origin::Manual);
    }

    pub fn previous(&self) {
        navigate(&self.shared, Request::Step(Direction::Previous), Origin::Manual);
    }

    pub fn step(&self, direction: Direction) {
        navigate(&self.shared, Request::Step(direction), Origin::Manual);
    }

    pub fn go_to(&self, index: usize) {
        navigate(&self.shared, Request::Jump(index), Origin::Manual);
    }

    pub fn pause(&self) {
        let mut inner = self.shared.borrow_mut();
        if !inner.config.pause_on_hover {
            return;
        }
        inner.paused = true;
        inner.autoplay = None;
    }

    pub fn resume(&self) {
        let mut inner = self.shared.borrow_mut();
        if !inner.paused {
            return;
        }
        inner.paused = false;
        arm_autoplay(&self.shared, &mut inner);
    }

    pub fn slide_loaded(&self, index: usize) {
        self.update_status(index, SlideStatus::Loaded);
    }

    pub fn slide_failed(&self, index: usize) {
        log::debug!("slide {index} failed to load");
        self.update_status(index, SlideStatus::Failed);
    }

    /// Cancels every outstanding timer. Nothing changes afterwards.
    pub fn shutdown(&self) {
        let mut inner = self.shared.borrow_mut();
        inner.shut_down = true;
        inner.autoplay = None;
        inner.unlock = None;
        inner.listener = None;
    }

    fn update_status(&self, index: usize, status: SlideStatus) {
        let update = {
            let mut inner = self.shared.borrow_mut();
            if inner.shut_down {
                return;
            }
            let changed = match status {
                SlideStatus::Loaded => inner.state.mark_loaded(index),
                SlideStatus::Failed => inner.state.mark_failed(index),
                SlideStatus::Loading => false,
            };
            if !changed {
                return;
            }
            inner.snapshot()
        };
        notify(update);
    }
}

fn arm_autoplay<C: Clock>(shared: &Rc<RefCell<Inner<C>>>, inner: &mut Inner<C>) {
    if !inner.wants_autoplay() {
        inner.autoplay = None;
        return;
    }
    let weak = Rc::downgrade(shared);
    let autoplay = Scheduled::every(
        &inner.clock,
        inner.config.interval(),
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                navigate(&shared, Request::Step(Direction::Next), Origin::Autoplay);
            }
        }),
    );
    inner.autoplay = Some(autoplay);
}

fn release_lock<C: Clock>(weak: &Weak<RefCell<Inner<C>>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let update = {
        let mut inner = shared.borrow_mut();
        inner.unlock = None;
        if inner.shut_down || !inner.state.finish_transition() {
            return;
        }
        inner.snapshot()
    };
    notify(update);
}

fn navigate<C: Clock>(shared: &Rc<RefCell<Inner<C>>>, request: Request, origin: Origin) {
    let update = {
        let mut inner = shared.borrow_mut();
        if inner.shut_down {
            return;
        }
        let moved = match request {
            Request::Step(direction) => inner.state.step(direction),
            Request::Jump(index) => inner.state.go_to(index),
        };
        if !moved {
            return;
        }

        let weak = Rc::downgrade(shared);
        let unlock = Scheduled::once(
            &inner.clock,
            inner.config.transition(),
            Box::new(move || release_lock(&weak)),
        );
        inner.unlock = Some(unlock);
        if origin == Origin::Manual && inner.autoplay.is_some() {
            arm_autoplay(shared, &mut inner);
        }
        inner.snapshot()
    };
    notify(update);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::schedule::manual::ManualClock;

    const TRANSITION: Duration = Duration::from_millis(500);

    fn controller(len: usize, config: SliderConfig) -> (SliderController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let slider = SliderController::new(len, config, clock.clone());
        slider.start();
        (slider, clock)
    }

    fn settled_next(slider: &SliderController<ManualClock>, clock: &ManualClock) {
        slider.next();
        clock.advance(TRANSITION);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut state = SliderState::new(3);
        for expected in [1, 2, 0, 1] {
            assert!(state.next());
            assert_eq!(state.current(), expected);
            state.finish_transition();
        }
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut state = SliderState::new(4);
        assert!(state.previous());
        assert_eq!(state.current(), 3);
        state.finish_transition();
        assert!(state.previous());
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn test_index_stays_in_range() {
        for len in 1..8 {
            let mut state = SliderState::new(len);
            // deterministic mix of moves
            for i in 0..50usize {
                match i % 7 {
                    0 | 3 | 5 => state.previous(),
                    6 => state.go_to(i % (len + 2)),
                    _ => state.next(),
                };
                assert!(state.current() < len);
                if i % 2 == 0 {
                    state.finish_transition();
                }
            }
        }
    }

    #[test]
    fn test_n_nexts_return_to_start() {
        for len in 1..7 {
            for start in 0..len {
                let mut state = SliderState::new(len);
                state.go_to(start);
                state.finish_transition();
                for _ in 0..len {
                    state.next();
                    state.finish_transition();
                }
                assert_eq!(state.current(), start);
            }
        }
    }

    #[test]
    fn test_go_to() {
        let mut state = SliderState::new(5);
        assert!(state.go_to(3));
        assert_eq!(state.current(), 3);
        state.finish_transition();

        // already there
        assert!(!state.go_to(3));
        assert!(!state.is_transitioning());
        // out of range
        assert!(!state.go_to(5));
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn test_transition_lock_drops_requests() {
        let mut state = SliderState::new(5);
        assert!(state.next());
        assert!(!state.next());
        assert!(!state.previous());
        assert!(!state.go_to(4));
        assert_eq!(state.current(), 1);

        assert!(state.finish_transition());
        assert!(state.go_to(4));
    }

    #[test]
    fn test_single_and_empty_sliders_never_move() {
        let mut one = SliderState::new(1);
        assert!(!one.is_navigable());
        assert!(!one.next());
        assert!(!one.previous());
        assert!(!one.go_to(0));
        assert_eq!(one.current(), 0);
        assert_eq!(one.neighbors(), None);

        let mut none = SliderState::new(0);
        assert!(none.is_empty());
        assert!(!none.next());
        assert!(!none.go_to(0));
        assert_eq!(none.announcement("Empty", &[]), None);
    }

    #[test]
    fn test_failed_slide_is_isolated() {
        let mut state = SliderState::new(3);
        state.mark_loaded(0);
        assert!(state.mark_failed(1));

        assert_eq!(state.status(0), Some(SlideStatus::Loaded));
        assert_eq!(state.status(1), Some(SlideStatus::Failed));
        assert_eq!(state.status(2), Some(SlideStatus::Loading));
        // navigation keeps working
        assert!(state.next());
        assert_eq!(state.current(), 1);
        // unknown slide is ignored
        assert!(!state.mark_failed(9));
    }

    #[test]
    fn test_visible_window() {
        let mut state = SliderState::new(5);
        let visible = |s: &SliderState| (0..5).filter(|i| s.visible(*i)).collect::<Vec<_>>();
        assert_eq!(visible(&state), vec![0, 1, 4]);
        state.go_to(2);
        assert_eq!(visible(&state), vec![1, 2, 3]);

        let two = SliderState::new(2);
        assert!(two.visible(0) && two.visible(1));
    }

    #[test]
    fn test_announcement() {
        let slides = vec![
            Slide::new("/a.png").with_alt("Dashboard"),
            Slide::new("/b.png"),
        ];
        let mut state = SliderState::new(2);
        assert_eq!(
            state.announcement("Shop", &slides).as_deref(),
            Some("Image 1 of 2: Dashboard")
        );
        state.next();
        assert_eq!(
            state.announcement("Shop", &slides).as_deref(),
            Some("Image 2 of 2: Shop screenshot 2")
        );
    }

    #[test]
    fn test_swipe_threshold() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        swipe.track(240.0);
        assert_eq!(swipe.finish(50.0), Some(Direction::Next));

        swipe.begin(100.0);
        swipe.track(190.0);
        assert_eq!(swipe.finish(50.0), Some(Direction::Previous));

        swipe.begin(100.0);
        swipe.track(150.0);
        assert_eq!(swipe.finish(50.0), None);

        // a tap without movement is not a swipe
        swipe.begin(100.0);
        assert_eq!(swipe.finish(50.0), None);
        // movement without a start is ignored
        swipe.track(10.0);
        assert_eq!(swipe.finish(50.0), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: SliderConfig = serde_json::from_str(r#"{ "autoplay": true }"#).unwrap();
        assert!(config.autoplay);
        assert_eq!(config.interval(), Duration::from_millis(5000));
        assert_eq!(config.transition(), TRANSITION);
        assert!(config.show_navigation && config.show_indicators);
        assert_eq!(config.swipe_threshold, 50.0);
    }

    #[test]
    fn test_autoplaying_saturates_huge_intervals() {
        let config = SliderConfig::autoplaying(Duration::MAX);
        assert_eq!(config.interval_ms, u64::MAX);
        let config = SliderConfig::autoplaying(Duration::from_secs(3));
        assert_eq!(config.interval_ms, 3000);
    }

    #[test]
    fn test_controller_example_walkthrough() {
        let (slider, clock) = controller(5, SliderConfig::autoplaying(Duration::from_millis(4000)));

        for _ in 0..5 {
            settled_next(&slider, &clock);
        }
        assert_eq!(slider.state().current(), 0);

        slider.go_to(3);
        assert_eq!(slider.state().current(), 3);

        // next() during the in-flight transition is dropped
        slider.next();
        assert_eq!(slider.state().current(), 3);
        clock.advance(TRANSITION);
        slider.next();
        assert_eq!(slider.state().current(), 4);
    }

    #[test]
    fn test_lock_released_after_transition() {
        let (slider, clock) = controller(3, SliderConfig::default());
        slider.next();
        assert!(slider.state().is_transitioning());
        clock.advance(Duration::from_millis(499));
        assert!(slider.state().is_transitioning());
        clock.advance(Duration::from_millis(1));
        assert!(!slider.state().is_transitioning());
    }

    #[test]
    fn test_autoplay_advances_on_interval() {
        let (slider, clock) = controller(3, SliderConfig::autoplaying(Duration::from_millis(4000)));
        assert!(slider.is_autoplaying());

        clock.advance(Duration::from_millis(3999));
        assert_eq!(slider.state().current(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(slider.state().current(), 1);
        clock.advance(Duration::from_millis(8000));
        assert_eq!(slider.state().current(), 0);
    }

    #[test]
    fn test_manual_navigation_restarts_autoplay() {
        let (slider, clock) = controller(5, SliderConfig::autoplaying(Duration::from_millis(4000)));
        clock.advance(Duration::from_millis(3000));
        slider.next();
        assert_eq!(slider.state().current(), 1);

        // the first deadline at 4000ms no longer applies
        clock.advance(Duration::from_millis(3999));
        assert_eq!(slider.state().current(), 1);
        clock.advance(Duration::from_millis(1));
        assert_eq!(slider.state().current(), 2);
    }

    #[test]
    fn test_dropped_request_keeps_autoplay_deadline() {
        let (slider, clock) = controller(5, SliderConfig::autoplaying(Duration::from_millis(4000)));
        clock.advance(Duration::from_millis(3800));
        slider.next();
        clock.advance(Duration::from_millis(100));
        // locked: dropped, interval untouched
        slider.next();
        assert_eq!(slider.state().current(), 1);
        clock.advance(Duration::from_millis(3899));
        assert_eq!(slider.state().current(), 1);
        clock.advance(Duration::from_millis(1));
        assert_eq!(slider.state().current(), 2);
    }

    #[test]
    fn test_pause_and_resume() {
        let (slider, clock) = controller(3, SliderConfig::autoplaying(Duration::from_millis(1000)));
        clock.advance(Duration::from_millis(900));
        slider.pause();
        assert!(!slider.is_autoplaying());
        clock.advance(Duration::from_secs(10));
        assert_eq!(slider.state().current(), 0);

        slider.resume();
        clock.advance(Duration::from_millis(999));
        assert_eq!(slider.state().current(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(slider.state().current(), 1);
    }

    #[test]
    fn test_pause_ignored_when_disabled() {
        let config = SliderConfig {
            pause_on_hover: false,
            ..SliderConfig::autoplaying(Duration::from_millis(1000))
        };
        let (slider, clock) = controller(3, config);
        slider.pause();
        clock.advance(Duration::from_millis(1000));
        assert_eq!(slider.state().current(), 1);
    }

    #[test]
    fn test_single_slide_never_autoplays() {
        let (slider, clock) = controller(1, SliderConfig::autoplaying(Duration::from_millis(100)));
        assert!(!slider.is_autoplaying());
        assert_eq!(clock.pending(), 0);
        slider.next();
        slider.previous();
        slider.go_to(0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(slider.state().current(), 0);
    }

    #[test]
    fn test_shutdown_makes_timers_inert() {
        let (slider, clock) = controller(5, SliderConfig::autoplaying(Duration::from_millis(4000)));
        let changes = Rc::new(Cell::new(0));
        let c = changes.clone();
        slider.set_listener(move |_| c.set(c.get() + 1));

        slider.next();
        assert_eq!(changes.get(), 1);
        let before = slider.state();

        slider.shutdown();
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(60));
        assert_eq!(slider.state(), before);
        assert_eq!(changes.get(), 1);

        slider.next();
        slider.slide_failed(2);
        assert_eq!(slider.state(), before);
    }

    #[test]
    fn test_dropping_controller_cancels_timers() {
        let (slider, clock) = controller(4, SliderConfig::autoplaying(Duration::from_millis(1000)));
        slider.next();
        assert_eq!(clock.pending(), 2);
        drop(slider);
        assert_eq!(clock.pending(), 0);
        clock.advance(Duration::from_secs(5));
    }

    #[test]
    fn test_listener_sees_load_state() {
        let (slider, _clock) = controller(3, SliderConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        slider.set_listener(move |state| s.borrow_mut().push(state.status(1)));

        slider.slide_failed(1);
        // repeated reports are not changes
        slider.slide_failed(1);
        slider.slide_loaded(0);
        assert_eq!(
            *seen.borrow(),
            vec![Some(SlideStatus::Failed), Some(SlideStatus::Failed)]
        );
        assert_eq!(slider.state().status(0), Some(SlideStatus::Loaded));
    }
}
