//! Carousel Interaction Controller
//!
//! Gesture and animation state machine for the carousel track:
//!
//! ```text
//! Idle --drag_start--> Dragging --drag_move--> Dragging
//! Dragging --drag_end--> Animating --tick (elapsed >= animation_ms)--> Idle
//! Idle --next/prev/go_to--> Animating
//! ```
//!
//! Index mutations are delegated to the [`DataStore`]; while `Animating`
//! they are refused, not queued.

use crate::config::DeckConfig;
use crate::store::DataStore;

/// Input device that started a drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// An in-progress drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer: PointerKind,
    pub start_x: f64,
    pub start_y: f64,
    pub dx: f64,
    pub dy: f64,
    /// Deadline of an animation that was still running when the drag began.
    /// A commit before it passes is refused.
    pub settle_at_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging(DragSession),
    Animating { until_ms: u64 },
}

/// Live track position during a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFrame {
    pub offset_px: f64,
    /// Whether the browser's default handling (scrolling) should be suppressed
    pub suppress_default: bool,
}

/// What a released drag did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Committed an index change of `delta`
    Committed(isize),
    /// Returned to the current index
    SnapBack,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselController {
    phase: Phase,
    threshold_px: f64,
    animation_ms: u64,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(&DeckConfig::default())
    }
}

impl CarouselController {
    pub fn new(config: &DeckConfig) -> Self {
        Self {
            phase: Phase::Idle,
            threshold_px: config.swipe_threshold_px,
            animation_ms: config.animation_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn animation_ms(&self) -> u64 {
        self.animation_ms
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Finish an animation whose duration has elapsed. Returns true on `Animating -> Idle`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::Animating { until_ms } if now_ms >= until_ms => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any drag or animation, e.g. when the sequence is rebuilt underneath
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Step by `delta` through the store. Refused while dragging or animating,
    /// and for sequences of fewer than two ideas.
    pub fn advance(&mut self, delta: isize, store: &mut DataStore, now_ms: u64) -> bool {
        self.tick(now_ms);
        if self.phase != Phase::Idle || store.len() < 2 || delta == 0 {
            return false;
        }
        store.advance(delta);
        self.start_animation(now_ms);
        true
    }

    pub fn next(&mut self, store: &mut DataStore, now_ms: u64) -> bool {
        self.advance(1, store, now_ms)
    }

    pub fn prev(&mut self, store: &mut DataStore, now_ms: u64) -> bool {
        self.advance(-1, store, now_ms)
    }

    /// Jump to `index`. Refused while busy, when already there, or when out of range.
    pub fn go_to(&mut self, index: usize, store: &mut DataStore, now_ms: u64) -> bool {
        self.tick(now_ms);
        if self.phase != Phase::Idle || index == store.current_index() {
            return false;
        }
        if let Err(err) = store.go_to(index) {
            log::debug!("carousel: go_to ignored: {}", err);
            return false;
        }
        self.start_animation(now_ms);
        true
    }

    /// Pointer-down / touch-start. Cancels the visual transition of any running
    /// animation but remembers its deadline.
    pub fn drag_start(&mut self, x: f64, y: f64, pointer: PointerKind, now_ms: u64) {
        self.tick(now_ms);
        let settle_at_ms = match self.phase {
            Phase::Animating { until_ms } => Some(until_ms),
            Phase::Dragging(session) => session.settle_at_ms,
            Phase::Idle => None,
        };
        self.phase = Phase::Dragging(DragSession {
            pointer,
            start_x: x,
            start_y: y,
            dx: 0.0,
            dy: 0.0,
            settle_at_ms,
        });
    }

    /// Pointer-move / touch-move. Updates the transient offset only.
    pub fn drag_move(&mut self, x: f64, y: f64, store: &DataStore, item_width: f64) -> Option<DragFrame> {
        let Phase::Dragging(session) = &mut self.phase else {
            return None;
        };
        session.dx = x - session.start_x;
        session.dy = y - session.start_y;
        let suppress_default = match session.pointer {
            PointerKind::Mouse => true,
            PointerKind::Touch => session.dx.abs() > session.dy.abs(),
        };
        Some(DragFrame {
            offset_px: base_offset(store.current_index(), item_width) + session.dx,
            suppress_default,
        })
    }

    /// Pointer-up / touch-end. Commits at most once, then animates either way.
    pub fn drag_end(&mut self, x: f64, store: &mut DataStore, now_ms: u64) -> Option<GestureOutcome> {
        let Phase::Dragging(session) = self.phase else {
            return None;
        };
        let dx = x - session.start_x;
        let settled = session.settle_at_ms.map_or(true, |until| now_ms >= until);
        let outcome = if dx.abs() > self.threshold_px && settled && store.len() > 1 {
            // dragging left reveals the next idea
            let delta = if dx < 0.0 { 1 } else { -1 };
            store.advance(delta);
            GestureOutcome::Committed(delta)
        } else {
            GestureOutcome::SnapBack
        };
        log::debug!("carousel: drag released dx={:.0} -> {:?}", dx, outcome);
        self.start_animation(now_ms);
        Some(outcome)
    }

    /// Transient drag displacement, if a drag is in progress
    pub fn drag_offset(&self) -> Option<f64> {
        match self.phase {
            Phase::Dragging(session) => Some(session.dx),
            _ => None,
        }
    }

    fn start_animation(&mut self, now_ms: u64) {
        self.phase = Phase::Animating {
            until_ms: now_ms + self.animation_ms,
        };
    }
}

/// Resting track offset for `index`
pub fn base_offset(index: usize, item_width: f64) -> f64 {
    0.0 - index as f64 * item_width
}
