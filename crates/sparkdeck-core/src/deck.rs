//! Application State
//!
//! `Deck` is the single application-state struct: data store, carousel
//! controller and view/modal flags. User-input adapters translate raw
//! events into [`Command`]s and feed them to [`Deck::dispatch`]; renderers
//! only read.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::config::DeckConfig;
use crate::controller::{CarouselController, PointerKind};
use crate::domain::{
    CategoryFilter, DeckStats, DomainResult, Idea, IdeaSubmission, PlatformStats, SortKey, ViewMode,
};
use crate::render::{self, CardView, CarouselFrame, DetailView, IndicatorView};
use crate::store::DataStore;

/// Which dialog, if any, covers the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Detail,
    Submit,
}

/// Keys the deck reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(KeyCommand::ArrowLeft),
            "ArrowRight" => Some(KeyCommand::ArrowRight),
            " " | "Spacebar" => Some(KeyCommand::Space),
            "Escape" | "Esc" => Some(KeyCommand::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Filter(CategoryFilter),
    Sort(SortKey),
    Advance(isize),
    Next,
    Prev,
    GoTo(usize),
    DragStart { x: f64, y: f64, pointer: PointerKind },
    DragMove { x: f64, y: f64 },
    DragEnd { x: f64 },
    /// Animation timer fired
    Tick,
    /// Auto-rotate interval fired
    AutoRotate,
    SetView(ViewMode),
    OpenDetail(usize),
    /// Open the detail modal on the idea with this id, wherever it sits in the sequence
    OpenDetailById(u32),
    CloseModal,
    DetailNext,
    DetailPrev,
    OpenSubmit,
    /// Measured card width (card plus gap) changed
    Resize { item_width: f64 },
    Key(KeyCommand),
}

/// What the caller should do after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Deck changed; views should re-render
    pub changed: bool,
    /// Arm a `Tick` after this many milliseconds
    pub tick_after_ms: Option<u64>,
    /// Call `preventDefault` on the triggering event
    pub prevent_default: bool,
}

impl DispatchOutcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    store: DataStore,
    controller: CarouselController,
    view: ViewMode,
    modal: ModalState,
    item_width: f64,
    /// Pending records from the submit form, never merged into the catalog
    submissions: Vec<Idea>,
    platform_stats: Option<PlatformStats>,
    config: DeckConfig,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

impl Deck {
    pub fn new(config: DeckConfig) -> Self {
        Self {
            store: DataStore::default(),
            controller: CarouselController::new(&config),
            view: ViewMode::Carousel,
            modal: ModalState::Closed,
            item_width: config.item_width_px,
            submissions: Vec::new(),
            platform_stats: None,
            config,
        }
    }

    pub fn load(&mut self, ideas: Vec<Idea>) {
        self.controller.reset();
        self.store.load(ideas);
    }

    pub fn dispatch(&mut self, command: Command, clock: &impl Clock) -> DispatchOutcome {
        let now = clock.now_ms();
        match command {
            Command::Filter(category) => {
                self.controller.reset();
                self.store.set_category(category);
                DispatchOutcome::changed()
            }
            Command::Sort(key) => {
                self.controller.reset();
                self.store.set_sort(key);
                DispatchOutcome::changed()
            }
            Command::Advance(delta) => {
                let moved = self.controller.advance(delta, &mut self.store, now);
                self.animation_outcome(moved)
            }
            Command::Next => {
                let moved = self.controller.next(&mut self.store, now);
                self.animation_outcome(moved)
            }
            Command::Prev => {
                let moved = self.controller.prev(&mut self.store, now);
                self.animation_outcome(moved)
            }
            Command::GoTo(index) => {
                let moved = self.controller.go_to(index, &mut self.store, now);
                self.animation_outcome(moved)
            }
            Command::DragStart { x, y, pointer } => {
                if self.view != ViewMode::Carousel || self.is_modal_open() {
                    return DispatchOutcome::unchanged();
                }
                self.controller.drag_start(x, y, pointer, now);
                DispatchOutcome {
                    changed: true,
                    tick_after_ms: None,
                    prevent_default: pointer == PointerKind::Mouse,
                }
            }
            Command::DragMove { x, y } => {
                match self.controller.drag_move(x, y, &self.store, self.item_width) {
                    Some(frame) => DispatchOutcome {
                        changed: true,
                        tick_after_ms: None,
                        prevent_default: frame.suppress_default,
                    },
                    None => DispatchOutcome::unchanged(),
                }
            }
            Command::DragEnd { x } => {
                let released = self.controller.drag_end(x, &mut self.store, now).is_some();
                self.animation_outcome(released)
            }
            Command::Tick => DispatchOutcome {
                changed: self.controller.tick(now),
                ..DispatchOutcome::default()
            },
            Command::AutoRotate => {
                if self.view != ViewMode::Carousel || self.is_modal_open() {
                    return DispatchOutcome::unchanged();
                }
                let moved = self.controller.next(&mut self.store, now);
                self.animation_outcome(moved)
            }
            Command::SetView(mode) => {
                if mode == self.view {
                    return DispatchOutcome::unchanged();
                }
                self.view = mode;
                self.controller.reset();
                DispatchOutcome::changed()
            }
            Command::OpenDetail(index) => {
                if self.store.go_to(index).is_err() {
                    return DispatchOutcome::unchanged();
                }
                self.modal = ModalState::Detail;
                DispatchOutcome::changed()
            }
            Command::OpenDetailById(id) => {
                match self.store.filtered().iter().position(|idea| idea.id == id) {
                    Some(index) => self.dispatch(Command::OpenDetail(index), clock),
                    None => {
                        log::debug!("deck: idea #{} is not in the current sequence", id);
                        DispatchOutcome::unchanged()
                    }
                }
            }
            Command::CloseModal => {
                if self.modal == ModalState::Closed {
                    return DispatchOutcome::unchanged();
                }
                self.modal = ModalState::Closed;
                DispatchOutcome::changed()
            }
            Command::DetailNext => self.step_detail(1),
            Command::DetailPrev => self.step_detail(-1),
            Command::OpenSubmit => {
                self.modal = ModalState::Submit;
                DispatchOutcome::changed()
            }
            Command::Resize { item_width } => {
                if !item_width.is_finite() || item_width <= 0.0 || item_width == self.item_width {
                    return DispatchOutcome::unchanged();
                }
                self.item_width = item_width;
                DispatchOutcome::changed()
            }
            Command::Key(key) => self.handle_key(key, clock),
        }
    }

    /// Validate a submit-form entry and keep it as a pending record
    pub fn record_submission(&mut self, submission: IdeaSubmission, now: DateTime<Utc>) -> DomainResult<Idea> {
        let next_submitted = self.submissions.iter().map(|idea| idea.id + 1).max().unwrap_or(0);
        let id = self.store.next_id().max(next_submitted);
        let idea = submission.into_pending(id, now)?;
        log::info!("deck: recorded pending idea #{} '{}'", idea.id, idea.title);
        self.submissions.push(idea.clone());
        Ok(idea)
    }

    fn handle_key(&mut self, key: KeyCommand, clock: &impl Clock) -> DispatchOutcome {
        if self.is_modal_open() {
            return match key {
                KeyCommand::Escape => self.dispatch(Command::CloseModal, clock),
                _ => DispatchOutcome::unchanged(),
            };
        }
        let mut outcome = match key {
            KeyCommand::ArrowLeft => self.dispatch(Command::Prev, clock),
            KeyCommand::ArrowRight => self.dispatch(Command::Next, clock),
            KeyCommand::Space => {
                let index = self.store.current_index();
                self.dispatch(Command::OpenDetail(index), clock)
            }
            KeyCommand::Escape => return DispatchOutcome::unchanged(),
        };
        outcome.prevent_default = true;
        outcome
    }

    /// Detail prev/next moves the store directly. The carousel sits behind the
    /// modal and re-renders at the new index when it closes, so an animation
    /// still running on the track does not block these steps.
    fn step_detail(&mut self, delta: isize) -> DispatchOutcome {
        if self.modal != ModalState::Detail || self.store.len() < 2 {
            return DispatchOutcome::unchanged();
        }
        self.store.advance(delta);
        DispatchOutcome::changed()
    }

    fn animation_outcome(&self, animating: bool) -> DispatchOutcome {
        if !animating {
            return DispatchOutcome::unchanged();
        }
        DispatchOutcome {
            changed: true,
            tick_after_ms: Some(self.controller.animation_ms()),
            prevent_default: false,
        }
    }

    // ========================
    // Read side
    // ========================

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    pub fn submissions(&self) -> &[Idea] {
        &self.submissions
    }

    pub fn platform_stats(&self) -> Option<&PlatformStats> {
        self.platform_stats.as_ref()
    }

    pub fn set_platform_stats(&mut self, stats: PlatformStats) {
        self.platform_stats = Some(stats);
    }

    pub fn stats(&self) -> DeckStats {
        self.store.compute_stats()
    }

    pub fn carousel_frame(&self) -> CarouselFrame {
        render::carousel_frame(
            self.store.filtered(),
            self.store.current_index(),
            self.item_width,
            self.controller.drag_offset(),
            self.controller.animation_ms(),
        )
    }

    pub fn grid_cards(&self) -> Vec<CardView> {
        render::grid_cards(self.store.filtered(), self.store.current_index())
    }

    pub fn indicators(&self) -> Vec<IndicatorView> {
        render::indicators(self.store.len(), self.store.current_index())
    }

    /// Detail of the current idea while the detail modal is open
    pub fn detail(&self) -> Option<DetailView> {
        if self.modal != ModalState::Detail {
            return None;
        }
        render::detail_view(self.store.filtered(), self.store.current_index())
    }
}
