//! Deck Scenario Tests
//!
//! End-to-end command sequences against a `Deck`, driven by a manual clock.

#[cfg(test)]
mod tests {
    use crate::catalog::sample_ideas;
    use crate::{
        CategoryFilter, Command, Deck, DeckConfig, IdeaSubmission, KeyCommand, ManualClock,
        ModalState, Phase, PointerKind, SortKey, ViewMode,
    };

    fn setup_deck() -> (Deck, ManualClock) {
        let mut deck = Deck::new(DeckConfig::default());
        deck.load(sample_ideas().expect("sample catalog"));
        (deck, ManualClock::new(10_000))
    }

    fn swipe(deck: &mut Deck, clock: &ManualClock, dx: f64) {
        deck.dispatch(Command::DragStart { x: 400.0, y: 200.0, pointer: PointerKind::Touch }, clock);
        deck.dispatch(Command::DragMove { x: 400.0 + dx, y: 205.0 }, clock);
        clock.advance(40);
        deck.dispatch(Command::DragEnd { x: 400.0 + dx }, clock);
    }

    #[test]
    fn test_filter_to_ai() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::GoTo(3), &clock);
        deck.dispatch(Command::Filter(CategoryFilter::from("ai")), &clock);
        assert_eq!(deck.store().len(), 2);
        assert_eq!(deck.store().current_index(), 0);
        assert_eq!(deck.controller().phase(), Phase::Idle);
    }

    #[test]
    fn test_short_swipe_snaps_back() {
        let (mut deck, clock) = setup_deck();
        swipe(&mut deck, &clock, 30.0);
        assert_eq!(deck.store().current_index(), 0);
        assert!(deck.controller().is_animating());
        assert_eq!(deck.carousel_frame().track.offset_px, 0.0);
    }

    #[test]
    fn test_left_swipe_advances() {
        let (mut deck, clock) = setup_deck();
        swipe(&mut deck, &clock, -80.0);
        assert_eq!(deck.store().current_index(), 1);
        assert_eq!(deck.carousel_frame().track.offset_px, -350.0);
    }

    #[test]
    fn test_drag_move_shows_live_offset_without_commit() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::DragStart { x: 400.0, y: 0.0, pointer: PointerKind::Mouse }, &clock);
        let outcome = deck.dispatch(Command::DragMove { x: 340.0, y: 0.0 }, &clock);
        assert!(outcome.prevent_default);
        let frame = deck.carousel_frame();
        assert_eq!(frame.track.offset_px, -60.0);
        assert!(!frame.track.animated);
        assert_eq!(deck.store().current_index(), 0);
    }

    #[test]
    fn test_auto_rotate_blocked_by_modal() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::OpenDetail(2), &clock);
        assert_eq!(deck.modal(), ModalState::Detail);
        clock.advance(8_000);
        let outcome = deck.dispatch(Command::AutoRotate, &clock);
        assert!(!outcome.changed);
        assert_eq!(deck.store().current_index(), 2);
    }

    #[test]
    fn test_auto_rotate_only_in_carousel_view() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::SetView(ViewMode::Grid), &clock);
        assert!(!deck.dispatch(Command::AutoRotate, &clock).changed);
        deck.dispatch(Command::SetView(ViewMode::Carousel), &clock);
        let outcome = deck.dispatch(Command::AutoRotate, &clock);
        assert_eq!(outcome.tick_after_ms, Some(500));
        assert_eq!(deck.store().current_index(), 1);
    }

    #[test]
    fn test_auto_rotate_waits_for_drag() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::DragStart { x: 0.0, y: 0.0, pointer: PointerKind::Mouse }, &clock);
        assert!(!deck.dispatch(Command::AutoRotate, &clock).changed);
        assert_eq!(deck.store().current_index(), 0);
    }

    #[test]
    fn test_tick_completes_animation() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::Next, &clock);
        assert!(!deck.dispatch(Command::Next, &clock).changed);
        clock.advance(499);
        assert!(!deck.dispatch(Command::Tick, &clock).changed);
        clock.advance(1);
        assert!(deck.dispatch(Command::Tick, &clock).changed);
        assert!(deck.dispatch(Command::Next, &clock).changed);
        assert_eq!(deck.store().current_index(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::Filter(CategoryFilter::from("biotech")), &clock);
        let stats = deck.stats();
        assert_eq!(stats.total_ideas, 0);
        assert_eq!(stats.total_categories, 0);
        assert_eq!(stats.avg_rating_label(), "0.0");
        let frame = deck.carousel_frame();
        assert!(frame.cards.is_empty());
        assert!(deck.indicators().is_empty());
        swipe(&mut deck, &clock, -200.0);
        assert!(!deck.dispatch(Command::Next, &clock).changed);
        assert!(!deck.dispatch(Command::Key(KeyCommand::Space), &clock).changed);
        assert_eq!(deck.store().current_index(), 0);
    }

    #[test]
    fn test_sort_resets_index_and_reorders() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::GoTo(4), &clock);
        deck.dispatch(Command::Sort(SortKey::Rating), &clock);
        assert_eq!(deck.store().current_index(), 0);
        assert_eq!(deck.store().current().map(|idea| idea.id), Some(5));
    }

    #[test]
    fn test_keyboard_navigation() {
        let (mut deck, clock) = setup_deck();
        let outcome = deck.dispatch(Command::Key(KeyCommand::ArrowLeft), &clock);
        assert!(outcome.prevent_default);
        assert_eq!(deck.store().current_index(), 4);

        deck.dispatch(Command::Key(KeyCommand::Space), &clock);
        assert_eq!(deck.modal(), ModalState::Detail);
        assert_eq!(deck.detail().map(|d| d.id), Some(3));

        // arrows are ignored behind the modal, escape closes it
        clock.advance(1_000);
        assert!(!deck.dispatch(Command::Key(KeyCommand::ArrowRight), &clock).changed);
        deck.dispatch(Command::Key(KeyCommand::Escape), &clock);
        assert_eq!(deck.modal(), ModalState::Closed);
        assert_eq!(KeyCommand::from_key("Enter"), None);
    }

    #[test]
    fn test_detail_navigation_wraps() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::OpenDetail(0), &clock);
        deck.dispatch(Command::DetailPrev, &clock);
        assert_eq!(deck.store().current_index(), 4);
        deck.dispatch(Command::DetailNext, &clock);
        assert_eq!(deck.store().current_index(), 0);
        assert!(deck.detail().unwrap().show_navigation);
        deck.dispatch(Command::CloseModal, &clock);
        assert!(deck.detail().is_none());
        assert!(!deck.dispatch(Command::DetailNext, &clock).changed);
    }

    #[test]
    fn test_open_detail_by_id_after_sort() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::Sort(SortKey::Rating), &clock);
        // rating order is [5, 3, 4, 1, 2]
        deck.dispatch(Command::OpenDetailById(3), &clock);
        assert_eq!(deck.store().current_index(), 1);
        assert_eq!(deck.detail().map(|d| d.id), Some(3));
    }

    #[test]
    fn test_open_detail_by_id_after_filter() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::Filter(CategoryFilter::from("ai")), &clock);
        deck.dispatch(Command::OpenDetailById(4), &clock);
        assert_eq!(deck.detail().map(|d| d.id), Some(4));
        deck.dispatch(Command::CloseModal, &clock);

        // filtered out ideas cannot be opened
        assert!(!deck.dispatch(Command::OpenDetailById(1), &clock).changed);
        assert_eq!(deck.modal(), ModalState::Closed);
    }

    #[test]
    fn test_detail_steps_while_track_animates() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::Next, &clock);
        assert!(deck.controller().is_animating());
        deck.dispatch(Command::OpenDetailById(2), &clock);
        assert!(deck.dispatch(Command::DetailNext, &clock).changed);
        assert_eq!(deck.detail().map(|d| d.id), Some(4));
    }

    #[test]
    fn test_open_detail_out_of_range() {
        let (mut deck, clock) = setup_deck();
        assert!(!deck.dispatch(Command::OpenDetail(99), &clock).changed);
        assert_eq!(deck.modal(), ModalState::Closed);
    }

    #[test]
    fn test_drag_ignored_in_grid_or_behind_modal() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::OpenSubmit, &clock);
        deck.dispatch(Command::DragStart { x: 0.0, y: 0.0, pointer: PointerKind::Touch }, &clock);
        assert!(!deck.controller().is_dragging());
        deck.dispatch(Command::CloseModal, &clock);
        deck.dispatch(Command::SetView(ViewMode::Grid), &clock);
        deck.dispatch(Command::DragStart { x: 0.0, y: 0.0, pointer: PointerKind::Touch }, &clock);
        assert!(!deck.controller().is_dragging());
    }

    #[test]
    fn test_resize_moves_track() {
        let (mut deck, clock) = setup_deck();
        deck.dispatch(Command::GoTo(2), &clock);
        deck.dispatch(Command::Resize { item_width: 300.0 }, &clock);
        assert_eq!(deck.carousel_frame().track.offset_px, -600.0);
        assert!(!deck.dispatch(Command::Resize { item_width: f64::NAN }, &clock).changed);
        assert!(!deck.dispatch(Command::Resize { item_width: 0.0 }, &clock).changed);
    }

    #[test]
    fn test_submission_is_pending_and_separate() {
        let (mut deck, _clock) = setup_deck();
        let form = IdeaSubmission {
            title: "Plant Doctor".into(),
            category: "ai".into(),
            complexity: 2,
            description: "Diagnose plants.".into(),
            tags: "AI, Garden".into(),
            ..IdeaSubmission::default()
        };
        let first = deck.record_submission(form.clone(), chrono::Utc::now()).unwrap();
        let second = deck.record_submission(form, chrono::Utc::now()).unwrap();
        assert_eq!(first.id, 6);
        assert_eq!(second.id, 7);
        assert!(first.is_pending());
        assert_eq!(deck.submissions().len(), 2);
        assert_eq!(deck.store().ideas().len(), 5);

        let invalid = IdeaSubmission::default();
        assert!(deck.record_submission(invalid, chrono::Utc::now()).is_err());
        assert_eq!(deck.submissions().len(), 2);
    }
}
