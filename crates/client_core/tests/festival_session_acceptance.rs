use std::{sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use client_core::{
    time_remaining, BoundedSurface, CatalogView, CountdownTicker, DragScrollController,
    FixedClock, PointerButton, PointerEvent, RecordingHaptics, ScrollSurface, TicketPricingEngine,
    TimeRemaining, ToggleStore, VoteOutcome, DEFAULT_TICK_INTERVAL,
};
use shared::{
    catalog::festival_catalog,
    domain::{CategoryFilter, EntryId, TierId},
};

fn at(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid instant")
}

#[test]
fn countdown_two_days_before_doors_open() {
    assert_eq!(
        time_remaining(at("2025-10-17T11:00:00Z"), at("2025-10-19T11:00:00Z")),
        TimeRemaining {
            days: 2,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn browse_pick_and_vote_flow() {
    let catalog = festival_catalog();

    let mut view = CatalogView::new(catalog.entries.clone());
    view.set_category(CategoryFilter::parse("all"));
    assert_eq!(view.set_search("soup"), [EntryId(2)]);

    let haptics = Arc::new(RecordingHaptics::default());
    let mut toggles = ToggleStore::new(haptics.clone());
    let chosen = catalog.get_or_first(EntryId(2)).expect("entry");
    toggles.like(chosen.id);
    assert_eq!(toggles.vote(chosen.id), VoteOutcome::Recorded);
    assert_eq!(toggles.vote(chosen.id), VoteOutcome::AlreadyVoted);
    assert_eq!(haptics.pulses(), vec![Duration::from_millis(50)]);

    let state = toggles.state(chosen.id);
    assert!(state.liked && state.has_voted);
}

#[test]
fn ticket_totals_for_person_and_pack_tiers() {
    let mut engine = TicketPricingEngine::new(festival_catalog().tiers);
    assert_eq!(engine.total(), None);

    engine.select_tier(&TierId::from("general")).expect("general");
    engine.set_quantity(3);
    assert_eq!(engine.total(), Some(45));

    engine.select_tier(&TierId::from("family")).expect("family");
    engine.set_quantity(7);
    assert_eq!(engine.total(), Some(45));
}

#[test]
fn drag_scroll_through_ticket_list() {
    let mut surface = BoundedSurface::new(1_800.0, 640.0);
    let mut controller = DragScrollController::new();
    controller.attach(&mut surface);

    let gestures = [
        PointerEvent::Move { y: 10.0 },
        PointerEvent::Down {
            button: PointerButton::Secondary,
            y: 400.0,
        },
        PointerEvent::Move { y: 100.0 },
        PointerEvent::Down {
            button: PointerButton::Primary,
            y: 400.0,
        },
        PointerEvent::Move { y: 300.0 },
        PointerEvent::Leave,
        PointerEvent::Move { y: 0.0 },
    ];
    for event in gestures {
        controller.handle_event(event, &mut surface);
    }

    assert_eq!(surface.scroll_offset(), 150.0);
    assert!(!controller.is_dragging());
}

#[tokio::test(start_paused = true)]
async fn countdown_ticker_lives_with_its_view() {
    let target = at("2025-10-19T11:00:00Z");
    let clock = Arc::new(FixedClock::new(target - TimeDelta::seconds(3)));
    let mut ticker =
        CountdownTicker::start(clock.clone(), target, DEFAULT_TICK_INTERVAL).expect("ticker");
    let mut updates = ticker.subscribe();

    for expected in [2, 1, 0] {
        clock.advance(TimeDelta::seconds(1));
        updates.changed().await.expect("tick");
        assert_eq!(updates.borrow().seconds, expected);
    }
    assert!(ticker.target_reached());

    ticker.stop();
    assert!(!ticker.is_running());
}
