use super::*;
use crate::clock::FixedClock;
use chrono::TimeDelta;

fn at(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid RFC 3339 instant")
}

#[test]
fn two_days_out_is_exactly_two_days() {
    let remaining = time_remaining(at("2025-10-17T11:00:00Z"), at("2025-10-19T11:00:00Z"));
    assert_eq!(
        remaining,
        TimeRemaining {
            days: 2,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn reaching_or_passing_target_is_zero() {
    let target = at("2025-10-19T11:00:00Z");
    assert!(time_remaining(target, target).is_zero());
    assert!(time_remaining(target + TimeDelta::days(400), target).is_zero());
    assert!(TimeRemaining::from_delta_millis(i64::MIN).is_zero());
}

#[test]
fn decomposition_floors_each_unit() {
    // 1d 23h 59m 59s 999ms
    let delta = 86_400_000 + 23 * 3_600_000 + 59 * 60_000 + 59 * 1_000 + 999;
    let remaining = TimeRemaining::from_delta_millis(delta);
    assert_eq!(
        remaining,
        TimeRemaining {
            days: 1,
            hours: 23,
            minutes: 59,
            seconds: 59
        }
    );
    assert!(TimeRemaining::from_delta_millis(999).is_zero());
}

#[test]
fn reconstructed_delta_is_within_one_tick() {
    let mut delta: i64 = 1;
    while delta < 90 * 86_400_000 {
        let rebuilt = TimeRemaining::from_delta_millis(delta).as_millis() as i64;
        assert!(rebuilt <= delta, "delta={delta} rebuilt={rebuilt}");
        assert!(rebuilt > delta - 1_000, "delta={delta} rebuilt={rebuilt}");
        delta = delta * 3 + 7;
    }
}

#[test]
fn units_are_in_display_order() {
    let labels: Vec<_> = TimeRemaining::from_delta_millis(3_723_000)
        .units()
        .iter()
        .map(|(label, value)| format!("{label}={value}"))
        .collect();
    assert_eq!(labels, ["days=0", "hours=1", "minutes=2", "seconds=3"]);
}

#[tokio::test(start_paused = true)]
async fn ticker_publishes_initial_value_then_each_tick() {
    let target = at("2025-10-19T11:00:00Z");
    let clock = Arc::new(FixedClock::new(target - TimeDelta::seconds(10)));
    let ticker = CountdownTicker::start(clock.clone(), target, DEFAULT_TICK_INTERVAL)
        .expect("ticker starts");
    assert_eq!(ticker.current().seconds, 10);

    let mut updates = ticker.subscribe();
    clock.advance(TimeDelta::seconds(1));
    updates.changed().await.expect("tick delivered");
    assert_eq!(updates.borrow().seconds, 9);
    assert!(ticker.is_running());
}

#[tokio::test(start_paused = true)]
async fn ticker_settles_on_zero_after_target() {
    let target = at("2025-10-19T11:00:00Z");
    let clock = Arc::new(FixedClock::new(target - TimeDelta::seconds(1)));
    let ticker =
        CountdownTicker::start(clock.clone(), target, DEFAULT_TICK_INTERVAL).expect("ticker");
    assert!(!ticker.target_reached());

    let mut updates = ticker.subscribe();
    clock.advance(TimeDelta::seconds(5));
    updates.changed().await.expect("tick delivered");
    assert!(ticker.target_reached());

    clock.advance(TimeDelta::hours(1));
    updates.changed().await.expect("tick delivered");
    assert_eq!(*updates.borrow(), TimeRemaining::ZERO);
}

#[tokio::test(start_paused = true)]
async fn zero_display_inside_last_second_is_not_target_reached() {
    let target = at("2025-10-19T11:00:00Z");
    let clock = Arc::new(FixedClock::new(target - TimeDelta::milliseconds(500)));
    let mut ticker =
        CountdownTicker::start(clock.clone(), target, DEFAULT_TICK_INTERVAL).expect("ticker");

    assert!(ticker.current().is_zero());
    assert!(!ticker.target_reached());

    clock.advance(TimeDelta::milliseconds(500));
    assert!(ticker.target_reached());
    ticker.stop();
}

#[tokio::test(start_paused = true)]
async fn stopped_ticker_no_longer_publishes() {
    let target = at("2025-10-19T11:00:00Z");
    let clock = Arc::new(FixedClock::new(target - TimeDelta::minutes(1)));
    let mut ticker =
        CountdownTicker::start(clock.clone(), target, DEFAULT_TICK_INTERVAL).expect("ticker");

    ticker.stop();
    ticker.stop();
    assert!(!ticker.is_running());

    clock.advance(TimeDelta::seconds(30));
    time::sleep(Duration::from_secs(5)).await;
    assert_eq!(ticker.current().minutes, 1);
    assert_eq!(ticker.current().seconds, 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_ticker_closes_update_channel() {
    let target = at("2025-10-19T11:00:00Z");
    let clock = Arc::new(FixedClock::new(target - TimeDelta::minutes(1)));
    let ticker = CountdownTicker::start(clock, target, DEFAULT_TICK_INTERVAL).expect("ticker");
    let mut updates = ticker.subscribe();

    drop(ticker);
    assert!(updates.changed().await.is_err());
}

#[tokio::test]
async fn zero_interval_is_rejected() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let result = CountdownTicker::start(clock, Utc::now(), Duration::ZERO);
    assert!(matches!(result, Err(CoreError::ZeroTickInterval)));
}
