use proptest::prelude::*;
use rsupply::core::projection::{
    INFINITE, current_inventory, duration_string, reconcile, reset_snapshot,
};
use rsupply::models::{Row, Snapshot};

const T: i64 = 1_735_689_600_000;
const HOUR: i64 = 3_600_000;

fn row(inventory: f64, updated_at_ms: i64, rate: f64) -> Row {
    Row {
        id: "row_test".into(),
        name: "Water".into(),
        consumption_per_hour: Some(rate),
        snapshot: Snapshot::new(inventory, updated_at_ms),
    }
}

// --- current_inventory ---

#[test]
fn one_hour_of_consumption() {
    let r = row(240.0, T, 10.0);
    let current = current_inventory(&r, T + HOUR);
    assert_eq!(current, 230.0);
    assert_eq!(duration_string(10.0, current), "0d23h0m");
}

#[test]
fn depletion_clamps_at_zero() {
    let r = row(240.0, T, 10.0);
    let current = current_inventory(&r, T + 24 * HOUR * 10);
    assert_eq!(current, 0.0);
    assert_eq!(duration_string(10.0, current), "0d0h0m");
}

#[test]
fn clock_skew_means_no_decay() {
    let r = row(100.0, T, 5.0);
    assert_eq!(current_inventory(&r, T - 5 * HOUR), 100.0);
}

#[test]
fn missing_timestamp_means_no_elapsed_time() {
    let mut r = row(100.0, T, 5.0);
    r.snapshot.updated_at_ms = None;
    assert_eq!(current_inventory(&r, T + 10 * HOUR), 100.0);

    r.snapshot.updated_at_ms = Some(0);
    assert_eq!(current_inventory(&r, T + 10 * HOUR), 100.0);
}

#[test]
fn missing_rate_and_inventory_default_to_zero() {
    let mut r = row(100.0, T, 5.0);
    r.consumption_per_hour = None;
    assert_eq!(current_inventory(&r, T + 10 * HOUR), 100.0);

    r.snapshot.inventory_at_update = None;
    assert_eq!(current_inventory(&r, T + 10 * HOUR), 0.0);
}

#[test]
fn nan_inventory_clamps_to_zero() {
    let r = row(f64::NAN, T, 5.0);
    assert_eq!(current_inventory(&r, T + HOUR), 0.0);
}

#[test]
fn nan_rate_counts_as_no_consumption() {
    let r = row(100.0, T, f64::NAN);
    assert_eq!(r.rate(), 0.0);
    assert_eq!(current_inventory(&r, T + HOUR), 100.0);
    assert_eq!(duration_string(r.rate(), 100.0), INFINITE);
}

// --- duration_string ---

#[test]
fn duration_of_empty_stock() {
    assert_eq!(duration_string(5.0, 0.0), "0d0h0m");
}

#[test]
fn duration_never_depletes() {
    assert_eq!(duration_string(0.0, 100.0), INFINITE);
    assert_eq!(duration_string(-1.0, 100.0), "∞");
    assert_eq!(duration_string(f64::NAN, 100.0), "∞");
    assert_eq!(duration_string(1.0, f64::INFINITY), "∞");
}

#[test]
fn duration_components_are_floored_not_rounded() {
    // 100 / 3 h = 33.333 h = 2000 minutes = 1d 9h 20m
    assert_eq!(duration_string(3.0, 100.0), "1d9h20m");
    // 59.99 minutes must stay 59m, not become 1h
    assert_eq!(duration_string(60.0, 59.99), "0d0h59m");
    // 25h exactly
    assert_eq!(duration_string(1.0, 25.0), "1d1h0m");
}

#[test]
fn negative_stock_floors_days_and_hours() {
    assert_eq!(duration_string(1.0, -0.5), "-1d-1h-30m");
    assert_eq!(duration_string(1.0, -2.0), "-1d-2h0m");
}

// --- reconciliation ---

#[test]
fn reconcile_before_rate_change() {
    let mut r = row(100.0, T, 5.0);
    let reset_at = T + 2 * HOUR;

    reset_snapshot(&mut r, reset_at);
    assert_eq!(r.snapshot, Snapshot::new(90.0, reset_at));

    r.consumption_per_hour = Some(20.0);
    assert_eq!(current_inventory(&r, reset_at), 90.0);
    assert_eq!(current_inventory(&r, reset_at + HOUR), 70.0);
}

#[test]
fn change_rate_keeps_consumption_so_far() {
    let mut r = row(100.0, T, 5.0);
    r.change_rate(20.0, T + 2 * HOUR);

    assert_eq!(r.consumption_per_hour, Some(20.0));
    assert_eq!(r.snapshot.inventory_at_update, Some(90.0));
    assert_eq!(r.snapshot.updated_at_ms, Some(T + 2 * HOUR));
}

#[test]
fn correct_inventory_discards_projection() {
    let mut r = row(100.0, T, 5.0);
    r.correct_inventory(42.0, T + 3 * HOUR);

    assert_eq!(r.snapshot, Snapshot::new(42.0, T + 3 * HOUR));
    assert_eq!(r.consumption_per_hour, Some(5.0));
    assert_eq!(current_inventory(&r, T + 4 * HOUR), 37.0);
}

#[test]
fn reconcile_does_not_touch_the_row() {
    let r = row(100.0, T, 5.0);
    let snap = reconcile(&r, T + HOUR);
    assert_eq!(snap, Snapshot::new(95.0, T + HOUR));
    assert_eq!(r.snapshot, Snapshot::new(100.0, T));
}

// --- properties ---

proptest! {
    #[test]
    fn never_negative(
        inv in 0.0f64..1e6,
        rate in 0.0f64..1e4,
        elapsed in 0i64..(365 * 24 * HOUR),
    ) {
        let r = row(inv, T, rate);
        prop_assert!(current_inventory(&r, T + elapsed) >= 0.0);
    }

    #[test]
    fn non_increasing_in_time(
        inv in 0.0f64..1e6,
        rate in 0.0f64..1e4,
        a in 0i64..(30 * 24 * HOUR),
        b in 0i64..(30 * 24 * HOUR),
    ) {
        let r = row(inv, T, rate);
        let (t1, t2) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(current_inventory(&r, T + t1) >= current_inventory(&r, T + t2));
    }

    #[test]
    fn zero_rate_is_constant(inv in 0.0f64..1e6, elapsed in -(HOUR * 100)..(HOUR * 10_000)) {
        let r = row(inv, T, 0.0);
        prop_assert_eq!(current_inventory(&r, T + elapsed), inv);
    }

    #[test]
    fn reset_is_idempotent(
        inv in 0.0f64..1e6,
        rate in 0.0f64..1e4,
        elapsed in 0i64..(30 * 24 * HOUR),
    ) {
        let mut r = row(inv, T, rate);
        reset_snapshot(&mut r, T + elapsed);
        let first = r.snapshot;
        reset_snapshot(&mut r, T + elapsed);
        prop_assert_eq!(first, r.snapshot);
    }

    #[test]
    fn continuity_across_rate_change(
        inv in 0.0f64..1e6,
        old_rate in 0.0f64..1e4,
        new_rate in 0.0f64..1e4,
        elapsed in 0i64..(30 * 24 * HOUR),
    ) {
        let mut r = row(inv, T, old_rate);
        let now = T + elapsed;
        let before = current_inventory(&r, now);
        r.change_rate(new_rate, now);
        prop_assert_eq!(current_inventory(&r, now), before);
    }

    #[test]
    fn duration_components_are_consistent(rate in 0.01f64..1e3, inv in 0.0f64..1e6) {
        let s = duration_string(rate, inv);
        let total = (inv / rate * 60.0).floor() as i64;

        let (d, rest) = s.split_once('d').unwrap();
        let (h, rest) = rest.split_once('h').unwrap();
        let m = rest.strip_suffix('m').unwrap();
        let (d, h, m): (i64, i64, i64) = (d.parse().unwrap(), h.parse().unwrap(), m.parse().unwrap());

        prop_assert!(h < 24 && m < 60);
        prop_assert_eq!(d * 1440 + h * 60 + m, total);
    }
}
