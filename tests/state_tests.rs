use rsupply::core::shortfall::{ShortfallLogic, shortfall};
use rsupply::errors::AppError;
use rsupply::models::{Profile, Row, Snapshot, State};

const T: i64 = 1_735_689_600_000;
const HOUR: i64 = 3_600_000;

fn row(id: &str, name: &str, inventory: f64, rate: f64) -> Row {
    Row {
        id: id.into(),
        name: name.into(),
        consumption_per_hour: Some(rate),
        snapshot: Snapshot::new(inventory, T),
    }
}

#[test]
fn default_state_has_one_selected_profile() {
    let state = State::with_default_profile("Default");
    assert_eq!(state.profiles.len(), 1);
    assert_eq!(state.selected().unwrap().name, "Default");
    assert!(state.selected().unwrap().id.starts_with("profile_"));
}

#[test]
fn create_profile_selects_it_and_falls_back_on_blank_name() {
    let mut state = State::with_default_profile("Default");
    let id = state.create_profile("  ", "New Base").id.clone();

    assert_eq!(state.profiles.len(), 2);
    assert_eq!(state.selected_profile_id, id);
    assert_eq!(state.selected().unwrap().name, "New Base");
}

#[test]
fn stale_selection_resolves_to_first_profile() {
    let mut state = State::with_default_profile("Default");
    state.create_profile("Outpost", "New Base");
    state.selected_profile_id = "profile_gone".into();

    assert_eq!(state.selected().unwrap().name, "Default");
}

#[test]
fn select_by_id_or_name() {
    let mut state = State::with_default_profile("Default");
    let outpost = state.create_profile("Outpost", "New Base").id.clone();
    state.select("default").unwrap();
    assert_eq!(state.selected().unwrap().name, "Default");

    state.select(&outpost).unwrap();
    assert_eq!(state.selected_profile_id, outpost);

    assert!(matches!(
        state.select("nowhere"),
        Err(AppError::ProfileNotFound(_))
    ));
}

#[test]
fn deleting_selected_profile_selects_first_remaining() {
    let mut state = State::with_default_profile("Default");
    let first = state.profiles[0].id.clone();
    let outpost = state.create_profile("Outpost", "New Base").id.clone();

    let removed = state.delete_profile(&outpost, "Default").unwrap();
    assert_eq!(removed.name, "Outpost");
    assert_eq!(state.selected_profile_id, first);
}

#[test]
fn deleting_last_profile_recreates_default() {
    let mut state = State::with_default_profile("Default");
    let only = state.profiles[0].id.clone();

    state.delete_profile(&only, "Padrão").unwrap();
    assert_eq!(state.profiles.len(), 1);
    assert_ne!(state.profiles[0].id, only);
    assert_eq!(state.selected().unwrap().name, "Padrão");
}

#[test]
fn rename_profile_rejects_blank() {
    let mut state = State::with_default_profile("Default");
    let id = state.profiles[0].id.clone();

    assert!(matches!(
        state.rename_profile(&id, "   "),
        Err(AppError::InvalidName(_))
    ));
    state.rename_profile(&id, " Main ").unwrap();
    assert_eq!(state.profiles[0].name, "Main");
}

#[test]
fn normalize_fixes_empty_and_dangling_imports() {
    let mut empty = State {
        selected_profile_id: "x".into(),
        profiles: vec![],
    };
    empty.normalize("Default");
    assert_eq!(empty.profiles.len(), 1);
    assert_eq!(empty.selected_profile_id, empty.profiles[0].id);

    let mut dangling = State {
        selected_profile_id: "x".into(),
        profiles: vec![Profile::new("A"), Profile::new("B")],
    };
    dangling.normalize("Default");
    assert_eq!(dangling.selected_profile_id, dangling.profiles[0].id);
}

#[test]
fn upsert_replaces_by_id_and_keeps_order() {
    let mut p = Profile::new("Base");
    p.upsert_row(row("r1", "Water", 10.0, 1.0));
    p.upsert_row(row("r2", "Fuel", 20.0, 2.0));
    p.upsert_row(row("r1", "Water (big)", 99.0, 1.0));

    let names: Vec<&str> = p.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Water (big)", "Fuel"]);
}

#[test]
fn find_row_by_id_then_name() {
    let mut p = Profile::new("Base");
    p.upsert_row(row("r1", "Water", 10.0, 1.0));
    p.upsert_row(row("r2", "Fuel", 20.0, 2.0));

    assert_eq!(p.find_row("r2").unwrap().name, "Fuel");
    assert_eq!(p.find_row("Water").unwrap().id, "r1");
    assert_eq!(p.find_row("FUEL").unwrap().id, "r2");
    assert!(matches!(p.find_row("Oil"), Err(AppError::RowNotFound(_))));
}

#[test]
fn remove_row_unknown_id_fails() {
    let mut p = Profile::new("Base");
    p.upsert_row(row("r1", "Water", 10.0, 1.0));

    assert!(matches!(p.remove_row("r9"), Err(AppError::RowNotFound(_))));
    assert_eq!(p.remove_row("r1").unwrap().name, "Water");
    assert!(p.rows.is_empty());
}

// --- shortfall ---

#[test]
fn shortfall_counts_live_inventory() {
    let r = row("r1", "Water", 50.0, 10.0);
    assert_eq!(shortfall(&r, 10.0, T), 50.0);
    // two hours later 30 remain, 100 needed
    assert_eq!(shortfall(&r, 10.0, T + 2 * HOUR), 70.0);
}

#[test]
fn shortfall_is_never_negative() {
    let r = row("r1", "Water", 500.0, 10.0);
    assert_eq!(shortfall(&r, 10.0, T), 0.0);

    let idle = row("r2", "Fuel", 5.0, 0.0);
    assert_eq!(shortfall(&idle, 1000.0, T), 0.0);
}

#[test]
fn shortfall_hours_resolution() {
    let mut p = Profile::new("Base");

    assert!(matches!(
        ShortfallLogic::resolve_hours(None, &p),
        Err(AppError::InvalidHours(_))
    ));
    assert!(matches!(
        ShortfallLogic::resolve_hours(Some(0.0), &p),
        Err(AppError::InvalidHours(_))
    ));

    p.set_desired_hours(24.0);
    assert_eq!(ShortfallLogic::resolve_hours(None, &p).unwrap(), 24.0);
    assert_eq!(ShortfallLogic::resolve_hours(Some(6.0), &p).unwrap(), 6.0);
}

#[test]
fn shortfall_report_lists_every_row() {
    let mut p = Profile::new("Base");
    p.upsert_row(row("r1", "Water", 50.0, 10.0));
    p.upsert_row(row("r2", "Fuel", 5.0, 0.0));

    let lines = ShortfallLogic::report(&p, 10.0, T + HOUR);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "Water");
    assert_eq!(lines[0].current, 40.0);
    assert_eq!(lines[0].missing, 60.0);
    assert_eq!(lines[1].missing, 0.0);
}
