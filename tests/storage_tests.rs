mod common;
use common::setup_test_db;

use rsupply::db::pool::DbPool;
use rsupply::db::queries::{load_state, save_state};
use rsupply::models::{Profile, Row, Snapshot, State};

#[test]
fn empty_database_yields_default_profile() {
    let db_path = setup_test_db("storage_empty");
    let pool = DbPool::new(&db_path).expect("open db");

    let state = load_state(&pool.conn, "Padrão").expect("load");
    assert_eq!(state.profiles.len(), 1);
    assert_eq!(state.selected().unwrap().name, "Padrão");
}

#[test]
fn state_is_stored_with_order_selection_and_missing_values() {
    let db_path = setup_test_db("storage_roundtrip");
    let mut pool = DbPool::new(&db_path).expect("open db");

    let mut north = Profile::new("North");
    north.set_desired_hours(72.0);
    north.upsert_row(Row::new("Water", 10.0, 240.0, 1_000));
    north.upsert_row(Row::new("Fuel", 0.5, 12.25, 2_000));
    north.upsert_row(Row {
        id: "row_legacy".into(),
        name: "Unknown".into(),
        consumption_per_hour: None,
        snapshot: Snapshot::default(),
    });
    let south = Profile::new("South");

    let state = State {
        selected_profile_id: south.id.clone(),
        profiles: vec![north, south],
    };

    pool.with_conn(|conn| save_state(conn, &state)).expect("save");
    let loaded = load_state(&pool.conn, "Default").expect("load");
    assert_eq!(loaded, state);

    // saving again replaces instead of duplicating
    let mut smaller = loaded.clone();
    smaller.profiles.remove(0);
    pool.with_conn(|conn| save_state(conn, &smaller)).expect("save");
    let reloaded = load_state(&pool.conn, "Default").expect("load");
    assert_eq!(reloaded.profiles.len(), 1);
    assert_eq!(reloaded.selected().unwrap().name, "South");
}

#[test]
fn reopening_runs_migrations_idempotently() {
    let db_path = setup_test_db("storage_reopen");
    drop(DbPool::new(&db_path).expect("first open"));
    let pool = DbPool::new(&db_path).expect("second open");

    let applied: Vec<String> = pool
        .conn
        .prepare("SELECT target FROM log WHERE operation = 'migration_applied'")
        .expect("prepare")
        .query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");
    assert_eq!(applied, vec!["20250901_0001_create_inventory_tables".to_string()]);
}

#[test]
fn fresh_schema_stores_profile_horizon() {
    let db_path = setup_test_db("storage_schema");
    let pool = DbPool::new(&db_path).expect("open db");

    let columns: Vec<String> = pool
        .conn
        .prepare("PRAGMA table_info('profiles')")
        .expect("prepare")
        .query_map([], |row| row.get(1))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("rows");
    assert!(columns.iter().any(|c| c == "desired_hours"));
}
