use crate::errors::AppResult;
use crate::models::{Profile, ProfileConfig, Row, Snapshot, State};
use rusqlite::{Connection, OptionalExtension, Result, params};

const SELECTED_PROFILE_KEY: &str = "selected_profile_id";

fn map_row(row: &rusqlite::Row) -> Result<Row> {
    Ok(Row {
        id: row.get("id")?,
        name: row.get("name")?,
        consumption_per_hour: row.get("consumption_per_hour")?,
        snapshot: Snapshot {
            inventory_at_update: row.get("inventory_at_update")?,
            updated_at_ms: row.get("updated_at_ms")?,
        },
    })
}

fn map_profile(row: &rusqlite::Row) -> Result<Profile> {
    Ok(Profile {
        id: row.get("id")?,
        name: row.get("name")?,
        rows: Vec::new(),
        config: ProfileConfig {
            desired_hours: row.get("desired_hours")?,
        },
    })
}

pub fn load_rows(conn: &Connection, profile_id: &str) -> AppResult<Vec<Row>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, consumption_per_hour, inventory_at_update, updated_at_ms
         FROM rows
         WHERE profile_id = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([profile_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_selected_profile_id(conn: &Connection) -> AppResult<Option<String>> {
    let id = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [SELECTED_PROFILE_KEY],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(id)
}

/// Load the whole profile set.
///
/// An empty database yields a single default profile named `default_name`
/// (not yet persisted).
pub fn load_state(conn: &Connection, default_name: &str) -> AppResult<State> {
    let mut profiles: Vec<Profile> = {
        let mut stmt = conn.prepare_cached(
            "SELECT id, name, desired_hours FROM profiles ORDER BY position ASC",
        )?;
        let rows = stmt.query_map([], map_profile)?;

        let mut v = Vec::new();
        for r in rows {
            v.push(r?);
        }
        v
    };

    if profiles.is_empty() {
        return Ok(State::with_default_profile(default_name));
    }

    for p in profiles.iter_mut() {
        p.rows = load_rows(conn, &p.id)?;
    }

    let mut state = State {
        selected_profile_id: load_selected_profile_id(conn)?.unwrap_or_default(),
        profiles,
    };
    state.normalize(default_name);
    Ok(state)
}

/// Replace the stored profile set with `state` in a single transaction.
pub fn save_state(conn: &mut Connection, state: &State) -> AppResult<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM rows", [])?;
    tx.execute("DELETE FROM profiles", [])?;

    {
        let mut ins_profile = tx.prepare_cached(
            "INSERT INTO profiles (id, name, position, desired_hours)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        let mut ins_row = tx.prepare_cached(
            "INSERT INTO rows (id, profile_id, name, position,
                               consumption_per_hour, inventory_at_update, updated_at_ms)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;

        for (p_pos, p) in state.profiles.iter().enumerate() {
            ins_profile.execute(params![p.id, p.name, p_pos as i64, p.config.desired_hours])?;

            for (r_pos, r) in p.rows.iter().enumerate() {
                ins_row.execute(params![
                    r.id,
                    p.id,
                    r.name,
                    r_pos as i64,
                    r.consumption_per_hour,
                    r.snapshot.inventory_at_update,
                    r.snapshot.updated_at_ms,
                ])?;
            }
        }
    }

    tx.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![SELECTED_PROFILE_KEY, state.selected_profile_id],
    )?;

    tx.commit()?;
    Ok(())
}
