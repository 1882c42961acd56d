mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

use crate::models::{Ship, ShipDraft, ShipType};

/// The storage collaborator. Exposes plain find/insert/update/delete
/// operations with no query semantics of its own; filtering, sorting, and
/// validation all live in the service layer.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "armada")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("armada.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    pub fn find_all(&self) -> Result<Vec<Ship>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, planet, ship_type, prod_date, is_used, speed, crew_size, rating
             FROM ships ORDER BY id",
        )?;

        let ships = stmt
            .query_map([], ship_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ships)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, planet, ship_type, prod_date, is_used, speed, crew_size, rating
             FROM ships WHERE id = ?",
        )?;

        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(ship_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Insert a validated draft; SQLite assigns the id.
    pub fn insert_ship(&self, draft: &ShipDraft) -> Result<Ship> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute(
            "INSERT INTO ships (name, planet, ship_type, prod_date, is_used, speed, crew_size, rating)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            (
                &draft.name,
                &draft.planet,
                draft.ship_type.as_str(),
                draft.prod_date.to_rfc3339(),
                if draft.is_used { 1 } else { 0 },
                draft.speed,
                draft.crew_size,
                draft.rating,
            ),
        )?;

        Ok(Ship {
            id: conn.last_insert_rowid(),
            name: draft.name.clone(),
            planet: draft.planet.clone(),
            ship_type: draft.ship_type,
            prod_date: draft.prod_date,
            is_used: draft.is_used,
            speed: draft.speed,
            crew_size: draft.crew_size,
            rating: draft.rating,
        })
    }

    /// Persist the full state of an already-merged ship.
    pub fn update_ship(&self, ship: &Ship) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute(
            "UPDATE ships SET name = ?, planet = ?, ship_type = ?, prod_date = ?,
             is_used = ?, speed = ?, crew_size = ?, rating = ? WHERE id = ?",
            (
                &ship.name,
                &ship.planet,
                ship.ship_type.as_str(),
                ship.prod_date.to_rfc3339(),
                if ship.is_used { 1 } else { 0 },
                ship.speed,
                ship.crew_size,
                ship.rating,
                ship.id,
            ),
        )?;
        Ok(rows > 0)
    }

    pub fn delete_by_id(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let rows = conn.execute("DELETE FROM ships WHERE id = ?", [id])?;
        Ok(rows > 0)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn ship_from_row(row: &rusqlite::Row) -> rusqlite::Result<Ship> {
    Ok(Ship {
        id: row.get(0)?,
        name: row.get(1)?,
        planet: row.get(2)?,
        ship_type: ShipType::from_str(&row.get::<_, String>(3)?).unwrap_or(ShipType::Transport),
        prod_date: parse_datetime(row.get::<_, String>(4)?),
        is_used: row.get::<_, i32>(5)? != 0,
        speed: row.get(6)?,
        crew_size: row.get(7)?,
        rating: row.get(8)?,
    })
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
