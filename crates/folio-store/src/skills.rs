// SPDX-License-Identifier: Apache-2.0

use crate::StoreError;
use folio_model::{LogoType, Skill, SkillCategory, SkillDraft, SkillName};
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS skills (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT    NOT NULL,
    name_normalized TEXT    NOT NULL UNIQUE,
    category        TEXT    NOT NULL,
    logo            TEXT    NOT NULL,
    logo_type       TEXT    NOT NULL,
    created_at      INTEGER NOT NULL,
    updated_at      INTEGER NOT NULL
);
";

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

struct RawSkillRow {
    id: i64,
    name: String,
    category: String,
    logo: String,
    logo_type: String,
    created_at: i64,
    updated_at: i64,
}

fn read_raw(row: &Row<'_>) -> Result<RawSkillRow, rusqlite::Error> {
    Ok(RawSkillRow {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
        logo: row.get("logo")?,
        logo_type: row.get("logo_type")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

impl RawSkillRow {
    /// SQL-level failures stay `Sqlite`; a row that no longer passes
    /// domain validation is reported as `Corrupt`.
    fn into_skill(self) -> Result<Skill, StoreError> {
        let name = SkillName::parse(&self.name)
            .map_err(|e| StoreError::Corrupt(format!("id={}: {e}", self.id)))?;
        let category = SkillCategory::parse(&self.category)
            .map_err(|e| StoreError::Corrupt(format!("id={}: {e}", self.id)))?;
        let logo_type = LogoType::parse(&self.logo_type)
            .map_err(|e| StoreError::Corrupt(format!("id={}: {e}", self.id)))?;
        Ok(Skill::new(
            self.id,
            name,
            category,
            self.logo,
            logo_type,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Owns the SQLite connection for the skills table. Handlers share one
/// store behind an async mutex; every write runs inside a transaction.
#[derive(Debug)]
pub struct SkillStore {
    conn: Connection,
}

impl SkillStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA busy_timeout=5000; PRAGMA foreign_keys=ON;",
        )?;
        let found: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if found == 0 {
            conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
        } else if found != SCHEMA_VERSION {
            return Err(StoreError::Corrupt(format!(
                "unsupported schema version {found}, expected {SCHEMA_VERSION}"
            )));
        }
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// The `user_version` stamped into the database file.
    pub fn schema_version(&self) -> Result<i64, StoreError> {
        Ok(self.conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
    }

    /// All rows, newest creation first. Ties on the millisecond clock
    /// fall back to insertion order.
    pub fn list(&self) -> Result<Vec<Skill>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, logo, logo_type, created_at, updated_at
             FROM skills ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], read_raw)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?.into_skill()?);
        }
        Ok(out)
    }

    pub fn get(&self, id: i64) -> Result<Option<Skill>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, logo, logo_type, created_at, updated_at
             FROM skills WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], read_raw)?;
        match rows.next() {
            Some(row) => Ok(Some(row?.into_skill()?)),
            None => Ok(None),
        }
    }

    /// Lookup by case-folded name, optionally excluding one row (the
    /// row being updated). Used to phrase conflict responses; the
    /// unique index remains the enforcement point.
    pub fn find_by_normalized_name(
        &self,
        normalized: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<Skill>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, logo, logo_type, created_at, updated_at
             FROM skills WHERE name_normalized = ?1 AND id != ?2",
        )?;
        let mut rows = stmt.query_map(params![normalized, exclude_id.unwrap_or(-1)], read_raw)?;
        match rows.next() {
            Some(row) => Ok(Some(row?.into_skill()?)),
            None => Ok(None),
        }
    }

    pub fn create(&mut self, draft: &SkillDraft) -> Result<Skill, StoreError> {
        let now = now_millis();
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO skills (name, name_normalized, category, logo, logo_type, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.name.as_str(),
                draft.name.normalized(),
                draft.category.as_str(),
                draft.logo,
                draft.logo_type.as_str(),
                now,
                now,
            ],
        )
        .map_err(|e| StoreError::from_write(e, draft.name.as_str()))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        self.get(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Full replace of name/category/logo/logo_type. The unique index
    /// does not fire when a row keeps its own name.
    pub fn update(&mut self, id: i64, draft: &SkillDraft) -> Result<Skill, StoreError> {
        let now = now_millis();
        let tx = self.conn.transaction()?;
        let changed = tx
            .execute(
                "UPDATE skills
                 SET name = ?1, name_normalized = ?2, category = ?3, logo = ?4, logo_type = ?5, updated_at = ?6
                 WHERE id = ?7",
                params![
                    draft.name.as_str(),
                    draft.name.normalized(),
                    draft.category.as_str(),
                    draft.logo,
                    draft.logo_type.as_str(),
                    now,
                    id,
                ],
            )
            .map_err(|e| StoreError::from_write(e, draft.name.as_str()))?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        tx.commit()?;
        self.get(id)?.ok_or(StoreError::NotFound(id))
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM skills WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
