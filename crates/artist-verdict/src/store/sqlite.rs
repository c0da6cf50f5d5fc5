use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection};

use super::{EvaluationRecord, EvaluationStore, NewEvaluation, StoreError};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS evaluations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at TEXT NOT NULL,
        payload TEXT NOT NULL,
        result TEXT NOT NULL
    );
";

/// SQLite-backed history. A single connection is shared behind a mutex.
pub struct SqliteEvaluationStore {
    conn: Mutex<Connection>,
}

impl SqliteEvaluationStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection mutex poisoned".to_string()))
    }
}

impl EvaluationStore for SqliteEvaluationStore {
    fn insert(&self, evaluation: NewEvaluation) -> Result<EvaluationRecord, StoreError> {
        let created_at = evaluation.timestamp();
        let payload = serde_json::to_string(&evaluation.payload)?;
        let result = serde_json::to_string(&evaluation.result)?;

        let conn = self.connection()?;
        conn.execute(
            "INSERT INTO evaluations (created_at, payload, result) VALUES (?1, ?2, ?3)",
            params![created_at, payload, result],
        )?;

        Ok(EvaluationRecord {
            id: conn.last_insert_rowid(),
            created_at,
            payload: evaluation.payload,
            result: evaluation.result,
        })
    }

    fn recent(&self, limit: usize) -> Result<Vec<EvaluationRecord>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let conn = self.connection()?;
        let mut statement = conn.prepare(
            "SELECT id, created_at, payload, result FROM evaluations ORDER BY id DESC LIMIT ?1",
        )?;

        let rows = statement
            .query_map([limit], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, created_at, payload, result)| -> Result<_, StoreError> {
                Ok(EvaluationRecord {
                    id,
                    created_at,
                    payload: serde_json::from_str(&payload)?,
                    result: serde_json::from_str(&result)?,
                })
            })
            .collect()
    }
}
