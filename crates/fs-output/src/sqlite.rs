//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `tracks` and `vertices`, both keyed by `(event, id)`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrackRow, VertexRow};

/// Writes event output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tracks (
                 event         INTEGER NOT NULL,
                 track_id      INTEGER NOT NULL,
                 pid           INTEGER NOT NULL,
                 gen_particle  INTEGER NOT NULL,
                 vertex        INTEGER NOT NULL,
                 end_vertex    INTEGER NOT NULL,
                 mother        INTEGER NOT NULL,
                 n_daughters   INTEGER NOT NULL,
                 px            REAL    NOT NULL,
                 py            REAL    NOT NULL,
                 pz            REAL    NOT NULL,
                 e             REAL    NOT NULL,
                 ended         INTEGER NOT NULL,
                 layer1_status INTEGER NOT NULL,
                 layer2_status INTEGER NOT NULL,
                 ecal_status   INTEGER NOT NULL,
                 hcal_status   INTEGER NOT NULL,
                 vfcal_status  INTEGER NOT NULL,
                 PRIMARY KEY (event, track_id)
             );
             CREATE TABLE IF NOT EXISTS vertices (
                 event       INTEGER NOT NULL,
                 vertex_id   INTEGER NOT NULL,
                 parent      INTEGER NOT NULL,
                 n_daughters INTEGER NOT NULL,
                 x           REAL    NOT NULL,
                 y           REAL    NOT NULL,
                 z           REAL    NOT NULL,
                 t           REAL    NOT NULL,
                 PRIMARY KEY (event, vertex_id)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO tracks \
                 (event, track_id, pid, gen_particle, vertex, end_vertex, mother, n_daughters, \
                  px, py, pz, e, ended, \
                  layer1_status, layer2_status, ecal_status, hcal_status, vfcal_status) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
            )?;
            for row in rows {
                let [l1, l2, ecal, hcal, vfcal] = row.calo_status;
                stmt.execute(rusqlite::params![
                    row.event as i64,
                    row.track_id,
                    row.pid,
                    row.gen_particle,
                    row.vertex,
                    row.end_vertex,
                    row.mother,
                    row.n_daughters,
                    row.px,
                    row.py,
                    row.pz,
                    row.e,
                    row.ended as i64,
                    l1,
                    l2,
                    ecal,
                    hcal,
                    vfcal,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_vertices(&mut self, rows: &[VertexRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO vertices (event, vertex_id, parent, n_daughters, x, y, z, t) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.event as i64,
                    row.vertex_id,
                    row.parent,
                    row.n_daughters,
                    row.x,
                    row.y,
                    row.z,
                    row.t,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
