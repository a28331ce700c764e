//! Integration tests for fs-output.

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;

    use fs_core::{LorentzVector, ParticleTable, RawParticle};
    use fs_event::{FBaseSimEvent, LayerStatus};

    use crate::row::{TrackRow, VertexRow};

    /// Event 4: a pi+ (track 0) decaying at vertex 1 into mu+ (track 1) and
    /// nu_mu (track 2); the muon reaches the ECAL endcap.
    pub fn pion_decay() -> FBaseSimEvent {
        let mut ev = FBaseSimEvent::new(Arc::new(ParticleTable::standard()));
        ev.set_event_number(4);
        let pv = ev.add_sim_vertex(LorentzVector::ZERO, None).unwrap();
        let pi = ev
            .add_sim_track(&RawParticle::new(211, LorentzVector::new(3.0, 0.0, 4.0, 5.1), LorentzVector::ZERO), pv, None)
            .unwrap();
        let decay = ev.add_sim_vertex(LorentzVector::new(60.0, 0.0, 80.0, 3.4), Some(pi)).unwrap();
        let mu = ev
            .add_sim_track(&RawParticle::new(-13, LorentzVector::new(2.0, 0.0, 3.0, 3.6), LorentzVector::ZERO), decay, None)
            .unwrap();
        ev.add_sim_track(&RawParticle::new(14, LorentzVector::new(1.0, 0.0, 1.0, 1.4), LorentzVector::ZERO), decay, None)
            .unwrap();

        let entrance = RawParticle::new(-13, LorentzVector::new(2.0, 0.0, 3.0, 3.6), LorentzVector::new(129.0, 0.0, 320.0, 0.0));
        ev.track_mut(mu).unwrap().set_ecal(&entrance, LayerStatus::Endcap).unwrap();
        ev
    }

    pub fn track_row(event: u64, track_id: u32) -> TrackRow {
        TrackRow {
            event,
            track_id,
            pid:          22,
            gen_particle: -1,
            vertex:       0,
            end_vertex:   -1,
            mother:       -1,
            n_daughters:  0,
            px:           1.5,
            py:           0.0,
            pz:           2.0,
            e:            2.5,
            ended:        false,
            calo_status:  [0, 0, 1, 0, 0],
        }
    }

    pub fn vertex_row(event: u64, vertex_id: u32) -> VertexRow {
        VertexRow { event, vertex_id, parent: -1, n_daughters: 2, x: 0.1, y: -0.2, z: 3.0, t: 0.0 }
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use fs_core::{TrackId, VertexId};
    use fs_event::FSimTrack;

    use super::fixtures::pion_decay;
    use crate::row::{TrackRow, VertexRow};

    #[test]
    fn decayed_track_row() {
        let ev = pion_decay();
        let row = TrackRow::from_view(4, ev.track(TrackId(0)).unwrap()).unwrap();
        assert_eq!(row.track_id, 0);
        assert_eq!(row.pid, 211);
        assert_eq!((row.vertex, row.end_vertex, row.mother), (0, 1, -1));
        assert_eq!(row.n_daughters, 2);
        assert!(row.ended);
        assert_eq!(row.e, 5.1);
        assert_eq!(row.calo_status, [0; 5]);
    }

    #[test]
    fn open_track_row_carries_calo_status() {
        let ev = pion_decay();
        let row = TrackRow::from_view(4, ev.track(TrackId(1)).unwrap()).unwrap();
        assert_eq!(row.mother, 0);
        assert_eq!(row.end_vertex, -1);
        assert!(!row.ended);
        assert_eq!(row.calo_status, [0, 0, 2, 0, 0]);
    }

    #[test]
    fn dangling_link_fails() {
        let mut ev = pion_decay();
        *ev.track_mut(TrackId(2)).unwrap() = FSimTrack::default();
        ev.track_mut(TrackId(2)).unwrap().set_end_vertex(VertexId(40));
        assert!(TrackRow::from_view(4, ev.track(TrackId(2)).unwrap()).is_err());
    }

    #[test]
    fn vertex_rows() {
        let ev = pion_decay();
        let primary = VertexRow::from_vertex(4, &ev.vertices()[0]);
        assert_eq!((primary.vertex_id, primary.parent, primary.n_daughters), (0, -1, 1));

        let decay = VertexRow::from_vertex(4, &ev.vertices()[1]);
        assert_eq!((decay.vertex_id, decay.parent, decay.n_daughters), (1, 0, 2));
        assert_eq!((decay.x, decay.z, decay.t), (60.0, 80.0, 3.4));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::fixtures::{pion_decay, track_row, vertex_row};
    use crate::csv::{CsvWriter, TRACK_HEADER, VERTEX_HEADER};
    use crate::recorder::EventRecorder;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tracks.csv").exists());
        assert!(dir.path().join("vertices.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tracks.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, TRACK_HEADER);
        assert_eq!(headers[15], "ecal_status");

        let mut rdr = csv::Reader::from_path(dir.path().join("vertices.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, VERTEX_HEADER);
    }

    #[test]
    fn csv_track_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tracks(&[track_row(2, 0), track_row(2, 1), track_row(3, 0)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "tracks.csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "2");    // event
        assert_eq!(&rows[1][1], "1");    // track_id
        assert_eq!(&rows[1][3], "-1");   // gen_particle
        assert_eq!(&rows[1][8], "1.5");  // px
        assert_eq!(&rows[1][12], "0");   // ended
        assert_eq!(&rows[1][15], "1");   // ecal_status
        assert_eq!(&rows[2][0], "3");
    }

    #[test]
    fn csv_vertex_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_vertices(&[vertex_row(0, 0)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir, "vertices.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "-1");   // parent
        assert_eq!(&rows[0][5], "-0.2"); // y
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tracks(&[]).unwrap();
        w.write_vertices(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let mut recorder = EventRecorder::new(CsvWriter::new(dir.path()).unwrap());

        let mut ev = pion_decay();
        recorder.record(&ev).unwrap();
        ev.set_event_number(5);
        recorder.record(&ev).unwrap();
        recorder.finish().unwrap();
        assert_eq!(recorder.events_recorded(), 2);
        assert_eq!(recorder.tracks_written(), 6);

        let tracks = records(&dir, "tracks.csv");
        assert_eq!(tracks.len(), 6, "expected 2 events × 3 tracks");
        assert_eq!(&tracks[0][0], "4");
        assert_eq!(&tracks[3][0], "5");
        // pi+ ended at vertex 1 with two daughters
        assert_eq!(&tracks[0][5], "1");
        assert_eq!(&tracks[0][7], "2");

        let vertices = records(&dir, "vertices.csv");
        assert_eq!(vertices.len(), 4);
    }

    #[test]
    fn broken_event_writes_nothing() {
        use fs_core::{TrackId, VertexId};

        let dir = tmp();
        let mut recorder = EventRecorder::new(CsvWriter::new(dir.path()).unwrap());
        let mut ev = pion_decay();
        ev.track_mut(TrackId(1)).unwrap().set_end_vertex(VertexId(99));

        assert!(matches!(recorder.record(&ev), Err(crate::OutputError::Event(_))));
        recorder.finish().unwrap();
        assert_eq!(recorder.events_recorded(), 0);
        assert!(records(&dir, "tracks.csv").is_empty());
        assert!(records(&dir, "vertices.csv").is_empty());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::fixtures::{pion_decay, track_row, vertex_row};
    use crate::recorder::EventRecorder;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_track_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tracks(&[track_row(0, 0), track_row(0, 1), track_row(1, 0)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tracks", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_duplicate_key_rejected() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tracks(&[track_row(0, 0)]).unwrap();
        assert!(w.write_tracks(&[track_row(0, 0)]).is_err());
    }

    #[test]
    fn sqlite_vertex_columns() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_vertices(&[vertex_row(7, 3)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (parent, n, z): (i64, i64, f64) = conn
            .query_row(
                "SELECT parent, n_daughters, z FROM vertices WHERE event = 7 AND vertex_id = 3",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!((parent, n, z), (-1, 2, 3.0));
    }

    #[test]
    fn sqlite_recorded_event() {
        let dir = tmp();
        let mut recorder = EventRecorder::new(SqliteWriter::new(dir.path()).unwrap());
        recorder.record(&pion_decay()).unwrap();
        recorder.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (ended, ecal): (i64, i64) = conn
            .query_row(
                "SELECT ended, ecal_status FROM tracks WHERE event = 4 AND track_id = 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!((ended, ecal), (0, 2));
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::fixtures::{track_row, vertex_row};
    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("tracks.parquet").exists());
        assert!(dir.path().join("vertices.parquet").exists());
    }

    #[test]
    fn parquet_track_rows() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_tracks(&[track_row(0, 0), track_row(0, 1)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("tracks.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 2);

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, crate::csv::TRACK_HEADER);
        assert_eq!(*schema.field_with_name("ended").unwrap().data_type(), DataType::Boolean);
        assert_eq!(*schema.field_with_name("vfcal_status").unwrap().data_type(), DataType::Int32);
    }

    #[test]
    fn parquet_vertex_rows() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_vertices(&[vertex_row(0, 0), vertex_row(0, 1), vertex_row(1, 0)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("vertices.parquet")).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file).unwrap().build().unwrap();
        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 3);
    }

    #[test]
    fn parquet_finish_required() {
        // Dropping the writer without finish() leaves the footer unwritten.
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_tracks(&[track_row(0, 0)]).unwrap();
        }

        let file = std::fs::File::open(dir.path().join("tracks.parquet")).unwrap();
        assert!(ParquetRecordBatchReaderBuilder::try_new(file).is_err());
    }
}
