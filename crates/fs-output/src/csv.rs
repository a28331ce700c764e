//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tracks.csv`
//! - `vertices.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrackRow, VertexRow};

pub(crate) const TRACK_HEADER: [&str; 18] = [
    "event",
    "track_id",
    "pid",
    "gen_particle",
    "vertex",
    "end_vertex",
    "mother",
    "n_daughters",
    "px",
    "py",
    "pz",
    "e",
    "ended",
    TrackRow::CALO_COLUMNS[0],
    TrackRow::CALO_COLUMNS[1],
    TrackRow::CALO_COLUMNS[2],
    TrackRow::CALO_COLUMNS[3],
    TrackRow::CALO_COLUMNS[4],
];

pub(crate) const VERTEX_HEADER: [&str; 8] =
    ["event", "vertex_id", "parent", "n_daughters", "x", "y", "z", "t"];

/// Writes event output to two CSV files.
pub struct CsvWriter {
    tracks:   Writer<File>,
    vertices: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut tracks = Writer::from_path(dir.join("tracks.csv"))?;
        tracks.write_record(TRACK_HEADER)?;

        let mut vertices = Writer::from_path(dir.join("vertices.csv"))?;
        vertices.write_record(VERTEX_HEADER)?;

        Ok(Self {
            tracks,
            vertices,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()> {
        for row in rows {
            let mut record = vec![
                row.event.to_string(),
                row.track_id.to_string(),
                row.pid.to_string(),
                row.gen_particle.to_string(),
                row.vertex.to_string(),
                row.end_vertex.to_string(),
                row.mother.to_string(),
                row.n_daughters.to_string(),
                row.px.to_string(),
                row.py.to_string(),
                row.pz.to_string(),
                row.e.to_string(),
                (row.ended as u8).to_string(),
            ];
            record.extend(row.calo_status.iter().map(i32::to_string));
            self.tracks.write_record(&record)?;
        }
        Ok(())
    }

    fn write_vertices(&mut self, rows: &[VertexRow]) -> OutputResult<()> {
        for row in rows {
            self.vertices.write_record(&[
                row.event.to_string(),
                row.vertex_id.to_string(),
                row.parent.to_string(),
                row.n_daughters.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.t.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.tracks.flush()?;
        self.vertices.flush()?;
        Ok(())
    }
}
