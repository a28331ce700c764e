//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `tracks.parquet`
//! - `vertices.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanBuilder, Float64Builder, Int32Builder, Int64Builder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, TrackRow, VertexRow};

fn track_schema() -> Arc<Schema> {
    let mut fields = vec![
        Field::new("event",        DataType::UInt64,  false),
        Field::new("track_id",     DataType::UInt32,  false),
        Field::new("pid",          DataType::Int32,   false),
        Field::new("gen_particle", DataType::Int64,   false),
        Field::new("vertex",       DataType::Int64,   false),
        Field::new("end_vertex",   DataType::Int64,   false),
        Field::new("mother",       DataType::Int64,   false),
        Field::new("n_daughters",  DataType::UInt32,  false),
        Field::new("px",           DataType::Float64, false),
        Field::new("py",           DataType::Float64, false),
        Field::new("pz",           DataType::Float64, false),
        Field::new("e",            DataType::Float64, false),
        Field::new("ended",        DataType::Boolean, false),
    ];
    fields.extend(TrackRow::CALO_COLUMNS.iter().map(|name| Field::new(*name, DataType::Int32, false)));
    Arc::new(Schema::new(fields))
}

fn vertex_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("event",       DataType::UInt64,  false),
        Field::new("vertex_id",   DataType::UInt32,  false),
        Field::new("parent",      DataType::Int64,   false),
        Field::new("n_daughters", DataType::UInt32,  false),
        Field::new("x",           DataType::Float64, false),
        Field::new("y",           DataType::Float64, false),
        Field::new("z",           DataType::Float64, false),
        Field::new("t",           DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn f64_column(rows: usize, values: impl Iterator<Item = f64>) -> ArrayRef {
    let mut b = Float64Builder::with_capacity(rows);
    for v in values {
        b.append_value(v);
    }
    Arc::new(b.finish())
}

fn i64_column(rows: usize, values: impl Iterator<Item = i64>) -> ArrayRef {
    let mut b = Int64Builder::with_capacity(rows);
    for v in values {
        b.append_value(v);
    }
    Arc::new(b.finish())
}

/// Writes event output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    tracks:        Option<ArrowWriter<File>>,
    vertices:      Option<ArrowWriter<File>>,
    track_schema:  Arc<Schema>,
    vertex_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let track_schema = track_schema();
        let vertex_schema = vertex_schema();

        let track_file = File::create(dir.join("tracks.parquet"))?;
        let tracks = ArrowWriter::try_new(track_file, Arc::clone(&track_schema), Some(snappy_props()))?;

        let vertex_file = File::create(dir.join("vertices.parquet"))?;
        let vertices = ArrowWriter::try_new(vertex_file, Arc::clone(&vertex_schema), Some(snappy_props()))?;

        Ok(Self {
            tracks: Some(tracks),
            vertices: Some(vertices),
            track_schema,
            vertex_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.tracks.as_mut() else {
            return Ok(());
        };

        let n = rows.len();
        let mut events      = UInt64Builder::with_capacity(n);
        let mut track_ids   = UInt32Builder::with_capacity(n);
        let mut pids        = Int32Builder::with_capacity(n);
        let mut n_daughters = UInt32Builder::with_capacity(n);
        let mut ended       = BooleanBuilder::with_capacity(n);
        let mut calo: [Int32Builder; 5] = std::array::from_fn(|_| Int32Builder::with_capacity(n));

        for row in rows {
            events.append_value(row.event);
            track_ids.append_value(row.track_id);
            pids.append_value(row.pid);
            n_daughters.append_value(row.n_daughters);
            ended.append_value(row.ended);
            for (builder, status) in calo.iter_mut().zip(row.calo_status) {
                builder.append_value(status);
            }
        }

        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(events.finish()),
            Arc::new(track_ids.finish()),
            Arc::new(pids.finish()),
            i64_column(n, rows.iter().map(|r| r.gen_particle)),
            i64_column(n, rows.iter().map(|r| r.vertex)),
            i64_column(n, rows.iter().map(|r| r.end_vertex)),
            i64_column(n, rows.iter().map(|r| r.mother)),
            Arc::new(n_daughters.finish()),
            f64_column(n, rows.iter().map(|r| r.px)),
            f64_column(n, rows.iter().map(|r| r.py)),
            f64_column(n, rows.iter().map(|r| r.pz)),
            f64_column(n, rows.iter().map(|r| r.e)),
            Arc::new(ended.finish()),
        ];
        columns.extend(calo.iter_mut().map(|b| Arc::new(b.finish()) as ArrayRef));

        let batch = RecordBatch::try_new(Arc::clone(&self.track_schema), columns)?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_vertices(&mut self, rows: &[VertexRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.vertices.as_mut() else {
            return Ok(());
        };

        let n = rows.len();
        let mut events      = UInt64Builder::with_capacity(n);
        let mut vertex_ids  = UInt32Builder::with_capacity(n);
        let mut n_daughters = UInt32Builder::with_capacity(n);

        for row in rows {
            events.append_value(row.event);
            vertex_ids.append_value(row.vertex_id);
            n_daughters.append_value(row.n_daughters);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.vertex_schema),
            vec![
                Arc::new(events.finish()),
                Arc::new(vertex_ids.finish()),
                i64_column(n, rows.iter().map(|r| r.parent)),
                Arc::new(n_daughters.finish()),
                f64_column(n, rows.iter().map(|r| r.x)),
                f64_column(n, rows.iter().map(|r| r.y)),
                f64_column(n, rows.iter().map(|r| r.z)),
                f64_column(n, rows.iter().map(|r| r.t)),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.tracks.take() {
            w.close()?;
        }
        if let Some(w) = self.vertices.take() {
            w.close()?;
        }
        Ok(())
    }
}
