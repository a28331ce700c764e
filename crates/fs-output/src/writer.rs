//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TrackRow, VertexRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
pub trait OutputWriter {
    /// Write the track rows of one event.
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()>;

    /// Write the vertex rows of one event.
    fn write_vertices(&mut self, rows: &[VertexRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
