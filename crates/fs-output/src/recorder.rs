//! `EventRecorder<W>`: flattens events into rows for an `OutputWriter`.

use fs_event::{EventResult, FBaseSimEvent};

use crate::row::{TrackRow, VertexRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes every track and vertex of each recorded event to any
/// [`OutputWriter`] backend (CSV, SQLite, Parquet).
///
/// Rows are keyed by the event's own [`event_number`](FBaseSimEvent::event_number).
/// An event that fails to flatten is rejected before any of its rows reach
/// the writer.
pub struct EventRecorder<W: OutputWriter> {
    writer:          W,
    events_recorded: u64,
    tracks_written:  u64,
}

impl<W: OutputWriter> EventRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            events_recorded: 0,
            tracks_written:  0,
        }
    }

    /// Flatten `event` and hand its rows to the writer.
    pub fn record(&mut self, event: &FBaseSimEvent) -> OutputResult<()> {
        let n = event.event_number();
        let tracks = event
            .track_views()
            .map(|track| TrackRow::from_view(n, track))
            .collect::<EventResult<Vec<_>>>()?;
        let vertices: Vec<VertexRow> = event
            .vertices()
            .iter()
            .map(|v| VertexRow::from_vertex(n, v))
            .collect();

        self.writer.write_tracks(&tracks)?;
        self.writer.write_vertices(&vertices)?;

        self.events_recorded += 1;
        self.tracks_written += tracks.len() as u64;
        tracing::debug!(event = n, tracks = tracks.len(), vertices = vertices.len(), "recorded event");
        Ok(())
    }

    #[inline]
    pub fn events_recorded(&self) -> u64 {
        self.events_recorded
    }

    #[inline]
    pub fn tracks_written(&self) -> u64 {
        self.tracks_written
    }

    /// Flush the writer.  Safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()?;
        tracing::info!(events = self.events_recorded, tracks = self.tracks_written, "output finished");
        Ok(())
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }
}
