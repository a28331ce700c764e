//! `fs-output`: tabular writers for simulated events.
//!
//! Each event is flattened into one [`TrackRow`] per track and one
//! [`VertexRow`] per vertex.  Three backends are provided behind Cargo
//! features:
//!
//! | Feature   | Backend     | Files created                            |
//! |-----------|-------------|------------------------------------------|
//! | *(none)*  | CSV         | `tracks.csv`, `vertices.csv`             |
//! | `sqlite`  | SQLite      | `output.db`                              |
//! | `parquet` | Parquet     | `tracks.parquet`, `vertices.parquet`     |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`EventRecorder`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fs_output::{CsvWriter, EventRecorder};
//!
//! let mut recorder = EventRecorder::new(CsvWriter::new(Path::new("./output"))?);
//! for event in &events {
//!     recorder.record(event)?;
//! }
//! recorder.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use recorder::EventRecorder;
pub use row::{TrackRow, VertexRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
