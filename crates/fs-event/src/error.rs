//! Event-model error type.

use thiserror::Error;

use fs_core::{CoreError, GenParticleId, TrackId, VertexId};

use crate::CaloLayer;

/// Errors produced by `fs-event`.
///
/// Every failed index lookup ends up here; the event model never panics on a
/// dangling id.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("track {0} not found in event")]
    TrackNotFound(TrackId),

    #[error("vertex {0} not found in event")]
    VertexNotFound(VertexId),

    #[error("generator particle {0} not found in event")]
    GenParticleNotFound(GenParticleId),

    #[error("track {0:?} has no origin vertex")]
    NoOriginVertex(Option<TrackId>),

    #[error("daughter index {index} out of range for track {track:?} ({count} daughters)")]
    DaughterOutOfRange {
        track: Option<TrackId>,
        index: usize,
        count: usize,
    },

    #[error("calorimeter layer {layer} already recorded for track {track:?}")]
    LayerAlreadyRecorded {
        track: Option<TrackId>,
        layer: CaloLayer,
    },

    #[error("cannot record NotPropagated on calorimeter layer {layer} for track {track:?}")]
    UnrecordedStatus {
        track: Option<TrackId>,
        layer: CaloLayer,
    },

    #[error("invalid layer status code {0}")]
    InvalidStatusCode(i32),

    #[error("event table is full")]
    TableFull,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type EventResult<T> = Result<T, EventError>;
