//! Plain data row types written by output backends.

use fs_core::{SignedIndex, TrackId};
use fs_event::{CaloLayer, EventResult, FSimVertex, TrackView};

/// One track of one event.
///
/// Links to other records are stored as signed indices, `-1` when absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRow {
    pub event:        u64,
    pub track_id:     u32,
    pub pid:          i32,
    pub gen_particle: i64,
    pub vertex:       i64,
    pub end_vertex:   i64,
    pub mother:       i64,
    pub n_daughters:  u32,
    pub px:           f64,
    pub py:           f64,
    pub pz:           f64,
    pub e:            f64,
    /// `false` while the track has no (effective) end vertex.
    pub ended:        bool,
    /// Calorimeter status codes, indexed like [`CaloLayer::ALL`].
    pub calo_status:  [i32; 5],
}

impl TrackRow {
    pub const CALO_COLUMNS: [&'static str; 5] = [
        "layer1_status",
        "layer2_status",
        "ecal_status",
        "hcal_status",
        "vfcal_status",
    ];

    /// Flatten `track` for event `event`.
    ///
    /// # Errors
    ///
    /// Propagates navigation errors from dangling ids in the track record.
    pub fn from_view(event: u64, track: TrackView<'_>) -> EventResult<Self> {
        let record = track.record();
        let momentum = record.momentum();
        let mother = track.mother()?.and_then(|m| m.id());
        let calo_status = CaloLayer::ALL.map(|layer| record.calo(layer).status.code());

        Ok(Self {
            event,
            track_id:     record.id().unwrap_or(TrackId::INVALID).0,
            pid:          record.pid(),
            gen_particle: record.gen_particle_id().signed_index(),
            vertex:       record.vertex_id().signed_index(),
            end_vertex:   record.end_vertex_id().signed_index(),
            mother:       mother.signed_index(),
            n_daughters:  u32::try_from(track.n_daughters()?).unwrap_or(u32::MAX),
            px:           momentum.x,
            py:           momentum.y,
            pz:           momentum.z,
            e:            momentum.t,
            ended:        !track.no_end_vertex()?,
            calo_status,
        })
    }
}

/// One vertex of one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRow {
    pub event:       u64,
    pub vertex_id:   u32,
    /// Parent track id; `-1` for a primary vertex.
    pub parent:      i64,
    pub n_daughters: u32,
    pub x:           f64,
    pub y:           f64,
    pub z:           f64,
    pub t:           f64,
}

impl VertexRow {
    pub fn from_vertex(event: u64, vertex: &FSimVertex) -> Self {
        let pos = vertex.position();
        Self {
            event,
            vertex_id:   vertex.id().0,
            parent:      vertex.parent_id().signed_index(),
            n_daughters: u32::try_from(vertex.n_daughters()).unwrap_or(u32::MAX),
            x:           pos.x,
            y:           pos.y,
            z:           pos.z,
            t:           pos.t,
        }
    }
}
