//! Borrowed navigation views over event records.
//!
//! A [`TrackView`] pairs a track record with the event that owns it, which is
//! all that is needed to follow its ids to vertices, mother and daughters.
//! Views are `Copy` and cheap; hold them no longer than the borrow of the
//! event.
//!
//! Every operation that follows an id returns [`EventResult`]: a record
//! whose ids were edited by hand can point outside the event, and that is
//! reported instead of panicking.

use fs_core::pdt::pid;
use fs_core::{LorentzVector, ParticleData, TrackId, VertexId};

use crate::event::FBaseSimEvent;
use crate::generator::GenParticle;
use crate::track::FSimTrack;
use crate::vertex::FSimVertex;
use crate::{EventError, EventResult};

// ── TrackView ─────────────────────────────────────────────────────────────────

/// A track record together with its owning event.
#[derive(Copy, Clone, Debug)]
pub struct TrackView<'e> {
    event: &'e FBaseSimEvent,
    record: &'e FSimTrack,
}

impl<'e> TrackView<'e> {
    pub(crate) fn new(event: &'e FBaseSimEvent, record: &'e FSimTrack) -> Self {
        Self { event, record }
    }

    #[inline]
    pub fn record(&self) -> &'e FSimTrack {
        self.record
    }

    #[inline]
    pub fn event(&self) -> &'e FBaseSimEvent {
        self.event
    }

    #[inline]
    pub fn id(&self) -> Option<TrackId> {
        self.record.id()
    }

    #[inline]
    pub fn pid(&self) -> i32 {
        self.record.pid()
    }

    #[inline]
    pub fn momentum(&self) -> &'e LorentzVector {
        self.record.momentum()
    }

    // ── Particle properties ───────────────────────────────────────────────

    /// Static properties of this track's species, if the table knows it.
    pub fn particle_info(&self) -> Option<&'e ParticleData> {
        self.event.particle_table().get(self.record.pid())
    }

    /// Electric charge, if the species is in the particle table.
    pub fn charge(&self) -> Option<f32> {
        self.particle_info().map(|d| d.charge as f32)
    }

    /// The generator particle this track was created from.
    pub fn gen_particle(&self) -> Option<&'e GenParticle> {
        self.record.gen_particle_id().and_then(|g| self.event.gen_particle(g))
    }

    // ── Vertices ──────────────────────────────────────────────────────────

    /// Production vertex.
    ///
    /// # Errors
    ///
    /// [`EventError::NoOriginVertex`] for a record without one (the default
    /// sentinel), [`EventError::VertexNotFound`] for a dangling id.
    pub fn vertex(&self) -> EventResult<VertexView<'e>> {
        let id = self.record.vertex_id().ok_or(EventError::NoOriginVertex(self.id()))?;
        self.event.vertex(id)
    }

    /// End vertex, `None` if none has been assigned.
    pub fn end_vertex(&self) -> EventResult<Option<VertexView<'e>>> {
        self.record.end_vertex_id().map(|id| self.event.vertex(id)).transpose()
    }

    /// The track that produced this one, i.e. the parent of the origin vertex.
    pub fn mother(&self) -> EventResult<Option<TrackView<'e>>> {
        match self.record.vertex_id() {
            None => Ok(None),
            Some(v) => self.event.vertex(v)?.parent(),
        }
    }

    // ── Daughters ─────────────────────────────────────────────────────────

    /// Daughter ids.
    ///
    /// Electron-like tracks keep going after a bremsstrahlung vertex, so
    /// their daughters are the explicitly attached list.  For every other
    /// species they are the daughters of the end vertex (none without one).
    pub fn daughters(&self) -> EventResult<&'e [TrackId]> {
        if self.record.is_electron_like() {
            return Ok(self.record.explicit_daughters());
        }
        Ok(self.end_vertex()?.map_or(&[][..], |v| v.daughters()))
    }

    pub fn n_daughters(&self) -> EventResult<usize> {
        self.daughters().map(<[TrackId]>::len)
    }

    /// The `i`-th daughter, in the order of [`daughters`](Self::daughters).
    pub fn daughter(&self, i: usize) -> EventResult<TrackView<'e>> {
        let daughters = self.daughters()?;
        let id = daughters.get(i).copied().ok_or(EventError::DaughterOutOfRange {
            track: self.id(),
            index: i,
            count: daughters.len(),
        })?;
        self.event.track(id)
    }

    // ── Predicates ────────────────────────────────────────────────────────

    /// `true` if the track has not ended.
    ///
    /// That is the case when no end vertex is assigned, and also for an
    /// electron-like track whose end vertex's last daughter is a photon: the
    /// electron radiated and carries on.
    pub fn no_end_vertex(&self) -> EventResult<bool> {
        let Some(end) = self.end_vertex()? else {
            return Ok(true);
        };
        if !self.record.is_electron_like() {
            return Ok(false);
        }
        match end.daughters().last() {
            None => Ok(false),
            Some(&last) => Ok(pid::is_photon(self.event.track_record(last)?.pid())),
        }
    }

    pub fn no_mother(&self) -> EventResult<bool> {
        match self.record.vertex_id() {
            None => Ok(true),
            Some(v) => Ok(self.event.vertex_record(v)?.no_parent()),
        }
    }

    pub fn no_daughter(&self) -> EventResult<bool> {
        Ok(self.no_end_vertex()? || self.n_daughters()? == 0)
    }

    /// `true` if a propagation that has reached `pos` has not yet passed the
    /// end vertex, so the track should keep being propagated.
    ///
    /// * No end vertex (see [`no_end_vertex`](Self::no_end_vertex)): `true`.
    /// * End vertex within `immediate_decay_distance` of the origin: `false`.
    /// * End vertex at a larger radius, or larger |z|, than `pos` by more
    ///   than `boundary_tolerance`: `true`.
    /// * Otherwise `false`.
    pub fn not_yet_to_end_vertex(&self, pos: &LorentzVector) -> EventResult<bool> {
        if self.no_end_vertex()? {
            return Ok(true);
        }
        let Some(end) = self.end_vertex()? else {
            return Ok(true);
        };
        let config = self.event.config();
        let end_pos = end.position();

        if (end_pos.vect() - self.vertex()?.position().vect()).mag() < config.immediate_decay_distance {
            return Ok(false);
        }
        if end_pos.perp() > pos.perp() + config.boundary_tolerance {
            return Ok(true);
        }
        if end_pos.z.abs() > pos.z.abs() + config.boundary_tolerance {
            return Ok(true);
        }
        Ok(false)
    }
}

// ── VertexView ────────────────────────────────────────────────────────────────

/// A vertex record together with its owning event.
#[derive(Copy, Clone, Debug)]
pub struct VertexView<'e> {
    event: &'e FBaseSimEvent,
    record: &'e FSimVertex,
}

impl<'e> VertexView<'e> {
    pub(crate) fn new(event: &'e FBaseSimEvent, record: &'e FSimVertex) -> Self {
        Self { event, record }
    }

    #[inline]
    pub fn record(&self) -> &'e FSimVertex {
        self.record
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.record.id()
    }

    #[inline]
    pub fn position(&self) -> &'e LorentzVector {
        self.record.position()
    }

    /// Track ending at this vertex; `None` for a primary vertex.
    pub fn parent(&self) -> EventResult<Option<TrackView<'e>>> {
        self.record.parent_id().map(|id| self.event.track(id)).transpose()
    }

    #[inline]
    pub fn no_parent(&self) -> bool {
        self.record.no_parent()
    }

    #[inline]
    pub fn daughters(&self) -> &'e [TrackId] {
        self.record.daughters()
    }

    #[inline]
    pub fn n_daughters(&self) -> usize {
        self.record.n_daughters()
    }

    #[inline]
    pub fn no_daughter(&self) -> bool {
        self.record.no_daughter()
    }

    pub fn daughter(&self, i: usize) -> EventResult<TrackView<'e>> {
        let daughters = self.record.daughters();
        let id = daughters.get(i).copied().ok_or(EventError::DaughterOutOfRange {
            track: self.record.parent_id(),
            index: i,
            count: daughters.len(),
        })?;
        self.event.track(id)
    }
}
