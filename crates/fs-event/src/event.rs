//! `FBaseSimEvent`: the owner of every track, vertex and generator particle
//! of one simulated event.
//!
//! # Linking rules
//!
//! The event is the only place where records are linked, so the invariants
//! hold by construction:
//!
//! * [`add_sim_vertex`](FBaseSimEvent::add_sim_vertex) with a parent track
//!   sets that track's end vertex.
//! * [`add_sim_track`](FBaseSimEvent::add_sim_track) appends the new track
//!   to its origin vertex's daughters and, if that vertex has a parent, to the
//!   parent's explicit daughter list.
//!
//! Ids are positions in the tables and are never reused within an event;
//! [`clear`](FBaseSimEvent::clear) empties all tables for the next event.

use std::sync::Arc;

use fs_core::{GenParticleId, LorentzVector, NavigationConfig, ParticleTable, RawParticle, TrackId, VertexId};

use crate::container::FSimTrackContainer;
use crate::generator::GenParticle;
use crate::track::FSimTrack;
use crate::vertex::FSimVertex;
use crate::view::{TrackView, VertexView};
use crate::{EventError, EventResult};

/// Track, vertex and generator tables of one event, plus the shared particle
/// table used to name and charge its tracks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FBaseSimEvent {
    event_number: u64,
    config: NavigationConfig,
    #[cfg_attr(feature = "serde", serde(skip))]
    particle_table: Arc<ParticleTable>,
    tracks: Vec<FSimTrack>,
    vertices: Vec<FSimVertex>,
    gen_particles: Vec<GenParticle>,
}

impl FBaseSimEvent {
    /// An empty event using the default [`NavigationConfig`].
    pub fn new(particle_table: Arc<ParticleTable>) -> Self {
        Self {
            event_number: 0,
            config: NavigationConfig::default(),
            particle_table,
            tracks: Vec::new(),
            vertices: Vec::new(),
            gen_particles: Vec::new(),
        }
    }

    /// An empty event with an explicit navigation config.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`NavigationConfig::validate`].
    pub fn with_config(particle_table: Arc<ParticleTable>, config: NavigationConfig) -> EventResult<Self> {
        config.validate()?;
        let mut event = Self::new(particle_table);
        event.config = config;
        Ok(event)
    }

    // ── Event-level data ──────────────────────────────────────────────────

    #[inline]
    pub fn event_number(&self) -> u64 {
        self.event_number
    }

    pub fn set_event_number(&mut self, n: u64) {
        self.event_number = n;
    }

    #[inline]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    #[inline]
    pub fn particle_table(&self) -> &ParticleTable {
        &self.particle_table
    }

    /// Replace the particle table, e.g. after deserializing an event (the
    /// table is not persisted with it).
    pub fn set_particle_table(&mut self, table: Arc<ParticleTable>) {
        self.particle_table = table;
    }

    /// Drop every record, keeping the particle table and config.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.vertices.clear();
        self.gen_particles.clear();
    }

    // ── Registration ──────────────────────────────────────────────────────

    pub fn add_gen_particle(&mut self, particle: GenParticle) -> EventResult<GenParticleId> {
        let id = GenParticleId::try_from(self.gen_particles.len()).map_err(|_| EventError::TableFull)?;
        self.gen_particles.push(particle);
        Ok(id)
    }

    /// Register a vertex at `position`.  If `parent` is given, the vertex
    /// becomes that track's end vertex.
    pub fn add_sim_vertex(&mut self, position: LorentzVector, parent: Option<TrackId>) -> EventResult<VertexId> {
        if let Some(p) = parent {
            self.track_record(p)?;
        }
        let id = VertexId::try_from(self.vertices.len()).map_err(|_| EventError::TableFull)?;
        self.vertices.push(FSimVertex::new(id, position, parent));
        if let Some(p) = parent {
            self.tracks[p.index()].set_end_vertex(id);
        }
        tracing::debug!(vertex = id.0, parent = ?parent.map(|p| p.0), "registered vertex");
        Ok(id)
    }

    /// Register a track for `particle`, produced at `origin`.
    pub fn add_sim_track(
        &mut self,
        particle: &RawParticle,
        origin: VertexId,
        gen_particle: Option<GenParticleId>,
    ) -> EventResult<TrackId> {
        let parent = self.vertex_record(origin)?.parent_id();
        if let Some(g) = gen_particle {
            self.gen_particle(g).ok_or(EventError::GenParticleNotFound(g))?;
        }
        let id = TrackId::try_from(self.tracks.len()).map_err(|_| EventError::TableFull)?;

        self.tracks.push(FSimTrack::new(particle, origin, gen_particle, id));
        self.vertices[origin.index()].add_daughter(id);
        if let Some(p) = parent {
            self.tracks[p.index()].add_daughter(id);
        }
        tracing::debug!(track = id.0, pid = particle.pid, vertex = origin.0, "registered track");
        Ok(id)
    }

    /// Register a final-state generator particle and its track in one step,
    /// at an existing vertex.
    pub fn add_gen_track(&mut self, particle: GenParticle, origin: VertexId) -> EventResult<TrackId> {
        let raw = particle.to_raw_particle();
        let g = self.add_gen_particle(particle)?;
        self.add_sim_track(&raw, origin, Some(g))
    }

    /// Point `track` at `vertex` as its end vertex.
    ///
    /// Does not touch the vertex's parent; use
    /// [`add_sim_vertex`](Self::add_sim_vertex) to create a decay vertex.
    pub fn set_end_vertex(&mut self, track: TrackId, vertex: VertexId) -> EventResult<()> {
        self.vertex_record(vertex)?;
        self.track_mut(track)?.set_end_vertex(vertex);
        Ok(())
    }

    /// Attach `daughter` to `track`'s explicit daughter list.
    pub fn add_daughter(&mut self, track: TrackId, daughter: TrackId) -> EventResult<()> {
        self.track_record(daughter)?;
        self.track_mut(track)?.add_daughter(daughter);
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Navigation view of track `id`.
    pub fn track(&self, id: TrackId) -> EventResult<TrackView<'_>> {
        self.track_record(id).map(|record| TrackView::new(self, record))
    }

    pub fn track_record(&self, id: TrackId) -> EventResult<&FSimTrack> {
        self.tracks.get(id.index()).ok_or_else(|| {
            tracing::trace!(track = id.0, "track lookup failed");
            EventError::TrackNotFound(id)
        })
    }

    pub fn track_mut(&mut self, id: TrackId) -> EventResult<&mut FSimTrack> {
        self.tracks.get_mut(id.index()).ok_or(EventError::TrackNotFound(id))
    }

    /// Navigation view of vertex `id`.
    pub fn vertex(&self, id: VertexId) -> EventResult<VertexView<'_>> {
        self.vertex_record(id).map(|record| VertexView::new(self, record))
    }

    pub fn vertex_record(&self, id: VertexId) -> EventResult<&FSimVertex> {
        self.vertices.get(id.index()).ok_or_else(|| {
            tracing::trace!(vertex = id.0, "vertex lookup failed");
            EventError::VertexNotFound(id)
        })
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> EventResult<&mut FSimVertex> {
        self.vertices.get_mut(id.index()).ok_or(EventError::VertexNotFound(id))
    }

    #[inline]
    pub fn gen_particle(&self, id: GenParticleId) -> Option<&GenParticle> {
        self.gen_particles.get(id.index())
    }

    // ── Tables ────────────────────────────────────────────────────────────

    #[inline]
    pub fn tracks(&self) -> &[FSimTrack] {
        &self.tracks
    }

    #[inline]
    pub fn vertices(&self) -> &[FSimVertex] {
        &self.vertices
    }

    #[inline]
    pub fn gen_particles(&self) -> &[GenParticle] {
        &self.gen_particles
    }

    #[inline]
    pub fn n_tracks(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn n_gen_particles(&self) -> usize {
        self.gen_particles.len()
    }

    /// Views of every track in id order.
    pub fn track_views(&self) -> impl Iterator<Item = TrackView<'_>> + '_ {
        self.tracks.iter().map(move |record| TrackView::new(self, record))
    }

    /// Hand the track table over for storage.
    pub fn into_container(self) -> FSimTrackContainer {
        self.tracks
    }
}
