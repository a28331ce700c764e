//! Track records: the base `SimTrack` and the enriched `FSimTrack`.
//!
//! A track record owns only plain data and ids.  Anything that needs another
//! record (vertices, mother, daughters, particle properties) goes through a
//! [`TrackView`](crate::TrackView) obtained from the owning
//! [`FBaseSimEvent`](crate::FBaseSimEvent).

use fs_core::{GenParticleId, LorentzVector, RawParticle, TrackId, VertexId};

use crate::layer::{CaloLayer, CaloState, LayerCrossing, LayerStatus, TrackerCrossings};
use crate::{EventError, EventResult};

// ── SimTrack ──────────────────────────────────────────────────────────────────

/// The minimal persistent track: type, momentum and where it came from.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTrack {
    /// PDG particle code.
    pub pid: i32,
    /// Four-momentum at production.
    pub momentum: LorentzVector,
    /// Production vertex.
    pub vertex: Option<VertexId>,
    /// Generator-level particle this track was created from, if any.
    pub gen_particle: Option<GenParticleId>,
    /// Id assigned by the simulation.
    pub track_id: Option<TrackId>,
}

impl SimTrack {
    pub fn new(pid: i32, momentum: LorentzVector, vertex: VertexId, gen_particle: Option<GenParticleId>) -> Self {
        Self {
            pid,
            momentum,
            vertex: Some(vertex),
            gen_particle,
            track_id: None,
        }
    }
}

// ── FSimTrack ─────────────────────────────────────────────────────────────────

/// A simulated track with lineage and per-layer propagation state.
///
/// Mutators are append-only or write-once; see the individual setters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FSimTrack {
    core: SimTrack,
    id: Option<TrackId>,
    end_vertex: Option<VertexId>,
    /// Explicit daughters.  Only consulted for electron-like tracks.
    daughters: Vec<TrackId>,
    calo: [CaloState; 5],
    propagated: bool,
    crossings: TrackerCrossings,
    predefined_decay_time: Option<f64>,
    closest_charged_daughter: Option<TrackId>,
}

impl Default for FSimTrack {
    /// The sentinel record: no id, no vertices, pid 0.
    fn default() -> Self {
        Self {
            core: SimTrack::default(),
            id: None,
            end_vertex: None,
            daughters: Vec::new(),
            calo: [CaloState::default(); 5],
            propagated: false,
            crossings: TrackerCrossings::default(),
            predefined_decay_time: None,
            closest_charged_daughter: None,
        }
    }
}

impl FSimTrack {
    /// Build the record for `particle`, produced at `vertex`, stored at
    /// position `id` of the event's track table.
    pub fn new(particle: &RawParticle, vertex: VertexId, gen_particle: Option<GenParticleId>, id: TrackId) -> Self {
        let mut core = SimTrack::new(particle.pid, particle.momentum, vertex, gen_particle);
        core.track_id = Some(id);
        Self {
            core,
            id: Some(id),
            ..Self::default()
        }
    }

    // ── Identity and base track ───────────────────────────────────────────

    /// Position in the event's track table; `None` for the sentinel record.
    #[inline]
    pub fn id(&self) -> Option<TrackId> {
        self.id
    }

    #[inline]
    pub fn sim_track(&self) -> &SimTrack {
        &self.core
    }

    #[inline]
    pub fn pid(&self) -> i32 {
        self.core.pid
    }

    #[inline]
    pub fn momentum(&self) -> &LorentzVector {
        &self.core.momentum
    }

    #[inline]
    pub fn vertex_id(&self) -> Option<VertexId> {
        self.core.vertex
    }

    #[inline]
    pub fn gen_particle_id(&self) -> Option<GenParticleId> {
        self.core.gen_particle
    }

    #[inline]
    pub fn no_vertex(&self) -> bool {
        self.core.vertex.is_none()
    }

    #[inline]
    pub fn is_electron_like(&self) -> bool {
        fs_core::pdt::pid::is_electron_like(self.core.pid)
    }

    // ── Lineage ───────────────────────────────────────────────────────────

    #[inline]
    pub fn end_vertex_id(&self) -> Option<VertexId> {
        self.end_vertex
    }

    /// Set the end vertex.  Prefer
    /// [`FBaseSimEvent::set_end_vertex`](crate::FBaseSimEvent::set_end_vertex),
    /// which checks that the vertex exists.
    #[inline]
    pub fn set_end_vertex(&mut self, vertex: VertexId) {
        self.end_vertex = Some(vertex);
    }

    /// Explicitly attached daughters, in the order they were added.
    #[inline]
    pub fn explicit_daughters(&self) -> &[TrackId] {
        &self.daughters
    }

    #[inline]
    pub fn add_daughter(&mut self, daughter: TrackId) {
        self.daughters.push(daughter);
    }

    // ── Calorimeter propagation ───────────────────────────────────────────

    /// Mark that propagation to the calorimeters was attempted.
    #[inline]
    pub fn set_propagate(&mut self) {
        self.propagated = true;
    }

    /// `true` once propagation to the calorimeters was attempted.
    #[inline]
    pub fn propagated(&self) -> bool {
        self.propagated
    }

    #[inline]
    pub fn calo(&self, layer: CaloLayer) -> &CaloState {
        &self.calo[layer.index()]
    }

    /// Record the state at `layer`.
    ///
    /// # Errors
    ///
    /// [`EventError::LayerAlreadyRecorded`] if the layer already holds a
    /// status other than `NotPropagated`; the record is left unchanged.  Call
    /// [`reset_calorimeters`](Self::reset_calorimeters) to start a new pass.
    ///
    /// [`EventError::UnrecordedStatus`] if `status` is `NotPropagated`, which
    /// would leave the layer writable.
    pub fn set_calo(&mut self, layer: CaloLayer, particle: &RawParticle, status: LayerStatus) -> EventResult<()> {
        if !status.is_recorded() {
            return Err(EventError::UnrecordedStatus { track: self.id, layer });
        }
        let slot = &mut self.calo[layer.index()];
        if slot.status.is_recorded() {
            tracing::debug!(track = ?self.id, %layer, "rejected second write to calorimeter layer");
            return Err(EventError::LayerAlreadyRecorded { track: self.id, layer });
        }
        *slot = CaloState { status, entrance: *particle };
        Ok(())
    }

    /// Preshower layer 1: `Endcap` (no barrel preshower) or `NoPropagation`.
    pub fn set_layer1(&mut self, particle: &RawParticle, status: LayerStatus) -> EventResult<()> {
        self.set_calo(CaloLayer::PreshowerLayer1, particle, status)
    }

    /// Preshower layer 2: `Endcap` (no barrel preshower) or `NoPropagation`.
    pub fn set_layer2(&mut self, particle: &RawParticle, status: LayerStatus) -> EventResult<()> {
        self.set_calo(CaloLayer::PreshowerLayer2, particle, status)
    }

    /// ECAL front face: `Barrel`, `Endcap` or `NoPropagation`.
    pub fn set_ecal(&mut self, particle: &RawParticle, status: LayerStatus) -> EventResult<()> {
        self.set_calo(CaloLayer::Ecal, particle, status)
    }

    /// HCAL front face: `Barrel`, `Endcap` or `NoPropagation`.
    pub fn set_hcal(&mut self, particle: &RawParticle, status: LayerStatus) -> EventResult<()> {
        self.set_calo(CaloLayer::Hcal, particle, status)
    }

    /// VFCAL front face: `Endcap` (no barrel) or `NoPropagation`.
    pub fn set_vfcal(&mut self, particle: &RawParticle, status: LayerStatus) -> EventResult<()> {
        self.set_calo(CaloLayer::VFcal, particle, status)
    }

    /// Forget all calorimeter states and the propagated flag.
    pub fn reset_calorimeters(&mut self) {
        self.calo = [CaloState::default(); 5];
        self.propagated = false;
    }

    #[inline]
    pub fn on_layer1(&self) -> LayerStatus {
        self.calo(CaloLayer::PreshowerLayer1).status
    }

    #[inline]
    pub fn on_layer2(&self) -> LayerStatus {
        self.calo(CaloLayer::PreshowerLayer2).status
    }

    #[inline]
    pub fn on_ecal(&self) -> LayerStatus {
        self.calo(CaloLayer::Ecal).status
    }

    #[inline]
    pub fn on_hcal(&self) -> LayerStatus {
        self.calo(CaloLayer::Hcal).status
    }

    #[inline]
    pub fn on_vfcal(&self) -> LayerStatus {
        self.calo(CaloLayer::VFcal).status
    }

    #[inline]
    pub fn layer1_entrance(&self) -> &RawParticle {
        &self.calo(CaloLayer::PreshowerLayer1).entrance
    }

    #[inline]
    pub fn layer2_entrance(&self) -> &RawParticle {
        &self.calo(CaloLayer::PreshowerLayer2).entrance
    }

    #[inline]
    pub fn ecal_entrance(&self) -> &RawParticle {
        &self.calo(CaloLayer::Ecal).entrance
    }

    #[inline]
    pub fn hcal_entrance(&self) -> &RawParticle {
        &self.calo(CaloLayer::Hcal).entrance
    }

    #[inline]
    pub fn vfcal_entrance(&self) -> &RawParticle {
        &self.calo(CaloLayer::VFcal).entrance
    }

    // ── Tracker crossings ─────────────────────────────────────────────────

    pub fn add_layer_num(&mut self, layer: u32) {
        self.crossings.layers.push(layer);
    }

    pub fn add_rad_l(&mut self, rad_length: f64) {
        self.crossings.rad_lengths.push(rad_length);
    }

    pub fn add_r_pos(&mut self, r: f64) {
        self.crossings.r.push(r);
    }

    pub fn add_z_pos(&mut self, z: f64) {
        self.crossings.z.push(z);
    }

    /// Append all four quantities of one crossing at once.
    pub fn add_layer_crossing(&mut self, crossing: LayerCrossing) {
        self.crossings.push(crossing);
    }

    #[inline]
    pub fn layer_crossings(&self) -> &TrackerCrossings {
        &self.crossings
    }

    #[inline]
    pub fn layer_nums(&self) -> &[u32] {
        &self.crossings.layers
    }

    #[inline]
    pub fn rad_ls(&self) -> &[f64] {
        &self.crossings.rad_lengths
    }

    #[inline]
    pub fn r_pos(&self) -> &[f64] {
        &self.crossings.r
    }

    #[inline]
    pub fn z_pos(&self) -> &[f64] {
        &self.crossings.z
    }

    // ── Auxiliary ─────────────────────────────────────────────────────────

    /// Decay time fixed in advance by the generator (proper time, in cm/c).
    #[inline]
    pub fn predefined_decay_time(&self) -> Option<f64> {
        self.predefined_decay_time
    }

    pub fn set_predefined_decay_time(&mut self, time: f64) {
        self.predefined_decay_time = Some(time);
    }

    #[inline]
    pub fn closest_charged_daughter(&self) -> Option<TrackId> {
        self.closest_charged_daughter
    }

    pub fn set_closest_charged_daughter(&mut self, daughter: TrackId) {
        self.closest_charged_daughter = Some(daughter);
    }
}
