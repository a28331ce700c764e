//! `RawParticle`: the kinematic state of one particle at one point.
//!
//! Propagation code hands these around: the state at creation, at each
//! calorimeter boundary, at a decay.  A `RawParticle` carries no lineage;
//! that belongs to the track record built from it.

use crate::kinematics::LorentzVector;

/// Particle type, four-momentum and space-time position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawParticle {
    /// PDG particle code (0 = undefined).
    pub pid: i32,
    /// Four-momentum (GeV).
    pub momentum: LorentzVector,
    /// Position and time (cm) at which this state was captured.
    pub vertex: LorentzVector,
    /// Electric charge in units of e.
    pub charge: f64,
    /// Rest mass (GeV).
    pub mass: f64,
}

impl RawParticle {
    /// A particle with momentum `momentum` at `vertex`.  Charge and mass are
    /// left at zero; use the builder-style setters or
    /// [`ParticleTable::raw_particle`](crate::ParticleTable::raw_particle).
    pub fn new(pid: i32, momentum: LorentzVector, vertex: LorentzVector) -> Self {
        Self { pid, momentum, vertex, charge: 0.0, mass: 0.0 }
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Move the captured position, keeping the momentum.
    pub fn moved_to(mut self, vertex: LorentzVector) -> Self {
        self.vertex = vertex;
        self
    }

    #[inline]
    pub fn pid(&self) -> i32 {
        self.pid
    }

    #[inline]
    pub fn vertex(&self) -> &LorentzVector {
        &self.vertex
    }

    /// Transverse momentum.
    #[inline]
    pub fn perp(&self) -> f64 {
        self.momentum.perp()
    }

    #[inline]
    pub fn e(&self) -> f64 {
        self.momentum.e()
    }

    #[inline]
    pub fn eta(&self) -> f64 {
        self.momentum.eta()
    }

    #[inline]
    pub fn phi(&self) -> f64 {
        self.momentum.phi()
    }
}
