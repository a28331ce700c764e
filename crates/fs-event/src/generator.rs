//! Generator-level particles the simulated tracks were created from.

use fs_core::{LorentzVector, RawParticle};

/// One particle of the generator record.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenParticle {
    /// PDG particle code.
    pub pid: i32,
    /// Generator status code (1 = final state).
    pub status: i32,
    pub momentum: LorentzVector,
    /// Production point, if the generator provides one.
    pub production: Option<LorentzVector>,
}

impl GenParticle {
    pub const FINAL_STATE: i32 = 1;

    pub fn new(pid: i32, status: i32, momentum: LorentzVector) -> Self {
        Self { pid, status, momentum, production: None }
    }

    pub fn with_production(mut self, production: LorentzVector) -> Self {
        self.production = Some(production);
        self
    }

    #[inline]
    pub fn is_final_state(&self) -> bool {
        self.status == Self::FINAL_STATE
    }

    /// The particle state handed to the simulation.
    pub fn to_raw_particle(&self) -> RawParticle {
        RawParticle::new(self.pid, self.momentum, self.production.unwrap_or_default())
    }
}
