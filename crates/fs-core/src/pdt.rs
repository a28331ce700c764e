//! Particle data table: static properties keyed by PDG code.
//!
//! # CSV format
//!
//! One row per species.  Antiparticles are listed explicitly with their own
//! (negative) code; nothing is inferred.
//!
//! ```csv
//! pid,name,charge,mass,ctau
//! 11,e-,-1,0.000511,
//! -11,e+,1,0.000511,
//! 211,pi+,1,0.13957,780.45
//! ```
//!
//! `ctau` is the mean proper decay length in mm; leave it empty for stable
//! particles.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::kinematics::{LorentzVector, ThreeVector};
use crate::particle::RawParticle;
use crate::{CoreError, CoreResult};

#[cfg(feature = "fx-hash")]
type PidMap<V> = rustc_hash::FxHashMap<i32, V>;
#[cfg(not(feature = "fx-hash"))]
type PidMap<V> = std::collections::HashMap<i32, V>;

/// Well-known PDG codes.
pub mod pid {
    pub const ELECTRON: i32 = 11;
    pub const NU_E: i32 = 12;
    pub const MUON: i32 = 13;
    pub const NU_MU: i32 = 14;
    pub const TAU: i32 = 15;
    pub const NU_TAU: i32 = 16;
    pub const PHOTON: i32 = 22;
    pub const PI0: i32 = 111;
    pub const K0_L: i32 = 130;
    pub const PI_PLUS: i32 = 211;
    pub const K0_S: i32 = 310;
    pub const K_PLUS: i32 = 321;
    pub const NEUTRON: i32 = 2112;
    pub const PROTON: i32 = 2212;
    pub const LAMBDA: i32 = 3122;

    /// Electrons and positrons.  These tracks keep their own daughter list
    /// because a bremsstrahlung vertex does not end them.
    #[inline]
    pub fn is_electron_like(pid: i32) -> bool {
        pid.abs() == ELECTRON
    }

    #[inline]
    pub fn is_photon(pid: i32) -> bool {
        pid == PHOTON
    }
}

// ── ParticleData ──────────────────────────────────────────────────────────────

/// Static properties of one particle species.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleData {
    pub pid: i32,
    pub name: String,
    /// Electric charge in units of e.
    pub charge: f64,
    /// Rest mass (GeV).
    pub mass: f64,
    /// Mean proper decay length c·τ in mm; `None` for stable species.
    pub ctau: Option<f64>,
}

impl ParticleData {
    pub fn new(pid: i32, name: impl Into<String>, charge: f64, mass: f64, ctau: Option<f64>) -> Self {
        Self { pid, name: name.into(), charge, mass, ctau }
    }

    #[inline]
    pub fn is_stable(&self) -> bool {
        self.ctau.is_none()
    }
}

// ── ParticleTable ─────────────────────────────────────────────────────────────

/// Lookup table from PDG code to [`ParticleData`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleTable {
    entries: PidMap<ParticleData>,
}

impl ParticleTable {
    /// An empty table.  Every lookup misses, so track names print as
    /// `"Unknown"` and charges are unavailable.
    pub fn new() -> Self {
        Self { entries: PidMap::default() }
    }

    /// Built-in table of the species a detector simulation meets most often.
    pub fn standard() -> Self {
        let rows: &[(i32, &str, f64, f64, Option<f64>)] = &[
            (pid::ELECTRON, "e-", -1.0, 0.000_510_999, None),
            (-pid::ELECTRON, "e+", 1.0, 0.000_510_999, None),
            (pid::NU_E, "nu_e", 0.0, 0.0, None),
            (-pid::NU_E, "nu_e~", 0.0, 0.0, None),
            (pid::MUON, "mu-", -1.0, 0.105_658, Some(658_654.0)),
            (-pid::MUON, "mu+", 1.0, 0.105_658, Some(658_654.0)),
            (pid::NU_MU, "nu_mu", 0.0, 0.0, None),
            (-pid::NU_MU, "nu_mu~", 0.0, 0.0, None),
            (pid::TAU, "tau-", -1.0, 1.776_86, Some(0.087_03)),
            (-pid::TAU, "tau+", 1.0, 1.776_86, Some(0.087_03)),
            (pid::NU_TAU, "nu_tau", 0.0, 0.0, None),
            (-pid::NU_TAU, "nu_tau~", 0.0, 0.0, None),
            (pid::PHOTON, "gamma", 0.0, 0.0, None),
            (pid::PI0, "pi0", 0.0, 0.134_977, Some(2.55e-5)),
            (pid::K0_L, "K_L0", 0.0, 0.497_611, Some(15_340.0)),
            (pid::PI_PLUS, "pi+", 1.0, 0.139_570, Some(7_804.5)),
            (-pid::PI_PLUS, "pi-", -1.0, 0.139_570, Some(7_804.5)),
            (pid::K0_S, "K_S0", 0.0, 0.497_611, Some(26.84)),
            (pid::K_PLUS, "K+", 1.0, 0.493_677, Some(3_711.0)),
            (-pid::K_PLUS, "K-", -1.0, 0.493_677, Some(3_711.0)),
            (pid::NEUTRON, "n0", 0.0, 0.939_565, None),
            (-pid::NEUTRON, "n~0", 0.0, 0.939_565, None),
            (pid::PROTON, "p+", 1.0, 0.938_272, None),
            (-pid::PROTON, "p~-", -1.0, 0.938_272, None),
            (pid::LAMBDA, "Lambda0", 0.0, 1.115_683, Some(78.9)),
            (-pid::LAMBDA, "Lambda~0", 0.0, 1.115_683, Some(78.9)),
        ];

        let mut entries = PidMap::default();
        for &(code, name, charge, mass, ctau) in rows {
            entries.insert(code, ParticleData::new(code, name, charge, mass, ctau));
        }
        Self { entries }
    }

    /// Add `data`, failing if its code is already present.
    pub fn insert(&mut self, data: ParticleData) -> CoreResult<()> {
        if self.entries.contains_key(&data.pid) {
            return Err(CoreError::DuplicateParticle(data.pid));
        }
        self.entries.insert(data.pid, data);
        Ok(())
    }

    /// Add or replace the entry for `data.pid`.
    pub fn upsert(&mut self, data: ParticleData) {
        self.entries.insert(data.pid, data);
    }

    #[inline]
    pub fn get(&self, pid: i32) -> Option<&ParticleData> {
        self.entries.get(&pid)
    }

    /// Species name, `"Unknown"` when the code is not in the table.
    pub fn name(&self, pid: i32) -> &str {
        self.get(pid).map_or("Unknown", |d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build an on-shell [`RawParticle`] of species `pid` with 3-momentum `p`
    /// at `vertex`, filling energy, charge and mass from the table.
    pub fn raw_particle(&self, pid: i32, p: ThreeVector, vertex: LorentzVector) -> CoreResult<RawParticle> {
        let data = self.get(pid).ok_or(CoreError::UnknownParticle(pid))?;
        Ok(RawParticle::new(pid, LorentzVector::from_momentum_mass(p, data.mass), vertex)
            .with_charge(data.charge)
            .with_mass(data.mass))
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParticleRecord {
    pid:    i32,
    name:   String,
    charge: f64,
    mass:   f64,
    ctau:   Option<f64>,
}

/// Load a [`ParticleTable`] from a CSV file.
pub fn load_particle_table_csv(path: &Path) -> CoreResult<ParticleTable> {
    let file = std::fs::File::open(path)?;
    load_particle_table_reader(file)
}

/// Like [`load_particle_table_csv`] but accepts any `Read` source.
pub fn load_particle_table_reader<R: Read>(reader: R) -> CoreResult<ParticleTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = ParticleTable::new();

    for result in csv_reader.deserialize::<ParticleRecord>() {
        let rec = result?;
        if rec.name.trim().is_empty() {
            return Err(CoreError::Parse(format!("particle {} has an empty name", rec.pid)));
        }
        table.insert(ParticleData::new(rec.pid, rec.name.trim(), rec.charge, rec.mass, rec.ctau))?;
    }

    tracing::debug!(species = table.len(), "loaded particle table");
    Ok(table)
}
