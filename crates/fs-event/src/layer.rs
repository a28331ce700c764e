//! Per-layer state recorded on a track while it is propagated.
//!
//! Two kinds of layers are tracked:
//!
//! * **Calorimeter boundaries**: five fixed surfaces ([`CaloLayer`]).  For
//!   each, the track keeps a [`LayerStatus`] and the particle state captured
//!   when the boundary was reached ([`CaloState`]).
//! * **Tracker layers**: an open-ended, append-only list of crossings
//!   ([`TrackerCrossings`]), stored structure-of-arrays.

use std::fmt;

use fs_core::RawParticle;

use crate::{EventError, EventResult};

// ── CaloLayer ─────────────────────────────────────────────────────────────────

/// The calorimeter surfaces a track is propagated to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaloLayer {
    /// First preshower layer (endcaps only).
    PreshowerLayer1,
    /// Second preshower layer (endcaps only).
    PreshowerLayer2,
    /// ECAL front face.
    Ecal,
    /// HCAL front face.
    Hcal,
    /// Very-forward calorimeter front face (endcaps only).
    VFcal,
}

impl CaloLayer {
    pub const ALL: [CaloLayer; 5] = [
        CaloLayer::PreshowerLayer1,
        CaloLayer::PreshowerLayer2,
        CaloLayer::Ecal,
        CaloLayer::Hcal,
        CaloLayer::VFcal,
    ];

    /// Slot in the track's per-layer array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Layers with no barrel section can only report `Endcap`,
    /// `NoPropagation` or `NotPropagated`.
    #[inline]
    pub fn has_barrel(self) -> bool {
        matches!(self, CaloLayer::Ecal | CaloLayer::Hcal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaloLayer::PreshowerLayer1 => "layer1",
            CaloLayer::PreshowerLayer2 => "layer2",
            CaloLayer::Ecal            => "ecal",
            CaloLayer::Hcal            => "hcal",
            CaloLayer::VFcal           => "vfcal",
        }
    }
}

impl fmt::Display for CaloLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LayerStatus ───────────────────────────────────────────────────────────────

/// Outcome of propagating a track to one calorimeter layer.
///
/// The integer codes are those written by the propagation step and shown
/// (negated) in track dumps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LayerStatus {
    /// Not propagated to this layer yet.
    #[default]
    NotPropagated = 0,
    /// Reached the barrel section.
    Barrel = 1,
    /// Reached an endcap.
    Endcap = 2,
    /// Propagation was attempted but the layer cannot be reached.
    NoPropagation = 3,
}

impl LayerStatus {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// `true` once propagation to the layer has been attempted.
    #[inline]
    pub fn is_recorded(self) -> bool {
        self != LayerStatus::NotPropagated
    }

    /// `true` if the track actually reached the layer.
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, LayerStatus::Barrel | LayerStatus::Endcap)
    }
}

impl TryFrom<i32> for LayerStatus {
    type Error = EventError;

    fn try_from(code: i32) -> EventResult<Self> {
        match code {
            0 => Ok(LayerStatus::NotPropagated),
            1 => Ok(LayerStatus::Barrel),
            2 => Ok(LayerStatus::Endcap),
            3 => Ok(LayerStatus::NoPropagation),
            other => Err(EventError::InvalidStatusCode(other)),
        }
    }
}

// ── CaloState ─────────────────────────────────────────────────────────────────

/// Status plus the particle state captured at one calorimeter boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaloState {
    pub status: LayerStatus,
    /// Meaningless while `status == NotPropagated`.
    pub entrance: RawParticle,
}

// ── Tracker crossings ─────────────────────────────────────────────────────────

/// One passage through a tracker layer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerCrossing {
    /// Tracker layer number.
    pub layer: u32,
    /// Material traversed in the layer, in radiation lengths.
    pub rad_length: f64,
    /// Cylindrical radius of the crossing point (cm).
    pub r: f64,
    /// z of the crossing point (cm).
    pub z: f64,
}

/// Append-only tracker crossings, one `Vec` per quantity.
///
/// The four quantities are pushed independently by the propagation step, so
/// the columns may briefly differ in length while a crossing is being
/// recorded.  [`iter`](Self::iter) yields only complete rows.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerCrossings {
    pub layers:      Vec<u32>,
    pub rad_lengths: Vec<f64>,
    pub r:           Vec<f64>,
    pub z:           Vec<f64>,
}

impl TrackerCrossings {
    pub fn push(&mut self, crossing: LayerCrossing) {
        self.layers.push(crossing.layer);
        self.rad_lengths.push(crossing.rad_length);
        self.r.push(crossing.r);
        self.z.push(crossing.z);
    }

    /// Number of complete crossings.
    pub fn len(&self) -> usize {
        self.layers
            .len()
            .min(self.rad_lengths.len())
            .min(self.r.len())
            .min(self.z.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when all four columns have the same length.
    pub fn is_consistent(&self) -> bool {
        let n = self.layers.len();
        self.rad_lengths.len() == n && self.r.len() == n && self.z.len() == n
    }

    pub fn get(&self, i: usize) -> Option<LayerCrossing> {
        (i < self.len()).then(|| LayerCrossing {
            layer:      self.layers[i],
            rad_length: self.rad_lengths[i],
            r:          self.r[i],
            z:          self.z[i],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = LayerCrossing> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Material traversed so far, in radiation lengths.
    pub fn total_rad_length(&self) -> f64 {
        self.rad_lengths.iter().sum()
    }
}
