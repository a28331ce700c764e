//! Three- and four-vectors used for momenta and space-time positions.
//!
//! Lengths are in centimetres, energies and momenta in GeV, as in the
//! detector simulation that produces the records.  Both types are `f64`:
//! vertex comparisons run down to 1e-5 cm, well below `f32` resolution at
//! calorimeter radii.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Pseudorapidity returned along the beam axis (matches CLHEP's convention).
const ETA_ON_AXIS: f64 = 1.0e72;

// ── ThreeVector ───────────────────────────────────────────────────────────────

/// A Cartesian 3-vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreeVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ThreeVector {
    pub const ZERO: ThreeVector = ThreeVector { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn mag2(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }

    /// Squared transverse component (distance from the z axis).
    #[inline]
    pub fn perp2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Transverse component: cylindrical radius for positions, pT for momenta.
    #[inline]
    pub fn perp(&self) -> f64 {
        self.perp2().sqrt()
    }

    /// Azimuthal angle in `(-π, π]`; zero for a vector on the z axis.
    #[inline]
    pub fn phi(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }

    /// Pseudorapidity `-ln tan(θ/2)`.
    ///
    /// Returns 0 for the null vector and ±1e72 exactly on the z axis.
    pub fn eta(&self) -> f64 {
        let m = self.mag();
        if m == 0.0 {
            0.0
        } else if m == self.z {
            ETA_ON_AXIS
        } else if m == -self.z {
            -ETA_ON_AXIS
        } else {
            0.5 * ((m + self.z) / (m - self.z)).ln()
        }
    }

    #[inline]
    pub fn dot(&self, other: &ThreeVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Add for ThreeVector {
    type Output = ThreeVector;
    #[inline]
    fn add(self, rhs: ThreeVector) -> ThreeVector {
        ThreeVector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for ThreeVector {
    type Output = ThreeVector;
    #[inline]
    fn sub(self, rhs: ThreeVector) -> ThreeVector {
        ThreeVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for ThreeVector {
    type Output = ThreeVector;
    #[inline]
    fn neg(self) -> ThreeVector {
        ThreeVector::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for ThreeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

// ── LorentzVector ─────────────────────────────────────────────────────────────

/// A four-vector `(x, y, z, t)`.
///
/// For momenta `t` is the energy; for positions it is the time coordinate
/// (c·t, in cm).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LorentzVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub t: f64,
}

impl LorentzVector {
    pub const ZERO: LorentzVector = LorentzVector { x: 0.0, y: 0.0, z: 0.0, t: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    /// Build a momentum four-vector from a 3-momentum and a mass.
    pub fn from_momentum_mass(p: ThreeVector, mass: f64) -> Self {
        let e = (p.mag2() + mass * mass).sqrt();
        Self::new(p.x, p.y, p.z, e)
    }

    /// Spatial part.
    #[inline]
    pub fn vect(&self) -> ThreeVector {
        ThreeVector::new(self.x, self.y, self.z)
    }

    /// Time component, read as energy.
    #[inline]
    pub fn e(&self) -> f64 {
        self.t
    }

    #[inline]
    pub fn perp(&self) -> f64 {
        self.vect().perp()
    }

    #[inline]
    pub fn perp2(&self) -> f64 {
        self.vect().perp2()
    }

    #[inline]
    pub fn eta(&self) -> f64 {
        self.vect().eta()
    }

    #[inline]
    pub fn phi(&self) -> f64 {
        self.vect().phi()
    }

    /// Minkowski square `t² - |p|²`.
    #[inline]
    pub fn mag2(&self) -> f64 {
        self.t * self.t - self.vect().mag2()
    }

    /// Invariant mass; negative for space-like vectors.
    pub fn mag(&self) -> f64 {
        let m2 = self.mag2();
        if m2 < 0.0 { -(-m2).sqrt() } else { m2.sqrt() }
    }
}

impl Add for LorentzVector {
    type Output = LorentzVector;
    #[inline]
    fn add(self, rhs: LorentzVector) -> LorentzVector {
        LorentzVector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.t + rhs.t)
    }
}

impl Sub for LorentzVector {
    type Output = LorentzVector;
    #[inline]
    fn sub(self, rhs: LorentzVector) -> LorentzVector {
        LorentzVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.t - rhs.t)
    }
}

impl fmt::Display for LorentzVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4}; {:.4})", self.x, self.y, self.z, self.t)
    }
}
