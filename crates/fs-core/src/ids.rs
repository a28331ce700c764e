//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every id is the position of a record in one of the owning event's tables.
//! All ids are `Copy + Ord + Hash`.  Records that may lack a link (a track
//! with no end vertex, a vertex with no parent) store `Option<Id>` rather
//! than a sentinel; `INVALID` exists only for dense arrays that must be
//! filled before their real values are known.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID": equivalent to `<inner>::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `false` for the `INVALID` sentinel.
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a simulated track in the event's track table.
    pub struct TrackId(u32);
}

typed_id! {
    /// Index of a simulated vertex in the event's vertex table.
    pub struct VertexId(u32);
}

typed_id! {
    /// Index of a generator-level particle in the event's generator record.
    pub struct GenParticleId(u32);
}

/// Signed index of an optional id, `-1` when absent.
///
/// Used by the diagnostic printers and the output rows, which keep the
/// column conventions of the detector simulation's track dumps.
pub trait SignedIndex {
    fn signed_index(&self) -> i64;
}

impl SignedIndex for Option<TrackId> {
    fn signed_index(&self) -> i64 {
        self.map_or(-1, |id| i64::from(id.0))
    }
}

impl SignedIndex for Option<VertexId> {
    fn signed_index(&self) -> i64 {
        self.map_or(-1, |id| i64::from(id.0))
    }
}

impl SignedIndex for Option<GenParticleId> {
    fn signed_index(&self) -> i64 {
        self.map_or(-1, |id| i64::from(id.0))
    }
}
