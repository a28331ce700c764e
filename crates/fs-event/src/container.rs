//! Stored track collections and typed references into them.
//!
//! A persisted event keeps its tracks in an [`FSimTrackContainer`].  Other
//! stored products refer to individual tracks with a [`Ref`], to an ordered
//! selection with a [`RefVector`], or to the whole collection with a
//! [`RefProd`].  References are plain indices tagged with the element type;
//! resolving one is bounds-checked.
//!
//! With the `serde` feature every type here serializes, which is what lets
//! storage backends write tracks and the references between them.

use std::fmt;
use std::marker::PhantomData;

use fs_core::TrackId;

use crate::track::FSimTrack;

/// The stored form of an event's track table.
pub type FSimTrackContainer = Vec<FSimTrack>;

pub type FSimTrackRef = Ref<FSimTrack>;
pub type FSimTrackRefVector = RefVector<FSimTrack>;
pub type FSimTrackRefProd = RefProd<FSimTrack>;

// ── Ref ───────────────────────────────────────────────────────────────────────

/// Reference to the element at `key` of a `[T]` collection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ref<T> {
    key: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<fn() -> T>,
}

impl<T> Ref<T> {
    pub fn new(key: u32) -> Self {
        Self { key, _marker: PhantomData }
    }

    #[inline]
    pub fn key(&self) -> u32 {
        self.key
    }

    /// The referenced element, `None` if `key` is out of range.
    pub fn get<'c>(&self, collection: &'c [T]) -> Option<&'c T> {
        collection.get(self.key as usize)
    }
}

impl From<TrackId> for FSimTrackRef {
    fn from(id: TrackId) -> Self {
        Ref::new(id.0)
    }
}

// Manual impls so `T` needs no bounds.
impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Ref<T> {}

impl<T> PartialEq for Ref<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Ref<T> {}

impl<T> std::hash::Hash for Ref<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({})", self.key)
    }
}

// ── RefVector ─────────────────────────────────────────────────────────────────

/// An ordered selection of elements of one collection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = ""))]
pub struct RefVector<T> {
    refs: Vec<Ref<T>>,
}

impl<T> RefVector<T> {
    pub fn new() -> Self {
        Self { refs: Vec::new() }
    }

    pub fn push(&mut self, r: Ref<T>) {
        self.refs.push(r);
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn refs(&self) -> &[Ref<T>] {
        &self.refs
    }

    /// Resolve every reference; `None` for keys outside `collection`.
    pub fn resolve<'c>(&self, collection: &'c [T]) -> impl Iterator<Item = Option<&'c T>>
    where
        T: 'c,
    {
        self.refs.iter().map(move |r| r.get(collection))
    }

    /// Resolve every reference, or `None` if any is out of range.
    pub fn get_all<'c>(&self, collection: &'c [T]) -> Option<Vec<&'c T>> {
        self.refs.iter().map(|r| r.get(collection)).collect()
    }
}

impl<T> Default for RefVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RefVector<T> {
    fn clone(&self) -> Self {
        Self { refs: self.refs.clone() }
    }
}

impl<T> PartialEq for RefVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.refs == other.refs
    }
}

impl<T> fmt::Debug for RefVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.refs.iter().map(Ref::key)).finish()
    }
}

impl<T> FromIterator<Ref<T>> for RefVector<T> {
    fn from_iter<I: IntoIterator<Item = Ref<T>>>(iter: I) -> Self {
        Self { refs: iter.into_iter().collect() }
    }
}

impl FromIterator<TrackId> for FSimTrackRefVector {
    fn from_iter<I: IntoIterator<Item = TrackId>>(iter: I) -> Self {
        iter.into_iter().map(FSimTrackRef::from).collect()
    }
}

// ── RefProd ───────────────────────────────────────────────────────────────────

/// Reference to a whole collection, remembering how many elements it had
/// when the reference was taken.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefProd<T> {
    len: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<fn() -> T>,
}

impl<T> RefProd<T> {
    pub fn of(collection: &[T]) -> Self {
        Self {
            len: u32::try_from(collection.len()).unwrap_or(u32::MAX),
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The referenced collection, `None` if `collection` is shorter than it
    /// was when the reference was taken.
    pub fn get<'c>(&self, collection: &'c [T]) -> Option<&'c [T]> {
        collection.get(..self.len())
    }

    /// A [`Ref`] to element `key`, `None` if out of range.
    pub fn element(&self, key: u32) -> Option<Ref<T>> {
        (key < self.len).then(|| Ref::new(key))
    }
}

impl<T> Clone for RefProd<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RefProd<T> {}

impl<T> fmt::Debug for RefProd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefProd(len = {})", self.len)
    }
}
