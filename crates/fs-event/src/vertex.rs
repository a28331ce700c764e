//! Vertex records.

use fs_core::{LorentzVector, TrackId, VertexId};

/// A space-time point where tracks originate: the primary interaction, a
/// decay, a bremsstrahlung emission, a nuclear interaction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FSimVertex {
    id: VertexId,
    position: LorentzVector,
    parent: Option<TrackId>,
    daughters: Vec<TrackId>,
}

impl FSimVertex {
    pub fn new(id: VertexId, position: LorentzVector, parent: Option<TrackId>) -> Self {
        Self { id, position, parent, daughters: Vec::new() }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Position (cm) and time coordinate.
    #[inline]
    pub fn position(&self) -> &LorentzVector {
        &self.position
    }

    /// Track that ends here; `None` for primary vertices.
    #[inline]
    pub fn parent_id(&self) -> Option<TrackId> {
        self.parent
    }

    #[inline]
    pub fn no_parent(&self) -> bool {
        self.parent.is_none()
    }

    /// Tracks produced here, in creation order.
    #[inline]
    pub fn daughters(&self) -> &[TrackId] {
        &self.daughters
    }

    #[inline]
    pub fn n_daughters(&self) -> usize {
        self.daughters.len()
    }

    #[inline]
    pub fn no_daughter(&self) -> bool {
        self.daughters.is_empty()
    }

    pub fn add_daughter(&mut self, daughter: TrackId) {
        self.daughters.push(daughter);
    }
}
