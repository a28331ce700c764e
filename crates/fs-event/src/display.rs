//! Fixed-column diagnostic dumps of tracks and events.
//!
//! Track line layout:
//!
//! ```text
//!   id  gen name        eta    phi     pT      E  vtx      x      y      z moth | end-vertex part
//! ```
//!
//! The end-vertex part is either `vtx2 eta phi rho z` followed by daughter
//! ids, or, for a track that has not ended, the first calorimeter entrance it
//! reached (preshower layer 1, else ECAL) as `-status eta phi rho z pT E`.
//! Absent ids print as `-1`.  These lines are for logs only; nothing parses
//! them back.

use std::fmt;

use fs_core::{LorentzVector, RawParticle, SignedIndex};

use crate::event::FBaseSimEvent;
use crate::layer::LayerStatus;
use crate::view::TrackView;
use crate::EventError;

/// Width the particle name is padded to.
const NAME_WIDTH: usize = 11;

const HEADER: &str = "  Id  Gen Name          eta    phi     pT      E  Vtx      x      y      z Moth  Vtx2   eta    phi   rho      z  Daughters / calo entrance";

fn fmt_err(e: EventError) -> fmt::Error {
    tracing::trace!(error = %e, "track dump failed");
    fmt::Error
}

fn write_position(f: &mut fmt::Formatter<'_>, id: i64, pos: &LorentzVector) -> fmt::Result {
    write!(
        f,
        "{:>4} {:>6.2} {:>6.2} {:>5.1} {:>6.1} ",
        id,
        pos.eta(),
        pos.phi(),
        pos.perp(),
        pos.z,
    )
}

fn write_entrance(f: &mut fmt::Formatter<'_>, status: LayerStatus, entrance: &RawParticle) -> fmt::Result {
    write_position(f, -i64::from(status.code()), entrance.vertex())?;
    write!(f, "{:>6.2} {:>6.2} ", entrance.perp(), entrance.e())
}

impl fmt::Display for TrackView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record();
        let name = self.particle_info().map_or("Unknown", |d| d.name.as_str());
        let momentum = record.momentum();

        let (vertex_id, vertex_pos) = match self.vertex() {
            Ok(v) => (i64::from(v.id().0), *v.position()),
            Err(EventError::NoOriginVertex(_)) => (-1, LorentzVector::ZERO),
            Err(e) => return Err(fmt_err(e)),
        };
        let mother = self.mother().map_err(fmt_err)?.and_then(|m| m.id());

        write!(
            f,
            "{:>4} {:>4} {:<width$} {:>6.2} {:>6.2} {:>6.2} {:>6.2} {:>4} {:>6.1} {:>6.1} {:>6.1} {:>4} ",
            record.id().signed_index(),
            record.gen_particle_id().signed_index(),
            name,
            momentum.eta(),
            momentum.phi(),
            momentum.perp(),
            momentum.e(),
            vertex_id,
            vertex_pos.x,
            vertex_pos.y,
            vertex_pos.z,
            mother.signed_index(),
            width = NAME_WIDTH,
        )?;

        if !self.no_end_vertex().map_err(fmt_err)? {
            if let Some(end) = self.end_vertex().map_err(fmt_err)? {
                write_position(f, i64::from(end.id().0), end.position())?;
            }
            for d in self.daughters().map_err(fmt_err)? {
                write!(f, "{:>4} ", d.0)?;
            }
        } else if record.on_layer1().is_recorded() {
            write_entrance(f, record.on_layer1(), record.layer1_entrance())?;
        } else if record.on_ecal().is_recorded() {
            write_entrance(f, record.on_ecal(), record.ecal_entrance())?;
        }
        Ok(())
    }
}

impl fmt::Display for FBaseSimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Event {}: {} tracks, {} vertices, {} generator particles",
            self.event_number(),
            self.n_tracks(),
            self.n_vertices(),
            self.n_gen_particles(),
        )?;
        writeln!(f, "{HEADER}")?;
        for track in self.track_views() {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}
