//! `fs-event`: simulated tracks, vertices and the event that owns them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`track`]     | `SimTrack`, `FSimTrack`: the track record and its mutators     |
//! | [`vertex`]    | `FSimVertex`                                                   |
//! | [`generator`] | `GenParticle`                                                  |
//! | [`layer`]     | `CaloLayer`, `LayerStatus`, `CaloState`, tracker crossings     |
//! | [`event`]     | `FBaseSimEvent`: owning tables and validated linking           |
//! | [`builder`]   | `EventBuilder`                                                 |
//! | [`view`]      | `TrackView`, `VertexView`: navigation through the event        |
//! | [`container`] | `FSimTrackContainer`, `Ref`, `RefVector`, `RefProd`            |
//! | [`error`]     | `EventError`, `EventResult<T>`                                 |
//!
//! Track dumps are the `Display` impls of `TrackView` and `FBaseSimEvent`.
//!
//! # Ownership model
//!
//! Records never point at each other or at the event.  They hold ids, and
//! the event resolves them:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fs_core::{LorentzVector, ParticleTable, RawParticle};
//! use fs_event::FBaseSimEvent;
//!
//! let mut event = FBaseSimEvent::new(Arc::new(ParticleTable::standard()));
//! let pv = event.add_sim_vertex(LorentzVector::ZERO, None).unwrap();
//! let mu = RawParticle::new(13, LorentzVector::new(10.0, 0.0, 0.0, 10.0), LorentzVector::ZERO);
//! let t = event.add_sim_track(&mu, pv, None).unwrap();
//!
//! let view = event.track(t).unwrap();
//! assert!(view.no_end_vertex().unwrap());
//! assert!(view.no_mother().unwrap());
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all record types.      |

pub mod builder;
pub mod container;
pub mod error;
pub mod event;
pub mod generator;
pub mod layer;
pub mod track;
pub mod vertex;
pub mod view;

mod display;


pub use builder::EventBuilder;
pub use container::{FSimTrackContainer, FSimTrackRef, FSimTrackRefProd, FSimTrackRefVector, Ref, RefProd, RefVector};
pub use error::{EventError, EventResult};
pub use event::FBaseSimEvent;
pub use generator::GenParticle;
pub use layer::{CaloLayer, CaloState, LayerCrossing, LayerStatus, TrackerCrossings};
pub use track::{FSimTrack, SimTrack};
pub use vertex::FSimVertex;
pub use view::{TrackView, VertexView};
