//! `fs-core`: foundational types for the `fastsim` event model.
//!
//! This crate is a dependency of every other `fs-*` crate.  It has no `fs-*`
//! dependencies and few external ones (`thiserror`, `csv`, `serde`,
//! `tracing`, plus optional `rustc-hash`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TrackId`, `VertexId`, `GenParticleId`                |
//! | [`kinematics`]  | `ThreeVector`, `LorentzVector`                        |
//! | [`particle`]    | `RawParticle` (momentum + production point)           |
//! | [`pdt`]         | `ParticleData`, `ParticleTable`, CSV loader           |
//! | [`config`]      | `NavigationConfig`                                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | `ParticleTable` uses `rustc_hash::FxHashMap`.            |

pub mod config;
pub mod error;
pub mod ids;
pub mod kinematics;
pub mod particle;
pub mod pdt;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NavigationConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{GenParticleId, SignedIndex, TrackId, VertexId};
pub use kinematics::{LorentzVector, ThreeVector};
pub use particle::RawParticle;
pub use pdt::{ParticleData, ParticleTable, load_particle_table_csv, load_particle_table_reader};
