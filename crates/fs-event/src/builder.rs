//! Fluent builder for [`FBaseSimEvent`].
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use fs_core::{NavigationConfig, ParticleTable};
//! use fs_event::EventBuilder;
//!
//! let event = EventBuilder::new(Arc::new(ParticleTable::standard()))
//!     .event_number(17)
//!     .config(NavigationConfig { boundary_tolerance: 1e-4, ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(event.event_number(), 17);
//! assert_eq!(event.n_tracks(), 0);
//! ```

use std::sync::Arc;

use fs_core::{NavigationConfig, ParticleTable};

use crate::event::FBaseSimEvent;
use crate::EventResult;

/// Fluent builder for [`FBaseSimEvent`].
pub struct EventBuilder {
    particle_table: Arc<ParticleTable>,
    config:         NavigationConfig,
    event_number:   u64,
}

impl EventBuilder {
    /// Start an event that resolves species through `particle_table`.
    ///
    /// The table is shared: every event of a run holds the same `Arc`.
    pub fn new(particle_table: Arc<ParticleTable>) -> Self {
        Self {
            particle_table,
            config:       NavigationConfig::default(),
            event_number: 0,
        }
    }

    pub fn config(mut self, config: NavigationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn event_number(mut self, n: u64) -> Self {
        self.event_number = n;
        self
    }

    /// Validate the config and return an empty event.
    pub fn build(self) -> EventResult<FBaseSimEvent> {
        let mut event = FBaseSimEvent::with_config(self.particle_table, self.config)?;
        event.set_event_number(self.event_number);
        Ok(event)
    }
}
