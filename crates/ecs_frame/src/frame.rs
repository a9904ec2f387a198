//! The frame loop.
//!
//! One frame:
//!
//! 1. Advance the frame counter.
//! 2. Run every registered system once, in registration order.
//! 3. Sweep destroyed entities (once, after the last system).
//!
//! A system that fails is logged and skipped; the remaining systems and the
//! sweep still run so one broken system cannot leave the store half-swept.

use std::time::Instant;

use ecs_store::Store;
use tracing::{debug, error, info, warn};

use crate::config::FrameConfig;
use crate::context::FrameContext;
use crate::error::FrameError;
use crate::registry::SystemRegistry;
use crate::system::System;

/// Outcome of a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// The frame that ran.
    pub frame_id: u64,
    /// Number of systems invoked.
    pub systems_run: usize,
    /// Names of systems that returned an error.
    pub failed: Vec<String>,
    /// Entities purged by the end-of-frame sweep.
    pub swept: usize,
}

/// Owns the store and the systems, and drives them frame by frame.
#[derive(Debug)]
pub struct FrameLoop {
    /// Current frame counter.
    frame_id: u64,
    config: FrameConfig,
    store: Store,
    registry: SystemRegistry,
}

impl FrameLoop {
    /// Create a frame loop with an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfig`] if the config fails validation.
    pub fn new(config: FrameConfig) -> Result<Self, FrameError> {
        Self::with_store(config, Store::new())
    }

    /// Create a frame loop around an existing store.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfig`] if the config fails validation.
    pub fn with_store(config: FrameConfig, store: Store) -> Result<Self, FrameError> {
        config.validate()?;
        Ok(Self {
            frame_id: 0,
            config,
            store,
            registry: SystemRegistry::new(),
        })
    }

    /// Returns the number of frames run so far.
    #[must_use]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    #[must_use]
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable store access for setup between frames.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    #[must_use]
    pub fn registry(&self) -> &SystemRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SystemRegistry {
        &mut self.registry
    }

    /// Register a system at the end of the run order.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DuplicateSystem`] if the name is taken.
    pub fn add_system(&mut self, system: impl System + 'static) -> Result<(), FrameError> {
        self.registry.register(Box::new(system))
    }

    /// Run one frame with the given delta time.
    pub fn frame(&mut self, dt: f64) -> FrameReport {
        self.frame_id += 1;
        let ctx = FrameContext::new(self.frame_id, dt);

        debug!(
            frame_id = self.frame_id,
            dt,
            systems = self.registry.len(),
            "frame start"
        );

        let mut systems_run = 0;
        let mut failed = Vec::new();
        for system in self.registry.iter_mut() {
            systems_run += 1;
            debug!(frame_id = self.frame_id, system = system.name(), "running system");
            if let Err(source) = system.run(&mut self.store, &ctx) {
                let err = FrameError::System {
                    system: system.name().to_string(),
                    source,
                };
                error!(frame_id = self.frame_id, %err, "system failed");
                failed.push(system.name().to_string());
            }
        }

        let swept = if self.config.sweep_each_frame {
            self.store.sweep()
        } else {
            0
        };

        debug!(
            frame_id = self.frame_id,
            swept,
            entities = self.store.entity_count(),
            "frame end"
        );

        FrameReport {
            frame_id: self.frame_id,
            systems_run,
            failed,
            swept,
        }
    }

    /// Run the loop for the configured number of frames, or indefinitely.
    ///
    /// Fixed timestep: every frame receives `1 / frame_rate` as its delta
    /// and the loop sleeps off whatever budget the frame did not use.
    /// Returns the number of frames run.
    pub fn run(&mut self) -> u64 {
        // Checked by `FrameConfig::validate` when the loop was built.
        let frame_duration = self.config.frame_duration().unwrap_or_default();
        let dt = frame_duration.as_secs_f64();
        let mut frame_count = 0u64;

        info!(
            frame_rate = self.config.frame_rate,
            max_frames = self.config.max_frames,
            systems = ?self.registry.names(),
            "starting frame loop"
        );

        loop {
            let start = Instant::now();

            self.frame(dt);

            frame_count += 1;
            if self.config.max_frames > 0 && frame_count >= self.config.max_frames {
                info!(
                    frames = frame_count,
                    entities = self.store.entity_count(),
                    "frame loop complete"
                );
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            } else {
                warn!(
                    frame_id = self.frame_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_duration.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }

        frame_count
    }
}
