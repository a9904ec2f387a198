//! Per-frame execution context provided to systems.

/// Context handed to every system on each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// The current frame number, starting at 1.
    pub frame_id: u64,
    /// Delta time since the last frame, in seconds.
    pub dt: f64,
}

impl FrameContext {
    /// Create a new context for a frame.
    #[must_use]
    pub fn new(frame_id: u64, dt: f64) -> Self {
        Self { frame_id, dt }
    }
}
