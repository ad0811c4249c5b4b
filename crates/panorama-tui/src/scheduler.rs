//! Frame scheduler driven by the terminal event loop

use panorama_core::scroll::{FrameHandle, FrameScheduler};
use panorama_core::{Error, Result};

/// Holds at most one pending frame; the event loop fires it on its next
/// animation tick
#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    disabled: bool,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler that refuses every request (animation turned off)
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Remove and return the frame due on this tick
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        if self.disabled {
            return Err(Error::SchedulerUnavailable("animation disabled".into()));
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
