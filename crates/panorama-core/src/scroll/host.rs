//! L4 Atomic Layer: Collaborators supplied by the host view
//!
//! The choreographer never touches a real rendering environment. Everything
//! it reads or writes goes through these traits, so tests can drive it with
//! an in-memory surface and a recording scheduler.

use super::sections::SectionId;

/// Container size along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Total width of the scrolled content
    pub scrollable_width: f64,
    /// Width of the visible window
    pub visible_width: f64,
}

/// Live layout of one section inside the scrollable content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub start_offset: f64,
    pub width: f64,
}

/// The scroll container owned by the host
pub trait ScrollSurface {
    /// Current native scroll offset of the container
    fn scroll_offset(&self) -> f64;

    /// Write a new scroll offset to the container
    fn set_scroll_offset(&mut self, offset: f64);

    /// Current container geometry; read fresh on every use
    fn geometry(&self) -> Geometry;

    /// Layout of a section, or `None` when it is not laid out yet
    fn section_layout(&self, key: &SectionId) -> Option<SectionLayout>;
}

/// Opaque identifier for one outstanding frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's per-frame callback primitive
///
/// A granted request means the host will call `Choreographer::step` once on
/// its next frame, unless the handle is cancelled first.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> crate::Result<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Raw wheel deltas from one input gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
}

impl WheelEvent {
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }

    /// Vertical movement outweighs horizontal movement
    #[inline]
    pub fn is_vertical_dominant(&self) -> bool {
        self.delta_y.abs() > self.delta_x.abs()
    }
}

/// What the host should do with a wheel event after the choreographer saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDisposition {
    /// Handled; suppress the host's default scrolling
    Consumed,
    /// Ignored; let default scrolling proceed
    PassThrough,
}
