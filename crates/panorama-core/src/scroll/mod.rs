//! Smooth horizontal scroll choreography
//!
//! Turns vertical wheel intent into eased horizontal motion and publishes a
//! progress ratio and the active section for every frame.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `config` - Configuration helpers (re-exported from `crate::config`)
//! - `easing` - Exponential convergence step and settlement test
//! - `progress` - Max offset, progress ratio and ordinal readout
//! - `sections` - Section boundaries and the viewport-center resolver
//! - `host` - Collaborator traits injected by the host view
//!
//! ## L3 Molecular Layer
//! - `choreographer` - Idle/Animating state machine combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use panorama_core::scroll::{Choreographer, WheelEvent, WheelDisposition};
//!
//! let mut choreo = Choreographer::initialize(surface, scheduler, keys, config);
//!
//! // Wheel input
//! if choreo.on_wheel(WheelEvent::new(0.0, 120.0)) == WheelDisposition::Consumed {
//!     // suppress the host's default vertical scroll
//! }
//!
//! // When the scheduled frame fires
//! choreo.step();
//! let ratio = choreo.progress_ratio();
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod host;
pub mod progress;
pub mod sections;

// L3 Molecular Layer
pub mod choreographer;

// Re-exports for convenient access
pub use choreographer::{Choreographer, Phase, ScrollSnapshot, ScrollState, StepOutcome};
pub use config::{ScrollConfig, ScrollConfigExt};
pub use host::{
    FrameHandle, FrameScheduler, Geometry, ScrollSurface, SectionLayout, WheelDisposition,
    WheelEvent,
};
pub use sections::{SectionBoundary, SectionId, SectionTracker};
