//! L4 Atomic Layer: Section boundaries and active-section resolution
//!
//! Boundaries are rebuilt from live layout every time they are needed. The
//! active section is whichever boundary contains the viewport center.

use std::fmt;

use serde::Serialize;

use super::host::ScrollSurface;

/// Opaque, unique section identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SectionId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Half-open horizontal interval `[start, end)` owned by one section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBoundary {
    pub key: SectionId,
    pub start: f64,
    pub end: f64,
}

impl SectionBoundary {
    pub fn new(key: impl Into<SectionId>, start: f64, end: f64) -> Self {
        Self {
            key: key.into(),
            start,
            end,
        }
    }

    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position < self.end
    }
}

/// Read current boundaries for `keys` from the surface, in registration order
///
/// Sections without a layout are skipped.
pub fn live_boundaries<S: ScrollSurface + ?Sized>(
    surface: &S,
    keys: &[SectionId],
) -> Vec<SectionBoundary> {
    keys.iter()
        .filter_map(|key| {
            surface.section_layout(key).map(|layout| SectionBoundary {
                key: key.clone(),
                start: layout.start_offset,
                end: layout.start_offset + layout.width,
            })
        })
        .collect()
}

/// First boundary containing `center`, in registration order
pub fn resolve_active(boundaries: &[SectionBoundary], center: f64) -> Option<&SectionId> {
    boundaries
        .iter()
        .find(|boundary| boundary.contains(center))
        .map(|boundary| &boundary.key)
}

/// Viewport-center position for a window starting at `offset`
#[inline]
pub fn viewport_center(offset: f64, visible_width: f64) -> f64 {
    offset + visible_width / 2.0
}

/// Remembers the last resolved section
///
/// Once a section has been entered the tracker never goes back to `None`;
/// a lookup that matches nothing keeps the previous value.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    active: Option<SectionId>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Resolve against `boundaries` and return whether the active section changed
    pub fn update(&mut self, boundaries: &[SectionBoundary], center: f64) -> bool {
        match resolve_active(boundaries, center) {
            Some(key) if self.active.as_ref() != Some(key) => {
                self.active = Some(key.clone());
                true
            }
            _ => false,
        }
    }
}
