//! The horizontal strip of section panels as a scroll container

use panorama_core::scroll::{Geometry, ScrollSurface, SectionId, SectionLayout};
use panorama_core::SectionConfig;

#[derive(Debug, Clone)]
struct Panel {
    key: SectionId,
    width: u16,
}

/// Panels laid out left to right, viewed through a window one terminal wide
#[derive(Debug, Clone)]
pub struct StripSurface {
    panels: Vec<Panel>,
    visible_width: u16,
    offset: f64,
}

impl StripSurface {
    pub fn new(sections: &[SectionConfig], visible_width: u16) -> Self {
        Self {
            panels: sections
                .iter()
                .map(|s| Panel {
                    key: SectionId::new(s.key.clone()),
                    width: s.width,
                })
                .collect(),
            visible_width,
            offset: 0.0,
        }
    }

    /// Terminal was resized
    pub fn set_visible_width(&mut self, width: u16) {
        self.visible_width = width;
    }

    pub fn total_width(&self) -> u32 {
        self.panels.iter().map(|p| p.width as u32).sum()
    }

    /// Leftmost visible column
    pub fn first_column(&self) -> u32 {
        self.offset.max(0.0).round() as u32
    }

    /// Scroll natively by `delta` columns, clamped to the content
    ///
    /// Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        let max = (self.total_width() as f64 - self.visible_width as f64).max(0.0);
        let next = (self.offset + delta).clamp(0.0, max);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Panels intersecting the visible window as `(index, start column)`
    pub fn visible_panels(&self) -> Vec<(usize, u32)> {
        let left = self.first_column();
        let right = left + self.visible_width as u32;
        let mut start = 0u32;
        let mut visible = Vec::new();
        for (index, panel) in self.panels.iter().enumerate() {
            let end = start + panel.width as u32;
            if end > left && start < right {
                visible.push((index, start));
            }
            start = end;
        }
        visible
    }
}

impl ScrollSurface for StripSurface {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            scrollable_width: self.total_width() as f64,
            visible_width: self.visible_width as f64,
        }
    }

    fn section_layout(&self, key: &SectionId) -> Option<SectionLayout> {
        let mut start = 0u32;
        for panel in &self.panels {
            if &panel.key == key {
                return Some(SectionLayout {
                    start_offset: start as f64,
                    width: panel.width as f64,
                });
            }
            start += panel.width as u32;
        }
        None
    }
}
