use std::sync::Arc;
use std::time::{Duration, Instant};

use panorama_core::scroll::{
    Choreographer, ScrollConfigExt, ScrollSurface, SectionId, StepOutcome, WheelDisposition,
    WheelEvent,
};
use panorama_core::{AppConfig, SectionConfig};
use tracing::debug;

use crate::input::Action;
use crate::scheduler::TickScheduler;
use crate::surface::StripSurface;
use crate::theme::Theme;

pub type StripChoreographer = Choreographer<StripSurface, TickScheduler>;

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub should_quit: bool,
    choreographer: StripChoreographer,
    /// When the last animation frame fired
    last_frame: Option<Instant>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, visible_width: u16) -> Self {
        let surface = StripSurface::new(&config.sections, visible_width);
        let scheduler = if config.scroll.animation_fps == 0 {
            TickScheduler::disabled()
        } else {
            TickScheduler::new()
        };
        let keys = config.sections.iter().map(|s| SectionId::new(s.key.clone()));
        let choreographer =
            Choreographer::initialize(surface, scheduler, keys, config.scroll.clone());
        let theme = Theme::from_mode(config.ui.theme);

        Self {
            config,
            theme,
            should_quit: false,
            choreographer,
            last_frame: None,
        }
    }

    pub fn choreographer(&self) -> &StripChoreographer {
        &self.choreographer
    }

    pub fn sections(&self) -> &[SectionConfig] {
        &self.config.sections
    }

    pub fn surface(&self) -> &StripSurface {
        self.choreographer.surface()
    }

    pub fn progress(&self) -> f64 {
        self.choreographer.progress_ratio()
    }

    /// Index of the active section in the configured order
    pub fn active_index(&self) -> Option<usize> {
        let active = self.choreographer.active_section()?;
        self.config
            .sections
            .iter()
            .position(|s| s.key == active.as_str())
    }

    /// Whether the event loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.choreographer.scheduler().has_pending()
    }

    /// Frame interval while animating
    pub fn frame_interval(&self) -> Duration {
        self.config.scroll.frame_interval()
    }

    /// Fire the pending animation frame, if any
    pub fn tick(&mut self) -> Option<StepOutcome> {
        self.choreographer.scheduler_mut().take_due()?;
        Some(self.choreographer.step())
    }

    /// Fire the pending frame once a frame interval has passed since the last
    ///
    /// Called on every pass of the event loop, so a steady stream of input
    /// cannot starve the animation.
    pub fn advance(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.needs_fast_update() {
            return None;
        }
        if let Some(last) = self.last_frame {
            if now.saturating_duration_since(last) < self.frame_interval() {
                return None;
            }
        }
        self.last_frame = Some(now);
        self.tick()
    }

    /// Route a wheel gesture
    ///
    /// Gestures the choreographer passes through fall back to native
    /// horizontal scrolling of the strip.
    pub fn handle_wheel(&mut self, event: WheelEvent) -> WheelDisposition {
        let disposition = self.choreographer.on_wheel(event);
        if disposition == WheelDisposition::PassThrough && event.delta_x != 0.0 {
            if self.choreographer.surface_mut().scroll_by(event.delta_x) {
                self.choreographer.on_native_scroll_or_resize();
                self.choreographer.sync_to_surface();
            }
        }
        disposition
    }

    pub fn resize(&mut self, width: u16) {
        let surface = self.choreographer.surface_mut();
        surface.set_visible_width(width);
        // Keep the native offset inside the new bounds
        surface.scroll_by(0.0);
        self.choreographer.on_native_scroll_or_resize();
        self.choreographer.sync_to_surface();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollLeft => self.scroll_by_half_screen(-1.0),
            Action::ScrollRight => self.scroll_by_half_screen(1.0),
            Action::NextSection => {
                let next = self.active_index().map_or(0, |i| i + 1);
                self.jump_to(next.min(self.config.sections.len().saturating_sub(1)));
            }
            Action::PrevSection => {
                let prev = self.active_index().map_or(0, |i| i.saturating_sub(1));
                self.jump_to(prev);
            }
            Action::FirstSection => self.jump_to(0),
            Action::LastSection => self.jump_to(self.config.sections.len().saturating_sub(1)),
            Action::JumpToSection(index) => self.jump_to(index),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                debug!(mode = ?self.theme.mode, "Theme toggled");
            }
            Action::None => {}
        }
    }

    /// Animate to the section at `index`; out-of-range indices are ignored
    pub fn jump_to(&mut self, index: usize) {
        let Some(section) = self.config.sections.get(index) else {
            return;
        };
        let key = SectionId::new(section.key.clone());
        self.choreographer.navigate_to_section(&key);
    }

    fn scroll_by_half_screen(&mut self, direction: f64) {
        let half = self.choreographer.surface().geometry().visible_width / 2.0;
        let target = self.choreographer.state().target_offset + direction * half;
        self.choreographer.navigate_to(target);
    }

    /// Cancel pending animation frames before the terminal is restored
    pub fn shutdown(&mut self) {
        self.choreographer.teardown();
    }
}
