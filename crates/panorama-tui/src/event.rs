use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};
use panorama_core::scroll::WheelEvent;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick_rate: Duration,
    /// Offset units per wheel notch
    wheel_step: f64,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_tick_rate: Duration, wheel_step: f64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick_rate,
            wheel_step,
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(self.translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }

    fn translate(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) => {
                // Only handle key press events, ignore release events
                // (crossterm 0.27+ sends release events on some systems)
                if key.kind == KeyEventKind::Press {
                    Some(AppEvent::Key(key))
                } else {
                    None
                }
            }
            Event::Mouse(mouse) => wheel_from_mouse(mouse.kind, self.wheel_step).map(AppEvent::Wheel),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Convert a mouse wheel notch into raw deltas
pub fn wheel_from_mouse(kind: MouseEventKind, step: f64) -> Option<WheelEvent> {
    match kind {
        MouseEventKind::ScrollDown => Some(WheelEvent::new(0.0, step)),
        MouseEventKind::ScrollUp => Some(WheelEvent::new(0.0, -step)),
        MouseEventKind::ScrollRight => Some(WheelEvent::new(step, 0.0)),
        MouseEventKind::ScrollLeft => Some(WheelEvent::new(-step, 0.0)),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel moved
    Wheel(WheelEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
