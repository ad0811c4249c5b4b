//! L3 Molecular Layer: Scroll choreographer
//!
//! Combines the convergence step, progress calculation and section resolver
//! into the Idle/Animating state machine that drives one scroll container.

use serde::Serialize;
use tracing::{debug, warn};

use super::config::ScrollConfig;
use super::easing::{approach, is_settled};
use super::host::{FrameHandle, FrameScheduler, ScrollSurface, WheelDisposition, WheelEvent};
use super::progress::{max_offset, progress_ratio};
use super::sections::{live_boundaries, viewport_center, SectionId, SectionTracker};

/// Animated offsets for one mounted view
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Eased position last written to the container
    pub current_offset: f64,
    /// Position the animation converges toward
    pub target_offset: f64,
}

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No frame requested
    Idle,
    /// Exactly one frame request outstanding
    Animating(FrameHandle),
}

/// Result of a single `step()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved toward the target and requested another frame
    Continue,
    /// Snapped onto the target and went idle
    Settled,
    /// Moved, but the next frame could not be requested
    Stalled,
    /// Nothing to do: idle or torn down
    Skipped,
}

/// Published values for one frame, suitable for logging or serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub target: f64,
    pub progress: f64,
    pub active: Option<SectionId>,
    pub animating: bool,
}

/// Smooth horizontal scroll controller
///
/// Converts vertical wheel intent into eased horizontal motion on a
/// [`ScrollSurface`], paced by a [`FrameScheduler`]. After every step or
/// native scroll notification it publishes a progress ratio and the section
/// under the viewport center.
///
/// Create one per mounted view with [`Choreographer::initialize`]. Call
/// [`Choreographer::step`] once each time a requested frame fires, and
/// [`Choreographer::teardown`] (or drop the value) when the view goes away.
#[derive(Debug)]
pub struct Choreographer<S: ScrollSurface, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    config: ScrollConfig,
    /// Registered sections, left to right
    sections: Vec<SectionId>,
    state: ScrollState,
    phase: Phase,
    progress: f64,
    tracker: SectionTracker,
    detached: bool,
}

impl<S: ScrollSurface, F: FrameScheduler> Choreographer<S, F> {
    /// Mount on a container, starting from its current native offset
    pub fn initialize<I, K>(surface: S, scheduler: F, sections: I, config: ScrollConfig) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SectionId>,
    {
        let offset = surface.scroll_offset();
        let mut choreographer = Self {
            surface,
            scheduler,
            config,
            sections: sections.into_iter().map(Into::into).collect(),
            state: ScrollState {
                current_offset: offset,
                target_offset: offset,
            },
            phase: Phase::Idle,
            progress: 0.0,
            tracker: SectionTracker::new(),
            detached: false,
        };
        debug!(offset, sections = choreographer.sections.len(), "Scroll choreographer mounted");
        choreographer.on_native_scroll_or_resize();
        choreographer
    }

    /// Handle a raw wheel gesture
    ///
    /// Only vertical-dominant gestures on overflowing content are consumed;
    /// everything else is left to the host's default scrolling.
    pub fn on_wheel(&mut self, event: WheelEvent) -> WheelDisposition {
        if self.detached {
            return WheelDisposition::PassThrough;
        }
        if self.max_offset() <= 0.0 {
            return WheelDisposition::PassThrough;
        }
        if !event.is_vertical_dominant() {
            return WheelDisposition::PassThrough;
        }

        // Clamped on the next step, not here
        self.state.target_offset += event.delta_y;
        self.ensure_scheduled();
        WheelDisposition::Consumed
    }

    /// Retarget the animation to `offset`
    ///
    /// Out-of-range offsets are accepted and clamped by the next step.
    pub fn navigate_to(&mut self, offset: f64) {
        if self.detached {
            return;
        }
        self.state.target_offset = offset;
        self.ensure_scheduled();
    }

    /// Retarget the animation to the start of a section
    ///
    /// Returns `false` and leaves the target untouched when the section has
    /// no current layout.
    pub fn navigate_to_section(&mut self, key: &SectionId) -> bool {
        if self.detached {
            return false;
        }
        match self.surface.section_layout(key) {
            Some(layout) => {
                debug!(section = %key, offset = layout.start_offset, "Navigating to section");
                self.navigate_to(layout.start_offset);
                true
            }
            None => {
                warn!(section = %key, "Section has no layout, ignoring navigation");
                false
            }
        }
    }

    /// Advance the animation by one frame
    pub fn step(&mut self) -> StepOutcome {
        if self.detached {
            return StepOutcome::Skipped;
        }
        let Phase::Animating(fired) = self.phase else {
            return StepOutcome::Skipped;
        };

        let max = self.max_offset();
        self.state.target_offset = self.state.target_offset.clamp(0.0, max);
        // Geometry may have shrunk under an in-flight animation
        self.state.current_offset = self.state.current_offset.clamp(0.0, max);

        let ScrollState {
            current_offset: current,
            target_offset: target,
        } = self.state;

        if is_settled(current, target, self.config.settle_threshold) {
            self.state.current_offset = target;
            self.surface.set_scroll_offset(target);
            self.publish(target, max);
            self.phase = Phase::Idle;
            debug!(offset = target, "Scroll settled");
            return StepOutcome::Settled;
        }

        let next = approach(current, target, self.config.convergence_rate);
        self.state.current_offset = next;
        self.surface.set_scroll_offset(next);
        self.publish(next, max);

        // A no-op when the fired frame is already gone; keeps a single
        // request outstanding if step runs twice in one frame
        self.scheduler.cancel_frame(fired);
        self.phase = Phase::Idle;
        if self.ensure_scheduled() {
            StepOutcome::Continue
        } else {
            StepOutcome::Stalled
        }
    }

    /// React to a container scroll from any source or a viewport resize
    ///
    /// Reads the container's own offset, which may differ from the animated
    /// offset when the user scrolls natively.
    pub fn on_native_scroll_or_resize(&mut self) {
        if self.detached {
            return;
        }
        let max = self.max_offset();
        if max <= 0.0 {
            self.progress = 0.0;
            return;
        }
        let offset = self.surface.scroll_offset();
        self.publish(offset, max);
    }

    /// Adopt the container's offset as both current and target while idle
    ///
    /// Hosts call this after moving the container themselves, so the next
    /// animation starts from where the content actually is. Ignored while a
    /// frame is outstanding.
    pub fn sync_to_surface(&mut self) {
        if self.detached || self.is_animating() {
            return;
        }
        let offset = self.surface.scroll_offset();
        self.state = ScrollState {
            current_offset: offset,
            target_offset: offset,
        };
    }

    /// Cancel any outstanding frame and stop reacting to input
    ///
    /// Idempotent. Also runs on drop.
    pub fn teardown(&mut self) {
        if self.detached {
            return;
        }
        if let Phase::Animating(handle) = self.phase {
            self.scheduler.cancel_frame(handle);
            debug!(?handle, "Cancelled pending scroll frame");
        }
        self.phase = Phase::Idle;
        self.detached = true;
        debug!("Scroll choreographer torn down");
    }

    /// Replace the registered sections after a re-layout
    ///
    /// The active section is re-resolved against the new keys and stays put
    /// when none of them lies under the viewport center.
    pub fn set_sections<I, K>(&mut self, sections: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<SectionId>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self.on_native_scroll_or_resize();
    }

    /// Progress through the scrollable width, in [0, 1]
    #[inline]
    pub fn progress_ratio(&self) -> f64 {
        self.progress
    }

    /// Section under the viewport center, once one has been entered
    #[inline]
    pub fn active_section(&self) -> Option<&SectionId> {
        self.tracker.active()
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Largest reachable offset for the current geometry
    pub fn max_offset(&self) -> f64 {
        max_offset(self.surface.geometry())
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.state.current_offset,
            target: self.state.target_offset,
            progress: self.progress,
            active: self.tracker.active().cloned(),
            animating: self.is_animating(),
        }
    }

    /// Request a frame unless one is already outstanding
    ///
    /// A refused request is not retried; the next input will try again.
    fn ensure_scheduled(&mut self) -> bool {
        if let Phase::Animating(_) = self.phase {
            return true;
        }
        match self.scheduler.request_frame() {
            Ok(handle) => {
                self.phase = Phase::Animating(handle);
                true
            }
            Err(e) => {
                warn!("Frame request failed, scroll will not animate: {}", e);
                false
            }
        }
    }

    fn publish(&mut self, offset: f64, max: f64) {
        self.progress = progress_ratio(offset, max);
        if max <= 0.0 {
            return;
        }
        let center = viewport_center(offset, self.surface.geometry().visible_width);
        let boundaries = live_boundaries(&self.surface, &self.sections);
        if self.tracker.update(&boundaries, center) {
            if let Some(active) = self.tracker.active() {
                debug!(section = %active, "Active section changed");
            }
        }
    }
}

impl<S: ScrollSurface, F: FrameScheduler> Drop for Choreographer<S, F> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::scroll::config::ScrollConfigExt;
    use crate::scroll::host::{Geometry, SectionLayout};
    use crate::Error;

    struct FakeSurface {
        offset: f64,
        geometry: Geometry,
        layouts: HashMap<SectionId, SectionLayout>,
        writes: usize,
    }

    impl FakeSurface {
        fn new(scrollable: f64, visible: f64) -> Self {
            Self {
                offset: 0.0,
                geometry: Geometry {
                    scrollable_width: scrollable,
                    visible_width: visible,
                },
                layouts: HashMap::new(),
                writes: 0,
            }
        }

        fn with_section(mut self, key: &str, start: f64, width: f64) -> Self {
            self.layouts.insert(
                SectionId::new(key),
                SectionLayout {
                    start_offset: start,
                    width,
                },
            );
            self
        }
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: f64) {
            self.offset = offset;
            self.writes += 1;
        }

        fn geometry(&self) -> Geometry {
            self.geometry
        }

        fn section_layout(&self, key: &SectionId) -> Option<SectionLayout> {
            self.layouts.get(key).copied()
        }
    }

    #[derive(Default)]
    struct SchedulerLog {
        next_id: u64,
        pending: Vec<FrameHandle>,
        requested: usize,
        cancelled: Vec<FrameHandle>,
        unavailable: bool,
    }

    /// Records every request and cancel; frames fire only when the test says so
    #[derive(Clone, Default)]
    struct MockScheduler(Rc<RefCell<SchedulerLog>>);

    impl MockScheduler {
        fn unavailable() -> Self {
            let scheduler = Self::default();
            scheduler.0.borrow_mut().unavailable = true;
            scheduler
        }

        fn take_pending(&self) -> Option<FrameHandle> {
            let mut log = self.0.borrow_mut();
            if log.pending.is_empty() {
                None
            } else {
                Some(log.pending.remove(0))
            }
        }

        fn pending(&self) -> usize {
            self.0.borrow().pending.len()
        }

        fn requested(&self) -> usize {
            self.0.borrow().requested
        }
    }

    impl FrameScheduler for MockScheduler {
        fn request_frame(&mut self) -> crate::Result<FrameHandle> {
            let mut log = self.0.borrow_mut();
            log.requested += 1;
            if log.unavailable {
                return Err(Error::SchedulerUnavailable("no display".into()));
            }
            log.next_id += 1;
            let handle = FrameHandle(log.next_id);
            log.pending.push(handle);
            Ok(handle)
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let mut log = self.0.borrow_mut();
            if let Some(pos) = log.pending.iter().position(|h| *h == handle) {
                log.pending.remove(pos);
                log.cancelled.push(handle);
            }
        }
    }

    type TestChoreographer = Choreographer<FakeSurface, MockScheduler>;

    fn mount(surface: FakeSurface, sections: &[&str]) -> (TestChoreographer, MockScheduler) {
        let scheduler = MockScheduler::default();
        let choreo = Choreographer::initialize(
            surface,
            scheduler.clone(),
            sections.iter().copied(),
            ScrollConfig::default(),
        );
        (choreo, scheduler)
    }

    /// Fire the next pending frame the way a host event loop would
    fn fire(choreo: &mut TestChoreographer, scheduler: &MockScheduler) -> Option<StepOutcome> {
        scheduler.take_pending().map(|_| choreo.step())
    }

    fn run_to_settle(choreo: &mut TestChoreographer, scheduler: &MockScheduler) -> usize {
        let mut frames = 0;
        while let Some(outcome) = fire(choreo, scheduler) {
            frames += 1;
            assert!(frames < 1000, "animation never settled");
            if outcome == StepOutcome::Settled {
                break;
            }
        }
        frames
    }

    fn assert_in_bounds(choreo: &TestChoreographer) {
        let max = choreo.max_offset();
        let state = choreo.state();
        assert!(state.current_offset >= 0.0 && state.current_offset <= max, "{:?}", state);
        assert!(state.target_offset >= 0.0 && state.target_offset <= max, "{:?}", state);
        assert!((0.0..=1.0).contains(&choreo.progress_ratio()));
    }

    #[test]
    fn test_initialize_from_native_offset() {
        let mut surface = FakeSurface::new(1000.0, 200.0);
        surface.offset = 400.0;
        let (choreo, scheduler) = mount(surface, &[]);

        assert_eq!(choreo.state().current_offset, 400.0);
        assert_eq!(choreo.state().target_offset, 400.0);
        assert_eq!(choreo.progress_ratio(), 0.5);
        assert_eq!(choreo.phase(), Phase::Idle);
        assert_eq!(scheduler.requested(), 0);
    }

    #[test]
    fn test_clamping_after_every_step() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(1200.0, 200.0), &[]);
        let deltas = [300.0, -900.0, 2500.0, 40.0, -10.0, 5000.0, -7000.0, 120.0];

        for delta in deltas {
            choreo.on_wheel(WheelEvent::new(0.0, delta));
            for _ in 0..5 {
                if fire(&mut choreo, &scheduler).is_none() {
                    break;
                }
                assert_in_bounds(&choreo);
            }
        }
        run_to_settle(&mut choreo, &scheduler);
        assert_in_bounds(&choreo);
    }

    #[test]
    fn test_convergence_strictly_decreases() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(10_000.0, 100.0), &[]);
        choreo.navigate_to(5000.0);

        let mut prev_gap = f64::INFINITY;
        let mut frames = 0;
        loop {
            let outcome = fire(&mut choreo, &scheduler).expect("frame should be pending");
            frames += 1;
            let state = choreo.state();
            let gap = (state.target_offset - state.current_offset).abs();
            if outcome == StepOutcome::Settled {
                assert_eq!(gap, 0.0);
                break;
            }
            assert!(gap < prev_gap, "gap grew at frame {}", frames);
            prev_gap = gap;
        }

        assert!(frames <= choreo.config().frames_to_settle(5000.0) as usize);
        assert!(frames <= 64);
    }

    #[test]
    fn test_typical_distance_settles_within_sixty_frames() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(3000.0, 100.0), &[]);
        choreo.navigate_to(1000.0);
        let frames = run_to_settle(&mut choreo, &scheduler);
        assert!(frames <= 60, "took {} frames", frames);
        assert_eq!(choreo.state().current_offset, 1000.0);
    }

    #[test]
    fn test_settlement_snaps_exactly() {
        let mut surface = FakeSurface::new(1000.0, 100.0);
        surface.offset = 100.0;
        let (mut choreo, scheduler) = mount(surface, &[]);

        choreo.navigate_to(100.3);
        assert!(choreo.is_animating());
        assert_eq!(fire(&mut choreo, &scheduler), Some(StepOutcome::Settled));

        assert_eq!(choreo.state().current_offset, 100.3);
        assert_eq!(choreo.surface().offset, 100.3);
        assert!(!choreo.is_animating());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_progress_monotonic_over_one_run() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(900.0, 100.0), &[]);
        assert_eq!(choreo.progress_ratio(), 0.0);

        choreo.navigate_to(800.0);
        let mut prev = choreo.progress_ratio();
        while let Some(outcome) = fire(&mut choreo, &scheduler) {
            assert!(choreo.progress_ratio() >= prev);
            prev = choreo.progress_ratio();
            if outcome == StepOutcome::Settled {
                break;
            }
        }
        assert_eq!(choreo.progress_ratio(), 1.0);
    }

    #[test]
    fn test_degenerate_geometry_passes_through() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(200.0, 300.0), &[]);

        let disposition = choreo.on_wheel(WheelEvent::new(0.0, 120.0));
        assert_eq!(disposition, WheelDisposition::PassThrough);
        assert_eq!(choreo.state().target_offset, 0.0);
        assert_eq!(scheduler.requested(), 0);

        choreo.surface_mut().offset = 40.0;
        choreo.on_native_scroll_or_resize();
        assert_eq!(choreo.progress_ratio(), 0.0);
    }

    #[test]
    fn test_vertical_dominance_gating() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);

        let disposition = choreo.on_wheel(WheelEvent::new(10.0, 3.0));
        assert_eq!(disposition, WheelDisposition::PassThrough);
        assert_eq!(choreo.state().target_offset, 0.0);
        assert_eq!(scheduler.requested(), 0);

        let disposition = choreo.on_wheel(WheelEvent::new(3.0, 10.0));
        assert_eq!(disposition, WheelDisposition::Consumed);
        assert_eq!(choreo.state().target_offset, 10.0);
        assert!(choreo.is_animating());
    }

    #[test]
    fn test_wheel_events_accumulate_with_single_request() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);

        for _ in 0..4 {
            choreo.on_wheel(WheelEvent::new(0.0, 25.0));
        }
        assert_eq!(choreo.state().target_offset, 100.0);
        assert_eq!(scheduler.requested(), 1);
        assert_eq!(scheduler.pending(), 1);

        fire(&mut choreo, &scheduler);
        choreo.on_wheel(WheelEvent::new(0.0, 50.0));
        assert_eq!(choreo.state().target_offset, 150.0);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_extra_step_in_same_frame_keeps_one_request() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);
        choreo.navigate_to(500.0);

        assert_eq!(choreo.step(), StepOutcome::Continue);
        assert_eq!(choreo.step(), StepOutcome::Continue);
        assert_eq!(scheduler.pending(), 1);
        assert_in_bounds(&choreo);
    }

    #[test]
    fn test_step_while_idle_is_skipped() {
        let (mut choreo, _scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);
        assert_eq!(choreo.step(), StepOutcome::Skipped);
        assert_eq!(choreo.surface().writes, 0);
    }

    #[test]
    fn test_active_section_viewport_center_and_stickiness() {
        let surface = FakeSurface::new(250.0, 100.0)
            .with_section("a", 0.0, 100.0)
            .with_section("b", 100.0, 150.0);
        let (mut choreo, _scheduler) = mount(surface, &["a", "b"]);
        assert_eq!(choreo.active_section().map(|k| k.as_str()), Some("a"));

        // center = 70 + 100 / 2 = 120
        choreo.surface_mut().offset = 70.0;
        choreo.on_native_scroll_or_resize();
        assert_eq!(choreo.active_section().map(|k| k.as_str()), Some("b"));

        // Layout gap: sections moved away from the viewport
        choreo.surface_mut().layouts.clear();
        choreo.surface_mut().offset = 10.0;
        choreo.on_native_scroll_or_resize();
        assert_eq!(choreo.active_section().map(|k| k.as_str()), Some("b"));
    }

    #[test]
    fn test_active_section_follows_animation() {
        let surface = FakeSurface::new(300.0, 100.0)
            .with_section("a", 0.0, 100.0)
            .with_section("b", 100.0, 100.0)
            .with_section("c", 200.0, 100.0);
        let (mut choreo, scheduler) = mount(surface, &["a", "b", "c"]);

        assert!(choreo.navigate_to_section(&SectionId::new("c")));
        run_to_settle(&mut choreo, &scheduler);

        // Clamped to max offset 200, center 250 lies in c
        assert_eq!(choreo.state().current_offset, 200.0);
        assert_eq!(choreo.active_section().map(|k| k.as_str()), Some("c"));
        assert_eq!(choreo.progress_ratio(), 1.0);
    }

    #[test]
    fn test_teardown_cancels_pending_frame() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);
        choreo.on_wheel(WheelEvent::new(0.0, 200.0));
        assert_eq!(scheduler.pending(), 1);

        choreo.teardown();
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.0.borrow().cancelled.len(), 1);

        // Host loop finds nothing to fire
        let fired = std::iter::from_fn(|| fire(&mut choreo, &scheduler)).count();
        assert_eq!(fired, 0);
        assert_eq!(choreo.surface().writes, 0);

        // Detached: input is ignored and steps do nothing
        assert_eq!(
            choreo.on_wheel(WheelEvent::new(0.0, 50.0)),
            WheelDisposition::PassThrough
        );
        assert_eq!(choreo.step(), StepOutcome::Skipped);
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let scheduler = MockScheduler::default();
        {
            let mut choreo = Choreographer::initialize(
                FakeSurface::new(1000.0, 100.0),
                scheduler.clone(),
                Vec::<SectionId>::new(),
                ScrollConfig::default(),
            );
            choreo.navigate_to(300.0);
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.0.borrow().cancelled.len(), 1);
    }

    #[test]
    fn test_navigate_matches_wheel() {
        let (mut by_nav, nav_scheduler) = mount(FakeSurface::new(2000.0, 100.0), &[]);
        by_nav.navigate_to(500.0);
        run_to_settle(&mut by_nav, &nav_scheduler);

        let (mut by_wheel, wheel_scheduler) = mount(FakeSurface::new(2000.0, 100.0), &[]);
        for delta in [120.0, 80.0, 200.0, 100.0] {
            by_wheel.on_wheel(WheelEvent::new(0.0, delta));
        }
        run_to_settle(&mut by_wheel, &wheel_scheduler);

        let a = by_nav.state().current_offset;
        let b = by_wheel.state().current_offset;
        assert!((a - 500.0).abs() < 1e-9);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_navigate_out_of_range_is_clamped() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(600.0, 100.0), &[]);
        choreo.navigate_to(-300.0);
        fire(&mut choreo, &scheduler);
        assert_eq!(choreo.state().target_offset, 0.0);

        choreo.navigate_to(9000.0);
        run_to_settle(&mut choreo, &scheduler);
        assert_eq!(choreo.state().current_offset, 500.0);
    }

    #[test]
    fn test_missing_section_layout_is_noop() {
        let surface = FakeSurface::new(1000.0, 100.0).with_section("a", 0.0, 500.0);
        let (mut choreo, scheduler) = mount(surface, &["a", "ghost"]);
        choreo.navigate_to(250.0);
        let before = choreo.state();

        assert!(!choreo.navigate_to_section(&SectionId::new("ghost")));
        assert_eq!(choreo.state(), before);
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_scheduler_unavailable_degrades_silently() {
        let scheduler = MockScheduler::unavailable();
        let mut choreo = Choreographer::initialize(
            FakeSurface::new(1000.0, 100.0),
            scheduler.clone(),
            Vec::<SectionId>::new(),
            ScrollConfig::default(),
        );

        assert_eq!(
            choreo.on_wheel(WheelEvent::new(0.0, 100.0)),
            WheelDisposition::Consumed
        );
        assert!(!choreo.is_animating());
        assert_eq!(scheduler.requested(), 1);
        assert_eq!(choreo.surface().offset, 0.0);

        // No automatic retry; the next input tries once more
        assert_eq!(choreo.step(), StepOutcome::Skipped);
        assert_eq!(scheduler.requested(), 1);
        choreo.on_wheel(WheelEvent::new(0.0, 100.0));
        assert_eq!(scheduler.requested(), 2);
    }

    #[test]
    fn test_geometry_shrink_mid_flight() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(2000.0, 100.0), &[]);
        choreo.navigate_to(1800.0);
        for _ in 0..15 {
            fire(&mut choreo, &scheduler);
        }
        assert!(choreo.state().current_offset > 500.0);

        choreo.surface_mut().geometry.scrollable_width = 600.0;
        fire(&mut choreo, &scheduler);
        assert_in_bounds(&choreo);

        run_to_settle(&mut choreo, &scheduler);
        assert_eq!(choreo.state().current_offset, 500.0);
    }

    #[test]
    fn test_set_sections_takes_effect_and_stays_sticky() {
        let mut surface = FakeSurface::new(250.0, 100.0)
            .with_section("a", 0.0, 100.0)
            .with_section("b", 100.0, 150.0);
        surface.offset = 70.0;
        let (mut choreo, _scheduler) = mount(surface, &["a"]);
        // center 120 lies outside the only registered section
        assert_eq!(choreo.active_section(), None);

        choreo.set_sections(["a", "b"]);
        assert_eq!(choreo.sections().len(), 2);
        assert_eq!(choreo.active_section().map(|k| k.as_str()), Some("b"));

        choreo.set_sections(["ghost"]);
        assert_eq!(choreo.sections(), &[SectionId::new("ghost")]);
        assert_eq!(choreo.active_section().map(|k| k.as_str()), Some("b"));
    }

    #[test]
    fn test_sync_to_surface_while_idle() {
        let (mut choreo, scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);
        choreo.surface_mut().offset = 300.0;
        choreo.on_native_scroll_or_resize();
        choreo.sync_to_surface();
        assert_eq!(choreo.state().current_offset, 300.0);
        assert_eq!(choreo.state().target_offset, 300.0);

        // Next gesture continues from the container offset
        choreo.on_wheel(WheelEvent::new(0.0, 20.0));
        assert_eq!(choreo.state().target_offset, 320.0);
        fire(&mut choreo, &scheduler);
        assert!(choreo.surface().offset > 300.0);
    }

    #[test]
    fn test_sync_to_surface_ignored_while_animating() {
        let (mut choreo, _scheduler) = mount(FakeSurface::new(1000.0, 100.0), &[]);
        choreo.navigate_to(400.0);
        choreo.surface_mut().offset = 50.0;
        choreo.sync_to_surface();
        assert_eq!(choreo.state().current_offset, 0.0);
        assert_eq!(choreo.state().target_offset, 400.0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let surface = FakeSurface::new(400.0, 100.0).with_section("only", 0.0, 400.0);
        let (mut choreo, _scheduler) = mount(surface, &["only"]);
        choreo.navigate_to(150.0);

        let snapshot = choreo.snapshot();
        assert_eq!(snapshot.offset, 0.0);
        assert_eq!(snapshot.target, 150.0);
        assert!(snapshot.animating);
        assert_eq!(snapshot.active, Some(SectionId::new("only")));
    }
}
