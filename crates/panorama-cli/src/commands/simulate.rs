use anyhow::Result;
use serde::Serialize;

use panorama_core::scroll::{
    Choreographer, ScrollSnapshot, ScrollSurface, SectionId, StepOutcome, WheelEvent,
};
use panorama_core::{AppConfig, Error};
use panorama_tui::scheduler::TickScheduler;
use panorama_tui::surface::StripSurface;

pub struct SimulateOptions {
    pub width: u16,
    pub start: f64,
    pub wheel: Vec<f64>,
    pub navigate: Option<String>,
    pub max_frames: u32,
}

/// Published state after one frame
#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub frame: u32,
    #[serde(flatten)]
    pub snapshot: ScrollSnapshot,
}

pub fn run(config: &AppConfig, options: SimulateOptions) -> Result<()> {
    for record in simulate(config, &options)? {
        let line = serde_json::to_string(&record)?;
        println!("{}", line);
    }
    Ok(())
}

/// Drive the choreographer frame by frame without a terminal
///
/// Frame 0 is the mounted state. Wheel deltas are delivered one per frame,
/// then the navigation command, then frames run until the animation settles.
pub fn simulate(config: &AppConfig, options: &SimulateOptions) -> Result<Vec<FrameRecord>> {
    let navigate = match &options.navigate {
        Some(key) if config.section(key).is_none() => {
            return Err(Error::UnknownSection(key.clone()).into());
        }
        Some(key) => Some(SectionId::new(key.clone())),
        None => None,
    };

    let mut surface = StripSurface::new(&config.sections, options.width);
    surface.set_scroll_offset(options.start);
    let keys = config.sections.iter().map(|s| SectionId::new(s.key.clone()));
    let mut choreo =
        Choreographer::initialize(surface, TickScheduler::new(), keys, config.scroll.clone());

    let mut records = vec![FrameRecord {
        frame: 0,
        snapshot: choreo.snapshot(),
    }];
    let mut wheel = options.wheel.iter().copied();
    let mut navigate = navigate;
    let mut frame = 0;

    while frame < options.max_frames {
        if let Some(delta_y) = wheel.next() {
            choreo.on_wheel(WheelEvent::new(0.0, delta_y));
        } else if let Some(key) = navigate.take() {
            choreo.navigate_to_section(&key);
        }

        let outcome = match choreo.scheduler_mut().take_due() {
            Some(_) => choreo.step(),
            None => StepOutcome::Skipped,
        };
        frame += 1;
        records.push(FrameRecord {
            frame,
            snapshot: choreo.snapshot(),
        });

        let input_left = wheel.len() > 0 || navigate.is_some();
        if !input_left && outcome != StepOutcome::Continue {
            break;
        }
    }

    choreo.teardown();
    Ok(records)
}
