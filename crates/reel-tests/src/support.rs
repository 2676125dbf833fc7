//! Shared fixtures for the integration tests.

use reel_catalog::{ClipDescriptor, SlideCatalog};
use reel_core::Viewport;
use reel_playback::{Carousel, CarouselConfig, MediaCommand, SimulatedMedia};

/// Large desktop viewport: default indicator width applies.
pub const WIDE: Viewport = Viewport::new(1920.0, 1440.0);

/// Exactly representable frame step, so clip boundaries land on a frame.
pub const STEP: f64 = 0.25;

pub fn catalog(durations: &[f64]) -> SlideCatalog {
    SlideCatalog::new(
        durations
            .iter()
            .enumerate()
            .map(|(i, d)| {
                ClipDescriptor::new(i as u32 + 1, format!("media/clip{}.mp4", i), *d)
                    .with_captions([format!("Clip {}", i + 1)])
            })
            .collect(),
    )
    .unwrap()
}

/// Simulated carousel whose metadata all arrives on the first step.
pub fn carousel(durations: &[f64]) -> Carousel<SimulatedMedia> {
    Carousel::simulated(catalog(durations), CarouselConfig::default()).unwrap()
}

/// Simulated carousel with a per-clip metadata delay.
pub fn carousel_with_delays(durations: &[f64], delays: &[f64]) -> Carousel<SimulatedMedia> {
    let mut c = Carousel::new(catalog(durations), CarouselConfig::default()).unwrap();
    for (index, (duration, delay)) in durations.iter().zip(delays).enumerate() {
        c.mount_media(index, SimulatedMedia::new(*duration).with_metadata_delay(*delay))
            .unwrap();
        c.mount_indicator(index).unwrap();
    }
    c
}

/// Load metadata, bring the carousel into view and return it playing.
pub fn started(durations: &[f64]) -> Carousel<SimulatedMedia> {
    let mut c = carousel(durations);
    c.step_simulated(0.0, WIDE);
    c.set_visible(true);
    c
}

pub fn run(c: &mut Carousel<SimulatedMedia>, steps: usize) {
    for _ in 0..steps {
        c.step_simulated(STEP, WIDE);
    }
}

pub fn plays(c: &Carousel<SimulatedMedia>, index: usize) -> usize {
    c.media(index)
        .map(|m| m.commands().iter().filter(|cmd| **cmd == MediaCommand::Play).count())
        .unwrap_or(0)
}
