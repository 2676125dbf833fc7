//! Readiness gating with slow and missing metadata.

use reel_playback::{MediaCommand, MediaElement, Phase};

use crate::support::{carousel_with_delays, plays, run};

const DURATIONS: [f64; 4] = [10.0; 4];

#[test]
fn staggered_metadata_delays_first_play() {
    let mut c = carousel_with_delays(&DURATIONS, &[0.0, 0.5, 1.0, 2.0]);
    c.set_visible(true);
    assert_eq!(c.phase(), Phase::AwaitingReadiness);

    run(&mut c, 7);
    assert_eq!(c.readiness().count(), 3);
    assert!(c.media(0).unwrap().commands().is_empty());
    assert_eq!(c.indicator(0).unwrap().fill_percent, 0);

    // The fourth clip's metadata lands on this step.
    run(&mut c, 1);
    assert!(c.readiness().is_ready());
    assert_eq!(c.media(0).unwrap().commands(), &[MediaCommand::Play]);
    assert_eq!(c.phase(), Phase::Playing);

    run(&mut c, 4);
    assert_eq!(c.media(0).unwrap().current_time(), 1.0);
    assert_eq!(c.indicator(0).unwrap().fill_percent, 10);
}

#[test]
fn missing_metadata_blocks_playback() {
    let mut c = carousel_with_delays(&DURATIONS, &[0.0, 0.0, 0.0, f64::INFINITY]);
    c.set_visible(true);
    run(&mut c, 200);

    assert_eq!(c.readiness().count(), 3);
    assert_eq!(c.phase(), Phase::AwaitingReadiness);
    assert_eq!(plays(&c, 0), 0);
    assert_eq!(c.state().active_index, 0);
    assert_eq!(c.progress_percent(), Some(0));
    assert_eq!(c.indicator(0).unwrap().fill_percent, 0);
}

#[test]
fn pause_before_readiness_is_honoured() {
    let mut c = carousel_with_delays(&DURATIONS, &[0.0, 0.0, 0.0, 1.0]);
    c.set_visible(true);
    c.click_control();
    assert!(!c.state().is_playing);

    run(&mut c, 4);
    assert!(c.readiness().is_ready());
    assert_eq!(c.media(0).unwrap().commands(), &[MediaCommand::Pause]);
    assert_eq!(c.phase(), Phase::Paused);

    c.click_control();
    run(&mut c, 1);
    assert_eq!(plays(&c, 0), 1);
    assert!(!c.media(0).unwrap().is_paused());
}

#[test]
fn metadata_order_does_not_matter() {
    let mut c = carousel_with_delays(&DURATIONS, &[2.0, 0.0, 0.5, 1.0]);
    c.set_visible(true);
    run(&mut c, 7);
    assert_eq!(plays(&c, 0), 0);
    run(&mut c, 1);
    assert_eq!(plays(&c, 0), 1);
}
