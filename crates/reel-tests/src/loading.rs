//! Catalog and config files feeding a running carousel.

use reel_catalog::{CatalogFile, SlideCatalog};
use reel_core::{Color, Length, ReelError};
use reel_playback::{Carousel, CarouselConfig, SimulatedMedia};

use crate::support::{catalog, run, WIDE};

#[test]
fn saved_catalog_and_config_drive_playback() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let config_path = dir.path().join("config.json");

    CatalogFile::new(catalog(&[1.0, 2.0]))
        .save(&catalog_path)
        .unwrap();
    std::fs::write(
        &config_path,
        r##"{
            "readiness_threshold": 2,
            "layout": { "default_width": { "px": 80.0 } },
            "active_color": "#ff0000"
        }"##,
    )
    .unwrap();

    let file = CatalogFile::load(&catalog_path).unwrap();
    let config = CarouselConfig::load(&config_path).unwrap();
    assert_eq!(config.readiness_threshold, 2);
    assert_eq!(config.slide_transition_seconds, 2.0);

    let mut c = Carousel::simulated(file.catalog, config).unwrap();
    c.step_simulated(0.0, WIDE);
    c.set_visible(true);
    run(&mut c, 1);

    let v = c.indicator(0).unwrap();
    assert_eq!(v.container_width, Length::Px(80.0));
    assert_eq!(v.fill_color, Color::rgb(255, 0, 0));
    assert_eq!(v.fill_percent, 25);
}

#[test]
fn legacy_slide_table_plays() {
    let legacy = br#"[
        { "id": 7, "video": "assets/videos/intro.mp4", "videoDuration": 0.5, "textLists": ["Intro"] }
    ]"#;
    let file = CatalogFile::from_json(legacy).unwrap();
    assert_eq!(file.catalog.get(0).unwrap().caption_lines.as_slice(), &["Intro"]);

    let mut c = Carousel::simulated(file.catalog, CarouselConfig::default()).unwrap();
    assert_eq!(c.readiness().threshold(), 1);
    c.step_simulated(0.0, WIDE);
    c.set_visible(true);
    run(&mut c, 2);
    assert!(c.state().is_last_clip);
}

#[test]
fn unversioned_catalog_object_is_rejected() {
    let unversioned = br#"{ "catalog": { "clips": [
        { "id": 1, "source_uri": "a.mp4", "duration_seconds": 1.0 }
    ] } }"#;
    let err = CatalogFile::from_json(unversioned).unwrap_err();
    assert!(matches!(err, ReelError::Serialization(ref msg) if msg.contains("version")));
}

#[test]
fn unknown_config_field_is_rejected() {
    let err = CarouselConfig::from_json(br#"{ "readiness": 2 }"#).unwrap_err();
    assert!(matches!(err, ReelError::Config(_)));
}

#[test]
fn highlights_run_end_to_end() {
    let total = SlideCatalog::highlights().total_duration();
    let mut c: Carousel<SimulatedMedia> =
        Carousel::simulated(SlideCatalog::highlights(), CarouselConfig::default()).unwrap();
    c.step_simulated(0.0, WIDE);
    c.set_visible(true);

    let dt = 1.0 / 60.0;
    let frames = (total / dt).ceil() as usize + 60;
    for _ in 0..frames {
        c.step_simulated(dt, WIDE);
    }
    assert!(c.state().is_last_clip);
    assert!((0..c.clip_count()).all(|i| c.indicator(i).unwrap().fill_percent == 100));
}
