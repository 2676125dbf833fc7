//! Reel - highlight carousel viewer
//!
//! Entry point and main application loop.
//!
//! Usage: `reel [catalog.json] [config.json]`. Without a catalog the
//! built-in highlights are shown.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui;
use reel_catalog::{CatalogFile, SlideCatalog};
use reel_core::Viewport;
use reel_playback::{Carousel, CarouselConfig, SimulatedMedia};
use reel_ui::{CarouselView, Theme};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Reel starting...");

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let catalog = load_catalog(args.next().as_deref())?;
    let config = load_config(args.next().as_deref())?;
    info!(
        clips = catalog.len(),
        total_seconds = catalog.total_duration(),
        readiness_threshold = config.readiness_threshold,
        "Catalog loaded"
    );

    let carousel = Carousel::simulated(catalog, config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Reel"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Reel",
        options,
        Box::new(move |cc| Ok(Box::new(ReelApp::new(cc, carousel)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<SlideCatalog> {
    match path {
        Some(path) => {
            let file = CatalogFile::load(path)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            Ok(file.catalog)
        }
        None => Ok(SlideCatalog::highlights()),
    }
}

fn load_config(path: Option<&Path>) -> Result<CarouselConfig> {
    match path {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(CarouselConfig::default()),
    }
}

struct ReelApp {
    carousel: Carousel<SimulatedMedia>,
    view: CarouselView,
}

impl ReelApp {
    fn new(cc: &eframe::CreationContext<'_>, carousel: Carousel<SimulatedMedia>) -> Self {
        Theme::apply(&cc.egui_ctx);
        let view = CarouselView::new(carousel.clip_count());
        Self { carousel, view }
    }
}

impl eframe::App for ReelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = ctx.screen_rect();
        let viewport = Viewport::new(screen.width(), screen.height());
        let dt = f64::from(ctx.input(|i| i.stable_dt));

        // The window is the whole page, so the carousel is visible as soon
        // as the first frame is drawn.
        if !self.carousel.is_visible() {
            self.carousel.set_visible(true);
        }
        self.carousel.step_simulated(dt, viewport);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Theme::bg()))
            .show(ctx, |ui| {
                let response = self.view.show(ui, &self.carousel);
                if response.control_clicked {
                    self.carousel.click_control();
                }
            });

        ctx.request_repaint();
    }
}
