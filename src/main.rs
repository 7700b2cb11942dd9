mod demo;

use demo::app::DemoApp;
use demo::config::Config;
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();
}

fn main() -> eframe::Result<()> {
    let config = Config::load();
    init_logging(&config);

    if let Err(e) = Config::create_default() {
        warn!(error = %e, "could not write default config");
    }
    info!(push_policy = ?config.navigation.push_policy, "starting navstack demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("navstack"),
        ..Default::default()
    };

    eframe::run_native(
        "navstack",
        options,
        Box::new(move |cc| {
            let app = DemoApp::new(&config)?;
            cc.egui_ctx
                .set_visuals(demo::style::Theme::from_mode(&config.theme.mode).visuals());
            Ok(Box::new(app))
        }),
    )
}
