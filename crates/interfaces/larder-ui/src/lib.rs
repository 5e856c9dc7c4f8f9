mod app;
mod components;
mod screens;
mod theme;
mod utils;

use larder_api::HttpRecipeBackend;
use larder_app_core::{AppKernel, AppStore};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> anyhow::Result<()> {
    setup_logging();

    let backend = HttpRecipeBackend::from_env()?;
    let kernel = AppKernel::new(AppStore::default(), backend);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([480.0, 560.0])
            .with_title("LARDER // RECIPES"),
        ..Default::default()
    };

    eframe::run_native(
        "Larder",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::LarderApp::new(kernel)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("ui loop failed: {e}"))?;

    Ok(())
}
