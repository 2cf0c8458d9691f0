//! Developer Activity Dashboard
//!
//! A GUI application for visualizing developer activity metrics fetched from
//! a remote JSON feed.

use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing::{error, info, warn};

use devdash::app::{App, AppWrapper};
use devdash::config::Config;
use devdash::fetch;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("failed to load config, using defaults: {}", e);
        Config::default()
    });

    // Initialize the Tokio runtime
    let rt = Runtime::new()?;
    rt.block_on(async {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_min_inner_size([800.0, 600.0])
                .with_title("Developer Activity Dashboard"),
            ..Default::default()
        };

        let app: Arc<Mutex<App>> = Arc::new(Mutex::new(App::default()));

        // The record set is fetched exactly once per launch; interactions
        // only re-derive views from whatever this task installs.
        spawn_startup_fetch(Arc::clone(&app), config);

        if let Err(e) = eframe::run_native(
            "Developer Activity Dashboard",
            options,
            Box::new(|cc| {
                // Configure default fonts and style
                let fonts = egui::FontDefinitions::default();
                cc.egui_ctx.set_fonts(fonts);

                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        ) {
            error!("error running application: {}", e);
        }
    });
    Ok(())
}

fn spawn_startup_fetch(app: Arc<Mutex<App>>, config: Config) {
    if let Ok(mut app) = app.lock() {
        app.is_fetching = true;
    }

    tokio::spawn(async move {
        match fetch::fetch_activities(&config.source.url, config.source.timeout()).await {
            Ok(records) => {
                info!("loaded {} activity records", records.len());
                let mut app = app.lock().unwrap();
                app.update_with_activities(records);
            }
            Err(e) => {
                // Degrade to the empty initial state; nothing surfaces in the UI.
                error!("failed to fetch activities: {}", e);
            }
        }
        let mut app = app.lock().unwrap();
        app.is_fetching = false;
    });
}
