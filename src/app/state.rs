use chrono::{DateTime, Local};
use eframe::App as EApp;
use egui::TextureHandle;
use std::sync::{Arc, Mutex};

use crate::types::{Activity, DeveloperTotals, Metric};
use crate::utils::{filter_activities, totals_by_developer, unique_developers};

/// Main application state
#[derive(Clone)]
pub struct App {
    /// Full record set as fetched; written once by the fetch task.
    pub activities: Vec<Activity>,
    /// Derived chart view for the current selection.
    pub filtered: Vec<Activity>,
    pub developers: Vec<String>,
    pub developer_totals: Vec<DeveloperTotals>,
    pub selected_metric: Metric,
    /// `None` means the "All" developers view.
    pub selected_developer: Option<String>,
    pub plot_path: String,
    pub plot_texture: Option<TextureHandle>,
    pub update_needed: bool,
    pub is_fetching: bool,
    pub fetched_at: Option<DateTime<Local>>,
}

impl App {
    /// Install a freshly fetched record set and rebuild every derived view.
    pub fn update_with_activities(&mut self, records: Vec<Activity>) {
        self.developers = unique_developers(&records);
        self.developer_totals = totals_by_developer(&records);
        self.activities = records;
        self.fetched_at = Some(Local::now());
        self.apply_filter();
    }

    /// Recompute the chart view from the current selection wholesale and
    /// flag the chart for redraw.
    pub fn apply_filter(&mut self) {
        self.filtered = filter_activities(&self.activities, self.selected_developer.as_deref());
        self.update_needed = true;
    }

    /// Totals rows for the table, narrowed to the selected developer when
    /// one is chosen.
    pub fn visible_totals(&self) -> impl Iterator<Item = &DeveloperTotals> {
        self.developer_totals
            .iter()
            .filter(move |row| match &self.selected_developer {
                Some(name) => &row.name == name,
                None => true,
            })
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            activities: Vec::new(),
            filtered: Vec::new(),
            developers: Vec::new(),
            developer_totals: Vec::new(),
            selected_metric: Metric::Commits,
            selected_developer: None,
            plot_path: "activity_chart.png".to_string(),
            plot_texture: None,
            update_needed: false,
            is_fetching: false,
            fetched_at: None,
        }
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx);
        } else {
            tracing::error!("failed to acquire app lock in update");
        }
    }
}
