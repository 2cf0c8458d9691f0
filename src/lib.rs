//! # Developer Activity Dashboard Library
//!
//! `devdash` is a library for fetching and visualizing developer activity
//! metrics. It retrieves activity records from a remote JSON feed and renders
//! an interactive pie chart and per-developer totals table.
//!
//! ## Features
//!
//! - One startup fetch from a configured JSON endpoint
//! - Tolerant payload parsing (wrapped `activities` object or bare array)
//! - Group-by-date aggregation with an "All developers" view
//! - Per-developer filtering of chart and totals table
//! - Pie chart rendering shown as an egui texture
//!
//! ## Example
//!
//! ```no_run
//! use devdash::app::{App, AppWrapper};
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//!
//! // Create a new application instance
//! let app = Arc::new(Mutex::new(App::default()));
//! let app_wrapper = AppWrapper { app };
//!
//! // Run the application with eframe
//! eframe::run_native(
//!     "Developer Activity Dashboard",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(app_wrapper))),
//! ).unwrap();
//! ```

pub mod app;
pub mod config;
pub mod fetch;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as DashboardApp;
pub use types::{Activity, DeveloperTotals, Metric};
