use lru::LruCache;
use once_cell::sync::Lazy;
use plotters::prelude::*;
use std::error::Error;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::app::App;
use crate::types::Metric;

use super::styles::{slice_color, ChartTheme};

pub type PlotError = Box<dyn Error + Send + Sync>;

// Rendered plots are small PNGs; keep the most recent ones around for five
// minutes so flipping back to a recent selection skips a re-render.
static PLOT_CACHE: Lazy<Mutex<LruCache<PlotCacheKey, (Vec<u8>, Instant)>>> =
    Lazy::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(10).unwrap()))); // Cache up to 10 plots

const CACHE_TTL: Duration = Duration::from_secs(300);

const PLOT_WIDTH: u32 = 640;
const PLOT_HEIGHT: u32 = 480;

#[derive(Hash, Eq, PartialEq)]
struct PlotCacheKey {
    metric: Metric,
    developer: Option<String>,
    data_hash: u64,
}

impl PlotCacheKey {
    fn new(app: &App) -> Self {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        app.filtered.hash(&mut hasher);

        Self {
            metric: app.selected_metric,
            developer: app.selected_developer.clone(),
            data_hash: hasher.finish(),
        }
    }
}

/// Render the pie chart for the current selection into `app.plot_path`.
pub fn generate_plot(app: &App) -> Result<(), PlotError> {
    let cache_key = PlotCacheKey::new(app);

    // Try to get from cache first
    if let Ok(mut cache) = PLOT_CACHE.lock() {
        if let Some((png, rendered_at)) = cache.get(&cache_key) {
            if rendered_at.elapsed() < CACHE_TTL {
                std::fs::write(&app.plot_path, png)?;
                return Ok(());
            }
        }
    }

    render_pie(app)?;

    // Cache the encoded result
    let png = std::fs::read(&app.plot_path)?;
    if let Ok(mut cache) = PLOT_CACHE.lock() {
        cache.put(cache_key, (png, Instant::now()));
    }

    Ok(())
}

/// Internal function to draw the pie onto the bitmap backend
fn render_pie(app: &App) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let root = BitMapBackend::new(&app.plot_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&theme.background_color)?;

    let title = format!("Developer Activities: {}", app.selected_metric.label());
    root.titled(
        &title,
        ("sans-serif", 28).into_font().color(&theme.text_color),
    )?;

    let sizes: Vec<f64> = app
        .filtered
        .iter()
        .map(|row| app.selected_metric.value(row) as f64)
        .collect();
    let total: f64 = sizes.iter().sum();

    // A pie with no slices (or only zero-sized ones) renders a placeholder.
    if total == 0.0 {
        root.draw(&Text::new(
            "No activity data",
            (
                PLOT_WIDTH as i32 / 2 - 80,
                PLOT_HEIGHT as i32 / 2,
            ),
            ("sans-serif", 24).into_font().color(&theme.text_color),
        ))?;
        root.present()?;
        return Ok(());
    }

    let labels: Vec<String> = app.filtered.iter().map(|row| row.date.clone()).collect();
    let colors: Vec<RGBColor> = (0..sizes.len()).map(slice_color).collect();

    let center = (PLOT_WIDTH as i32 / 2, PLOT_HEIGHT as i32 / 2 + 20);
    let radius = 150.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 16).into_font().color(&theme.text_color));
    pie.percentages(("sans-serif", 12).into_font().color(&theme.text_color));
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
