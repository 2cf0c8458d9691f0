use egui::{ComboBox, Context};
use image::ImageReader;
use tracing::error;

use super::App;
use crate::types::{Metric, ALL_DEVELOPERS};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context) {
    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Display Options");
        ui.separator();

        // Developer selection
        ui.label("Developer:");
        let developers = app.developers.clone();
        let prev_developer = app.selected_developer.clone();
        let selected_text = prev_developer.as_deref().unwrap_or(ALL_DEVELOPERS);
        ComboBox::new("developer_selector", "")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.selected_developer, None, ALL_DEVELOPERS);
                for developer in &developers {
                    ui.selectable_value(
                        &mut app.selected_developer,
                        Some(developer.clone()),
                        developer,
                    );
                }
            });

        // Handle developer change
        if prev_developer != app.selected_developer {
            app.apply_filter();
        }

        ui.separator();

        // Metric selection buttons
        ui.label("Metric:");
        for metric in Metric::ALL {
            if ui.button(metric.label()).clicked() && app.selected_metric != metric {
                app.selected_metric = metric;
                app.apply_filter();
            }
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Developer Activity Dashboard");
        ui.separator();

        if app.is_fetching {
            ui.label("Loading activity data...");
            ui.spinner();
        } else if let Some(fetched_at) = app.fetched_at {
            ui.label(format!(
                "{} records across {} developers, loaded at {}",
                app.activities.len(),
                app.developers.len(),
                fetched_at.format("%H:%M:%S")
            ));
        }

        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(texture) = &app.plot_texture {
                ui.image(texture);
            }

            ui.separator();
            draw_totals_table(app, ui);
        });
    });

    // Update plot if needed
    if app.update_needed {
        if let Err(e) = crate::plotting::generate_plot(app) {
            error!("plot rendering failed: {}", e);
        } else {
            load_plot_texture(app, ctx);
        }
        app.update_needed = false;
    }
}

fn draw_totals_table(app: &App, ui: &mut egui::Ui) {
    ui.label("Totals by developer:");
    egui::Grid::new("totals_table").striped(true).show(ui, |ui| {
        ui.label("Developer");
        for metric in Metric::ALL {
            ui.label(metric.label());
        }
        ui.end_row();

        for totals in app.visible_totals() {
            ui.label(&totals.name);
            for metric in Metric::ALL {
                ui.label(totals.get(metric).to_string());
            }
            ui.end_row();
        }
    });
}

fn load_plot_texture(app: &mut App, ctx: &Context) {
    if let Ok(image) = ImageReader::open(&app.plot_path).and_then(|reader| {
        reader
            .decode()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }) {
        let size = [image.width() as usize, image.height() as usize];
        let pixels = image.to_rgba8();
        let pixels = pixels.as_flat_samples();
        let texture = ctx.load_texture(
            "plot_texture",
            egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );
        app.plot_texture = Some(texture);
    } else {
        error!("failed to load plot image");
    }
}
