/*!
 * GUI application for bookdash - the hotel bookings dashboard
 *
 * A desktop front end for the two dashboard charts:
 * - A chart selector (None / Amount Incoming / Bookings By Month)
 * - Background fetching so the UI never blocks on the network
 * - At most one live chart texture; switching tears the old one down first
 *
 * Platform support: Windows, macOS, Linux
 */

use bookdash::color::{OfficePalette, Palette, RandomPalette};
use bookdash::controller::{self, ChartModel, LoadGate, LoadToken};
use bookdash::{ChartKind, Client, viz};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 520;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([700.0, 480.0])
            .with_title("Bookings Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Bookings Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashApp::new()))),
    )
}

/// The single live chart: the reshaped model plus its uploaded texture.
/// Dropping it frees the texture, so replacing the `Option` is the teardown.
struct ChartInstance {
    model: ChartModel,
    texture: egui::TextureHandle,
}

enum LoadResult {
    Chart(LoadToken, ChartKind, ChartModel),
    Failed(LoadToken, ChartKind, String),
}

/// Main application state
struct DashApp {
    base_url: String,
    selection: Option<ChartKind>,
    fixed_colors: bool,

    chart: Option<ChartInstance>,
    is_loading: bool,
    load_gate: LoadGate,
    load_receiver: Option<mpsc::Receiver<LoadResult>>,
}

impl DashApp {
    fn new() -> Self {
        Self {
            base_url: bookdash::api::DEFAULT_BASE_URL.to_string(),
            selection: None,
            fixed_colors: false,
            chart: None,
            is_loading: false,
            load_gate: LoadGate::default(),
            load_receiver: None,
        }
    }

    fn on_selection_changed(&mut self) {
        // Destroy the existing chart before anything else; at most one lives
        // at a time. Replacing the receiver also orphans any in-flight load.
        self.chart = None;
        self.is_loading = false;
        self.load_receiver = None;

        match self.selection {
            None => {
                self.load_gate.revoke_all();
            }
            Some(kind) => {
                let token = self.load_gate.issue();
                let (sender, receiver) = mpsc::channel();
                self.load_receiver = Some(receiver);
                self.is_loading = true;

                let client = Client::new(&self.base_url);
                let fixed = self.fixed_colors;
                thread::spawn(move || {
                    let mut palette: Box<dyn Palette> = if fixed {
                        Box::new(OfficePalette::default())
                    } else {
                        Box::new(RandomPalette::new())
                    };
                    let result = match controller::load_chart(kind, &client, palette.as_mut()) {
                        Ok(model) => LoadResult::Chart(token, kind, model),
                        Err(err) => LoadResult::Failed(token, kind, format!("{err:#}")),
                    };
                    let _ = sender.send(result);
                });
            }
        }
    }

    fn poll_load_result(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.load_receiver else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.load_receiver = None;
        self.is_loading = false;

        match result {
            LoadResult::Chart(token, kind, model) if self.load_gate.admits(token) => {
                match viz::render_to_rgb(&model, CHART_WIDTH, CHART_HEIGHT) {
                    Ok(rgb) => {
                        let image = egui::ColorImage::from_rgb(
                            [CHART_WIDTH as usize, CHART_HEIGHT as usize],
                            &rgb,
                        );
                        let texture =
                            ctx.load_texture("dashboard-chart", image, egui::TextureOptions::LINEAR);
                        self.chart = Some(ChartInstance { model, texture });
                    }
                    Err(err) => alert(kind, &format!("{err:#}")),
                }
            }
            LoadResult::Failed(token, kind, message) if self.load_gate.admits(token) => {
                alert(kind, &message);
            }
            // A newer selection superseded this load; drop the stale result.
            _ => {}
        }
    }

    fn save_chart(&self) {
        let Some(chart) = &self.chart else { return };
        let default_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        if let Some(path) = rfd::FileDialog::new()
            .set_directory(&default_dir)
            .set_file_name("chart.png")
            .save_file()
        {
            if let Err(err) = viz::render_to_file(&chart.model, &path, CHART_WIDTH, CHART_HEIGHT) {
                alert(chart.model.kind(), &format!("{err:#}"));
            }
        }
    }
}

/// Blocking error dialog naming the chart that failed to load.
fn alert(kind: ChartKind, detail: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Chart error")
        .set_description(format!(
            "Error loading {} chart\n\n{detail}",
            kind.display_name()
        ))
        .show();
}

fn selection_label(selection: Option<ChartKind>) -> &'static str {
    match selection {
        None => "None",
        Some(kind) => kind.display_name(),
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background loads
        self.poll_load_result(ctx);

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Chart:");
                let previous = self.selection;
                egui::ComboBox::from_id_salt("chart-type")
                    .selected_text(selection_label(self.selection))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.selection, None, "None");
                        ui.selectable_value(
                            &mut self.selection,
                            Some(ChartKind::RevenueTrend),
                            "Amount Incoming",
                        );
                        ui.selectable_value(
                            &mut self.selection,
                            Some(ChartKind::BookingsByMonth),
                            "Bookings By Month",
                        );
                    });
                if previous != self.selection {
                    self.on_selection_changed();
                }

                ui.separator();
                ui.label("Backend:");
                ui.text_edit_singleline(&mut self.base_url)
                    .on_hover_text("Base URL of the dashboard backend");
                ui.checkbox(&mut self.fixed_colors, "Fixed colors")
                    .on_hover_text("Cycle a fixed palette instead of random series colors");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // `None` hides the chart area entirely
            if self.selection.is_none() {
                return;
            }

            if self.is_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading chart...");
                });
                return;
            }

            if let Some(chart) = &self.chart {
                ui.image(&chart.texture);
                ui.add_space(8.0);
                if ui.button("Save chart...").clicked() {
                    self.save_chart();
                }
            } else {
                ui.label("No chart loaded.");
            }
        });
    }
}
