//! The egui shell around the core.
//!
//! Each frame is one full evaluation pass: widgets read the current
//! [`ViewerState`], emit [`Event`]s, and the reducer folds them in after the
//! panels close. The shell owns no interaction state of its own beyond the
//! failure notice of the last ingestion pass.

use crate::error::{EddyViewError, ResultMessage};
use crate::ingest;
use crate::render;
use crate::render::scatter::{
    scatter_points, X_BOUNDS, X_GRID_STEP, Y_BOUNDS, Y_GRID_STEP,
};
use crate::session::{Bound, Event, UploadStamp, ViewerState};
use eframe::egui;
use egui_plot::{uniform_grid_spacer, Legend, Line, Plot, PlotBounds, PlotPoints, Points};
use std::fs;
use std::path::{Path, PathBuf};

/// Trace colors for the two channels.
const TRACE_COLORS: [egui::Color32; 2] = [
    egui::Color32::from_rgb(113, 120, 78),
    egui::Color32::from_rgb(191, 78, 48),
];

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(135, 30, 28);

/// Height of the time-series plot in points.
const LINE_PLOT_HEIGHT: f32 = 320.0;

/// Main application state.
pub struct ViewerApp {
    /// Core interaction state, advanced only through reducer events.
    state: ViewerState,
    /// Failure notice of the last ingestion pass, if any. While set,
    /// neither plot renders.
    error: Option<String>,
}

impl ViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self { state: ViewerState::default(), error: None }
    }

    fn dispatch(&mut self, event: Event) {
        self.state = std::mem::take(&mut self.state).apply(event);
    }

    /// Runs one ingestion pass over a picked or dropped file.
    fn load_file(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = match Self::read_upload(path) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::warn!(name = %name, %error, "upload unreadable");
                self.error = Some(error.to_string());
                return;
            }
        };
        let stamp = UploadStamp { name, size: bytes.len() };
        match ingest::detect_and_parse(&bytes) {
            Ok(table) => {
                tracing::info!(name = %stamp.name, rows = table.row_count(), "ingested upload");
                self.error = None;
                self.dispatch(Event::UploadParsed { stamp, table });
            }
            Err(error) => {
                tracing::warn!(name = %stamp.name, %error, "ingestion pass failed");
                self.error = Some(format!("Could not read {}: {}", stamp.name, error));
                self.dispatch(Event::UploadFailed { stamp });
            }
        }
    }

    fn read_upload(path: &Path) -> Result<Vec<u8>, EddyViewError> {
        fs::read(path)
            .map_err(EddyViewError::from)
            .with_prefix("Unable to read upload")
    }

    /// Accepts a `.csv` file dropped anywhere on the window.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|input| {
            input
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        for path in dropped {
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
                self.load_file(&path);
            } else {
                self.error = Some(format!("{} is not a .csv file", path.display()));
            }
        }
    }

    fn file_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("EddyHL CSV Viewer");
            ui.separator();
            if ui.button("Open CSV…").clicked() {
                if let Some(path) = rfd::FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
                    self.load_file(&path);
                }
            }
            if let Some(table) = self.state.table() {
                ui.label(format!("{} rows loaded", table.row_count()));
            }
        });
    }

    /// Range slider handles, numeric entry fields and the redraw trigger.
    /// All of them edit the candidate range; only the redraw button moves
    /// the applied range.
    fn range_controls(&self, ui: &mut egui::Ui, events: &mut Vec<Event>) {
        let max_index = self.state.max_index();
        let candidate = self.state.candidate();

        ui.horizontal(|ui| {
            ui.label("Scatter range");
            let mut start = candidate.start;
            let mut end = candidate.end;
            let start_handle = ui.add(egui::Slider::new(&mut start, 0..=max_index).text("start"));
            let end_handle = ui.add(egui::Slider::new(&mut end, 0..=max_index).text("end"));
            if start_handle.changed() || end_handle.changed() {
                events.push(Event::SliderMoved { start, end });
            }
        });

        ui.horizontal(|ui| {
            let mut start = candidate.start;
            let mut end = candidate.end;
            if ui
                .add(egui::DragValue::new(&mut start).range(0..=max_index).prefix("start: "))
                .changed()
            {
                events.push(Event::BoundEdited { bound: Bound::Start, value: start });
            }
            if ui
                .add(egui::DragValue::new(&mut end).range(0..=max_index).prefix("end: "))
                .changed()
            {
                events.push(Event::BoundEdited { bound: Bound::End, value: end });
            }
            if ui.button("Redraw").clicked() {
                events.push(Event::RedrawRequested);
            }
            let applied = self.state.applied();
            ui.label(format!("applied: {}..={}", applied.start, applied.end));
        });
    }

    /// Overlaid line traces of both channels against the row index.
    fn line_plot(&self, ui: &mut egui::Ui, table: &ingest::SampleTable) {
        let traces = render::line_traces(table);
        Plot::new("timeseries")
            .legend(Legend::default())
            .height(LINE_PLOT_HEIGHT)
            .x_axis_label("Index")
            .y_axis_label("Value")
            .show(ui, |plot_ui| {
                for ((name, values), color) in traces.into_iter().zip(TRACE_COLORS) {
                    let points: PlotPoints = values
                        .iter()
                        .enumerate()
                        .map(|(index, value)| [index as f64, *value])
                        .collect();
                    plot_ui.line(Line::new(points).name(name).color(color).width(1.5));
                }
            });
    }

    /// Decimated XY scatter of the applied range, on fixed display bounds.
    fn scatter_plot(&self, ui: &mut egui::Ui, table: &ingest::SampleTable) {
        let points = scatter_points(table, self.state.applied());
        let pairs: PlotPoints = points.xs.iter().zip(&points.ys).map(|(x, y)| [*x, *y]).collect();
        Plot::new("scatter")
            .view_aspect(1.0)
            .x_grid_spacer(uniform_grid_spacer(|_| [10.0, 5.0, X_GRID_STEP]))
            .y_grid_spacer(uniform_grid_spacer(|_| [5.0, 2.5, Y_GRID_STEP]))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [X_BOUNDS.0, Y_BOUNDS.0],
                    [X_BOUNDS.1, Y_BOUNDS.1],
                ));
                plot_ui.points(
                    Points::new(pairs)
                        .name("applied range")
                        .color(TRACE_COLORS[1])
                        .radius(2.0),
                );
            });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("file_bar").show(ctx, |ui| self.file_bar(ui));

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error {
                // One failure notice per pass; no partial rendering.
                ui.colored_label(ERROR_COLOR, error);
                return;
            }
            let Some(table) = self.state.table() else {
                ui.label("Open an EddyHL CSV export to plot both channels.");
                return;
            };
            self.range_controls(ui, &mut events);
            ui.separator();
            self.line_plot(ui, table);
            ui.separator();
            self.scatter_plot(ui, table);
        });

        for event in events {
            self.dispatch(event);
        }
    }
}
