#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod canvas;
mod colors;
mod constants;
mod selection;
mod ui;

use canvas::CanvasView;
use clap::Parser;
use constants::WINDOW_SIZE;
use selection::Selection;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use graph_zoom_controls::{ConfigError, ControlsConfig, ZoomControls};
use std::path::PathBuf;

/// Demo canvas for the graph zoom controls.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the lower zoom bound
    #[arg(long)]
    min_zoom: Option<f32>,
    /// Override the upper zoom bound
    #[arg(long)]
    max_zoom: Option<f32>,
    /// Override the slider resolution
    #[arg(long)]
    steps: Option<u32>,
    /// Hide the help toggle and panel
    #[arg(long)]
    no_help: bool,
    /// Allow Ctrl + click multi-select
    #[arg(long)]
    multi_select: bool,
}

impl Args {
    /// Loads the config file and applies command line overrides.
    fn controls_config(&self) -> Result<ControlsConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ControlsConfig::load(path)?,
            None => ControlsConfig::load_default_location()?,
        };
        if let Some(min_zoom) = self.min_zoom {
            config.min_zoom = min_zoom;
        }
        if let Some(max_zoom) = self.max_zoom {
            config.max_zoom = max_zoom;
        }
        if let Some(steps) = self.steps {
            config.slider_steps = steps;
        }
        if self.no_help {
            config.show_help = false;
        }
        if self.multi_select {
            config.allow_multi_select = true;
        }
        Ok(config)
    }
}

/// Main application state for the demo.
pub struct GraphZoomDemo {
    view: CanvasView,
    selection: Selection,
    controls: ZoomControls,
    toasts: Toasts,
}

impl GraphZoomDemo {
    fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Result<Self, ConfigError> {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let config = args
            .controls_config()
            .and_then(|config| config.mapper().map(|_| config))
            .unwrap_or_else(|err| {
                log::error!("Invalid controls config, using defaults: {err}");
                show_error(&mut toasts, format!("{err}. Using default settings."));
                ControlsConfig::default()
            });

        let controls = ZoomControls::new(&cc.egui_ctx, &config)?;
        let view = CanvasView::new(controls.default_bounds());

        Ok(Self {
            view,
            selection: Selection::new(config.allow_multi_select),
            controls,
            toasts,
        })
    }
}

fn show_error(toasts: &mut Toasts, text: String) {
    toasts.add(Toast {
        kind: ToastKind::Error,
        text: text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(10.0)
            .show_icon(true),
        ..Default::default()
    });
}

impl eframe::App for GraphZoomDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);

        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Graph Zoom Controls",
        options,
        Box::new(move |cc| Ok(Box::new(GraphZoomDemo::new(cc, &args)?))),
    )
}
