//! Tower of Hanoi solver and visualizer.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use hanoi_prefs::Preferences;

mod cli;
mod gui;

const TITLE: &str = "Tower of Hanoi";
const APP_ID: &str = "TowerOfHanoi";

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    if let Some(subcommand) = args.subcommand {
        color_eyre::install().expect("error initializing panic handler");
        cli::exec(subcommand, args.prefs.as_deref())?;
        return Ok(());
    }

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install().expect("error initializing panic handler");

    let prefs = Preferences::load(args.prefs.as_deref());
    let initial_disk_count = args.disks.unwrap_or(prefs.default_disk_count);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    Ok(eframe::run_native(
        TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::AppUi::new(cc, &prefs, initial_disk_count)))),
    )?)
}

impl eframe::App for gui::AppUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Build all the UI.
        self.build(ctx);
    }
}
