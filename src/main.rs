use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::app_state::GoalTrackerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Weekly Goal Tracker application");

    // Create window options sized for the chart plus the action row
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 660.0])
            .with_title("Weekly Goal Tracker")
            .with_resizable(false),
        ..Default::default()
    };

    // Run the application
    info!("Launching egui window");
    eframe::run_native(
        "Weekly Goal Tracker",
        options,
        Box::new(|cc| {
            // Enable persistence for window state
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            // Initialize the app
            match GoalTrackerApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Weekly Goal Tracker app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
