use anyhow::Result;
use eddyview::app::ViewerApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "EddyHL CSV Viewer",
        options,
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {e}"))?;
    Ok(())
}
