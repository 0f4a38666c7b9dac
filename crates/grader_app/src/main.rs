mod app;
mod effects;
mod logging;
mod session;
mod settings;
mod ticker;
mod ui;

use anyhow::Context as _;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Both);

    let settings = settings::AppSettings::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AWS Content-Level Grader",
        options,
        Box::new(move |_cc| {
            let app = app::GraderApp::new(settings)?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("event loop terminated abnormally")
}
