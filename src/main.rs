use clap::Parser;
use mandel_explorer::{ExportArgs, ExportController, ImageFilePresenter, JsonSidecarStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let request = ExportArgs::parse().into_request()?;
    let controller = ExportController::new(ImageFilePresenter::new(), JsonSidecarStore::new());

    controller.export(&request)?;

    Ok(())
}
