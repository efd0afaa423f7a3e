use clap::Parser;
use mandel_explorer::{ExploreArgs, run_gui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ExploreArgs::parse().into_settings();
    run_gui(settings)?;

    Ok(())
}
