use clap::Parser;
use mandel_explorer::{MovieArgs, run_movie};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_movie(&MovieArgs::parse())?;

    Ok(())
}
