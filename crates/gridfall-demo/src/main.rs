mod app;
mod config;

use anyhow::Result;

fn main() -> Result<()> {
    gridfall_engine::logging::init_logging();
    app::run(config::DemoConfig::default())
}
