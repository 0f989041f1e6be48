use viewer_overlay::{config::Config, logging, window};

fn main() -> anyhow::Result<()> {
    logging::init(cfg!(debug_assertions), None);
    let config = Config::from_env()?;
    tracing::info!(channel = %config.channel, "starting viewer overlay");
    window::run(&config)
}
