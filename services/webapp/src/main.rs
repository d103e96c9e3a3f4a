use anyhow::Context;
use tracing::info;
use webapp::init_web_app_manager;
use webapp_bootstrap::{RuntimeConfig, init_runtime};
use webapp_config::WebAppConfig;

fn main() -> anyhow::Result<()> {
    // .env 可选
    dotenvy::dotenv().ok();

    let runtime = RuntimeConfig::from_env();
    let config = WebAppConfig::load(&runtime.config_dir)
        .with_context(|| format!("loading config from {}", runtime.config_dir))?;

    init_runtime(&config)?;

    let manager = init_web_app_manager()?;
    info!(app_name = %config.app_name, ?manager, "Web app manager ready");

    Ok(())
}
