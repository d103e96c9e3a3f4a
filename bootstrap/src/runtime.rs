//! 服务运行时

use tracing::info;
use webapp_config::WebAppConfig;
use webapp_errors::{AppError, AppResult};
use webapp_telemetry::{init_tracing, init_tracing_json};

/// 服务运行时配置
pub struct RuntimeConfig {
    pub config_dir: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            config_dir: "config".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// 从 `WEBAPP_CONFIG_DIR` 读取配置目录
    pub fn from_env() -> Self {
        match std::env::var("WEBAPP_CONFIG_DIR") {
            Ok(dir) if !dir.is_empty() => Self { config_dir: dir },
            _ => Self::default(),
        }
    }
}

/// 生产环境或显式开启时使用 JSON 日志
pub fn use_json_logs(config: &WebAppConfig) -> bool {
    config.is_production() || config.telemetry.json
}

/// 初始化服务运行时
pub fn init_runtime(config: &WebAppConfig) -> AppResult<()> {
    let level = &config.telemetry.log_level;
    let result = if use_json_logs(config) {
        init_tracing_json(level)
    } else {
        init_tracing(level)
    };
    result.map_err(|e| AppError::internal(e.to_string()))?;

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );

    Ok(())
}
