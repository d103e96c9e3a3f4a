//! webapp-config - 配置加载库

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;
use webapp_errors::AppError;

/// 环境变量前缀，嵌套字段用 `__` 分隔
pub const ENV_PREFIX: &str = "WEBAPP_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 强制 JSON 输出（生产环境总是 JSON）
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_app_name() -> String {
    "webapp".to_string()
}

/// 运行环境：`WEBAPP_APP_ENV` 优先，其次 `APP_ENV`，默认 development
fn default_app_env() -> String {
    ["WEBAPP_APP_ENV", "APP_ENV"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|env| !env.is_empty())
        .unwrap_or_else(|| "development".to_string())
}

impl WebAppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 优先级从低到高：`default.toml`、`{app_env}.toml`、`WEBAPP_*` 环境变量。
    /// 文件不存在时跳过。`app_env` 总是等于选中环境文件的名字。
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = default_app_env();

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Serialized::default("app_env", &env))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
