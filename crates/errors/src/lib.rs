//! webapp-errors - 统一错误处理

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 是否值得重试
    ///
    /// 目前没有瞬时错误，全部返回 false
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Config(_) | Self::Internal(_) => false,
        }
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
