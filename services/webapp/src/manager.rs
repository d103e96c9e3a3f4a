//! Web 应用管理器

use tracing::info;
use webapp_errors::AppResult;

/// 日志通道名
pub const LOG_TARGET: &str = "webapp";

/// Web 应用管理器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebAppManager {
    pub placeholder: String,
}

/// 初始化管理器
///
/// 不会失败，返回值保留 `AppResult` 给后续的初始化步骤。
pub fn init_web_app_manager() -> AppResult<WebAppManager> {
    info!(target: LOG_TARGET, "Initializing web app manager");
    Ok(WebAppManager::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_returns_empty_placeholder() {
        let manager = init_web_app_manager().expect("init never fails");
        assert_eq!(manager.placeholder, "");
        assert_eq!(manager, WebAppManager::default());
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut first = init_web_app_manager().unwrap();
        let second = init_web_app_manager().unwrap();
        assert_eq!(first, second);

        // 两次调用之间没有共享状态
        first.placeholder.push_str("changed");
        assert_eq!(second.placeholder, "");
        assert_eq!(init_web_app_manager().unwrap().placeholder, "");
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_init_emits_one_info_event() {
        init_web_app_manager().unwrap();

        let expected = format!(" {}: Initializing web app manager", LOG_TARGET);
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains(&expected) && line.contains("INFO"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one INFO event on `{}`, got {}", LOG_TARGET, n)),
            }
        });
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_other_targets_do_not_count() {
        info!(target: "unrelated", "Initializing web app manager");

        let expected = format!(" {}: Initializing web app manager", LOG_TARGET);
        assert!(!logs_contain(&expected));
    }
}
