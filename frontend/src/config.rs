//! 运行配置
//!
//! API 网关地址的取值顺序：浏览器存储里的运维覆盖值，
//! 其次编译期注入的 `PARKDESK_API_BASE`，最后内置默认值。
//! 覆盖键不属于会话数据，登出时不清除。

use parkdesk_shared::DEFAULT_API_BASE;

use crate::web::LocalStorage;

/// 运维覆盖键，手工写入 LocalStorage 即可切换网关
pub const KEY_API_BASE: &str = "parkdesk_api_base";

/// 前端运行配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API 基地址，已去掉尾部斜杠
    pub api_base: String,
}

impl AppConfig {
    /// 从浏览器环境加载配置
    pub fn load() -> Self {
        Self::resolve(
            LocalStorage::get(KEY_API_BASE),
            option_env!("PARKDESK_API_BASE"),
        )
    }

    /// 纯取值逻辑，空白值视为未配置
    fn resolve(stored: Option<String>, built_in: Option<&str>) -> Self {
        let api_base = stored
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| built_in.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        Self { api_base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins() {
        let config = AppConfig::resolve(
            Some("https://gw.example.com/api".into()),
            Some("http://build-time"),
        );
        assert_eq!(config.api_base, "https://gw.example.com/api");
    }

    #[test]
    fn test_blank_stored_value_falls_through() {
        let config = AppConfig::resolve(Some("   ".into()), Some("http://build-time"));
        assert_eq!(config.api_base, "http://build-time");

        let config = AppConfig::resolve(None, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = AppConfig::resolve(Some("http://localhost:8080/".into()), None);
        assert_eq!(config.api_base, "http://localhost:8080");
    }
}
