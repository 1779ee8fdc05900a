use std::time::Duration;

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// 列表页配置。默认值可在构建时通过环境变量覆盖：
///
/// - `TOOL_DIRECTORY_API_BASE`：接口前缀，默认与页面同源
/// - `TOOL_DIRECTORY_PER_PAGE`：每页条数
/// - `TOOL_DIRECTORY_DEBOUNCE_MS`：搜索防抖毫秒数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub api_base: String,
    pub per_page: u32,
    pub search_debounce: Duration,
    pub max_visible_pages: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            per_page: DEFAULT_PER_PAGE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }
}

impl ListingConfig {
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("TOOL_DIRECTORY_API_BASE"),
            option_env!("TOOL_DIRECTORY_PER_PAGE"),
            option_env!("TOOL_DIRECTORY_DEBOUNCE_MS"),
        )
    }

    /// 无效值或 0 保留默认值
    pub fn from_overrides(
        api_base: Option<&str>,
        per_page: Option<&str>,
        debounce_ms: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(value) = per_page.and_then(|v| v.trim().parse::<u32>().ok()) {
            if value > 0 {
                config.per_page = value;
            }
        }
        if let Some(ms) = debounce_ms.and_then(|v| v.trim().parse::<u64>().ok()) {
            config.search_debounce = Duration::from_millis(ms);
        }

        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_listing_page() {
        let config = ListingConfig::default();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.endpoint("/api/tools"), "/api/tools");
    }

    #[test]
    fn overrides_are_applied() {
        let config =
            ListingConfig::from_overrides(Some("https://tools.example.com/"), Some("24"), Some("150"));
        assert_eq!(config.api_base, "https://tools.example.com");
        assert_eq!(config.per_page, 24);
        assert_eq!(config.search_debounce, Duration::from_millis(150));
        assert_eq!(
            config.endpoint("/api/categories"),
            "https://tools.example.com/api/categories"
        );
    }

    #[test]
    fn invalid_overrides_fall_back() {
        let config = ListingConfig::from_overrides(None, Some("0"), Some("soon"));
        assert_eq!(config, ListingConfig::default());

        let config = ListingConfig::from_overrides(None, Some("ten"), None);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
    }
}
