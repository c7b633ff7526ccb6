//! Frontend Configuration
//!
//! Values fixed at build time through environment variables.

use todo_sync::SyncConfig;

const DEFAULT_API_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API root, e.g. `http://localhost:3000/api`
    pub api_base_url: String,
    pub sync: SyncConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_API_URL"), option_env!("TODO_PAGE_LIMIT"))
    }

    fn from_values(api_origin: Option<&str>, page_limit: Option<&str>) -> Self {
        let origin = api_origin.unwrap_or(DEFAULT_API_ORIGIN).trim_end_matches('/');
        let mut sync = SyncConfig::default();
        if let Some(limit) = page_limit.and_then(|raw| raw.trim().parse::<u32>().ok()) {
            sync = sync.with_page_limit(limit);
        }
        Self {
            api_base_url: format!("{}/api", origin),
            sync,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.sync, SyncConfig::default());
    }

    #[test]
    fn test_origin_trailing_slash() {
        let config = AppConfig::from_values(Some("https://todo.example.com/"), Some("25"));
        assert_eq!(config.api_base_url, "https://todo.example.com/api");
        assert_eq!(config.sync.page_limit, 25);
    }

    #[test]
    fn test_bad_page_limit_ignored() {
        let config = AppConfig::from_values(None, Some("lots"));
        assert_eq!(config.sync.page_limit, 10);
    }
}
