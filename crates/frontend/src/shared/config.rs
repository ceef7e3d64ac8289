//! Client configuration.
//!
//! The defaults are embedded below; the API base URL can be overridden at
//! build time with `GUARDHIRE_API_URL` (e.g. `GUARDHIRE_API_URL=https://api.example.com trunk build`).

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub postcodes: PostcodesConfig,
    pub search: SearchConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostcodesConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToastConfig {
    pub timeout_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000/api"

[postcodes]
base_url = "https://api.postcodes.io"

[search]
page_size = 10

[toast]
timeout_ms = 4000
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    load_config(option_env!("GUARDHIRE_API_URL")).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig {
            api: ApiConfig {
                base_url: String::new(),
            },
            postcodes: PostcodesConfig {
                base_url: "https://api.postcodes.io".to_string(),
            },
            search: SearchConfig { page_size: 10 },
            toast: ToastConfig { timeout_ms: 4000 },
        }
    })
});

/// Parse the embedded defaults and apply the build-time override
pub fn load_config(api_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(url) = api_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.postcodes.base_url, "https://api.postcodes.io");
        assert_eq!(config.search.page_size, 10);
    }

    #[test]
    fn test_api_override() {
        let config = load_config(Some("https://api.guardhire.co.uk/")).unwrap();
        assert_eq!(config.api.base_url, "https://api.guardhire.co.uk");
        let config = load_config(Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }
}
