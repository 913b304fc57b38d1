//! Champion data source configuration.

use serde::{Deserialize, Serialize};

use crate::champion::Champion;

/// Where champion data comes from and how hard to try fetching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Data Dragon base URL (without `/cdn`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Game patch the data and portraits are pinned to.
    #[serde(default = "default_patch_version")]
    pub patch_version: String,

    /// Data Dragon locale for champion names and titles.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries for transient failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// How long a fetched champion list stays cached, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Skip the network and use the bundled dataset.
    #[serde(default)]
    pub offline: bool,
}

fn default_base_url() -> String {
    "https://ddragon.leagueoflegends.com".to_string()
}

fn default_patch_version() -> String {
    "13.19.1".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    2
}

fn default_cache_ttl() -> u64 {
    60 * 60
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            patch_version: default_patch_version(),
            locale: default_locale(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            cache_ttl_secs: default_cache_ttl(),
            offline: false,
        }
    }
}

impl DataSourceConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `ARAM_DDRAGON_URL` | Data Dragon base URL |
    /// | `ARAM_PATCH_VERSION` | Patch version, e.g. `13.19.1` |
    /// | `ARAM_LOCALE` | Data locale, e.g. `en_US` |
    /// | `ARAM_TIMEOUT` | Request timeout in seconds |
    /// | `ARAM_MAX_RETRIES` | Max retries for transient failures |
    /// | `ARAM_CACHE_TTL` | Cache lifetime in seconds |
    /// | `ARAM_OFFLINE` | `1`/`true` to use bundled data only |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ARAM_DDRAGON_URL").unwrap_or_else(|_| default_base_url()),
            patch_version: std::env::var("ARAM_PATCH_VERSION")
                .unwrap_or_else(|_| default_patch_version()),
            locale: std::env::var("ARAM_LOCALE").unwrap_or_else(|_| default_locale()),
            timeout_secs: std::env::var("ARAM_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
            max_retries: std::env::var("ARAM_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_retries),
            cache_ttl_secs: std::env::var("ARAM_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_cache_ttl),
            offline: std::env::var("ARAM_OFFLINE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the patch version.
    pub fn with_patch_version(mut self, version: impl Into<String>) -> Self {
        self.patch_version = version.into();
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    fn cdn_root(&self) -> String {
        format!(
            "{}/cdn/{}",
            self.base_url.trim_end_matches('/'),
            self.patch_version
        )
    }

    /// Full champion list endpoint.
    pub fn champion_endpoint(&self) -> String {
        format!("{}/data/{}/champion.json", self.cdn_root(), self.locale)
    }

    /// Portrait URL for a champion.
    pub fn image_url(&self, champion: &Champion) -> String {
        format!("{}/img/champion/{}", self.cdn_root(), champion.image.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::{test_champion, ChampionInfo};
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "ARAM_DDRAGON_URL",
        "ARAM_PATCH_VERSION",
        "ARAM_LOCALE",
        "ARAM_TIMEOUT",
        "ARAM_MAX_RETRIES",
        "ARAM_CACHE_TTL",
        "ARAM_OFFLINE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn endpoints_follow_patch_and_locale() {
        let cfg = DataSourceConfig::default().with_base_url("https://cdn.test/");
        assert_eq!(
            cfg.champion_endpoint(),
            "https://cdn.test/cdn/13.19.1/data/en_US/champion.json"
        );
        let ahri = test_champion("Ahri", &["Mage"], ChampionInfo::default());
        assert_eq!(
            cfg.image_url(&ahri),
            "https://cdn.test/cdn/13.19.1/img/champion/Ahri.png"
        );
    }

    #[test]
    #[serial]
    fn from_env_defaults() {
        clear_env();
        assert_eq!(DataSourceConfig::from_env(), DataSourceConfig::default());
    }

    #[test]
    #[serial]
    fn from_env_overrides() {
        clear_env();
        std::env::set_var("ARAM_PATCH_VERSION", "14.1.1");
        std::env::set_var("ARAM_TIMEOUT", "3");
        std::env::set_var("ARAM_OFFLINE", "TRUE");
        std::env::set_var("ARAM_MAX_RETRIES", "not-a-number");

        let cfg = DataSourceConfig::from_env();
        clear_env();

        assert_eq!(cfg.patch_version, "14.1.1");
        assert_eq!(cfg.timeout_secs, 3);
        assert!(cfg.offline);
        assert_eq!(cfg.max_retries, default_max_retries());
    }

    #[test]
    fn deserializes_partial_config() {
        let cfg: DataSourceConfig = serde_json::from_str(r#"{"locale": "vi_VN"}"#).unwrap();
        assert_eq!(cfg.locale, "vi_VN");
        assert_eq!(cfg.base_url, default_base_url());
    }
}
