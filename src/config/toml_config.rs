use crate::core::catalog::SampleCatalog;
use crate::core::ConfigProvider;
use crate::domain::model::BusinessRecord;
use crate::utils::error::{InsightsError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SEARCH_DELAY_MS: u64 = 800;
pub const DEFAULT_REGENERATE_DELAY_MS: u64 = 600;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub dashboard: DashboardSettings,
    /// Replaces the built-in sample catalog when present.
    pub catalog: Option<Vec<BusinessRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub search_delay_ms: Option<u64>,
    pub regenerate_delay_ms: Option<u64>,
    pub recent_limit: Option<usize>,
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InsightsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InsightsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INSIGHTS_SEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InsightsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The configured catalog, or the built-in sample businesses.
    pub fn catalog(&self) -> Result<SampleCatalog> {
        match &self.catalog {
            Some(records) => SampleCatalog::new(records.clone()),
            None => Ok(SampleCatalog::default()),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn search_delay(&self) -> Duration {
        Duration::from_millis(
            self.dashboard
                .search_delay_ms
                .unwrap_or(DEFAULT_SEARCH_DELAY_MS),
        )
    }

    fn regenerate_delay(&self) -> Duration {
        Duration::from_millis(
            self.dashboard
                .regenerate_delay_ms
                .unwrap_or(DEFAULT_REGENERATE_DELAY_MS),
        )
    }

    fn recent_limit(&self) -> usize {
        self.dashboard
            .recent_limit
            .unwrap_or(crate::core::recent::DEFAULT_RECENT_LIMIT)
    }

    fn rng_seed(&self) -> Option<u64> {
        self.dashboard.seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.dashboard.recent_limit {
            validate_positive_number("dashboard.recent_limit", limit, 1)?;
        }

        // 逐筆驗證 catalog
        if self.catalog.is_some() {
            self.catalog()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_dashboard_settings() {
        let toml_content = r#"
[dashboard]
search_delay_ms = 10
regenerate_delay_ms = 5
recent_limit = 3
seed = 7
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.search_delay(), Duration::from_millis(10));
        assert_eq!(config.regenerate_delay(), Duration::from_millis(5));
        assert_eq!(config.recent_limit(), 3);
        assert_eq!(config.rng_seed(), Some(7));
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog().unwrap(), SampleCatalog::default());
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.search_delay(), Duration::from_millis(800));
        assert_eq!(config.regenerate_delay(), Duration::from_millis(600));
        assert_eq!(config.recent_limit(), 5);
        assert_eq!(config.rng_seed(), None);
    }

    #[test]
    fn test_custom_catalog() {
        let toml_content = r#"
[[catalog]]
name = "Tea Tales"
location = "Pune"
rating = 4.4
review_count = 120
headline_variants = ["Tea Tales: Pune's Cosiest Corner"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.first().name, "Tea Tales");
    }

    #[test]
    fn test_catalog_entry_without_headlines_is_invalid() {
        let toml_content = r#"
[[catalog]]
name = "Tea Tales"
location = "Pune"
rating = 4.4
review_count = 120
headline_variants = []
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_rating_out_of_range_is_invalid() {
        let toml_content = r#"
[[catalog]]
name = "Tea Tales"
location = "Pune"
rating = 6.0
review_count = 120
headline_variants = ["Tea Tales in Pune"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_nan_rating_is_invalid() {
        let toml_content = r#"
[[catalog]]
name = "Tea Tales"
location = "Pune"
rating = nan
review_count = 120
headline_variants = ["Tea Tales in Pune"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.catalog.as_ref().unwrap()[0].rating.is_nan());
        assert!(config.validate().is_err());
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_zero_recent_limit_is_invalid() {
        let config = TomlConfig::from_toml_str("[dashboard]\nrecent_limit = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BIZ_INSIGHTS_TEST_SEED", "99");

        let toml_content = r#"
[dashboard]
seed = ${BIZ_INSIGHTS_TEST_SEED}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.rng_seed(), Some(99));

        std::env::remove_var("BIZ_INSIGHTS_TEST_SEED");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[dashboard\nseed = 1").unwrap_err();
        assert!(matches!(err, InsightsError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[dashboard]
recent_limit = 4
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.recent_limit(), 4);
    }
}
