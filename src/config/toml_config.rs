use crate::core::{ConfigProvider, Fixture, TeamInfo};
use crate::utils::error::{Result, ScorecardError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
const MAX_TICK_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub r#match: MatchConfig,
    pub home: TeamConfig,
    pub away: TeamConfig,
    pub clock: ClockConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub venue: String,
    pub competition: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let fixture = Fixture::default();
        Self {
            venue: fixture.venue,
            competition: fixture.competition,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub verbose: bool,
    /// Print snapshots as JSON lines instead of the text scoreboard.
    pub json_output: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScorecardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScorecardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME_TEAM})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScorecardError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range(
            "clock.tick_interval_ms",
            self.clock.tick_interval_ms,
            1,
            MAX_TICK_INTERVAL_MS,
        )?;

        let fixture = self.fixture();
        validation::validate_non_empty_string("home.name", &fixture.home.name)?;
        validation::validate_non_empty_string("away.name", &fixture.away.name)?;
        validation::validate_team_code("home.code", &fixture.home.code)?;
        validation::validate_team_code("away.code", &fixture.away.code)?;
        validation::validate_distinct(
            "team codes",
            &[fixture.home.code.as_str(), fixture.away.code.as_str()],
        )?;
        validation::validate_non_empty_string("match.venue", &self.r#match.venue)?;
        validation::validate_non_empty_string("match.competition", &self.r#match.competition)?;

        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose
    }
}

fn team_info(config: &TeamConfig, default: TeamInfo) -> TeamInfo {
    TeamInfo {
        name: config.name.clone().unwrap_or(default.name),
        code: config.code.clone().unwrap_or(default.code),
    }
}

impl ConfigProvider for TomlConfig {
    fn fixture(&self) -> Fixture {
        let defaults = Fixture::default();
        Fixture {
            home: team_info(&self.home, defaults.home),
            away: team_info(&self.away, defaults.away),
            venue: self.r#match.venue.clone(),
            competition: self.r#match.competition.clone(),
        }
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.clock.tick_interval_ms)
    }

    fn json_output(&self) -> bool {
        self.logging.json_output
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[match]
venue = "Camp Nou"
competition = "Friendly"

[home]
name = "Spain"
code = "ESP"

[away]
name = "Italy"
code = "ITA"

[clock]
tick_interval_ms = 250

[logging]
format = "json"
verbose = true
json_output = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let fixture = config.fixture();

        assert_eq!(fixture.home, TeamInfo::new("Spain", "ESP"));
        assert_eq!(fixture.away, TeamInfo::new("Italy", "ITA"));
        assert_eq!(fixture.venue, "Camp Nou");
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.verbose());
        assert!(config.json_output());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.fixture(), Fixture::default());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(!config.json_output());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_team_override() {
        let config = TomlConfig::from_toml_str("[away]\nname = \"France\"\ncode = \"FRA\"\n").unwrap();
        let fixture = config.fixture();

        assert_eq!(fixture.home.code, "ENG");
        assert_eq!(fixture.away.name, "France");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SCORECARD_TEST_VENUE", "Allianz Arena");

        let toml_content = r#"
[match]
venue = "${SCORECARD_TEST_VENUE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.fixture().venue, "Allianz Arena");

        std::env::remove_var("SCORECARD_TEST_VENUE");
    }

    #[test]
    fn test_config_validation() {
        let zero_tick = TomlConfig::from_toml_str("[clock]\ntick_interval_ms = 0\n").unwrap();
        assert!(zero_tick.validate().is_err());

        let same_codes = TomlConfig::from_toml_str("[away]\ncode = \"eng\"\n").unwrap();
        assert!(same_codes.validate().is_err());

        let blank_name = TomlConfig::from_toml_str("[home]\nname = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[clock]\ntick_interval_ms = \"fast\"\n").unwrap_err();
        assert!(matches!(err, ScorecardError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[home]\nname = \"Brazil\"\ncode = \"BRA\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.fixture().home.name, "Brazil");
    }
}
