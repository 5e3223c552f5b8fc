use crate::config::toml_config::{LogFormat, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "scorecard")]
#[command(about = "Live football match clock and scoreboard")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Milliseconds per match second (1000 = real time)
    #[arg(long)]
    pub tick_ms: Option<u64>,

    #[arg(long, help = "Home team name")]
    pub home: Option<String>,

    #[arg(long, help = "Home team short code")]
    pub home_code: Option<String>,

    #[arg(long, help = "Away team name")]
    pub away: Option<String>,

    #[arg(long, help = "Away team short code")]
    pub away_code: Option<String>,

    #[arg(long)]
    pub venue: Option<String>,

    #[arg(long)]
    pub competition: Option<String>,

    #[arg(long, help = "Print snapshots as JSON lines")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file (if any), applies command line overrides and
    /// validates the result.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(tick_ms) = self.tick_ms {
            config.clock.tick_interval_ms = tick_ms;
        }
        if let Some(name) = &self.home {
            config.home.name = Some(name.clone());
        }
        if let Some(code) = &self.home_code {
            config.home.code = Some(code.clone());
        }
        if let Some(name) = &self.away {
            config.away.name = Some(name.clone());
        }
        if let Some(code) = &self.away_code {
            config.away.code = Some(code.clone());
        }
        if let Some(venue) = &self.venue {
            config.r#match.venue = venue.clone();
        }
        if let Some(competition) = &self.competition {
            config.r#match.competition = competition.clone();
        }
        if self.json {
            config.logging.json_output = true;
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}
