use crate::utils::error::{Result, ScorecardError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two sides on the scoreboard. `Home` is team 1, `Away` is team 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Home,
    Away,
}

impl FromStr for Team {
    type Err = ScorecardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "team1" | "home" => Ok(Team::Home),
            "2" | "team2" | "away" => Ok(Team::Away),
            _ => Err(ScorecardError::invalid_command(
                s,
                "team must be 1, 2, team1, team2, home or away",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    FullTime,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::NotStarted => "Not Started",
            MatchStatus::InProgress => "In Progress",
            MatchStatus::FullTime => "Full Time",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single start/pause control shows one of these, depending on the running flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryAction {
    Start,
    Pause,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Start => "Start",
            PrimaryAction::Pause => "Pause",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub code: String,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Static match metadata shown alongside the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: TeamInfo,
    pub away: TeamInfo,
    pub venue: String,
    pub competition: String,
}

impl Fixture {
    pub fn team(&self, team: Team) -> &TeamInfo {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            home: TeamInfo::new("England", "ENG"),
            away: TeamInfo::new("Germany", "GER"),
            venue: "Wembley Stadium".to_string(),
            competition: "Premier League".to_string(),
        }
    }
}

/// Read model of a match clock, recomputed after every command or tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub elapsed_seconds: u32,
    pub formatted_time: String,
    pub status: MatchStatus,
    pub running: bool,
    pub score_home: u32,
    pub score_away: u32,
}

impl Snapshot {
    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Home => self.score_home,
            Team::Away => self.score_away,
        }
    }

    /// `"2 - 1"`
    pub fn scoreline(&self) -> String {
        format!("{} - {}", self.score_home, self.score_away)
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.running {
            PrimaryAction::Pause
        } else {
            PrimaryAction::Start
        }
    }
}
