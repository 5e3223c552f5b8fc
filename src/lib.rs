pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::clock::{format_time, ClockState, MatchClock, Transition, FULL_TIME_SECONDS};
pub use crate::core::session::{Command, MatchHandle, MatchSession};
pub use crate::core::ticker::Ticker;
pub use crate::domain::model::{Fixture, MatchStatus, PrimaryAction, Snapshot, Team, TeamInfo};
pub use crate::domain::ports::{ConfigProvider, TickSource};
pub use crate::utils::error::{Result, ScorecardError};
