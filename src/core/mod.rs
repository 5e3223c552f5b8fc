pub mod clock;
pub mod session;
pub mod ticker;

pub use crate::domain::model::{Fixture, MatchStatus, PrimaryAction, Snapshot, Team, TeamInfo};
pub use crate::domain::ports::{ConfigProvider, TickSource};
pub use crate::utils::error::Result;
