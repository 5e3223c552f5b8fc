use crate::core::session::Command;
use crate::core::{Fixture, Snapshot, Team};
use crate::utils::error::{Result, ScorecardError};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  start | pause | toggle (or empty line)   control the clock
  reset                                     clock and scores back to 00:00, 0 - 0
  +1 | +2 | -1 | -2                         change a team's score
  inc <team> | dec <team>                   same, team = 1, 2, home or away
  status                                    print the scoreboard
  help                                      show this text
  quit                                      stop the clock and exit";

/// One parsed line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Clock(Command),
    Status,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = ScorecardError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(ConsoleCommand::Clock(Command::Toggle));
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(ScorecardError::invalid_command(line, "too many arguments"));
        }

        let command = match (verb.to_ascii_lowercase().as_str(), argument) {
            ("start", None) => ConsoleCommand::Clock(Command::Start),
            ("pause", None) => ConsoleCommand::Clock(Command::Pause),
            ("toggle", None) => ConsoleCommand::Clock(Command::Toggle),
            ("reset", None) => ConsoleCommand::Clock(Command::Reset),
            ("status", None) => ConsoleCommand::Status,
            ("help" | "?", None) => ConsoleCommand::Help,
            ("quit" | "exit" | "q", None) => ConsoleCommand::Quit,
            ("inc", Some(team)) => ConsoleCommand::Clock(Command::IncrementScore(team.parse()?)),
            ("dec", Some(team)) => ConsoleCommand::Clock(Command::DecrementScore(team.parse()?)),
            ("inc" | "dec", None) => {
                return Err(ScorecardError::invalid_command(line, "missing team"));
            }
            (shorthand, None) => parse_shorthand(shorthand)
                .ok_or_else(|| ScorecardError::invalid_command(line, "unknown command"))?,
            _ => return Err(ScorecardError::invalid_command(line, "unexpected argument")),
        };
        Ok(command)
    }
}

/// `+1`, `-2`, ...
fn parse_shorthand(word: &str) -> Option<ConsoleCommand> {
    if let Some(team) = word.strip_prefix('+') {
        let team = team.parse::<Team>().ok()?;
        return Some(ConsoleCommand::Clock(Command::IncrementScore(team)));
    }
    let team = word.strip_prefix('-')?.parse::<Team>().ok()?;
    Some(ConsoleCommand::Clock(Command::DecrementScore(team)))
}

/// Single-line text scoreboard, e.g.
/// `12:34 | In Progress | ENG 1 - 0 GER | Wembley Stadium, Premier League | [Pause]`
pub fn render_text(fixture: &Fixture, snapshot: &Snapshot) -> String {
    format!(
        "{} | {} | {} {} {} | {}, {} | [{}]",
        snapshot.formatted_time,
        snapshot.status,
        fixture.home.code,
        snapshot.scoreline(),
        fixture.away.code,
        fixture.venue,
        fixture.competition,
        snapshot.primary_action().label()
    )
}

/// One JSON object per line, carrying the fixture alongside the snapshot.
pub fn render_json(fixture: &Fixture, snapshot: &Snapshot) -> Result<String> {
    let value = serde_json::json!({
        "fixture": fixture,
        "snapshot": snapshot,
        "scoreline": snapshot.scoreline(),
    });
    Ok(serde_json::to_string(&value)?)
}
