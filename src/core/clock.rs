use crate::core::{MatchStatus, Snapshot, Team};
use serde::{Deserialize, Serialize};

/// 90 minutes.
pub const FULL_TIME_SECONDS: u32 = 5400;

/// Position of the clock on the time axis.
///
/// `Running` and `Paused` always hold `elapsed < FULL_TIME_SECONDS`; the
/// tick that reaches full time moves the clock to `FullTime` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    NotStarted,
    Running { elapsed: u32 },
    Paused { elapsed: u32 },
    FullTime,
}

impl ClockState {
    pub fn elapsed(&self) -> u32 {
        match *self {
            ClockState::NotStarted => 0,
            ClockState::Running { elapsed } | ClockState::Paused { elapsed } => elapsed,
            ClockState::FullTime => FULL_TIME_SECONDS,
        }
    }

    pub fn status(&self) -> MatchStatus {
        match self {
            ClockState::NotStarted => MatchStatus::NotStarted,
            ClockState::Running { .. } | ClockState::Paused { .. } => MatchStatus::InProgress,
            ClockState::FullTime => MatchStatus::FullTime,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ClockState::Running { .. })
    }
}

/// Outcome of a command. Ignored commands are absorbed silently by the
/// clock; the reason only ends up in debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(&'static str),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchClock {
    state: ClockState,
    score_home: u32,
    score_away: u32,
}

impl MatchClock {
    pub fn new() -> Self {
        Self {
            state: ClockState::NotStarted,
            score_home: 0,
            score_away: 0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.state.elapsed()
    }

    pub fn status(&self) -> MatchStatus {
        self.state.status()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Home => self.score_home,
            Team::Away => self.score_away,
        }
    }

    pub fn start(&mut self) -> Transition {
        match self.state {
            ClockState::NotStarted => {
                self.state = ClockState::Running { elapsed: 0 };
                Transition::Applied
            }
            ClockState::Paused { elapsed } => {
                self.state = ClockState::Running { elapsed };
                Transition::Applied
            }
            ClockState::Running { .. } => Transition::Ignored("clock is already running"),
            ClockState::FullTime => Transition::Ignored("match is at full time"),
        }
    }

    pub fn pause(&mut self) -> Transition {
        match self.state {
            ClockState::Running { elapsed } => {
                self.state = ClockState::Paused { elapsed };
                Transition::Applied
            }
            _ => Transition::Ignored("clock is not running"),
        }
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) -> Transition {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Transition {
        *self = Self::new();
        Transition::Applied
    }

    /// Advances the clock by one second. Reaching full time stops the clock
    /// in the same step.
    pub fn tick(&mut self) -> Transition {
        match self.state {
            ClockState::Running { elapsed } => {
                let next = elapsed + 1;
                self.state = if next >= FULL_TIME_SECONDS {
                    ClockState::FullTime
                } else {
                    ClockState::Running { elapsed: next }
                };
                Transition::Applied
            }
            _ => Transition::Ignored("clock is not running"),
        }
    }

    pub fn increment_score(&mut self, team: Team) -> Transition {
        let score = self.score_mut(team);
        *score = score.saturating_add(1);
        Transition::Applied
    }

    pub fn decrement_score(&mut self, team: Team) -> Transition {
        let score = self.score_mut(team);
        if *score == 0 {
            return Transition::Ignored("score is already zero");
        }
        *score -= 1;
        Transition::Applied
    }

    pub fn snapshot(&self) -> Snapshot {
        let elapsed_seconds = self.elapsed_seconds();
        Snapshot {
            elapsed_seconds,
            formatted_time: format_time(elapsed_seconds),
            status: self.status(),
            running: self.is_running(),
            score_home: self.score_home,
            score_away: self.score_away,
        }
    }

    fn score_mut(&mut self, team: Team) -> &mut u32 {
        match team {
            Team::Home => &mut self.score_home,
            Team::Away => &mut self.score_away,
        }
    }
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats elapsed seconds as zero-padded `MM:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> MatchClock {
        let mut clock = MatchClock::new();
        clock.start();
        clock
    }

    fn tick_n(clock: &mut MatchClock, n: u32) {
        for _ in 0..n {
            clock.tick();
        }
    }

    fn initial_snapshot() -> Snapshot {
        Snapshot {
            elapsed_seconds: 0,
            formatted_time: "00:00".to_string(),
            status: MatchStatus::NotStarted,
            running: false,
            score_home: 0,
            score_away: 0,
        }
    }

    #[test]
    fn test_new_clock_is_not_started() {
        let clock = MatchClock::new();
        assert_eq!(clock.state(), ClockState::NotStarted);
        assert_eq!(clock.snapshot(), initial_snapshot());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(5399), "89:59");
        assert_eq!(format_time(FULL_TIME_SECONDS), "90:00");
    }

    #[test]
    fn test_start_then_pause_keeps_time_and_status() {
        let mut clock = started();
        assert_eq!(clock.pause(), Transition::Applied);

        assert_eq!(clock.elapsed_seconds(), 0);
        assert_eq!(clock.status(), MatchStatus::InProgress);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_pause_resume_scenario() {
        let mut clock = started();
        tick_n(&mut clock, 90);
        clock.pause();
        clock.start();
        tick_n(&mut clock, 30);

        let snapshot = clock.snapshot();
        assert_eq!(snapshot.elapsed_seconds, 120);
        assert_eq!(snapshot.formatted_time, "02:00");
        assert_eq!(snapshot.status, MatchStatus::InProgress);
        assert!(snapshot.running);
    }

    #[test]
    fn test_full_time_after_5400_ticks() {
        let mut clock = started();
        tick_n(&mut clock, FULL_TIME_SECONDS - 1);
        assert_eq!(clock.state(), ClockState::Running { elapsed: 5399 });

        assert_eq!(clock.tick(), Transition::Applied);
        assert_eq!(clock.state(), ClockState::FullTime);
        assert_eq!(clock.status(), MatchStatus::FullTime);
        assert!(!clock.is_running());

        assert!(!clock.tick().is_applied());
        assert_eq!(clock.elapsed_seconds(), FULL_TIME_SECONDS);
        assert_eq!(clock.snapshot().formatted_time, "90:00");
    }

    #[test]
    fn test_start_and_pause_ignored_at_full_time() {
        let mut clock = started();
        tick_n(&mut clock, FULL_TIME_SECONDS);

        assert!(!clock.start().is_applied());
        assert!(!clock.pause().is_applied());
        assert!(!clock.toggle().is_applied());
        assert_eq!(clock.state(), ClockState::FullTime);
    }

    #[test]
    fn test_scores_stay_mutable_at_full_time() {
        let mut clock = started();
        tick_n(&mut clock, FULL_TIME_SECONDS);

        clock.increment_score(Team::Away);
        assert_eq!(clock.score(Team::Away), 1);
        clock.decrement_score(Team::Away);
        assert_eq!(clock.score(Team::Away), 0);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut clock = MatchClock::new();
        assert!(!clock.tick().is_applied());
        assert_eq!(clock.status(), MatchStatus::NotStarted);

        clock.start();
        clock.tick();
        clock.pause();
        assert!(!clock.tick().is_applied());
        assert_eq!(clock.elapsed_seconds(), 1);
    }

    #[test]
    fn test_pause_is_noop_unless_running() {
        let mut clock = MatchClock::new();
        assert!(!clock.pause().is_applied());
        assert_eq!(clock.state(), ClockState::NotStarted);

        clock.start();
        clock.pause();
        assert!(!clock.pause().is_applied());
        assert_eq!(clock.state(), ClockState::Paused { elapsed: 0 });
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut clock = started();
        clock.tick();
        assert!(!clock.start().is_applied());
        assert_eq!(clock.state(), ClockState::Running { elapsed: 1 });
    }

    #[test]
    fn test_toggle_alternates() {
        let mut clock = MatchClock::new();
        clock.toggle();
        assert!(clock.is_running());
        clock.toggle();
        assert_eq!(clock.state(), ClockState::Paused { elapsed: 0 });
        clock.toggle();
        assert!(clock.is_running());
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut clock = MatchClock::new();
        for _ in 0..3 {
            clock.increment_score(Team::Home);
        }
        for _ in 0..5 {
            clock.decrement_score(Team::Home);
        }
        assert_eq!(clock.score(Team::Home), 0);
        assert_eq!(clock.score(Team::Away), 0);
        assert_eq!(clock.decrement_score(Team::Home), Transition::Ignored("score is already zero"));
    }

    #[test]
    fn test_scores_are_independent() {
        let mut clock = MatchClock::new();
        clock.increment_score(Team::Home);
        clock.increment_score(Team::Home);
        clock.increment_score(Team::Away);
        clock.decrement_score(Team::Home);

        let snapshot = clock.snapshot();
        assert_eq!(snapshot.score_home, 1);
        assert_eq!(snapshot.score_away, 1);
        assert_eq!(snapshot.scoreline(), "1 - 1");
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Start,
        Pause,
        Toggle,
        Tick,
        Inc(Team),
        Dec(Team),
        Reset,
    }

    const OPS: [Op; 9] = [
        Op::Start,
        Op::Pause,
        Op::Toggle,
        Op::Tick,
        Op::Inc(Team::Home),
        Op::Inc(Team::Away),
        Op::Dec(Team::Home),
        Op::Dec(Team::Away),
        Op::Reset,
    ];

    fn apply(clock: &mut MatchClock, op: Op) {
        match op {
            Op::Start => clock.start(),
            Op::Pause => clock.pause(),
            Op::Toggle => clock.toggle(),
            Op::Tick => clock.tick(),
            Op::Inc(team) => clock.increment_score(team),
            Op::Dec(team) => clock.decrement_score(team),
            Op::Reset => clock.reset(),
        };
    }

    /// Every sequence of up to five operations, starting near full time so
    /// the boundary is reachable within the sequence.
    fn for_each_sequence(mut check: impl FnMut(&[Op], &MatchClock, &MatchClock)) {
        let base = OPS.len();
        for len in 1..=5u32 {
            for mut n in 0..base.pow(len) {
                let mut ops = Vec::with_capacity(len as usize);
                for _ in 0..len {
                    ops.push(OPS[n % base]);
                    n /= base;
                }

                let mut clock = MatchClock {
                    state: ClockState::Running {
                        elapsed: FULL_TIME_SECONDS - 2,
                    },
                    score_home: 0,
                    score_away: 1,
                };
                for op in &ops {
                    let before = clock.clone();
                    apply(&mut clock, *op);
                    check(&ops, &before, &clock);
                }
            }
        }
    }

    #[test]
    fn test_invariants_hold_for_all_short_sequences() {
        for_each_sequence(|ops, before, after| {
            let snapshot = after.snapshot();
            assert!(snapshot.elapsed_seconds <= FULL_TIME_SECONDS, "{:?}", ops);
            if snapshot.running {
                assert_eq!(snapshot.status, MatchStatus::InProgress, "{:?}", ops);
                assert!(snapshot.elapsed_seconds < FULL_TIME_SECONDS, "{:?}", ops);
            }
            if snapshot.status == MatchStatus::FullTime {
                assert_eq!(snapshot.elapsed_seconds, FULL_TIME_SECONDS, "{:?}", ops);
            }
            // time only moves forward unless reset
            if after.status() != MatchStatus::NotStarted {
                assert!(after.elapsed_seconds() >= before.elapsed_seconds(), "{:?}", ops);
            }
        });
    }

    #[test]
    fn test_reset_from_any_reachable_state() {
        for_each_sequence(|_, _, after| {
            let mut clock = after.clone();
            assert_eq!(clock.reset(), Transition::Applied);
            assert_eq!(clock.snapshot(), initial_snapshot());
            assert_eq!(clock, MatchClock::new());
        });
    }
}
