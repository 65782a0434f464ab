//! Run state and the scoring state machine
//!
//! Score, difficulty, and phase for one run live here, and nothing else
//! writes them: the rest of the crate hands in classified contacts and
//! reads the result.

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASE_SPEED_FACTOR, MAX_SPEED_FACTOR, MILESTONE_EVERY, SPEED_FACTOR_STEP, URGENCY_EVERY,
};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active play: gravity, scrolling, scoring
    Playing,
    /// Run ended; the world is frozen until the next activation
    GameOver,
}

/// Outbound notification for presentation layers (sound cues, labels).
///
/// Fire-and-forget: returned from `tick` in occurrence order and never read
/// back by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The score changed; carries the new total.
    ScoreChanged { score: u32 },
    /// A sixth point landed and the difficulty step was applied.
    UrgencyReached { speed_factor: f32 },
    /// A third point landed (and was not also a sixth).
    MilestoneReached,
    /// The run ended; carries the final score.
    GameOver { score: u32 },
    /// An activation was accepted this tick.
    Activated,
    /// A finished run was reset to a fresh one.
    Restarted,
}

/// Score, difficulty, and phase for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    /// Difficulty ramp value. Steps up every sixth point, capped, and reset
    /// the moment a run ends.
    pub speed_factor: f32,
    pub phase: GamePhase,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    pub fn new() -> Self {
        Self {
            score: 0,
            speed_factor: BASE_SPEED_FACTOR,
            phase: GamePhase::Playing,
        }
    }

    /// A scoring contact arrived. Ignored unless the run is in progress.
    pub fn on_scoring(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.score += 1;
        events.push(GameEvent::ScoreChanged { score: self.score });
        // Sixth points win the overlap: a score divisible by both 6 and 3
        // raises urgency and skips the milestone.
        if self.score % URGENCY_EVERY == 0 {
            self.speed_factor = (self.speed_factor + SPEED_FACTOR_STEP).min(MAX_SPEED_FACTOR);
            events.push(GameEvent::UrgencyReached {
                speed_factor: self.speed_factor,
            });
        } else if self.score % MILESTONE_EVERY == 0 {
            events.push(GameEvent::MilestoneReached);
        }
        log::debug!("score {}", self.score);
    }

    /// A lethal contact arrived. Idempotent: repeat reports of the terminal
    /// hit, in the same step or later ones, change nothing.
    ///
    /// Returns true when this call ended the run, so the caller can freeze
    /// the world exactly once.
    pub fn on_lethal(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        // The ramp resets on death, not on restart: the frozen end screen
        // already reads the base value.
        self.speed_factor = BASE_SPEED_FACTOR;
        events.push(GameEvent::GameOver { score: self.score });
        true
    }

    /// Activation while game over: begin a fresh run.
    ///
    /// Returns true when a restart happened, so the caller can rebuild the
    /// field. A no-op while a run is in progress.
    pub fn on_restart(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.score = 0;
        self.phase = GamePhase::Playing;
        events.push(GameEvent::Restarted);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score_n(run: &mut RunState, n: u32) {
        let mut events = Vec::new();
        for _ in 0..n {
            run.on_scoring(&mut events);
        }
    }

    #[test]
    fn test_each_pass_scores_one_point() {
        let mut run = RunState::new();
        let mut events = Vec::new();
        run.on_scoring(&mut events);
        run.on_scoring(&mut events);
        assert_eq!(run.score, 2);
        assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));
        assert!(events.contains(&GameEvent::ScoreChanged { score: 2 }));
    }

    #[test]
    fn test_urgency_every_sixth_milestone_every_other_third() {
        let mut run = RunState::new();
        for score in 1..=18u32 {
            let mut events = Vec::new();
            run.on_scoring(&mut events);
            let urgency = events
                .iter()
                .any(|e| matches!(e, GameEvent::UrgencyReached { .. }));
            let milestone = events.iter().any(|e| *e == GameEvent::MilestoneReached);
            assert_eq!(urgency, score % 6 == 0, "urgency wrong at score {score}");
            assert_eq!(
                milestone,
                score % 3 == 0 && score % 6 != 0,
                "milestone wrong at score {score}"
            );
            assert!(!(urgency && milestone));
        }
    }

    #[test]
    fn test_speed_factor_ladder_and_cap() {
        let mut run = RunState::new();
        assert_eq!(run.speed_factor, BASE_SPEED_FACTOR);
        score_n(&mut run, 6);
        assert_eq!(run.speed_factor, 4.0);
        score_n(&mut run, 6);
        assert_eq!(run.speed_factor, 6.0);
        score_n(&mut run, 6);
        assert_eq!(run.speed_factor, 8.0);
        score_n(&mut run, 6);
        assert_eq!(run.speed_factor, 10.0);
        // Further sixths stay pinned at the cap.
        score_n(&mut run, 12);
        assert_eq!(run.speed_factor, MAX_SPEED_FACTOR);
    }

    #[test]
    fn test_urgency_event_carries_new_factor() {
        let mut run = RunState::new();
        score_n(&mut run, 5);
        let mut events = Vec::new();
        run.on_scoring(&mut events);
        assert!(events.contains(&GameEvent::UrgencyReached { speed_factor: 4.0 }));
    }

    #[test]
    fn test_lethal_ends_run_once() {
        let mut run = RunState::new();
        score_n(&mut run, 4);
        let mut events = Vec::new();
        assert!(run.on_lethal(&mut events));
        assert_eq!(run.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::GameOver { score: 4 }]);

        // Repeat reports of the same terminal hit change nothing.
        let snapshot = run;
        events.clear();
        assert!(!run.on_lethal(&mut events));
        assert!(events.is_empty());
        assert_eq!(run, snapshot);
    }

    #[test]
    fn test_death_resets_speed_factor_immediately() {
        let mut run = RunState::new();
        score_n(&mut run, 12);
        assert_eq!(run.speed_factor, 6.0);
        let mut events = Vec::new();
        run.on_lethal(&mut events);
        // Reset lands with the death itself, while still game over.
        assert_eq!(run.phase, GamePhase::GameOver);
        assert_eq!(run.speed_factor, BASE_SPEED_FACTOR);
    }

    #[test]
    fn test_scoring_ignored_while_game_over() {
        let mut run = RunState::new();
        let mut events = Vec::new();
        run.on_lethal(&mut events);
        events.clear();
        run.on_scoring(&mut events);
        assert_eq!(run.score, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut run = RunState::new();
        score_n(&mut run, 2);
        let mut events = Vec::new();
        assert!(!run.on_restart(&mut events));
        assert!(events.is_empty());
        assert_eq!(run.score, 2);
    }

    #[test]
    fn test_restart_clears_score_and_resumes() {
        let mut run = RunState::new();
        score_n(&mut run, 5);
        let mut events = Vec::new();
        run.on_lethal(&mut events);
        events.clear();
        assert!(run.on_restart(&mut events));
        assert_eq!(run.phase, GamePhase::Playing);
        assert_eq!(run.score, 0);
        assert_eq!(run.speed_factor, BASE_SPEED_FACTOR);
        assert_eq!(events, vec![GameEvent::Restarted]);
    }

    proptest! {
        #[test]
        fn prop_score_counts_every_pass(n in 0u32..200) {
            let mut run = RunState::new();
            score_n(&mut run, n);
            prop_assert_eq!(run.score, n);
        }

        #[test]
        fn prop_speed_factor_never_exceeds_cap(n in 0u32..400) {
            let mut run = RunState::new();
            let mut events = Vec::new();
            for _ in 0..n {
                run.on_scoring(&mut events);
                prop_assert!(run.speed_factor <= MAX_SPEED_FACTOR);
                prop_assert!(run.speed_factor >= BASE_SPEED_FACTOR);
            }
        }

        #[test]
        fn prop_urgency_and_milestone_never_coincide(n in 1u32..300) {
            let mut run = RunState::new();
            score_n(&mut run, n - 1);
            let mut events = Vec::new();
            run.on_scoring(&mut events);
            let urgency = events.iter().any(|e| matches!(e, GameEvent::UrgencyReached { .. }));
            let milestone = events.iter().any(|e| *e == GameEvent::MilestoneReached);
            prop_assert!(!(urgency && milestone));
        }
    }
}
