use crate::*;
use serde::{Deserialize, Serialize};

/// Round phase. Always derived from the guess history on read, never
/// stored, so it cannot drift out of sync with the ledger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Solved,
    Exhausted,
}

impl RoundState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One scored submission. Built by the engine at submission time and owned
/// by the history; never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub point: LatLng,
    pub distance_feet: f64,
    pub bearing_deg: f64,
    pub compass: Compass,
}

/// Scoring and state machine for a single round.
///
/// The history is the only mutable state; `remaining`, `is_solved`,
/// `is_revealed` and `state` are recomputed from it on every read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessEngine {
    config: RoundConfig,
    guesses: Vec<Guess>,
}

impl GuessEngine {
    pub fn new(config: RoundConfig) -> Self {
        Self {
            config,
            guesses: Vec::new(),
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Ordered guess ledger, first guess first.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    pub fn guess_count(&self) -> GuessCount {
        self.guesses.len() as GuessCount
    }

    pub fn remaining(&self) -> GuessCount {
        self.config.max_guesses.saturating_sub(self.guess_count())
    }

    pub fn is_solved(&self) -> bool {
        self.guesses
            .iter()
            .any(|guess| guess.distance_feet <= self.config.win_radius_feet)
    }

    pub fn is_revealed(&self) -> bool {
        self.is_solved() || self.guess_count() >= self.config.max_guesses
    }

    pub fn state(&self) -> RoundState {
        if self.is_solved() {
            RoundState::Solved
        } else if self.guess_count() >= self.config.max_guesses {
            RoundState::Exhausted
        } else {
            RoundState::InProgress
        }
    }

    /// The target stays hidden from shells until the round is over.
    pub fn target(&self) -> Option<LatLng> {
        self.is_revealed().then_some(self.config.target)
    }

    /// Scores `candidate` against the target, appends it to the history and
    /// evaluates the terminal transitions. Submissions on a finished round
    /// (or with the budget spent) are absorbed as [`GuessOutcome::Ignored`]
    /// rather than errors; shells disable the control in those states.
    pub fn submit_guess(&mut self, candidate: LatLng) -> GuessOutcome {
        if self.is_solved() || self.remaining() == 0 {
            return GuessOutcome::Ignored;
        }

        let distance_feet = meters_to_feet(haversine_m(candidate, self.config.target));
        let bearing_deg = initial_bearing_deg(candidate, self.config.target);
        let guess = Guess {
            point: candidate,
            distance_feet,
            bearing_deg,
            compass: Compass::from_bearing_deg(bearing_deg),
        };
        self.guesses.push(guess);

        if distance_feet <= self.config.win_radius_feet {
            GuessOutcome::Solved(guess)
        } else if self.guess_count() >= self.config.max_guesses {
            GuessOutcome::Exhausted(guess)
        } else {
            GuessOutcome::Scored(guess)
        }
    }

    /// Clears the history, returning the round to a fresh playable state.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.guesses.clear();
    }
}
