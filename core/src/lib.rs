use serde::{Deserialize, Serialize};

pub use color::*;
pub use compass::*;
pub use engine::*;
pub use error::*;
pub use format::*;
pub use generator::*;
pub use geo::*;
pub use session::*;

mod color;
mod compass;
mod engine;
mod error;
mod format;
mod generator;
mod geo;
mod session;

/// Count type used for guess budgets and history lengths.
pub type GuessCount = u8;

pub const DEFAULT_WIN_RADIUS_FEET: f64 = 10.0;
pub const DEFAULT_MAX_GUESSES: GuessCount = 6;

/// Fixed parameters of a single round. Created once at round start and
/// immutable for the round's lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub target: LatLng,
    /// Opaque to the engine; the shell decides how to display it.
    pub photo_url: String,
    pub win_radius_feet: f64,
    pub max_guesses: GuessCount,
}

impl RoundConfig {
    pub const fn new_unchecked(
        target: LatLng,
        photo_url: String,
        win_radius_feet: f64,
        max_guesses: GuessCount,
    ) -> Self {
        Self {
            target,
            photo_url,
            win_radius_feet,
            max_guesses,
        }
    }

    pub fn new(
        target: LatLng,
        photo_url: String,
        win_radius_feet: f64,
        max_guesses: GuessCount,
    ) -> Self {
        let win_radius_feet = if win_radius_feet.is_finite() && win_radius_feet > 0.0 {
            win_radius_feet
        } else {
            DEFAULT_WIN_RADIUS_FEET
        };
        let max_guesses = max_guesses.max(1);
        Self::new_unchecked(target, photo_url, win_radius_feet, max_guesses)
    }

    pub fn from_spot(spot: PhotoSpot, win_radius_feet: f64, max_guesses: GuessCount) -> Self {
        Self::new(spot.point, spot.photo_url, win_radius_feet, max_guesses)
    }
}

/// Result of placing or clearing the pending map pin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PinOutcome {
    NoChange,
    Placed,
    Cleared,
}

impl PinOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Result of a guess submission. `Ignored` means the preconditions failed
/// and nothing was mutated; the other variants carry the scored guess so
/// the shell can render feedback immediately.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    Ignored,
    Scored(Guess),
    Solved(Guess),
    Exhausted(Guess),
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved(_) | Self::Exhausted(_))
    }

    pub fn guess(self) -> Option<Guess> {
        match self {
            Self::Ignored => None,
            Self::Scored(guess) | Self::Solved(guess) | Self::Exhausted(guess) => Some(guess),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_degenerate_values_to_defaults() {
        let config = RoundConfig::new(LatLng::new(0.0, 0.0), String::new(), -3.0, 0);

        assert_eq!(config.win_radius_feet, DEFAULT_WIN_RADIUS_FEET);
        assert_eq!(config.max_guesses, 1);
    }

    #[test]
    fn config_keeps_valid_values() {
        let config = RoundConfig::new(LatLng::new(0.0, 0.0), String::new(), 25.0, 3);

        assert_eq!(config.win_radius_feet, 25.0);
        assert_eq!(config.max_guesses, 3);
    }

    #[test]
    fn outcome_accessors_distinguish_ignored_from_effective() {
        let guess = Guess {
            point: LatLng::new(0.0, 0.0),
            distance_feet: 1.0,
            bearing_deg: 0.0,
            compass: Compass::N,
        };

        assert!(!GuessOutcome::Ignored.has_update());
        assert_eq!(GuessOutcome::Ignored.guess(), None);
        assert!(GuessOutcome::Scored(guess).has_update());
        assert!(!GuessOutcome::Scored(guess).is_terminal());
        assert!(GuessOutcome::Solved(guess).is_terminal());
        assert!(GuessOutcome::Exhausted(guess).is_terminal());
    }
}
