use crate::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A round as a shell drives it: the engine plus the pending map pin and
/// session bookkeeping. Clocks are supplied by the caller so sessions stay
/// deterministic in tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSession {
    engine: GuessEngine,
    play_area: Option<GeoBounds>,
    pending_pin: Option<LatLng>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    move_count: u32,
}

impl RoundSession {
    pub fn new(engine: GuessEngine) -> Self {
        Self::with_play_area(engine, None)
    }

    pub fn with_play_area(engine: GuessEngine, play_area: Option<GeoBounds>) -> Self {
        Self {
            engine,
            play_area,
            pending_pin: None,
            started_at: None,
            ended_at: None,
            move_count: 0,
        }
    }

    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    pub fn play_area(&self) -> Option<GeoBounds> {
        self.play_area
    }

    pub fn pending_pin(&self) -> Option<LatLng> {
        self.pending_pin
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Drops a candidate pin on the map. Points outside the play area and
    /// pins on a finished round are ignored, matching the disabled controls
    /// of the shell.
    pub fn place_pin(&mut self, point: LatLng) -> PinOutcome {
        if self.engine.state().is_terminal() {
            log::debug!("pin ignored, round already over");
            return PinOutcome::NoChange;
        }
        if let Some(area) = self.play_area {
            if !area.contains(point) {
                log::debug!("pin outside play area: {}", point);
                return PinOutcome::NoChange;
            }
        }
        log::trace!("pin placed: {}", point);
        self.pending_pin = Some(point);
        PinOutcome::Placed
    }

    pub fn clear_pin(&mut self) -> PinOutcome {
        match self.pending_pin.take() {
            Some(_) => PinOutcome::Cleared,
            None => PinOutcome::NoChange,
        }
    }

    /// Submits the pending pin, if any. The pin survives the submission,
    /// like a marker left where the player last clicked.
    pub fn submit(&mut self, now: DateTime<Utc>) -> GuessOutcome {
        let Some(point) = self.pending_pin else {
            return GuessOutcome::Ignored;
        };

        let outcome = self.engine.submit_guess(point);
        if outcome.has_update() {
            log::debug!(
                "guess #{} scored at {}",
                self.engine.guess_count(),
                format_feet(outcome.guess().map(|g| g.distance_feet).unwrap_or(0.0)),
            );
            self.on_successful_move(now);
        }
        outcome
    }

    /// Returns the round to its initial state: empty history, no pending
    /// pin, no timing. Idempotent.
    pub fn reset(&mut self) {
        log::debug!("round reset");
        self.engine.reset();
        self.pending_pin = None;
        self.started_at = None;
        self.ended_at = None;
        self.move_count = 0;
    }

    fn on_successful_move(&mut self, now: DateTime<Utc>) {
        self.move_count = self.move_count.saturating_add(1);

        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if self.engine.state().is_terminal() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }
}
