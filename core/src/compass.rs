use core::fmt;
use serde::{Deserialize, Serialize};

/// Eight-point compass direction attached to each scored guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Nearest 45° sector by `round(deg / 45) mod 8`; exact 22.5° boundaries
    /// round half-up. Total over any finite input, not just `[0, 360)`.
    pub fn from_bearing_deg(deg: f64) -> Self {
        let sector = ((deg / 45.0).round() as isize).rem_euclid(8) as usize;
        Self::ALL[sector]
    }

    /// Arrow glyph used by shells next to the formatted distance.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::N => "⬆️",
            Self::NE => "↗️",
            Self::E => "➡️",
            Self::SE => "↘️",
            Self::S => "⬇️",
            Self::SW => "↙️",
            Self::W => "⬅️",
            Self::NW => "↖️",
        }
    }

    pub const fn abbr(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}
