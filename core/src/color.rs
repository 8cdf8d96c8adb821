use core::fmt;
use serde::{Deserialize, Serialize};

/// Distance at which the gradient bottoms out at its coldest stop.
///
/// Presentation constant only: deliberately independent of the configured
/// win radius and map extent.
pub const COLOR_SCALE_FEET: f64 = 5_000.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Cold-to-hot stops over normalized closeness `t`, in increasing `t`.
const GRADIENT_STOPS: [(f64, Rgb); 7] = [
    (0.0, Rgb::new(0, 0, 0)),      // black
    (0.15, Rgb::new(128, 0, 128)), // purple
    (0.30, Rgb::new(0, 0, 255)),   // blue
    (0.50, Rgb::new(0, 255, 0)),   // green
    (0.70, Rgb::new(255, 255, 0)), // yellow
    (0.85, Rgb::new(255, 165, 0)), // orange
    (1.0, Rgb::new(255, 0, 0)),    // red
];

/// Marker color for a guess: `distance_feet = 0` hits the hottest stop,
/// anything at or beyond [`COLOR_SCALE_FEET`] the coldest. Pure and
/// deterministic; no effect on game state.
pub fn closeness_color(distance_feet: f64) -> Rgb {
    let t = (1.0 - distance_feet / COLOR_SCALE_FEET).clamp(0.0, 1.0);

    let mut i = 0;
    while i < GRADIENT_STOPS.len() - 1 && t > GRADIENT_STOPS[i + 1].0 {
        i += 1;
    }
    let (t1, c1) = GRADIENT_STOPS[i];
    let (t2, c2) = GRADIENT_STOPS[i + 1];
    let f = (t - t1) / (t2 - t1);

    Rgb::new(
        lerp_channel(c1.r, c2.r, f),
        lerp_channel(c1.g, c2.g, f),
        lerp_channel(c1.b, c2.b, f),
    )
}

fn lerp_channel(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_is_hottest() {
        assert_eq!(closeness_color(0.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn scale_distance_and_beyond_are_coldest() {
        assert_eq!(closeness_color(5_000.0), Rgb::new(0, 0, 0));
        assert_eq!(closeness_color(25_000.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn stop_distances_hit_their_stop_exactly() {
        // t = 0.7 → yellow
        assert_eq!(closeness_color(1_500.0), Rgb::new(255, 255, 0));
        // t = 0.5 → green
        assert_eq!(closeness_color(2_500.0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn interior_values_interpolate_per_channel() {
        // t = 0.0375, a quarter of the way from black to purple
        assert_eq!(closeness_color(4_812.5), Rgb::new(32, 0, 32));
        // t = 0.91, 40% of the way from orange to red
        assert_eq!(closeness_color(450.0), Rgb::new(255, 99, 0));
    }

    #[test]
    fn css_rendering_matches_the_marker_format() {
        assert_eq!(Rgb::new(255, 165, 0).to_string(), "rgb(255,165,0)");
    }
}
