use crate::*;
use serde::{Deserialize, Serialize};

pub use random::*;

mod random;

/// One candidate location a round can be drawn from: where the photo was
/// taken, and the photo itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoSpot {
    pub point: LatLng,
    pub photo_url: String,
}

impl PhotoSpot {
    pub const fn new(point: LatLng, photo_url: String) -> Self {
        Self { point, photo_url }
    }
}

/// Strategy for drawing the round's target from a candidate pool.
pub trait SpotPicker {
    fn pick(self, pool: &[PhotoSpot]) -> Result<PhotoSpot>;
}
