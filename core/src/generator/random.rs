use super::*;

/// Uniform seeded pick over the candidate pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomSpotPicker {
    seed: u64,
}

impl RandomSpotPicker {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SpotPicker for RandomSpotPicker {
    fn pick(self, pool: &[PhotoSpot]) -> Result<PhotoSpot> {
        use rand::prelude::*;

        if pool.is_empty() {
            log::warn!("asked to pick a spot from an empty pool");
            return Err(GameError::EmptyPool);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let index = rng.random_range(0..pool.len());
        Ok(pool[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<PhotoSpot> {
        [
            (41.78857, -87.59946),
            (41.79054, -87.60131),
            (41.79219, -87.59802),
            (41.78801, -87.60459),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (lat, lng))| PhotoSpot::new(LatLng::new(lat, lng), format!("photo-{i}.png")))
        .collect()
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert_eq!(
            RandomSpotPicker::new(7).pick(&[]),
            Err(GameError::EmptyPool)
        );
    }

    #[test]
    fn picks_come_from_the_pool() {
        let pool = pool();

        for seed in 0..32 {
            let spot = RandomSpotPicker::new(seed).pick(&pool).unwrap();
            assert!(pool.contains(&spot));
        }
    }

    #[test]
    fn same_seed_picks_the_same_spot() {
        let pool = pool();

        let first = RandomSpotPicker::new(42).pick(&pool).unwrap();
        let second = RandomSpotPicker::new(42).pick(&pool).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn picked_spot_builds_a_round_config() {
        let spot = RandomSpotPicker::new(3).pick(&pool()).unwrap();
        let target = spot.point;

        let config = RoundConfig::from_spot(spot, 10.0, 6);

        assert_eq!(config.target, target);
        assert_eq!(config.max_guesses, 6);
    }
}
