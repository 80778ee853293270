use rand::Rng;

use agrisync_api::Channel;

/// One delta draw per simulated channel, applied as a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDeltas {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl TickDeltas {
    /// Draws three independent deltas from `rng`, one per channel.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            soil_moisture: draw_delta(rng, Channel::SoilMoisture),
            temperature: draw_delta(rng, Channel::Temperature),
            humidity: draw_delta(rng, Channel::Humidity),
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::SoilMoisture => self.soil_moisture,
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
        }
    }
}

/// Draws one centered uniform delta for a channel: `(U(0,1) - 0.5) * span`.
pub fn draw_delta<R: Rng + ?Sized>(rng: &mut R, channel: Channel) -> f64 {
    (rng.random::<f64>() - 0.5) * channel.span()
}

/// Applies a delta to a reading with a saturating clamp to the channel's
/// physical bounds.
pub fn perturb(channel: Channel, value: f64, delta: f64) -> f64 {
    let (min, max) = channel.bounds();
    (value + delta).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_delta_stays_within_half_span() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            for channel in Channel::ALL {
                let delta = draw_delta(&mut rng, channel);
                assert!(delta.abs() <= channel.span() / 2.0);
            }
        }
    }

    #[test]
    fn test_draw_is_deterministic_under_fixed_seed() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(TickDeltas::draw(&mut first), TickDeltas::draw(&mut second));
        }
    }

    #[test]
    fn test_perturb_within_bounds_is_plain_addition() {
        let value = perturb(Channel::SoilMoisture, 65.0, 1.8);

        assert!((value - 66.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_perturb_clamps_at_upper_bound() {
        let value = perturb(Channel::Temperature, 39.2, 3.0);

        assert_eq!(value, 40.0);
    }

    #[test]
    fn test_perturb_clamps_at_lower_bound() {
        let value = perturb(Channel::Humidity, 40.5, -4.0);

        assert_eq!(value, 40.0);
    }
}
