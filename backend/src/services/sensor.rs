//! Simulated soil/environment sensor readings
//!
//! There is no real sensor hardware; every request draws a fresh reading
//! from a randomness source. The source is a parameter so tests can pass a
//! seeded generator.

use rand::Rng;

use crate::models::SensorReading;

/// Draw a fresh reading from the given randomness source.
///
/// Ranges are inclusive: moisture 10-40 %, pH 4.5-7.5 rounded to one
/// decimal, temperature 20-35 °C, humidity 50-90 %.
pub fn simulate_reading<R: Rng + ?Sized>(rng: &mut R) -> SensorReading {
    SensorReading {
        moisture: rng.gen_range(10..=40),
        ph: round_to_one_decimal(rng.gen_range(4.5..=7.5)),
        temperature: rng.gen_range(20..=35),
        humidity: rng.gen_range(50..=90),
    }
}

impl SensorReading {
    /// Draw a reading from the process-wide randomness source
    pub fn simulate() -> Self {
        simulate_reading(&mut rand::thread_rng())
    }
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_to_one_decimal(5.4499), 5.4);
        assert_eq!(round_to_one_decimal(5.45), 5.5);
        assert_eq!(round_to_one_decimal(7.5), 7.5);
    }

    #[test]
    fn same_seed_gives_same_reading() {
        let a = simulate_reading(&mut StdRng::seed_from_u64(42));
        let b = simulate_reading(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
