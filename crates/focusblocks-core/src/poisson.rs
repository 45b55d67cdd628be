//! Poisson-distributed event counts.

use crate::rng::UniformSource;

/// Draw an event count from a Poisson distribution with the given mean.
///
/// Uses Knuth's multiplicative method: multiply uniform draws together until
/// the product falls to `e^-mean` or below. A mean of zero always yields 0
/// after consuming exactly one draw, which keeps the stream position
/// predictable for days with no expected interruptions.
///
/// Cost grows linearly with the mean and precision degrades past roughly 30,
/// which is above anything a working day needs.
pub fn sample_poisson(mean: f64, rng: &mut impl UniformSource) -> u32 {
    let limit = (-mean).exp();
    let mut k: u32 = 0;
    let mut p = 1.0_f64;
    loop {
        k += 1;
        p *= rng.next_f64();
        if p <= limit {
            break;
        }
    }
    k - 1
}
