//! Asset-price process models.
//!
//! Only geometric Brownian motion is in scope: the Monte Carlo estimators
//! sample its exact terminal distribution, and the path simulator applies its
//! discretized log-Euler update.

/// Geometric Brownian motion parameters under the pricing measure.
///
/// `mu` is the continuously compounded drift (the risk-free rate under the
/// risk-neutral measure) and `sigma` the annualized volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    /// Log-space drift accumulated over horizon `t`: `(mu - sigma^2/2) * t`.
    #[inline]
    pub fn log_drift(&self, t: f64) -> f64 {
        (self.mu - 0.5 * self.sigma * self.sigma) * t
    }

    /// Diffusion scale over horizon `t`: `sigma * sqrt(t)`.
    #[inline]
    pub fn diffusion(&self, t: f64) -> f64 {
        self.sigma * t.sqrt()
    }

    /// Maps a standard-normal draw to a terminal price over horizon `t`.
    ///
    /// `S_T = s0 * exp((mu - sigma^2/2) t + sigma sqrt(t) z)` — the exact
    /// terminal distribution, with no discretization bias. Positive for any
    /// finite draw because of the exponential map.
    #[inline]
    pub fn terminal(&self, s0: f64, t: f64, z: f64) -> f64 {
        s0 * self.diffusion(t).mul_add(z, self.log_drift(t)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_draw_recovers_median_price() {
        let model = Gbm {
            mu: 0.05,
            sigma: 0.2,
        };
        let st = model.terminal(100.0, 1.0, 0.0);
        assert_relative_eq!(st, 100.0 * (0.05_f64 - 0.02).exp(), epsilon = 1e-12);
    }

    #[test]
    fn terminal_price_stays_positive_for_extreme_draws() {
        let model = Gbm {
            mu: 0.01,
            sigma: 0.5,
        };
        for z in [-8.0, -4.0, 0.0, 4.0, 8.0] {
            assert!(model.terminal(50.0, 2.0, z) > 0.0);
        }
    }
}
