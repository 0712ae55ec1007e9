//! Full-path GBM simulation for display consumers.
//!
//! This feeds chart-style collaborators and is not a pricing primitive: the
//! estimators in [`crate::mc`] sample the exact terminal distribution and
//! never touch this discretization.

use nalgebra::DMatrix;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::core::PricingError;
use crate::models::Gbm;

/// Default number of simulated display paths.
pub const DEFAULT_NUM_PATHS: usize = 1_000;

/// Default number of time steps per path (one trading year, daily).
pub const DEFAULT_NUM_STEPS: usize = 252;

/// Simulates a `(num_steps + 1) x num_paths` matrix of GBM paths.
///
/// Each column is one path; row 0 holds the initial spot for every path, and
/// successive rows apply the discretized update
/// `S_{t+1} = S_t * exp((r - sigma^2/2) dt + sigma sqrt(dt) Z)` with
/// `dt = expiry / num_steps`. All entries are strictly positive.
///
/// # Errors
/// - [`PricingError::Domain`] for non-positive `spot`, `vol`, or `expiry`.
/// - [`PricingError::SampleSize`] when `num_paths` or `num_steps` is zero.
///
/// # Examples
/// ```
/// use ferrovan::mc::paths::simulate_paths;
///
/// let paths = simulate_paths(100.0, 1.0, 0.05, 0.2, 50, 10, 42).unwrap();
/// assert_eq!(paths.shape(), (11, 50));
/// assert!(paths.row(0).iter().all(|&s| s == 100.0));
/// ```
pub fn simulate_paths(
    spot: f64,
    expiry: f64,
    rate: f64,
    vol: f64,
    num_paths: usize,
    num_steps: usize,
    seed: u64,
) -> Result<DMatrix<f64>, PricingError> {
    if spot <= 0.0 {
        return Err(PricingError::Domain("spot must be > 0".to_string()));
    }
    if vol <= 0.0 {
        return Err(PricingError::Domain("vol must be > 0".to_string()));
    }
    if expiry <= 0.0 {
        return Err(PricingError::Domain("expiry must be > 0".to_string()));
    }
    if num_paths == 0 {
        return Err(PricingError::SampleSize(
            "num_paths must be > 0".to_string(),
        ));
    }
    if num_steps == 0 {
        return Err(PricingError::SampleSize(
            "num_steps must be > 0".to_string(),
        ));
    }

    let model = Gbm {
        mu: rate,
        sigma: vol,
    };
    let dt = expiry / num_steps as f64;
    let drift = model.log_drift(dt);
    let diffusion = model.diffusion(dt);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut paths = DMatrix::zeros(num_steps + 1, num_paths);

    for j in 0..num_paths {
        let mut s = spot;
        paths[(0, j)] = s;
        for i in 0..num_steps {
            let z: f64 = StandardNormal.sample(&mut rng);
            s *= diffusion.mul_add(z, drift).exp();
            paths[(i + 1, j)] = s;
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_shape_and_initial_row() {
        let paths = simulate_paths(100.0, 1.0, 0.05, 0.2, 50, 10, 42).unwrap();
        assert_eq!(paths.shape(), (11, 50));
        assert!(paths.row(0).iter().all(|&s| s == 100.0));
        assert!(paths.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn identical_seeds_reproduce_the_matrix() {
        let a = simulate_paths(100.0, 0.5, 0.02, 0.3, 8, 16, 9).unwrap();
        let b = simulate_paths(100.0, 0.5, 0.02, 0.3, 8, 16, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_zero_paths_and_zero_steps() {
        assert!(matches!(
            simulate_paths(100.0, 1.0, 0.05, 0.2, 0, 10, 42),
            Err(PricingError::SampleSize(_))
        ));
        assert!(matches!(
            simulate_paths(100.0, 1.0, 0.05, 0.2, 10, 0, 42),
            Err(PricingError::SampleSize(_))
        ));
    }

    #[test]
    fn rejects_degenerate_expiry() {
        assert!(matches!(
            simulate_paths(100.0, 0.0, 0.05, 0.2, 10, 10, 42),
            Err(PricingError::Domain(_))
        ));
    }
}
