pub mod mc_engine;

pub use mc_engine::{Estimator, MonteCarloPricingEngine};
