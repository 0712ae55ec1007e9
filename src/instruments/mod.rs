//! Priceable instrument contracts.

pub mod vanilla;

pub use vanilla::EuropeanOption;
