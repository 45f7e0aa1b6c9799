//! Salary normalization
//!
//! Reduces one listing to "does it count" and "what number does it add".

mod normalizer;

pub use normalizer::{Normalized, SalaryNormalizer};
