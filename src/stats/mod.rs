// src/stats/mod.rs
//
// Numerical building blocks: standard normal tail probabilities and
// proportion arithmetic (rates, lifts, standard errors).

pub mod normal;
pub mod proportion;

pub use normal::{norm_cdf, norm_sf};
pub use proportion::{conversion_rate, lift, standard_error, standard_error_diff};
