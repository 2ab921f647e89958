//! Pseudo-random number generation: a deterministic linear congruential
//! generator plus thin wrappers over the system random source.

mod lcg;
mod params;
mod system;

pub use lcg::{random_seed_with, Lcg};
pub use params::LcgParams;
pub use system::{
    generate_random_float, generate_random_integer, random_float_with, random_integer_with,
};
