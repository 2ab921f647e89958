use super::params::LcgParams;
use crate::error::MathError;
use rand::Rng;

/// Linear Congruential Generator
///
/// Xi+1 = (a x Xi + c) mod m
///
/// here state is Xi (the seed). A modulus of 0 stands for 2^64, the whole
/// range of `u64`, so the generator then behaves like wrapping arithmetic.
///
/// For a usable generator the parameters should satisfy
///
/// - 0 < m
/// - 0 < a < m
/// - 0 <= c < m
/// - 0 <= X0 < m
///
/// [`Lcg::new`] trusts its arguments; [`Lcg::try_new`] checks them.
/// Out of range values still give a well-defined (but possibly short or
/// skewed) sequence, never a panic.
///
/// ```
/// use mathform::{Lcg, LcgParams};
///
/// let mut lcg = Lcg::from_params(LcgParams::ZX81, 1);
/// assert_eq!(lcg.step(), 149);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    modulus: u64,
    multiplier: u64,
    increment: u64,
    seed: u64,
}

impl Lcg {
    pub fn new(modulus: u64, multiplier: u64, increment: u64, seed: u64) -> Lcg {
        Lcg {
            modulus,
            multiplier,
            increment,
            seed,
        }
    }

    /// Like [`Lcg::new`], but rejects parameters outside their documented
    /// ranges. A modulus of 0 is rejected here rather than read as 2^64.
    pub fn try_new(
        modulus: u64,
        multiplier: u64,
        increment: u64,
        seed: u64,
    ) -> Result<Lcg, MathError> {
        let rejected = if modulus == 0 {
            Some(("modulus", modulus, "must be greater than 0"))
        } else if multiplier == 0 || multiplier >= modulus {
            Some(("multiplier", multiplier, "must be in (0, modulus)"))
        } else if increment >= modulus {
            Some(("increment", increment, "must be in [0, modulus)"))
        } else if seed >= modulus {
            Some(("seed", seed, "must be in [0, modulus)"))
        } else {
            None
        };
        if let Some((name, value, bound)) = rejected {
            log::warn!("Rejected LCG parameter {}={}: {}", name, value, bound);
            return Err(MathError::InvalidParameter { name, value, bound });
        }

        log::debug!(
            "LCG validated: m={} a={} c={} seed={}",
            modulus,
            multiplier,
            increment,
            seed
        );
        Ok(Lcg::new(modulus, multiplier, increment, seed))
    }

    pub fn from_params(params: LcgParams, seed: u64) -> Lcg {
        Lcg::new(params.modulus, params.multiplier, params.increment, seed)
    }

    /// Seeds the generator from the thread-local system random source.
    pub fn with_random_seed(params: LcgParams) -> Lcg {
        let seed = random_seed_with(&mut rand::thread_rng(), params.modulus);
        log::debug!("LCG seeded randomly with {}", seed);
        Lcg::from_params(params, seed)
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// The current state, which is also the last value returned by
    /// [`Lcg::step`].
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn params(&self) -> LcgParams {
        LcgParams {
            modulus: self.modulus,
            multiplier: self.multiplier,
            increment: self.increment,
        }
    }

    /// Iterates the recurrence once and returns the new seed.
    ///
    /// The product is accumulated in `u128`: (2^64 - 1)^2 + 2^64 - 1 is
    /// still below 2^128, so the modulo always sees the exact value.
    pub fn step(&mut self) -> u64 {
        let next = (self.multiplier as u128 * self.seed as u128 + self.increment as u128)
            % wide_modulus(self.modulus);
        self.seed = next as u64;
        self.seed
    }
}

impl Iterator for Lcg {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Draws a seed uniformly from `[0, modulus)`, where a modulus of 0 means
/// the full `u64` range.
pub fn random_seed_with<R: Rng + ?Sized>(rng: &mut R, modulus: u64) -> u64 {
    if modulus == 0 {
        rng.gen()
    } else {
        rng.gen_range(0..modulus)
    }
}

fn wide_modulus(modulus: u64) -> u128 {
    if modulus == 0 {
        1u128 << 64
    } else {
        modulus as u128
    }
}
