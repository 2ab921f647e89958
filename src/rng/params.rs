/// The fixed part of a linear congruential generator: everything but the
/// seed. A modulus of 0 stands for 2^64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgParams {
    pub modulus: u64,
    pub multiplier: u64,
    pub increment: u64,
}

impl LcgParams {
    /// Sinclair ZX81. Not full period: 65536 is a fixed point and every
    /// other state lies on a single cycle of length 65536.
    pub const ZX81: LcgParams = LcgParams {
        modulus: (1 << 16) + 1,
        multiplier: 75,
        increment: 74,
    };

    /// Park and Miller "minimal standard", a multiplicative generator.
    /// Seed it with a non-zero value; 0 maps to itself.
    pub const MINSTD: LcgParams = LcgParams {
        modulus: (1 << 31) - 1,
        multiplier: 16807,
        increment: 0,
    };

    pub const NUMERICAL_RECIPES: LcgParams = LcgParams {
        modulus: 1 << 32,
        multiplier: 1664525,
        increment: 1013904223,
    };

    /// The example `rand()` from the C standard, without the output shift.
    pub const ANSI_C: LcgParams = LcgParams {
        modulus: 1 << 31,
        multiplier: 1103515245,
        increment: 12345,
    };

    pub const PRESETS: [(&'static str, LcgParams); 4] = [
        ("zx81", LcgParams::ZX81),
        ("minstd", LcgParams::MINSTD),
        ("numerical-recipes", LcgParams::NUMERICAL_RECIPES),
        ("ansi-c", LcgParams::ANSI_C),
    ];

    /// Case-insensitive lookup in [`LcgParams::PRESETS`]; `_` and `-` are
    /// interchangeable.
    pub fn by_name(name: &str) -> Option<LcgParams> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        LcgParams::PRESETS
            .iter()
            .find(|(preset, _)| *preset == wanted)
            .map(|&(_, params)| params)
    }

    /// Hull–Dobell theorem: the generator visits every state in
    /// `[0, modulus)` before repeating iff
    ///
    /// - gcd(c, m) = 1
    /// - a - 1 is divisible by every prime factor of m
    /// - a - 1 is divisible by 4 when m is
    ///
    /// Factoring is trial division, so a large prime modulus costs up to
    /// 2^32 divisions.
    pub fn has_full_period(&self) -> bool {
        if self.modulus == 0 {
            // m = 2^64: the only prime factor is 2
            return self.increment % 2 == 1 && self.multiplier % 4 == 1;
        }
        if self.modulus == 1 {
            return true;
        }
        if gcd(self.increment, self.modulus) != 1 {
            return false;
        }
        if self.modulus % 4 == 0 && self.multiplier % 4 != 1 {
            return false;
        }
        prime_factors(self.modulus)
            .into_iter()
            .all(|p| self.multiplier % p == 1)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Distinct prime factors in ascending order.
fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d <= n / d {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_full_period() {
        assert!(!LcgParams::ZX81.has_full_period());
        // c = 0 never has gcd 1 with m > 1
        assert!(!LcgParams::MINSTD.has_full_period());
        assert!(LcgParams::NUMERICAL_RECIPES.has_full_period());
        assert!(LcgParams::ANSI_C.has_full_period());
    }

    #[test]
    fn full_period_needs_multiplier_one_mod_four() {
        let params = LcgParams {
            modulus: 1 << 16,
            multiplier: 75,
            increment: 1,
        };
        assert!(!params.has_full_period());
        let params = LcgParams {
            multiplier: 77,
            ..params
        };
        assert!(params.has_full_period());
    }

    #[test]
    fn full_period_with_composite_modulus() {
        // 90 = 2 * 3^2 * 5, a - 1 = 30
        let params = LcgParams {
            modulus: 90,
            multiplier: 31,
            increment: 7,
        };
        assert!(params.has_full_period());
        let params = LcgParams {
            increment: 9,
            ..params
        };
        assert!(!params.has_full_period());
    }

    #[test]
    fn full_period_agrees_with_brute_force() {
        for modulus in 1..=24u64 {
            for multiplier in 0..modulus {
                for increment in 0..modulus {
                    let params = LcgParams {
                        modulus,
                        multiplier,
                        increment,
                    };
                    let mut lcg = crate::rng::Lcg::from_params(params, 0);
                    let period = (1..=modulus).find(|_| lcg.step() == 0);
                    assert_eq!(
                        params.has_full_period(),
                        period == Some(modulus),
                        "{params:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn wrapping_modulus() {
        let params = LcgParams {
            modulus: 0,
            multiplier: 6364136223846793005,
            increment: 1442695040888963407,
        };
        assert!(params.has_full_period());
        assert!(!LcgParams { increment: 2, ..params }.has_full_period());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(LcgParams::by_name("ZX81"), Some(LcgParams::ZX81));
        assert_eq!(
            LcgParams::by_name("numerical_recipes"),
            Some(LcgParams::NUMERICAL_RECIPES)
        );
        assert_eq!(LcgParams::by_name(" minstd "), Some(LcgParams::MINSTD));
        assert_eq!(LcgParams::by_name("randu"), None);
    }

    #[test]
    fn factors() {
        assert_eq!(prime_factors(65537), vec![65537]);
        assert_eq!(prime_factors(1 << 32), vec![2]);
        assert_eq!(prime_factors(360), vec![2, 3, 5]);
        assert_eq!(gcd(74, 65537), 1);
        assert_eq!(gcd(12, 18), 6);
    }
}
