//! Password generation.

use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use super::{GenerationConfig, InvalidConfig, Password};

/// Generate a single password.
///
/// Every character is drawn uniformly from the concatenated effective
/// alphabets, then the coverage pass makes sure each enabled class shows up.
/// Both steps draw from `rng`.
pub fn generate<R>(config: &GenerationConfig, rng: &mut R) -> Result<Password, InvalidConfig>
where
    R: RngCore + CryptoRng,
{
    config.validate()?;

    let pools = config.pools();
    let charset: Vec<char> = pools.iter().flat_map(|(_, pool)| pool.iter().copied()).collect();
    if charset.is_empty() {
        return Err(InvalidConfig::EmptyAlphabet);
    }
    log::debug!(
        "generating {} chars from {} of {} classes, charset size {}",
        config.length,
        pools.len(),
        config.classes.len(),
        charset.len()
    );

    let mut chars: Vec<char> = (0..config.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();

    ensure_coverage(&mut chars, &pools, rng);

    let password = Password::from_chars(&chars);
    chars.zeroize();
    Ok(password)
}

/// Generate `count` independent passwords with the same config.
pub fn generate_batch<R>(
    config: &GenerationConfig,
    rng: &mut R,
    count: usize,
) -> Result<Vec<Password>, InvalidConfig>
where
    R: RngCore + CryptoRng,
{
    (0..count).map(|_| generate(config, rng)).collect()
}

/// Force at least one character of every pool into `chars`.
///
/// Pools are handled in order. A class that is already present keeps its
/// first occurrence protected; a missing class overwrites a random
/// unprotected position, which is then protected too. Only when every
/// position is protected (fewer positions than classes) can a later class
/// overwrite an earlier one.
fn ensure_coverage<R>(chars: &mut [char], pools: &[(super::CharClass, Vec<char>)], rng: &mut R)
where
    R: RngCore + CryptoRng,
{
    if chars.is_empty() {
        return;
    }
    let mut protected = vec![false; chars.len()];

    for (class, pool) in pools {
        if let Some(pos) = chars.iter().position(|c| pool.contains(c)) {
            protected[pos] = true;
            continue;
        }

        let free: Vec<usize> = (0..chars.len()).filter(|i| !protected[*i]).collect();
        let pos = if free.is_empty() {
            rng.gen_range(0..chars.len())
        } else {
            free[rng.gen_range(0..free.len())]
        };
        chars[pos] = pool[rng.gen_range(0..pool.len())];
        protected[pos] = true;
        log::debug!("coverage: inserted {class} at a random position");
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::pass::charset::{CharClass, ClassSet, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};

    /// Source that only ever yields zero, so every range draw lands on its low end.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    impl CryptoRng for ZeroRng {}

    fn config(length: usize, classes: &[CharClass], avoid_similar: bool) -> GenerationConfig {
        GenerationConfig {
            length,
            classes: classes.iter().copied().collect(),
            avoid_similar,
            ..Default::default()
        }
    }

    fn has_any(password: &str, alphabet: &str) -> bool {
        password.chars().any(|c| alphabet.contains(c))
    }

    #[test]
    fn output_has_requested_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for length in [1, 4, 12, 50, 128] {
            let pass = generate(&config(length, &CharClass::ALL, false), &mut rng).unwrap();
            assert_eq!(pass.len(), length);
        }
    }

    #[test]
    fn upper_lower_numbers_scenario() {
        let cfg = config(
            12,
            &[CharClass::Uppercase, CharClass::Lowercase, CharClass::Numbers],
            false,
        );
        for seed in 0..200 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let pass = generate(&cfg, &mut rng).unwrap();
            let s = pass.as_str();
            assert_eq!(pass.len(), 12);
            assert!(has_any(s, UPPERCASE), "{seed}: no uppercase");
            assert!(has_any(s, LOWERCASE), "{seed}: no lowercase");
            assert!(has_any(s, NUMBERS), "{seed}: no digit");
            assert!(!has_any(s, SYMBOLS), "{seed}: unexpected symbol");
        }
    }

    #[test]
    fn avoid_similar_uppercase_only() {
        let cfg = config(8, &[CharClass::Uppercase], true);
        for seed in 0..100 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let pass = generate(&cfg, &mut rng).unwrap();
            assert_eq!(pass.len(), 8);
            assert!(pass.as_str().chars().all(|c| "ADEFHJKLMNQRTY".contains(c)));
        }
    }

    #[test]
    fn every_char_comes_from_enabled_pools() {
        let cfg = config(32, &[CharClass::Lowercase, CharClass::Symbols], true);
        let allowed: String = cfg.pools().into_iter().flat_map(|(_, p)| p).collect();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..100 {
            let pass = generate(&cfg, &mut rng).unwrap();
            assert!(pass.as_str().chars().all(|c| allowed.contains(c)));
        }
    }

    #[test]
    fn all_classes_covered_at_minimum_length() {
        let cfg = config(4, &CharClass::ALL, true);
        for seed in 0..500 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let pass = generate(&cfg, &mut rng).unwrap();
            for (class, pool) in cfg.pools() {
                assert!(
                    pass.as_str().chars().any(|c| pool.contains(&c)),
                    "seed {seed}: {class} missing from coverage"
                );
            }
        }
    }

    #[test]
    fn shorter_than_class_count_still_succeeds() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let pass = generate(&config(2, &CharClass::ALL, false), &mut rng).unwrap();
        assert_eq!(pass.len(), 2);
    }

    #[test]
    fn no_class_selected_fails() {
        let cfg = GenerationConfig {
            classes: ClassSet::empty(),
            ..Default::default()
        };
        let err = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, InvalidConfig::NoClassSelected);
    }

    #[test]
    fn fully_filtered_class_alone_fails() {
        let cfg = config(8, &[CharClass::Symbols], true).with_symbols("0O|");
        let err = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, InvalidConfig::EmptyAlphabet);
    }

    #[test]
    fn unused_symbol_set_is_ignored() {
        let cfg = config(12, &[CharClass::Uppercase], false).with_symbols("! #");
        let pass = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(1)).unwrap();
        assert!(pass.as_str().chars().all(|c| UPPERCASE.contains(c)));
    }

    #[test]
    fn symbols_shadowing_letters_still_yield_a_symbol() {
        let cfg = config(4, &CharClass::ALL, false).with_symbols("aA!");
        for seed in 0..200 {
            let pass = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
            assert!(pass.as_str().contains('!'), "seed {seed}");
        }
    }

    #[test]
    fn fully_filtered_class_is_skipped_when_others_remain() {
        let cfg = config(10, &[CharClass::Numbers, CharClass::Symbols], true).with_symbols("0O|");
        let pass = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
        assert!(pass.as_str().chars().all(|c| "347".contains(c)));
    }

    #[test]
    fn zero_source_golden_output() {
        let cfg = config(
            6,
            &[CharClass::Uppercase, CharClass::Lowercase, CharClass::Numbers],
            false,
        );
        let pass = generate(&cfg, &mut ZeroRng).unwrap();
        // Bulk draw picks 'A' everywhere; lowercase and digits are patched into
        // the first unprotected slots.
        assert_eq!(pass.as_str(), "Aa0AAA");
    }

    #[test]
    fn same_seed_same_password() {
        let cfg = config(24, &CharClass::ALL, false);
        let a = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let b = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let c = generate(&cfg, &mut ChaCha20Rng::seed_from_u64(43)).unwrap();
        assert_eq!(a.as_str(), b.as_str());
        assert_ne!(a.as_str(), c.as_str());
    }

    #[test]
    fn batch_returns_independent_passwords() {
        let cfg = config(20, &CharClass::ALL, false);
        let batch = generate_batch(&cfg, &mut ChaCha20Rng::seed_from_u64(5), 3).unwrap();
        assert_eq!(batch.len(), 3);
        assert_ne!(batch[0].as_str(), batch[1].as_str());
    }

    #[test]
    fn batch_propagates_invalid_config() {
        let cfg = config(0, &CharClass::ALL, false);
        let err = generate_batch(&cfg, &mut ChaCha20Rng::seed_from_u64(5), 3).unwrap_err();
        assert_eq!(err, InvalidConfig::InvalidLength(0));
    }
}
