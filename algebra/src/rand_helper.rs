use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

/// Environment variable that pins [`test_rng`] to a fixed seed when set to `1`.
pub const DETERMINISTIC_TEST_RNG: &str = "DETERMINISTIC_TEST_RNG";

fn fixed_seed_rng() -> ChaChaRng {
    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&0x7231_7a6b_5f74_6573u64.to_le_bytes());
    ChaChaRng::from_seed(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    fixed_seed_rng()
}

/// Should be used only for tests, not for any real world usage.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let setting = std::env::var(DETERMINISTIC_TEST_RNG).ok();
    rng_for_setting(setting.as_deref())
}

#[cfg(feature = "std")]
fn rng_for_setting(setting: Option<&str>) -> ChaChaRng {
    match setting {
        Some("1") => fixed_seed_rng(),
        _ => ChaChaRng::from_entropy(),
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::rng_for_setting;
    use ark_std::UniformRand;

    #[test]
    fn test_deterministic_rng() {
        let a = u128::rand(&mut rng_for_setting(None));
        let b = u128::rand(&mut rng_for_setting(None));
        assert_ne!(a, b);

        let a = u128::rand(&mut rng_for_setting(Some("0")));
        let b = u128::rand(&mut rng_for_setting(Some("0")));
        assert_ne!(a, b);

        let a = u128::rand(&mut rng_for_setting(Some("1")));
        let b = u128::rand(&mut rng_for_setting(Some("1")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rng_follows_environment() {
        let setting = std::env::var(super::DETERMINISTIC_TEST_RNG).ok();
        let deterministic = setting.as_deref() == Some("1");
        let a = u128::rand(&mut super::test_rng());
        let b = u128::rand(&mut super::test_rng());
        assert_eq!(a == b, deterministic);
    }
}
