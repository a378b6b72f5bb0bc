#![allow(dead_code)]

use planar::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

pub const SEED: u64 = 0x5eed_2d;
pub const SAMPLES: usize = 1_000;

/// Installs a test subscriber once, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn random_vec(rng: &mut StdRng, range: f64) -> Vector2 {
    Vector2::new(rng.gen_range(-range..range), rng.gen_range(-range..range))
}
