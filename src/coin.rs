use rand::prelude::*;

/// A source of independent fair coin flips.
///
/// Random height generation and node promotion during list growth both draw
/// from a `Coin`, so supplying a seeded implementation makes the resulting
/// structure fully reproducible.
pub trait Coin {
    /// Flip once; `true` means heads (grow/promote).
    fn flip(&mut self) -> bool;
}

/// The default coin: fair flips drawn from a fast non-cryptographic rng.
pub struct FairCoin {
    rng: SmallRng,
}

impl FairCoin {
    pub fn new() -> Self {
        FairCoin {
            rng: SmallRng::from_rng(thread_rng()).unwrap(),
        }
    }

    /// A coin with a fixed seed, for reproducible structures.
    pub fn with_seed(seed: u64) -> Self {
        FairCoin {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for FairCoin {
    fn default() -> Self {
        Self::new()
    }
}

impl Coin for FairCoin {
    fn flip(&mut self) -> bool {
        self.rng.gen()
    }
}
