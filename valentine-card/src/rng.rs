//! Random sources for decoy and evasion placement.
//!
//! The reducer accepts any [`rand::Rng`]; sessions use a [`CountingRng`]
//! seeded from a user-visible seed so a run can be replayed exactly.
use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use sha2::Sha256;

/// Domain tag for the placement stream.
pub const PLACEMENT_STREAM: &[u8] = b"placement";

/// Counting wrapper around an RNG, recording how many draws were made.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    /// Seeded stream for `domain_tag`, derived from the session seed.
    #[must_use]
    pub fn for_stream(seed: u64, domain_tag: &[u8]) -> Self {
        Self::wrap(SmallRng::seed_from_u64(derive_stream_seed(seed, domain_tag)))
    }
}

impl<R: RngCore> CountingRng<R> {
    pub const fn wrap(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

/// Placement RNG for a session seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> CountingRng<SmallRng> {
    CountingRng::for_stream(seed, PLACEMENT_STREAM)
}

/// Mix `user_seed` with a domain tag so independent streams never share state.
#[must_use]
pub fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0_u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
