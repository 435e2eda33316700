use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::foundation::math::Fnv1a64;

/// Source of fair coin flips driving procedural composition.
///
/// The chain and grid composers consume randomness exclusively through this
/// trait, so tests can substitute a fixed source.
pub trait CoinFlip {
    /// Draw one uniform random boolean.
    fn next_bool(&mut self) -> bool;
}

/// Deterministic SplitMix64 generator.
///
/// Owned by one render invocation and passed explicitly; there is no
/// process-global random state. The stream is stable across platforms and
/// crate versions, which is what makes a seeded card reproducible
/// byte-for-byte.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Build a generator from a raw `u64` seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Build a generator from a config-level [`Seed`].
    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.to_u64())
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

impl CoinFlip for Rng64 {
    fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

/// Reproducibility seed, accepted in config as either an integer or a string.
///
/// String seeds are hashed to a `u64` with FNV-1a, so the whole run keys off
/// one integer either way. The seed is printed on the back of the card, which
/// is enough to regenerate it exactly.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Raw integer seed.
    Int(u64),
    /// Free-form text seed (hashed before use).
    Text(String),
}

impl Seed {
    /// Resolve the seed to the `u64` that keys the generator.
    pub fn to_u64(&self) -> u64 {
        match self {
            Seed::Int(v) => *v,
            Seed::Text(s) => {
                let mut h = Fnv1a64::new_default();
                h.write_bytes(s.as_bytes());
                h.finish()
            }
        }
    }

    /// Generate a fresh seed when the config does not provide one.
    ///
    /// Derived from wall-clock time and the process id; not cryptographic,
    /// only unique enough that two runs get distinct cards.
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let mut h = Fnv1a64::new_default();
        h.write_u64(nanos);
        h.write_u64(u64::from(std::process::id()));
        Seed::Int(h.finish())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Int(v) => write!(f, "{v}"),
            Seed::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
