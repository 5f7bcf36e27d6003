//! Shared fixtures for the saltwrap integration suites

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use saltwrap::nacl::{auth, secretbox};

/// Known-answer vectors checked by more than one suite
pub mod vectors {
    /// SHA-512 of the empty string
    pub const SHA512_EMPTY: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                                    47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    /// SHA-512 of `"abc"`
    pub const SHA512_ABC: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                                  2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

    /// HMAC-SHA-512-256 of `"what do ya want for nothing?"` under `"Jefe"`
    /// zero-padded to 32 bytes
    pub const HMAC_JEFE: &str = "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554";

    /// `"hello"` sealed under an all-zero key and nonce
    pub const SECRETBOX_ZERO_HELLO: &str = "c769f9d535dc338e99ac93440502c7ceae5bd79391";

    /// The `"Jefe"` key, zero-padded
    pub fn jefe_key() -> [u8; 32] {
        let mut k = [0u8; 32];
        k[..4].copy_from_slice(b"Jefe");
        k
    }
}

/// Deterministic source of keys, nonces and messages
pub struct Fixtures {
    rng: ChaCha8Rng,
}

impl Fixtures {
    /// Fixtures seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A secret-box key
    pub fn secretbox_key(&mut self) -> [u8; secretbox::KEY_LEN] {
        self.rng.gen()
    }

    /// A secret-box nonce
    pub fn nonce(&mut self) -> [u8; secretbox::NONCE_LEN] {
        self.rng.gen()
    }

    /// An HMAC key
    pub fn auth_key(&mut self) -> [u8; auth::KEY_LEN] {
        self.rng.gen()
    }

    /// `len` random bytes
    pub fn message(&mut self, len: usize) -> Vec<u8> {
        let mut m = vec![0u8; len];
        self.rng.fill(&mut m[..]);
        m
    }
}
