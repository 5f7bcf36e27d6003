//! PBKDF2 (RFC 8018) over the HMAC-SHA-512-256 invoker
//!
//! Each output block is `U_1 ^ U_2 ^ ... ^ U_c` where
//! `U_1 = HMAC(P, S || BE32(i))` and `U_j = HMAC(P, U_{j-1})`. The password
//! is used directly as the HMAC key, right-padded with zero bytes to the
//! key length. Because the 32-byte authenticator is fed back into each
//! round, the result differs from PBKDF2-HMAC-SHA-512 for more than one
//! iteration.
//!
//! [`Pbkdf2::calibrate`] picks an iteration count from a wall-clock target
//! instead. The time of one iteration is measured on first use and cached
//! for the rest of the process.

use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;
use saltwrap_api::{validate, Error, Primitive, Result};
use saltwrap_common::{ScratchBuffer, SecretVec};
use saltwrap_internal::constant_time::ct_xor_into;
use saltwrap_internal::endian::{put_counter_be, COUNTER_SIZE};
use saltwrap_nacl::auth::{self, Auth};
use saltwrap_params::kdf::{
    PBKDF2_BENCHMARK_ROUNDS, PBKDF2_CALIBRATION_TARGET_MS, PBKDF2_DEFAULT_COST,
};
use zeroize::Zeroizing;

static ITERATION_TIME: OnceCell<Duration> = OnceCell::new();

/// Parameters for [`Pbkdf2`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Params {
    /// Output length in bytes
    pub size: usize,
    /// Number of HMAC iterations per block
    pub cost: u32,
    /// PRF; only `hmacsha512256` is accepted
    pub primitive: Primitive,
}

impl Pbkdf2Params {
    /// Parameters for a `size`-byte key at the default cost
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cost: PBKDF2_DEFAULT_COST,
            primitive: Primitive::HmacSha512256,
        }
    }

    /// Parameters for a `size`-byte key at a cost calibrated to take about
    /// [`PBKDF2_CALIBRATION_TARGET_MS`] on this machine
    pub fn calibrated(size: usize) -> Result<Self> {
        let cost = Pbkdf2::calibrate(Duration::from_millis(PBKDF2_CALIBRATION_TARGET_MS))?;
        Ok(Self::new(size).with_cost(cost))
    }

    /// Replace the iteration count
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Replace the PRF
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitive = primitive;
        self
    }

    fn validate(&self) -> Result<()> {
        validate::parameter(self.size > 0, "pbkdf2 size", "size must be positive")?;
        validate::parameter(self.cost > 0, "pbkdf2 cost", "cost must be positive")?;
        validate::parameter(
            self.primitive == Primitive::HmacSha512256,
            "pbkdf2 primitive",
            "not a recognized HMAC",
        )?;
        validate::parameter(
            block_count(self.size) <= u32::MAX as usize,
            "pbkdf2 size",
            "too many output blocks",
        )
    }
}

fn block_count(size: usize) -> usize {
    size / auth::HMAC_LEN + usize::from(size % auth::HMAC_LEN != 0)
}

/// Validated PBKDF2 configuration
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2 {
    params: Pbkdf2Params,
    prf: Auth,
}

impl Pbkdf2 {
    /// Validate `params` and build a deriver
    pub fn new(params: Pbkdf2Params) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            prf: Auth::new(),
        })
    }

    /// Iteration count that makes one output block take roughly `target`
    ///
    /// Never less than 1.
    pub fn calibrate(target: Duration) -> Result<u32> {
        let per_iteration = ITERATION_TIME.get_or_try_init(benchmark)?;
        let cost = target.as_nanos() / per_iteration.as_nanos().max(1);
        Ok(cost.clamp(1, u128::from(u32::MAX)) as u32)
    }

    /// The validated parameters
    pub fn params(&self) -> &Pbkdf2Params {
        &self.params
    }

    /// Derive `size` bytes from `password` and `salt` at the configured cost
    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<SecretVec> {
        self.derive_with_cost(password, salt, self.params.cost)
    }

    /// Derive with a one-off iteration count
    pub fn derive_with_cost(&self, password: &[u8], salt: &[u8], cost: u32) -> Result<SecretVec> {
        validate::parameter(cost > 0, "pbkdf2 cost", "cost must be positive")?;
        if password.len() > auth::KEY_LEN {
            return Err(Error::param(
                "pbkdf2 password",
                format!("longer than the {}-byte HMAC key", auth::KEY_LEN),
            ));
        }

        let width = block_count(self.params.size)
            .checked_mul(auth::HMAC_LEN)
            .ok_or(Error::OutOfMemory {
                context: "pbkdf2 derived key buffer",
                requested: usize::MAX,
            })?;
        let mut dk = ScratchBuffer::zeroed("pbkdf2 derived key buffer", width)?;

        let mut key = ScratchBuffer::zeroed("pbkdf2 password buffer", auth::KEY_LEN)?;
        key.as_mut_slice()[..password.len()].copy_from_slice(password);

        let mut seed = ScratchBuffer::zeroed("pbkdf2 salt buffer", salt.len() + COUNTER_SIZE)?;
        seed.as_mut_slice()[..salt.len()].copy_from_slice(salt);

        for (i, block) in dk.as_mut_slice().chunks_mut(auth::HMAC_LEN).enumerate() {
            // block indices are 1-based; validate() bounds them to u32
            put_counter_be(seed.as_mut_slice(), i as u32 + 1);
            self.chain(key.as_slice(), seed.as_slice(), cost, block)?;
        }

        SecretVec::try_from_slice("pbkdf2 derived key", &dk.as_slice()[..self.params.size])
    }

    fn chain(&self, key: &[u8], seed: &[u8], cost: u32, out: &mut [u8]) -> Result<()> {
        let mut u = Zeroizing::new(self.prf.auth(seed, key)?);
        out.copy_from_slice(&u);

        for _ in 1..cost {
            u = Zeroizing::new(self.prf.auth(&u, key)?);
            ct_xor_into(out, &u);
        }
        Ok(())
    }
}

// time one chained HMAC call, the unit of work `cost` counts
fn benchmark() -> Result<Duration> {
    let prf = Auth::new();
    let key = [0u8; auth::KEY_LEN];
    let mut u = Zeroizing::new(prf.auth(&[0u8; COUNTER_SIZE], &key)?);

    let start = Instant::now();
    for _ in 0..PBKDF2_BENCHMARK_ROUNDS {
        u = Zeroizing::new(prf.auth(&u, &key)?);
    }
    Ok(start.elapsed() / PBKDF2_BENCHMARK_ROUNDS)
}
