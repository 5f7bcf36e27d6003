//! Constants for password-based key derivation

/// Iteration count used when the caller does not choose one
pub const PBKDF2_DEFAULT_COST: u32 = 1000;

/// Time a calibrated derivation aims for, in milliseconds
pub const PBKDF2_CALIBRATION_TARGET_MS: u64 = 200;

/// HMAC calls timed when measuring the cost of one iteration
pub const PBKDF2_BENCHMARK_ROUNDS: u32 = 1000;
