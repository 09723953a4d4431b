//! Exact, arbitrary-precision rational Bernoulli numbers.
//!
//! This crate computes B2, B4, ..., B(2n) as exact numerator/denominator
//! pairs over a sign-magnitude arbitrary-precision integer, using the
//! Akiyama–Tanigawa triangle recurrence. Long runs can be checkpointed to
//! disk and resumed later without losing work.
//!
//! # Quick start
//!
//! ```rust
//! use bignum_bernoulli::bernoulli::direct;
//!
//! let pairs = direct(3, |_permille| {});
//! assert_eq!(pairs[0].0.to_string(), "1");
//! assert_eq!(pairs[0].1.to_string(), "6");
//! assert_eq!(pairs[1].0.to_string(), "-1");
//! assert_eq!(pairs[1].1.to_string(), "30");
//! ```
//!
//! # Resumable computation
//!
//! For long-running counts, drive a [`bernoulli::BernState`] directly and
//! checkpoint it periodically from the progress callback:
//!
//! ```rust
//! use bignum_bernoulli::bernoulli::BernState;
//!
//! let mut state = BernState::new(50);
//! state.run(|s, permille| {
//!     if permille % 100 == 0 {
//!         // caller decides when to call `s.save_file(path)`
//!         let _ = s.produced();
//!     }
//! });
//! assert_eq!(state.produced(), 50);
//! ```
//!
//! # Module map
//!
//! - [`crc`]: standalone CRC-32, the checksum threaded through checkpoint files.
//! - [`bigint`]: the arbitrary-precision signed integer core.
//! - [`bernoulli`]: the generator, its resumable state, and the embedded
//!   constant table.
//! - [`formatter`]: CSV and source-code emitters for computed tables.
//! - [`error`]: the crate's error type.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]

pub mod bernoulli;
pub mod bigint;
pub mod crc;
pub mod error;
pub mod formatter;

pub use bigint::BigInt;
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc_self_check_passes_at_startup() {
        assert!(crc::crc_self_check());
    }

    #[test]
    fn bignum_and_bernoulli_reexports_are_usable() {
        let a = BigInt::from_i64(6);
        let b = BigInt::from_i64(7);
        assert_eq!(BigInt::add(&a, &b), BigInt::from_i64(13));

        let pairs = bernoulli::direct(2, |_| {});
        assert_eq!(pairs.len(), 2);
    }
}
