//! Callnet Call Sequence
//!
//! Reproducible source of caller/called pairs for the call network.
//!
//! # Lagged Fibonacci Recurrence
//!
//! The generator keeps a ring of 55 values in `[0, 999999]`. The ring is
//! seeded by a cubic polynomial evaluated at logical indices `-54..=0`, and
//! every draw after that overwrites one slot with
//!
//! ```text
//! s[k] = (s[k - 24] + s[k - 55]) mod 1_000_000
//! ```
//!
//! Two consecutive draws form one call: `(caller, called)`.
//!
//! # Determinism
//!
//! Output depends only on the seed coefficients and the number of values
//! drawn so far. There is no global state; two generators built with the same
//! coefficients replay the same sequence independently.

mod lagged;
mod seed;

pub use lagged::LaggedFibonacci;
pub use seed::{seed_value, SeedCoefficients};

/// All generator values are reduced modulo this.
pub const MODULUS: u32 = 1_000_000;

/// Length of the ring buffer (the long lag).
pub const LONG_LAG: usize = 55;

/// The short lag of the recurrence.
pub const SHORT_LAG: usize = 24;

const _: () = assert!(SHORT_LAG < LONG_LAG);
