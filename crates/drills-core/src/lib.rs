//! Small standalone exercises: integer sums, string repetition, and a
//! balance-holding wallet.
//!
//! The modules share nothing; each can be used on its own.

pub mod repeat;
pub mod sums;
pub mod wallet;

pub use repeat::{DEFAULT_REPEAT_COUNT, repeat};
pub use sums::{SumError, sum, sum_all, sum_all_tails};
pub use wallet::{Bitcoin, Wallet, WalletError};
