//! A single-balance wallet with an insufficient-funds guard.

use std::fmt;

use thiserror::Error;

/// A non-negative amount of bitcoin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitcoin(pub u64);

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BTC", self.0)
    }
}

/// Errors reported by [`Wallet`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The withdrawal exceeds the current balance.
    #[error("cannot withdraw, insufficient funds")]
    InsufficientFunds { requested: Bitcoin, available: Bitcoin },
    /// The deposit would push the balance past `u64::MAX`.
    #[error("cannot deposit {amount}, balance would overflow")]
    BalanceOverflow { amount: Bitcoin },
}

/// Holds a balance. A failed deposit or withdrawal leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    balance: Bitcoin,
}

impl Wallet {
    /// Create an empty wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet holding `balance`.
    pub fn with_balance(balance: Bitcoin) -> Self {
        Self { balance }
    }

    /// The current balance.
    pub fn balance(&self) -> Bitcoin {
        self.balance
    }

    /// Add `amount`, refusing to overflow the balance.
    pub fn deposit(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        let total = self
            .balance
            .0
            .checked_add(amount.0)
            .ok_or(WalletError::BalanceOverflow { amount })?;
        self.balance = Bitcoin(total);
        tracing::debug!(%amount, balance = %self.balance, "deposit");
        Ok(())
    }

    /// Withdraw `amount`, refusing to go below zero.
    pub fn withdraw(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        if amount > self.balance {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = Bitcoin(self.balance.0 - amount.0);
        tracing::debug!(%amount, balance = %self.balance, "withdraw");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit() {
        let mut wallet = Wallet::new();
        wallet.deposit(Bitcoin(10)).unwrap();
        assert_eq!(wallet.balance(), Bitcoin(10));
    }

    #[test]
    fn test_withdraw_with_funds() {
        let mut wallet = Wallet::with_balance(Bitcoin(20));
        wallet.withdraw(Bitcoin(10)).unwrap();
        assert_eq!(wallet.balance(), Bitcoin(10));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut wallet = Wallet::with_balance(Bitcoin(20));
        wallet.withdraw(Bitcoin(20)).unwrap();
        assert_eq!(wallet.balance(), Bitcoin(0));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut wallet = Wallet::with_balance(Bitcoin(20));
        let err = wallet.withdraw(Bitcoin(100)).unwrap_err();
        assert_eq!(
            err,
            WalletError::InsufficientFunds {
                requested: Bitcoin(100),
                available: Bitcoin(20),
            }
        );
        assert_eq!(err.to_string(), "cannot withdraw, insufficient funds");
        assert_eq!(wallet.balance(), Bitcoin(20));
    }

    #[test]
    fn test_deposit_overflow() {
        let mut wallet = Wallet::with_balance(Bitcoin(u64::MAX));
        assert_eq!(
            wallet.deposit(Bitcoin(1)),
            Err(WalletError::BalanceOverflow { amount: Bitcoin(1) })
        );
        assert_eq!(wallet.balance(), Bitcoin(u64::MAX));
    }

    #[test]
    fn test_bitcoin_display() {
        assert_eq!(Bitcoin(10).to_string(), "10 BTC");
    }
}
