//! Argument types parsed from the command line.

use std::num::ParseIntError;
use std::str::FromStr;

use drills_core::Bitcoin;
use thiserror::Error;

/// A comma-separated group of integers, e.g. `1,2,3`. The empty string is an
/// empty group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberGroup(pub Vec<i64>);

impl FromStr for NumberGroup {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self(Vec::new()));
        }
        s.split(',')
            .map(|n| n.trim().parse())
            .collect::<Result<Vec<i64>, _>>()
            .map(Self)
    }
}

impl AsRef<[i64]> for NumberGroup {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

/// One wallet step: `deposit:<n>` or `withdraw:<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletOp {
    Deposit(Bitcoin),
    Withdraw(Bitcoin),
}

#[derive(Debug, Error)]
pub enum WalletOpError {
    #[error("expected deposit:<amount> or withdraw:<amount>, got {0:?}")]
    Malformed(String),
    #[error("invalid amount: {0}")]
    Amount(#[from] ParseIntError),
}

impl FromStr for WalletOp {
    type Err = WalletOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = s
            .split_once(':')
            .ok_or_else(|| WalletOpError::Malformed(s.to_string()))?;
        let amount = Bitcoin(amount.trim().parse()?);
        match kind.trim() {
            "deposit" => Ok(Self::Deposit(amount)),
            "withdraw" => Ok(Self::Withdraw(amount)),
            _ => Err(WalletOpError::Malformed(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_group() {
        assert_eq!("1,2,3".parse::<NumberGroup>().unwrap().0, vec![1, 2, 3]);
        assert_eq!(" 4 , -5 ".parse::<NumberGroup>().unwrap().0, vec![4, -5]);
        assert!("".parse::<NumberGroup>().unwrap().0.is_empty());
        assert!("1,,2".parse::<NumberGroup>().is_err());
        assert!("x".parse::<NumberGroup>().is_err());
    }

    #[test]
    fn parse_wallet_op() {
        assert_eq!(
            "deposit:10".parse::<WalletOp>().unwrap(),
            WalletOp::Deposit(Bitcoin(10))
        );
        assert_eq!(
            "withdraw: 5".parse::<WalletOp>().unwrap(),
            WalletOp::Withdraw(Bitcoin(5))
        );
        assert!(matches!(
            "steal:5".parse::<WalletOp>(),
            Err(WalletOpError::Malformed(_))
        ));
        assert!(matches!(
            "deposit".parse::<WalletOp>(),
            Err(WalletOpError::Malformed(_))
        ));
        assert!(matches!(
            "deposit:-1".parse::<WalletOp>(),
            Err(WalletOpError::Amount(_))
        ));
    }
}
