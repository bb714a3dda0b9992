mod deposit;
mod interest;
mod withdraw;

pub use interest::InterestReport;

use super::{AccountId, Amount};

use std::fmt;
use thiserror::Error;

/// Note: errors are kept simple here. In a real-world scenario we would most
/// likely carry more debugging info (e.g. the account id, the amount and the
/// balance at the time of the failure).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// Funds in the account are insufficient for a withdrawal under the
    /// base policy.
    #[error("Insufficient balance!")]
    InsufficientFunds,

    /// The withdrawal would push a checking account below its overdraft
    /// limit.
    #[error("Overdraft limit exceeded!")]
    OverdraftExceeded,

    /// Moving the balance would overflow what an `Amount` can represent.
    #[error("Balance overflow!")]
    Overflow,
}

/// What specializes an account: the kind-specific parameters and, through
/// them, the withdrawal policy and the interest formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// Earns `balance * interest_rate / 100`.
    Savings { interest_rate: Amount },

    /// May be drawn below zero, down to `-overdraft_limit`. Earns nothing.
    Checking { overdraft_limit: Amount },

    /// Earns interest prorated over the term:
    /// `balance * interest_rate * term_months / (12 * 100)`.
    FixedDeposit { term_months: u32, interest_rate: Amount },
}

/// A single bank account.
///
/// The balance is only ever mutated through [`Account::deposit`] and
/// [`Account::withdraw`]; everything else is read-only. It can only go
/// negative as far as a checking overdraft permits.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Amount,
    kind: Kind,
}

impl Account {
    pub fn new(id: AccountId, holder: impl Into<String>, balance: Amount, kind: Kind) -> Self {
        Self {
            id,
            holder: holder.into(),
            balance,
            kind,
        }
    }

    pub fn savings(
        id: AccountId,
        holder: impl Into<String>,
        balance: Amount,
        interest_rate: Amount,
    ) -> Self {
        Self::new(id, holder, balance, Kind::Savings { interest_rate })
    }

    pub fn checking(
        id: AccountId,
        holder: impl Into<String>,
        balance: Amount,
        overdraft_limit: Amount,
    ) -> Self {
        Self::new(id, holder, balance, Kind::Checking { overdraft_limit })
    }

    pub fn fixed_deposit(
        id: AccountId,
        holder: impl Into<String>,
        balance: Amount,
        term_months: u32,
        interest_rate: Amount,
    ) -> Self {
        Self::new(
            id,
            holder,
            balance,
            Kind::FixedDeposit {
                term_months,
                interest_rate,
            },
        )
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Read-only snapshot of the displayable account fields.
    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id,
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }
}

/// The fields `Display Info` shows, detached from the live account so the
/// harness can hold onto them without borrowing the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub id: AccountId,
    pub holder: String,
    pub balance: Amount,
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {}\nAccount Holder: {}\nBalance: {}",
            self.id,
            self.holder,
            self.balance.normalize()
        )
    }
}
