use super::account::{Account, AccountInfo, InterestReport, OperationError};
use super::command::{Command, Operation};
use super::{Amount, Selector};

use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// The selector does not address any registered account.
    #[error("Invalid account selection!")]
    InvalidSelector(Selector),

    /// The addressed account rejected the operation.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// What a successfully dispatched command produced. The harness turns this
/// into the human-readable status lines; the registry itself never writes.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Deposited { amount: Amount, new_balance: Amount },
    Withdrawn { amount: Amount, new_balance: Amount },
    Info(AccountInfo),
    /// `None` for kinds that earn nothing (the base no-op).
    Interest(Option<InterestReport>),
}

/// The fixed, small collection of accounts a session operates on, addressed
/// by selector. Owned exclusively by the dispatch loop for the lifetime of
/// the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    accounts: Vec<Account>,
}

impl Registry {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// The canonical seed accounts: one of each kind, in selector order
    /// (0: Savings, 1: Checking, 2: Fixed Deposit).
    pub fn demo() -> Self {
        Self::new(demo_accounts())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Apply one command to the account it addresses.
    ///
    /// The selector is bounds-checked: an out-of-range selector is a
    /// reported error, never an out-of-bounds access. Failed commands leave
    /// every balance unchanged.
    pub fn dispatch(&mut self, command: &Command) -> Result<Outcome, DispatchError> {
        let account = self
            .accounts
            .get_mut(command.selector)
            .ok_or(DispatchError::InvalidSelector(command.selector))?;

        debug!(selector = command.selector, operation = ?command.operation, "dispatching");

        match command.operation {
            Operation::Deposit(amount) => {
                let new_balance = account.deposit(amount)?;
                Ok(Outcome::Deposited {
                    amount,
                    new_balance,
                })
            }
            Operation::Withdraw(amount) => {
                let new_balance = account.withdraw(amount)?;
                Ok(Outcome::Withdrawn {
                    amount,
                    new_balance,
                })
            }
            Operation::DisplayInfo => Ok(Outcome::Info(account.info())),
            Operation::CalculateInterest => Ok(Outcome::Interest(account.interest_report())),
        }
    }
}

/// The demo seeds as a plain list, for sessions that hold a single account
/// instead of a registry.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::savings(101, "Prachi", dec!(5000), dec!(4)),
        Account::checking(102, "Sakshi", dec!(2000), dec!(1000)),
        Account::fixed_deposit(103, "Dhara", dec!(10000), 3, dec!(4)),
    ]
}

#[cfg(test)]
mod tests {
    use super::{Command, DispatchError, Operation, Outcome, Registry};
    use crate::bank::account::OperationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dispatch_deposit() {
        let mut registry = Registry::demo();

        let got = registry.dispatch(&Command::new(0, Operation::Deposit(dec!(3000))));
        assert_eq!(
            Ok(Outcome::Deposited {
                amount: dec!(3000),
                new_balance: dec!(8000),
            }),
            got
        );
    }

    #[test]
    fn test_dispatch_withdraw_rejection_keeps_balance() {
        let mut registry = Registry::demo();

        let got = registry.dispatch(&Command::new(0, Operation::Withdraw(dec!(5000.01))));
        assert_eq!(
            Err(DispatchError::Operation(OperationError::InsufficientFunds)),
            got
        );

        let info = match registry.dispatch(&Command::new(0, Operation::DisplayInfo)) {
            Ok(Outcome::Info(info)) => info,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(dec!(5000), info.balance);
    }

    #[test]
    fn test_dispatch_overdraft_scenario() {
        let mut registry = Registry::demo();

        // 2000 - 2500 dips into the overdraft.
        let got = registry.dispatch(&Command::new(1, Operation::Withdraw(dec!(2500))));
        assert_eq!(
            Ok(Outcome::Withdrawn {
                amount: dec!(2500),
                new_balance: dec!(-500),
            }),
            got
        );

        // Only 500 of headroom is left, so 600 more must be rejected.
        let got = registry.dispatch(&Command::new(1, Operation::Withdraw(dec!(600))));
        assert_eq!(
            Err(DispatchError::Operation(OperationError::OverdraftExceeded)),
            got
        );
    }

    #[test]
    fn test_dispatch_interest() {
        let mut registry = Registry::demo();

        for (selector, want) in vec![
            (0, Some(dec!(200))), // 5000 * 4%
            (1, None),
            (2, Some(dec!(100))), // 10000 * 4 * 3 / 1200
        ] {
            let got = registry.dispatch(&Command::new(selector, Operation::CalculateInterest));
            let report = match got {
                Ok(Outcome::Interest(report)) => report,
                other => panic!("unexpected outcome: {:?}", other),
            };
            assert_eq!(want, report.map(|r| r.amount()));
        }
    }

    #[test]
    fn test_dispatch_invalid_selector() {
        let mut registry = Registry::demo();

        for selector in vec![3, 7, usize::MAX] {
            let got = registry.dispatch(&Command::new(selector, Operation::Deposit(dec!(1))));
            assert_eq!(Err(DispatchError::InvalidSelector(selector)), got);
        }
    }

    #[test]
    fn test_dispatch_on_empty_registry() {
        let mut registry = Registry::new(vec![]);

        assert!(registry.is_empty());
        let got = registry.dispatch(&Command::new(0, Operation::DisplayInfo));
        assert_eq!(Err(DispatchError::InvalidSelector(0)), got);
    }

    #[test]
    fn test_display_is_idempotent() {
        let mut registry = Registry::demo();

        let first = registry.dispatch(&Command::new(2, Operation::DisplayInfo));
        let second = registry.dispatch(&Command::new(2, Operation::DisplayInfo));
        assert_eq!(first, second);
    }
}
