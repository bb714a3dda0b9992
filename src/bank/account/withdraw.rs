use crate::bank::Amount;

use super::{Account, Kind, OperationError};

impl Account {
    /// Remove funds from the account, subject to the kind's policy.
    ///
    /// The base policy (savings and fixed deposits) allows withdrawing at
    /// most the current balance. Checking accounts may be drawn negative,
    /// down to `-overdraft_limit`. On rejection the balance is untouched.
    ///
    /// Note: fixed deposits have no maturity lock-in, so an early
    /// withdrawal goes through under the base policy.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, OperationError> {
        let headroom = match &self.kind {
            Kind::Checking { overdraft_limit } => self.balance + *overdraft_limit,
            Kind::Savings { .. } | Kind::FixedDeposit { .. } => self.balance,
        };

        if amount > headroom {
            return Err(match self.kind {
                Kind::Checking { .. } => OperationError::OverdraftExceeded,
                _ => OperationError::InsufficientFunds,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(OperationError::Overflow)?;

        Ok(self.balance)
    }
}

#[cfg(test)]
mod withdraw_tests {
    use super::{Account, OperationError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdraw_ok() {
        let mut acc = Account::savings(101, "Prachi", dec!(5000), dec!(4));

        let got = acc.withdraw(dec!(1200.50));
        assert_eq!(Ok(dec!(3799.50)), got);
        assert_eq!(dec!(3799.50), acc.balance());
    }

    #[test]
    fn test_withdraw_whole_balance() {
        let mut acc = Account::savings(101, "Prachi", dec!(5000), dec!(4));

        let got = acc.withdraw(dec!(5000));
        assert_eq!(Ok(dec!(0)), got);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut acc = Account::savings(101, "Prachi", dec!(5000), dec!(4));

        let got = acc.withdraw(dec!(5000.01));
        assert_eq!(Err(OperationError::InsufficientFunds), got);
        assert_eq!(dec!(5000), acc.balance());
    }

    // No overdraft and no maturity lock-in: fixed deposits follow the base
    // policy exactly.
    #[test]
    fn test_withdraw_fixed_deposit_early() {
        let mut acc = Account::fixed_deposit(103, "Dhara", dec!(10000), 3, dec!(4));

        assert_eq!(Ok(dec!(9000)), acc.withdraw(dec!(1000)));
        assert_eq!(
            Err(OperationError::InsufficientFunds),
            acc.withdraw(dec!(9000.01))
        );
        assert_eq!(dec!(9000), acc.balance());
    }

    #[test]
    fn test_withdraw_checking_into_overdraft() {
        let mut acc = Account::checking(102, "Sakshi", dec!(2000), dec!(1000));

        let got = acc.withdraw(dec!(2500));
        assert_eq!(Ok(dec!(-500)), got);
        assert_eq!(dec!(-500), acc.balance());
    }

    #[test]
    fn test_withdraw_checking_to_exact_limit() {
        let mut acc = Account::checking(102, "Sakshi", dec!(2000), dec!(1000));

        let got = acc.withdraw(dec!(3000));
        assert_eq!(Ok(dec!(-1000)), got);
    }

    #[test]
    fn test_withdraw_checking_overdraft_exceeded() {
        let mut acc = Account::checking(102, "Sakshi", dec!(2000), dec!(1000));

        // Already overdrawn: only `balance + limit` of headroom is left.
        acc.withdraw(dec!(2500)).expect("should enter overdraft");

        let got = acc.withdraw(dec!(600));
        assert_eq!(Err(OperationError::OverdraftExceeded), got);
        assert_eq!(dec!(-500), acc.balance());
    }
}
