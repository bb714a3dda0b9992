use crate::bank::Amount;

use super::{Account, OperationError};

impl Account {
    /// Add funds to the account. Every kind accepts deposits unchanged.
    ///
    /// Returns the new balance. The only way this fails is the balance
    /// overflowing what an `Amount` can represent.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, OperationError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(OperationError::Overflow)?;

        Ok(self.balance)
    }
}

#[cfg(test)]
mod deposit_tests {
    use super::{Account, OperationError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_ok() {
        // Depositing `a` increases the balance by exactly `a`, whatever the kind.
        for mut acc in vec![
            Account::savings(101, "Prachi", dec!(5000), dec!(4)),
            Account::checking(102, "Sakshi", dec!(2000), dec!(1000)),
            Account::fixed_deposit(103, "Dhara", dec!(10000), 3, dec!(4)),
        ] {
            let before = acc.balance();

            let got = acc.deposit(dec!(3000));
            assert_eq!(Ok(before + dec!(3000)), got);
            assert_eq!(before + dec!(3000), acc.balance());
        }
    }

    #[test]
    fn test_deposit_zero() {
        let mut acc = Account::savings(1, "a", dec!(12.34), dec!(4));

        let got = acc.deposit(dec!(0));
        assert_eq!(Ok(dec!(12.34)), got);
    }

    #[test]
    fn test_deposit_overflow() {
        let mut acc = Account::savings(1, "a", Decimal::MAX, dec!(4));

        let got = acc.deposit(Decimal::MAX);
        assert_eq!(Err(OperationError::Overflow), got);
        assert_eq!(Decimal::MAX, acc.balance());
    }
}
