use super::{Amount, Selector, DECIMAL_PRECISION};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Deposit(Amount),   // Add funds to the selected account.
    Withdraw(Amount),  // Remove funds, subject to the account's policy.
    DisplayInfo,       // Show account number, holder and balance.
    CalculateInterest, // Report the interest the account would earn.
}

/// One fully-parsed menu command: which account, and what to do to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub(super) selector: Selector,
    pub(super) operation: Operation,
}

impl Command {
    // The new() function ensures we can only create amounts with the money
    // decimal precision.
    pub fn new(selector: Selector, operation: Operation) -> Self {
        let operation = match operation {
            Operation::Deposit(amount) => Operation::Deposit(amount.round_dp(DECIMAL_PRECISION)),
            Operation::Withdraw(amount) => Operation::Withdraw(amount.round_dp(DECIMAL_PRECISION)),
            other => other,
        };

        Self {
            selector,
            operation,
        }
    }
}

#[test]
// Money precision is 2 places. We should be unable to carry more precise
// amounts into a command.
fn test_command_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999), dec!(1.00)),
        (dec!(1.001), dec!(1.00)),
        (dec!(1.23), dec!(1.23)),
        (dec!(1.239), dec!(1.24)),
    ] {
        let cmd = Command::new(0, Operation::Withdraw(raw_amount));
        assert_eq!(Operation::Withdraw(want_amount), cmd.operation);
    }
}

#[test]
fn test_command_keeps_parameterless_operations() {
    for operation in vec![Operation::DisplayInfo, Operation::CalculateInterest] {
        let cmd = Command::new(2, operation);
        assert_eq!(operation, cmd.operation);
        assert_eq!(2, cmd.selector);
    }
}
