use crate::bank::{Amount, DECIMAL_PRECISION};

use super::{Account, Kind};

use rust_decimal_macros::dec;
use std::fmt;

impl Account {
    /// The interest this account would currently earn, rounded to the money
    /// precision. Checking accounts earn nothing and report `None`.
    ///
    /// The figure is informational only and is never credited to the
    /// balance.
    pub fn calculate_interest(&self) -> Option<Amount> {
        let interest = match &self.kind {
            Kind::Savings { interest_rate } => self.balance * *interest_rate / dec!(100),
            Kind::FixedDeposit {
                term_months,
                interest_rate,
            } => {
                // Rate is annual; prorate over the term in months.
                self.balance * *interest_rate * Amount::from(*term_months) / (dec!(12) * dec!(100))
            }
            Kind::Checking { .. } => return None,
        };

        Some(interest.round_dp(DECIMAL_PRECISION))
    }

    /// [`Account::calculate_interest`] together with the wording the menu
    /// uses for this kind.
    pub fn interest_report(&self) -> Option<InterestReport> {
        let amount = self.calculate_interest()?;
        let prefix = match self.kind {
            Kind::FixedDeposit { .. } => "FD Interest",
            _ => "Interest",
        };

        Some(InterestReport { prefix, amount })
    }
}

/// An interest figure, displayed the way the owning account kind reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestReport {
    prefix: &'static str,
    amount: Amount,
}

impl InterestReport {
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for InterestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prefix, self.amount.normalize())
    }
}
