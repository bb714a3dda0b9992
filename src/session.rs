use crate::bank::account::Account;
use crate::bank::command::{Command, Operation};
use crate::bank::registry::{demo_accounts, Outcome, Registry};
use crate::bank::Amount;
use crate::parse::{self, MenuChoice, ParseError, Tokens};

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    /// The single-account session was asked for a kind that doesn't exist.
    /// Fatal for the run: no account is ever created.
    #[error("Invalid account type!")]
    InvalidAccountType(String),

    /// A malformed value while seeding accounts. Fatal: there is no
    /// registry yet to fall back on.
    #[error("account setup failed: {0}")]
    Setup(ParseError),

    /// The input or output stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

const MENU: &str = "--- Banking System Menu ---
1. Deposit
2. Withdraw
3. Display Info
4. Calculate Interest
0. Exit";

const SELECT_ACCOUNT: &str = "Select Account (0: Savings, 1: Checking, 2: Fixed Deposit): ";
const SELECT_ACCOUNT_TYPE: &str = "Select Account Type (0: Savings, 1: Checking, 2: Fixed Deposit): ";

// Whether the loop prompts for an account selector, or always addresses the
// single account it owns.
enum Addressing {
    Selected,
    Single,
}

/// Run the multi-account menu loop over `accounts` until the Exit command
/// or the end of input.
pub fn run(
    accounts: Registry,
    input: impl BufRead,
    output: impl Write,
) -> Result<(), SessionError> {
    run_loop(accounts, Addressing::Selected, Tokens::new(input), output)
}

/// Run the menu loop over a single account whose kind is chosen on the
/// spot, seeded with the canonical figures for that kind. An unrecognized
/// type code is reported and fatal for the run.
pub fn run_single(input: impl BufRead, mut output: impl Write) -> Result<(), SessionError> {
    let mut tokens = Tokens::new(input);

    write!(output, "{}", SELECT_ACCOUNT_TYPE)?;
    output.flush()?;

    let Some(token) = tokens.next_token()? else {
        return Ok(());
    };
    let account = match single_demo_account(&token) {
        Some(account) => account,
        None => {
            writeln!(output, "Invalid account type!")?;
            return Err(SessionError::InvalidAccountType(token));
        }
    };

    // The registry owns the one account and lives exactly as long as the
    // loop, so the account is dropped on every exit path.
    run_loop(
        Registry::new(vec![account]),
        Addressing::Single,
        tokens,
        output,
    )
}

/// Run the multi-account loop over accounts whose details are prompted for
/// up front, one of each kind.
pub fn run_prompted(input: impl BufRead, mut output: impl Write) -> Result<(), SessionError> {
    let mut tokens = Tokens::new(input);

    let accounts = match seed_prompted(&mut tokens, &mut output)? {
        Some(accounts) => accounts,
        // Input ended before the accounts were complete.
        None => return Ok(()),
    };

    run_loop(accounts, Addressing::Selected, tokens, output)
}

fn run_loop(
    mut accounts: Registry,
    addressing: Addressing,
    mut tokens: Tokens<impl BufRead>,
    mut output: impl Write,
) -> Result<(), SessionError> {
    debug!(accounts = accounts.len(), "session started");

    loop {
        writeln!(output, "{}", MENU)?;
        write!(output, "Enter choice: ")?;
        output.flush()?;

        let Some(token) = tokens.next_token()? else {
            break;
        };
        let choice = match MenuChoice::try_from(token.as_str()) {
            Ok(MenuChoice::Exit) => break,
            Ok(choice) => choice,
            Err(err) => {
                warn!(token = %token, "unrecognized menu choice");
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        let selector = match addressing {
            Addressing::Single => 0,
            Addressing::Selected => {
                write!(output, "{}", SELECT_ACCOUNT)?;
                output.flush()?;

                let Some(token) = tokens.next_token()? else {
                    break;
                };
                match parse::selector(&token) {
                    Ok(selector) => selector,
                    Err(err) => {
                        writeln!(output, "{}", err)?;
                        continue;
                    }
                }
            }
        };

        let operation = match choice {
            MenuChoice::Deposit | MenuChoice::Withdraw => {
                let verb = match choice {
                    MenuChoice::Deposit => "deposit",
                    _ => "withdraw",
                };
                write!(output, "Enter amount to {}: ", verb)?;
                output.flush()?;

                let Some(token) = tokens.next_token()? else {
                    break;
                };
                match parse::amount(&token) {
                    Ok(amount) if choice == MenuChoice::Deposit => Operation::Deposit(amount),
                    Ok(amount) => Operation::Withdraw(amount),
                    Err(err) => {
                        writeln!(output, "{}", err)?;
                        continue;
                    }
                }
            }
            MenuChoice::DisplayInfo => Operation::DisplayInfo,
            MenuChoice::CalculateInterest => Operation::CalculateInterest,
            MenuChoice::Exit => break,
        };

        match accounts.dispatch(&Command::new(selector, operation)) {
            Ok(outcome) => report(&mut output, &outcome)?,
            Err(err) => {
                warn!(%err, "command rejected");
                writeln!(output, "{}", err)?;
            }
        }
    }

    Ok(())
}

fn report(output: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Deposited {
            amount,
            new_balance,
        } => writeln!(
            output,
            "Deposited: {} New Balance: {}",
            amount.normalize(),
            new_balance.normalize()
        ),
        Outcome::Withdrawn {
            amount,
            new_balance,
        } => writeln!(
            output,
            "Withdrawn: {} New Balance: {}",
            amount.normalize(),
            new_balance.normalize()
        ),
        Outcome::Info(info) => writeln!(output, "{}", info),
        Outcome::Interest(Some(interest)) => writeln!(output, "{}", interest),
        // The base no-op: nothing to report.
        Outcome::Interest(None) => Ok(()),
    }
}

fn single_demo_account(token: &str) -> Option<Account> {
    let index: usize = token.parse().ok()?;
    demo_accounts().into_iter().nth(index)
}

fn seed_prompted(
    tokens: &mut Tokens<impl BufRead>,
    output: &mut impl Write,
) -> Result<Option<Registry>, SessionError> {
    writeln!(output, "--- Open Accounts ---")?;

    writeln!(output, "Savings Account")?;
    let Some(id) = prompt_integer(tokens, output, "Enter account number: ")? else {
        return Ok(None);
    };
    let Some(holder) = prompt(tokens, output, "Enter account holder name: ")? else {
        return Ok(None);
    };
    let Some(balance) = prompt_amount(tokens, output, "Enter opening balance: ")? else {
        return Ok(None);
    };
    let Some(rate) = prompt_amount(tokens, output, "Enter interest rate (%): ")? else {
        return Ok(None);
    };
    let savings = Account::savings(id, holder, balance, rate);

    writeln!(output, "Checking Account")?;
    let Some(id) = prompt_integer(tokens, output, "Enter account number: ")? else {
        return Ok(None);
    };
    let Some(holder) = prompt(tokens, output, "Enter account holder name: ")? else {
        return Ok(None);
    };
    let Some(balance) = prompt_amount(tokens, output, "Enter opening balance: ")? else {
        return Ok(None);
    };
    let Some(limit) = prompt_amount(tokens, output, "Enter overdraft limit: ")? else {
        return Ok(None);
    };
    let checking = Account::checking(id, holder, balance, limit);

    writeln!(output, "Fixed Deposit Account")?;
    let Some(id) = prompt_integer(tokens, output, "Enter account number: ")? else {
        return Ok(None);
    };
    let Some(holder) = prompt(tokens, output, "Enter account holder name: ")? else {
        return Ok(None);
    };
    let Some(balance) = prompt_amount(tokens, output, "Enter opening balance: ")? else {
        return Ok(None);
    };
    let Some(term) = prompt_integer(tokens, output, "Enter term (months): ")? else {
        return Ok(None);
    };
    let Some(rate) = prompt_amount(tokens, output, "Enter interest rate (%): ")? else {
        return Ok(None);
    };
    let fixed_deposit = Account::fixed_deposit(id, holder, balance, term, rate);

    Ok(Some(Registry::new(vec![savings, checking, fixed_deposit])))
}

fn prompt(
    tokens: &mut Tokens<impl BufRead>,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<String>, SessionError> {
    write!(output, "{}", label)?;
    output.flush()?;

    Ok(tokens.next_token()?)
}

fn prompt_integer(
    tokens: &mut Tokens<impl BufRead>,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<u32>, SessionError> {
    let Some(token) = prompt(tokens, output, label)? else {
        return Ok(None);
    };
    match parse::integer(&token) {
        Ok(n) => Ok(Some(n)),
        Err(err) => {
            writeln!(output, "{}", err)?;
            Err(SessionError::Setup(err))
        }
    }
}

fn prompt_amount(
    tokens: &mut Tokens<impl BufRead>,
    output: &mut impl Write,
    label: &str,
) -> Result<Option<Amount>, SessionError> {
    let Some(token) = prompt(tokens, output, label)? else {
        return Ok(None);
    };
    match parse::amount(&token) {
        Ok(amount) => Ok(Some(amount)),
        Err(err) => {
            writeln!(output, "{}", err)?;
            Err(SessionError::Setup(err))
        }
    }
}
