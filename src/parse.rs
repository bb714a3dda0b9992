use crate::bank::{Amount, Selector};

use std::collections::VecDeque;
use std::io::{self, BufRead};
use thiserror::Error;

/// A failed conversion of one raw token. The messages are the user-facing
/// report: the session prints the error and keeps going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The menu choice is not one of the advertised commands.
    #[error("Invalid choice!")]
    UnknownChoice(String),

    /// The account selector is not a number.
    #[error("Invalid account selection!")]
    BadSelector(String),

    /// The operand is not a decimal amount.
    #[error("Invalid amount!")]
    BadAmount(String),

    /// A whole number (account id, term in months) was expected.
    #[error("Invalid number!")]
    BadNumber(String),
}

/// Reads whitespace-separated tokens from an input stream, one at a time.
///
/// Values are consumed token-by-token, so a scripted session behaves the
/// same whether values are separated by spaces or newlines.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// The commands the menu advertises. Codes match the printed menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    DisplayInfo,
    CalculateInterest,
    Exit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = ParseError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        match token {
            "1" => Ok(Self::Deposit),
            "2" => Ok(Self::Withdraw),
            "3" => Ok(Self::DisplayInfo),
            "4" => Ok(Self::CalculateInterest),
            "0" => Ok(Self::Exit),
            other => Err(ParseError::UnknownChoice(other.to_string())),
        }
    }
}

pub fn selector(token: &str) -> Result<Selector, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::BadSelector(token.to_string()))
}

pub fn amount(token: &str) -> Result<Amount, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::BadAmount(token.to_string()))
}

pub fn integer(token: &str) -> Result<u32, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::BadNumber(token.to_string()))
}

#[test]
// Tokens are split on any whitespace, across lines and arbitrary spacing.
fn test_tokens_across_lines_and_spacing() {
    let data = "1 0\n   3000\n\n2\t1 500\n";
    let mut tokens = Tokens::new(std::io::Cursor::new(data));

    let mut got = vec![];
    while let Some(token) = tokens.next_token().unwrap() {
        got.push(token);
    }
    assert_eq!(vec!["1", "0", "3000", "2", "1", "500"], got);
}

#[test]
fn test_tokens_empty_input() {
    let mut tokens = Tokens::new(std::io::Cursor::new(""));
    assert_eq!(None, tokens.next_token().unwrap());

    // Exhaustion is stable.
    assert_eq!(None, tokens.next_token().unwrap());
}

#[test]
fn test_menu_choice_well_formed() {
    for (token, want) in vec![
        ("1", MenuChoice::Deposit),
        ("2", MenuChoice::Withdraw),
        ("3", MenuChoice::DisplayInfo),
        ("4", MenuChoice::CalculateInterest),
        ("0", MenuChoice::Exit),
    ] {
        assert_eq!(Ok(want), MenuChoice::try_from(token));
    }
}

#[test]
fn test_menu_choice_unknown() {
    for token in vec!["5", "9", "-1", "x", "deposit", ""] {
        assert_eq!(
            Err(ParseError::UnknownChoice(token.to_string())),
            MenuChoice::try_from(token)
        );
    }
}

#[test]
fn test_selector_parsing() {
    assert_eq!(Ok(0), selector("0"));
    assert_eq!(Ok(2), selector("2"));

    for token in vec!["-1", "two", "1.5", ""] {
        assert_eq!(
            Err(ParseError::BadSelector(token.to_string())),
            selector(token)
        );
    }
}

#[test]
fn test_amount_parsing() {
    use rust_decimal_macros::dec;

    assert_eq!(Ok(dec!(3000)), amount("3000"));
    assert_eq!(Ok(dec!(25.50)), amount("25.50"));
    assert_eq!(Ok(dec!(-10)), amount("-10"));

    for token in vec!["abc", "12,5", ""] {
        assert_eq!(Err(ParseError::BadAmount(token.to_string())), amount(token));
    }
}

#[test]
fn test_integer_parsing() {
    assert_eq!(Ok(101), integer("101"));
    assert_eq!(
        Err(ParseError::BadNumber("3.5".to_string())),
        integer("3.5")
    );
}
