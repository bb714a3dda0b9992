pub mod account;
pub mod command;
pub mod registry;

// Using named types doesn't provide any compiler help, but it reads better.
// `get_mut(selector: Selector)` says what is being passed where
// `get_mut(selector: usize)` would need a comment, and changing the
// representation later stays a one-line edit.
pub type AccountId = u32;
pub type Selector = usize;

// A decimal library instead of the built-in f64, to be safe when dealing
// with money and to keep the decimal precision easy to deal with.
pub type Amount = rust_decimal::Decimal;
const DECIMAL_PRECISION: u32 = 2;
