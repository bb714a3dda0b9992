//! An in-memory banking session engine.
//!
//! A fixed set of accounts (savings, checking with an overdraft, fixed
//! deposit) is operated through a numbered menu of commands: deposit,
//! withdraw, display, calculate interest. The whole engine is synchronous
//! and single-threaded; state lives for one session only.
//!
//! [`session::run`] drives the loop over any `BufRead`/`Write` pair, so the
//! same code path serves the interactive binary, the tests and the benches.

pub mod bank;
pub mod parse;
pub mod session;
