//! # pizza-split - share a pizza bill by pieces eaten
//!
//! A session asks for the price of the pizza and how many pieces it had,
//! then collects who ate how many pieces until the closing word (`fertig`)
//! is typed. Each participant pays their proportional share, rounded to
//! cents.
//!
//! ## Modules
//!
//! - [`bill`] - Totals, participant ledger and allocation
//! - [`session`] - The interactive question sequence
//! - [`terminal`] - Prompt/answer sources (line reader, dialoguer)
//! - [`parse`] - Parsing of typed numbers
//! - [`config`] - Limits, closing word and rounding
//! - [`output`] - Text, quiet and JSON reporting
//! - [`error`] - The error taxonomy and its German messages
//!
//! ## Example
//!
//! ```
//! use pizza_split::bill::{allocate, BillInput, Participants, Rounding};
//! use pizza_split::config::Limits;
//!
//! let input = BillInput::new("12.50".parse().unwrap(), 5, &Limits::default()).unwrap();
//! let participants: Participants = vec![("A", 2), ("B", 3)].into_iter().collect();
//!
//! let bill = allocate(&input, &participants, Rounding::HalfUp).unwrap();
//! assert_eq!(bill.lines[1].amount_due.to_string(), "7.50");
//! ```

pub mod bill;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod parse;
pub mod session;
pub mod terminal;
