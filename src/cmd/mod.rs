//! Command handlers for the pizza-split binary.

pub mod run;
pub mod split;
pub mod util;
