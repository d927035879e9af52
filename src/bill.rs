//! Bill allocation: totals, participant ledger and per-person charges.
//!
//! A bill is computed in three steps. [`BillInput`] holds the validated
//! totals, [`Participants`] collects who ate how much, and [`allocate`]
//! checks the aggregate and turns the ledger into [`BillLine`]s.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Limits;
use crate::error::{BillError, Bound, Quantity};

/// Fractional digits every amount due is rounded to
pub const AMOUNT_DECIMALS: u32 = 2;

/// How an amount due is rounded to cents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Midpoints round away from zero (0.125 -> 0.13)
    #[default]
    HalfUp,
    /// Midpoints round to the even digit (0.125 -> 0.12)
    HalfEven,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round to cents. The result always carries exactly two fractional digits.
    pub fn apply(self, amount: Decimal) -> Decimal {
        let mut rounded = amount.round_dp_with_strategy(AMOUNT_DECIMALS, self.strategy());
        rounded.rescale(AMOUNT_DECIMALS);
        rounded
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::HalfUp => write!(f, "half_up"),
            Rounding::HalfEven => write!(f, "half_even"),
        }
    }
}

/// Validated bill totals. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillInput {
    total_price: Decimal,
    total_pieces: u32,
}

impl BillInput {
    pub fn new(total_price: Decimal, total_pieces: i64, limits: &Limits) -> Result<Self, BillError> {
        Ok(Self {
            total_price: check_price(total_price, limits)?,
            total_pieces: check_pieces(total_pieces, limits)?,
        })
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn total_pieces(&self) -> u32 {
        self.total_pieces
    }

    /// Unrounded share of the price carried by a single piece
    pub fn price_per_piece(&self) -> Decimal {
        self.total_price / Decimal::from(self.total_pieces)
    }
}

/// Check a total price against `0 < price < limits.max_price`.
pub fn check_price(price: Decimal, limits: &Limits) -> Result<Decimal, BillError> {
    if price <= Decimal::ZERO {
        return Err(BillError::OutOfRange {
            quantity: Quantity::TotalPrice,
            bound: Bound::Lower,
        });
    }
    if price >= limits.max_price {
        return Err(BillError::OutOfRange {
            quantity: Quantity::TotalPrice,
            bound: Bound::Upper,
        });
    }
    Ok(price)
}

/// Check a piece count against `0 < pieces < limits.max_pieces`.
pub fn check_pieces(pieces: i64, limits: &Limits) -> Result<u32, BillError> {
    if pieces <= 0 {
        return Err(BillError::OutOfRange {
            quantity: Quantity::TotalPieces,
            bound: Bound::Lower,
        });
    }
    if pieces >= i64::from(limits.max_pieces) {
        return Err(BillError::OutOfRange {
            quantity: Quantity::TotalPieces,
            bound: Bound::Upper,
        });
    }
    // Below max_pieces, so it fits
    Ok(pieces as u32)
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantEntry {
    pub name: String,
    pub pieces_eaten: i64,
}

/// Insertion-ordered mapping from participant name to pieces eaten.
///
/// Recording a name that already exists replaces its count in place, so the
/// participant keeps the position of their first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Participants {
    entries: Vec<ParticipantEntry>,
}

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pieces_eaten` for `name`, returning the count it replaced.
    pub fn record(&mut self, name: impl Into<String>, pieces_eaten: i64) -> Option<i64> {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.pieces_eaten, pieces_eaten)),
            None => {
                self.entries.push(ParticipantEntry { name, pieces_eaten });
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.pieces_eaten)
    }

    /// Sum of the current counts. Widened so absurd entries cannot overflow.
    pub fn total_eaten(&self) -> i128 {
        self.entries
            .iter()
            .map(|e| i128::from(e.pieces_eaten))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Participants {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut participants = Participants::new();
        for (name, pieces) in iter {
            participants.record(name, pieces);
        }
        participants
    }
}

/// One participant's share of the bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillLine {
    pub name: String,
    pub pieces_eaten: i64,
    pub amount_due: Decimal,
}

/// The computed bill, one line per participant in ledger order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub total_price: Decimal,
    pub total_pieces: u32,
    pub price_per_piece: Decimal,
    pub rounding: Rounding,
    pub lines: Vec<BillLine>,
}

impl Bill {
    /// Sum of all rounded amounts
    pub fn total_due(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount_due).sum()
    }
}

/// Fail if the ledger claims more pieces than the pizza had.
pub fn check_aggregate(input: &BillInput, participants: &Participants) -> Result<(), BillError> {
    let eaten = participants.total_eaten();
    if eaten > i128::from(input.total_pieces()) {
        return Err(BillError::Overconsumption {
            eaten,
            total: input.total_pieces(),
        });
    }
    Ok(())
}

/// Validate the aggregate and compute every participant's amount due.
///
/// Pure: the same input and ledger always produce the same bill.
pub fn allocate(
    input: &BillInput,
    participants: &Participants,
    rounding: Rounding,
) -> Result<Bill, BillError> {
    check_aggregate(input, participants)?;

    let price_per_piece = input.price_per_piece();
    let lines = participants
        .iter()
        .map(|entry| {
            let raw = price_per_piece
                .checked_mul(Decimal::from(entry.pieces_eaten))
                .ok_or_else(|| BillError::AmountOverflow {
                    name: entry.name.clone(),
                })?;
            Ok(BillLine {
                name: entry.name.clone(),
                pieces_eaten: entry.pieces_eaten,
                amount_due: rounding.apply(raw),
            })
        })
        .collect::<Result<Vec<_>, BillError>>()?;

    Ok(Bill {
        total_price: input.total_price(),
        total_pieces: input.total_pieces(),
        price_per_piece,
        rounding,
        lines,
    })
}
