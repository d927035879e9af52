//! Error taxonomy for a bill-splitting session.
//!
//! Every variant is terminal: a session that hits one of these stops without
//! printing any bill lines. The `Display` text is the German message shown
//! to the user.

use serde::Serialize;
use thiserror::Error;

/// Which quantity failed a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    TotalPrice,
    TotalPieces,
}

/// Which side of the permitted range was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Value was zero or negative
    Lower,
    /// Value reached or exceeded the configured maximum
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillError {
    #[error("Fehler: '{text}' ist keine gueltige Zahl.")]
    NotANumber { text: String },

    #[error("Fehler: Eingabe vorzeitig beendet.")]
    InputEnded,

    #[error("Fehler: '{text}' ist kein gueltiger Text.")]
    NotText { text: String },

    #[error("Fehler: Der Name darf nicht leer sein.")]
    BlankName,

    #[error("{}", out_of_range_message(.quantity, .bound))]
    OutOfRange { quantity: Quantity, bound: Bound },

    #[error("Fehler, Anzahl gegessenen Stuecke {eaten} groesser als gesamte Stuecke {total}.")]
    Overconsumption { eaten: i128, total: u32 },

    #[error("Fehler: Der Betrag fuer {name} ist zu gross.")]
    AmountOverflow { name: String },
}

/// Coarse classification of [`BillError`], stable across message changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillErrorKind {
    InvalidInput,
    OutOfRange,
    Overconsumption,
    AmountOverflow,
}

impl BillError {
    pub fn kind(&self) -> BillErrorKind {
        match self {
            BillError::NotANumber { .. }
            | BillError::InputEnded
            | BillError::NotText { .. }
            | BillError::BlankName => BillErrorKind::InvalidInput,
            BillError::OutOfRange { .. } => BillErrorKind::OutOfRange,
            BillError::Overconsumption { .. } => BillErrorKind::Overconsumption,
            BillError::AmountOverflow { .. } => BillErrorKind::AmountOverflow,
        }
    }
}

fn out_of_range_message(quantity: &Quantity, bound: &Bound) -> &'static str {
    match (quantity, bound) {
        (Quantity::TotalPrice, Bound::Lower) => "Fehler: Pizza Preis muss groesser als 0 sein.",
        (Quantity::TotalPrice, Bound::Upper) => "Fehler: Pizza Preis darf nicht zu hoch sein.",
        (Quantity::TotalPieces, Bound::Lower) => {
            "Fehler: Anzahl Stuecke muss groesser als 0 sein."
        }
        (Quantity::TotalPieces, Bound::Upper) => {
            "Fehler: Eine Pizza kann nicht so viele Stuecke haben."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let not_a_number = BillError::NotANumber {
            text: "abc".to_string(),
        };
        assert_eq!(not_a_number.kind(), BillErrorKind::InvalidInput);
        assert_eq!(BillError::InputEnded.kind(), BillErrorKind::InvalidInput);
        assert_eq!(BillError::BlankName.kind(), BillErrorKind::InvalidInput);
        let not_text = BillError::NotText {
            text: "\u{fffd}".to_string(),
        };
        assert_eq!(not_text.kind(), BillErrorKind::InvalidInput);

        let range = BillError::OutOfRange {
            quantity: Quantity::TotalPieces,
            bound: Bound::Upper,
        };
        assert_eq!(range.kind(), BillErrorKind::OutOfRange);

        let over = BillError::Overconsumption { eaten: 3, total: 2 };
        assert_eq!(over.kind(), BillErrorKind::Overconsumption);
    }

    #[test]
    fn test_messages_are_german() {
        let err = BillError::NotANumber {
            text: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Fehler: 'abc' ist keine gueltige Zahl.");

        let err = BillError::OutOfRange {
            quantity: Quantity::TotalPrice,
            bound: Bound::Upper,
        };
        assert_eq!(err.to_string(), "Fehler: Pizza Preis darf nicht zu hoch sein.");

        let err = BillError::Overconsumption { eaten: 3, total: 2 };
        assert_eq!(
            err.to_string(),
            "Fehler, Anzahl gegessenen Stuecke 3 groesser als gesamte Stuecke 2."
        );
    }
}
