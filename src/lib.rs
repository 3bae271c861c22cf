//! Recipe ingredient line parsing.
//!
//! Turns a free-text line such as `"1 1/2 cups (6.75 ounces) all-purpose flour, sifted"`
//! into an amount (`1.5`), a canonical unit ([`UnitId::Cup`]) and a cleaned
//! ingredient name (`"all-purpose flour"`).
//!
//! ```
//! use dollop::{UnitId, parse};
//!
//! let out = parse("2 (28 ounce) cans crushed tomatoes").unwrap();
//! assert_eq!(out.amount, Some(56.0));
//! assert_eq!(out.unit, Some(UnitId::Ounce));
//! assert_eq!(out.ingredient, "crushed tomatoes");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod units;

pub use api::{ParseDetails, ParseResult, ParseResultVerbose, parse, parse_verbose, parse_verbose_with, parse_with};
pub use engine::{Productions, UnitPass};
pub use error::{ParseError, ParseOutcome};
pub use units::{UnitFamily, UnitId, UnitVocabulary, UnknownUnit};

// --- Internal types ---------------------------------------------------------

/// A single-digit `n/d` fraction. The denominator is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub fn value(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

/// A parsed amount: whole/decimal part plus an optional fraction
/// (`"1 1/2"`, `".25"`, `"3/4"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Amount {
    pub whole: f64,
    pub fraction: Option<Fraction>,
}

impl Amount {
    pub fn value(self) -> f64 {
        self.whole + self.fraction.map_or(0.0, Fraction::value)
    }
}

/// A single amount or a range of two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Quantity {
    Single(Amount),
    Range { low: Amount, high: Amount },
}

impl Quantity {
    /// Numeric value. Ranges only ever contribute their first endpoint.
    pub fn value(self) -> f64 {
        match self {
            Quantity::Single(amount) => amount.value(),
            Quantity::Range { low, .. } => low.value(),
        }
    }

    /// Second endpoint of a range.
    pub fn upper(self) -> Option<f64> {
        match self {
            Quantity::Single(_) => None,
            Quantity::Range { high, .. } => Some(high.value()),
        }
    }

    pub fn is_range(self) -> bool {
        matches!(self, Quantity::Range { .. })
    }
}

/// Byte range into the (trimmed) input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    pub fn slice(self, input: &str) -> &str {
        input.get(self.start..self.end).unwrap_or("")
    }
}
