use crate::engine::{self, Productions, UnitPass};
use crate::{ParseOutcome, UnitId, UnitVocabulary};
use std::time::Duration;

/// The structured form of one ingredient line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// The line as given.
    pub text: String,
    /// Quantity, already multiplied by any container amount. `None` when the
    /// line has no quantity.
    pub amount: Option<f64>,
    pub unit: Option<UnitId>,
    /// Cleaned ingredient name; never empty.
    pub ingredient: String,
}

/// Segmentation behind a [`ParseResult`], for debugging.
///
/// Amounts here are the raw numeric values of each segment, before the
/// container multiplication.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDetails {
    /// Count multiplying the measure ("2" in `"2 (28 ounce) cans"`).
    pub container_amount: Option<f64>,
    /// Text inside a leading container size after its quantity, unresolved.
    pub container_unit: Option<String>,
    /// The primary amount (first endpoint for ranges).
    pub measure: Option<f64>,
    /// Second endpoint of a range. Matched, never used numerically.
    pub measure_upper: Option<f64>,
    /// Everything consumed ahead of the ingredient clause.
    pub unit_amount_clause: Option<String>,
    /// Ingredient clause before cleanup, adjective commas already dropped.
    pub ingredient_clause: String,
    /// Trailing `,` or ` - ` clause.
    pub specifics: Option<String>,
    /// Discarded text after a `(` or `;` that ended the ingredient clause.
    pub trailing_aside: Option<String>,
    /// Which pass produced [`ParseResult::unit`].
    pub unit_pass: Option<UnitPass>,
    pub productions: Productions,
    /// Time spent parsing.
    pub elapsed: Duration,
}

/// Result from [`parse_verbose`] and [`parse_verbose_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResultVerbose {
    pub result: ParseResult,
    pub details: ParseDetails,
}

/// Parse `line` with the shared unit vocabulary.
///
/// # Example
/// ```
/// use dollop::{UnitId, parse};
///
/// let out = parse("1 1/2 cups (6.75 ounces or 195 grams) all-purpose flour").unwrap();
/// assert_eq!(out.amount, Some(1.5));
/// assert_eq!(out.unit, Some(UnitId::Cup));
/// assert_eq!(out.ingredient, "all-purpose flour");
/// ```
pub fn parse(line: &str) -> ParseOutcome<ParseResult> {
    parse_with(line, UnitVocabulary::shared())
}

/// Parse `line` with the provided vocabulary.
pub fn parse_with(line: &str, vocab: &UnitVocabulary) -> ParseOutcome<ParseResult> {
    engine::Parser::new(vocab).run(line).map(|run| run.result)
}

/// Parse `line` and also return how it was segmented.
pub fn parse_verbose(line: &str) -> ParseOutcome<ParseResultVerbose> {
    parse_verbose_with(line, UnitVocabulary::shared())
}

pub fn parse_verbose_with(line: &str, vocab: &UnitVocabulary) -> ParseOutcome<ParseResultVerbose> {
    let run = engine::Parser::new(vocab).run(line)?;
    Ok(ParseResultVerbose { result: run.result, details: run.details })
}
