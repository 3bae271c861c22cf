//! Amount and unit resolution.
//!
//! Numeric resolution multiplies the measure by the container amount:
//!
//! ```text
//! "2 (28 ounce) cans"   container_amount=2  measure=28  -> 56
//! "1 1/2 cups"          container_amount=-  measure=1.5 -> 1.5
//! "2 to 3 Tbsp."        measure=2..3 (first endpoint)   -> 2
//! ```
//!
//! Unit resolution is an ordered fallback; the first pass that matches wins:
//!
//! ```text
//! Declared         "<alias> of " / "<alias> " at the clause start, alias casing as declared
//! CaseInsensitive  "<alias> " against an ASCII-lowercased copy of the clause
//! Container        exact alias match on the raw unit inside a container size
//! ```
//!
//! The first two strip the matched prefix; the last leaves the text alone
//! because the parenthetical was already discarded.

use crate::{Quantity, UnitId, UnitVocabulary};

/// Which resolution pass produced the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitPass {
    /// Alias matched with its declared casing (`"Tbs. "`, `"pinch of "`).
    Declared,
    /// Alias matched after lowercasing the clause (`"TSP "`).
    CaseInsensitive,
    /// Taken from a container size such as `"(28 fl oz)"`.
    Container,
}

/// A unit prefix found at the start of the ingredient clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnitPrefix {
    pub unit: UnitId,
    /// Bytes to strip, including the trailing space (and `"of "`).
    pub len: usize,
    pub pass: UnitPass,
}

pub(crate) fn resolve_amount(container_amount: Option<Quantity>, measure: Option<Quantity>) -> Option<f64> {
    if container_amount.is_none() && measure.is_none() {
        return None;
    }
    let measure = measure.map_or(1.0, Quantity::value);
    let count = container_amount.map_or(1.0, Quantity::value);
    Some(measure * count).filter(|amount| amount.is_finite())
}

/// Passes 1 and 2. `clause` must already be stripped of leading whitespace.
pub(crate) fn unit_prefix(clause: &str, vocab: &UnitVocabulary) -> Option<UnitPrefix> {
    declared_prefix(clause, vocab).or_else(|| case_insensitive_prefix(clause, vocab))
}

fn declared_prefix(clause: &str, vocab: &UnitVocabulary) -> Option<UnitPrefix> {
    vocab.aliases().find_map(|(alias, unit)| {
        let rest = clause.strip_prefix(alias)?;
        let tail = if rest.starts_with(" of ") {
            " of ".len()
        } else if rest.starts_with(' ') {
            1
        } else {
            return None;
        };
        tracing::trace!(alias, %unit, "declared unit prefix");
        Some(UnitPrefix { unit, len: alias.len() + tail, pass: UnitPass::Declared })
    })
}

fn case_insensitive_prefix(clause: &str, vocab: &UnitVocabulary) -> Option<UnitPrefix> {
    // ASCII lowercasing keeps byte offsets aligned with `clause`.
    let lower = clause.to_ascii_lowercase();
    vocab.aliases().find_map(|(alias, unit)| {
        let rest = lower.strip_prefix(alias)?;
        if !rest.starts_with(' ') {
            return None;
        }
        tracing::trace!(alias, %unit, "case-insensitive unit prefix");
        Some(UnitPrefix { unit, len: alias.len() + 1, pass: UnitPass::CaseInsensitive })
    })
}

/// Pass 3.
pub(crate) fn container_unit(raw: Option<&str>, vocab: &UnitVocabulary) -> Option<UnitId> {
    let raw = raw?;
    let unit = vocab.resolve(raw)?;
    tracing::trace!(raw, %unit, "container unit");
    Some(unit)
}
