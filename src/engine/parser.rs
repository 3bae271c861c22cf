//! Line parser.
//!
//! Stitches the grammar productions and the resolution passes together:
//!
//! ```text
//! trim ─▶ lead ─▶ [\s-]* ─▶ container nouns ─┬─▶ unit prefix (Declared / CaseInsensitive)
//!         (only after a resolvable         │       └─▶ container nouns
//!          container unit)                 └─▶ "of" ─▶ container size ─▶ ingredient
//!                                                      ─▶ specifics ─▶ aside
//!
//! ingredient blank after a unit prefix?      retry the tail without stripping it
//! still blank after container nouns?         retry with the nouns as ingredient text
//! no unit yet?                               Container pass on the lead's raw unit
//! ```
//!
//! Everything is computed fresh per call; the only shared state is the
//! read-only [`UnitVocabulary`].

use super::cleanup::clean_ingredient;
use super::cursor::Cursor;
use super::grammar::{self, IngredientClause, Lead};
use super::resolve::{self, UnitPass, UnitPrefix};
use crate::{ParseDetails, ParseError, ParseResult, Quantity, Span, UnitVocabulary};
use std::time::Instant;
use tracing::debug;

bitflags::bitflags! {
    /// Grammar productions that matched while parsing a line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Productions: u16 {
        /// A leading amount or range.
        const MEASURE          = 1 << 0;
        /// The leading quantity is a range; only its first endpoint counts.
        const RANGE            = 1 << 1;
        /// A count multiplying the measure ("2" in "2 (28 ounce) cans").
        const CONTAINER_AMOUNT = 1 << 2;
        /// One or more `(...)` packaging annotations.
        const CONTAINER_SIZE   = 1 << 3;
        /// Packaging nouns such as "can" or "jar".
        const CONTAINER_NOUN   = 1 << 4;
        /// A unit prefix stripped from the ingredient clause.
        const UNIT_CLAUSE      = 1 << 5;
        const OF               = 1 << 6;
        /// Qualifier runs like "boneless," folded into the ingredient.
        const ADJECTIVES       = 1 << 7;
        const SPECIFICS        = 1 << 8;
        /// Text after a `(` or `;` ending the ingredient clause.
        const TRAILING_ASIDE   = 1 << 9;
        /// The unit prefix was given back so the ingredient is not empty.
        const BACKTRACKED      = 1 << 10;
    }
}

/// Parser output plus the segmentation that produced it.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub result: ParseResult,
    pub details: ParseDetails,
}

/// Everything after the lead.
#[derive(Debug)]
struct Tail<'a> {
    prefix: Option<UnitPrefix>,
    ingredient_start: usize,
    clause: IngredientClause<'a>,
    cleaned: String,
    specifics: Option<Span>,
    trailing: Option<Span>,
    productions: Productions,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Parser<'v> {
    vocab: &'v UnitVocabulary,
}

impl<'v> Parser<'v> {
    pub fn new(vocab: &'v UnitVocabulary) -> Self {
        Parser { vocab }
    }

    #[tracing::instrument(level = "debug", name = "parse", skip_all, fields(len = line.len()))]
    pub fn run(&self, line: &str) -> Result<RunResult, ParseError> {
        let started = Instant::now();
        let input = line.trim();
        let malformed = || ParseError::MalformedInput { line: line.to_string() };
        if input.is_empty() {
            return Err(malformed());
        }

        let mut cur = Cursor::new(input);
        let lead = grammar::lead(&mut cur);
        let mut productions = lead_productions(&lead);
        tracing::trace!(?lead, "lead");

        let raw_container_unit = lead.container.and_then(|c| c.raw_unit);
        let container_unit = resolve::container_unit(raw_container_unit, self.vocab);

        if lead.has_quantity() {
            cur.skip_while(|c| c.is_whitespace() || c == '-');
        }
        cur.skip_whitespace();
        let before_nouns = cur;
        // Nouns after an unresolvable container size are left for the unit passes.
        let mut nouns = container_unit.is_some() && grammar::container_nouns(&mut cur, self.vocab).is_some();

        let prefix = resolve::unit_prefix(cur.rest(), self.vocab);
        let mut tail = self.tail(cur, prefix);
        if tail.cleaned.is_empty() && prefix.is_some() {
            debug!("unit prefix left no ingredient; keeping it as ingredient text");
            tail = self.tail(cur, None);
            tail.productions |= Productions::BACKTRACKED;
        }
        if tail.cleaned.is_empty() && nouns {
            debug!("container nouns left no ingredient; keeping them as ingredient text");
            nouns = false;
            tail = self.tail(before_nouns, None);
            tail.productions |= Productions::BACKTRACKED;
        }
        if tail.cleaned.is_empty() {
            debug!("no ingredient clause");
            return Err(malformed());
        }
        if nouns {
            productions |= Productions::CONTAINER_NOUN;
        }
        productions |= tail.productions;

        let (unit, unit_pass) = match (tail.prefix, container_unit) {
            (Some(prefix), _) => (Some(prefix.unit), Some(prefix.pass)),
            (None, Some(unit)) => (Some(unit), Some(UnitPass::Container)),
            (None, None) => (None, None),
        };

        let amount = resolve::resolve_amount(lead.container_amount, lead.measure);

        let mut ingredient = tail.cleaned.clone();
        if amount.is_some() && unit.is_none() {
            // A bare count: the trailing clause still describes the item.
            if let Some(specifics) = tail.specifics {
                ingredient.push_str(specifics.slice(input).trim_end());
            }
        }

        debug!(?amount, ?unit, %ingredient, ?productions, "parsed ingredient line");

        let unit_amount_clause = input[..tail.ingredient_start].trim();
        let details = ParseDetails {
            container_amount: lead.container_amount.map(Quantity::value),
            container_unit: raw_container_unit.map(str::to_string),
            measure: lead.measure.map(Quantity::value),
            measure_upper: lead.measure.and_then(Quantity::upper),
            unit_amount_clause: (!unit_amount_clause.is_empty()).then(|| unit_amount_clause.to_string()),
            ingredient_clause: tail.clause.text(input),
            specifics: tail.specifics.map(|s| s.slice(input).to_string()),
            trailing_aside: tail.trailing.map(|s| s.slice(input).to_string()),
            unit_pass,
            productions,
            elapsed: started.elapsed(),
        };

        Ok(RunResult { result: ParseResult { text: line.to_string(), amount, unit, ingredient }, details })
    }

    fn tail<'a>(&self, mut cur: Cursor<'a>, prefix: Option<UnitPrefix>) -> Tail<'a> {
        let mut productions = Productions::empty();

        if let Some(prefix) = prefix {
            cur.advance(prefix.len);
            productions |= Productions::UNIT_CLAUSE;
            if grammar::container_nouns(&mut cur, self.vocab).is_some() {
                productions |= Productions::CONTAINER_NOUN;
            }
        }
        cur.skip_whitespace();

        if grammar::of_word(&mut cur) {
            productions |= Productions::OF;
        }
        if grammar::container_size(&mut cur).is_some() {
            productions |= Productions::CONTAINER_SIZE;
        }
        cur.skip_whitespace();

        let ingredient_start = cur.pos();
        let mut clause = grammar::ingredient_clause(&mut cur);
        if !clause.adjectives.is_empty() {
            productions |= Productions::ADJECTIVES;
        }
        let specifics = grammar::specifics(&mut cur, &mut clause.body);
        if specifics.is_some() {
            productions |= Productions::SPECIFICS;
        }
        let trailing = grammar::trailing_aside(&mut cur);
        if trailing.is_some() {
            productions |= Productions::TRAILING_ASIDE;
        }

        let cleaned = clean_ingredient(&clause.text(cur.input()));
        Tail { prefix, ingredient_start, clause, cleaned, specifics, trailing, productions }
    }
}

fn lead_productions(lead: &Lead<'_>) -> Productions {
    let mut productions = Productions::empty();
    if lead.has_quantity() {
        productions |= Productions::MEASURE;
    }
    if lead.measure.is_some_and(Quantity::is_range) || lead.container_amount.is_some_and(Quantity::is_range) {
        productions |= Productions::RANGE;
    }
    if lead.container_amount.is_some() {
        productions |= Productions::CONTAINER_AMOUNT;
    }
    if lead.container.is_some() {
        productions |= Productions::CONTAINER_SIZE;
    }
    productions
}
