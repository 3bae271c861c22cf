//! Segmentation grammar.
//!
//! Each production consumes from the front of the remaining text, takes the
//! longest match at each decision point and leaves the cursor untouched when it
//! fails. Together they mirror this grammar:
//!
//! ```text
//! fraction         := digit "/" digit                       (denominator != 0)
//! amount           := fraction
//!                   | decimal (ws* "-"? fraction)?
//!                   | "." digits
//! quantity         := amount (ws* ("to" | "-" ws* "to" | "-") ws* amount)?
//! parens           := "(" [^)]* ")"
//! container_size   := ((quantity ws*)? parens ws*)+
//! lead             := quantity ws+ container_size           count × measure in parens
//!                   | quantity ws+ quantity                 count × measure
//!                   | quantity                              measure
//!                   | container_size                        measure in parens
//! container_nouns  := (box | can | jar | package aliases, followed by [\s.]+)*
//! adjective        := [^-(,;]+ ("less" | "ly" | "full") ","
//! ingredient       := adjective* ([^(,;-] | "-" \w)+
//! specifics        := ("," | " - ") .*
//! ```
//!
//! Unit prefixes are *not* matched here: `resolve.rs` strips them with its
//! ordered passes, and `parser.rs` stitches the productions and the passes
//! together.

use super::cursor::Cursor;
use crate::{Amount, Fraction, Quantity, Span, UnitFamily, UnitVocabulary};

/// `(...)` annotations describing packaging, e.g. `"(28 fl oz)"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ContainerSize<'a> {
    /// Leading quantity of the first parenthetical that has one.
    pub measure: Option<Quantity>,
    /// Text after that quantity, stripped of whitespace and hyphens. Not yet
    /// resolved against the vocabulary.
    pub raw_unit: Option<&'a str>,
}

/// The quantity prefix of a line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Lead<'a> {
    /// Count multiplying the measure ("2" in `"2 (28 ounce) cans"`).
    pub container_amount: Option<Quantity>,
    pub measure: Option<Quantity>,
    pub container: Option<ContainerSize<'a>>,
}

impl Lead<'_> {
    pub fn has_quantity(&self) -> bool {
        self.container_amount.is_some() || self.measure.is_some()
    }
}

/// The ingredient clause, with its adjective runs kept apart so their
/// terminating commas can be dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct IngredientClause<'a> {
    pub adjectives: Vec<&'a str>,
    pub body: Span,
}

impl IngredientClause<'_> {
    /// Adjective runs and body, concatenated.
    pub fn text(&self, input: &str) -> String {
        let mut out: String = self.adjectives.concat();
        out.push_str(self.body.slice(input));
        out
    }
}

pub(crate) fn fraction(cur: &mut Cursor<'_>) -> Option<Fraction> {
    let caps = regex!(r"^(\d)/(\d)").captures(cur.rest())?;
    let numerator = caps[1].parse().ok()?;
    let denominator: u32 = caps[2].parse().ok()?;
    if denominator == 0 {
        return None;
    }
    cur.advance(caps[0].len());
    Some(Fraction { numerator, denominator })
}

pub(crate) fn amount(cur: &mut Cursor<'_>) -> Option<Amount> {
    if let Some(fraction) = fraction(cur) {
        return Some(Amount { whole: 0.0, fraction: Some(fraction) });
    }

    if let Some(text) = cur.eat_regex(regex!(r"^\.\d+")) {
        let whole = text.parse().ok()?;
        return Some(Amount { whole, fraction: None });
    }

    let saved = *cur;
    let whole: f64 = match cur.eat_regex(regex!(r"^\d+(?:\.\d+)?")).map(str::parse::<f64>) {
        Some(Ok(v)) if v.is_finite() => v,
        _ => {
            *cur = saved;
            return None;
        }
    };

    // Mixed number: "1 1/2", "1  1/2", "1-1/2".
    let before_fraction = *cur;
    cur.skip_whitespace();
    cur.eat_char('-');
    match fraction(cur) {
        Some(fraction) => Some(Amount { whole, fraction: Some(fraction) }),
        None => {
            *cur = before_fraction;
            Some(Amount { whole, fraction: None })
        }
    }
}

/// An amount or a range of two amounts.
pub(crate) fn quantity(cur: &mut Cursor<'_>) -> Option<Quantity> {
    let low = amount(cur)?;

    let after_low = *cur;
    cur.skip_whitespace();
    let separated = if cur.eat_char('-') {
        let after_dash = *cur;
        cur.skip_whitespace();
        if !cur.eat_ignore_case("to") {
            *cur = after_dash;
        }
        true
    } else {
        cur.eat_ignore_case("to")
    };

    if separated {
        cur.skip_whitespace();
        if let Some(high) = amount(cur) {
            return Some(Quantity::Range { low, high });
        }
    }

    *cur = after_low;
    Some(Quantity::Single(low))
}

/// A balanced-enough `(...)`; returns the inner span.
fn parens(cur: &mut Cursor<'_>) -> Option<Span> {
    let rest = cur.rest();
    if !rest.starts_with('(') {
        return None;
    }
    let close = rest.find(')')?;
    let start = cur.pos() + 1;
    let inner = Span::new(start, cur.pos() + close);
    cur.advance(close + 1);
    Some(inner)
}

/// Split a parenthetical's content into its leading quantity and raw unit.
fn container_content(text: &str) -> (Option<Quantity>, Option<&str>) {
    let mut inner = Cursor::new(text);
    inner.skip_whitespace();
    let measure = quantity(&mut inner);
    let raw = if measure.is_some() { inner.rest() } else { text };
    let raw = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '-').trim_end();
    (measure, (!raw.is_empty()).then_some(raw))
}

pub(crate) fn container_size<'a>(cur: &mut Cursor<'a>) -> Option<ContainerSize<'a>> {
    let mut found = false;
    let mut measure = None;
    let mut raw_unit = None;

    loop {
        let saved = *cur;
        if quantity(cur).is_some() {
            cur.skip_whitespace();
        }
        let Some(inner) = parens(cur) else {
            *cur = saved;
            break;
        };

        let (inner_measure, inner_raw) = container_content(inner.slice(cur.input()));
        if measure.is_none() && inner_measure.is_some() {
            measure = inner_measure;
            raw_unit = inner_raw;
        } else if !found {
            raw_unit = inner_raw;
        }
        found = true;
        cur.skip_whitespace();
    }

    found.then_some(ContainerSize { measure, raw_unit })
}

pub(crate) fn lead<'a>(cur: &mut Cursor<'a>) -> Lead<'a> {
    if let Some(first) = quantity(cur) {
        let after_first = *cur;
        if cur.skip_whitespace() > 0 {
            if let Some(size) = container_size(cur) {
                return Lead { container_amount: Some(first), measure: size.measure, container: Some(size) };
            }
            if let Some(second) = quantity(cur) {
                return Lead { container_amount: Some(first), measure: Some(second), container: None };
            }
        }
        *cur = after_first;
        return Lead { measure: Some(first), ..Lead::default() };
    }

    match container_size(cur) {
        Some(size) => Lead { measure: size.measure, container: Some(size), ..Lead::default() },
        None => Lead::default(),
    }
}

/// Packaging nouns trailing a measure: `"can "` in `"(28 fl oz) can tomatoes"`.
pub(crate) fn container_nouns(cur: &mut Cursor<'_>, vocab: &UnitVocabulary) -> Option<Span> {
    let start = cur.pos();
    while let Some((len, unit)) = vocab.match_unit_token(cur.rest()) {
        if unit.family() != UnitFamily::Container {
            break;
        }
        cur.advance(len);
    }
    let span = cur.span_from(start);
    (!span.is_empty()).then_some(span)
}

/// A standalone `of` followed by whitespace.
pub(crate) fn of_word(cur: &mut Cursor<'_>) -> bool {
    cur.eat_regex(regex!(r"(?i)^of\s+")).is_some()
}

/// `"boneless,"`: a qualifier run ending in less/ly/full and a comma. Returns
/// the run without its comma.
fn adjective<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let rest = cur.rest();
    let run_len = rest.find(|c: char| matches!(c, '-' | '(' | ',' | ';')).unwrap_or(rest.len());
    if !rest[run_len..].starts_with(',') {
        return None;
    }
    let run = &rest[..run_len];
    let lower = run.to_ascii_lowercase();
    let qualifies = ["less", "ly", "full"].iter().any(|suffix| lower.ends_with(suffix) && run.len() > suffix.len());
    if !qualifies {
        return None;
    }
    cur.advance(run_len + 1);
    Some(run)
}

/// Maximal run excluding `(`, `,`, `;`; a hyphen only when a word char follows.
fn body(cur: &mut Cursor<'_>) -> Span {
    let start = cur.pos();
    let mut chars = cur.rest().char_indices().peekable();
    let mut len = 0;
    while let Some((idx, c)) = chars.next() {
        match c {
            '(' | ',' | ';' => break,
            '-' => match chars.peek() {
                Some(&(_, next)) if next.is_alphanumeric() || next == '_' => {
                    chars.next();
                    len = idx + 1 + next.len_utf8();
                }
                _ => break,
            },
            _ => len = idx + c.len_utf8(),
        }
    }
    cur.advance(len);
    cur.span_from(start)
}

pub(crate) fn ingredient_clause<'a>(cur: &mut Cursor<'a>) -> IngredientClause<'a> {
    let saved = *cur;
    let mut adjectives = Vec::new();
    while let Some(run) = adjective(cur) {
        adjectives.push(run);
    }

    let body_span = body(cur);
    if body_span.slice(cur.input()).trim().is_empty() && !adjectives.is_empty() {
        // The body needs at least one char; give the adjectives back.
        *cur = saved;
        return IngredientClause { adjectives: Vec::new(), body: body(cur) };
    }
    IngredientClause { adjectives, body: body_span }
}

/// Trailing preparation notes: a comma, or `" - "`, up to the end of line.
/// A `" - "` reclaims the space the body already consumed, so `body` may be
/// shortened.
pub(crate) fn specifics(cur: &mut Cursor<'_>, body: &mut Span) -> Option<Span> {
    let rest = cur.rest();
    if rest.starts_with(',') {
        let span = Span::new(cur.pos(), cur.input().len());
        cur.advance_to_end();
        return Some(span);
    }

    if rest.starts_with("- ") {
        let body_text = body.slice(cur.input());
        let trimmed = body_text.trim_end_matches(' ');
        if trimmed.len() < body_text.len() {
            body.end = body.start + trimmed.len();
            let span = Span::new(body.end, cur.input().len());
            cur.advance_to_end();
            return Some(span);
        }
    }
    None
}

/// Whatever a `(` or `;` left unconsumed.
pub(crate) fn trailing_aside(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.at_end() {
        return None;
    }
    let start = cur.pos();
    cur.advance_to_end();
    Some(cur.span_from(start))
}
