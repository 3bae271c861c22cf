//! Unit vocabulary.
//!
//! The vocabulary is the closed table of every accepted spelling of a
//! measurement unit, mapped to its canonical [`UnitId`]. It is consumed in two
//! forms:
//!
//! - **Lookup** ([`UnitVocabulary::resolve`]): exact alias match, used by the
//!   unit-resolution passes and the container-unit fallback.
//! - **Alternation** ([`UnitVocabulary::alias_pattern`]): every alias, escaped
//!   and sorted longest-first, joined with `|`. The grammar compiles it once
//!   into an anchored, case-insensitive token matcher.
//!
//! Longest-first is load-bearing: the `regex` crate picks the first matching
//! alternative, so `"fl oz"` has to come before `"fl"`-like prefixes and
//! `"tablespoon"` before `"t"`.
//!
//! Table order (the order aliases are declared below) is also observable: the
//! prefix passes in `engine/resolve.rs` walk it and stop at the first hit.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Canonical measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitId {
    // Imperial volume/weight
    Cup,
    FluidOunce,
    Gallon,
    Ounce,
    Pint,
    Pound,
    Quart,
    Tablespoon,
    Teaspoon,
    // Metric
    Gram,
    Kilogram,
    Liter,
    Milligram,
    Milliliter,
    // Informal
    Pinch,
    Dash,
    Touch,
    Handful,
    Stick,
    Large,
    Medium,
    Small,
    // Containers
    Box,
    Can,
    Jar,
    Package,
}

/// Coarse grouping of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    Imperial,
    Metric,
    /// Nonstandard amounts and generic sizes ("pinch", "large").
    Informal,
    /// Packaging nouns ("can", "jar"). These may trail a measured unit.
    Container,
}

impl UnitId {
    /// Every unit, in declaration order.
    pub const ALL: [UnitId; 26] = [
        UnitId::Cup,
        UnitId::FluidOunce,
        UnitId::Gallon,
        UnitId::Ounce,
        UnitId::Pint,
        UnitId::Pound,
        UnitId::Quart,
        UnitId::Tablespoon,
        UnitId::Teaspoon,
        UnitId::Gram,
        UnitId::Kilogram,
        UnitId::Liter,
        UnitId::Milligram,
        UnitId::Milliliter,
        UnitId::Pinch,
        UnitId::Dash,
        UnitId::Touch,
        UnitId::Handful,
        UnitId::Stick,
        UnitId::Large,
        UnitId::Medium,
        UnitId::Small,
        UnitId::Box,
        UnitId::Can,
        UnitId::Jar,
        UnitId::Package,
    ];

    /// Stable snake_case name, e.g. `"fluid_ounce"`.
    pub fn name(self) -> &'static str {
        match self {
            UnitId::Cup => "cup",
            UnitId::FluidOunce => "fluid_ounce",
            UnitId::Gallon => "gallon",
            UnitId::Ounce => "ounce",
            UnitId::Pint => "pint",
            UnitId::Pound => "pound",
            UnitId::Quart => "quart",
            UnitId::Tablespoon => "tablespoon",
            UnitId::Teaspoon => "teaspoon",
            UnitId::Gram => "gram",
            UnitId::Kilogram => "kilogram",
            UnitId::Liter => "liter",
            UnitId::Milligram => "milligram",
            UnitId::Milliliter => "milliliter",
            UnitId::Pinch => "pinch",
            UnitId::Dash => "dash",
            UnitId::Touch => "touch",
            UnitId::Handful => "handful",
            UnitId::Stick => "stick",
            UnitId::Large => "large",
            UnitId::Medium => "medium",
            UnitId::Small => "small",
            UnitId::Box => "box",
            UnitId::Can => "can",
            UnitId::Jar => "jar",
            UnitId::Package => "package",
        }
    }

    pub fn family(self) -> UnitFamily {
        match self {
            UnitId::Cup
            | UnitId::FluidOunce
            | UnitId::Gallon
            | UnitId::Ounce
            | UnitId::Pint
            | UnitId::Pound
            | UnitId::Quart
            | UnitId::Tablespoon
            | UnitId::Teaspoon => UnitFamily::Imperial,
            UnitId::Gram | UnitId::Kilogram | UnitId::Liter | UnitId::Milligram | UnitId::Milliliter => {
                UnitFamily::Metric
            }
            UnitId::Pinch
            | UnitId::Dash
            | UnitId::Touch
            | UnitId::Handful
            | UnitId::Stick
            | UnitId::Large
            | UnitId::Medium
            | UnitId::Small => UnitFamily::Informal,
            UnitId::Box | UnitId::Can | UnitId::Jar | UnitId::Package => UnitFamily::Container,
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not a canonical unit name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit name: {0:?}")]
pub struct UnknownUnit(pub String);

impl FromStr for UnitId {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitId::ALL.iter().copied().find(|u| u.name() == s).ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// Alias declarations, grouped by unit. Order matters (see module docs).
const ALIAS_TABLE: &[(UnitId, &[&str])] = &[
    // english units
    (UnitId::Cup, &["c.", "c", "cup", "cups"]),
    (UnitId::FluidOunce, &["fl. oz.", "fl oz", "fluid ounce", "fluid ounces"]),
    (UnitId::Gallon, &["gal", "gal.", "gallon", "gallons"]),
    (UnitId::Ounce, &["oz", "oz.", "ounce", "ounces"]),
    (UnitId::Pint, &["pt", "pt.", "pint", "pints"]),
    (UnitId::Pound, &["lb", "lb.", "pound", "pounds"]),
    (UnitId::Quart, &["qt", "qt.", "qts", "qts.", "quart", "quarts"]),
    (UnitId::Tablespoon, &["tbsp.", "tbsp", "T", "T.", "tablespoon", "tablespoons", "tbs.", "tbs"]),
    (UnitId::Teaspoon, &["tsp.", "tsp", "t", "t.", "teaspoon", "teaspoons"]),
    // metric units
    (UnitId::Gram, &["g", "g.", "gr", "gr.", "gram", "grams"]),
    (UnitId::Kilogram, &["kg", "kg.", "kilogram", "kilograms"]),
    (UnitId::Liter, &["l", "l.", "liter", "liters"]),
    (UnitId::Milligram, &["mg", "mg.", "milligram", "milligrams"]),
    (UnitId::Milliliter, &["ml", "ml.", "milliliter", "milliliters"]),
    // nonstandard units
    (UnitId::Pinch, &["pinch", "pinches"]),
    (UnitId::Dash, &["dash", "dashes"]),
    (UnitId::Touch, &["touch", "touches"]),
    (UnitId::Handful, &["handful", "handfuls"]),
    (UnitId::Stick, &["stick", "sticks"]),
    // generic sizes
    (UnitId::Large, &["large"]),
    (UnitId::Medium, &["medium"]),
    (UnitId::Small, &["small", "tiny"]),
    // containers
    (UnitId::Box, &["boxes", "box"]),
    (UnitId::Can, &["cans", "can"]),
    (UnitId::Jar, &["jars", "jar"]),
    (UnitId::Package, &["packages", "package", "pkg.", "pkgs", "pkg"]),
];

static SHARED: Lazy<UnitVocabulary> = Lazy::new(UnitVocabulary::new);

/// Alias → [`UnitId`] table plus its compiled alternation.
///
/// Built once and never mutated; share it by reference.
#[derive(Debug)]
pub struct UnitVocabulary {
    /// Aliases in declaration order.
    ordered: Vec<(&'static str, UnitId)>,
    lookup: HashMap<&'static str, UnitId>,
    pattern: String,
    /// `^(?:<pattern>)[\s.]+`, case-insensitive.
    token_re: Regex,
}

impl UnitVocabulary {
    /// Build the vocabulary from the static alias table.
    pub fn new() -> Self {
        let ordered: Vec<(&'static str, UnitId)> = ALIAS_TABLE
            .iter()
            .flat_map(|(unit, aliases)| aliases.iter().map(move |alias| (*alias, *unit)))
            .collect();
        let lookup = ordered.iter().copied().collect();

        // Stable sort: equal-length aliases keep table order.
        let mut by_length: Vec<&'static str> = ordered.iter().map(|(alias, _)| *alias).collect();
        by_length.sort_by(|a, b| b.len().cmp(&a.len()));
        let pattern = by_length.iter().map(|alias| regex::escape(alias)).collect::<Vec<_>>().join("|");

        let token_re = Regex::new(&format!(r"(?i)^(?:{pattern})[\s.]+")).unwrap();

        Self { ordered, lookup, pattern, token_re }
    }

    /// The process-wide vocabulary.
    pub fn shared() -> &'static UnitVocabulary {
        &SHARED
    }

    /// Exact, case-sensitive alias lookup.
    pub fn resolve(&self, alias: &str) -> Option<UnitId> {
        self.lookup.get(alias).copied()
    }

    /// All aliases, escaped, longest first, joined with `|`.
    pub fn alias_pattern(&self) -> &str {
        &self.pattern
    }

    /// Aliases in table order.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, UnitId)> + '_ {
        self.ordered.iter().copied()
    }

    /// Aliases of one unit, in table order.
    pub fn aliases_for(&self, unit: UnitId) -> impl Iterator<Item = &'static str> + '_ {
        self.ordered.iter().filter(move |(_, u)| *u == unit).map(|(alias, _)| *alias)
    }

    /// Match the longest alias at the start of `text`, ignoring case. The alias
    /// must be followed by whitespace or a period; the returned length covers
    /// that trailing run.
    pub fn match_unit_token(&self, text: &str) -> Option<(usize, UnitId)> {
        let m = self.token_re.find(text)?;
        let alias = m.as_str().trim_end_matches(|c: char| c.is_whitespace() || c == '.');
        // The alternation may have consumed a trailing period that belongs to
        // the alias itself ("oz." vs "oz").
        let with_dot = &m.as_str()[..alias.len() + usize::from(m.as_str()[alias.len()..].starts_with('.'))];
        let unit = self.resolve_ignoring_case(with_dot).or_else(|| self.resolve_ignoring_case(alias))?;
        Some((m.end(), unit))
    }

    fn resolve_ignoring_case(&self, alias: &str) -> Option<UnitId> {
        self.resolve(alias)
            .or_else(|| self.ordered.iter().find(|(a, _)| a.eq_ignore_ascii_case(alias)).map(|(_, u)| *u))
    }
}

impl Default for UnitVocabulary {
    fn default() -> Self {
        Self::new()
    }
}
