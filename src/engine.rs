//! Line parsing engine.
//!
//! Parsing a line is a short, fixed pipeline over a byte cursor:
//!
//! ```text
//! line ── trim ──▶ grammar::lead            quantity, container amount, container size
//!                     │
//!                     ▼
//!                  resolve::unit_prefix     Declared ─▶ CaseInsensitive
//!                     │
//!                     ▼
//!                  grammar::{of_word, container_size, ingredient_clause, specifics}
//!                     │
//!                     ▼
//!                  resolve::container_unit  (only when no prefix matched)
//!                  resolve::resolve_amount
//!                  cleanup::clean_ingredient
//!                     │
//!                     ▼
//!                  RunResult { ParseResult, ParseDetails }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `cursor.rs`: byte cursor with cheap save/restore for backtracking.
//! - `grammar.rs`: the productions (fraction, amount, range, container size,
//!   ingredient clause, specifics). Each consumes from the front and leaves
//!   the cursor alone on failure.
//! - `resolve.rs`: numeric resolution and the ordered unit-resolution passes.
//! - `cleanup.rs`: the single-character ingredient cleanup.
//! - `parser.rs`: orchestration, the backtracking retry, and the
//!   [`Productions`] trace.
//!
//! ## Debugging
//!
//! The parser emits `tracing` events: `trace` per production and per
//! resolution pass, `debug` for the final segmentation. Install any
//! subscriber to see them.

#[path = "engine/cleanup.rs"]
mod cleanup;
#[path = "engine/cursor.rs"]
mod cursor;
#[path = "engine/grammar.rs"]
mod grammar;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/resolve.rs"]
mod resolve;
#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub(crate) use parser::Parser;
pub use parser::Productions;
pub use resolve::UnitPass;
