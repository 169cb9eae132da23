//! Fluent SELECT statement builder.
//!
//! ## Design
//!
//! - Output is an explicit SQL string; values are rendered verbatim with
//!   no quoting, escaping, or identifier validation.
//! - Mutators return `&mut Self` so calls chain; rendering is a pure read
//!   and may be repeated.
//! - WHERE conditions live in an ordered map, so rendered clauses are
//!   always in ascending key order and a repeated key keeps only the
//!   latest value.

pub mod select;

pub use select::QueryBuilder;
