//! # selq
//!
//! A small fluent builder for SQL `SELECT` statements.
//!
//! ## Features
//!
//! - **SQL explicit**: the output is a plain statement string
//! - **Fluent chaining**: mutators return `&mut Self`
//! - **Deterministic WHERE**: conditions render in ascending key order,
//!   and a repeated key keeps only the latest value
//! - **No magic**: values are rendered verbatim; no quoting, escaping,
//!   or identifier validation is applied
//!
//! ## Usage
//!
//! ```
//! use selq::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new();
//! qb.add_column("name").add_column("phone");
//! qb.add_from("students");
//! qb.add_where("id", "42").add_where("name", "John");
//!
//! assert_eq!(
//!     qb.build_query().unwrap(),
//!     "SELECT name, phone FROM students WHERE id=42 AND name=John;"
//! );
//! ```
//!
//! The sole failure mode is rendering without a table:
//!
//! ```
//! use selq::{QueryBuilder, QueryError};
//!
//! let qb = QueryBuilder::new();
//! assert_eq!(qb.build_query(), Err(QueryError::MissingTable));
//! ```

pub mod builder;
pub mod error;

pub use builder::QueryBuilder;
pub use error::{QueryError, QueryResult};
