//! Example demonstrating the fluent SELECT builder.
//!
//! Run with:
//!   cargo run --example select_builder -p selq

use selq::{QueryBuilder, QueryResult};

fn main() -> QueryResult<()> {
    let mut qb = QueryBuilder::new();
    qb.add_column("name").add_column("phone");
    qb.add_from("students");
    qb.add_where("id", "42").add_where("name", "John");

    let sql = qb.build_query()?;
    println!("{sql}");

    assert_eq!(
        sql,
        "SELECT name, phone FROM students WHERE id=42 AND name=John;"
    );

    // No columns added: the builder falls back to `*`.
    let mut all = QueryBuilder::new();
    all.add_from("students");
    println!("{}", all.build_query()?);

    Ok(())
}
