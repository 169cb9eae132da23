use std::collections::BTreeMap;

use crate::error::{QueryError, QueryResult};

/// Structured SELECT statement builder.
///
/// Accumulates columns, a table, and equality WHERE conditions through
/// chained mutator calls, then renders them into a single statement
/// string with [`build_query`](QueryBuilder::build_query).
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    /// SELECT columns, in insertion order (empty means `*`)
    columns: Vec<String>,
    /// Main table name (empty means unset)
    table: String,
    /// Equality WHERE conditions, keyed by column; iterated in key order
    conditions: BTreeMap<String, String>,
}

impl QueryBuilder {
    /// Create a new, empty query builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one SELECT column.
    ///
    /// No validation is applied: duplicates and empty strings are kept
    /// and rendered verbatim.
    pub fn add_column(&mut self, name: &str) -> &mut Self {
        self.columns.push(name.to_string());
        self
    }

    /// Append multiple SELECT columns.
    pub fn add_columns(&mut self, names: &[&str]) -> &mut Self {
        for name in names {
            self.add_column(name);
        }
        self
    }

    /// Set the FROM table, overwriting any previous value.
    pub fn add_from(&mut self, table: &str) -> &mut Self {
        self.table = table.to_string();
        self
    }

    /// Add an equality WHERE condition.
    ///
    /// Adding a key that is already present overwrites its value; each
    /// key appears at most once in the rendered statement.
    pub fn add_where(&mut self, key: &str, value: &str) -> &mut Self {
        self.conditions.insert(key.to_string(), value.to_string());
        self
    }

    /// Render the accumulated state into a SELECT statement.
    ///
    /// Fails with [`QueryError::MissingTable`] if no table has been set.
    /// Does not mutate the builder; repeated calls render the current
    /// state each time.
    ///
    /// Columns render in insertion order (or `*` when none were added);
    /// conditions render as `key=value` in ascending key order joined by
    /// ` AND `. Values are inserted verbatim, with no quoting or escaping.
    pub fn build_query(&self) -> QueryResult<String> {
        if self.table.is_empty() {
            return Err(QueryError::MissingTable);
        }

        let mut sql = String::from("SELECT ");

        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.columns.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            let clauses: Vec<String> = self
                .conditions
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            sql.push_str(&clauses.join(" AND "));
        }

        sql.push(';');

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "selq.sql",
            sql = %sql,
            columns = self.columns.len(),
            conditions = self.conditions.len(),
        );

        Ok(sql)
    }
}
