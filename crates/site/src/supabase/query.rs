//! Table names and the select-query builder.

use core::fmt;

use serde_json::Value;

/// Backend tables the site reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    MenuItems,
    TeamMembers,
    ContactMessages,
}

impl Table {
    /// Table name as exposed by PostgREST.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MenuItems => "menu_items",
            Self::TeamMembers => "team_members",
            Self::ContactMessages => "contact_messages",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for one ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Equality constraint on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

/// One ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub column: String,
    pub direction: Direction,
}

/// A `select *` query against one table.
///
/// Orderings apply in the order they were added; rows that tie on every key
/// keep the backend's native row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: Table,
    pub filters: Vec<Filter>,
    pub orderings: Vec<Ordering>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub const fn from(table: Table) -> Self {
        Self {
            table,
            filters: Vec::new(),
            orderings: Vec::new(),
            limit: None,
        }
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            column: column.to_owned(),
            value: value.into(),
        });
        self
    }

    /// Append an ordering key.
    #[must_use]
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.orderings.push(Ordering {
            column: column.to_owned(),
            direction,
        });
        self
    }

    /// Return at most `n` rows.
    #[must_use]
    pub const fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// PostgREST query-string parameters for this query.
    ///
    /// Values are left unencoded; the HTTP client encodes them.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_owned(), "*".to_owned())];

        for filter in &self.filters {
            let operand = match &filter.value {
                Value::Null => "is.null".to_owned(),
                Value::String(s) => format!("eq.{s}"),
                other => format!("eq.{other}"),
            };
            params.push((filter.column.clone(), operand));
        }

        if !self.orderings.is_empty() {
            let order = self
                .orderings
                .iter()
                .map(|o| format!("{}.{}", o.column, o.direction.as_str()))
                .collect::<Vec<_>>()
                .join(",");
            params.push(("order".to_owned(), order));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }

        params
    }
}
