//! Typed bind arguments for dynamically assembled queries.

use sqlx::query::{QueryAs, QueryScalar};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

/// A value queued for binding. The builder only ever produces text filters and
/// integer limits, so two variants cover the whole surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Text(String),
    Int(i64),
}

/// A query string plus its bind values, in placeholder order.
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Arg>,
}

impl QueryBuf {
    pub(crate) fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    pub(crate) fn push_param(&mut self, arg: Arg) {
        self.params.push(arg);
    }

    /// Bind all params onto a row-mapped query.
    pub fn query_as<O>(&self) -> QueryAs<'_, Sqlite, O, SqliteArguments<'_>>
    where
        O: for<'r> FromRow<'r, SqliteRow>,
    {
        let mut q = sqlx::query_as(&self.sql);
        for p in &self.params {
            q = match p {
                Arg::Text(s) => q.bind(s.as_str()),
                Arg::Int(n) => q.bind(*n),
            };
        }
        q
    }

    /// Bind all params onto a single-column query (COUNT and friends).
    pub fn query_scalar<O>(&self) -> QueryScalar<'_, Sqlite, O, SqliteArguments<'_>>
    where
        (O,): for<'r> FromRow<'r, SqliteRow>,
    {
        let mut q = sqlx::query_scalar(&self.sql);
        for p in &self.params {
            q = match p {
                Arg::Text(s) => q.bind(s.as_str()),
                Arg::Int(n) => q.bind(*n),
            };
        }
        q
    }
}
