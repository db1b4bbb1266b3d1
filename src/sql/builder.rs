//! Builds the parameterized customer list and count queries.
//!
//! Sort columns and order come from fixed enums; request input is only ever
//! bound as a parameter, never interpolated into the statement.

use crate::error::AppError;
use crate::sql::params::{Arg, QueryBuf};

/// Columns the list endpoint may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    FirstName,
    LastName,
    PhoneNumber,
    AddressCount,
}

impl SortColumn {
    /// Parse the `sort_by` query value. Absent means customer id; anything
    /// outside the allowed set is rejected.
    pub fn parse(input: Option<&str>) -> Result<Self, AppError> {
        match input {
            None => Ok(SortColumn::Id),
            Some("id") => Ok(SortColumn::Id),
            Some("first_name") => Ok(SortColumn::FirstName),
            Some("last_name") => Ok(SortColumn::LastName),
            Some("phone_number") => Ok(SortColumn::PhoneNumber),
            Some("address_count") => Ok(SortColumn::AddressCount),
            Some(other) => Err(AppError::Validation(format!(
                "Invalid sort column: {}",
                other
            ))),
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Id => "c.id",
            SortColumn::FirstName => "c.first_name",
            SortColumn::LastName => "c.last_name",
            SortColumn::PhoneNumber => "c.phone_number",
            SortColumn::AddressCount => "address_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(input: Option<&str>) -> Result<Self, AppError> {
        match input {
            None => Ok(SortOrder::Asc),
            Some(s) if s.eq_ignore_ascii_case("asc") => Ok(SortOrder::Asc),
            Some(s) if s.eq_ignore_ascii_case("desc") => Ok(SortOrder::Desc),
            Some(other) => Err(AppError::Validation(format!(
                "Invalid sort order: {}",
                other
            ))),
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Optional list filters. City/state/pin match exactly against any owned
/// address; search is a substring match across name, phone, and address fields.
#[derive(Debug, Default, Clone)]
pub struct CustomerFilter {
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub search: Option<String>,
}

const SEARCH_COLUMNS: &[&str] = &[
    "c.first_name",
    "c.last_name",
    "c.phone_number",
    "a.address_details",
    "a.city",
    "a.state",
    "a.pin_code",
];

const FROM_CLAUSE: &str = "FROM customers c LEFT JOIN addresses a ON c.id = a.customer_id";

/// Appends WHERE conditions for the filter, pushing bind values in clause order.
/// SQLite's LIKE is case-insensitive, which is exactly the search contract.
fn where_clause(filter: &CustomerFilter, q: &mut QueryBuf) -> String {
    let mut conditions: Vec<String> = Vec::new();
    if let Some(city) = &filter.city {
        conditions.push("a.city = ?".into());
        q.push_param(Arg::Text(city.clone()));
    }
    if let Some(state) = &filter.state {
        conditions.push("a.state = ?".into());
        q.push_param(Arg::Text(state.clone()));
    }
    if let Some(pin) = &filter.pin_code {
        conditions.push("a.pin_code = ?".into());
        q.push_param(Arg::Text(pin.clone()));
    }
    if let Some(term) = &filter.search {
        let like = format!("%{}%", term);
        let parts: Vec<String> = SEARCH_COLUMNS
            .iter()
            .map(|col| {
                q.push_param(Arg::Text(like.clone()));
                format!("{} LIKE ?", col)
            })
            .collect();
        conditions.push(format!("({})", parts.join(" OR ")));
    }
    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

/// One page of the customer list, each row carrying its owned address count.
pub fn customer_list(
    filter: &CustomerFilter,
    sort: SortColumn,
    order: SortOrder,
    limit: i64,
    offset: i64,
) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(filter, &mut q);
    q.sql = format!(
        "SELECT c.id, c.first_name, c.last_name, c.phone_number, c.only_one_address, \
         COUNT(a.id) AS address_count {}{} GROUP BY c.id ORDER BY {} {} LIMIT ? OFFSET ?",
        FROM_CLAUSE,
        where_sql,
        sort.as_sql(),
        order.as_sql()
    );
    q.push_param(Arg::Int(limit));
    q.push_param(Arg::Int(offset));
    q
}

/// True total of customers matching the filter, independent of the page window.
pub fn customer_count(filter: &CustomerFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let where_sql = where_clause(filter, &mut q);
    q.sql = format!("SELECT COUNT(DISTINCT c.id) {}{}", FROM_CLAUSE, where_sql);
    q
}
