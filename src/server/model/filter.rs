//! Query-string filters shared by the list endpoints.
//!
//! List endpoints receive their query string as raw `(key, value)` pairs so that repeated
//! keys such as `sort` keep their order. Each domain builds its own filter on top of the
//! pagination and sort parsing defined here.

/// Page size used when the request does not specify one.
pub const DEFAULT_LIMIT: u64 = 30;
/// Largest page size a client may request.
pub const MAX_LIMIT: u64 = 100;
/// Largest row offset; database drivers bind offsets as signed 64-bit integers.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Raw query pairs as extracted by `Query<Vec<(String, String)>>`.
pub type QueryPairs = [(String, String)];

/// Returns the last non-blank value for `key`.
pub fn query_value<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, v)| k == key && !v.trim().is_empty())
        .map(|(_, v)| v.trim())
}

/// Returns every value for `key` in request order.
pub fn query_values<'a>(pairs: &'a QueryPairs, key: &'a str) -> impl Iterator<Item = &'a str> {
    pairs
        .iter()
        .filter(move |(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn into_order(self) -> sea_orm::Order {
        match self {
            Self::Asc => sea_orm::Order::Asc,
            Self::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Parses repeated `sort=field,direction` values.
///
/// `field_of` maps a column name to the domain's sort field; unknown names are skipped.
/// The direction defaults to ascending and is matched case-insensitively.
pub fn parse_sort<F, T>(pairs: &QueryPairs, field_of: F) -> Vec<(T, SortDirection)>
where
    F: Fn(&str) -> Option<T>,
    T: PartialEq,
{
    let mut sorts: Vec<(T, SortDirection)> = Vec::new();

    for raw in query_values(pairs, "sort") {
        let mut parts = raw.splitn(2, ',');
        let name = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            Some(d) if d == "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        if let Some(field) = field_of(&name) {
            // A field sorted twice keeps its first position
            if !sorts.iter().any(|(existing, _)| *existing == field) {
                sorts.push((field, direction));
            }
        }
    }

    sorts
}

/// Offset pagination derived from `page`, `limit` (alias `size`) and `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Parses pagination from query pairs.
    ///
    /// Unparseable numbers fall back to their defaults. An explicit `offset` takes
    /// precedence over `page`; the reported page is then derived from the offset. Offsets are
    /// clamped to `MAX_OFFSET` and pages to the last page that offset allows.
    pub fn from_query(pairs: &QueryPairs) -> Self {
        let limit = query_value(pairs, "limit")
            .or_else(|| query_value(pairs, "size"))
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT);

        let explicit_offset = query_value(pairs, "offset")
            .and_then(|v| v.parse::<u64>().ok())
            .map(|offset| offset.min(MAX_OFFSET));

        match explicit_offset {
            Some(offset) => Self {
                page: offset / limit + 1,
                limit,
                offset,
            },
            None => {
                let page = query_value(pairs, "page")
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(1)
                    .clamp(1, MAX_OFFSET / limit + 1);

                Self {
                    page,
                    limit,
                    offset: (page - 1) * limit,
                }
            }
        }
    }
}
