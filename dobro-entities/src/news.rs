use crate::time::Timestamp;

/// A news entry, optionally scoped to a single city.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id          : i64,
    pub title       : String,
    pub description : Option<String>,
    pub image       : Option<String>,
    // A missing city means the entry is shown portal-wide.
    pub city_id     : Option<i64>,
    pub created_by  : i64,
    pub approved_by : Option<i64>,
    pub meta        : Option<String>,
    pub created_at  : Timestamp,
}
