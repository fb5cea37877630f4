use crate::{geo::MapPoint, time::Timestamp};

/// A registered non-profit organization (NKO).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id          : i64,
    pub name        : String,
    pub description : Option<String>,
    pub logo        : Option<String>,
    pub address     : String,
    pub city_id     : i64,
    pub pos         : MapPoint,
    // Arbitrary key/value metadata as a JSON document.
    pub meta        : Option<String>,
    pub created_at  : Timestamp,
}
