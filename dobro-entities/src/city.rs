#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id   : i64,
    pub name : String,
}
