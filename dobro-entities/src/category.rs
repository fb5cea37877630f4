/// A named category within one of the portal's category namespaces.
///
/// Organizations and events each have their own namespace; names are
/// unique within a namespace.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id          : i64,
    pub name        : String,
    pub description : Option<String>,
}

/// The two category namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Organization,
    Event,
}
