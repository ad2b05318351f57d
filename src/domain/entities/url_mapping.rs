//! URL mapping entity: a unique alias pointing at a target URL.

/// A stored alias → target mapping.
///
/// `id` is the surrogate key assigned by the store; it is never exposed
/// over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub target: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: String, target: String) -> Self {
        Self { id, alias, target }
    }
}
