//! Backend URL construction.

use crate::domain::PokemonId;

/// Path of the Pokemon collection on the backend.
const COLLECTION_PATH: &str = "/pokemon";

/// Base URL of the REST backend with helpers for the two resource paths.
///
/// # Example
///
/// ```rust
/// use pokemon_manager::api::Endpoint;
/// use pokemon_manager::domain::PokemonId;
///
/// let endpoint = Endpoint::new("http://localhost:3000/");
/// assert_eq!(endpoint.collection_url(), "http://localhost:3000/pokemon");
/// assert_eq!(endpoint.item_url(&PokemonId::Number(7)), "http://localhost:3000/pokemon/7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    /// Creates an endpoint rooted at `base_url`. Trailing slashes are trimmed.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the whole collection, used by list and create.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}", self.base_url)
    }

    /// URL of a single record, used by delete.
    #[must_use]
    pub fn item_url(&self, id: &PokemonId) -> String {
        format!("{}{COLLECTION_PATH}/{id}", self.base_url)
    }
}
