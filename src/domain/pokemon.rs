//! Pokemon domain model.
//!
//! A [`Pokemon`] is the single entity the plugin manages. Its identifier is
//! assigned by the backend and treated as opaque: the plugin never generates,
//! parses, or orders ids, it only compares them and echoes them back in delete
//! paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned identifier of a [`Pokemon`].
///
/// Backends in the wild hand out either numeric or string ids, so both JSON
/// shapes are accepted. The variant is preserved so the id renders back into a
/// URL exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonId {
    /// A JSON number id, e.g. `1`.
    Number(i64),
    /// A JSON string id, e.g. `"a1b2"`.
    Text(String),
    /// Any other JSON number, e.g. `1.0` or an integer past `i64::MAX`.
    /// Kept as the backend wrote it.
    Wide(serde_json::Number),
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Wide(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for PokemonId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PokemonId {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for PokemonId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A named record stored by the backend.
///
/// The name is only ever replaced by backend responses; the plugin has no
/// local rename operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
}

impl Pokemon {
    /// Creates a Pokemon record.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokemon_manager::domain::{Pokemon, PokemonId};
    ///
    /// let pikachu = Pokemon::new(1, "Pikachu");
    /// assert_eq!(pikachu.id, PokemonId::Number(1));
    /// assert_eq!(pikachu.name, "Pikachu");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<PokemonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_and_string_ids() {
        let list: Vec<Pokemon> =
            serde_json::from_str(r#"[{"id":1,"name":"Pikachu"},{"id":"x9","name":"Eevee"}]"#)
                .unwrap();

        assert_eq!(list[0].id, PokemonId::Number(1));
        assert_eq!(list[1].id, PokemonId::Text("x9".to_string()));
    }

    #[test]
    fn ids_outside_i64_still_decode() {
        let list: Vec<Pokemon> = serde_json::from_str(
            r#"[{"id":18446744073709551615,"name":"Mewtwo"},{"id":2.5,"name":"Ditto"}]"#,
        )
        .unwrap();

        assert!(matches!(list[0].id, PokemonId::Wide(_)));
        assert_eq!(list[0].id.to_string(), "18446744073709551615");
        assert_eq!(list[1].id.to_string(), "2.5");
    }

    #[test]
    fn ignores_extra_backend_fields() {
        let p: Pokemon =
            serde_json::from_str(r#"{"id":7,"name":"Squirtle","type":"water"}"#).unwrap();
        assert_eq!(p, Pokemon::new(7, "Squirtle"));
    }

    #[test]
    fn id_displays_verbatim() {
        assert_eq!(PokemonId::Number(42).to_string(), "42");
        assert_eq!(PokemonId::from("abc-1").to_string(), "abc-1");
    }
}
