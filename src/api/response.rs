//! Response classification and decoding.
//!
//! Every web request result is judged the same way regardless of operation:
//! a status outside `200..=299` is a failure. List and create additionally
//! require the body to be a JSON array of `{id, name}` records, since both
//! answer with the complete collection. Delete never reads its body.

use crate::domain::{Pokemon, PokemonError, Result};

/// Returns `Ok(())` for a 2xx status.
///
/// # Errors
///
/// Returns [`PokemonError::Http`] for any other status.
pub fn ensure_success(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(PokemonError::Http { status })
    }
}

/// Decodes a collection response body after checking its status.
///
/// # Errors
///
/// Returns [`PokemonError::Http`] for a non-2xx status and
/// [`PokemonError::Decode`] if the body is not a JSON array of Pokemon.
///
/// # Example
///
/// ```rust
/// use pokemon_manager::api::decode_collection;
/// use pokemon_manager::domain::Pokemon;
///
/// let list = decode_collection(200, br#"[{"id":1,"name":"Pikachu"}]"#)?;
/// assert_eq!(list, vec![Pokemon::new(1, "Pikachu")]);
/// # Ok::<(), pokemon_manager::PokemonError>(())
/// ```
pub fn decode_collection(status: u16, body: &[u8]) -> Result<Vec<Pokemon>> {
    ensure_success(status)?;
    serde_json::from_slice(body)
        .map_err(|e| PokemonError::Decode(format!("expected a JSON array of pokemon: {e}")))
}
