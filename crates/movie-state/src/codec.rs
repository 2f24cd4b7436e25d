//! Movie state codec: compact JSON wrapped in standard base64.

use base64::alphabet;
use base64::engine::{self, Engine};

use crate::error::CodecError;
use crate::movie::Movie;

/// Two-way converter between a [`Movie`] and its base64 wire string.
///
/// The fixed configuration (standard alphabet with padding, compact
/// JSON, no type tags, absent fields omitted) is established once at
/// construction; the codec holds no mutable state afterwards, so a
/// single instance may be shared across threads freely.
pub struct MovieCodec {
    engine: engine::GeneralPurpose,
}

impl Default for MovieCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieCodec {
    pub fn new() -> Self {
        Self {
            engine: engine::GeneralPurpose::new(
                &alphabet::STANDARD,
                engine::general_purpose::PAD,
            ),
        }
    }

    /// Serializes the movie to compact JSON and base64-encodes the
    /// UTF-8 bytes of that text.
    ///
    /// Absent optional fields produce no key in the JSON; present
    /// fields round-trip losslessly through [`Self::deserialize`].
    pub fn serialize(&self, movie: &Movie) -> Result<String, CodecError> {
        let json = serde_json::to_string(movie)?;
        Ok(self.engine.encode(json.as_bytes()))
    }

    /// Recreates a [`Movie`] from a base64-encoded JSON string.
    ///
    /// A payload that parses to top-level JSON `null` is rejected as
    /// [`CodecError::NullMovie`] rather than returned as a defaulted
    /// movie.
    pub fn deserialize(&self, encoded: &str) -> Result<Movie, CodecError> {
        if encoded.trim().is_empty() {
            return Err(CodecError::EmptyInput);
        }
        let bytes = self.engine.decode(encoded)?;
        let json = String::from_utf8(bytes)?;
        match serde_json::from_str::<Option<Movie>>(&json)? {
            Some(movie) => Ok(movie),
            None => Err(CodecError::NullMovie),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inception_example_wire_bytes_are_exact() {
        let codec = MovieCodec::new();
        let movie = Movie {
            title: "Inception".to_string(),
            year: 2010,
            genre: None,
            director: None,
            rating: None,
            runtime_minutes: None,
            cast: None,
            release: None,
        };
        let encoded = codec.serialize(&movie).unwrap();
        let decoded_bytes = {
            use base64::Engine as _;
            base64::engine::general_purpose::STANDARD
                .decode(&encoded)
                .unwrap()
        };
        assert_eq!(decoded_bytes, br#"{"title":"Inception","year":2010}"#);

        let back = codec.deserialize(&encoded).unwrap();
        assert_eq!(back, movie);
        assert_eq!(back.rating, None);
    }
}
