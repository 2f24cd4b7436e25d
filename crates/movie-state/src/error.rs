use thiserror::Error;

/// Failures surfaced by [`crate::MovieCodec`].
///
/// Every error is detected immediately and returned synchronously; no
/// variant represents a partial result. Both codec operations are
/// deterministic, so retrying with unchanged input never helps.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Deserialize was handed an empty or whitespace-only string.
    #[error("encoded movie is empty or whitespace only")]
    EmptyInput,
    /// The encoded string is not valid standard base64.
    #[error("encoded movie is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The base64-decoded bytes are not valid UTF-8 text.
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The payload text is not valid JSON or does not match the movie
    /// shape (wrong types for known fields included).
    #[error("payload is not valid movie JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload parsed cleanly but to no value at all (top-level
    /// JSON `null`). Distinguished from a malformed payload so callers
    /// never receive a silently defaulted movie.
    #[error("payload deserialized to no movie value")]
    NullMovie,
}
