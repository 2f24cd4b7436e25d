//! Base64-encoded compact-JSON codec for movie state.
//!
//! Wire format: `base64(utf8(compact_json(movie)))` with the standard
//! base64 alphabet and padding. The JSON text carries no type metadata
//! and omits fields holding no value; callers needing versioning,
//! framing, or checksums must add them on top.

mod codec;
mod error;
mod movie;

pub use codec::MovieCodec;
pub use error::CodecError;
pub use movie::{Movie, Release};
