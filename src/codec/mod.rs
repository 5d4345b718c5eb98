mod location_codec;
mod reading_deserializer;

pub use location_codec::{decode, encode, DecodeError, Payload};
