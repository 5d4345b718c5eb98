//! Conversion between location payloads, typed location records and the key/value dictionaries passed across
//! a scripting/native boundary.

pub mod app_config;
pub mod bridge;
pub mod codec;
pub mod domain;
mod extensions;
pub mod payload_loader;
pub mod remote;

pub use codec::{decode, encode, DecodeError, Payload};
pub use domain::{Dictionary, LocationRecord};
