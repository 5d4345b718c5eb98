mod dictionary;
mod error_object;
mod location;

pub use dictionary::{Dictionary, NotAnObjectError};
pub use error_object::error_object;
pub use location::LocationRecord;
